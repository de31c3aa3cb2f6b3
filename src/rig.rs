use crate::camera::{CameraFollow, NodeTransform};
use crate::config::TrackConfig;
use crate::error::TrackError;
use crate::math::Quat;
use crate::mesh::{BufferStore, MeshBuffers, MeshHandle, RibbonTrack};

/// A built track with a camera riding it
#[derive(Debug)]
pub struct Rig {
    config: TrackConfig,
    track: RibbonTrack,
    store: BufferStore,
    mesh: MeshHandle,
    follow: CameraFollow,
    camera: NodeTransform,
}

impl Rig {
    pub fn from_yaml(yaml: &str) -> Result<Self, TrackError> {
        Self::from_config(TrackConfig::from_yaml(yaml)?)
    }

    /// Build the mesh, upload it and park the camera at the start of the track
    pub fn from_config(config: TrackConfig) -> Result<Self, TrackError> {
        config.validate()?;
        let track = config.build()?;
        let follow = CameraFollow::new(track.curve.clone(), config.camera)?;

        let mut store = BufferStore::new();
        let mesh = track.upload(&mut store);

        let camera = start_pose(&follow);
        Ok(Self { config, track, store, mesh, follow, camera })
    }

    pub fn update(&mut self, dt: f64) {
        self.follow.update(dt, &mut self.camera);
    }

    /// Camera back to the start; the mesh is kept
    pub fn restart(&mut self) {
        self.follow.reset();
        self.camera = start_pose(&self.follow);
    }

    pub fn buffers(&self) -> Option<&MeshBuffers> {
        self.store.get(self.mesh)
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn track(&self) -> &RibbonTrack {
        &self.track
    }

    pub fn follow(&self) -> &CameraFollow {
        &self.follow
    }

    pub fn camera(&self) -> &NodeTransform {
        &self.camera
    }
}

fn start_pose(follow: &CameraFollow) -> NodeTransform {
    let params = follow.params();
    let up = params.up.normalize();
    let curve = follow.curve();
    NodeTransform {
        position: curve.point_at(0.0) + up * params.height_offset,
        rotation: Quat::from_view_up(-curve.tangent_at(0.0), up),
    }
}
