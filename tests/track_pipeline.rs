use ribbon_track::animation::{Easing, Tween, ease};
use ribbon_track::camera::{CameraFollow, NodeTransform};
use ribbon_track::config::TrackConfig;
use ribbon_track::math::Vec3;
use ribbon_track::mesh::{BufferStore, MeshBuffers, MeshUploader, RibbonBuilder, RibbonParams};
use ribbon_track::{Rig, TrackError};

const DEMO_HELIX: &str = r#"
path:
  kind: helix
  radius: 50
  turns: 5
  step_degrees: 30
  rise_per_step: 1
ribbon:
  segments: 500
  width: 5
  height: 2
"#;

const DEMO_BEZIER: &str = r#"
path:
  kind: quadratic_bezier
  start: [0, 0, 0]
  control: [0, 10, 250]
  end: [0, 0, 500]
  samples: 100
ribbon:
  segments: 500
  width: 5
  height: 2
  head_angle: 0
  tail_angle: 30
"#;

/// Counts uploads and remembers the last buffers
#[derive(Default)]
struct RecordingUploader {
    uploads: usize,
    last: Option<MeshBuffers>,
}

impl MeshUploader for RecordingUploader {
    type Handle = usize;

    fn upload(&mut self, buffers: MeshBuffers) -> usize {
        self.uploads += 1;
        self.last = Some(buffers);
        self.uploads
    }
}

#[test]
fn test_helix_scene() {
    let track = TrackConfig::from_yaml(DEMO_HELIX).unwrap().build().unwrap();
    let mut uploader = RecordingUploader::default();
    let handle = track.upload(&mut uploader);
    assert_eq!(handle, 1);

    let buffers = uploader.last.unwrap();
    assert_eq!(buffers.triangle_count(), (503 - 1) * 2 * 3);
    assert_eq!(buffers.positions.len(), buffers.normals.len());
    assert!(buffers.positions.iter().all(|v| v.is_finite()));
    for n in buffers.normals.chunks_exact(3) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_bezier_scene_camera_ride() {
    let config = TrackConfig::from_yaml(DEMO_BEZIER).unwrap();
    let track = config.build().unwrap();
    let length = track.curve.length();
    assert!(length > 500.0 && length < 501.0, "length {}", length);

    let mut follow = CameraFollow::new(track.curve.clone(), config.camera).unwrap();
    let mut camera = NodeTransform::default();

    // 60 fps at 10 units per second
    let mut frames = 0;
    while !follow.is_finished() {
        follow.update(1.0 / 60.0, &mut camera);
        frames += 1;
        assert!(frames < 10_000, "camera never reached the end");
    }
    assert!((follow.distance() - length).abs() < 10.0 / 60.0 + 1e-9);
    assert!(camera.position.is_finite());

    // Camera looks back toward the start
    assert!(camera.forward().z < -0.99);
}

#[test]
fn test_rig_from_yaml() {
    let mut rig = Rig::from_yaml(DEMO_HELIX).unwrap();
    let start = rig.camera().position;
    for _ in 0..120 {
        rig.update(1.0 / 60.0);
    }
    assert!(rig.follow().progress() > 0.0);
    assert!(rig.camera().position.distance(&start) > 1.0);
    assert_eq!(rig.buffers().map(|b| b.triangle_count()), Some(502 * 6));
}

#[test]
fn test_failed_build_uploads_nothing() {
    let mut store = BufferStore::new();
    let builder = RibbonBuilder::new(RibbonParams::default());

    let result = builder.build(&[Vec3::new(1.0, 1.0, 1.0)]).map(|track| track.upload(&mut store));
    assert_eq!(result.unwrap_err(), TrackError::PathTooShort { len: 1 });
    assert!(store.is_empty());
}

#[test]
fn test_tween_completes_once() {
    use std::cell::Cell;
    use std::rc::Rc;

    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    let mut tween = Tween::new(0.0, 10.0, 5.0).on_complete(move || counter.set(counter.get() + 1));

    tween.update(5.0);
    assert_eq!(tween.value(), 10.0);
    assert!(tween.is_complete());
    tween.update(1.0);
    assert_eq!(tween.value(), 10.0);
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_easing_endpoints() {
    for easing in Easing::ALL {
        assert!(ease(0.0, easing).abs() < 1e-12, "{:?} at 0", easing);
        assert!((ease(1.0, easing) - 1.0).abs() < 1e-12, "{:?} at 1", easing);
    }
}
