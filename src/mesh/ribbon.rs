use serde::{Deserialize, Serialize};

use crate::animation::{Easing, Tween};
use crate::curve::Curve;
use crate::error::{TrackError, ensure_at_least, ensure_count, ensure_finite, ensure_positive};
use crate::math::Vec3;
use super::section::{SectionFrame, cross_section, track_frames, twist_section};
use super::upload::{MeshBuffers, MeshUploader};

/// Upper bound on `RibbonParams::segments`
pub const MAX_SEGMENTS: usize = 100_000;

/// Parameters for extruding a track along a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonParams {
    /// Number of resampled track segments
    pub segments: usize,
    pub width: f64,
    /// Wall height; 0 gives a flat ribbon
    pub height: f64,
    /// Length of the cap section past the last track point; 0 drops the cap
    pub forward_extension: f64,
    /// Length of the cap section before the first track point; 0 drops the cap
    pub backward_extension: f64,
    /// Twist at the start, in degrees
    pub head_angle: f64,
    /// Twist at the end, in degrees
    pub tail_angle: f64,
    pub twist_easing: Easing,
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self {
            segments: 2,
            width: 1.0,
            height: 0.0,
            forward_extension: 1.0,
            backward_extension: 1.0,
            head_angle: 0.0,
            tail_angle: 0.0,
            twist_easing: Easing::Linear,
        }
    }
}

impl RibbonParams {
    pub fn validate(&self) -> Result<(), TrackError> {
        if self.segments == 0 {
            return Err(TrackError::InvalidParameter { name: "segments", value: 0.0 });
        }
        ensure_count("segments", self.segments as f64, MAX_SEGMENTS)?;
        ensure_positive("width", self.width)?;
        ensure_at_least("height", self.height, 0.0)?;
        ensure_at_least("forward_extension", self.forward_extension, 0.0)?;
        ensure_at_least("backward_extension", self.backward_extension, 0.0)?;
        for (name, angle) in [("head_angle", self.head_angle), ("tail_angle", self.tail_angle)] {
            if !angle.is_finite() {
                return Err(TrackError::InvalidParameter { name, value: angle });
            }
        }
        Ok(())
    }
}

/// Track geometry with one normal per vertex. Vertices are not shared
/// between quads, so every quad has flat shading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RibbonMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    /// Cross-sections the mesh was stitched from, caps included
    pub section_count: usize,
}

impl RibbonMesh {
    /// Positions as flat f32 xyz
    pub fn position_data(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_f32_array()).collect()
    }

    /// Normals as flat f32 xyz
    pub fn normal_data(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_f32_array()).collect()
    }

    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            positions: self.position_data(),
            normals: self.normal_data(),
            indices: self.indices.clone(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Join two equally sized sections edge by edge
    fn stitch(&mut self, a: &[Vec3], b: &[Vec3]) {
        for edge in 0..a.len() - 1 {
            let base = self.positions.len() as u32;
            self.positions.extend_from_slice(&[a[edge], b[edge], b[edge + 1], a[edge + 1]]);
            self.indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }
    }

    /// Area-weighted vertex normals from the triangle list
    fn compute_normals(&mut self) -> Result<(), TrackError> {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (a, b, c) = (self.positions[ia], self.positions[ib], self.positions[ic]);
            let face = (b - a).cross(&(c - a));
            normals[ia] += face;
            normals[ib] += face;
            normals[ic] += face;
        }

        self.normals = normals
            .iter()
            .enumerate()
            .map(|(vertex, n)| n.try_normalize().ok_or(TrackError::DegenerateGeometry { vertex }))
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}

/// A built track: the mesh and the smoothed curve it was extruded along
#[derive(Debug, Clone)]
pub struct RibbonTrack {
    pub mesh: RibbonMesh,
    /// Rail for anything that travels the track
    pub curve: Curve,
}

impl RibbonTrack {
    pub fn upload<U: MeshUploader>(&self, uploader: &mut U) -> U::Handle {
        uploader.upload(self.mesh.to_buffers())
    }
}

/// Extrudes ribbon or channel meshes along a path
pub struct RibbonBuilder {
    params: RibbonParams,
}

impl RibbonBuilder {
    pub fn new(params: RibbonParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RibbonParams {
        &self.params
    }

    /// Smooth `path`, resample it into equal segments and extrude the cross-section.
    pub fn build(&self, path: &[Vec3]) -> Result<RibbonTrack, TrackError> {
        let params = &self.params;
        if path.len() < 2 {
            return Err(TrackError::PathTooShort { len: path.len() });
        }
        ensure_finite(path)?;
        params.validate()?;

        // Two passes of smoothing: once through the raw path, once more
        // through its evenly spaced resample
        let rough = Curve::catmull_rom(path.to_vec())?;
        if rough.length() <= 0.0 {
            return Err(TrackError::DegenerateCurve);
        }
        let curve = Curve::catmull_rom(rough.spaced_points(path.len()))?;
        if curve.length() <= 0.0 {
            return Err(TrackError::DegenerateCurve);
        }
        let track_points = curve.spaced_points(params.segments);

        let sections = self.sections(&track_points)?;
        let mut mesh = RibbonMesh {
            section_count: sections.len(),
            ..Default::default()
        };
        for pair in sections.windows(2) {
            mesh.stitch(&pair[0], &pair[1]);
        }

        if mesh.positions.iter().any(|p| !p.is_finite()) {
            return Err(TrackError::NonFiniteGeometry);
        }
        mesh.compute_normals()?;

        log::debug!(
            "built track: {} sections, {} vertices, {} triangles, length {:.2}",
            mesh.section_count,
            mesh.vertex_count(),
            mesh.triangle_count(),
            curve.length()
        );

        Ok(RibbonTrack { mesh, curve })
    }

    /// Twisted cross-sections at every track point plus the two caps
    fn sections(&self, track_points: &[Vec3]) -> Result<Vec<Vec<Vec3>>, TrackError> {
        let params = &self.params;
        let frames = track_frames(track_points)?;
        let (Some(&first), Some(&last)) = (frames.first(), frames.last()) else {
            return Err(TrackError::PathTooShort { len: track_points.len() });
        };

        let twist =
            Tween::new(params.head_angle, params.tail_angle, 0.0).with_easing(params.twist_easing);
        let section = |frame: SectionFrame, degrees: f64| {
            let mut points = cross_section(&frame, params.width, params.height);
            twist_section(&mut points, &frame, degrees);
            points
        };

        let segments = track_points.len() - 1;
        let mut sections = Vec::with_capacity(track_points.len() + 2);

        if params.backward_extension > 0.0 {
            let center = first.center - first.forward * params.backward_extension;
            sections.push(section(first.at(center), params.head_angle));
        }

        for (i, &point) in track_points.iter().enumerate() {
            // The final track point has no segment ahead, so it keeps the last frame
            let frame = frames.get(i).copied().unwrap_or(last).at(point);
            sections.push(section(frame, twist.value_at(i as f64 / segments as f64)));
        }

        if params.forward_extension > 0.0 {
            let end = track_points[segments];
            let center = end + last.forward * params.forward_extension;
            sections.push(section(last.at(center), params.tail_angle));
        }

        Ok(sections)
    }
}
