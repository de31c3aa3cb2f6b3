use super::Curve;
use crate::math::{Mat4, Vec3, vec3::EPSILON};

/// Rotation-minimizing frames sampled at `segments + 1` arc-length positions
#[derive(Debug, Clone, PartialEq)]
pub struct FrenetFrames {
    pub tangents: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub binormals: Vec<Vec3>,
}

impl FrenetFrames {
    pub fn len(&self) -> usize {
        self.tangents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tangents.is_empty()
    }
}

impl Curve {
    /// Frames transported along the curve so the normal does not spin.
    ///
    /// For a closed curve the accumulated twist between the first and last
    /// normal is spread evenly over all frames.
    pub fn frenet_frames(&self, segments: usize, closed: bool) -> FrenetFrames {
        let segments = segments.max(1);

        let tangents: Vec<Vec3> = (0..=segments)
            .map(|i| self.tangent_at(i as f64 / segments as f64))
            .collect();

        let mut normals = Vec::with_capacity(segments + 1);
        let mut binormals = Vec::with_capacity(segments + 1);

        let first = initial_normal(tangents[0]);
        normals.push(first);
        binormals.push(tangents[0].cross(&first));

        for i in 1..=segments {
            let mut normal = normals[i - 1];
            let axis = tangents[i - 1].cross(&tangents[i]);
            if axis.length() > EPSILON {
                let theta = tangents[i - 1].dot(&tangents[i]).clamp(-1.0, 1.0).acos();
                normal = Mat4::rotation_axis(axis, theta).transform_direction(normal);
            }
            normals.push(normal);
            binormals.push(tangents[i].cross(&normal));
        }

        if closed {
            let cos = normals[0].dot(&normals[segments]).clamp(-1.0, 1.0);
            let mut theta = cos.acos() / segments as f64;
            if tangents[0].dot(&normals[0].cross(&normals[segments])) > 0.0 {
                theta = -theta;
            }
            for i in 1..=segments {
                normals[i] = Mat4::rotation_axis(tangents[i], theta * i as f64)
                    .transform_direction(normals[i]);
                binormals[i] = tangents[i].cross(&normals[i]);
            }
        }

        FrenetFrames { tangents, normals, binormals }
    }
}

/// Normal perpendicular to `tangent`, seeded from its smallest component axis
fn initial_normal(tangent: Vec3) -> Vec3 {
    let (tx, ty, tz) = (tangent.x.abs(), tangent.y.abs(), tangent.z.abs());

    let mut min = f64::MAX;
    let mut seed = Vec3::ZERO;
    if tx <= min {
        min = tx;
        seed = Vec3::RIGHT;
    }
    if ty <= min {
        min = ty;
        seed = Vec3::UP;
    }
    if tz <= min {
        seed = Vec3::FORWARD;
    }

    let side = tangent.cross(&seed).normalize();
    tangent.cross(&side)
}
