use serde::{Deserialize, Serialize};

use crate::curve::{CubicBezierCurve, Curve, QuadraticBezierCurve};
use crate::error::{TrackError, ensure_count, ensure_positive};
use crate::math::Vec3;

/// Upper bound on the number of points a generated path may have
pub const MAX_PATH_POINTS: usize = 100_000;

fn default_samples() -> usize {
    100
}

/// Where the track's raw path comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSource {
    /// Explicit list of `[x, y, z]` points
    Points { points: Vec<[f64; 3]> },
    Helix(HelixPath),
    /// Quadratic Bezier sampled at equal arc-length steps
    QuadraticBezier {
        start: [f64; 3],
        control: [f64; 3],
        end: [f64; 3],
        #[serde(default = "default_samples")]
        samples: usize,
    },
    /// Cubic Bezier sampled at equal arc-length steps
    CubicBezier {
        start: [f64; 3],
        control1: [f64; 3],
        control2: [f64; 3],
        end: [f64; 3],
        #[serde(default = "default_samples")]
        samples: usize,
    },
}

impl PathSource {
    /// Produce the raw path points
    pub fn generate(&self) -> Result<Vec<Vec3>, TrackError> {
        match self {
            PathSource::Points { points } => Ok(points.iter().copied().map(Vec3::from).collect()),
            PathSource::Helix(helix) => helix.points(),
            PathSource::QuadraticBezier { start, control, end, samples } => {
                ensure_count("samples", *samples as f64, MAX_PATH_POINTS)?;
                let curve = Curve::new(QuadraticBezierCurve::new(
                    Vec3::from(*start),
                    Vec3::from(*control),
                    Vec3::from(*end),
                ));
                Ok(curve.spaced_points(*samples))
            }
            PathSource::CubicBezier { start, control1, control2, end, samples } => {
                ensure_count("samples", *samples as f64, MAX_PATH_POINTS)?;
                let curve = Curve::new(CubicBezierCurve::new(
                    Vec3::from(*start),
                    Vec3::from(*control1),
                    Vec3::from(*control2),
                    Vec3::from(*end),
                ));
                Ok(curve.spaced_points(*samples))
            }
        }
    }
}

impl Default for PathSource {
    fn default() -> Self {
        PathSource::Helix(HelixPath::default())
    }
}

/// Rising spiral around the Y axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixPath {
    pub radius: f64,
    pub turns: f64,
    /// Angle between consecutive points, in degrees
    pub step_degrees: f64,
    /// Height gained per point
    pub rise_per_step: f64,
    pub start_height: f64,
}

impl Default for HelixPath {
    fn default() -> Self {
        Self {
            radius: 50.0,
            turns: 5.0,
            step_degrees: 30.0,
            rise_per_step: 1.0,
            start_height: 0.0,
        }
    }
}

impl HelixPath {
    /// One point per step while the swept angle stays below `turns` full circles
    pub fn points(&self) -> Result<Vec<Vec3>, TrackError> {
        ensure_positive("radius", self.radius)?;
        ensure_positive("turns", self.turns)?;
        ensure_positive("step_degrees", self.step_degrees)?;
        let offsets = [("rise_per_step", self.rise_per_step), ("start_height", self.start_height)];
        for (name, value) in offsets {
            if !value.is_finite() {
                return Err(TrackError::InvalidParameter { name, value });
            }
        }

        let total = 360.0 * self.turns;
        let count = (total / self.step_degrees).ceil();
        ensure_count("point_count", count, MAX_PATH_POINTS)?;
        let count = count as usize;

        Ok((0..count)
            .map(|i| {
                let angle = (i as f64 * self.step_degrees).to_radians();
                Vec3::new(
                    angle.cos() * self.radius,
                    self.start_height + i as f64 * self.rise_per_step,
                    angle.sin() * self.radius,
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_helix() {
        let points = HelixPath::default().points().unwrap();
        // 5 turns at 30 degrees per point
        assert_eq!(points.len(), 60);
        assert!(points[0].distance(&Vec3::new(50.0, 0.0, 0.0)) < 1e-12);
        assert!((points[3].z - 50.0).abs() < 1e-9);
        assert_eq!(points[59].y, 59.0);
    }

    #[test]
    fn test_partial_turn_rounds_up() {
        let helix = HelixPath { turns: 0.5, step_degrees: 50.0, ..Default::default() };
        // 0, 50, 100, 150 are all below 180
        assert_eq!(helix.points().unwrap().len(), 4);
    }

    #[test]
    fn test_helix_rejects_zero_step() {
        let helix = HelixPath { step_degrees: 0.0, ..Default::default() };
        assert!(matches!(
            helix.points(),
            Err(TrackError::InvalidParameter { name: "step_degrees", .. })
        ));
    }

    #[test]
    fn test_helix_rejects_huge_point_count() {
        let helix = HelixPath { step_degrees: 1e-300, ..Default::default() };
        assert!(matches!(
            helix.points(),
            Err(TrackError::InvalidParameter { name: "point_count", .. })
        ));

        let helix = HelixPath { turns: 1e300, ..Default::default() };
        assert!(helix.points().is_err());
    }

    #[test]
    fn test_bezier_rejects_huge_sample_count() {
        let source = PathSource::CubicBezier {
            start: [0.0, 0.0, 0.0],
            control1: [1.0, 0.0, 0.0],
            control2: [1.0, 1.0, 0.0],
            end: [0.0, 1.0, 0.0],
            samples: usize::MAX,
        };
        assert!(matches!(
            source.generate(),
            Err(TrackError::InvalidParameter { name: "samples", .. })
        ));
    }

    #[test]
    fn test_bezier_source_is_spaced() {
        let source = PathSource::QuadraticBezier {
            start: [0.0, 0.0, 0.0],
            control: [0.0, 10.0, 250.0],
            end: [0.0, 0.0, 500.0],
            samples: 100,
        };
        let points = source.generate().unwrap();
        assert_eq!(points.len(), 101);
        assert_eq!(points[0], Vec3::ZERO);
        assert!(points[100].distance(&Vec3::new(0.0, 0.0, 500.0)) < 1e-9);
    }

    #[test]
    fn test_points_source() {
        let source = PathSource::Points { points: vec![[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]] };
        assert_eq!(source.generate().unwrap()[1], Vec3::new(1.0, 2.0, 3.0));
    }
}
