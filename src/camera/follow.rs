use serde::{Deserialize, Serialize};

use crate::animation::Sinusoid;
use crate::curve::Curve;
use crate::error::{TrackError, ensure_at_least};
use crate::math::{Quat, Vec3};
use super::transform::Transform;

/// How a camera rides along a track curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowParams {
    /// Travel speed in world units per second
    pub speed: f64,
    /// Fraction of the gap to the target closed each frame
    pub smoothing: f64,
    /// Lift above the curve along `up`
    pub height_offset: f64,
    pub up: Vec3,
    pub bob_amplitude: f64,
    /// Bob phase advance per second (radians)
    pub bob_frequency: f64,
}

impl Default for FollowParams {
    fn default() -> Self {
        Self {
            speed: 10.0,
            smoothing: 0.2,
            height_offset: 0.5,
            up: Vec3::UP,
            bob_amplitude: 0.0,
            bob_frequency: 1.0,
        }
    }
}

impl FollowParams {
    pub fn validate(&self) -> Result<(), TrackError> {
        ensure_at_least("speed", self.speed, 0.0)?;
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(TrackError::InvalidParameter { name: "smoothing", value: self.smoothing });
        }
        for (name, value) in [
            ("height_offset", self.height_offset),
            ("bob_amplitude", self.bob_amplitude),
            ("bob_frequency", self.bob_frequency),
        ] {
            if !value.is_finite() {
                return Err(TrackError::InvalidParameter { name, value });
            }
        }
        if self.up.try_normalize().is_none() {
            return Err(TrackError::InvalidParameter { name: "up", value: self.up.length() });
        }
        Ok(())
    }
}

/// Moves a transform along a curve at constant speed, looking back along the tangent
#[derive(Debug, Clone)]
pub struct CameraFollow {
    curve: Curve,
    params: FollowParams,
    up: Vec3,
    total_length: f64,
    distance: f64,
    bob: Sinusoid,
    finished: bool,
}

impl CameraFollow {
    pub fn new(curve: Curve, params: FollowParams) -> Result<Self, TrackError> {
        params.validate()?;
        let total_length = curve.length();
        if total_length <= 0.0 {
            return Err(TrackError::DegenerateCurve);
        }

        Ok(Self {
            curve,
            up: params.up.normalize(),
            params,
            total_length,
            distance: 0.0,
            bob: Sinusoid::new(params.bob_amplitude, params.bob_frequency, 0.0),
            finished: false,
        })
    }

    /// Advance by `dt` seconds and write the new pose into `transform`.
    /// A non-finite `dt` leaves both untouched.
    pub fn update(&mut self, dt: f64, transform: &mut impl Transform) {
        if !dt.is_finite() {
            log::warn!("ignoring camera update with dt = {}", dt);
            return;
        }
        self.distance += dt * self.params.speed;
        let u = self.progress();

        let point = self.curve.point_at(u);
        let tangent = self.curve.tangent_at(u);
        self.bob.update(dt);

        let target = point + self.up * (self.params.height_offset + self.bob.height());
        let position = transform.position().lerp(&target, self.params.smoothing);
        transform.set_position(position);
        transform.set_rotation(Quat::from_view_up(-tangent, self.up));

        if u >= 1.0 && !self.finished {
            self.finished = true;
            log::debug!("camera reached end of track after {:.2} units", self.total_length);
        }
    }

    /// Normalized arc-length position in [0, 1]
    pub fn progress(&self) -> f64 {
        (self.distance / self.total_length).clamp(0.0, 1.0)
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn params(&self) -> &FollowParams {
        &self.params
    }

    /// Back to the start of the track
    pub fn reset(&mut self) {
        self.distance = 0.0;
        self.finished = false;
        self.bob.reset(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::NodeTransform;

    fn straight_curve() -> Curve {
        Curve::catmull_rom(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)]).unwrap()
    }

    fn snapping() -> FollowParams {
        FollowParams { smoothing: 1.0, ..Default::default() }
    }

    #[test]
    fn test_travels_at_constant_speed() {
        let mut follow = CameraFollow::new(straight_curve(), snapping()).unwrap();
        let mut node = NodeTransform::default();

        follow.update(0.5, &mut node);
        assert!((follow.progress() - 0.5).abs() < 1e-9);
        assert!(node.position.distance(&Vec3::new(0.0, 0.5, 5.0)) < 1e-6);
    }

    #[test]
    fn test_looks_back_along_tangent() {
        let mut follow = CameraFollow::new(straight_curve(), snapping()).unwrap();
        let mut node = NodeTransform::default();
        follow.update(0.2, &mut node);

        assert!(node.forward().distance(&Vec3::new(0.0, 0.0, -1.0)) < 1e-9);
    }

    #[test]
    fn test_smoothing_lags_target() {
        let mut follow = CameraFollow::new(straight_curve(), FollowParams::default()).unwrap();
        let mut node = NodeTransform::default();
        follow.update(0.5, &mut node);

        // One frame closes 20% of the gap to (0, 0.5, 5)
        assert!((node.position.z - 1.0).abs() < 1e-6);
        assert!((node.position.y - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_stops_at_end() {
        let mut follow = CameraFollow::new(straight_curve(), snapping()).unwrap();
        let mut node = NodeTransform::default();

        follow.update(0.9, &mut node);
        assert!(!follow.is_finished());
        follow.update(5.0, &mut node);
        assert!(follow.is_finished());
        assert_eq!(follow.progress(), 1.0);
        assert!((node.position.z - 10.0).abs() < 1e-9);

        follow.reset();
        assert_eq!(follow.progress(), 0.0);
        assert!(!follow.is_finished());
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut follow = CameraFollow::new(straight_curve(), snapping()).unwrap();
        let mut node = NodeTransform::default();
        follow.update(0.5, &mut node);
        let before = node;

        follow.update(f64::NAN, &mut node);
        follow.update(f64::INFINITY, &mut node);
        assert_eq!(follow.distance(), 5.0);
        assert_eq!(node, before);
        assert!(!follow.is_finished());

        follow.update(0.5, &mut node);
        assert!(follow.is_finished());
    }

    #[test]
    fn test_bob_lifts_camera() {
        let params = FollowParams {
            smoothing: 1.0,
            bob_amplitude: 1.0,
            bob_frequency: std::f64::consts::FRAC_PI_2,
            ..Default::default()
        };
        let mut follow = CameraFollow::new(straight_curve(), params).unwrap();
        let mut node = NodeTransform::default();
        follow.update(1.0, &mut node);

        assert!((node.position.y - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        let flat = Curve::catmull_rom(vec![Vec3::ZERO, Vec3::ZERO]).unwrap();
        assert_eq!(
            CameraFollow::new(flat, FollowParams::default()).unwrap_err(),
            TrackError::DegenerateCurve
        );

        let params = FollowParams { smoothing: 1.5, ..Default::default() };
        assert!(matches!(
            CameraFollow::new(straight_curve(), params),
            Err(TrackError::InvalidParameter { name: "smoothing", .. })
        ));

        let params = FollowParams { up: Vec3::ZERO, ..Default::default() };
        assert!(CameraFollow::new(straight_curve(), params).is_err());
    }
}
