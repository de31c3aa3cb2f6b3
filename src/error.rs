use thiserror::Error;

/// Errors raised while building curves, track meshes or loading configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("track path requires at least 2 points, got {len}")]
    PathTooShort { len: usize },
    #[error("curve requires at least {min} control points, got {len}")]
    TooFewControlPoints { len: usize, min: usize },
    #[error("control point {index} is out of range for a curve with {len} points")]
    ControlPointOutOfRange { index: usize, len: usize },
    #[error("point {index} has non-finite coordinates")]
    NonFinitePoint { index: usize },
    #[error("invalid value for `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("curve has zero length (all control points coincide)")]
    DegenerateCurve,
    #[error("track segment {index} has zero length and no previous frame to reuse")]
    DegenerateSegment { index: usize },
    #[error("vertex {vertex} has a zero-length accumulated normal")]
    DegenerateGeometry { vertex: usize },
    #[error("mesh contains non-finite coordinates")]
    NonFiniteGeometry,
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for TrackError {
    fn from(err: serde_yaml::Error) -> Self {
        TrackError::Config(err.to_string())
    }
}

/// Reject any point with a NaN or infinite coordinate
pub(crate) fn ensure_finite(points: &[crate::math::Vec3]) -> Result<(), TrackError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(TrackError::NonFinitePoint { index }),
        None => Ok(()),
    }
}

/// Reject a parameter that is NaN/infinite or below `min`
pub(crate) fn ensure_at_least(name: &'static str, value: f64, min: f64) -> Result<(), TrackError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(TrackError::InvalidParameter { name, value })
    }
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), TrackError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrackError::InvalidParameter { name, value })
    }
}

/// Reject a point or segment count above `max`, or a NaN count
pub(crate) fn ensure_count(name: &'static str, count: f64, max: usize) -> Result<(), TrackError> {
    if count <= max as f64 {
        Ok(())
    } else {
        Err(TrackError::InvalidParameter { name, value: count })
    }
}
