use serde::{Deserialize, Serialize};
use crate::error::{TrackError, ensure_finite};
use crate::math::Vec3;

pub const DEFAULT_TENSION: f64 = 0.5;

/// Knot spacings below this are replaced to avoid dividing by ~0
const MIN_KNOT_SPACING: f64 = 1e-4;

/// Catmull-Rom parameterization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    /// Knot spacing `|Δp|^0.5`; avoids cusps and self-intersections
    #[default]
    Centripetal,
    /// Knot spacing `|Δp|`
    Chordal,
    /// Uniform spacing with tension-scaled tangents
    #[serde(rename = "catmullrom")]
    CatmullRom,
}

/// Interpolating spline through every control point
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    closed: bool,
    curve_type: CurveType,
    tension: f64,
}

impl CatmullRomCurve {
    pub const MIN_POINTS: usize = 2;

    /// Open centripetal curve through `points`
    pub fn new(points: Vec<Vec3>) -> Result<Self, TrackError> {
        validate_points(&points)?;
        Ok(Self {
            points,
            closed: false,
            curve_type: CurveType::default(),
            tension: DEFAULT_TENSION,
        })
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_curve_type(mut self, curve_type: CurveType) -> Self {
        self.curve_type = curve_type;
        self
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    pub fn set_points(&mut self, points: Vec<Vec3>) -> Result<(), TrackError> {
        validate_points(&points)?;
        self.points = points;
        Ok(())
    }

    pub fn set_point(&mut self, index: usize, point: Vec3) -> Result<(), TrackError> {
        let len = self.points.len();
        if !point.is_finite() {
            return Err(TrackError::NonFinitePoint { index });
        }
        let slot = self
            .points
            .get_mut(index)
            .ok_or(TrackError::ControlPointOutOfRange { index, len })?;
        *slot = point;
        Ok(())
    }

    pub fn push_point(&mut self, point: Vec3) -> Result<(), TrackError> {
        if !point.is_finite() {
            return Err(TrackError::NonFinitePoint { index: self.points.len() });
        }
        self.points.push(point);
        Ok(())
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        self.curve_type = curve_type;
    }

    pub fn set_tension(&mut self, tension: f64) {
        self.tension = tension;
    }

    /// Evaluate at `t` in [0, 1] across the whole spline
    pub fn point(&self, t: f64) -> Vec3 {
        let points = &self.points;
        let l = points.len();

        let (int_point, weight) = if self.closed {
            let p = l as f64 * t;
            let base = p.floor();
            ((base as i64).rem_euclid(l as i64) as usize, p - base)
        } else {
            let p = (l - 1) as f64 * t.clamp(0.0, 1.0);
            let base = p.floor();
            let int_point = base as usize;
            let weight = p - base;
            // The exact end point belongs to the last segment
            if weight == 0.0 && int_point == l - 1 {
                (l - 2, 1.0)
            } else {
                (int_point, weight)
            }
        };

        let at = |i: usize| points[i % l];

        let p0 = if self.closed || int_point > 0 {
            at(int_point + l - 1)
        } else {
            (points[0] - points[1]) + points[0]
        };
        let p1 = at(int_point);
        let p2 = at(int_point + 1);
        let p3 = if self.closed || int_point + 2 < l {
            at(int_point + 2)
        } else {
            (points[l - 1] - points[l - 2]) + points[l - 1]
        };

        let poly = match self.curve_type {
            CurveType::Centripetal | CurveType::Chordal => {
                let pow = if self.curve_type == CurveType::Chordal { 0.5 } else { 0.25 };
                let mut dt0 = p0.distance_squared(&p1).powf(pow);
                let mut dt1 = p1.distance_squared(&p2).powf(pow);
                let mut dt2 = p2.distance_squared(&p3).powf(pow);

                // Repeated points
                if dt1 < MIN_KNOT_SPACING {
                    dt1 = 1.0;
                }
                if dt0 < MIN_KNOT_SPACING {
                    dt0 = dt1;
                }
                if dt2 < MIN_KNOT_SPACING {
                    dt2 = dt1;
                }

                CubicPoly::nonuniform_catmull_rom(p0, p1, p2, p3, dt0, dt1, dt2)
            }
            CurveType::CatmullRom => CubicPoly::catmull_rom(p0, p1, p2, p3, self.tension),
        };

        poly.calc(weight)
    }
}

fn validate_points(points: &[Vec3]) -> Result<(), TrackError> {
    if points.len() < CatmullRomCurve::MIN_POINTS {
        return Err(TrackError::TooFewControlPoints {
            len: points.len(),
            min: CatmullRomCurve::MIN_POINTS,
        });
    }
    ensure_finite(points)
}

/// Cubic `c0 + c1·s + c2·s² + c3·s³`, evaluated on all three axes at once
#[derive(Debug, Clone, Copy)]
struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    /// Hermite segment with `p(0) = x0`, `p(1) = x1`, `p'(0) = t0`, `p'(1) = t1`
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: x0 * -3.0 + x1 * 3.0 - t0 * 2.0 - t1,
            c3: x0 * 2.0 - x1 * 2.0 + t0 + t1,
        }
    }

    fn catmull_rom(x0: Vec3, x1: Vec3, x2: Vec3, x3: Vec3, tension: f64) -> Self {
        Self::hermite(x1, x2, (x2 - x0) * tension, (x3 - x1) * tension)
    }

    fn nonuniform_catmull_rom(
        x0: Vec3,
        x1: Vec3,
        x2: Vec3,
        x3: Vec3,
        dt0: f64,
        dt1: f64,
        dt2: f64,
    ) -> Self {
        // Tangents for the knot interval [t1, t2]
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;

        // Rescaled to s in [0, 1]
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    fn calc(&self, s: f64) -> Vec3 {
        let s2 = s * s;
        let s3 = s2 * s;
        self.c0 + self.c1 * s + self.c2 * s2 + self.c3 * s3
    }
}
