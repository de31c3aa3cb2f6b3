use serde::{Deserialize, Serialize};
use crate::math::Vec3;

/// Bezier curve with one control point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuadraticBezierCurve {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

impl QuadraticBezierCurve {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn point(&self, t: f64) -> Vec3 {
        quadratic_bezier(t, self.v0, self.v1, self.v2)
    }

    pub fn control_points(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// Bezier curve with two control points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CubicBezierCurve {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
}

impl CubicBezierCurve {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        Self { v0, v1, v2, v3 }
    }

    pub fn point(&self, t: f64) -> Vec3 {
        cubic_bezier(t, self.v0, self.v1, self.v2, self.v3)
    }

    pub fn control_points(&self) -> [Vec3; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }
}

/// Bernstein form of a quadratic Bezier at `t`
pub fn quadratic_bezier(t: f64, p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    let k = 1.0 - t;
    p0 * (k * k) + p1 * (2.0 * k * t) + p2 * (t * t)
}

/// Bernstein form of a cubic Bezier at `t`
pub fn cubic_bezier(t: f64, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    let k = 1.0 - t;
    p0 * (k * k * k) + p1 * (3.0 * k * k * t) + p2 * (3.0 * k * t * t) + p3 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_endpoints_and_midpoint() {
        let curve = QuadraticBezierCurve::new(
            Vec3::ZERO,
            Vec3::new(0.0, 10.0, 250.0),
            Vec3::new(0.0, 0.0, 500.0),
        );
        assert_eq!(curve.point(0.0), Vec3::ZERO);
        assert_eq!(curve.point(1.0), Vec3::new(0.0, 0.0, 500.0));

        let mid = curve.point(0.5);
        assert!((mid.y - 5.0).abs() < 1e-12);
        assert!((mid.z - 250.0).abs() < 1e-12);
    }

    #[test]
    fn test_cubic_endpoints_and_midpoint() {
        let curve = CubicBezierCurve::new(
            Vec3::ZERO,
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(4.0, 4.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
        );
        assert_eq!(curve.point(0.0), Vec3::ZERO);
        assert_eq!(curve.point(1.0), Vec3::new(4.0, 0.0, 0.0));

        let mid = curve.point(0.5);
        assert!((mid.x - 2.0).abs() < 1e-12);
        assert!((mid.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_degree_elevation_agrees() {
        // A quadratic raised to cubic traces the same curve
        let (a, b, c) = (Vec3::ZERO, Vec3::new(1.0, 2.0, 0.0), Vec3::new(3.0, 0.0, 1.0));
        let (c1, c2) = (a + (b - a) * (2.0 / 3.0), c + (b - c) * (2.0 / 3.0));
        let cubic = CubicBezierCurve::new(a, c1, c2, c);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!(quadratic_bezier(t, a, b, c).distance(&cubic.point(t)) < 1e-12);
        }
    }
}
