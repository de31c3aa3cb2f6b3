//! Parametric curves with arc-length reparameterization
//!
//! [`Curve`] wraps one of the supported shapes and memoizes its cumulative
//! arc-length table. Any edit to the shape goes through [`Curve::edit`], which
//! drops the table so it is rebuilt on next use.

pub mod arc_length;
pub mod bezier;
pub mod catmull_rom;
pub mod frames;

use std::borrow::Cow;
use std::cell::OnceCell;

use crate::error::TrackError;
use crate::math::Vec3;

pub use arc_length::ArcLengthTable;
pub use bezier::{CubicBezierCurve, QuadraticBezierCurve};
pub use catmull_rom::{CatmullRomCurve, CurveType};
pub use frames::FrenetFrames;

pub const DEFAULT_ARC_LENGTH_DIVISIONS: usize = 200;

/// Parameter offset used by the central-difference tangent
const TANGENT_DELTA: f64 = 0.0001;

/// The closed family of curve shapes
#[derive(Debug, Clone, PartialEq)]
pub enum CurveShape {
    CatmullRom(CatmullRomCurve),
    QuadraticBezier(QuadraticBezierCurve),
    CubicBezier(CubicBezierCurve),
}

impl CurveShape {
    /// Point at raw parameter `t` in [0, 1]
    pub fn point(&self, t: f64) -> Vec3 {
        match self {
            CurveShape::CatmullRom(curve) => curve.point(t),
            CurveShape::QuadraticBezier(curve) => curve.point(t),
            CurveShape::CubicBezier(curve) => curve.point(t),
        }
    }
}

impl From<CatmullRomCurve> for CurveShape {
    fn from(curve: CatmullRomCurve) -> Self {
        CurveShape::CatmullRom(curve)
    }
}

impl From<QuadraticBezierCurve> for CurveShape {
    fn from(curve: QuadraticBezierCurve) -> Self {
        CurveShape::QuadraticBezier(curve)
    }
}

impl From<CubicBezierCurve> for CurveShape {
    fn from(curve: CubicBezierCurve) -> Self {
        CurveShape::CubicBezier(curve)
    }
}

/// A curve shape plus its lazily computed arc-length table
#[derive(Debug, Clone)]
pub struct Curve {
    shape: CurveShape,
    arc_length_divisions: usize,
    arc_lengths: OnceCell<ArcLengthTable>,
}

impl Curve {
    pub fn new(shape: impl Into<CurveShape>) -> Self {
        Self {
            shape: shape.into(),
            arc_length_divisions: DEFAULT_ARC_LENGTH_DIVISIONS,
            arc_lengths: OnceCell::new(),
        }
    }

    /// Open centripetal Catmull-Rom curve through `points`
    pub fn catmull_rom(points: Vec<Vec3>) -> Result<Self, TrackError> {
        Ok(Self::new(CatmullRomCurve::new(points)?))
    }

    pub fn shape(&self) -> &CurveShape {
        &self.shape
    }

    /// Mutate the shape; the cached arc lengths are dropped first
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut CurveShape) -> R) -> R {
        self.arc_lengths.take();
        f(&mut self.shape)
    }

    pub fn arc_length_divisions(&self) -> usize {
        self.arc_length_divisions
    }

    pub fn set_arc_length_divisions(&mut self, divisions: usize) {
        self.arc_length_divisions = divisions.max(1);
        self.arc_lengths.take();
    }

    /// Recompute the arc-length table immediately
    pub fn refresh_arc_lengths(&mut self) {
        self.arc_lengths.take();
        self.table();
    }

    fn table(&self) -> &ArcLengthTable {
        let shape = &self.shape;
        self.arc_lengths
            .get_or_init(|| ArcLengthTable::sample(self.arc_length_divisions, |t| shape.point(t)))
    }

    /// Cumulative arc lengths at the configured division count
    pub fn lengths(&self) -> &[f64] {
        self.table().as_slice()
    }

    /// Cumulative arc lengths at `divisions`; only the configured count is cached
    pub fn lengths_with(&self, divisions: usize) -> Cow<'_, [f64]> {
        if divisions.max(1) == self.arc_length_divisions {
            Cow::Borrowed(self.lengths())
        } else {
            Cow::Owned(ArcLengthTable::sample(divisions, |t| self.shape.point(t)).into_vec())
        }
    }

    /// Total arc length
    pub fn length(&self) -> f64 {
        self.table().total()
    }

    /// Raw parameter at normalized arc length `u`
    pub fn u_to_t(&self, u: f64) -> f64 {
        self.table().u_to_t(u)
    }

    /// Raw parameter after travelling `distance` along the curve
    pub fn distance_to_t(&self, distance: f64) -> f64 {
        self.table().distance_to_t(distance)
    }

    pub fn point(&self, t: f64) -> Vec3 {
        self.shape.point(t)
    }

    /// Point at normalized arc length `u`
    pub fn point_at(&self, u: f64) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    /// `divisions + 1` points at uniform parameter steps
    pub fn points(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|d| self.point(d as f64 / divisions as f64))
            .collect()
    }

    /// `divisions + 1` points at equal arc-length spacing
    pub fn spaced_points(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|d| self.point_at(d as f64 / divisions as f64))
            .collect()
    }

    /// Unit tangent at raw parameter `t`.
    ///
    /// Where the curve does not move around `t` the chord from start to end is
    /// used, and `Vec3::FORWARD` when the whole curve collapses to a point.
    pub fn tangent(&self, t: f64) -> Vec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);

        if let Some(tangent) = (self.point(t2) - self.point(t1)).try_normalize() {
            return tangent;
        }

        log::trace!("zero-length tangent at t = {}, using chord", t);
        (self.point(1.0) - self.point(0.0))
            .try_normalize()
            .unwrap_or(Vec3::FORWARD)
    }

    /// Unit tangent at normalized arc length `u`
    pub fn tangent_at(&self, u: f64) -> Vec3 {
        self.tangent(self.u_to_t(u))
    }
}

impl From<CurveShape> for Curve {
    fn from(shape: CurveShape) -> Self {
        Curve::new(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curves() -> Vec<Curve> {
        let wiggle = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 1.0, 2.0),
            Vec3::new(-2.0, 4.0, 6.0),
            Vec3::new(5.0, 0.5, 9.0),
            Vec3::new(1.0, -3.0, 15.0),
        ];
        vec![
            Curve::catmull_rom(wiggle.clone()).unwrap(),
            Curve::new(
                CatmullRomCurve::new(wiggle.clone())
                    .unwrap()
                    .with_curve_type(CurveType::Chordal),
            ),
            Curve::new(
                CatmullRomCurve::new(wiggle)
                    .unwrap()
                    .with_curve_type(CurveType::CatmullRom)
                    .with_tension(0.5),
            ),
            Curve::new(QuadraticBezierCurve::new(
                Vec3::ZERO,
                Vec3::new(0.0, 10.0, 250.0),
                Vec3::new(0.0, 0.0, 500.0),
            )),
            Curve::new(CubicBezierCurve::new(
                Vec3::ZERO,
                Vec3::new(10.0, 0.0, 0.0),
                Vec3::new(10.0, 10.0, 5.0),
                Vec3::new(0.0, 10.0, 10.0),
            )),
        ]
    }

    #[test]
    fn test_point_at_endpoints() {
        for curve in sample_curves() {
            assert!(curve.point_at(0.0).distance(&curve.point(0.0)) < 1e-9);
            assert!(curve.point_at(1.0).distance(&curve.point(1.0)) < 1e-9);
        }
    }

    #[test]
    fn test_nan_parameter_samples_start() {
        for curve in sample_curves() {
            assert_eq!(curve.u_to_t(f64::NAN), 0.0);
            assert!(curve.point_at(f64::NAN).distance(&curve.point(0.0)) < 1e-9);
            assert!(curve.tangent_at(f64::NAN).is_finite());
        }
    }

    #[test]
    fn test_lengths_start_at_zero_and_grow() {
        for curve in sample_curves() {
            let lengths = curve.lengths();
            assert_eq!(lengths.len(), DEFAULT_ARC_LENGTH_DIVISIONS + 1);
            assert_eq!(lengths[0], 0.0);
            assert!(lengths.windows(2).all(|w| w[1] >= w[0]));
            assert!((curve.length() - lengths[lengths.len() - 1]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_lengths_with_other_divisions() {
        let curve = &sample_curves()[0];
        let coarse = curve.lengths_with(10);
        assert_eq!(coarse.len(), 11);
        assert!(matches!(coarse, Cow::Owned(_)));
        assert!(matches!(curve.lengths_with(DEFAULT_ARC_LENGTH_DIVISIONS), Cow::Borrowed(_)));
        // Chords never exceed the finer polyline
        assert!(coarse[10] <= curve.length() + 1e-9);
    }

    #[test]
    fn test_u_to_t_monotonic() {
        for curve in sample_curves() {
            let mut prev = curve.u_to_t(0.0);
            assert_eq!(prev, 0.0);
            for i in 1..=500 {
                let t = curve.u_to_t(i as f64 / 500.0);
                assert!(t >= prev);
                prev = t;
            }
            assert_eq!(prev, 1.0);
        }
    }

    #[test]
    fn test_spaced_points_are_evenly_spaced() {
        let curve = Curve::new(QuadraticBezierCurve::new(
            Vec3::ZERO,
            Vec3::new(0.0, 10.0, 250.0),
            Vec3::new(0.0, 0.0, 500.0),
        ));
        let points = curve.spaced_points(20);
        assert_eq!(points.len(), 21);

        let step = curve.length() / 20.0;
        for pair in points.windows(2) {
            assert!((pair[0].distance(&pair[1]) - step).abs() < step * 0.01);
        }
    }

    #[test]
    fn test_resampling_is_stable() {
        for curve in sample_curves() {
            let first = curve.spaced_points(40);
            let second = Curve::catmull_rom(first.clone()).unwrap().spaced_points(40);
            let tolerance = curve.length() * 0.01;
            for (a, b) in first.iter().zip(&second) {
                assert!(a.distance(b) < tolerance, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_edit_invalidates_cache() {
        let mut curve = Curve::catmull_rom(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)]).unwrap();
        assert!((curve.length() - 10.0).abs() < 1e-9);

        curve.edit(|shape| {
            if let CurveShape::CatmullRom(spline) = shape {
                spline.set_point(1, Vec3::new(0.0, 0.0, 20.0)).unwrap();
            }
        });
        assert!((curve.length() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_divisions_invalidates_cache() {
        let mut curve = sample_curves().remove(0);
        assert_eq!(curve.lengths().len(), DEFAULT_ARC_LENGTH_DIVISIONS + 1);

        curve.set_arc_length_divisions(50);
        assert_eq!(curve.lengths().len(), 51);

        curve.set_arc_length_divisions(0);
        assert_eq!(curve.arc_length_divisions(), 1);
        curve.refresh_arc_lengths();
        assert_eq!(curve.lengths().len(), 2);
    }

    #[test]
    fn test_distance_to_t() {
        let curve = Curve::catmull_rom(vec![Vec3::ZERO, Vec3::new(8.0, 0.0, 0.0)]).unwrap();
        assert_eq!(curve.distance_to_t(-1.0), 0.0);
        assert_eq!(curve.distance_to_t(100.0), 1.0);
        let t = curve.distance_to_t(2.0);
        assert!((curve.point(t).x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_tangent_straight_line() {
        let curve = Curve::catmull_rom(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)]).unwrap();
        for &t in &[0.0, 0.5, 1.0] {
            let tangent = curve.tangent(t);
            assert!((tangent.z - 1.0).abs() < 1e-9);
            assert!((tangent.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tangent_fallbacks() {
        // Collapsed curve: no direction anywhere
        let point = Curve::catmull_rom(vec![Vec3::new(1.0, 1.0, 1.0); 3]).unwrap();
        assert_eq!(point.tangent(0.5), Vec3::FORWARD);
        assert_eq!(point.length(), 0.0);

        // Barely moves at its start yet still points along the chord
        let stalled = Curve::new(CubicBezierCurve::new(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::new(4.0, 0.0, 0.0),
        ));
        let tangent = stalled.tangent(0.0);
        assert!((tangent.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_points_uniform_parameter() {
        let curve = Curve::catmull_rom(vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)]).unwrap();
        let points = curve.points(4);
        assert_eq!(points.len(), 5);
        assert!((points[1].x - 1.0).abs() < 1e-9);
        assert_eq!(points[4], curve.point(1.0));
    }
}
