use crate::math::Vec3;

/// Cumulative chord lengths of a curve sampled at uniform parameter steps.
///
/// `lengths[i]` is the polyline length from `t = 0` to `t = i / divisions`, so
/// the table starts at exactly 0 and never decreases.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// Sample `point` at `divisions + 1` uniform parameters
    pub fn sample(divisions: usize, point: impl Fn(f64) -> Vec3) -> Self {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions + 1);
        lengths.push(0.0);

        let mut last = point(0.0);
        let mut sum = 0.0;
        for d in 1..=divisions {
            let current = point(d as f64 / divisions as f64);
            sum += current.distance(&last);
            lengths.push(sum);
            last = current;
        }

        Self { lengths }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.lengths
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.lengths
    }

    pub fn divisions(&self) -> usize {
        self.lengths.len() - 1
    }

    pub fn total(&self) -> f64 {
        self.lengths[self.lengths.len() - 1]
    }

    /// Parameter `t` at normalized arc length `u`; NaN maps to the start
    pub fn u_to_t(&self, u: f64) -> f64 {
        if !(u > 0.0) {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        self.distance_to_t(u * self.total())
    }

    /// Parameter `t` at which the curve has travelled `distance`
    pub fn distance_to_t(&self, distance: f64) -> f64 {
        let lengths = &self.lengths;
        let last = lengths.len() - 1;

        if !(distance > 0.0) {
            return 0.0;
        }
        if distance >= lengths[last] {
            return 1.0;
        }

        // First index whose cumulative length reaches the target
        let idx = lengths.partition_point(|&l| l < distance);
        if lengths[idx] == distance {
            return idx as f64 / last as f64;
        }

        let i = idx - 1;
        let before = lengths[i];
        let segment = lengths[idx] - before;
        let fraction = (distance - before) / segment;

        (i as f64 + fraction) / last as f64
    }
}
