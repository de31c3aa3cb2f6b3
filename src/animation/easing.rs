//! Easing functions for tweens and track twist
//!
//! Every kind maps normalized time `k` to eased progress. The formulas are the
//! classic Penner set; inputs are not clamped, so Elastic and Back overshoot
//! exactly as written.

use std::f64::consts::PI;
use serde::{Deserialize, Serialize};

const BACK_OVERSHOOT: f64 = 1.70158;

/// Easing function kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    SinusoidalIn,
    SinusoidalOut,
    SinusoidalInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BackIn,
    BackOut,
    BackInOut,
}

impl Easing {
    pub const ALL: [Easing; 28] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuarticIn,
        Easing::QuarticOut,
        Easing::QuarticInOut,
        Easing::QuinticIn,
        Easing::QuinticOut,
        Easing::QuinticInOut,
        Easing::SinusoidalIn,
        Easing::SinusoidalOut,
        Easing::SinusoidalInOut,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::ExponentialInOut,
        Easing::CircularIn,
        Easing::CircularOut,
        Easing::CircularInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
    ];

    pub fn apply(self, k: f64) -> f64 {
        ease(k, self)
    }
}

/// Apply easing function to normalized time `k`
pub fn ease(k: f64, easing: Easing) -> f64 {
    match easing {
        Easing::Linear => k,

        Easing::QuadraticIn => k * k,
        Easing::QuadraticOut => k * (2.0 - k),
        Easing::QuadraticInOut => {
            let k = k * 2.0;
            if k < 1.0 {
                0.5 * k * k
            } else {
                let k = k - 1.0;
                -0.5 * (k * (k - 2.0) - 1.0)
            }
        }

        Easing::CubicIn => k * k * k,
        Easing::CubicOut => {
            let k = k - 1.0;
            k * k * k + 1.0
        }
        Easing::CubicInOut => {
            let k = k * 2.0;
            if k < 1.0 {
                0.5 * k * k * k
            } else {
                let k = k - 2.0;
                0.5 * (k * k * k + 2.0)
            }
        }

        Easing::QuarticIn => k * k * k * k,
        Easing::QuarticOut => {
            let k = k - 1.0;
            1.0 - k * k * k * k
        }
        Easing::QuarticInOut => {
            let k = k * 2.0;
            if k < 1.0 {
                0.5 * k * k * k * k
            } else {
                let k = k - 2.0;
                -0.5 * (k * k * k * k - 2.0)
            }
        }

        Easing::QuinticIn => k * k * k * k * k,
        Easing::QuinticOut => {
            let k = k - 1.0;
            k * k * k * k * k + 1.0
        }
        Easing::QuinticInOut => {
            let k = k * 2.0;
            if k < 1.0 {
                0.5 * k * k * k * k * k
            } else {
                let k = k - 2.0;
                0.5 * (k * k * k * k * k + 2.0)
            }
        }

        Easing::SinusoidalIn => 1.0 - (k * PI / 2.0).cos(),
        Easing::SinusoidalOut => (k * PI / 2.0).sin(),
        Easing::SinusoidalInOut => 0.5 * (1.0 - (PI * k).cos()),

        Easing::ExponentialIn => {
            if k == 0.0 {
                0.0
            } else {
                1024f64.powf(k - 1.0)
            }
        }
        Easing::ExponentialOut => {
            if k == 1.0 {
                1.0
            } else {
                1.0 - 2f64.powf(-10.0 * k)
            }
        }
        Easing::ExponentialInOut => {
            if k == 0.0 {
                return 0.0;
            }
            if k == 1.0 {
                return 1.0;
            }
            let k = k * 2.0;
            if k < 1.0 {
                0.5 * 1024f64.powf(k - 1.0)
            } else {
                0.5 * (-(2f64.powf(-10.0 * (k - 1.0))) + 2.0)
            }
        }

        Easing::CircularIn => 1.0 - (1.0 - k * k).sqrt(),
        Easing::CircularOut => {
            let k = k - 1.0;
            (1.0 - k * k).sqrt()
        }
        Easing::CircularInOut => {
            let k = k * 2.0;
            if k < 1.0 {
                -0.5 * ((1.0 - k * k).sqrt() - 1.0)
            } else {
                let k = k - 2.0;
                0.5 * ((1.0 - k * k).sqrt() + 1.0)
            }
        }

        Easing::ElasticIn => {
            if k == 0.0 {
                return 0.0;
            }
            if k == 1.0 {
                return 1.0;
            }
            -(2f64.powf(10.0 * (k - 1.0))) * ((k - 1.1) * 5.0 * PI).sin()
        }
        Easing::ElasticOut => {
            if k == 0.0 {
                return 0.0;
            }
            if k == 1.0 {
                return 1.0;
            }
            2f64.powf(-10.0 * k) * ((k - 0.1) * 5.0 * PI).sin() + 1.0
        }
        Easing::ElasticInOut => {
            if k == 0.0 {
                return 0.0;
            }
            if k == 1.0 {
                return 1.0;
            }
            let k = k * 2.0;
            if k < 1.0 {
                -0.5 * 2f64.powf(10.0 * (k - 1.0)) * ((k - 1.1) * 5.0 * PI).sin()
            } else {
                0.5 * 2f64.powf(-10.0 * (k - 1.0)) * ((k - 1.1) * 5.0 * PI).sin() + 1.0
            }
        }

        Easing::BackIn => {
            let s = BACK_OVERSHOOT;
            k * k * ((s + 1.0) * k - s)
        }
        Easing::BackOut => {
            let s = BACK_OVERSHOOT;
            let k = k - 1.0;
            k * k * ((s + 1.0) * k + s) + 1.0
        }
        Easing::BackInOut => {
            let s = BACK_OVERSHOOT * 1.525;
            let k = k * 2.0;
            if k < 1.0 {
                0.5 * (k * k * ((s + 1.0) * k - s))
            } else {
                let k = k - 2.0;
                0.5 * (k * k * ((s + 1.0) * k + s) + 2.0)
            }
        }
    }
}
