//! Animation helpers: easing curves, scalar tweens and a sine oscillator
//!
//! The ribbon builder samples a tween at normalized positions to twist the
//! track; the camera uses the oscillator for an optional bob.

mod easing;
mod sinusoid;
mod tween;

pub use easing::{Easing, ease};
pub use sinusoid::Sinusoid;
pub use tween::Tween;
