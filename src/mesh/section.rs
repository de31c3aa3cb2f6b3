use crate::error::TrackError;
use crate::math::{Quat, Vec3};

/// Orthonormal basis of the track at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFrame {
    pub center: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl SectionFrame {
    /// Same orientation, moved to `center`
    pub fn at(&self, center: Vec3) -> Self {
        Self { center, ..*self }
    }
}

/// One frame per segment of `points`, each looking at the next point.
///
/// A zero-length segment reuses the previous frame. A vertical segment keeps
/// the previous right vector, or derives one from world forward at the start.
pub fn track_frames(points: &[Vec3]) -> Result<Vec<SectionFrame>, TrackError> {
    let mut frames: Vec<SectionFrame> = Vec::with_capacity(points.len().saturating_sub(1));

    for (index, pair) in points.windows(2).enumerate() {
        let center = pair[0];
        let Some(forward) = (pair[1] - pair[0]).try_normalize() else {
            let previous = frames.last().ok_or(TrackError::DegenerateSegment { index })?;
            log::warn!("track segment {} has zero length, reusing previous frame", index);
            let frame = previous.at(center);
            frames.push(frame);
            continue;
        };

        let right = match forward.cross(&Vec3::UP).try_normalize() {
            Some(right) => right,
            None => {
                log::warn!("track segment {} is vertical, carrying right vector over", index);
                let carried = frames.last().and_then(|prev| {
                    (prev.right - forward * prev.right.dot(&forward)).try_normalize()
                });
                carried
                    .or_else(|| forward.cross(&Vec3::FORWARD).try_normalize())
                    .unwrap_or(Vec3::RIGHT)
            }
        };
        let up = right.cross(&forward);

        frames.push(SectionFrame { center, forward, right, up });
    }

    Ok(frames)
}

/// Cross-section points around `frame.center`.
///
/// Flat ribbons have two points (left, right). With a height the section is an
/// open channel: top-left, bottom-left, bottom-right, top-right.
pub fn cross_section(frame: &SectionFrame, width: f64, height: f64) -> Vec<Vec3> {
    let c = frame.center;
    let half_w = frame.right * (width * 0.5);

    if height > 0.0 {
        let half_h = frame.up * (height * 0.5);
        vec![
            c - half_w + half_h,
            c - half_w - half_h,
            c + half_w - half_h,
            c + half_w + half_h,
        ]
    } else {
        vec![c - half_w, c + half_w]
    }
}

/// Rotate `section` about the frame's forward axis through its center
pub fn twist_section(section: &mut [Vec3], frame: &SectionFrame, degrees: f64) {
    if degrees == 0.0 {
        return;
    }
    let rotation = Quat::from_axis_angle(frame.forward, degrees.to_radians());
    for p in section.iter_mut() {
        *p = frame.center + rotation.rotate(*p - frame.center);
    }
}
