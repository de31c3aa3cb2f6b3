//! Camera rail: drives a host transform along a track curve each frame

pub mod follow;
pub mod transform;

pub use follow::{CameraFollow, FollowParams};
pub use transform::{NodeTransform, Transform};
