use crate::math::{Mat4, Quat, Vec3};

/// Position and orientation of a scene node owned by the host
pub trait Transform {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);
}

/// Plain transform for hosts without their own node type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl NodeTransform {
    pub fn new(position: Vec3) -> Self {
        Self { position, rotation: Quat::IDENTITY }
    }

    /// Local +Z in world space
    pub fn forward(&self) -> Vec3 {
        self.rotation.rotate(Vec3::FORWARD)
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

impl Transform for NodeTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
