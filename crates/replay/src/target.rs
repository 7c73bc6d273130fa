//! The narrow capability interface the driver mutates.

use bevy::prelude::*;

/// Mutate-capable view of the object being animated.
///
/// The scene graph owns the object; the driver only ever sees this interface,
/// so the advance logic is independent of any concrete scene-object type.
pub trait TargetTransform {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);
}

impl TargetTransform for Transform {
    fn position(&self) -> Vec3 {
        self.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.translation = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
