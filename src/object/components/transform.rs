//=========================================================================
// Transform Component
//=========================================================================
//
// World-space placement of a game object: position, scale, rotation.
// Pure data; other components and the camera read from it.
//
//=========================================================================

use std::any::Any;

use crate::core::Context;
use crate::object::{Component, GameObject};

//=== Transform ===========================================================

/// Position, scale and rotation of a game object.
///
/// Rotation is in radians. Most objects only ever touch `position`.
pub struct Transform {
    pub position: (f32, f32),
    pub scale: (f32, f32),
    pub rotation: f32,
}

impl Transform {
    /// Creates a transform at the given position with unit scale and no
    /// rotation.
    pub fn new(position: (f32, f32)) -> Self {
        Self {
            position,
            scale: (1.0, 1.0),
            rotation: 0.0,
        }
    }

    /// Builder-style scale override.
    pub fn with_scale(mut self, scale: (f32, f32)) -> Self {
        self.scale = scale;
        self
    }

    /// Moves the transform by an offset.
    pub fn translate(&mut self, offset: (f32, f32)) {
        self.position.0 += offset.0;
        self.position.1 += offset.1;
    }
}

impl Component for Transform {
    // Placement only changes when someone moves it
    fn update(&mut self, _dt: f32, _owner: &mut GameObject, _ctx: &mut Context) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_accumulates() {
        let mut transform = Transform::new((10.0, 20.0));

        transform.translate((5.0, -5.0));
        transform.translate((1.0, 1.0));

        assert_eq!(transform.position, (16.0, 16.0));
    }

    #[test]
    fn with_scale_overrides_default() {
        let transform = Transform::new((0.0, 0.0)).with_scale((2.0, 3.0));
        assert_eq!(transform.scale, (2.0, 3.0));
        assert_eq!(transform.rotation, 0.0);
    }

    #[test]
    fn queryable_through_owner() {
        let mut obj = GameObject::new("crate", "solid");
        obj.add_component(Transform::new((3.0, 4.0)));

        let transform = obj.component::<Transform>().unwrap();
        assert_eq!(transform.position, (3.0, 4.0));
    }
}
