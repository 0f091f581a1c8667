//=========================================================================
// Component Contract
//=========================================================================
//
// A component is a unit of behavior attached to exactly one GameObject.
//
// Lifecycle, in order, driven entirely by the owning object:
//
//   on_attach(owner id)  — back-reference delivery, exactly once
//   init(owner)          — exactly once, immediately after on_attach
//   handle_input / update / render — once per frame while attached
//   clean(owner)         — exactly once, before destruction
//
// Only `update` is mandatory; every other hook defaults to a no-op.
//
// Hooks receive the owning object by `&mut` with the running component
// temporarily lifted out of the owner's table, which is what makes
// sibling queries (`owner.component_mut::<T>()`) safe without shared
// mutable ownership. A component therefore never finds *itself* through
// its owner, and must not assume a sibling outlives the current call.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use crate::core::Context;
use super::{GameObject, ObjectId};

//=== Component ===========================================================

/// Behavior unit owned by a single [`GameObject`].
///
/// Implementors must provide `update` plus the two downcast accessors
/// (the object's typed lookup goes through `dyn Any`, the same
/// type-erasure discipline used across the crate):
///
/// ```
/// use emberlight::object::{Component, GameObject};
/// use emberlight::core::Context;
/// use std::any::Any;
///
/// struct Spin { angle: f32 }
///
/// impl Component for Spin {
///     fn update(&mut self, dt: f32, _owner: &mut GameObject, _ctx: &mut Context) {
///         self.angle += dt;
///     }
///
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
/// ```
pub trait Component: Any {
    /// Delivers the owner's id. Called exactly once, before any other
    /// hook. The id stays valid for the component's whole lifetime.
    fn on_attach(&mut self, _owner: ObjectId) {}

    /// One-time setup. Called exactly once, immediately after
    /// [`on_attach`](Self::on_attach); siblings attached earlier are
    /// already visible through `owner`.
    fn init(&mut self, _owner: &mut GameObject) {}

    /// Input-phase hook.
    fn handle_input(&mut self, _owner: &mut GameObject, _ctx: &mut Context) {}

    /// Update-phase hook. `dt` is the frame delta in seconds.
    fn update(&mut self, dt: f32, owner: &mut GameObject, ctx: &mut Context);

    /// Render-phase hook.
    fn render(&mut self, _owner: &mut GameObject, _ctx: &mut Context) {}

    /// Teardown. Called exactly once before the component is destroyed.
    fn clean(&mut self, _owner: &mut GameObject) {}

    /// Downcast support for typed lookup.
    fn as_any(&self) -> &dyn Any;

    /// Downcast support for typed mutable lookup.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
