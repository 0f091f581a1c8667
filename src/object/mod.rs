//=========================================================================
// Game Objects
//=========================================================================
//
// A GameObject is a named, tagged container owning at most one component
// of each concrete type, dispatching the per-frame lifecycle to all of
// them.
//
// Components are stored type-erased in a HashMap keyed by TypeId and
// recovered through downcasts, so heterogeneous behaviors share one
// table with O(1) typed lookup.
//
// Destruction is deferred: objects are flagged via mark_for_removal()
// and swept by their scene at a well-defined point of the update phase,
// never mid-iteration.
//
//=========================================================================

//=== Module Declarations =================================================

mod component;
pub mod components;

//=== Public API ==========================================================

pub use component::Component;

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::Context;

//=== ObjectId ============================================================

/// Process-unique handle identifying a [`GameObject`].
///
/// Components keep this instead of a pointer to their owner; it is never
/// reused, so a stale id simply fails lookups instead of dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

impl ObjectId {
    fn next() -> Self {
        ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

//=== GameObject ==========================================================

/// Composition root for gameplay behavior.
///
/// Owns its components exclusively; at most one component per concrete
/// type. Attaching runs `on_attach` (back-reference) then `init`, as one
/// uninterruptible sequence, on the new component only.
pub struct GameObject {
    id: ObjectId,
    name: String,
    tag: String,
    marked_for_removal: bool,
    components: HashMap<TypeId, Box<dyn Component>>,
}

impl GameObject {
    //--- Construction -----------------------------------------------------

    /// Creates an object with a display name and a classification tag.
    /// Neither needs to be unique; the tag supports ad-hoc grouping
    /// queries ("solid", "collectible").
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        let name = name.into();
        let tag = tag.into();
        trace!("GameObject created: '{}' [{}]", name, tag);

        Self {
            id: ObjectId::next(),
            name,
            tag,
            marked_for_removal: false,
            components: HashMap::new(),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Flags the object for deferred destruction. From this point the
    /// scene skips it for update/input dispatch and sweeps it at the end
    /// of a later update pass.
    pub fn mark_for_removal(&mut self) {
        self.marked_for_removal = true;
    }

    pub fn is_marked_for_removal(&self) -> bool {
        self.marked_for_removal
    }

    //--- Component Registry -----------------------------------------------

    /// Attaches a component, running `on_attach` then `init` on it, and
    /// returns a handle to the stored instance.
    ///
    /// Attaching a type that is already present is a logged no-op that
    /// returns the existing instance; the new value is dropped untouched.
    pub fn add_component<T: Component>(&mut self, component: T) -> &mut T {
        let key = TypeId::of::<T>();

        if self.components.contains_key(&key) {
            debug!(
                "GameObject '{}': component {} already attached, returning existing",
                self.name,
                std::any::type_name::<T>()
            );
        } else {
            let mut boxed: Box<dyn Component> = Box::new(component);
            boxed.on_attach(self.id);
            boxed.init(self);

            if self.components.insert(key, boxed).is_some() {
                // init() attached the same type through its owner handle;
                // the fully initialized outer instance wins
                warn!(
                    "GameObject '{}': component {} attached itself during init, replaced",
                    self.name,
                    std::any::type_name::<T>()
                );
            }
            debug!(
                "GameObject '{}': attached component {}",
                self.name,
                std::any::type_name::<T>()
            );
        }

        self.components
            .get_mut(&key)
            .and_then(|c| c.as_any_mut().downcast_mut::<T>())
            .expect("component table key/type mismatch")
    }

    /// Returns the attached component of type `T`, if any.
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<T>())
    }

    /// Returns the attached component of type `T` mutably, if any.
    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| c.as_any_mut().downcast_mut::<T>())
    }

    /// Returns true if a component of type `T` is attached.
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Detaches and destroys the component of type `T`, running its
    /// `clean` hook first. No-op when absent.
    pub fn remove_component<T: Component>(&mut self) {
        match self.components.remove(&TypeId::of::<T>()) {
            Some(mut comp) => {
                comp.clean(self);
                trace!(
                    "GameObject '{}': removed component {}",
                    self.name,
                    std::any::type_name::<T>()
                );
            }
            None => debug!(
                "GameObject '{}': component {} not attached, nothing to remove",
                self.name,
                std::any::type_name::<T>()
            ),
        }
    }

    /// Number of attached components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    //--- Per-Frame Dispatch -----------------------------------------------

    /// Updates every attached component.
    pub fn update(&mut self, dt: f32, ctx: &mut Context) {
        self.dispatch(|comp, owner| comp.update(dt, owner, ctx));
    }

    /// Renders every attached component.
    pub fn render(&mut self, ctx: &mut Context) {
        self.dispatch(|comp, owner| comp.render(owner, ctx));
    }

    /// Forwards input handling to every attached component.
    pub fn handle_input(&mut self, ctx: &mut Context) {
        self.dispatch(|comp, owner| comp.handle_input(owner, ctx));
    }

    /// Tears down every attached component (one `clean` each) and
    /// empties the table.
    pub fn clean(&mut self) {
        trace!("Cleaning game object '{}'", self.name);

        let keys: Vec<TypeId> = self.components.keys().copied().collect();
        for key in keys {
            if let Some(mut comp) = self.components.remove(&key) {
                comp.clean(self);
            }
        }
        // Anything a clean hook attached goes down with the ship
        self.components.clear();
    }

    //--- Internal Helpers -------------------------------------------------

    // Lift-out/reinsert traversal: each component is removed from the
    // table for the duration of its hook so the hook can borrow the
    // owner mutably. Components attached during the traversal are not
    // visited until the next frame. Traversal order is unspecified.
    fn dispatch<F>(&mut self, mut call: F)
    where
        F: FnMut(&mut Box<dyn Component>, &mut GameObject),
    {
        let keys: Vec<TypeId> = self.components.keys().copied().collect();
        for key in keys {
            let Some(mut comp) = self.components.remove(&key) else {
                // A prior hook detached this sibling mid-traversal
                continue;
            };
            call(&mut comp, self);
            if self.components.insert(key, comp).is_some() {
                warn!(
                    "GameObject '{}': component re-attached during its own hook, \
                     keeping the running instance",
                    self.name
                );
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
