//=========================================================================
// Service Registry
//=========================================================================
//
// Type-keyed storage for externally owned collaborators.
//
// The embedding application constructs its renderer, audio sink, asset
// store and so on, then lends them to the runtime through this registry.
// Components fetch them by type each frame:
//
//   Systems → provide::<T>() → HashMap<TypeId, Box<dyn Any>>
//                                   ↓
//   Components ← get_mut::<T>() (Option, never a panic)
//
// A missing service is a graceful no-op for the consumer, because a
// missing visual/audio capability must degrade, not crash, mid-frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{Any, TypeId};
use std::collections::HashMap;

use log::debug;

//=== ServiceRegistry =====================================================

/// Type-keyed registry of externally owned collaborator objects.
///
/// At most one service per concrete type; providing the same type again
/// replaces the previous instance (the displaced one is returned to its
/// rightful owner via the call site that held it, or simply dropped).
pub struct ServiceRegistry {
    services: HashMap<TypeId, Box<dyn Any>>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Lends a service to the runtime. Replaces any previous service of
    /// the same type.
    pub fn provide<S: Any>(&mut self, service: S) {
        if self
            .services
            .insert(TypeId::of::<S>(), Box::new(service))
            .is_some()
        {
            debug!(
                "Service {} was already provided and has been replaced",
                std::any::type_name::<S>()
            );
        }
    }

    /// Removes and returns a service, handing ownership back.
    pub fn take<S: Any>(&mut self) -> Option<S> {
        self.services
            .remove(&TypeId::of::<S>())
            .and_then(|boxed| boxed.downcast::<S>().ok())
            .map(|boxed| *boxed)
    }

    //--- Query API --------------------------------------------------------

    /// Returns a shared reference to the service, if provided.
    pub fn get<S: Any>(&self) -> Option<&S> {
        self.services
            .get(&TypeId::of::<S>())
            .and_then(|boxed| boxed.downcast_ref::<S>())
    }

    /// Returns a mutable reference to the service, if provided.
    pub fn get_mut<S: Any>(&mut self) -> Option<&mut S> {
        self.services
            .get_mut(&TypeId::of::<S>())
            .and_then(|boxed| boxed.downcast_mut::<S>())
    }

    /// Returns true if a service of this type has been provided.
    pub fn contains<S: Any>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<S>())
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeAudio {
        played: Vec<String>,
    }

    struct FakeRenderer {
        draw_calls: u32,
    }

    #[test]
    fn provide_and_get() {
        let mut registry = ServiceRegistry::new();
        registry.provide(FakeAudio { played: Vec::new() });

        assert!(registry.contains::<FakeAudio>());
        assert!(registry.get::<FakeAudio>().is_some());
        assert!(!registry.contains::<FakeRenderer>());
    }

    #[test]
    fn get_mut_allows_mutation() {
        let mut registry = ServiceRegistry::new();
        registry.provide(FakeRenderer { draw_calls: 0 });

        registry.get_mut::<FakeRenderer>().unwrap().draw_calls += 1;

        assert_eq!(registry.get::<FakeRenderer>().unwrap().draw_calls, 1);
    }

    #[test]
    fn missing_service_is_none() {
        let registry = ServiceRegistry::new();
        assert!(registry.get::<FakeAudio>().is_none());
    }

    #[test]
    fn provide_replaces_previous_instance() {
        let mut registry = ServiceRegistry::new();
        registry.provide(FakeRenderer { draw_calls: 7 });
        registry.provide(FakeRenderer { draw_calls: 0 });

        assert_eq!(registry.get::<FakeRenderer>().unwrap().draw_calls, 0);
    }

    #[test]
    fn take_hands_ownership_back() {
        let mut registry = ServiceRegistry::new();
        registry.provide(FakeAudio {
            played: vec!["chime".to_string()],
        });

        let audio = registry.take::<FakeAudio>().unwrap();
        assert_eq!(audio.played, vec!["chime".to_string()]);
        assert!(!registry.contains::<FakeAudio>());
        assert!(registry.take::<FakeAudio>().is_none());
    }
}
