//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle and stack-based navigation.
//
// Architecture:
//   SceneManager
//     ├─ stack: Vec<Scene>              (bottom = oldest, top = active)
//     └─ pending: Option<NavigationRequest>  (one coalesced request/frame)
//   Navigator (on Context)              (gameplay-side door to the slot)
//
// Flow:
//   handle_input() → top scene → UI first, then objects
//   update(dt)     → top scene → drain navigator → apply pending action
//   render()       → every scene, bottom to top
//
//=========================================================================

//=== Module Declarations =================================================

mod manager;
mod navigation;
#[allow(clippy::module_inception)]
mod scene;

//=== Public API ==========================================================

pub use manager::SceneManager;
pub use navigation::{NavigationRequest, Navigator};
pub use scene::Scene;
