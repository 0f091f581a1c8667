//=========================================================================
// Core Systems
//=========================================================================
//
// Shared state every frame flows through.
//
// Architecture:
//   Context
//     ├─ input: InputState        (per-frame input bookkeeping)
//     ├─ camera: Camera           (world viewport)
//     ├─ state: AppState          (macro state machine)
//     └─ services: ServiceRegistry (externally owned collaborators)
//
//=========================================================================

//=== Module Declarations =================================================

mod app_state;
mod camera;
mod config;
mod context;
mod services;

//=== Public API ==========================================================

pub use app_state::{AppState, State};
pub use camera::{Bounds, Camera};
pub use config::{Config, ConfigError};
pub use context::Context;
pub use services::ServiceRegistry;
