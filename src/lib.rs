//=========================================================================
// Emberlight — Library Root
//
// This crate defines the public API surface of the Emberlight runtime.
//
// Responsibilities:
// - Expose the frame driver (`App` / `AppBuilder`)
// - Expose the scene stack, game object and component model
// - Keep the subsystem modules navigable for engine-level extensibility
//
// Typical usage:
// ```no_run
// use emberlight::{AppBuilder, scene::Scene};
//
// fn main() {
//     let mut app = AppBuilder::new().build();
//     app.scenes_mut().request_push(Scene::new("title"));
//     app.run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// Subsystems are exposed publicly: application code composes scenes,
// objects and components directly out of them, and embedders reach the
// context pieces (input, camera, services) through `core`.
//
pub mod core;
pub mod input;
pub mod object;
pub mod scene;
pub mod ui;

pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `app` defines the driver facade; its types are re-exported below so
// users write `emberlight::AppBuilder` without knowing the file layout.
//
mod app;

//--- Public Exports ------------------------------------------------------

pub use app::{App, AppBuilder, AppEvent, TickControl};
