//=========================================================================
// Application Driver
//=========================================================================
//
// Main entry point and frame pacing.
//
// Architecture:
// ```text
//     AppBuilder  ──build()──>  App  ──run()──>  [fixed-timestep loop]
//         │                      │
//         ├─ with_config()       ├─ event_sender() → platform layer
//         ├─ with_tick_rate()    └─ tick(dt): drain events →
//         └─ with_channel_capacity()    handle_input → update → render
// ```
//
// One logical thread: the embedding platform layer polls devices on its
// own side and pushes `AppEvent` batches through the channel; each tick
// drains the channel, then runs the three frame phases to completion.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::{Config, Context};
use crate::input::InputEvent;
use crate::scene::SceneManager;

//=== AppEvent ============================================================

/// Events the embedding platform layer delivers to the driver.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A batch of input events polled since the last delivery.
    Input(Vec<InputEvent>),

    /// Orderly shutdown request (window closed, signal, quit button).
    Quit,
}

//=== TickControl =========================================================

/// Whether the frame loop should keep going after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== AppBuilder ==========================================================

/// Builder for configuring and constructing an [`App`].
///
/// # Default Values
///
/// - **Tick rate**: taken from the config (60.0 by default)
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// use emberlight::{AppBuilder, scene::Scene};
///
/// let mut app = AppBuilder::new().build();
/// app.scenes_mut().request_push(Scene::new("title"));
/// app.run();
/// ```
pub struct AppBuilder {
    tick_rate: Option<f64>,
    channel_capacity: usize,
    config: Config,
}

impl AppBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            tick_rate: None,
            channel_capacity: 128,
            config: Config::default(),
        }
    }

    /// Supplies a loaded configuration (window size, tick rate, input
    /// mappings). Without this the defaults apply.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Overrides the logic tick rate from the config.
    ///
    /// # Panics
    ///
    /// Panics if `tick_rate <= 0.0`.
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        assert!(tick_rate > 0.0, "Tick rate must be positive, got {}", tick_rate);
        self.tick_rate = Some(tick_rate);
        self
    }

    /// Sets the capacity of the platform → driver event channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the application driver.
    pub fn build(self) -> App {
        let tick_rate = self.tick_rate.unwrap_or(self.config.tick_rate);
        info!(
            "Building app (tick rate: {}, channel: {})",
            tick_rate, self.channel_capacity
        );

        let viewport = (
            self.config.window_width as f32,
            self.config.window_height as f32,
        );
        let mut ctx = Context::new(viewport);
        ctx.input.load_bindings(&self.config.input_mappings);

        let (tx, rx) = bounded(self.channel_capacity);

        App {
            ctx,
            scenes: SceneManager::new(),
            tick_rate,
            events_tx: tx,
            events_rx: rx,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== App =================================================================

/// Owns the shared context and the scene stack, and drives them one
/// frame at a time.
///
/// `run()` is the batteries-included fixed-timestep loop; embedders with
/// their own clock call [`tick`](App::tick) directly.
pub struct App {
    ctx: Context,
    scenes: SceneManager,
    tick_rate: f64,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
}

impl App {
    //--- Setup Access -----------------------------------------------------

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }

    /// Sender half of the event channel, for the platform layer.
    pub fn event_sender(&self) -> Sender<AppEvent> {
        self.events_tx.clone()
    }

    //--- Execution --------------------------------------------------------

    /// Runs exactly one frame: drains queued events into the input
    /// tracker, then dispatches input → update → render on the scene
    /// stack. `dt` is the frame delta in seconds.
    pub fn tick(&mut self, dt: f32) -> TickControl {
        //--- 1. Gather platform events -----------------------------------
        self.ctx.input.begin_frame();

        let mut quit = false;
        loop {
            match self.events_rx.try_recv() {
                Ok(AppEvent::Input(batch)) => self.ctx.input.process_events(&batch),
                Ok(AppEvent::Quit) => {
                    info!("Quit requested");
                    quit = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        self.ctx.input.end_frame();

        if quit {
            return TickControl::Exit;
        }

        //--- 2. Frame phases, in order -----------------------------------
        self.scenes.handle_input(&mut self.ctx);
        self.scenes.update(dt, &mut self.ctx);
        self.scenes.render(&mut self.ctx);

        TickControl::Continue
    }

    /// Runs the fixed-timestep loop until a quit request arrives or the
    /// scene stack empties, then closes the scene stack.
    pub fn run(&mut self) {
        info!("Starting runtime (tick rate: {})", self.tick_rate);

        let frame_duration = Duration::from_secs_f64(1.0 / self.tick_rate);
        let dt = frame_duration.as_secs_f32();

        loop {
            let frame_start = Instant::now();

            if self.tick(dt) == TickControl::Exit {
                break;
            }

            if self.scenes.is_empty() {
                info!("Scene stack empty, exiting");
                break;
            }

            //--- Maintain deterministic pacing ---------------------------
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            } else {
                debug!("Frame overran its budget: {:?}", elapsed);
            }
        }

        self.scenes.close();
        info!("Runtime stopped");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
