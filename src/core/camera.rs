//=========================================================================
// Camera
//=========================================================================
//
// World-space viewport with smoothed target following and optional
// movement bounds. Pure arithmetic; the render backend reads the final
// position when it draws.
//
// Position is the world coordinate of the viewport's top-left corner.
//
//=========================================================================

//=== Bounds ==============================================================

/// Axis-aligned world-space rectangle limiting camera movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: (f32, f32),
    pub max: (f32, f32),
}

//=== Camera ==============================================================

/// 2D camera with smoothed follow.
///
/// When a follow target is set, `update` moves the camera so the target
/// sits at the viewport center, exponentially smoothed by `smooth_speed`.
/// Without a target the camera stays wherever it was placed.
pub struct Camera {
    viewport_size: (f32, f32),
    position: (f32, f32),
    limit_bounds: Option<Bounds>,
    smooth_speed: f32,
    target: Option<(f32, f32)>,
}

impl Camera {
    /// Creates a camera at the origin with the given viewport size.
    pub fn new(viewport_size: (f32, f32)) -> Self {
        Self {
            viewport_size,
            position: (0.0, 0.0),
            limit_bounds: None,
            smooth_speed: 5.0,
            target: None,
        }
    }

    //--- Per-Frame --------------------------------------------------------

    /// Advances the smoothed follow toward the current target, then
    /// clamps to the limit bounds.
    pub fn update(&mut self, dt: f32) {
        if let Some((tx, ty)) = self.target {
            // Center the target in the viewport
            let desired = (
                tx - self.viewport_size.0 / 2.0,
                ty - self.viewport_size.1 / 2.0,
            );
            let t = (self.smooth_speed * dt).min(1.0);
            self.position.0 += (desired.0 - self.position.0) * t;
            self.position.1 += (desired.1 - self.position.1) * t;
        }
        self.clamp_position();
    }

    /// Moves the camera by an offset, respecting the limit bounds.
    pub fn translate(&mut self, offset: (f32, f32)) {
        self.position.0 += offset.0;
        self.position.1 += offset.1;
        self.clamp_position();
    }

    //--- Coordinate Conversion --------------------------------------------

    /// World coordinates → screen coordinates.
    pub fn world_to_screen(&self, world: (f32, f32)) -> (f32, f32) {
        (world.0 - self.position.0, world.1 - self.position.1)
    }

    /// World coordinates → screen coordinates with a parallax scroll
    /// factor (0 = fixed to screen, 1 = moves with the world).
    pub fn world_to_screen_parallax(
        &self,
        world: (f32, f32),
        scroll_factor: (f32, f32),
    ) -> (f32, f32) {
        (
            world.0 - self.position.0 * scroll_factor.0,
            world.1 - self.position.1 * scroll_factor.1,
        )
    }

    /// Screen coordinates → world coordinates.
    pub fn screen_to_world(&self, screen: (f32, f32)) -> (f32, f32) {
        (screen.0 + self.position.0, screen.1 + self.position.1)
    }

    //--- Accessors --------------------------------------------------------

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn set_position(&mut self, position: (f32, f32)) {
        self.position = position;
        self.clamp_position();
    }

    pub fn viewport_size(&self) -> (f32, f32) {
        self.viewport_size
    }

    /// Sets the world position the camera should keep centered, or
    /// `None` to stop following.
    pub fn set_target(&mut self, target: Option<(f32, f32)>) {
        self.target = target;
    }

    pub fn target(&self) -> Option<(f32, f32)> {
        self.target
    }

    pub fn set_limit_bounds(&mut self, bounds: Option<Bounds>) {
        self.limit_bounds = bounds;
        self.clamp_position();
    }

    pub fn set_smooth_speed(&mut self, speed: f32) {
        self.smooth_speed = speed;
    }

    //--- Internal Helpers -------------------------------------------------

    fn clamp_position(&mut self) {
        if let Some(bounds) = self.limit_bounds {
            // The camera rectangle, not just its corner, stays in bounds
            let max_x = bounds.max.0 - self.viewport_size.0;
            let max_y = bounds.max.1 - self.viewport_size.1;
            self.position.0 = self.position.0.clamp(bounds.min.0, max_x.max(bounds.min.0));
            self.position.1 = self.position.1.clamp(bounds.min.1, max_y.max(bounds.min.1));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
