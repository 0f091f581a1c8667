//=========================================================================
// Health Component
//=========================================================================
//
// Hit points with an invincibility window after taking damage. The
// window timer advances in the update hook; damage landing inside it is
// ignored. Whether a dead object gets removed is the caller's call; this
// component only reports.
//
//=========================================================================

use std::any::Any;

use log::debug;

use crate::core::Context;
use crate::object::{Component, GameObject};

//=== Health ==============================================================

/// Hit points plus post-damage invincibility frames.
pub struct Health {
    max_health: i32,
    current_health: i32,
    invincible: bool,
    invincibility_duration: f32,
    invincibility_timer: f32,
}

impl Health {
    /// Creates a health pool at full hit points.
    ///
    /// `max_health` is clamped to at least 1; a zero-duration window
    /// disables invincibility frames entirely.
    pub fn new(max_health: i32, invincibility_duration: f32) -> Self {
        let max_health = max_health.max(1);
        Self {
            max_health,
            current_health: max_health,
            invincible: false,
            invincibility_duration: invincibility_duration.max(0.0),
            invincibility_timer: 0.0,
        }
    }

    //--- Damage & Healing -------------------------------------------------

    /// Applies damage. Returns `true` if the damage landed, `false`
    /// while invincible or for non-positive amounts.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if amount <= 0 || self.invincible || !self.is_alive() {
            return false;
        }

        self.current_health = (self.current_health - amount).max(0);
        debug!(
            "Health: took {} damage, {}/{} left",
            amount, self.current_health, self.max_health
        );

        if self.invincibility_duration > 0.0 {
            self.set_invincible(self.invincibility_duration);
        }
        true
    }

    /// Heals up to the maximum. Returns the health after healing.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if amount > 0 {
            self.current_health = (self.current_health + amount).min(self.max_health);
        }
        self.current_health
    }

    /// Starts (or restarts) an invincibility window.
    pub fn set_invincible(&mut self, duration: f32) {
        self.invincible = true;
        self.invincibility_timer = duration;
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn set_current_health(&mut self, health: i32) {
        self.current_health = health.clamp(0, self.max_health);
    }

    pub fn set_max_health(&mut self, max_health: i32) {
        self.max_health = max_health.max(1);
        self.current_health = self.current_health.min(self.max_health);
    }
}

impl Component for Health {
    fn update(&mut self, dt: f32, _owner: &mut GameObject, _ctx: &mut Context) {
        if self.invincible {
            self.invincibility_timer -= dt;
            if self.invincibility_timer <= 0.0 {
                self.invincible = false;
                self.invincibility_timer = 0.0;
            }
        }
    }

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
