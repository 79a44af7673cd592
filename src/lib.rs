//! Soccer Pool - a drag-to-shoot two-team ball sport (YOU vs BOT)
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, drag input, bot AI, goals)
//! - `field`: Field geometry shared by the physics and any renderer
//! - `settings`: Runtime configuration for the native runner

pub mod field;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock duration of one tick in seconds
    pub const TICK_SECONDS: f32 = 1.0 / TICK_RATE as f32;
    /// Simulation timestep. Velocities are expressed in units per tick.
    pub const SIM_DT: f32 = 1.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Per-tick multiplicative velocity decay
    pub const BALL_FRICTION: f32 = 0.98;
    /// Velocity components below this snap to exactly zero
    pub const BALL_STOP_THRESHOLD: f32 = 0.1;
    /// Fraction of velocity kept (sign reversed) after a wall bounce
    pub const BALL_RESTITUTION: f32 = 0.8;

    /// Agent defaults
    pub const AGENT_RADIUS: f32 = 30.0;
    /// Ball speed after any agent touch (velocity is overwritten, not accumulated)
    pub const KICK_IMPULSE: f32 = 15.0;

    /// Drag gesture displacement scale
    pub const DRAG_SCALE: f32 = 0.5;

    /// Bot activation probability per tick
    pub const BOT_ACTIVATION_CHANCE: f64 = 0.02;
    /// Bots closer than this to the ball hold position
    pub const BOT_PROXIMITY: f32 = 50.0;
    /// Bot step length per activation
    pub const BOT_SPEED: f32 = 3.0;

    /// Goal pause (1 second at 60 Hz)
    pub const GOAL_PAUSE_TICKS: u64 = TICK_RATE as u64;

    /// Below this, agent and ball centers are treated as coincident
    pub const COINCIDENT_EPSILON: f32 = 1e-6;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Angle (radians) of the direction from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Clamp a point component-wise into the box `[min, max]`
#[inline]
pub fn clamp_to(point: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
}
