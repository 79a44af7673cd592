//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (roster order: home agents, then away agents)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bot;
pub mod collision;
pub mod goal;
pub mod input;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use bot::{bot_step, step_nearest_bot};
pub use collision::{CollisionResult, agent_ball_collision, resolve_agent_ball, resolve_all};
pub use goal::{resolve_goal, update_freeze};
pub use input::{DragState, drag_displacement};
pub use snapshot::{AgentView, AimView, BallView, ControlKind, Renderer, Snapshot};
pub use state::{
    AWAY_FORMATION, Agent, Ball, Control, GameEvent, GamePhase, GameState, Goal, HOME_FORMATION,
    Score, Team,
};
pub use tick::{InputEvent, PointerEvent, SimulationLoop, TickInput, tick};
