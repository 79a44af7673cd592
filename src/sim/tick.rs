//! Fixed timestep simulation tick
//!
//! Sequencing only: pointer input, ball integration, goal judging, bot AI and
//! collisions run in that order. The physics lives in the other modules.

use glam::Vec2;

use super::bot::bot_step;
use super::collision::resolve_all;
use super::goal::{resolve_goal, update_freeze};
use super::snapshot::{Renderer, Snapshot};
use super::state::GameState;
use crate::consts::*;

/// Pointer gesture events, in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

/// Everything the outside world can send the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Quit,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer events in arrival order
    pub pointer: Vec<PointerEvent>,
}

/// Advance the game state by one fixed timestep.
///
/// Returns false if the game was frozen for this tick, in which case `input`
/// was not consumed and should be offered again.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> bool {
    state.events.clear();
    state.time_ticks += 1;

    // Goal pause: nothing moves, input waits
    if update_freeze(state) {
        return false;
    }

    for &event in &input.pointer {
        apply_pointer(state, event);
    }

    if let Some(goal) = state.ball.advance(dt) {
        // Bot and collisions resume after the pause
        resolve_goal(state, goal);
        return true;
    }

    bot_step(
        &mut state.agents,
        &state.ball,
        &mut state.rng,
        &mut state.events,
    );

    resolve_all(&state.agents, &mut state.ball, &mut state.events);

    true
}

fn apply_pointer(state: &mut GameState, event: PointerEvent) {
    let GameState {
        drag,
        agents,
        events,
        ..
    } = state;

    match event {
        PointerEvent::Down(at) => {
            drag.pointer_down(agents, at, events);
        }
        PointerEvent::Move(at) => drag.pointer_move(at),
        PointerEvent::Up(at) => {
            drag.pointer_up(agents, at, events);
        }
    }
}

/// Owns the game state and drives it at a fixed rate
#[derive(Debug)]
pub struct SimulationLoop {
    pub state: GameState,
    /// Pointer events not yet consumed by a live tick
    pending: Vec<PointerEvent>,
    quit: bool,
    /// Unsimulated wall-clock time (seconds)
    accumulator: f32,
}

impl SimulationLoop {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(seed))
    }

    pub fn from_state(state: GameState) -> Self {
        log::info!("New game (seed {})", state.seed);
        Self {
            state,
            pending: Vec::new(),
            quit: false,
            accumulator: 0.0,
        }
    }

    /// Queue an input event. `Quit` takes effect before the next tick.
    pub fn push_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pointer(p) => self.pending.push(p),
            InputEvent::Quit => {
                if !self.quit {
                    log::info!("Quit requested at tick {}", self.state.time_ticks);
                }
                self.quit = true;
            }
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        !self.quit
    }

    /// Pointer events waiting for a live tick
    pub fn pending_events(&self) -> &[PointerEvent] {
        &self.pending
    }

    /// Run exactly one tick. Does nothing once quit.
    pub fn step(&mut self) -> bool {
        if self.quit {
            return false;
        }

        let input = TickInput {
            pointer: self.pending.clone(),
        };
        if tick(&mut self.state, &input, SIM_DT) {
            self.pending.clear();
        }
        true
    }

    /// Advance by `elapsed` seconds of wall-clock time, running as many fixed
    /// ticks as fit, then hand one snapshot to `renderer`. Returns the number
    /// of ticks run.
    pub fn update<R: Renderer>(&mut self, elapsed: f32, renderer: &mut R) -> u32 {
        self.accumulator += elapsed.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= TICK_SECONDS && substeps < MAX_SUBSTEPS {
            if !self.step() {
                break;
            }
            self.accumulator -= TICK_SECONDS;
            substeps += 1;
        }

        if substeps > 0 {
            renderer.draw(&self.snapshot());
        }
        substeps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}
