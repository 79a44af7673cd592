//! Goal judging and the post-goal pause

use super::state::{GameEvent, GamePhase, GameState, Goal};
use crate::consts::GOAL_PAUSE_TICKS;

/// Score a goal, put the ball back on the spot and freeze the game.
///
/// Top-mouth crossings count for the home (human) side, bottom-mouth
/// crossings for the away (bot) side.
pub fn resolve_goal(state: &mut GameState, goal: Goal) {
    state.score.record(goal);
    state.ball.reset();
    state.phase = GamePhase::Frozen {
        until_tick: state.time_ticks + GOAL_PAUSE_TICKS,
    };
    state.events.push(GameEvent::Goal(goal));

    log::info!(
        "{:?} - score YOU {} : {} BOT",
        goal,
        state.score.home,
        state.score.away
    );
}

/// End the pause once its deadline is reached. Returns true while still frozen.
pub fn update_freeze(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Frozen { until_tick } if state.time_ticks < until_tick => true,
        GamePhase::Frozen { .. } => {
            state.phase = GamePhase::Live;
            state.events.push(GameEvent::Resumed);
            log::debug!("Play resumed at tick {}", state.time_ticks);
            false
        }
        GamePhase::Live => false,
    }
}
