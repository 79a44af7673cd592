//! Bot AI
//!
//! Each tick a single coin flip decides whether the bot side acts. When it
//! does, the bot nearest the ball takes one fixed-length step toward it and
//! is clamped to the upper half.

use rand::Rng;

use super::state::{Agent, Ball, GameEvent};
use crate::consts::*;
use crate::distance;

/// Run one bot activation roll. Returns the id of the agent that moved.
pub fn bot_step<R: Rng>(
    agents: &mut [Agent],
    ball: &Ball,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Option<u32> {
    if rng.random::<f64>() >= BOT_ACTIVATION_CHANCE {
        return None;
    }
    step_nearest_bot(agents, ball, events)
}

/// Move the bot closest to the ball one step toward it (ties: first in
/// roster order). Bots within [`BOT_PROXIMITY`] of the ball hold position.
///
/// The stepped position is clamped to [`AWAY_REGION`](crate::field::AWAY_REGION).
/// A bot that starts outside the region (the kickoff formation places one
/// there) is snapped back into it, which can leave it farther from the ball
/// than before. Only bots already inside the region strictly close in.
pub fn step_nearest_bot(
    agents: &mut [Agent],
    ball: &Ball,
    events: &mut Vec<GameEvent>,
) -> Option<u32> {
    let bot = agents.iter_mut().filter(|a| a.is_bot()).min_by(|a, b| {
        distance(a.pos, ball.pos)
            .partial_cmp(&distance(b.pos, ball.pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;

    let to_ball = ball.pos - bot.pos;
    let dist = to_ball.length();
    if dist <= BOT_PROXIMITY {
        return None;
    }

    bot.move_clamped(bot.pos + to_ball / dist * BOT_SPEED);
    events.push(GameEvent::BotMoved {
        agent: bot.id,
        to: bot.pos,
    });
    log::debug!("Bot {} stepped to {:?}", bot.id, bot.pos);
    Some(bot.id)
}
