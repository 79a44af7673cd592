//! Ball integration: friction, wall restitution and goal detection

use super::state::{Ball, Goal};
use crate::consts::*;
use crate::field::{CENTER, PLAY_AREA, in_goal_mouth};

impl Ball {
    /// Advance the ball by `dt` ticks.
    ///
    /// Returns a goal when the ball crosses the top or bottom edge inside the
    /// goal mouth. In that case the position is left unclamped and the caller
    /// is expected to [`reset`](Ball::reset) the ball.
    pub fn advance(&mut self, dt: f32) -> Option<Goal> {
        self.pos += self.vel * dt;

        self.vel *= BALL_FRICTION.powf(dt);
        if self.vel.x.abs() < BALL_STOP_THRESHOLD {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < BALL_STOP_THRESHOLD {
            self.vel.y = 0.0;
        }

        let r = self.radius;

        // Side walls
        if self.pos.x - r < PLAY_AREA.left() {
            self.pos.x = PLAY_AREA.left() + r;
            self.vel.x *= -BALL_RESTITUTION;
        } else if self.pos.x + r > PLAY_AREA.right() {
            self.pos.x = PLAY_AREA.right() - r;
            self.vel.x *= -BALL_RESTITUTION;
        }

        // Top: away goal mouth
        if self.pos.y - r < PLAY_AREA.top() {
            if in_goal_mouth(self.pos.x) {
                return Some(Goal::HomeScored);
            }
            self.pos.y = PLAY_AREA.top() + r;
            self.vel.y *= -BALL_RESTITUTION;
        }

        // Bottom: home goal mouth
        if self.pos.y + r > PLAY_AREA.bottom() {
            if in_goal_mouth(self.pos.x) {
                return Some(Goal::AwayScored);
            }
            self.pos.y = PLAY_AREA.bottom() - r;
            self.vel.y *= -BALL_RESTITUTION;
        }

        None
    }

    /// Back to the kickoff spot, at rest
    pub fn reset(&mut self) {
        self.pos = CENTER;
        self.vel = glam::Vec2::ZERO;
    }

    /// Whether the ball edge is inside the play area on every side
    pub fn within_play_area(&self) -> bool {
        let r = self.radius;
        self.pos.x - r >= PLAY_AREA.left()
            && self.pos.x + r <= PLAY_AREA.right()
            && self.pos.y - r >= PLAY_AREA.top()
            && self.pos.y + r <= PLAY_AREA.bottom()
    }
}
