//! Agent/ball collision detection and response
//!
//! Every touch is an arcade "kick": the ball velocity is overwritten with a
//! fixed-strength impulse directed away from the agent center. Momentum is not
//! conserved.

use glam::Vec2;

use super::state::{Agent, Ball, GameEvent};
use crate::consts::*;
use crate::{angle_to, distance, polar_to_cartesian};

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Direction from agent center to ball center (radians)
    pub angle: f32,
    /// Unit vector along `angle`
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            angle: 0.0,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between an agent disc and the ball
pub fn agent_ball_collision(
    agent_pos: Vec2,
    agent_radius: f32,
    ball_pos: Vec2,
    ball_radius: f32,
) -> CollisionResult {
    let dist = distance(agent_pos, ball_pos);
    let min_dist = agent_radius + ball_radius;

    if dist >= min_dist {
        return CollisionResult::miss();
    }

    // Coincident centers have no direction; kick along +x
    let angle = if dist < COINCIDENT_EPSILON {
        0.0
    } else {
        angle_to(agent_pos, ball_pos)
    };

    CollisionResult {
        hit: true,
        angle,
        normal: polar_to_cartesian(1.0, angle),
        penetration: min_dist - dist,
    }
}

/// Kick the ball away from `agent` if they overlap. Returns true on contact.
pub fn resolve_agent_ball(agent: &Agent, ball: &mut Ball) -> bool {
    let result = agent_ball_collision(agent.pos, agent.radius, ball.pos, ball.radius);
    if !result.hit {
        return false;
    }

    ball.vel = result.normal * KICK_IMPULSE;
    ball.pos += result.normal * result.penetration;
    true
}

/// Resolve every agent against the ball in roster order.
///
/// Each agent is tested against the ball as left by the previous one, so when
/// two agents overlap the ball in the same tick the later agent in the roster
/// decides the final velocity and position.
pub fn resolve_all(agents: &[Agent], ball: &mut Ball, events: &mut Vec<GameEvent>) {
    for agent in agents {
        if resolve_agent_ball(agent, ball) {
            log::debug!("Agent {} kicked the ball to {:?}", agent.id, ball.vel);
            events.push(GameEvent::Kick { agent: agent.id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_no_collision_when_apart() {
        let agent = Agent::human(0, Vec2::new(100.0, 100.0));
        let mut ball = Ball::with_velocity(Vec2::new(146.0, 100.0), Vec2::new(1.0, 1.0));
        assert!(!resolve_agent_ball(&agent, &mut ball));
        assert_eq!(ball.pos, Vec2::new(146.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let result = agent_ball_collision(Vec2::ZERO, 30.0, Vec2::new(45.0, 0.0), 15.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_kick_overwrites_velocity() {
        let agent = Agent::human(0, Vec2::new(300.0, 800.0));
        // Ball 20 below the agent, moving fast toward it
        let mut ball = Ball::with_velocity(Vec2::new(300.0, 820.0), Vec2::new(4.0, -30.0));
        assert!(resolve_agent_ball(&agent, &mut ball));

        assert!(ball.vel.x.abs() < EPS);
        assert!((ball.vel.y - KICK_IMPULSE).abs() < EPS);
        // Pushed out by the overlap (45 - 20 = 25)
        assert!((ball.pos.y - 845.0).abs() < EPS);
        assert!((ball.pos.x - 300.0).abs() < EPS);
    }

    #[test]
    fn test_kick_direction_diagonal() {
        let agent = Agent::bot(0, Vec2::new(0.0, 0.0));
        let mut ball = Ball::new(Vec2::new(10.0, 10.0));
        assert!(resolve_agent_ball(&agent, &mut ball));
        let expected = Vec2::new(1.0, 1.0).normalize() * KICK_IMPULSE;
        assert!((ball.vel - expected).length() < EPS);
        assert!((distance(agent.pos, ball.pos) - 45.0).abs() < EPS);
    }

    #[test]
    fn test_coincident_centers_use_fallback_angle() {
        let agent = Agent::human(0, Vec2::new(300.0, 900.0));
        let mut ball = Ball::new(Vec2::new(300.0, 900.0));

        let result = agent_ball_collision(agent.pos, agent.radius, ball.pos, ball.radius);
        assert!(result.hit);
        assert_eq!(result.angle, 0.0);

        assert!(resolve_agent_ball(&agent, &mut ball));
        assert!(ball.vel.x.is_finite() && ball.vel.y.is_finite());
        assert!((ball.vel.x - KICK_IMPULSE).abs() < EPS);
        assert!((ball.pos.x - 345.0).abs() < EPS);
        assert!((ball.pos.y - 900.0).abs() < EPS);
    }

    #[test]
    fn test_last_agent_in_roster_wins() {
        let above = Agent::bot(0, Vec2::new(300.0, 700.0));
        let below = Agent::human(1, Vec2::new(300.0, 760.0));
        let mut ball = Ball::new(Vec2::new(300.0, 725.0));
        let mut events = Vec::new();

        resolve_all(&[above.clone(), below.clone()], &mut ball, &mut events);

        // `above` kicks the ball down into `below`, which kicks it back up
        assert_eq!(
            events,
            vec![GameEvent::Kick { agent: 0 }, GameEvent::Kick { agent: 1 }]
        );
        assert!((ball.vel.y + KICK_IMPULSE).abs() < EPS);
        assert!((distance(below.pos, ball.pos) - 45.0).abs() < EPS);
        assert!((angle_to(below.pos, ball.pos) + FRAC_PI_2).abs() < EPS);
        // Left overlapping `above`; resolved again next tick
        assert!(distance(above.pos, ball.pos) < 45.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// After resolution the ball no longer overlaps the agent
            #[test]
            fn prop_resolution_separates(
                dx in -44.0f32..44.0,
                dy in -44.0f32..44.0,
            ) {
                let agent = Agent::human(0, Vec2::new(360.0, 1000.0));
                let mut ball = Ball::new(agent.pos + Vec2::new(dx, dy));
                resolve_agent_ball(&agent, &mut ball);
                let dist = distance(agent.pos, ball.pos);
                prop_assert!(dist >= agent.radius + ball.radius - EPS);
            }

            /// Every kick has the same strength
            #[test]
            fn prop_kick_is_fixed_strength(
                dx in -40.0f32..40.0,
                dy in -40.0f32..40.0,
                vx in -50.0f32..50.0,
                vy in -50.0f32..50.0,
            ) {
                let agent = Agent::bot(0, Vec2::new(360.0, 500.0));
                let mut ball = Ball::with_velocity(agent.pos + Vec2::new(dx, dy), Vec2::new(vx, vy));
                if resolve_agent_ball(&agent, &mut ball) {
                    prop_assert!((ball.vel.length() - KICK_IMPULSE).abs() < EPS);
                }
            }
        }
    }
}
