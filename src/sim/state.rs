//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the controllers
//! receive references to the pieces they need and keep no copies.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::DragState;
use crate::consts::*;
use crate::field::{AWAY_REGION, CENTER, HOME_REGION, Region, SCREEN_HEIGHT};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Live,
    /// Goal pause: nothing but the tick counter advances until `until_tick`
    Frozen { until_tick: u64 },
}

/// Which side of the pitch a team defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    /// Defends the bottom goal, plays the lower half
    Home,
    /// Defends the top goal, plays the upper half
    Away,
}

impl Team {
    /// Half-field region this team's agents are clamped to
    pub fn region(self) -> Region {
        match self {
            Team::Home => HOME_REGION,
            Team::Away => AWAY_REGION,
        }
    }
}

/// Who moves an agent. Only human agents can be selected by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    Human { selected: bool },
    Bot,
}

/// Boundary-crossing signal from [`Ball::advance`](super::ball)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// Ball crossed the top goal mouth: a point for the human side
    HomeScored,
    /// Ball crossed the bottom goal mouth: a point for the bot side
    AwayScored,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(CENTER)
    }
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    pub fn with_velocity(pos: Vec2, vel: Vec2) -> Self {
        Self {
            vel,
            ..Self::new(pos)
        }
    }
}

/// A player disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub team: Team,
    pub control: Control,
}

impl Agent {
    pub fn human(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: AGENT_RADIUS,
            team: Team::Home,
            control: Control::Human { selected: false },
        }
    }

    pub fn bot(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: AGENT_RADIUS,
            team: Team::Away,
            control: Control::Bot,
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        matches!(self.control, Control::Human { .. })
    }

    #[inline]
    pub fn is_bot(&self) -> bool {
        self.control == Control::Bot
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        matches!(self.control, Control::Human { selected: true })
    }

    /// Set the selection flag (no-op for bots)
    pub fn set_selected(&mut self, value: bool) {
        if let Control::Human { selected } = &mut self.control {
            *selected = value;
        }
    }

    /// Whether a pointer at `p` lands on this agent (edge inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        (p - self.pos).length() <= self.radius
    }

    /// Move to `target`, clamped to the team's half-field
    pub fn move_clamped(&mut self, target: Vec2) {
        self.pos = self.team.region().clamp(target);
    }
}

/// Goals scored by each side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn record(&mut self, goal: Goal) {
        match goal {
            Goal::HomeScored => self.home += 1,
            Goal::AwayScored => self.away += 1,
        }
    }
}

/// Things that happened during a tick (for renderers and sound hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball crossed a goal mouth
    Goal(Goal),
    /// Goal pause ended
    Resumed,
    /// Pointer-down landed on a human agent
    AgentSelected { agent: u32 },
    /// Drag gesture released and the human agent teleported
    AgentMoved { agent: u32, to: Vec2 },
    /// Bot took a step toward the ball
    BotMoved { agent: u32, to: Vec2 },
    /// Agent touched the ball
    Kick { agent: u32 },
}

/// Starting formation, home side (lower half)
pub const HOME_FORMATION: [Vec2; 5] = [
    Vec2::new(200.0, SCREEN_HEIGHT - 200.0),
    Vec2::new(520.0, SCREEN_HEIGHT - 200.0),
    Vec2::new(280.0, SCREEN_HEIGHT - 350.0),
    Vec2::new(360.0, SCREEN_HEIGHT - 120.0),
    Vec2::new(440.0, SCREEN_HEIGHT - 350.0),
];

/// Starting formation, away side (upper half)
pub const AWAY_FORMATION: [Vec2; 5] = [
    Vec2::new(280.0, 350.0),
    Vec2::new(360.0, 200.0),
    Vec2::new(440.0, 350.0),
    Vec2::new(200.0, 500.0),
    Vec2::new(520.0, 500.0),
];

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Bot activation RNG
    pub rng: Pcg32,
    /// Simulation tick counter (advances while frozen too)
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub ball: Ball,
    /// Roster order: home agents first, then away agents
    pub agents: Vec<Agent>,
    pub score: Score,
    pub drag: DragState,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the standard formation
    pub fn new(seed: u64) -> Self {
        let agents = HOME_FORMATION
            .iter()
            .map(|&pos| (pos, Team::Home))
            .chain(AWAY_FORMATION.iter().map(|&pos| (pos, Team::Away)))
            .enumerate()
            .map(|(i, (pos, team))| match team {
                Team::Home => Agent::human(i as u32, pos),
                Team::Away => Agent::bot(i as u32, pos),
            })
            .collect();

        Self::with_agents(seed, agents)
    }

    /// Create a game with a custom roster (ball at center)
    pub fn with_agents(seed: u64, agents: Vec<Agent>) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Live,
            ball: Ball::default(),
            agents,
            score: Score::default(),
            drag: DragState::Idle,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        matches!(self.phase, GamePhase::Frozen { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_formation() {
        let state = GameState::new(1);
        assert_eq!(state.agents.len(), 10);
        let (home, away) = state.agents.split_at(5);
        assert!(home.iter().all(|a| a.is_human() && a.team == Team::Home));
        assert!(away.iter().all(|a| a.is_bot() && a.team == Team::Away));
        assert_eq!(state.agents[0].pos, Vec2::new(200.0, 1320.0));
        assert_eq!(state.agents[6].pos, Vec2::new(360.0, 200.0));
        assert_eq!(state.ball.pos, CENTER);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.phase, GamePhase::Live);
    }

    #[test]
    fn test_agent_radius_exceeds_ball_radius() {
        let state = GameState::new(1);
        assert!(state.agents.iter().all(|a| a.radius > state.ball.radius));
    }

    #[test]
    fn test_bots_cannot_be_selected() {
        let mut bot = Agent::bot(0, Vec2::new(300.0, 300.0));
        bot.set_selected(true);
        assert!(!bot.is_selected());

        let mut human = Agent::human(1, Vec2::new(300.0, 1000.0));
        human.set_selected(true);
        assert!(human.is_selected());
    }

    #[test]
    fn test_contains_point_edge_inclusive() {
        let agent = Agent::human(0, Vec2::new(100.0, 100.0));
        assert!(agent.contains_point(Vec2::new(130.0, 100.0)));
        assert!(!agent.contains_point(Vec2::new(130.5, 100.0)));
    }

    #[test]
    fn test_score_mapping() {
        let mut score = Score::default();
        score.record(Goal::HomeScored);
        score.record(Goal::HomeScored);
        score.record(Goal::AwayScored);
        assert_eq!(score, Score { home: 2, away: 1 });
    }
}
