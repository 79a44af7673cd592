//! Read-only view of the simulation handed to renderers after each tick

use glam::Vec2;
use serde::Serialize;

use super::input::DragState;
use super::state::{Control, GameState, Score, Team};

/// How an agent is driven (selection state is reported separately)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ControlKind {
    Human,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub team: Team,
    pub control: ControlKind,
    pub selected: bool,
}

/// Active drag gesture, for drawing an aim line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AimView {
    pub agent: u32,
    pub start: Vec2,
    pub current: Vec2,
}

/// Post-mutation state for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub frozen: bool,
    pub ball: BallView,
    pub agents: Vec<AgentView>,
    pub score: Score,
    pub aim: Option<AimView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let agents = state
            .agents
            .iter()
            .map(|a| AgentView {
                id: a.id,
                pos: a.pos,
                radius: a.radius,
                team: a.team,
                control: match a.control {
                    Control::Human { .. } => ControlKind::Human,
                    Control::Bot => ControlKind::Bot,
                },
                selected: a.is_selected(),
            })
            .collect();

        let aim = match state.drag {
            DragState::Dragging {
                agent,
                start,
                current,
            } => state.agents.get(agent).map(|a| AimView {
                agent: a.id,
                start,
                current,
            }),
            DragState::Idle => None,
        };

        Self {
            tick: state.time_ticks,
            frozen: state.is_frozen(),
            ball: BallView {
                pos: state.ball.pos,
                radius: state.ball.radius,
            },
            agents,
            score: state.score,
            aim,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Consumer of per-tick snapshots (drawing, audio, recording)
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_reflects_state() {
        let mut state = GameState::new(3);
        state.agents[2].set_selected(true);
        state.drag = DragState::Dragging {
            agent: 2,
            start: Vec2::new(280.0, 1170.0),
            current: Vec2::new(300.0, 1200.0),
        };

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.agents.len(), 10);
        assert_eq!(snap.ball.radius, 15.0);
        assert!(snap.agents[2].selected);
        assert_eq!(snap.agents[2].control, ControlKind::Human);
        assert_eq!(snap.agents[7].control, ControlKind::Bot);
        assert_eq!(snap.agents[7].team, Team::Away);
        assert_eq!(snap.aim.as_ref().map(|a| a.agent), Some(2));
        assert!(!snap.frozen);
    }

    #[test]
    fn test_snapshot_json() {
        let state = GameState::new(3);
        let json = Snapshot::capture(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"]["home"], 0);
        assert_eq!(value["ball"]["pos"][0], 360.0);
        assert_eq!(value["agents"][0]["control"], "Human");
        assert!(value["aim"].is_null());
    }
}
