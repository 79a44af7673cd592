//! Drag-to-shoot input
//!
//! A pointer-down on a human agent selects it; the matching pointer-up
//! teleports it by half the reversed drag vector (slingshot style) and clamps
//! it to the home half. Only one gesture is tracked at a time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Agent, GameEvent};
use crate::consts::DRAG_SCALE;

/// Gesture state machine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Roster index of the selected agent
        agent: usize,
        /// Pointer position at pointer-down
        start: Vec2,
        /// Latest pointer position (aim preview only)
        current: Vec2,
    },
}

/// Displacement for a gesture from `start` to `end`
#[inline]
pub fn drag_displacement(start: Vec2, end: Vec2) -> Vec2 {
    (start - end) * DRAG_SCALE
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Roster index of the selected agent, if any
    pub fn selected(&self) -> Option<usize> {
        match *self {
            DragState::Dragging { agent, .. } => Some(agent),
            DragState::Idle => None,
        }
    }

    /// Start a gesture if `at` lands on a human agent (first in roster order).
    /// Ignored while a gesture is already active. Returns true if an agent
    /// was selected.
    pub fn pointer_down(
        &mut self,
        agents: &mut [Agent],
        at: Vec2,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }

        let Some(index) = agents
            .iter()
            .position(|a| a.is_human() && a.contains_point(at))
        else {
            return false;
        };

        let agent = &mut agents[index];
        agent.set_selected(true);
        events.push(GameEvent::AgentSelected { agent: agent.id });
        log::debug!("Selected agent {} at {:?}", agent.id, agent.pos);

        *self = DragState::Dragging {
            agent: index,
            start: at,
            current: at,
        };
        true
    }

    /// Track the pointer during a gesture
    pub fn pointer_move(&mut self, at: Vec2) {
        if let DragState::Dragging { current, .. } = self {
            *current = at;
        }
    }

    /// Finish the gesture. Returns the agent's new position, or None if no
    /// gesture was active.
    pub fn pointer_up(
        &mut self,
        agents: &mut [Agent],
        at: Vec2,
        events: &mut Vec<GameEvent>,
    ) -> Option<Vec2> {
        let DragState::Dragging { agent: index, start, .. } = *self else {
            return None;
        };
        *self = DragState::Idle;

        let agent = agents.get_mut(index)?;
        agent.move_clamped(agent.pos + drag_displacement(start, at));
        agent.set_selected(false);

        events.push(GameEvent::AgentMoved {
            agent: agent.id,
            to: agent.pos,
        });
        log::debug!("Agent {} released to {:?}", agent.id, agent.pos);
        Some(agent.pos)
    }
}
