//! Field geometry
//!
//! Immutable layout of the pitch. The physics reads the play bounds, goal
//! mouth and half-field regions from here, and renderers draw from the same
//! values so that what is drawn is what the ball collides with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_to;

/// Display surface dimensions
pub const SCREEN_WIDTH: f32 = 720.0;
pub const SCREEN_HEIGHT: f32 = 1520.0;

/// Field center (kickoff spot)
pub const CENTER: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// Area an agent's center is allowed to occupy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min: Vec2,
    pub max: Vec2,
}

impl Region {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        clamp_to(p, self.min, self.max)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Ball containment box. Crossing top or bottom inside the goal mouth is a goal.
pub const PLAY_AREA: Rect = Rect::new(55.0, 25.0, SCREEN_WIDTH - 110.0, SCREEN_HEIGHT - 50.0);

/// Goal mouth horizontal range (exclusive on both ends)
pub const GOAL_MOUTH_MIN_X: f32 = 190.0;
pub const GOAL_MOUTH_MAX_X: f32 = 530.0;

/// Whether `x` lies strictly inside the goal mouth
#[inline]
pub fn in_goal_mouth(x: f32) -> bool {
    GOAL_MOUTH_MIN_X < x && x < GOAL_MOUTH_MAX_X
}

/// Away (bot) goal, defended at the top
pub const GOAL_TOP: Rect = Rect::new(190.0, 95.0, 340.0, 138.0);
/// Home (human) goal, defended at the bottom
pub const GOAL_BOTTOM: Rect = Rect::new(190.0, SCREEN_HEIGHT - 233.0, 340.0, 138.0);

/// Pitch markings (renderer only)
pub const PITCH: Rect = Rect::new(27.0, 233.0, SCREEN_WIDTH - 54.0, SCREEN_HEIGHT - 466.0);
pub const HALFWAY_Y: f32 = SCREEN_HEIGHT / 2.0;
pub const CENTER_CIRCLE_RADIUS: f32 = 80.0;
pub const PENALTY_BOX_TOP: Rect = Rect::new(200.0, 233.0, 330.0, 120.0);
pub const PENALTY_BOX_BOTTOM: Rect = Rect::new(200.0, SCREEN_HEIGHT - 353.0, 330.0, 120.0);
pub const GOAL_AREA_TOP: Rect = Rect::new(250.0, 233.0, 230.0, 60.0);
pub const GOAL_AREA_BOTTOM: Rect = Rect::new(250.0, SCREEN_HEIGHT - 293.0, 230.0, 60.0);

/// Side margin shared by both half-field regions
const REGION_SIDE_MARGIN: f32 = 85.0;

/// Home agents: lower half, 50 below the halfway line to 260 above the bottom edge
pub const HOME_REGION: Region = Region::new(
    Vec2::new(REGION_SIDE_MARGIN, SCREEN_HEIGHT / 2.0 + 50.0),
    Vec2::new(SCREEN_WIDTH - REGION_SIDE_MARGIN, SCREEN_HEIGHT - 260.0),
);

/// Away agents: 260 below the top edge to 50 above the halfway line
pub const AWAY_REGION: Region = Region::new(
    Vec2::new(REGION_SIDE_MARGIN, 260.0),
    Vec2::new(
        SCREEN_WIDTH - REGION_SIDE_MARGIN,
        SCREEN_HEIGHT / 2.0 - 50.0,
    ),
);
