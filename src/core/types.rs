//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 2D screen-space point, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned screen-space bounding box, in pixels
///
/// Y grows downward, as in window coordinates: `top < bottom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Midpoint of the left edge
    pub fn left_mid(&self) -> Vec2 {
        Vec2::new(self.left, (self.top + self.bottom) / 2.0)
    }

    /// Midpoint of the right edge
    pub fn right_mid(&self) -> Vec2 {
        Vec2::new(self.right, (self.top + self.bottom) / 2.0)
    }

    /// Midpoint of the top edge
    pub fn top_mid(&self) -> Vec2 {
        Vec2::new((self.left + self.right) / 2.0, self.top)
    }

    /// Midpoint of the bottom edge
    pub fn bottom_mid(&self) -> Vec2 {
        Vec2::new((self.left + self.right) / 2.0, self.bottom)
    }

    /// Shift the box by a pixel delta (viewport scroll)
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// Semantic interface regions the walkthrough can reference
///
/// Closed set: a step highlights one of these (or nothing), and the host
/// surface registers live elements under them. The panel itself is a region
/// so its box is tracked through the same lookup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiRegion {
    TutorialPanel,
    Hand,
    EnergyMeter,
    EndTurnButton,
    DrawPile,
    DiscardPile,
    EnemyBoard,
    PlayerStatus,
}

/// Handle to a live element registered with the UI surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Unique identifier for a box-change subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}
