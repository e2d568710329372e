//! Wall sides, sweep axes and the placed-item model shared by the placement
//! and scoring crates.

use crate::catalog::FurnitureCategory;
use crate::error::LayoutError;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four room walls; also used as a cardinal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "T")]
    Top,
    #[serde(rename = "B")]
    Bottom,
}

impl Side {
    /// All sides in wall-priority order
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Single-letter code (`L`, `R`, `T`, `B`)
    pub fn code(&self) -> &'static str {
        match self {
            Side::Left => "L",
            Side::Right => "R",
            Side::Top => "T",
            Side::Bottom => "B",
        }
    }

    /// The wall across the room
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    /// L and R: the walls swept along the depth (y) axis
    pub fn is_long_wall(&self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    /// Axis a sweep along this wall advances on
    pub fn sweep_axis(&self) -> Axis {
        if self.is_long_wall() {
            Axis::Y
        } else {
            Axis::X
        }
    }

    /// Length of this wall in the given room
    pub fn wall_length(&self, room_w: i64, room_d: i64) -> i64 {
        match self.sweep_axis() {
            Axis::X => room_w,
            Axis::Y => room_d,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Side {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LEFT" => Ok(Side::Left),
            "R" | "RIGHT" => Ok(Side::Right),
            "T" | "TOP" => Ok(Side::Top),
            "B" | "BOTTOM" => Ok(Side::Bottom),
            _ => Err(LayoutError::InvalidSide {
                value: s.to_string(),
            }),
        }
    }
}

/// Coordinate axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// What a placed item is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Desk,
    Chair {
        /// Side of the chair its backrest faces
        back: Side,
        /// 0 for ordinary seats, 90 for the perpendicular odd seat
        rotation_deg: u16,
    },
    Equipment {
        key: String,
        category: FurnitureCategory,
    },
}

impl ItemKind {
    /// Stable type name used by exporters and reports
    pub fn type_name(&self) -> &str {
        match self {
            ItemKind::Desk => "desk",
            ItemKind::Chair { .. } => "chair",
            ItemKind::Equipment { key, .. } => key,
        }
    }
}

/// An item emitted by a generator; immutable once placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedItem {
    #[serde(flatten)]
    pub kind: ItemKind,
    pub rect: Rect,
    pub label: String,
}

impl PlacedItem {
    /// Create a desk item
    pub fn desk(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Desk,
            rect,
            label: label.into(),
        }
    }

    /// Create a chair item
    pub fn chair(rect: Rect, label: impl Into<String>, back: Side, rotation_deg: u16) -> Self {
        Self {
            kind: ItemKind::Chair { back, rotation_deg },
            rect,
            label: label.into(),
        }
    }

    /// Create an equipment item
    pub fn equipment(
        rect: Rect,
        label: impl Into<String>,
        key: impl Into<String>,
        category: FurnitureCategory,
    ) -> Self {
        Self {
            kind: ItemKind::Equipment {
                key: key.into(),
                category,
            },
            rect,
            label: label.into(),
        }
    }

    pub fn is_desk(&self) -> bool {
        matches!(self.kind, ItemKind::Desk)
    }

    pub fn is_chair(&self) -> bool {
        matches!(self.kind, ItemKind::Chair { .. })
    }

    pub fn is_equipment(&self) -> bool {
        matches!(self.kind, ItemKind::Equipment { .. })
    }

    /// Backrest side for chairs
    pub fn chair_back(&self) -> Option<Side> {
        match self.kind {
            ItemKind::Chair { back, .. } => Some(back),
            _ => None,
        }
    }

    /// Walls this item sits flush against
    pub fn wall_sides(&self, room_w: i64, room_d: i64) -> Vec<Side> {
        let r = &self.rect;
        let mut sides = Vec::new();
        if r.x == 0 {
            sides.push(Side::Left);
        }
        if r.x2() == room_w {
            sides.push(Side::Right);
        }
        if r.y == 0 {
            sides.push(Side::Top);
        }
        if r.y2() == room_d {
            sides.push(Side::Bottom);
        }
        sides
    }
}
