//! Candidate layouts produced by the pattern generators.

use deskplan_core::{LayoutError, PlacedItem, Point, Rect, Side};
use deskplan_settings::PlacementConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workstation arrangement strategy that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Pattern {
    DoubleWall,
    DoubleWallTopBottom,
    SingleWall(Side),
    FaceToFaceCenter,
    Mixed,
}

impl Pattern {
    pub fn name(&self) -> String {
        match self {
            Self::DoubleWall => "double_wall".to_string(),
            Self::DoubleWallTopBottom => "double_wall_top_bottom".to_string(),
            Self::SingleWall(side) => format!("single_wall_{}", side.code()),
            Self::FaceToFaceCenter => "face_to_face_center".to_string(),
            Self::Mixed => "mixed".to_string(),
        }
    }

    /// Patterns whose desks are arranged in opposing pairs
    pub fn is_face_to_face(&self) -> bool {
        matches!(self, Self::FaceToFaceCenter | Self::Mixed)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Pattern {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "double_wall" => Ok(Self::DoubleWall),
            "double_wall_top_bottom" => Ok(Self::DoubleWallTopBottom),
            "face_to_face_center" => Ok(Self::FaceToFaceCenter),
            "mixed" => Ok(Self::Mixed),
            other => other
                .strip_prefix("single_wall_")
                .and_then(|side| side.parse::<Side>().ok())
                .map(Self::SingleWall)
                .ok_or_else(|| LayoutError::InvalidPattern {
                    value: other.to_string(),
                }),
        }
    }
}

impl TryFrom<String> for Pattern {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.name()
    }
}

/// One full layout for one desk type and one pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub ok: bool,
    pub seats_placed: usize,
    pub seats_required: usize,
    pub items: Vec<PlacedItem>,
    pub ws_type: String,
    pub pattern: Pattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_target: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_placed: Option<usize>,
}

impl CandidateResult {
    /// Candidate that placed nothing
    pub fn failed(ws_type: &str, pattern: Pattern, seats_required: usize) -> Self {
        Self {
            ok: false,
            seats_placed: 0,
            seats_required,
            items: Vec::new(),
            ws_type: ws_type.to_string(),
            pattern,
            equipment_target: None,
            equipment_placed: None,
        }
    }

    /// Finish a generator run: `ok` needs every seat placed and the nearest
    /// desk clear of the door tip
    pub fn evaluate(
        ws_type: &str,
        pattern: Pattern,
        seats_required: usize,
        seats_placed: usize,
        items: Vec<PlacedItem>,
        door_tip: Option<&Point>,
        config: &PlacementConfig,
    ) -> Self {
        let ok = seats_placed >= seats_required && door_clearance_ok(&items, door_tip, config);
        Self {
            ok,
            seats_placed,
            seats_required,
            items,
            ws_type: ws_type.to_string(),
            pattern,
            equipment_target: None,
            equipment_placed: None,
        }
    }

    pub fn desks(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter().filter(|item| item.is_desk())
    }

    pub fn chairs(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter().filter(|item| item.is_chair())
    }

    pub fn equipment(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter().filter(|item| item.is_equipment())
    }

    /// Equipment placed, zero when no equipment was requested
    pub fn equipment_count(&self) -> usize {
        self.equipment_placed.unwrap_or(0)
    }

    /// All requested equipment is in the layout
    pub fn equipment_satisfied(&self) -> bool {
        match self.equipment_target {
            Some(target) => self.equipment_count() >= target,
            None => true,
        }
    }
}

/// Nearest-desk door clearance.
///
/// The desk nearest to the tip must keep `short_edge_door_clearance` when
/// it presents its short edge to the tip and `door_clear_radius` otherwise.
pub fn door_clearance_ok(
    items: &[PlacedItem],
    door_tip: Option<&Point>,
    config: &PlacementConfig,
) -> bool {
    let Some(tip) = door_tip else {
        return true;
    };

    let nearest = items
        .iter()
        .filter(|item| item.is_desk())
        .map(|item| (item.rect, item.rect.distance_to_point(tip)))
        .fold(None::<(Rect, f64)>, |best, (rect, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((rect, dist)),
        });

    let Some((desk, dist)) = nearest else {
        return true;
    };

    let (dx, dy) = desk.point_gaps(tip);
    let facing_edge = if dx == 0.0 && dy == 0.0 {
        desk.short_side()
    } else if dx >= dy {
        desk.d
    } else {
        desk.w
    };

    let required = if facing_edge == desk.short_side() {
        config.short_edge_door_clearance
    } else {
        config.door_clear_radius
    };
    dist >= required as f64
}
