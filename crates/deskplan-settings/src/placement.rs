//! Placement tunables (all millimeters).

use crate::error::ConfigError;
use deskplan_core::door::{DoorSpec, DOOR_BUFFER_DEPTH, DOOR_WIDTH};
use deskplan_core::{Side, DEFAULT_DESK_DEPTH};
use serde::{Deserialize, Serialize};

/// Numeric constants used by the desk–chair composer, the pattern
/// generators and equipment placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Chair square edge
    pub chair_size: i64,
    /// Gap between a desk edge and its chair
    pub chair_desk_gap: i64,
    pub door_width: i64,
    pub door_buffer_depth: i64,
    /// Distance units and desks keep from the door tip
    pub door_clear_radius: i64,
    /// Desk depth when a workstation id carries none
    pub default_desk_depth: i64,
    /// Gap between equipment and desks on the same wall
    pub desk_side_clearance: i64,
    /// Gap kept around each piece of equipment along its wall
    pub equipment_clearance: i64,
    /// Equipment clearance the solver uses when packing candidates
    pub solver_equipment_clearance: i64,
    /// Radius around desk centres kept free of equipment on non-desk walls
    pub desk_clear_radius: i64,
    /// Step of the equipment wall sweep
    pub equipment_step: i64,
    /// Door-tip clearance when the nearest desk presents its short edge,
    /// and for face-to-face units opposite a short-wall door
    pub short_edge_door_clearance: i64,
    /// Minimum chair back clearance of a face-to-face band
    pub face_back_clearance: i64,
    /// Desk depth used by face-to-face layouts with an odd seat count
    pub odd_seat_desk_depth: i64,
    pub rotated_desk_width: i64,
    pub rotated_desk_depth: i64,
    /// Free space required between the rotated odd desk and the wall
    pub rotated_desk_margin: i64,
    /// Wall seats in the mixed pattern
    pub mixed_wall_seats: usize,
    /// Offset between the mixed wall column and the face-to-face pairs
    pub mixed_center_offset: i64,
    /// Wall thickness added to nominal room dimensions
    pub room_padding: i64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            chair_size: 700,
            chair_desk_gap: 5,
            door_width: DOOR_WIDTH,
            door_buffer_depth: DOOR_BUFFER_DEPTH,
            door_clear_radius: 900,
            default_desk_depth: DEFAULT_DESK_DEPTH,
            desk_side_clearance: 200,
            equipment_clearance: 100,
            solver_equipment_clearance: 0,
            desk_clear_radius: 1225,
            equipment_step: 50,
            short_edge_door_clearance: 200,
            face_back_clearance: 850,
            odd_seat_desk_depth: 600,
            rotated_desk_width: 600,
            rotated_desk_depth: 1200,
            rotated_desk_margin: 1000,
            mixed_wall_seats: 2,
            mixed_center_offset: 100,
            room_padding: 10,
        }
    }
}

impl PlacementConfig {
    /// Chair plus its desk gap
    pub fn chair_space(&self) -> i64 {
        self.chair_size + self.chair_desk_gap
    }

    /// Back clearance a face-to-face band keeps from both room edges
    pub fn min_back_clearance(&self) -> i64 {
        self.chair_space().max(self.face_back_clearance)
    }

    /// Door spec on `side` using the configured door size
    pub fn door(&self, side: Side) -> DoorSpec {
        DoorSpec::new(side).with_size(self.door_width, self.door_buffer_depth)
    }

    /// Check every field for a sensible range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("chair_size", self.chair_size),
            ("door_width", self.door_width),
            ("door_buffer_depth", self.door_buffer_depth),
            ("default_desk_depth", self.default_desk_depth),
            ("equipment_step", self.equipment_step),
            ("odd_seat_desk_depth", self.odd_seat_desk_depth),
            ("rotated_desk_width", self.rotated_desk_width),
            ("rotated_desk_depth", self.rotated_desk_depth),
        ];
        for (key, value) in positive {
            if value <= 0 {
                return Err(out_of_range(key, value));
            }
        }

        let non_negative = [
            ("chair_desk_gap", self.chair_desk_gap),
            ("door_clear_radius", self.door_clear_radius),
            ("desk_side_clearance", self.desk_side_clearance),
            ("equipment_clearance", self.equipment_clearance),
            ("solver_equipment_clearance", self.solver_equipment_clearance),
            ("desk_clear_radius", self.desk_clear_radius),
            ("short_edge_door_clearance", self.short_edge_door_clearance),
            ("face_back_clearance", self.face_back_clearance),
            ("rotated_desk_margin", self.rotated_desk_margin),
            ("mixed_center_offset", self.mixed_center_offset),
            ("room_padding", self.room_padding),
        ];
        for (key, value) in non_negative {
            if value < 0 {
                return Err(out_of_range(key, value));
            }
        }
        Ok(())
    }
}

fn out_of_range(key: &str, value: i64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: format!("placement.{key}"),
        value: value.to_string(),
    }
}
