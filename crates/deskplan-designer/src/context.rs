//! Read-only inputs shared by every generator call of one solve.

use deskplan_core::{parse_desk_depth, Catalog, DoorLayout, Point, Rect, Room, Side};
use deskplan_settings::PlacementConfig;

/// Room, catalog, tunables, blocking regions and the optional door
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    pub room: Room,
    pub catalog: &'a Catalog,
    pub config: &'a PlacementConfig,
    /// Door buffer and pillars; never mutated during a solve
    pub blocks: &'a [Rect],
    pub door: Option<&'a DoorLayout>,
}

impl<'a> PlacementContext<'a> {
    pub fn new(
        room: Room,
        catalog: &'a Catalog,
        config: &'a PlacementConfig,
        blocks: &'a [Rect],
    ) -> Self {
        Self {
            room,
            catalog,
            config,
            blocks,
            door: None,
        }
    }

    pub fn with_door(mut self, door: &'a DoorLayout) -> Self {
        self.door = Some(door);
        self
    }

    pub fn door_tip(&self) -> Option<&'a Point> {
        self.door.map(|d| &d.tip)
    }

    pub fn door_side(&self) -> Option<Side> {
        self.door.map(|d| d.side)
    }

    /// Full door-tip clearance radius
    pub fn door_radius(&self) -> f64 {
        self.config.door_clear_radius as f64
    }

    /// `(along-wall length, unit depth)` of a workstation type, or `None`
    /// when the catalog does not know it
    pub fn unit_size(&self, ws_type: &str) -> Option<(i64, i64)> {
        match self.catalog.workstation_unit(ws_type) {
            Ok(size) => Some(size),
            Err(err) => {
                tracing::warn!("Skipping workstation type: {}", err);
                None
            }
        }
    }

    /// Desk depth for a workstation type, capped by its unit depth
    pub fn desk_depth(&self, ws_type: &str, unit_depth: i64) -> i64 {
        parse_desk_depth(ws_type, self.config.default_desk_depth).min(unit_depth)
    }
}
