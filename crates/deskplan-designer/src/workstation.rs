//! # Desk–Chair Composer
//!
//! A workstation is one desk plus one square chair, offset from one desk
//! edge by a fixed gap and centred along that edge.

use deskplan_core::geometry::intersects_any;
use deskplan_core::{PlacedItem, Rect, Room, Side};
use deskplan_settings::PlacementConfig;

/// Chair rectangle for a desk, on the side given by `direction`.
///
/// Centring truncates toward zero, so an odd leftover millimeter goes to the
/// far side.
pub fn chair_rect(desk: &Rect, direction: Side, config: &PlacementConfig) -> Rect {
    let size = config.chair_size;
    let gap = config.chair_desk_gap;
    let centred_x = (2 * desk.x + desk.w - size) / 2;
    let centred_y = (2 * desk.y + desk.d - size) / 2;
    match direction {
        Side::Top => Rect::new(centred_x, desk.y - gap - size, size, size),
        Side::Bottom => Rect::new(centred_x, desk.y2() + gap, size, size),
        Side::Left => Rect::new(desk.x - gap - size, centred_y, size, size),
        Side::Right => Rect::new(desk.x2() + gap, centred_y, size, size),
    }
}

/// One desk and its chair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workstation {
    pub desk: Rect,
    pub chair: Rect,
    /// Side of the desk the chair sits on; also the chair's back side
    pub facing: Side,
    pub rotation_deg: u16,
}

impl Workstation {
    /// Compose a workstation with its chair on `direction`
    pub fn new(desk: Rect, direction: Side, config: &PlacementConfig) -> Self {
        Self {
            desk,
            chair: chair_rect(&desk, direction, config),
            facing: direction,
            rotation_deg: 0,
        }
    }

    /// Mark the chair as rotated (perpendicular seats)
    pub fn rotated(mut self, rotation_deg: u16) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    /// Desk flush against `wall` at `position` along it, chair towards the
    /// room interior
    pub fn against_wall(
        room: &Room,
        wall: Side,
        position: i64,
        along: i64,
        desk_depth: i64,
        config: &PlacementConfig,
    ) -> Self {
        let desk = match wall {
            Side::Left => Rect::new(0, position, desk_depth, along),
            Side::Right => Rect::new(room.width - desk_depth, position, desk_depth, along),
            Side::Top => Rect::new(position, 0, along, desk_depth),
            Side::Bottom => Rect::new(position, room.depth - desk_depth, along, desk_depth),
        };
        Self::new(desk, wall.opposite(), config)
    }

    /// Both rectangles inside the room and clear of the blocking regions.
    /// Other workstations are not consulted here.
    pub fn fits(&self, room: &Room, blocks: &[Rect]) -> bool {
        room.contains(&self.desk)
            && room.contains(&self.chair)
            && !intersects_any(&self.desk, blocks)
            && !intersects_any(&self.chair, blocks)
    }

    /// Desk and chair items labelled `WS{seat}_D` / `WS{seat}_C`
    pub fn into_items(self, seat: usize) -> [PlacedItem; 2] {
        [
            PlacedItem::desk(self.desk, format!("WS{seat}_D")),
            PlacedItem::chair(
                self.chair,
                format!("WS{seat}_C"),
                self.facing,
                self.rotation_deg,
            ),
        ]
    }
}
