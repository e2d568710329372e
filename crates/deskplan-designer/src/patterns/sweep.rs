//! One lattice sweep shared by every wall-attached pattern.

use super::SeatLayout;
use crate::context::PlacementContext;
use crate::workstation::Workstation;
use deskplan_core::{clear_of_point, Rect, Room, Side};

/// End of the wall a sweep starts from (low or high coordinate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepFrom {
    #[default]
    Start,
    End,
}

/// Lattice spacing and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOptions {
    /// Extra gap between consecutive units
    pub gap: i64,
    pub from: SweepFrom,
}

impl SweepOptions {
    pub fn from_end() -> Self {
        Self {
            gap: 0,
            from: SweepFrom::End,
        }
    }
}

/// Sweep over walls sharing one axis, visiting them in order at every step
pub(crate) struct WallSweep<'w> {
    pub walls: &'w [Side],
    pub options: SweepOptions,
    /// Clearance every unit keeps from the door tip
    pub door_radius: f64,
    /// Seats this sweep may add
    pub seat_limit: usize,
}

impl WallSweep<'_> {
    /// Place units until `seats_required` or `seat_limit` is reached, or the
    /// wall runs out. Returns the seats this sweep added.
    pub(crate) fn run(
        &self,
        ctx: &PlacementContext<'_>,
        ws_type: &str,
        (along, depth): (i64, i64),
        seats_required: usize,
        layout: &mut SeatLayout,
    ) -> usize {
        let Some(first) = self.walls.first() else {
            return 0;
        };
        debug_assert!(self
            .walls
            .iter()
            .all(|wall| wall.sweep_axis() == first.sweep_axis()));

        let room = ctx.room;
        let limit = first.wall_length(room.width, room.depth) - along;
        if limit < 0 {
            return 0;
        }
        let desk_depth = ctx.desk_depth(ws_type, depth);
        let step = (along + self.options.gap).max(1);
        let tip = ctx.door_tip();

        let mut pos = match self.options.from {
            SweepFrom::Start => 0,
            SweepFrom::End => limit,
        };
        let mut added = 0;
        while (0..=limit).contains(&pos) {
            for &wall in self.walls {
                if layout.seats() >= seats_required || added >= self.seat_limit {
                    return added;
                }
                let unit = unit_rect(&room, wall, pos, along, depth);
                let ws = Workstation::against_wall(&room, wall, pos, along, desk_depth, ctx.config);
                if layout.unit_fits(&unit, &room)
                    && clear_of_point(&unit, tip, self.door_radius)
                    && layout.admits(&ws, ctx)
                {
                    layout.reserve(unit);
                    layout.seat(ws);
                    added += 1;
                }
            }
            pos = match self.options.from {
                SweepFrom::Start => pos + step,
                SweepFrom::End => pos - step,
            };
        }
        added
    }
}

/// Unit footprint flush against `wall` at `pos` along it
pub(crate) fn unit_rect(room: &Room, wall: Side, pos: i64, along: i64, depth: i64) -> Rect {
    match wall {
        Side::Left => Rect::new(0, pos, depth, along),
        Side::Right => Rect::new(room.width - depth, pos, depth, along),
        Side::Top => Rect::new(pos, 0, along, depth),
        Side::Bottom => Rect::new(pos, room.depth - depth, along, depth),
    }
}
