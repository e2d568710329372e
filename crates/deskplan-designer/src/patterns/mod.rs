//! # Workstation Pattern Generators
//!
//! Each generator produces one full candidate for one desk type:
//! - `double_wall` / `double_wall_top_bottom`: both opposite walls in lock-step
//! - `single_wall` / `single_wall_tb`: one chosen wall
//! - `face_to_face_center`: back-to-back pairs along the room mid-line
//! - `mixed`: a short wall column plus face-to-face pairs in the centre
//!
//! Generators never fail with an error; infeasibility shows up as
//! `seats_placed < seats_required` and `ok == false`.

mod face_to_face;
mod mixed;
mod sweep;
mod wall;

pub use face_to_face::face_to_face_center;
pub use mixed::mixed;
pub(crate) use sweep::unit_rect;
pub use sweep::{SweepFrom, SweepOptions};
pub use wall::{double_wall, double_wall_top_bottom, single_wall, single_wall_tb};

use crate::candidate::{CandidateResult, Pattern};
use crate::context::PlacementContext;
use crate::workstation::Workstation;
use deskplan_core::{can_place, PlacedItem, Rect, Room};

/// Per-call accumulator of reserved rectangles and emitted items
#[derive(Debug, Clone)]
pub(crate) struct SeatLayout {
    /// Blocking regions followed by every reserved unit footprint
    placed: Vec<Rect>,
    items: Vec<PlacedItem>,
    seats: usize,
}

impl SeatLayout {
    pub(crate) fn new(blocks: &[Rect]) -> Self {
        Self {
            placed: blocks.to_vec(),
            items: Vec::new(),
            seats: 0,
        }
    }

    pub(crate) fn seats(&self) -> usize {
        self.seats
    }

    /// Unit footprint inside the room and clear of blocks and earlier units
    pub(crate) fn unit_fits(&self, unit: &Rect, room: &Room) -> bool {
        can_place(unit, room, &self.placed)
    }

    /// Workstation passes the composer check and overlaps no earlier item
    pub(crate) fn admits(&self, ws: &Workstation, ctx: &PlacementContext<'_>) -> bool {
        ws.fits(&ctx.room, ctx.blocks)
            && !self
                .items
                .iter()
                .any(|item| item.rect.intersects(&ws.desk) || item.rect.intersects(&ws.chair))
    }

    pub(crate) fn reserve(&mut self, unit: Rect) {
        self.placed.push(unit);
    }

    pub(crate) fn seat(&mut self, ws: Workstation) {
        self.seats += 1;
        self.items.extend(ws.into_items(self.seats));
    }

    pub(crate) fn finish(
        self,
        ctx: &PlacementContext<'_>,
        ws_type: &str,
        pattern: Pattern,
        seats_required: usize,
    ) -> CandidateResult {
        let result = CandidateResult::evaluate(
            ws_type,
            pattern,
            seats_required,
            self.seats,
            self.items,
            ctx.door_tip(),
            ctx.config,
        );
        tracing::debug!(
            "{} {}: {}/{} seats, ok={}",
            pattern,
            ws_type,
            result.seats_placed,
            seats_required,
            result.ok
        );
        result
    }
}
