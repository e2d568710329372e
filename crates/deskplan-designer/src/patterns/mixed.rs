use super::sweep::{SweepOptions, WallSweep};
use super::SeatLayout;
use crate::candidate::{CandidateResult, Pattern};
use crate::context::PlacementContext;
use crate::workstation::Workstation;
use deskplan_core::{clear_of_point, Rect, Side};

/// A few wall seats plus face-to-face pairs in the open centre.
///
/// `wall_side` defaults to the wall opposite the door, or the left wall
/// when there is no door. Up to `mixed_wall_seats` seats go on that wall;
/// the rest are paired on the depth mid-line, offset from the wall column.
/// An odd remainder fills only the top desk of the last pair.
pub fn mixed(
    ctx: &PlacementContext<'_>,
    ws_type: &str,
    seats_required: usize,
    wall_side: Option<Side>,
) -> CandidateResult {
    let pattern = Pattern::Mixed;
    let Some((ws_w, ws_d)) = ctx.unit_size(ws_type) else {
        return CandidateResult::failed(ws_type, pattern, seats_required);
    };
    let room = ctx.room;
    let cfg = ctx.config;
    let wall_side = wall_side
        .or_else(|| ctx.door_side().map(|side| side.opposite()))
        .unwrap_or(Side::Left);

    let mut layout = SeatLayout::new(ctx.blocks);
    WallSweep {
        walls: &[wall_side],
        options: SweepOptions::default(),
        door_radius: ctx.door_radius(),
        seat_limit: cfg.mixed_wall_seats,
    }
    .run(ctx, ws_type, (ws_w, ws_d), seats_required, &mut layout);

    let remaining = seats_required.saturating_sub(layout.seats());
    if remaining > 0 && room.depth >= ws_d * 2 {
        let face_d = ws_d * 2;
        let pairs_needed = remaining.div_ceil(2);
        let y0 = room.depth / 2 - ws_d;
        let desk_depth = ctx.desk_depth(ws_type, ws_d);
        let (mut x, x_end) = match wall_side {
            Side::Left => (ws_d + cfg.mixed_center_offset, room.width),
            Side::Right => (0, room.width - ws_d - cfg.mixed_center_offset),
            Side::Top | Side::Bottom => (0, room.width),
        };
        let tip = ctx.door_tip();
        let radius = cfg.short_edge_door_clearance as f64;

        let mut pairs = 0;
        while pairs < pairs_needed && layout.seats() < seats_required && x + ws_w <= x_end {
            let unit = Rect::new(x, y0, ws_w, face_d);
            let top = Workstation::new(Rect::new(x, y0, ws_w, desk_depth), Side::Top, cfg);
            let bottom = Workstation::new(
                Rect::new(x, y0 + face_d - desk_depth, ws_w, desk_depth),
                Side::Bottom,
                cfg,
            );
            let single = seats_required - layout.seats() == 1;

            if layout.unit_fits(&unit, &room)
                && clear_of_point(&unit, tip, radius)
                && layout.admits(&top, ctx)
                && (single || layout.admits(&bottom, ctx))
            {
                layout.reserve(unit);
                layout.seat(top);
                if !single {
                    layout.seat(bottom);
                }
                pairs += 1;
            }
            x += ws_w;
        }
    }

    layout.finish(ctx, ws_type, pattern, seats_required)
}
