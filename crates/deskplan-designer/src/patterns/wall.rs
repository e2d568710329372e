use super::sweep::{SweepOptions, WallSweep};
use super::SeatLayout;
use crate::candidate::{CandidateResult, Pattern};
use crate::context::PlacementContext;
use deskplan_core::Side;

fn run_walls(
    ctx: &PlacementContext<'_>,
    ws_type: &str,
    seats_required: usize,
    pattern: Pattern,
    walls: &[Side],
    options: SweepOptions,
    door_radius: f64,
) -> CandidateResult {
    let Some(unit) = ctx.unit_size(ws_type) else {
        return CandidateResult::failed(ws_type, pattern, seats_required);
    };
    let mut layout = SeatLayout::new(ctx.blocks);
    WallSweep {
        walls,
        options,
        door_radius,
        seat_limit: seats_required,
    }
    .run(ctx, ws_type, unit, seats_required, &mut layout);
    layout.finish(ctx, ws_type, pattern, seats_required)
}

/// Left and right walls in lock-step down the depth axis
pub fn double_wall(
    ctx: &PlacementContext<'_>,
    ws_type: &str,
    seats_required: usize,
    options: SweepOptions,
) -> CandidateResult {
    run_walls(
        ctx,
        ws_type,
        seats_required,
        Pattern::DoubleWall,
        &[Side::Left, Side::Right],
        options,
        ctx.door_radius(),
    )
}

/// Top and bottom walls in lock-step across the width axis
pub fn double_wall_top_bottom(
    ctx: &PlacementContext<'_>,
    ws_type: &str,
    seats_required: usize,
    options: SweepOptions,
) -> CandidateResult {
    run_walls(
        ctx,
        ws_type,
        seats_required,
        Pattern::DoubleWallTopBottom,
        &[Side::Top, Side::Bottom],
        options,
        ctx.door_radius(),
    )
}

/// One wall only. Top and bottom walls are handled by [`single_wall_tb`].
pub fn single_wall(
    ctx: &PlacementContext<'_>,
    ws_type: &str,
    seats_required: usize,
    side: Side,
    options: SweepOptions,
) -> CandidateResult {
    if !side.is_long_wall() {
        return single_wall_tb(ctx, ws_type, seats_required, side, options);
    }
    run_walls(
        ctx,
        ws_type,
        seats_required,
        Pattern::SingleWall(side),
        &[side],
        options,
        ctx.door_radius(),
    )
}

/// Top or bottom wall only.
///
/// The door-tip check is skipped when the tip lies in the other half of
/// the room.
pub fn single_wall_tb(
    ctx: &PlacementContext<'_>,
    ws_type: &str,
    seats_required: usize,
    side: Side,
    options: SweepOptions,
) -> CandidateResult {
    if side.is_long_wall() {
        return single_wall(ctx, ws_type, seats_required, side, options);
    }

    let mut door_radius = ctx.door_radius();
    if let Some(tip) = ctx.door_tip() {
        let door_is_top = tip.y < ctx.room.depth as f64 / 2.0;
        if door_is_top == (side == Side::Bottom) {
            door_radius = 0.0;
        }
    }

    run_walls(
        ctx,
        ws_type,
        seats_required,
        Pattern::SingleWall(side),
        &[side],
        options,
        door_radius,
    )
}
