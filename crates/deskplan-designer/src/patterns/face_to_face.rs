use super::SeatLayout;
use crate::candidate::{CandidateResult, Pattern};
use crate::context::PlacementContext;
use crate::workstation::Workstation;
use deskplan_core::{clear_of_point, DoorLayout, Rect, Side};

/// Back-to-back desk pairs tiled along the room width on the depth mid-line.
///
/// Pair units are twice the unit depth and must leave the chair back
/// clearance to both the top and bottom walls. With an odd seat count the
/// desks are clamped to `odd_seat_desk_depth` and one rotated desk is added
/// beside an end unit.
pub fn face_to_face_center(
    ctx: &PlacementContext<'_>,
    ws_type: &str,
    seats_required: usize,
    gap: i64,
) -> CandidateResult {
    let pattern = Pattern::FaceToFaceCenter;
    let Some((ws_w, ws_d)) = ctx.unit_size(ws_type) else {
        return CandidateResult::failed(ws_type, pattern, seats_required);
    };
    let room = ctx.room;
    let cfg = ctx.config;

    if room.depth < ws_d * 2 {
        return CandidateResult::failed(ws_type, pattern, seats_required);
    }

    let pairs = seats_required / 2;
    let has_single = seats_required % 2 == 1;
    let unit_w = ws_w;
    let total_w = pairs as i64 * unit_w + (pairs as i64 - 1).max(0) * gap;
    if total_w > room.width {
        return CandidateResult::failed(ws_type, pattern, seats_required);
    }

    let door_side = ctx.door_side();
    let center_line = room.depth / 2;
    let mut unit_d = ws_d * 2;
    let mut x_start = (room.width - total_w) / 2;
    let mut y0 = center_line - unit_d / 2;
    match door_side {
        Some(Side::Left) => x_start = room.width - total_w,
        Some(Side::Right) => x_start = 0,
        Some(Side::Top) => y0 = room.depth - unit_d,
        Some(Side::Bottom) => y0 = 0,
        None => {}
    }

    let mut desk_depth = ctx.desk_depth(ws_type, ws_d);
    if has_single {
        desk_depth = cfg.odd_seat_desk_depth;
        unit_d = desk_depth * 2;
        y0 = center_line - desk_depth;
    }

    let min_back = cfg.min_back_clearance();
    let y0_max = room.depth - unit_d - min_back;
    if y0_max < min_back {
        tracing::debug!(
            "{} {}: no room for chair back clearance",
            pattern,
            ws_type
        );
        return CandidateResult::failed(ws_type, pattern, seats_required);
    }
    y0 = y0.clamp(min_back, y0_max);

    let mut unit_radius = ctx.door_radius();
    if let Some(door) = ctx.door {
        if door.side.is_long_wall() {
            y0 = shift_band_off_door(door, y0, unit_d, room.depth);
        } else {
            x_start = 0;
            unit_radius = cfg.short_edge_door_clearance as f64;
        }
    }

    let tip = ctx.door_tip();
    let mut layout = SeatLayout::new(ctx.blocks);
    let mut units: Vec<Rect> = Vec::with_capacity(pairs);
    let mut x = x_start;
    while units.len() < pairs && x + unit_w <= room.width {
        let unit = Rect::new(x, y0, unit_w, unit_d);
        let top = Workstation::new(
            Rect::new(x, center_line - desk_depth, ws_w, desk_depth),
            Side::Top,
            cfg,
        );
        let bottom = Workstation::new(Rect::new(x, center_line, ws_w, desk_depth), Side::Bottom, cfg);

        if layout.unit_fits(&unit, &room)
            && clear_of_point(&unit, tip, unit_radius)
            && layout.admits(&top, ctx)
            && layout.admits(&bottom, ctx)
        {
            layout.reserve(unit);
            units.push(unit);
            for ws in [top, bottom] {
                if layout.seats() < seats_required {
                    layout.seat(ws);
                }
            }
        }
        x += unit_w + gap;
    }

    if has_single && layout.seats() < seats_required {
        if let (Some(&first), Some(&last)) = (units.first(), units.last()) {
            if !place_rotated_desk(ctx, &mut layout, first, last) {
                tracing::debug!("{} {}: no end admits the odd seat", pattern, ws_type);
            }
        }
    }

    layout.finish(ctx, ws_type, pattern, seats_required)
}

/// Move a band crossed by a long-wall door to whichever side of the door is
/// nearer, as long as it stays inside the room
fn shift_band_off_door(door: &DoorLayout, y0: i64, unit_d: i64, room_d: i64) -> i64 {
    let r = door.rect;
    if y0 + unit_d <= r.y || y0 >= r.y2() {
        return y0;
    }
    let fits = |v: i64| v >= 0 && v + unit_d <= room_d;
    let below = r.y2();
    let above = r.y - unit_d;
    match (fits(below), fits(above)) {
        (true, true) => {
            if (below - y0).abs() <= (above - y0).abs() {
                below
            } else {
                above
            }
        }
        (true, false) => below,
        (false, true) => above,
        (false, false) => y0,
    }
}

/// Rotated single desk beside an end unit, on the end farther from the door
fn place_rotated_desk(
    ctx: &PlacementContext<'_>,
    layout: &mut SeatLayout,
    leftmost: Rect,
    rightmost: Rect,
) -> bool {
    let room = ctx.room;
    let cfg = ctx.config;
    let tip = ctx.door_tip();

    let order = match ctx.door_side() {
        Some(Side::Left) | None => [Side::Right, Side::Left],
        Some(Side::Right) => [Side::Left, Side::Right],
        Some(Side::Top) | Some(Side::Bottom) => match tip {
            Some(tip) if tip.x >= room.width as f64 / 2.0 => [Side::Left, Side::Right],
            _ => [Side::Right, Side::Left],
        },
    };

    let width = cfg.rotated_desk_width;
    let depth = cfg.rotated_desk_depth;
    let margin = cfg.rotated_desk_margin;
    let desk_y = (room.depth - depth) / 2;

    for side in order {
        let desk_x = if side == Side::Right {
            let x = rightmost.x2();
            if room.width - (x + width) < margin {
                continue;
            }
            x
        } else {
            let x = leftmost.x - width;
            if x < margin {
                continue;
            }
            x
        };

        let desk = Rect::new(desk_x, desk_y, width, depth);
        let ws = Workstation::new(desk, side, cfg).rotated(90);
        if !layout.unit_fits(&desk, &room)
            || !clear_of_point(&desk, tip, ctx.door_radius())
            || !layout.admits(&ws, ctx)
        {
            continue;
        }
        layout.reserve(desk);
        layout.seat(ws);
        return true;
    }
    false
}
