//! # Wall Equipment Placement
//!
//! Greedy wall filling for storage, printers and other secondary furniture.
//! Each piece is turned so its long edge runs along the wall, then slid along
//! the wall in fixed steps until a free slot is found. Pieces that fit
//! nowhere are skipped.

use crate::candidate::CandidateResult;
use crate::patterns::{unit_rect, SweepFrom};
use deskplan_core::{can_place, Catalog, DoorLayout, PlacedItem, Point, Rect, Room, Side};
use deskplan_settings::PlacementConfig;

/// Settings for one pass of [`place_equipment_along_wall`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentOptions {
    /// Restrict the long walls to the one nearest this x coordinate
    pub x_override: Option<i64>,
    /// Keep-out radius around desk centres on walls without desks
    pub desk_clear_radius: i64,
    /// Along-wall gap to desks flush with the same wall
    pub desk_side_clearance: i64,
    /// Along-wall gap kept around each placed piece
    pub equipment_clearance: i64,
    pub step: i64,
    pub door_side: Option<Side>,
    pub door_offset: Option<i64>,
}

impl EquipmentOptions {
    pub fn from_config(config: &PlacementConfig) -> Self {
        Self {
            x_override: None,
            desk_clear_radius: config.desk_clear_radius,
            desk_side_clearance: config.desk_side_clearance,
            equipment_clearance: config.equipment_clearance,
            step: config.equipment_step,
            door_side: None,
            door_offset: None,
        }
    }

    pub fn with_door(mut self, door: &DoorLayout) -> Self {
        self.door_side = Some(door.side);
        self.door_offset = door.offset;
        self
    }

    pub fn with_x_override(mut self, x: Option<i64>) -> Self {
        self.x_override = x;
        self
    }

    pub fn with_equipment_clearance(mut self, clearance: i64) -> Self {
        self.equipment_clearance = clearance;
        self
    }

    /// Wall visiting order: long walls (or the overridden one), then the
    /// short walls, with the door wall moved last
    pub fn wall_order(&self, room: &Room) -> Vec<Side> {
        let mut walls = match self.x_override {
            Some(x) if (x as f64) <= room.width as f64 / 2.0 => vec![Side::Left, Side::Top, Side::Bottom],
            Some(_) => vec![Side::Right, Side::Top, Side::Bottom],
            None => Side::ALL.to_vec(),
        };
        if let Some(door) = self.door_side {
            if let Some(i) = walls.iter().position(|wall| *wall == door) {
                let wall = walls.remove(i);
                walls.push(wall);
            }
        }
        walls
    }

    /// The door wall is swept from the end away from the door
    fn sweep_from(&self, wall: Side, room: &Room) -> SweepFrom {
        if self.door_side != Some(wall) {
            return SweepFrom::Start;
        }
        let half = wall.wall_length(room.width, room.depth) as f64 / 2.0;
        match self.door_offset {
            Some(offset) if (offset as f64) >= half => SweepFrom::Start,
            _ => SweepFrom::End,
        }
    }
}

/// One wall's sweep parameters
#[derive(Debug, Clone)]
pub struct WallRun<'a> {
    pub wall: Side,
    pub from: SweepFrom,
    pub step: i64,
    /// Points a piece's centre must stay farther than `avoid_radius` from
    pub avoid_centers: &'a [Point],
    pub avoid_radius: Option<f64>,
    /// Desks flush with this wall; pieces keep `desk_clearance` from them
    pub same_wall_desks: &'a [Rect],
    pub desk_clearance: i64,
    pub equipment_clearance: i64,
}

impl WallRun<'_> {
    fn too_close_to_desks(&self, r: &Rect) -> bool {
        let Some(radius) = self.avoid_radius else {
            return false;
        };
        let centre = r.center();
        self.avoid_centers
            .iter()
            .any(|c| centre.distance_to(c) <= radius)
    }

    fn same_wall_clear(&self, r: &Rect) -> bool {
        if self.desk_clearance <= 0 {
            return true;
        }
        self.same_wall_desks.iter().all(|desk| {
            let (gap_x, gap_y) = r.axis_gaps(desk);
            let gap = if self.wall.is_long_wall() { gap_y } else { gap_x };
            gap >= self.desk_clearance
        })
    }

    /// Clearance buffer stretched along the wall around a placed piece
    fn buffer(&self, r: &Rect) -> Rect {
        let c = self.equipment_clearance;
        if self.wall.is_long_wall() {
            Rect::new(r.x, r.y - c, r.w, r.d + 2 * c)
        } else {
            Rect::new(r.x - c, r.y, r.w + 2 * c, r.d)
        }
    }
}

/// Result of one wall sweep
#[derive(Debug, Clone, Default)]
pub struct WallPlacement {
    pub items: Vec<PlacedItem>,
    /// Obstacles after the sweep, including the new pieces and buffers
    pub placed: Vec<Rect>,
}

/// Place as many of `equipment` as fit against one wall, in list order.
///
/// Labels continue from `first_label`. Unknown keys are logged and skipped.
pub fn place_equipment_wall_only(
    room: &Room,
    catalog: &Catalog,
    equipment: &[String],
    blocks: Vec<Rect>,
    run: &WallRun<'_>,
    first_label: usize,
) -> WallPlacement {
    let mut placed = blocks;
    let mut items = Vec::new();
    let step = run.step.max(1);
    let mut cursor = 0;

    for key in equipment {
        let Some(spec) = catalog.get(key) else {
            tracing::warn!("Unknown equipment '{}' skipped", key);
            continue;
        };
        let along = spec.along();
        let depth = spec.depth();
        let max_pos = run.wall.wall_length(room.width, room.depth) - along;

        let (mut pos, delta) = match run.from {
            SweepFrom::Start => (cursor, step),
            SweepFrom::End => (max_pos, -step),
        };
        while (0..=max_pos).contains(&pos) {
            let r = unit_rect(room, run.wall, pos, along, depth);
            if run.too_close_to_desks(&r) || !run.same_wall_clear(&r) {
                pos += delta;
                continue;
            }
            if can_place(&r, room, &placed) {
                let label = format!("EQ{}", first_label + items.len());
                items.push(PlacedItem::equipment(r, label, key.clone(), spec.category));
                placed.push(r);
                if run.equipment_clearance > 0 {
                    placed.push(run.buffer(&r));
                }
                cursor = pos + along + run.equipment_clearance;
                break;
            }
            pos += delta;
        }
    }

    WallPlacement { items, placed }
}

/// Attach wall equipment to a finished candidate.
///
/// Returns an augmented copy; the base candidate is untouched. An empty
/// equipment list returns the base unchanged.
pub fn place_equipment_along_wall(
    base: &CandidateResult,
    room: &Room,
    catalog: &Catalog,
    equipment: &[String],
    blocks: &[Rect],
    options: &EquipmentOptions,
) -> CandidateResult {
    if equipment.is_empty() {
        return base.clone();
    }

    let mut placed: Vec<Rect> = blocks.to_vec();
    placed.extend(base.items.iter().map(|item| item.rect));

    let desks: Vec<&PlacedItem> = base.desks().collect();
    let avoid_centers: Vec<Point> = desks.iter().map(|desk| desk.rect.center()).collect();

    let mut remaining: Vec<String> = equipment
        .iter()
        .filter(|key| {
            let known = catalog.get(key).is_some();
            if !known {
                tracing::warn!("Unknown equipment '{}' skipped", key);
            }
            known
        })
        .cloned()
        .collect();
    let mut equipment_items: Vec<PlacedItem> = Vec::new();

    for wall in options.wall_order(room) {
        if remaining.is_empty() {
            break;
        }
        let same_wall: Vec<Rect> = desks
            .iter()
            .filter(|desk| desk.wall_sides(room.width, room.depth).contains(&wall))
            .map(|desk| desk.rect)
            .collect();
        let side_by_side = !same_wall.is_empty();

        let run = WallRun {
            wall,
            from: options.sweep_from(wall, room),
            step: options.step,
            avoid_centers: &avoid_centers,
            avoid_radius: (!side_by_side).then_some(options.desk_clear_radius as f64),
            same_wall_desks: &same_wall,
            desk_clearance: options.desk_side_clearance,
            equipment_clearance: options.equipment_clearance,
        };
        let result = place_equipment_wall_only(
            room,
            catalog,
            &remaining,
            placed,
            &run,
            equipment_items.len() + 1,
        );
        placed = result.placed;

        for item in &result.items {
            if let deskplan_core::ItemKind::Equipment { key, .. } = &item.kind {
                if let Some(i) = remaining.iter().position(|k| k == key) {
                    remaining.remove(i);
                }
            }
        }
        equipment_items.extend(result.items);
    }

    if !remaining.is_empty() {
        tracing::debug!(
            "{} {}: {} equipment item(s) did not fit",
            base.pattern,
            base.ws_type,
            remaining.len()
        );
    }

    let mut out = base.clone();
    out.equipment_target = Some(equipment.len());
    out.equipment_placed = Some(equipment_items.len());
    out.items.extend(equipment_items);
    out
}
