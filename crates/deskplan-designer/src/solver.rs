//! # Layout Solver
//!
//! Enumerates pattern × desk-type combinations, attaches requested
//! equipment to every candidate and keeps the best one per plan.
//!
//! Selection is a priority-ordered key comparison; ties keep the earlier
//! candidate, so results are independent of anything but input order.

use crate::candidate::{CandidateResult, Pattern};
use crate::context::PlacementContext;
use crate::equipment::{place_equipment_along_wall, EquipmentOptions};
use crate::patterns::{
    double_wall, double_wall_top_bottom, face_to_face_center, mixed, single_wall, single_wall_tb,
    SweepFrom, SweepOptions,
};
use deskplan_core::{desk_area, Catalog, DoorLayout, DoorSpec, LayoutError, Rect, Room, Side};
use deskplan_settings::{Config, DeskCandidates, PlacementConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Tie-break policy among equally valid candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityMode {
    /// Seats, then desk size, then equipment
    SeatFirst,
    /// Seats, then desk size, then equipment; only wide desk types are tried
    DeskSizeFirst,
    /// Seats, then equipment, then desk size; stops at the first candidate
    /// that satisfies everything
    #[default]
    EquipmentFirst,
}

impl PriorityMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SeatFirst => "desk",
            Self::DeskSizeFirst => "desk_1200",
            Self::EquipmentFirst => "equipment",
        }
    }
}

impl fmt::Display for PriorityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desk" | "seat" | "seat_first" => Ok(Self::SeatFirst),
            "desk_1200" | "desk_size" | "desk_size_first" => Ok(Self::DeskSizeFirst),
            "equipment" | "equipment_first" => Ok(Self::EquipmentFirst),
            _ => Err(LayoutError::InvalidPriority {
                value: s.to_string(),
            }),
        }
    }
}

/// `(ok, seats, tertiary, quaternary)` compared lexicographically
pub type SelectionKey = (bool, usize, i64, i64);

/// Ranking key of a candidate under a priority mode
pub fn selection_key(candidate: &CandidateResult, mode: PriorityMode) -> SelectionKey {
    let area = desk_area(&candidate.ws_type);
    let equipment = candidate.equipment_count() as i64;
    match mode {
        PriorityMode::EquipmentFirst => (candidate.ok, candidate.seats_placed, equipment, area),
        PriorityMode::SeatFirst | PriorityMode::DeskSizeFirst => {
            (candidate.ok, candidate.seats_placed, area, equipment)
        }
    }
}

/// First element with the maximal key
fn first_max_by_key<T, K: Ord>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> K) -> Option<T> {
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        match &best {
            Some((best_key, _)) if *best_key >= k => {}
            _ => best = Some((k, item)),
        }
    }
    best.map(|(_, item)| item)
}

/// Best candidate among one desk type's patterns
fn best_for_type(candidates: Vec<CandidateResult>, mode: PriorityMode) -> Option<CandidateResult> {
    if candidates.iter().any(|c| c.ok) {
        first_max_by_key(candidates, |c| selection_key(c, mode))
    } else {
        first_max_by_key(candidates, |c| (c.seats_placed, c.equipment_count()))
    }
}

/// Everything the caller specifies for one solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Interior extents, wall padding already applied
    pub room: Room,
    pub seats_required: usize,
    #[serde(default)]
    pub door: Option<DoorSpec>,
    #[serde(default)]
    pub pillars: Vec<Rect>,
    /// Equipment keys in placement order; repeats allowed
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub equipment_x_override: Option<i64>,
    #[serde(default)]
    pub priority: PriorityMode,
}

impl LayoutRequest {
    pub fn new(room: Room, seats_required: usize) -> Self {
        Self {
            room,
            seats_required,
            door: None,
            pillars: Vec::new(),
            equipment: Vec::new(),
            equipment_x_override: None,
            priority: PriorityMode::default(),
        }
    }

    pub fn with_door(mut self, door: DoorSpec) -> Self {
        self.door = Some(door);
        self
    }

    pub fn with_pillars(mut self, pillars: Vec<Rect>) -> Self {
        self.pillars = pillars;
        self
    }

    pub fn with_equipment(mut self, equipment: Vec<String>) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_equipment_x_override(mut self, x: i64) -> Self {
        self.equipment_x_override = Some(x);
        self
    }

    pub fn with_priority(mut self, priority: PriorityMode) -> Self {
        self.priority = priority;
        self
    }

    /// Door resolved against the room and the blocking regions it implies
    pub fn resolve(&self) -> (Option<DoorLayout>, Vec<Rect>) {
        match &self.door {
            Some(spec) => {
                let door = spec.layout(&self.room);
                let blocks = door.blocks(&self.pillars);
                (Some(door), blocks)
            }
            None => (None, self.pillars.clone()),
        }
    }
}

/// The three plans a solve produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlans {
    pub wall: CandidateResult,
    pub face_to_face: CandidateResult,
    pub mixed: CandidateResult,
}

impl LayoutPlans {
    pub fn iter(&self) -> impl Iterator<Item = &CandidateResult> {
        [&self.wall, &self.face_to_face, &self.mixed].into_iter()
    }
}

/// Pattern/desk-type search over a fixed catalog and configuration
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    catalog: &'a Catalog,
    placement: &'a PlacementConfig,
    candidates: &'a DeskCandidates,
}

impl<'a> Solver<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a Config) -> Self {
        Self::with_parts(catalog, &config.placement, &config.candidates)
    }

    pub fn with_parts(
        catalog: &'a Catalog,
        placement: &'a PlacementConfig,
        candidates: &'a DeskCandidates,
    ) -> Self {
        Self {
            catalog,
            placement,
            candidates,
        }
    }

    fn wall_types(&self, priority: PriorityMode) -> &'a [String] {
        match priority {
            PriorityMode::DeskSizeFirst => &self.candidates.wide_only,
            _ => &self.candidates.wall,
        }
    }

    fn face_types(&self, priority: PriorityMode) -> &'a [String] {
        match priority {
            PriorityMode::DeskSizeFirst => &self.candidates.wide_only,
            _ => &self.candidates.face,
        }
    }

    fn attach_equipment(
        &self,
        candidate: CandidateResult,
        request: &LayoutRequest,
        door: Option<&DoorLayout>,
        blocks: &[Rect],
    ) -> CandidateResult {
        if request.equipment.is_empty() {
            return candidate;
        }
        let mut options = EquipmentOptions::from_config(self.placement)
            .with_equipment_clearance(self.placement.solver_equipment_clearance)
            .with_x_override(request.equipment_x_override);
        if let Some(door) = door {
            options = options.with_door(door);
        }
        place_equipment_along_wall(
            &candidate,
            &request.room,
            self.catalog,
            &request.equipment,
            blocks,
            &options,
        )
    }

    /// Run `generate` for every desk type and keep the best result.
    ///
    /// On an equal key, a desk type different from `avoid_type` replaces a
    /// best of that type.
    fn select<F>(
        &self,
        request: &LayoutRequest,
        ws_types: &[String],
        fallback: Pattern,
        avoid_type: Option<&str>,
        generate: F,
    ) -> CandidateResult
    where
        F: Fn(&PlacementContext<'_>, &str) -> Vec<CandidateResult>,
    {
        let (door, blocks) = request.resolve();
        let mut ctx = PlacementContext::new(request.room, self.catalog, self.placement, &blocks);
        if let Some(door) = door.as_ref() {
            ctx = ctx.with_door(door);
        }
        let mode = request.priority;

        let mut best: Option<CandidateResult> = None;
        for ws_type in ws_types {
            let candidates: Vec<CandidateResult> = generate(&ctx, ws_type)
                .into_iter()
                .map(|c| self.attach_equipment(c, request, door.as_ref(), &blocks))
                .collect();
            for c in &candidates {
                debug!(
                    "try {} {}: seats={} ok={} equipment={}",
                    c.pattern,
                    ws_type,
                    c.seats_placed,
                    c.ok,
                    c.equipment_count()
                );
            }
            let Some(best_for_type) = best_for_type(candidates, mode) else {
                continue;
            };

            if mode == PriorityMode::EquipmentFirst
                && best_for_type.ok
                && best_for_type.equipment_satisfied()
            {
                best = Some(best_for_type);
                break;
            }

            let replace = match &best {
                None => true,
                Some(current) => {
                    let new_key = selection_key(&best_for_type, mode);
                    let old_key = selection_key(current, mode);
                    new_key > old_key
                        || (new_key == old_key
                            && avoid_type.is_some_and(|avoid| {
                                current.ws_type == avoid && best_for_type.ws_type != avoid
                            }))
                }
            };
            if replace {
                best = Some(best_for_type);
            }
        }

        best.unwrap_or_else(|| {
            warn!("No desk type produced a {} candidate", fallback);
            CandidateResult::failed("", fallback, request.seats_required)
        })
    }

    /// Wall-attached plan.
    ///
    /// A short-wall door restricts the search to the top/bottom patterns,
    /// swept away from the door; otherwise all four wall patterns are tried.
    pub fn solve_wall_plan(&self, request: &LayoutRequest) -> CandidateResult {
        let seats = request.seats_required;
        let door_side = request.door.map(|d| d.side);
        let room_w = request.room.width;
        let tb_from = match door_side {
            Some(Side::Top | Side::Bottom) => match request.door.and_then(|d| d.offset) {
                Some(offset) if (offset as f64) < room_w as f64 / 2.0 => SweepFrom::End,
                _ => SweepFrom::Start,
            },
            Some(Side::Left) => SweepFrom::End,
            Some(Side::Right) | None => SweepFrom::Start,
        };
        let tb = SweepOptions {
            gap: 0,
            from: tb_from,
        };

        self.select(
            request,
            self.wall_types(request.priority),
            Pattern::DoubleWall,
            None,
            |ctx, ws_type| match door_side {
                Some(side @ (Side::Top | Side::Bottom)) => vec![
                    double_wall_top_bottom(ctx, ws_type, seats, tb),
                    single_wall_tb(ctx, ws_type, seats, side.opposite(), tb),
                ],
                _ => vec![
                    double_wall(ctx, ws_type, seats, SweepOptions::default()),
                    double_wall_top_bottom(ctx, ws_type, seats, tb),
                    single_wall(ctx, ws_type, seats, Side::Left, SweepOptions::default()),
                    single_wall(ctx, ws_type, seats, Side::Right, SweepOptions::default()),
                ],
            },
        )
    }

    /// Face-to-face plan; on a tie prefers a desk type other than `wall_type`
    pub fn solve_face_plan(&self, request: &LayoutRequest, wall_type: Option<&str>) -> CandidateResult {
        let seats = request.seats_required;
        self.select(
            request,
            self.face_types(request.priority),
            Pattern::FaceToFaceCenter,
            wall_type,
            |ctx, ws_type| vec![face_to_face_center(ctx, ws_type, seats, 0)],
        )
    }

    /// Wall column plus centre pairs
    pub fn solve_mixed_plan(&self, request: &LayoutRequest) -> CandidateResult {
        let seats = request.seats_required;
        self.select(
            request,
            self.wall_types(request.priority),
            Pattern::Mixed,
            None,
            |ctx, ws_type| vec![mixed(ctx, ws_type, seats, None)],
        )
    }

    /// All three plans
    pub fn solve_all(&self, request: &LayoutRequest) -> LayoutPlans {
        let wall = self.solve_wall_plan(request);
        let face_to_face = self.solve_face_plan(request, Some(&wall.ws_type));
        let mixed = self.solve_mixed_plan(request);
        let plans = LayoutPlans {
            wall,
            face_to_face,
            mixed,
        };

        for plan in plans.iter() {
            if !plan.ok {
                warn!(
                    "{} plan placed {}/{} seats",
                    plan.pattern, plan.seats_placed, plan.seats_required
                );
            } else if !plan.equipment_satisfied() {
                warn!(
                    "{} plan placed {}/{} equipment",
                    plan.pattern,
                    plan.equipment_count(),
                    plan.equipment_target.unwrap_or(0)
                );
            } else {
                info!(
                    "{} plan: {} with {} seats (priority {})",
                    plan.pattern, plan.ws_type, plan.seats_placed, request.priority
                );
            }
        }
        plans
    }
}
