//! Property tests for generated layouts.
//!
//! Invariants:
//! 1. Every desk, chair and equipment rect lies inside the room.
//! 2. No two items overlap and no item overlaps a blocking region.
//! 3. Every chair is the 700mm square derived from its own desk.
//! 4. Wall sweeps place `min(seats_required, capacity)` seats.
//! 5. The solver's wall plan never loses seats when the room gets wider.

use deskplan_core::{intersects_any, Catalog, DoorLayout, DoorSpec, Rect, Room, Side};
use deskplan_designer::{
    chair_rect, double_wall, double_wall_top_bottom, face_to_face_center, mixed,
    place_equipment_along_wall, single_wall, CandidateResult, EquipmentOptions, LayoutRequest,
    PlacementContext, PriorityMode, Solver, SweepOptions,
};
use deskplan_settings::{Config, PlacementConfig};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const WS_TYPES: [&str; 3] = ["ws_1000x600", "ws_1200x600", "ws_1200x700"];

fn door_strategy() -> impl Strategy<Value = Option<(Side, Option<i64>)>> {
    prop_oneof![
        Just(None),
        (
            prop::sample::select(Side::ALL.to_vec()),
            prop::option::of(0i64..9000)
        )
            .prop_map(Some),
    ]
}

fn door_layout(room: &Room, door: Option<(Side, Option<i64>)>) -> Option<DoorLayout> {
    door.map(|(side, offset)| {
        let spec = DoorSpec::new(side);
        let spec = match offset {
            Some(offset) => spec.with_offset(offset),
            None => spec,
        };
        spec.layout(room)
    })
}

fn check_layout(
    result: &CandidateResult,
    room: &Room,
    blocks: &[Rect],
    config: &PlacementConfig,
) -> Result<(), TestCaseError> {
    for (i, item) in result.items.iter().enumerate() {
        prop_assert!(room.contains(&item.rect), "{} outside room", item.label);
        prop_assert!(
            !intersects_any(&item.rect, blocks),
            "{} hits a block",
            item.label
        );
        for other in &result.items[i + 1..] {
            prop_assert!(
                !item.rect.intersects(&other.rect),
                "{} overlaps {}",
                item.label,
                other.label
            );
        }
    }

    for chair in result.chairs() {
        let seat = chair.label.trim_end_matches("_C");
        let desk = result
            .desks()
            .find(|d| d.label.trim_end_matches("_D") == seat);
        prop_assert!(desk.is_some(), "{} has no desk", chair.label);
        if let (Some(desk), Some(back)) = (desk, chair.chair_back()) {
            prop_assert_eq!(chair.rect, chair_rect(&desk.rect, back, config));
            prop_assert_eq!((chair.rect.w, chair.rect.d), (700, 700));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn generated_layouts_are_physically_valid(
        width in 3000i64..9000,
        depth in 3000i64..8000,
        seats in 1usize..12,
        ws_idx in 0usize..3,
        door in door_strategy(),
    ) {
        let catalog = Catalog::default();
        let config = PlacementConfig::default();
        let room = Room::new(width, depth);
        let door = door_layout(&room, door);
        let blocks = door.map(|d| d.blocks(&[])).unwrap_or_default();
        let mut ctx = PlacementContext::new(room, &catalog, &config, &blocks);
        if let Some(door) = door.as_ref() {
            ctx = ctx.with_door(door);
        }
        let ws = WS_TYPES[ws_idx];

        let results = [
            double_wall(&ctx, ws, seats, SweepOptions::default()),
            double_wall_top_bottom(&ctx, ws, seats, SweepOptions::from_end()),
            single_wall(&ctx, ws, seats, Side::Right, SweepOptions::default()),
            single_wall(&ctx, ws, seats, Side::Top, SweepOptions::default()),
            face_to_face_center(&ctx, ws, seats, 0),
            mixed(&ctx, ws, seats, None),
        ];
        for result in &results {
            prop_assert!(result.seats_placed <= seats);
            prop_assert_eq!(result.desks().count(), result.seats_placed);
            check_layout(result, &room, &blocks, &config)?;
        }

        let equipment: Vec<String> = ["storage_M", "mfp", "storage_S", "storage_D"]
            .iter()
            .map(|k| k.to_string())
            .collect();
        let mut options = EquipmentOptions::from_config(&config);
        if let Some(door) = door.as_ref() {
            options = options.with_door(door);
        }
        let furnished =
            place_equipment_along_wall(&results[0], &room, &catalog, &equipment, &blocks, &options);
        prop_assert!(furnished.equipment_placed.unwrap_or(0) <= equipment.len());
        check_layout(&furnished, &room, &blocks, &config)?;
    }

    #[test]
    fn wall_sweeps_fill_up_to_capacity(
        width in 3000i64..9000,
        depth in 3000i64..8000,
        ws_idx in 0usize..3,
    ) {
        let catalog = Catalog::default();
        let config = PlacementConfig::default();
        let ctx = PlacementContext::new(Room::new(width, depth), &catalog, &config, &[]);
        let ws = WS_TYPES[ws_idx];

        let capacity = double_wall(&ctx, ws, 1000, SweepOptions::default()).seats_placed;
        for seats in 1..=capacity + 2 {
            let result = double_wall(&ctx, ws, seats, SweepOptions::default());
            prop_assert_eq!(result.seats_placed, seats.min(capacity));
            if seats > capacity {
                prop_assert!(!result.ok);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn solver_seats_never_drop_as_room_widens(
        width in 3000i64..8000,
        extra in 0i64..3000,
        depth in 3000i64..7000,
    ) {
        let catalog = Catalog::default();
        let config = Config::default();
        let solver = Solver::new(&catalog, &config);
        let plan = |w: i64| {
            let request = LayoutRequest::new(Room::new(w, depth), 200)
                .with_priority(PriorityMode::SeatFirst);
            solver.solve_wall_plan(&request)
        };

        let narrow = plan(width);
        let wide = plan(width + extra);
        prop_assert!(
            wide.seats_placed >= narrow.seats_placed,
            "{}mm wide placed {} seats, {}mm wide placed {}",
            width, narrow.seats_placed, width + extra, wide.seats_placed
        );
    }
}
