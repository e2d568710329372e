use deskplan_core::{Catalog, ItemKind, Room};
use deskplan_designer::{
    double_wall, place_equipment_along_wall, CandidateResult, EquipmentOptions, Pattern,
    PlacementContext, SweepOptions,
};
use deskplan_settings::PlacementConfig;

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_equipment_keeps_clear_of_same_wall_desks() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(5010, 4010);
    let ctx = PlacementContext::new(room, &catalog, &config, &[]);
    let base = double_wall(&ctx, "ws_1000x600", 4, SweepOptions::default());
    assert!(base.ok);

    let options = EquipmentOptions::from_config(&config);
    let equipment = keys(&["storage_M", "storage_M", "mfp"]);
    let result = place_equipment_along_wall(&base, &room, &catalog, &equipment, &[], &options);

    assert_eq!(result.equipment_target, Some(3));
    let placed = result.equipment_placed.unwrap_or(0);
    assert_eq!(placed, 3);
    assert_eq!(result.equipment().count(), placed);

    for eq in result.equipment() {
        let eq_walls = eq.wall_sides(room.width, room.depth);
        for desk in result.desks() {
            let shared = desk
                .wall_sides(room.width, room.depth)
                .into_iter()
                .find(|side| eq_walls.contains(side));
            if let Some(wall) = shared {
                let (gap_x, gap_y) = eq.rect.axis_gaps(&desk.rect);
                let gap = if wall.is_long_wall() { gap_y } else { gap_x };
                assert!(gap >= 200, "{} is {}mm from {}", eq.label, gap, desk.label);
            }
        }
        for other in result.items.iter().filter(|i| i.label != eq.label) {
            assert!(!eq.rect.intersects(&other.rect));
        }
    }
}

#[test]
fn test_labels_run_across_walls() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(5010, 4010);
    let ctx = PlacementContext::new(room, &catalog, &config, &[]);
    let base = double_wall(&ctx, "ws_1000x600", 4, SweepOptions::default());

    let options = EquipmentOptions::from_config(&config);
    let equipment = keys(&["storage_M", "storage_M", "mfp"]);
    let result = place_equipment_along_wall(&base, &room, &catalog, &equipment, &[], &options);

    let labels: Vec<&str> = result.equipment().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["EQ1", "EQ2", "EQ3"]);
    let kinds: Vec<&str> = result.equipment().map(|e| e.kind.type_name()).collect();
    assert_eq!(kinds, vec!["storage_M", "mfp", "storage_M"]);
}

#[test]
fn test_empty_list_returns_base() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(5010, 4010);
    let ctx = PlacementContext::new(room, &catalog, &config, &[]);
    let base = double_wall(&ctx, "ws_1000x600", 2, SweepOptions::default());

    let options = EquipmentOptions::from_config(&config);
    let result = place_equipment_along_wall(&base, &room, &catalog, &[], &[], &options);
    assert_eq!(result, base);
    assert_eq!(result.equipment_placed, None);
}

#[test]
fn test_base_candidate_untouched() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(5010, 4010);
    let ctx = PlacementContext::new(room, &catalog, &config, &[]);
    let base = double_wall(&ctx, "ws_1000x600", 2, SweepOptions::default());
    let before = base.clone();

    let options = EquipmentOptions::from_config(&config);
    let result =
        place_equipment_along_wall(&base, &room, &catalog, &keys(&["storage_S"]), &[], &options);
    assert_eq!(base, before);
    assert_eq!(result.items.len(), base.items.len() + 1);
    assert!(result
        .equipment()
        .all(|e| matches!(e.kind, ItemKind::Equipment { .. })));
}

#[test]
fn test_crowded_wall_skips_item() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(2000, 1500);
    let base = CandidateResult::failed("ws_1000x600", Pattern::DoubleWall, 0);

    let options = EquipmentOptions::from_config(&config);
    let equipment = keys(&["storage_D"; 12]);
    let result = place_equipment_along_wall(&base, &room, &catalog, &equipment, &[], &options);
    let placed = result.equipment_placed.unwrap_or(0);
    assert!(placed > 0 && placed < 12);
}
