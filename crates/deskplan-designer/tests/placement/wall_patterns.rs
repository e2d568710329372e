use deskplan_core::{Catalog, DoorSpec, Room, Side};
use deskplan_designer::{
    double_wall, double_wall_top_bottom, single_wall_tb, Pattern, PlacementContext, SweepOptions,
};
use deskplan_settings::PlacementConfig;

#[test]
fn test_double_wall_left_door_room() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(5010, 4010);
    let door = DoorSpec::new(Side::Left).layout(&room);
    let blocks = door.blocks(&[]);
    let ctx = PlacementContext::new(room, &catalog, &config, &blocks).with_door(&door);

    let result = double_wall(&ctx, "ws_1000x600", 4, SweepOptions::default());

    assert!(result.ok);
    assert_eq!(result.pattern, Pattern::DoubleWall);
    assert!(result.seats_placed >= 4);
    for desk in result.desks() {
        assert!(
            desk.rect.x == 0 || desk.rect.x == room.width - 600,
            "{} not flush: {:?}",
            desk.label,
            desk.rect
        );
        assert!(!desk.rect.intersects(&door.rect));
    }
    // Only the slot past the door survives on the door wall
    let left: Vec<_> = result.desks().filter(|d| d.rect.x == 0).collect();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].rect.y, 3000);
}

#[test]
fn test_double_wall_alternates_walls() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let ctx = PlacementContext::new(Room::new(5010, 4010), &catalog, &config, &[]);

    let result = double_wall(&ctx, "ws_1000x600", 3, SweepOptions::default());
    let xs: Vec<i64> = result.desks().map(|d| d.rect.x).collect();
    assert_eq!(xs, vec![0, 4410, 0]);
    let labels: Vec<&str> = result.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["WS1_D", "WS1_C", "WS2_D", "WS2_C", "WS3_D", "WS3_C"]
    );
}

#[test]
fn test_top_bottom_sweep_from_end() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let ctx = PlacementContext::new(Room::new(5010, 4010), &catalog, &config, &[]);

    let result = double_wall_top_bottom(&ctx, "ws_1000x600", 2, SweepOptions::from_end());
    assert!(result.ok);
    assert!(result.desks().all(|d| d.rect.x == 4010));

    let chairs: Vec<Side> = result.chairs().filter_map(|c| c.chair_back()).collect();
    assert_eq!(chairs, vec![Side::Bottom, Side::Top]);
}

#[test]
fn test_single_wall_tb_ignores_door_across_room() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(5010, 2410);
    let door = DoorSpec::new(Side::Top).layout(&room);
    let blocks = door.blocks(&[]);
    let ctx = PlacementContext::new(room, &catalog, &config, &blocks).with_door(&door);

    let bottom = single_wall_tb(&ctx, "ws_1000x600", 5, Side::Bottom, SweepOptions::default());
    assert_eq!(bottom.pattern, Pattern::SingleWall(Side::Bottom));
    assert_eq!(bottom.seats_placed, 5);
    assert!(bottom.ok);

    // Same wall swept as part of a double pattern keeps the full radius
    let both = double_wall_top_bottom(&ctx, "ws_1000x600", 10, SweepOptions::default());
    let bottom_desks = both.desks().filter(|d| d.rect.y2() == room.depth).count();
    assert!(bottom_desks < 5);
}

#[test]
fn test_pillar_skips_slot() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let pillars = [deskplan_core::Rect::new(0, 1200, 400, 400)];
    let ctx = PlacementContext::new(Room::new(5010, 4010), &catalog, &config, &pillars);

    let result = deskplan_designer::single_wall(
        &ctx,
        "ws_1000x600",
        4,
        Side::Left,
        SweepOptions::default(),
    );
    let ys: Vec<i64> = result.desks().map(|d| d.rect.y).collect();
    assert_eq!(ys, vec![0, 2000, 3000]);
    assert!(!result.ok);
}
