use deskplan_core::{Catalog, DoorSpec, Room, Side};
use deskplan_designer::{mixed, Pattern, PlacementContext};
use deskplan_settings::PlacementConfig;

#[test]
fn test_few_seats_stay_on_wall() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let ctx = PlacementContext::new(Room::new(5010, 4010), &catalog, &config, &[]);

    let result = mixed(&ctx, "ws_1000x600", 2, None);
    assert!(result.ok);
    assert_eq!(result.pattern, Pattern::Mixed);
    assert!(result.desks().all(|d| d.rect.x == 0));
}

#[test]
fn test_explicit_wall_side() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(6010, 5010);
    let ctx = PlacementContext::new(room, &catalog, &config, &[]);

    let result = mixed(&ctx, "ws_1000x600", 6, Some(Side::Right));
    assert_eq!(result.seats_placed, 6);
    let wall_desks = result
        .desks()
        .filter(|d| d.rect.x2() == room.width)
        .count();
    assert_eq!(wall_desks, 2);
    // Pairs keep clear of the wall column
    let column_x = room.width - 1200 - config.mixed_center_offset;
    assert!(result
        .desks()
        .filter(|d| d.rect.x2() != room.width)
        .all(|d| d.rect.x2() <= column_x));
}

#[test]
fn test_wall_column_faces_door() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(6010, 5010);
    let door = DoorSpec::new(Side::Left).layout(&room);
    let blocks = door.blocks(&[]);
    let ctx = PlacementContext::new(room, &catalog, &config, &blocks).with_door(&door);

    let result = mixed(&ctx, "ws_1000x600", 2, None);
    assert!(result.ok);
    assert!(result.desks().all(|d| d.rect.x2() == room.width));
}
