use deskplan_core::{Catalog, DoorSpec, ItemKind, Rect, Room, Side};
use deskplan_designer::{face_to_face_center, Pattern, PlacementContext};
use deskplan_settings::PlacementConfig;

#[test]
fn test_odd_seat_gets_rotated_desk() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(4510, 3010);
    let door = DoorSpec::new(Side::Bottom).with_offset(99_999).layout(&room);
    let blocks = door.blocks(&[]);
    let ctx = PlacementContext::new(room, &catalog, &config, &blocks).with_door(&door);

    let result = face_to_face_center(&ctx, "ws_1000x600", 5, 0);

    assert_eq!(result.pattern, Pattern::FaceToFaceCenter);
    assert_eq!(result.seats_placed, 5);
    assert!(result.ok);

    let rotated: Vec<_> = result
        .chairs()
        .filter(|c| matches!(c.kind, ItemKind::Chair { rotation_deg: 90, .. }))
        .collect();
    assert_eq!(rotated.len(), 1);
    assert!(room.contains(&rotated[0].rect));
    assert_eq!(rotated[0].chair_back(), Some(Side::Right));

    let odd_desk = result
        .desks()
        .find(|d| d.label == "WS5_D")
        .map(|d| d.rect);
    assert_eq!(odd_desk, Some(Rect::new(2000, 905, 600, 1200)));
}

#[test]
fn test_odd_seat_fails_without_margin() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let ctx = PlacementContext::new(Room::new(2510, 3010), &catalog, &config, &[]);

    let result = face_to_face_center(&ctx, "ws_1000x600", 3, 0);
    assert!(!result.ok);
    assert_eq!(result.seats_placed, 2);
}

#[test]
fn test_short_wall_door_starts_at_left_edge() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(6010, 5010);
    let door = DoorSpec::new(Side::Top).with_offset(5000).layout(&room);
    let blocks = door.blocks(&[]);
    let ctx = PlacementContext::new(room, &catalog, &config, &blocks).with_door(&door);

    let result = face_to_face_center(&ctx, "ws_1200x600", 4, 0);
    assert!(result.ok);
    let xs: Vec<i64> = result.desks().map(|d| d.rect.x).collect();
    assert_eq!(xs, vec![0, 0, 1200, 1200]);
}

#[test]
fn test_long_wall_door_pushes_pairs_away() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let room = Room::new(6010, 5010);
    let door = DoorSpec::new(Side::Left).layout(&room);
    let blocks = door.blocks(&[]);
    let ctx = PlacementContext::new(room, &catalog, &config, &blocks).with_door(&door);

    let result = face_to_face_center(&ctx, "ws_1200x600", 4, 0);
    assert!(result.ok);
    // Pairs are packed against the wall opposite the door
    assert_eq!(result.desks().map(|d| d.rect.x2()).max(), Some(6010));
    for item in &result.items {
        assert!(!item.rect.intersects(&door.rect));
    }
}

#[test]
fn test_too_many_pairs_for_width() {
    let catalog = Catalog::default();
    let config = PlacementConfig::default();
    let ctx = PlacementContext::new(Room::new(3010, 5010), &catalog, &config, &[]);

    let result = face_to_face_center(&ctx, "ws_1200x600", 6, 0);
    assert!(!result.ok);
    assert_eq!(result.seats_placed, 0);
}
