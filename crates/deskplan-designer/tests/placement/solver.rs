use deskplan_core::{Catalog, DoorSpec, Room, Side};
use deskplan_designer::{LayoutRequest, Pattern, PriorityMode, Solver};
use deskplan_settings::Config;

fn left_door_request(seats: usize) -> LayoutRequest {
    LayoutRequest::new(Room::new(5010, 4010), seats).with_door(DoorSpec::new(Side::Left))
}

#[test]
fn test_wall_plan_with_long_wall_door() {
    let catalog = Catalog::default();
    let config = Config::default();
    let solver = Solver::new(&catalog, &config);
    let request = left_door_request(4);

    let plan = solver.solve_wall_plan(&request);
    assert!(plan.ok);
    assert!(plan.seats_placed >= 4);
    assert_eq!(plan.ws_type, "ws_1200x600");
    assert_eq!(plan.pattern, Pattern::DoubleWallTopBottom);

    let (door, _) = request.resolve();
    let door = door.map(|d| d.rect);
    for item in &plan.items {
        assert!(door.map_or(true, |r| !item.rect.intersects(&r)));
    }
}

#[test]
fn test_short_wall_door_limits_patterns() {
    let catalog = Catalog::default();
    let config = Config::default();
    let solver = Solver::new(&catalog, &config);
    let request =
        LayoutRequest::new(Room::new(5010, 4010), 3).with_door(DoorSpec::new(Side::Top));

    let plan = solver.solve_wall_plan(&request);
    assert!(matches!(
        plan.pattern,
        Pattern::DoubleWallTopBottom | Pattern::SingleWall(Side::Bottom)
    ));
}

#[test]
fn test_solve_all_returns_each_plan() {
    let catalog = Catalog::default();
    let config = Config::default();
    let solver = Solver::new(&catalog, &config);

    let plans = solver.solve_all(&left_door_request(4));
    assert_eq!(plans.face_to_face.pattern, Pattern::FaceToFaceCenter);
    assert_eq!(plans.mixed.pattern, Pattern::Mixed);
    assert_eq!(plans.iter().count(), 3);
    // No band fits a 4010 deep room with chair back clearance
    assert!(!plans.face_to_face.ok);
}

#[test]
fn test_desk_size_first_only_tries_wide_desks() {
    let catalog = Catalog::default();
    let config = Config::default();
    let solver = Solver::new(&catalog, &config);
    let request = left_door_request(2).with_priority(PriorityMode::DeskSizeFirst);

    let plans = solver.solve_all(&request);
    for plan in plans.iter() {
        assert!(
            config.candidates.wide_only.contains(&plan.ws_type),
            "{} used {}",
            plan.pattern,
            plan.ws_type
        );
    }
}

#[test]
fn test_equipment_is_attached() {
    let catalog = Catalog::default();
    let config = Config::default();
    let solver = Solver::new(&catalog, &config);
    let request = left_door_request(4).with_equipment(vec!["storage_M".into(), "mfp".into()]);

    let plan = solver.solve_wall_plan(&request);
    assert_eq!(plan.equipment_target, Some(2));
    assert_eq!(plan.equipment().count(), plan.equipment_placed.unwrap_or(0));
}

#[test]
fn test_solver_is_deterministic() {
    let catalog = Catalog::default();
    let config = Config::default();
    let solver = Solver::new(&catalog, &config);
    let request = left_door_request(5).with_equipment(vec!["storage_D".into()]);

    assert_eq!(solver.solve_all(&request), solver.solve_all(&request));
}

#[test]
fn test_request_from_json_uses_defaults() {
    let request: LayoutRequest =
        serde_json::from_str(r#"{"room": {"width": 5010, "depth": 4010}, "seats_required": 4}"#)
            .unwrap();
    assert_eq!(request.priority, PriorityMode::EquipmentFirst);
    assert!(request.door.is_none());
    assert!(request.equipment.is_empty());
}
