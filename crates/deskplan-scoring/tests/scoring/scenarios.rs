use deskplan_core::{Catalog, PlacedItem, Rect, Room};
use deskplan_designer::{double_wall, CandidateResult, Pattern, PlacementContext, SweepOptions};
use deskplan_scoring::{ScoreBreakdown, ScoreContext, Scorer};
use deskplan_settings::{PlacementConfig, ScoringConfig};

fn seated(seats: usize, items: Vec<PlacedItem>) -> CandidateResult {
    let mut layout = CandidateResult::failed("ws_1000x600", Pattern::DoubleWall, seats);
    layout.ok = true;
    layout.seats_placed = seats;
    layout.items = items;
    layout
}

#[test]
fn test_infeasible_layout_scores_zero() {
    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    let ctx = ScoreContext::new(Room::new(5010, 4010));

    let mut layout = seated(
        2,
        vec![
            PlacedItem::desk(Rect::new(0, 0, 600, 1000), "WS1_D"),
            PlacedItem::desk(Rect::new(4410, 0, 600, 1000), "WS2_D"),
        ],
    );
    layout.ok = false;

    let (total, breakdown) = scorer.score(&layout, &ctx);
    assert_eq!(total, 0.0);
    assert_eq!(breakdown, ScoreBreakdown::default());
}

#[test]
fn test_area_per_person_inside_good_band() {
    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    // 64㎡ for 8 seats
    let ctx = ScoreContext::new(Room::new(8000, 8000));

    let sub = scorer.sub_scores(&seated(8, Vec::new()), &ctx);
    let expected = 0.3 + 0.7 * (8.0 - 4.0) / (10.0 - 4.0);
    assert!((sub.area_per_person - expected).abs() < 1e-9);
    assert!(sub.area_per_person > 0.3 && sub.area_per_person < 1.0);

    let (_, breakdown) = scorer.score(&seated(8, Vec::new()), &ctx);
    assert!((breakdown.area_per_person - expected * 0.6).abs() < 1e-9);
}

#[test]
fn test_opposing_wall_desks_earn_face_bonus() {
    let catalog = Catalog::default();
    let placement = PlacementConfig::default();
    let room = Room::new(3010, 4010);
    let ctx = PlacementContext::new(room, &catalog, &placement, &[]);
    let layout = double_wall(&ctx, "ws_1000x600", 2, SweepOptions::default());
    assert!(layout.ok);

    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    let sub = scorer.sub_scores(&layout, &ScoreContext::new(room));
    assert_eq!(sub.face_to_face_bonus, 1.0);
}

#[test]
fn test_face_pattern_gets_full_bonus() {
    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    let mut layout = seated(1, vec![PlacedItem::desk(Rect::new(0, 0, 600, 1000), "WS1_D")]);
    layout.pattern = Pattern::FaceToFaceCenter;

    let (_, breakdown) = scorer.score(&layout, &ScoreContext::new(Room::new(5010, 5010)));
    assert!((breakdown.face_to_face_bonus - 0.3).abs() < 1e-9);
}

#[test]
fn test_window_sides_override_config() {
    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    let room = Room::new(10_000, 10_000);
    let layout = seated(1, vec![PlacedItem::desk(Rect::new(0, 9000, 600, 1000), "WS1_D")]);

    // Default windows are top and right; the desk is in the bottom-left corner
    let default_light = scorer
        .sub_scores(&layout, &ScoreContext::new(room))
        .natural_light;
    let bottom_light = scorer
        .sub_scores(
            &layout,
            &ScoreContext::new(room).with_window_sides(vec![deskplan_core::Side::Bottom]),
        )
        .natural_light;
    assert!(default_light < 0.3);
    assert_eq!(bottom_light, 1.0);
}
