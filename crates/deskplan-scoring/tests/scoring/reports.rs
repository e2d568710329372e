use deskplan_core::Room;
use deskplan_designer::{CandidateResult, Pattern};
use deskplan_scoring::{Grade, ScoreContext, Scorer, Suggestion};
use deskplan_settings::ScoringConfig;

fn crowded() -> CandidateResult {
    let mut layout = CandidateResult::failed("ws_1000x600", Pattern::DoubleWall, 8);
    layout.ok = true;
    layout.seats_placed = 8;
    layout
}

#[test]
fn test_crowded_room_report() {
    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    let ctx = ScoreContext::new(Room::new(4000, 4000));

    let report = scorer.analyze_layout(&crowded(), &ctx);
    assert_eq!(report.seats_placed, 8);
    assert_eq!(report.room_area_m2, 16.0);
    assert_eq!(report.area_per_person_m2, 2.0);
    assert!((report.total_score - 3.14).abs() < 1e-9);
    assert_eq!(report.grade, Grade::D);
    assert_eq!(
        report.suggestions,
        vec![
            Suggestion::CrampedArea {
                area_per_person_m2: 2.0,
                minimum_m2: 4.0,
            },
            Suggestion::NoFaceToFace,
        ]
    );
    assert_eq!(report.breakdown["seat_count"], 1.0);
    assert_eq!(report.breakdown["area_per_person"], 0.09);
}

#[test]
fn test_infeasible_report_grades_f() {
    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    let mut layout = crowded();
    layout.ok = false;

    let report = scorer.analyze_layout(&layout, &ScoreContext::new(Room::new(4000, 4000)));
    assert_eq!(report.total_score, 0.0);
    assert_eq!(report.grade, Grade::F);
    assert!(report.breakdown.values().all(|v| *v == 0.0));
}

#[test]
fn test_report_serializes() {
    let config = ScoringConfig::default();
    let scorer = Scorer::new(&config);
    let report = scorer.analyze_layout(&crowded(), &ScoreContext::new(Room::new(4000, 4000)));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["grade"], "D");
    assert_eq!(json["suggestions"][1]["kind"], "no_face_to_face");
}
