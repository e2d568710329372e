//! Unweighted sub-scores.
//!
//! Every function here maps a candidate onto `[0, 1]`. Weighting happens in
//! [`ScoreBreakdown::weighted`](crate::ScoreBreakdown::weighted).

use deskplan_core::{ItemKind, PlacedItem, Point, Rect, Room, Side};
use deskplan_designer::CandidateResult;
use deskplan_settings::ScoringThresholds;
use serde::{Deserialize, Serialize};

/// The eight sub-scores before weighting
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub seat_count: f64,
    pub passage_width: f64,
    pub natural_light: f64,
    pub traffic_flow: f64,
    pub face_to_face_bonus: f64,
    pub space_efficiency: f64,
    pub desk_spacing: f64,
    pub area_per_person: f64,
}

/// Position of `value` between `lo` and `hi` as a fraction
fn fraction(value: f64, lo: f64, hi: f64) -> f64 {
    (value - lo) / (hi - lo)
}

fn desk_rects(layout: &CandidateResult) -> Vec<Rect> {
    layout.desks().map(|desk| desk.rect).collect()
}

/// Distance score shared by natural light and traffic flow: full credit up
/// to `optimal`, linear decay to 0.3 at `max`, then a tail down to zero
fn proximity_score(dist: f64, optimal: f64, max: f64) -> f64 {
    if dist <= optimal {
        1.0
    } else if dist <= max {
        0.3 + 0.7 * (max - dist) / (max - optimal)
    } else {
        (0.3 * (1.0 - (dist - max) / max)).max(0.0)
    }
}

/// Seats placed against one seat per `area_per_person_optimal` of floor
pub fn seat_count(layout: &CandidateResult, room: &Room, th: &ScoringThresholds) -> f64 {
    if layout.seats_placed == 0 {
        return 0.0;
    }
    let theoretical = (room.area() as f64 / th.area_per_person_optimal)
        .floor()
        .max(1.0);
    (layout.seats_placed as f64 / theoretical).min(1.0)
}

/// Gap between the left and right desk columns
pub fn center_gap(desks: &[Rect], room: &Room) -> f64 {
    let half = room.width as f64 / 2.0;
    let left_edge = desks
        .iter()
        .filter(|r| (r.x as f64) < half)
        .map(|r| r.x2())
        .max();
    let right_edge = desks
        .iter()
        .filter(|r| (r.x as f64) >= half)
        .map(|r| r.x)
        .min();
    match (left_edge, right_edge) {
        (Some(left), Some(right)) => (right - left) as f64,
        _ => room.width as f64,
    }
}

/// Free space between a chair's backrest and the wall behind it
pub fn chair_back_gap(chair: &PlacedItem, room: &Room) -> Option<i64> {
    let r = &chair.rect;
    chair.chair_back().map(|back| match back {
        Side::Top => r.y,
        Side::Bottom => room.depth - r.y2(),
        Side::Left => r.x,
        Side::Right => room.width - r.x2(),
    })
}

/// Mean of the aisle component and, when there are chairs, the chair
/// clearance component
pub fn passage_width(layout: &CandidateResult, room: &Room, th: &ScoringThresholds) -> f64 {
    let desks = desk_rects(layout);
    if desks.is_empty() {
        return 1.0;
    }

    let gap = center_gap(&desks, room);
    let aisle = if gap >= th.main_aisle_optimal {
        1.0
    } else if gap >= th.main_aisle_min {
        0.7 + 0.3 * fraction(gap, th.main_aisle_min, th.main_aisle_optimal)
    } else if gap >= th.sub_aisle_min {
        0.4 + 0.3 * fraction(gap, th.sub_aisle_min, th.main_aisle_min)
    } else if gap >= th.one_person_min {
        0.2 + 0.2 * fraction(gap, th.one_person_min, th.sub_aisle_min)
    } else {
        0.0
    };

    let gaps: Vec<i64> = layout
        .chairs()
        .filter_map(|chair| chair_back_gap(chair, room))
        .collect();
    if gaps.is_empty() {
        return aisle;
    }

    let avg = gaps.iter().sum::<i64>() as f64 / gaps.len() as f64;
    let chairs = if avg >= th.chair_clearance_optimal {
        1.0
    } else if avg >= th.chair_clearance_min {
        0.5 + 0.5 * fraction(avg, th.chair_clearance_min, th.chair_clearance_optimal)
    } else {
        (avg / th.chair_clearance_min * 0.5).max(0.0)
    };
    (aisle + chairs) / 2.0
}

/// Mean proximity of desk centres to the nearest window wall
pub fn natural_light(
    layout: &CandidateResult,
    room: &Room,
    window_sides: &[Side],
    th: &ScoringThresholds,
) -> f64 {
    let desks = desk_rects(layout);
    if desks.is_empty() {
        return 0.5;
    }

    let total: f64 = desks
        .iter()
        .map(|desk| {
            let c = desk.center();
            window_sides
                .iter()
                .map(|side| match side {
                    Side::Top => c.y,
                    Side::Bottom => room.depth as f64 - c.y,
                    Side::Left => c.x,
                    Side::Right => room.width as f64 - c.x,
                })
                .reduce(f64::min)
                .map_or(0.5, |dist| {
                    proximity_score(dist, th.window_proximity_optimal, th.window_proximity_max)
                })
        })
        .sum();
    total / desks.len() as f64
}

/// Mean proximity of desk centres to the nearest door point
pub fn traffic_flow(
    layout: &CandidateResult,
    door_points: &[Point],
    th: &ScoringThresholds,
) -> f64 {
    let desks = desk_rects(layout);
    if desks.is_empty() {
        return 0.5;
    }

    let total: f64 = desks
        .iter()
        .map(|desk| {
            let c = desk.center();
            let dist = door_points
                .iter()
                .map(|door| c.distance_to(door))
                .fold(f64::INFINITY, f64::min);
            proximity_score(dist, th.traffic_flow_optimal, th.traffic_flow_max)
        })
        .sum();
    total / desks.len() as f64
}

/// Greedy count of opposing desk pairs, matched on top-left corners
pub fn count_face_pairs(desks: &[Rect], th: &ScoringThresholds) -> usize {
    let opposing = |along: i64, across: i64| {
        (along.abs() as f64) < th.face_align_tolerance && {
            let across = across.abs() as f64;
            th.face_distance_min < across && across < th.face_distance_max
        }
    };

    let mut used = vec![false; desks.len()];
    let mut pairs = 0;
    for i in 0..desks.len() {
        if used[i] {
            continue;
        }
        for j in (i + 1)..desks.len() {
            if used[j] {
                continue;
            }
            let dx = desks[i].x - desks[j].x;
            let dy = desks[i].y - desks[j].y;
            if opposing(dx, dy) || opposing(dy, dx) {
                pairs += 1;
                used[i] = true;
                used[j] = true;
                break;
            }
        }
    }
    pairs
}

/// Full credit for pair-based patterns, otherwise detected pairs over the
/// most pairs the desk count allows
pub fn face_to_face_bonus(layout: &CandidateResult, th: &ScoringThresholds) -> f64 {
    if layout.pattern.is_face_to_face() {
        return 1.0;
    }

    let desks = desk_rects(layout);
    let max_pairs = desks.len() / 2;
    if max_pairs == 0 {
        return 0.0;
    }
    (count_face_pairs(&desks, th) as f64 / max_pairs as f64).min(1.0)
}

/// Furniture footprint over room area; meeting furniture is not counted
pub fn usage_ratio(layout: &CandidateResult, room: &Room) -> f64 {
    let area = room.area();
    if area == 0 {
        return 0.0;
    }
    let furniture: i64 = layout
        .items
        .iter()
        .filter(|item| match &item.kind {
            ItemKind::Equipment { category, .. } => category.counts_as_furniture(),
            _ => true,
        })
        .map(|item| item.rect.area())
        .sum();
    furniture as f64 / area as f64
}

pub fn space_efficiency(layout: &CandidateResult, room: &Room, th: &ScoringThresholds) -> f64 {
    if layout.items.is_empty() || room.area() == 0 {
        return 0.0;
    }

    let ratio = usage_ratio(layout, room);
    if (th.usage_ratio_ideal_min..=th.usage_ratio_ideal_max).contains(&ratio) {
        1.0
    } else if ratio < th.usage_ratio_sparse {
        ratio / th.usage_ratio_sparse * 0.5
    } else if ratio < th.usage_ratio_ideal_min {
        0.5 + 0.5 * fraction(ratio, th.usage_ratio_sparse, th.usage_ratio_ideal_min)
    } else if ratio <= th.usage_ratio_crowded {
        1.0 - 0.3 * fraction(ratio, th.usage_ratio_ideal_max, th.usage_ratio_crowded)
    } else {
        (0.7 - 0.4 * fraction(ratio, th.usage_ratio_crowded, th.usage_ratio_overcrowded)).max(0.3)
    }
}

/// Smallest positive gap between desks that overlap on one axis
pub fn min_desk_gap(desks: &[Rect]) -> Option<i64> {
    desks
        .iter()
        .enumerate()
        .flat_map(|(i, a)| desks[i + 1..].iter().map(move |b| a.axis_gaps(b)))
        .filter(|&(dx, dy)| dx == 0 || dy == 0)
        .map(|(dx, dy)| dx.max(dy))
        .filter(|&gap| gap > 0)
        .min()
}

pub fn desk_spacing(layout: &CandidateResult, th: &ScoringThresholds) -> f64 {
    let desks = desk_rects(layout);
    if desks.len() < 2 {
        return 1.0;
    }
    let Some(gap) = min_desk_gap(&desks) else {
        return 1.0;
    };

    let gap = gap as f64;
    if gap >= th.desk_row_spacing_optimal {
        1.0
    } else if gap >= th.desk_row_spacing_min {
        0.6 + 0.4 * fraction(gap, th.desk_row_spacing_min, th.desk_row_spacing_optimal)
    } else if gap >= th.one_person_min {
        0.3 + 0.3 * fraction(gap, th.one_person_min, th.desk_row_spacing_min)
    } else {
        (gap / th.one_person_min * 0.3).max(0.0)
    }
}

/// Room area per placed seat in mm², zero without seats
pub fn area_per_seat(layout: &CandidateResult, room: &Room) -> f64 {
    if layout.seats_placed == 0 {
        return 0.0;
    }
    room.area() as f64 / layout.seats_placed as f64
}

pub fn area_per_person(layout: &CandidateResult, room: &Room, th: &ScoringThresholds) -> f64 {
    if layout.seats_placed == 0 {
        return 0.0;
    }

    let area = area_per_seat(layout, room);
    if (th.area_per_person_optimal..=th.area_per_person_max).contains(&area) {
        1.0
    } else if area < th.area_per_person_min {
        (area / th.area_per_person_min * 0.3).max(0.0)
    } else if area < th.area_per_person_optimal {
        0.3 + 0.7 * fraction(area, th.area_per_person_min, th.area_per_person_optimal)
    } else {
        let excess = area - th.area_per_person_max;
        (1.0 - excess / th.area_per_person_max * 0.5).max(0.5)
    }
}
