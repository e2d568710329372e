//! Human-readable layout reports.
//!
//! [`Scorer::analyze_layout`] turns a score into a letter grade plus a list
//! of improvement suggestions.

use crate::breakdown::{round3, ScoreBreakdown};
use crate::metrics;
use crate::scorer::{ScoreContext, Scorer};
use deskplan_designer::CandidateResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const MM2_PER_M2: f64 = 1_000_000.0;

/// Letter grade from the share of the best possible total
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Grade a total against the weight sum
    pub fn from_score(score: f64, max_possible: f64) -> Self {
        let ratio = if max_possible > 0.0 {
            score / max_possible
        } else {
            0.0
        };
        match ratio {
            r if r >= 0.9 => Grade::A,
            r if r >= 0.8 => Grade::B,
            r if r >= 0.7 => Grade::C,
            r if r >= 0.6 => Grade::D,
            r if r >= 0.5 => Grade::E,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Improvement hint attached to a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Aisles or chair clearance are tight
    NarrowPassage { main_aisle_min_mm: f64 },
    /// Desks sit far from the windows
    PoorNaturalLight,
    /// Neighbouring desks are close together
    TightDeskSpacing { desk_row_spacing_min_mm: f64 },
    /// Floor area per seat is below the legal minimum
    CrampedArea { area_per_person_m2: f64, minimum_m2: f64 },
    /// No opposing desk pairs
    NoFaceToFace,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::NarrowPassage { main_aisle_min_mm } => write!(
                f,
                "Passages are narrow. Keep the main aisle at least {main_aisle_min_mm:.0}mm wide."
            ),
            Suggestion::PoorNaturalLight => {
                f.write_str("Natural light is poor. Consider seats near the windows.")
            }
            Suggestion::TightDeskSpacing {
                desk_row_spacing_min_mm,
            } => write!(
                f,
                "Desks are tightly spaced. Keep at least {desk_row_spacing_min_mm:.0}mm between desk rows."
            ),
            Suggestion::CrampedArea {
                area_per_person_m2,
                minimum_m2,
            } => write!(
                f,
                "Area per person is only {area_per_person_m2:.1}㎡. Provide at least {minimum_m2:.0}㎡."
            ),
            Suggestion::NoFaceToFace => {
                f.write_str("Face-to-face seating would encourage communication.")
            }
        }
    }
}

/// Scored layout with grade and suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Total score rounded to three decimals
    pub total_score: f64,
    /// Weighted terms rounded to three decimals
    pub breakdown: BTreeMap<String, f64>,
    pub seats_placed: usize,
    pub area_per_person_m2: f64,
    pub room_area_m2: f64,
    pub suggestions: Vec<Suggestion>,
    pub grade: Grade,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Scorer<'_> {
    /// Score a layout and explain the result
    pub fn analyze_layout(&self, layout: &CandidateResult, ctx: &ScoreContext) -> LayoutReport {
        let (score, breakdown) = self.score(layout, ctx);
        let area_per_seat = metrics::area_per_seat(layout, &ctx.room);

        LayoutReport {
            total_score: round3(score),
            breakdown: breakdown.to_map(),
            seats_placed: layout.seats_placed,
            area_per_person_m2: round2(area_per_seat / MM2_PER_M2),
            room_area_m2: round2(ctx.room.area() as f64 / MM2_PER_M2),
            suggestions: self.suggestions(&breakdown, area_per_seat),
            grade: Grade::from_score(score, self.weights().sum()),
        }
    }

    fn suggestions(&self, breakdown: &ScoreBreakdown, area_per_seat: f64) -> Vec<Suggestion> {
        let w = self.weights();
        let th = &self.config().thresholds;
        let mut suggestions = Vec::new();

        if breakdown.passage_width < 0.5 * w.passage_width {
            suggestions.push(Suggestion::NarrowPassage {
                main_aisle_min_mm: th.main_aisle_min,
            });
        }
        if breakdown.natural_light < 0.3 * w.natural_light {
            suggestions.push(Suggestion::PoorNaturalLight);
        }
        if breakdown.desk_spacing < 0.5 * w.desk_spacing {
            suggestions.push(Suggestion::TightDeskSpacing {
                desk_row_spacing_min_mm: th.desk_row_spacing_min,
            });
        }
        if area_per_seat < th.area_per_person_min {
            suggestions.push(Suggestion::CrampedArea {
                area_per_person_m2: area_per_seat / MM2_PER_M2,
                minimum_m2: th.area_per_person_min / MM2_PER_M2,
            });
        }
        if breakdown.face_to_face_bonus < 0.3 * w.face_to_face_bonus {
            suggestions.push(Suggestion::NoFaceToFace);
        }
        suggestions
    }
}
