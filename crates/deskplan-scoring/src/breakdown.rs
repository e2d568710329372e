use crate::metrics::SubScores;
use deskplan_settings::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Round to three decimals for reports
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Weighted sub-scores of one layout.
///
/// Each field is a sub-score in `[0, 1]` multiplied by its weight; `total` is
/// their plain sum. Values keep full precision, use [`to_map`](Self::to_map)
/// for rounded reporting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub seat_count: f64,
    pub passage_width: f64,
    pub natural_light: f64,
    pub traffic_flow: f64,
    pub face_to_face_bonus: f64,
    pub space_efficiency: f64,
    pub desk_spacing: f64,
    pub area_per_person: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    /// Apply weights to raw sub-scores and sum them
    pub fn weighted(scores: &SubScores, weights: &ScoringWeights) -> Self {
        let mut breakdown = Self {
            seat_count: scores.seat_count * weights.seat_count,
            passage_width: scores.passage_width * weights.passage_width,
            natural_light: scores.natural_light * weights.natural_light,
            traffic_flow: scores.traffic_flow * weights.traffic_flow,
            face_to_face_bonus: scores.face_to_face_bonus * weights.face_to_face_bonus,
            space_efficiency: scores.space_efficiency * weights.space_efficiency,
            desk_spacing: scores.desk_spacing * weights.desk_spacing,
            area_per_person: scores.area_per_person * weights.area_per_person,
            total: 0.0,
        };
        breakdown.total = breakdown.terms().iter().map(|(_, v)| v).sum();
        breakdown
    }

    /// The eight weighted terms in reporting order
    pub fn terms(&self) -> [(&'static str, f64); 8] {
        [
            ("seat_count", self.seat_count),
            ("passage_width", self.passage_width),
            ("natural_light", self.natural_light),
            ("traffic_flow", self.traffic_flow),
            ("face_to_face_bonus", self.face_to_face_bonus),
            ("space_efficiency", self.space_efficiency),
            ("desk_spacing", self.desk_spacing),
            ("area_per_person", self.area_per_person),
        ]
    }

    /// Terms and total rounded to three decimals
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.terms()
            .into_iter()
            .chain(std::iter::once(("total", self.total)))
            .map(|(name, value)| (name.to_string(), round3(value)))
            .collect()
    }
}
