//! Scoring weights, thresholds and named presets.
//!
//! Weights are deliberately not normalised: the total score is the plain
//! weighted sum of eight sub-scores in `[0, 1]`.

use crate::error::ConfigError;
use deskplan_core::Side;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight per sub-score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub seat_count: f64,
    pub passage_width: f64,
    pub natural_light: f64,
    pub traffic_flow: f64,
    pub face_to_face_bonus: f64,
    pub space_efficiency: f64,
    pub desk_spacing: f64,
    pub area_per_person: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            seat_count: 1.0,
            passage_width: 0.8,
            natural_light: 0.5,
            traffic_flow: 0.6,
            face_to_face_bonus: 0.3,
            space_efficiency: 0.4,
            desk_spacing: 0.7,
            area_per_person: 0.6,
        }
    }
}

impl ScoringWeights {
    /// Highest total a layout can reach
    pub fn sum(&self) -> f64 {
        self.seat_count
            + self.passage_width
            + self.natural_light
            + self.traffic_flow
            + self.face_to_face_bonus
            + self.space_efficiency
            + self.desk_spacing
            + self.area_per_person
    }

    fn named(&self) -> [(&'static str, f64); 8] {
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

    /// Apply a partial override on top of these weights
    pub fn merged(&self, overrides: &WeightOverrides) -> Self {
        Self {
            seat_count: overrides.seat_count.unwrap_or(self.seat_count),
            passage_width: overrides.passage_width.unwrap_or(self.passage_width),
            natural_light: overrides.natural_light.unwrap_or(self.natural_light),
            traffic_flow: overrides.traffic_flow.unwrap_or(self.traffic_flow),
            face_to_face_bonus: overrides
                .face_to_face_bonus
                .unwrap_or(self.face_to_face_bonus),
            space_efficiency: overrides.space_efficiency.unwrap_or(self.space_efficiency),
            desk_spacing: overrides.desk_spacing.unwrap_or(self.desk_spacing),
            area_per_person: overrides.area_per_person.unwrap_or(self.area_per_person),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("scoring.weights.{key}"),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Partial weight set; unset fields keep the base weight
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_light: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_flow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_to_face_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_efficiency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desk_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_per_person: Option<f64>,
}

/// Design thresholds behind the sub-scores (mm, mm² or ratios)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    pub main_aisle_min: f64,
    pub main_aisle_optimal: f64,
    pub sub_aisle_min: f64,
    pub one_person_min: f64,
    pub chair_clearance_min: f64,
    pub chair_clearance_optimal: f64,
    pub desk_row_spacing_min: f64,
    pub desk_row_spacing_optimal: f64,
    pub area_per_person_min: f64,
    pub area_per_person_optimal: f64,
    pub area_per_person_max: f64,
    pub window_proximity_optimal: f64,
    pub window_proximity_max: f64,
    pub traffic_flow_optimal: f64,
    pub traffic_flow_max: f64,
    /// Alignment tolerance when detecting opposing desk pairs
    pub face_align_tolerance: f64,
    pub face_distance_min: f64,
    pub face_distance_max: f64,
    pub usage_ratio_sparse: f64,
    pub usage_ratio_ideal_min: f64,
    pub usage_ratio_ideal_max: f64,
    pub usage_ratio_crowded: f64,
    /// Ratio where the crowded penalty bottoms out
    pub usage_ratio_overcrowded: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            main_aisle_min: 1200.0,
            main_aisle_optimal: 1500.0,
            sub_aisle_min: 900.0,
            one_person_min: 600.0,
            chair_clearance_min: 800.0,
            chair_clearance_optimal: 1100.0,
            desk_row_spacing_min: 900.0,
            desk_row_spacing_optimal: 1200.0,
            area_per_person_min: 4_000_000.0,
            area_per_person_optimal: 10_000_000.0,
            area_per_person_max: 15_000_000.0,
            window_proximity_optimal: 2000.0,
            window_proximity_max: 5000.0,
            traffic_flow_optimal: 3000.0,
            traffic_flow_max: 8000.0,
            face_align_tolerance: 200.0,
            face_distance_min: 800.0,
            face_distance_max: 3000.0,
            usage_ratio_sparse: 0.15,
            usage_ratio_ideal_min: 0.25,
            usage_ratio_ideal_max: 0.45,
            usage_ratio_crowded: 0.55,
            usage_ratio_overcrowded: 0.75,
        }
    }
}

impl ScoringThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            (
                "one_person_min < sub_aisle_min < main_aisle_min < main_aisle_optimal",
                self.one_person_min < self.sub_aisle_min
                    && self.sub_aisle_min < self.main_aisle_min
                    && self.main_aisle_min < self.main_aisle_optimal,
            ),
            (
                "chair_clearance_min < chair_clearance_optimal",
                self.chair_clearance_min > 0.0
                    && self.chair_clearance_min < self.chair_clearance_optimal,
            ),
            (
                "one_person_min < desk_row_spacing_min < desk_row_spacing_optimal",
                self.one_person_min > 0.0
                    && self.one_person_min < self.desk_row_spacing_min
                    && self.desk_row_spacing_min < self.desk_row_spacing_optimal,
            ),
            (
                "area_per_person_min < area_per_person_optimal <= area_per_person_max",
                self.area_per_person_min > 0.0
                    && self.area_per_person_min < self.area_per_person_optimal
                    && self.area_per_person_optimal <= self.area_per_person_max,
            ),
            (
                "window_proximity_optimal < window_proximity_max",
                self.window_proximity_optimal < self.window_proximity_max,
            ),
            (
                "traffic_flow_optimal < traffic_flow_max",
                self.traffic_flow_optimal < self.traffic_flow_max,
            ),
            (
                "face_distance_min < face_distance_max",
                self.face_distance_min < self.face_distance_max,
            ),
            (
                "0 < usage_ratio_sparse < ideal_min <= ideal_max < crowded < overcrowded",
                self.usage_ratio_sparse > 0.0
                    && self.usage_ratio_sparse < self.usage_ratio_ideal_min
                    && self.usage_ratio_ideal_min <= self.usage_ratio_ideal_max
                    && self.usage_ratio_ideal_max < self.usage_ratio_crowded
                    && self.usage_ratio_crowded < self.usage_ratio_overcrowded,
            ),
        ];
        for (rule, holds) in ordered {
            if !holds {
                return Err(ConfigError::ValueOutOfRange {
                    key: "scoring.thresholds".to_string(),
                    value: rule.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn default_presets() -> BTreeMap<String, WeightOverrides> {
    let mut presets = BTreeMap::new();
    presets.insert(
        "max_seats".to_string(),
        WeightOverrides {
            seat_count: Some(2.0),
            passage_width: Some(0.5),
            area_per_person: Some(0.3),
            ..Default::default()
        },
    );
    presets.insert(
        "comfort".to_string(),
        WeightOverrides {
            seat_count: Some(0.6),
            passage_width: Some(1.0),
            desk_spacing: Some(1.0),
            area_per_person: Some(0.9),
            ..Default::default()
        },
    );
    presets.insert(
        "collaboration".to_string(),
        WeightOverrides {
            face_to_face_bonus: Some(1.0),
            traffic_flow: Some(0.8),
            ..Default::default()
        },
    );
    presets.insert("balanced".to_string(), WeightOverrides::default());
    presets.insert(
        "ergonomic".to_string(),
        WeightOverrides {
            passage_width: Some(1.0),
            natural_light: Some(0.9),
            desk_spacing: Some(1.0),
            ..Default::default()
        },
    );
    presets
}

fn default_window_sides() -> Vec<Side> {
    vec![Side::Top, Side::Right]
}

/// Immutable configuration of the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub thresholds: ScoringThresholds,
    /// Walls with windows when the caller does not say otherwise
    pub window_sides: Vec<Side>,
    pub presets: BTreeMap<String, WeightOverrides>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: ScoringThresholds::default(),
            window_sides: default_window_sides(),
            presets: default_presets(),
        }
    }
}

impl ScoringConfig {
    /// Weights after applying a named preset (base weights for `None`)
    pub fn weights_for(&self, preset: Option<&str>) -> Result<ScoringWeights, ConfigError> {
        match preset {
            None => Ok(self.weights),
            Some(name) => self
                .presets
                .get(name)
                .map(|overrides| self.weights.merged(overrides))
                .ok_or_else(|| ConfigError::UnknownPreset(name.to_string())),
        }
    }

    /// A copy of this config with a preset baked into its base weights
    pub fn with_preset(&self, preset: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            weights: self.weights_for(Some(preset))?,
            ..self.clone()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        for (name, overrides) in &self.presets {
            self.weights.merged(overrides).validate().map_err(|_| {
                ConfigError::ValueOutOfRange {
                    key: format!("scoring.presets.{name}"),
                    value: format!("{overrides:?}"),
                }
            })?;
        }
        Ok(())
    }
}
