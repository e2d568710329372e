//! # DeskPlan Settings
//!
//! Immutable configuration values for the placement and scoring engines,
//! with TOML/JSON persistence and validation. A "reload" is simply loading
//! a fresh `Config`.

pub mod config;
pub mod error;
pub mod placement;
pub mod scoring;

pub use config::{Config, ConfigFormat, DeskCandidates};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use placement::PlacementConfig;
pub use scoring::{ScoringConfig, ScoringThresholds, ScoringWeights, WeightOverrides};
