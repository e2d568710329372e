//! # DeskPlan Scoring
//!
//! Scoring engine for candidate layouts.
//!
//! ## Features
//!
//! - **Eight sub-scores**: seats, passages, natural light, traffic flow,
//!   face-to-face pairing, space efficiency, desk spacing, area per person
//! - **Weights and presets**: taken from an immutable `ScoringConfig`
//! - **Ranking**: stable, highest total first
//! - **Reports**: letter grade and improvement suggestions
//!
//! Scoring is pure: identical inputs always give identical breakdowns.

pub mod analysis;
pub mod breakdown;
pub mod metrics;
pub mod scorer;

pub use analysis::{Grade, LayoutReport, Suggestion};
pub use breakdown::ScoreBreakdown;
pub use metrics::SubScores;
pub use scorer::{RankedLayout, ScoreContext, Scorer};
