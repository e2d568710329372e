//! # DeskPlan
//!
//! Office floor-plan furniture placement and layout scoring.
//!
//! ## Architecture
//!
//! DeskPlan is organized as a workspace with multiple crates:
//!
//! 1. **deskplan-core** - Geometry kernel, placed items, catalog, door model
//! 2. **deskplan-settings** - Placement tunables, scoring weights, config files
//! 3. **deskplan-designer** - Pattern generators, equipment placement, solver
//! 4. **deskplan-scoring** - Weighted scoring, ranking and reports
//!
//! ## Features
//!
//! - **Wall, face-to-face and mixed patterns** for workstation arrays
//! - **Door-aware placement** with blocking buffers and swing clearance
//! - **Wall-only equipment** placement for storage and printers
//! - **Priority modes** for seat count, desk size or equipment
//! - **Scoring presets** and graded reports with suggestions

pub use deskplan_core::{
    can_place, clear_of_point, door_arc_angles, inside_room, intersects, intersects_any,
    ArcAngles, Axis, Catalog, CatalogError, DoorArc, DoorLayout, DoorSpec, DoorSwing, Error,
    FurnitureCategory, FurnitureSpec, ItemKind, LayoutError, PlacedItem, Point, Rect, Result,
    Room, Side,
};

pub use deskplan_settings::{
    Config, ConfigError, ConfigFormat, DeskCandidates, PlacementConfig, ScoringConfig,
    ScoringThresholds, ScoringWeights, SettingsError, WeightOverrides,
};

pub use deskplan_designer::{
    chair_rect, double_wall, double_wall_top_bottom, face_to_face_center, mixed,
    place_equipment_along_wall, place_equipment_wall_only, single_wall, single_wall_tb,
    CandidateResult, EquipmentOptions, LayoutPlans, LayoutRequest, Pattern, PlacementContext,
    PriorityMode, Solver, SweepFrom, SweepOptions, Workstation,
};

pub use deskplan_scoring::{
    Grade, LayoutReport, RankedLayout, ScoreBreakdown, ScoreContext, Scorer, SubScores,
    Suggestion,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
