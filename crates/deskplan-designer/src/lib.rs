//! # DeskPlan Designer
//!
//! Placement engine for office floor plans.
//!
//! ## Features
//!
//! - **Desk–chair composer**: chair rectangles derived from desks
//! - **Pattern generators**: wall, face-to-face and mixed arrangements
//! - **Equipment placement**: greedy wall filling for storage and printers
//! - **Solver**: desk-type × pattern search with priority-ordered selection
//!
//! All placement is synchronous and deterministic. Infeasibility is reported
//! through `CandidateResult::ok`, never as an error.

pub mod candidate;
pub mod context;
pub mod equipment;
pub mod patterns;
pub mod solver;
pub mod workstation;

pub use candidate::{door_clearance_ok, CandidateResult, Pattern};
pub use context::PlacementContext;
pub use equipment::{
    place_equipment_along_wall, place_equipment_wall_only, EquipmentOptions, WallPlacement,
    WallRun,
};
pub use patterns::{
    double_wall, double_wall_top_bottom, face_to_face_center, mixed, single_wall, single_wall_tb,
    SweepFrom, SweepOptions,
};
pub use solver::{selection_key, LayoutPlans, LayoutRequest, PriorityMode, SelectionKey, Solver};
pub use workstation::{chair_rect, Workstation};
