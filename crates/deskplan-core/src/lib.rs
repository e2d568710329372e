//! # DeskPlan Core
//!
//! Core types and utilities for DeskPlan.
//! Provides the geometry kernel, wall sides and placed items, the furniture
//! catalog, and the door model shared by the placement and scoring engines.

pub mod catalog;
pub mod door;
pub mod error;
pub mod geometry;
pub mod types;

pub use catalog::{
    desk_area, parse_desk_depth, Catalog, FurnitureCategory, FurnitureSpec, DEFAULT_DESK_DEPTH,
};
pub use door::{door_arc_angles, ArcAngles, DoorArc, DoorLayout, DoorSpec, DoorSwing};
pub use error::{CatalogError, Error, LayoutError, Result};
pub use geometry::{can_place, clear_of_point, inside_room, intersects, intersects_any, Point, Rect, Room};
pub use types::{Axis, ItemKind, PlacedItem, Side};
