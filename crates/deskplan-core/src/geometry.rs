//! # Geometry Kernel
//!
//! Axis-aligned rectangles in integer millimeters with a top-left origin
//! (x grows to the right, y grows towards the bottom wall).
//!
//! Provides:
//! - `Rect` with derived far edges (`x2`, `y2`)
//! - Open-rectangle overlap test (edge contact is not overlap)
//! - Room containment and the combined `can_place` check
//! - Point-to-rectangle distance used for door and desk clearances

use serde::{Deserialize, Serialize};

/// A point in room coordinates (mm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle `{x, y, w, d}` in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub d: i64,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i64, y: i64, w: i64, d: i64) -> Self {
        Self { x, y, w, d }
    }

    /// Right edge
    pub const fn x2(&self) -> i64 {
        self.x + self.w
    }

    /// Bottom edge
    pub const fn y2(&self) -> i64 {
        self.y + self.d
    }

    /// Footprint in mm²
    pub const fn area(&self) -> i64 {
        self.w * self.d
    }

    /// Length of the shorter edge
    pub fn short_side(&self) -> i64 {
        self.w.min(self.d)
    }

    /// Geometric centre
    pub fn center(&self) -> Point {
        Point::new(
            self.x as f64 + self.w as f64 / 2.0,
            self.y as f64 + self.d as f64 / 2.0,
        )
    }

    /// True if the open interiors of the two rectangles overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }

    /// Per-axis gap between this rectangle and a point (0 when the point is
    /// within the rectangle's span on that axis)
    pub fn point_gaps(&self, pt: &Point) -> (f64, f64) {
        let dx = if pt.x < self.x as f64 {
            self.x as f64 - pt.x
        } else if pt.x > self.x2() as f64 {
            pt.x - self.x2() as f64
        } else {
            0.0
        };
        let dy = if pt.y < self.y as f64 {
            self.y as f64 - pt.y
        } else if pt.y > self.y2() as f64 {
            pt.y - self.y2() as f64
        } else {
            0.0
        };
        (dx, dy)
    }

    /// Shortest distance from the rectangle (including its interior) to a point
    pub fn distance_to_point(&self, pt: &Point) -> f64 {
        let (dx, dy) = self.point_gaps(pt);
        (dx * dx + dy * dy).sqrt()
    }

    /// Per-axis gap to another rectangle (0 on an axis where they overlap or touch)
    pub fn axis_gaps(&self, other: &Rect) -> (i64, i64) {
        let dx = if self.x2() <= other.x {
            other.x - self.x2()
        } else if other.x2() <= self.x {
            self.x - other.x2()
        } else {
            0
        };
        let dy = if self.y2() <= other.y {
            other.y - self.y2()
        } else if other.y2() <= self.y {
            self.y - other.y2()
        } else {
            0
        };
        (dx, dy)
    }
}

/// Room interior extents (mm), origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub width: i64,
    pub depth: i64,
}

impl Room {
    /// Create a room from its interior size
    pub fn new(width: i64, depth: i64) -> Self {
        debug_assert!(width > 0, "room width must be positive, got {width}");
        debug_assert!(depth > 0, "room depth must be positive, got {depth}");
        Self { width, depth }
    }

    /// Create a room from nominal (drawing) dimensions plus the fixed
    /// wall-thickness padding
    pub fn from_nominal(width: i64, depth: i64, padding: i64) -> Self {
        Self::new(width + padding, depth + padding)
    }

    /// Floor area in mm²
    pub fn area(&self) -> i64 {
        self.width * self.depth
    }

    /// True if the rectangle lies fully inside the room
    pub fn contains(&self, r: &Rect) -> bool {
        inside_room(r, self.width, self.depth)
    }
}

/// True iff the open rectangles overlap; touching edges do not count
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.x2() <= b.x || b.x2() <= a.x || a.y2() <= b.y || b.y2() <= a.y)
}

/// True iff `r` lies fully within `[0, room_w] x [0, room_d]`
pub fn inside_room(r: &Rect, room_w: i64, room_d: i64) -> bool {
    r.x >= 0 && r.y >= 0 && r.x2() <= room_w && r.y2() <= room_d
}

/// True if `r` overlaps any rectangle in `blocks`
pub fn intersects_any(r: &Rect, blocks: &[Rect]) -> bool {
    blocks.iter().any(|b| intersects(r, b))
}

/// Inside the room and clear of every block
pub fn can_place(r: &Rect, room: &Room, blocks: &[Rect]) -> bool {
    room.contains(r) && !intersects_any(r, blocks)
}

/// True when no tip is given, or when `r` stays at least `radius` away from it
pub fn clear_of_point(r: &Rect, pt: Option<&Point>, radius: f64) -> bool {
    match pt {
        Some(p) => r.distance_to_point(p) >= radius,
        None => true,
    }
}
