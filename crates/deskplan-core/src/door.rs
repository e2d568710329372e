//! # Door Model
//!
//! Turns a door specification into the blocking buffer rectangle, the swing
//! tip used for clearance checks, and the swing-arc angles a renderer needs.
//!
//! Angles are degrees, counter-clockwise from +x in a y-up drawing frame.

use crate::error::LayoutError;
use crate::geometry::{Point, Rect, Room};
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default door leaf width (mm)
pub const DOOR_WIDTH: i64 = 850;
/// Default depth of the blocked swing zone (mm)
pub const DOOR_BUFFER_DEPTH: i64 = 900;

/// Door swing direction relative to the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorSwing {
    #[default]
    In,
    Out,
}

impl FromStr for DoorSwing {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(DoorSwing::In),
            "out" => Ok(DoorSwing::Out),
            _ => Err(LayoutError::InvalidSwing {
                value: s.to_string(),
            }),
        }
    }
}

/// Door as described by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpec {
    pub side: Side,
    pub width: i64,
    pub buffer_depth: i64,
    /// Distance of the door from the start of its wall; centred when absent
    pub offset: Option<i64>,
    pub swing: DoorSwing,
    pub flip_v: bool,
    pub flip_h: bool,
}

impl DoorSpec {
    /// Centred, inward-swinging door of default size on `side`
    pub fn new(side: Side) -> Self {
        Self {
            side,
            width: DOOR_WIDTH,
            buffer_depth: DOOR_BUFFER_DEPTH,
            offset: None,
            swing: DoorSwing::In,
            flip_v: false,
            flip_h: false,
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_size(mut self, width: i64, buffer_depth: i64) -> Self {
        self.width = width;
        self.buffer_depth = buffer_depth;
        self
    }

    pub fn with_swing(mut self, swing: DoorSwing) -> Self {
        self.swing = swing;
        self
    }

    pub fn with_flips(mut self, flip_v: bool, flip_h: bool) -> Self {
        self.flip_v = flip_v;
        self.flip_h = flip_h;
        self
    }

    /// Resolve the door against a room
    pub fn layout(&self, room: &Room) -> DoorLayout {
        let wall_len = self.side.wall_length(room.width, room.depth);
        let max_offset = (wall_len - self.width).max(0);
        let along = match self.offset {
            Some(offset) => offset.clamp(0, max_offset),
            None => max_offset / 2,
        };

        let rect = match self.side {
            Side::Top => Rect::new(along, 0, self.width, self.buffer_depth),
            Side::Bottom => Rect::new(
                along,
                room.depth - self.buffer_depth,
                self.width,
                self.buffer_depth,
            ),
            Side::Left => Rect::new(0, along, self.buffer_depth, self.width),
            Side::Right => Rect::new(
                room.width - self.buffer_depth,
                along,
                self.buffer_depth,
                self.width,
            ),
        };

        let tip = match self.side {
            Side::Top => Point::new(rect.x as f64, rect.w as f64),
            Side::Bottom => Point::new(rect.x as f64, (room.depth - rect.w) as f64),
            Side::Left => Point::new(rect.d as f64, rect.y as f64),
            Side::Right => Point::new((room.width - rect.d) as f64, rect.y as f64),
        };

        DoorLayout {
            rect,
            side: self.side,
            tip,
            offset: self.offset,
            swing: self.swing,
            flip_v: self.flip_v,
            flip_h: self.flip_h,
        }
    }
}

/// A door resolved against a concrete room
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorLayout {
    /// Blocked swing buffer
    pub rect: Rect,
    pub side: Side,
    /// End of the swing radius inside the room
    pub tip: Point,
    pub offset: Option<i64>,
    pub swing: DoorSwing,
    pub flip_v: bool,
    pub flip_h: bool,
}

impl DoorLayout {
    /// Blocking regions for a solve: the door buffer followed by pillars
    pub fn blocks(&self, pillars: &[Rect]) -> Vec<Rect> {
        let mut blocks = Vec::with_capacity(1 + pillars.len());
        blocks.push(self.rect);
        blocks.extend_from_slice(pillars);
        blocks
    }

    /// Centre of the door buffer, used as the traffic-flow anchor
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Swing arc for drawing
    pub fn arc(&self, room: &Room) -> DoorArc {
        let angles = door_arc_angles(self.side, self.swing, self.flip_v, self.flip_h);
        let r = &self.rect;
        let (hinge, radius) = match self.side {
            Side::Top | Side::Bottom => {
                let cx = if self.flip_h { r.x2() } else { r.x };
                let cy = if self.side == Side::Top { 0 } else { room.depth };
                (Point::new(cx as f64, cy as f64), r.w as f64)
            }
            Side::Left | Side::Right => {
                let cx = if self.side == Side::Left { 0 } else { room.width };
                let cy = if self.flip_v { r.y2() } else { r.y };
                (Point::new(cx as f64, cy as f64), r.d as f64)
            }
        };
        DoorArc {
            hinge,
            radius,
            angles,
        }
    }
}

/// Angular part of a door arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcAngles {
    pub start_angle: i32,
    /// Always in `0..=180`
    pub extent: i32,
    /// Directions of the two radius lines (closed leaf, open leaf)
    pub radius_lines: [i32; 2],
}

/// Complete door arc in room coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorArc {
    pub hinge: Point,
    pub radius: f64,
    pub angles: ArcAngles,
}

/// Compose the swing-arc angles for a door.
///
/// `flip_v` only affects doors on L/R walls and `flip_h` only doors on T/B
/// walls; the other flag is ignored.
pub fn door_arc_angles(side: Side, swing: DoorSwing, flip_v: bool, flip_h: bool) -> ArcAngles {
    let (a1, a2) = match (swing, side) {
        (DoorSwing::Out, Side::Top) => (90, 180),
        (DoorSwing::Out, Side::Bottom) => (270, 360),
        (DoorSwing::Out, Side::Left) => (0, 90),
        (DoorSwing::Out, Side::Right) => (180, 270),
        (DoorSwing::In, Side::Top) => (270, 0),
        (DoorSwing::In, Side::Bottom) => (0, 90),
        (DoorSwing::In, Side::Left) => (270, 0),
        (DoorSwing::In, Side::Right) => (180, 270),
    };

    let flip_v = flip_v && side.is_long_wall();
    let flip_h = flip_h && !side.is_long_wall();

    let flip = |a: i32| -> i32 {
        let mut a = a.rem_euclid(360);
        if flip_v {
            a = (360 - a).rem_euclid(360);
        }
        if flip_h {
            a = (180 - a).rem_euclid(360);
        }
        a
    };
    let (a1, a2) = (flip(a1), flip(a2));

    let extent = (a2 - a1).rem_euclid(360);
    let (start_angle, extent) = if extent > 180 {
        (a2, 360 - extent)
    } else {
        (a1, extent)
    };

    ArcAngles {
        start_angle,
        extent,
        radius_lines: [a1, a2],
    }
}
