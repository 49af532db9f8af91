//! Table geometry: shape catalogue, seat-count base sizes, and render boxes.
//!
//! A table's rendered box is derived, never stored. It is a pure function of
//! its capacity, shape and per-table scale:
//!
//! ```text
//! size = base_size(capacity) * shape.multiplier() * clamp(scale, 0.5, 2.0)
//! ```
//!
//! The same box is used for drawing and for hit-testing, so both always agree.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{TABLE_SCALE_MAX, TABLE_SCALE_MIN};

/// Visual shape of a table. Each shape stretches the capacity box by a fixed
/// `(width, height)` multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableShape {
    Square,
    Round,
    Rectangular,
    Oval,
    Bar,
    HighTop,
    Booth,
    CornerBooth,
    Banquette,
    Communal,
    UShape,
    LShape,
    HalfRound,
    Hexagon,
    Octagon,
    Lounge,
    Patio,
}

impl TableShape {
    /// Every shape, once.
    pub const ALL: [TableShape; 17] = [
        Self::Square,
        Self::Round,
        Self::Rectangular,
        Self::Oval,
        Self::Bar,
        Self::HighTop,
        Self::Booth,
        Self::CornerBooth,
        Self::Banquette,
        Self::Communal,
        Self::UShape,
        Self::LShape,
        Self::HalfRound,
        Self::Hexagon,
        Self::Octagon,
        Self::Lounge,
        Self::Patio,
    ];

    /// `(width, height)` multiplier applied to the capacity box.
    #[must_use]
    pub fn multiplier(self) -> (f64, f64) {
        match self {
            Self::Square | Self::Round => (1.0, 1.0),
            Self::Rectangular => (1.5, 0.8),
            Self::Oval => (1.4, 0.9),
            Self::Bar => (1.8, 0.6),
            Self::HighTop => (0.8, 0.8),
            Self::Booth => (1.3, 1.1),
            Self::CornerBooth => (1.3, 1.3),
            Self::Banquette => (2.0, 0.7),
            Self::Communal => (2.5, 1.2),
            Self::UShape => (1.6, 1.4),
            Self::LShape => (1.4, 1.4),
            Self::HalfRound => (1.2, 0.7),
            Self::Hexagon | Self::Octagon => (1.1, 1.1),
            Self::Lounge => (1.5, 1.0),
            Self::Patio => (1.2, 1.2),
        }
    }

    /// Wire name, e.g. `"u-shape"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Round => "round",
            Self::Rectangular => "rectangular",
            Self::Oval => "oval",
            Self::Bar => "bar",
            Self::HighTop => "high-top",
            Self::Booth => "booth",
            Self::CornerBooth => "corner-booth",
            Self::Banquette => "banquette",
            Self::Communal => "communal",
            Self::UShape => "u-shape",
            Self::LShape => "l-shape",
            Self::HalfRound => "half-round",
            Self::Hexagon => "hexagon",
            Self::Octagon => "octagon",
            Self::Lounge => "lounge",
            Self::Patio => "patio",
        }
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a shape name is not in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown table shape: {0}")]
pub struct ShapeParseError(pub String);

impl FromStr for TableShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| ShapeParseError(s.to_string()))
    }
}

/// Width/height pair in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Base box for a seat count. Unknown capacities fall back to the 4-seat box.
#[must_use]
pub fn base_size(capacity: u32) -> Size {
    match capacity {
        2 => Size::new(70.0, 70.0),
        6 => Size::new(130.0, 90.0),
        8 => Size::new(150.0, 100.0),
        _ => Size::new(90.0, 90.0),
    }
}

/// Clamp a per-table scale to `[0.5, 2.0]`. Non-finite input resets to 1.0.
#[must_use]
pub fn clamp_table_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(TABLE_SCALE_MIN, TABLE_SCALE_MAX)
    } else {
        1.0
    }
}

/// Rendered size of a table.
#[must_use]
pub fn size_of(capacity: u32, shape: TableShape, scale: f64) -> Size {
    let base = base_size(capacity);
    let (mw, mh) = shape.multiplier();
    let scale = clamp_table_scale(scale);
    Size::new(base.width * mw * scale, base.height * mh * scale)
}

/// Axis-aligned box of a table before rotation, plus its rotation in degrees
/// about the box center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl Bounds {
    /// Center of the box in canvas coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Whether `pt` falls inside the rotated box (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let c = self.center();
        let (sin, cos) = (-self.rotation.to_radians()).sin_cos();
        let dx = pt.x - c.x;
        let dy = pt.y - c.y;
        let local_x = dx * cos - dy * sin;
        let local_y = dx * sin + dy * cos;
        local_x.abs() <= self.width * 0.5 && local_y.abs() <= self.height * 0.5
    }
}
