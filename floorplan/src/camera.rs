//! Coordinate transforms between client (screen) space and canvas space.
//!
//! The canvas is drawn inside a container element. The container is translated
//! by the viewport's pan and scaled by its zoom, with the transform origin at
//! the container's top-left corner, so converting a pointer position back to
//! canvas units is a subtract-then-divide.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in either client or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the canvas container in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Pan/zoom snapshot of a viewport.
///
/// `pan_x` / `pan_y` are in client pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a container-relative point to canvas coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a canvas point to container-relative coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }
}

/// Convert a pointer/touch client position to canvas coordinates.
///
/// `((client.x - left - pan_x) / zoom, (client.y - top - pan_y) / zoom)`.
/// Every drop and click handler goes through this function.
#[must_use]
pub fn client_to_canvas(client: Point, container: ContainerRect, camera: Camera) -> Point {
    camera.screen_to_world(Point::new(client.x - container.left, client.y - container.top))
}

/// Inverse of [`client_to_canvas`].
#[must_use]
pub fn canvas_to_client(canvas: Point, container: ContainerRect, camera: Camera) -> Point {
    let screen = camera.world_to_screen(canvas);
    Point::new(screen.x + container.left, screen.y + container.top)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}
