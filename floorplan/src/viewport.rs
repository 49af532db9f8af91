//! Viewport controller: pan offset and zoom scale for one canvas instance.
//!
//! DESIGN
//! ======
//! Three independent gesture channels feed the same `pan` / `zoom` pair:
//!
//! | Channel | Pans | Zooms |
//! |---------|------|-------|
//! | mouse   | middle button or ctrl/cmd drag | ctrl/cmd + wheel |
//! | touch   | one finger drag | two finger pinch |
//! | buttons | - | zoom in / zoom out / reset |
//!
//! Zoom changes never touch the pan offset: the canvas scales about its fixed
//! origin rather than about the pinch midpoint or the cursor. Zoom is clamped
//! to `[ZOOM_MIN, ZOOM_MAX]`; pan is unbounded.
//!
//! Every handler returns whether the visible state changed so the host knows
//! when to re-render.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::camera::{Camera, Point, distance};
use crate::consts::{BUTTON_ZOOM_STEP, DEFAULT_INITIAL_ZOOM, PINCH_ZOOM_STEP, WHEEL_ZOOM_STEP, ZOOM_MAX, ZOOM_MIN};
use crate::input::{Button, GestureState, Modifiers, WheelDelta};

/// Result of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelOutcome {
    /// Zoom changed.
    pub changed: bool,
    /// The host must suppress the browser's default wheel handling (page zoom/scroll).
    pub suppress_default: bool,
}

/// Clamp a zoom value to the viewport bounds.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Pan/zoom state plus the gesture currently being tracked.
#[derive(Debug, Clone)]
pub struct ViewportController {
    pan: Point,
    zoom: f64,
    initial_zoom: f64,
    gesture: GestureState,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_ZOOM)
    }
}

impl ViewportController {
    /// Create a controller at the origin with the given starting zoom.
    /// A non-finite zoom falls back to [`DEFAULT_INITIAL_ZOOM`].
    #[must_use]
    pub fn new(initial_zoom: f64) -> Self {
        let initial_zoom = if initial_zoom.is_finite() { clamp_zoom(initial_zoom) } else { DEFAULT_INITIAL_ZOOM };
        Self { pan: Point::default(), zoom: initial_zoom, initial_zoom, gesture: GestureState::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.gesture.is_panning
    }

    /// Snapshot for coordinate transforms.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera { pan_x: self.pan.x, pan_y: self.pan.y, zoom: self.zoom }
    }

    // --- Mouse ---

    /// Start a pan on middle button, or any button with ctrl/cmd held.
    ///
    /// Returns `true` if a pan started. Ignored while a pan is already active.
    pub fn on_pointer_down(&mut self, pos: Point, button: Button, modifiers: Modifiers) -> bool {
        if self.gesture.is_panning {
            return false;
        }
        if button != Button::Middle && !modifiers.command() {
            return false;
        }
        self.start_pan(pos);
        true
    }

    /// Follow the pointer while panning.
    pub fn on_pointer_move(&mut self, pos: Point) -> bool {
        if !self.gesture.is_panning {
            return false;
        }
        self.follow(pos)
    }

    /// End any pan.
    pub fn on_pointer_up(&mut self) {
        self.gesture.is_panning = false;
    }

    /// Same as pointer-up: leaving the container ends the pan.
    pub fn on_pointer_leave(&mut self) {
        self.gesture.is_panning = false;
    }

    /// Ctrl/cmd + wheel zooms by a fixed step; plain wheel is left to the host.
    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> WheelOutcome {
        if !modifiers.command() {
            return WheelOutcome::default();
        }
        let step = if delta.dy < 0.0 { WHEEL_ZOOM_STEP } else { -WHEEL_ZOOM_STEP };
        WheelOutcome { changed: self.zoom_by(step), suppress_default: true }
    }

    // --- Touch ---

    /// One finger starts a pan; two fingers start a pinch.
    pub fn on_touch_start(&mut self, touches: &[Point]) {
        match touches {
            [one] => self.start_pan(*one),
            [a, b] => self.gesture.last_pinch_distance = Some(distance(*a, *b)),
            _ => {}
        }
    }

    /// One finger follows the pan; two fingers step the zoom toward the spread
    /// direction by a fixed amount per event, regardless of spread magnitude.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> bool {
        match touches {
            [one] if self.gesture.is_panning => self.follow(*one),
            [a, b] => {
                let Some(last) = self.gesture.last_pinch_distance else {
                    return false;
                };
                let current = distance(*a, *b);
                let step = if current - last > 0.0 { PINCH_ZOOM_STEP } else { -PINCH_ZOOM_STEP };
                self.gesture.last_pinch_distance = Some(current);
                self.zoom_by(step)
            }
            _ => false,
        }
    }

    /// Lifting any finger ends both pan and pinch.
    pub fn on_touch_end(&mut self) {
        self.gesture.is_panning = false;
        self.gesture.last_pinch_distance = None;
    }

    // --- Buttons ---

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(BUTTON_ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(-BUTTON_ZOOM_STEP)
    }

    /// Back to the origin at the starting zoom. Cancels any gesture.
    pub fn reset(&mut self) {
        self.pan = Point::default();
        self.zoom = self.initial_zoom;
        self.gesture = GestureState::default();
    }

    // --- Internals ---

    fn start_pan(&mut self, pos: Point) {
        self.gesture.is_panning = true;
        self.gesture.pan_anchor = Point::new(pos.x - self.pan.x, pos.y - self.pan.y);
    }

    fn follow(&mut self, pos: Point) -> bool {
        let next = Point::new(pos.x - self.gesture.pan_anchor.x, pos.y - self.gesture.pan_anchor.y);
        let changed = next != self.pan;
        self.pan = next;
        changed
    }

    #[allow(clippy::float_cmp)]
    fn zoom_by(&mut self, step: f64) -> bool {
        let next = clamp_zoom(self.zoom + step);
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }
}
