//! Shared numeric constants for the floor-plan editor.

// ── Canvas ──────────────────────────────────────────────────────

/// Logical canvas width. Table positions live in this space.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Logical canvas height.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Nominal table footprint subtracted from the canvas when clamping positions.
///
/// Applied to every table regardless of its rendered size.
pub const NOMINAL_TABLE_WIDTH: f64 = 150.0;

/// Nominal table footprint height. See [`NOMINAL_TABLE_WIDTH`].
pub const NOMINAL_TABLE_HEIGHT: f64 = 100.0;

/// Largest x a table may be placed at (650).
pub const MAX_TABLE_X: f64 = CANVAS_WIDTH - NOMINAL_TABLE_WIDTH;

/// Largest y a table may be placed at (500).
pub const MAX_TABLE_Y: f64 = CANVAS_HEIGHT - NOMINAL_TABLE_HEIGHT;

// ── Zoom ────────────────────────────────────────────────────────

/// Minimum viewport zoom.
pub const ZOOM_MIN: f64 = 0.3;

/// Maximum viewport zoom.
pub const ZOOM_MAX: f64 = 1.5;

/// Zoom applied per two-finger pinch move event.
pub const PINCH_ZOOM_STEP: f64 = 0.02;

/// Zoom applied per ctrl/cmd + wheel event.
pub const WHEEL_ZOOM_STEP: f64 = 0.05;

/// Zoom applied per zoom-in / zoom-out button press.
pub const BUTTON_ZOOM_STEP: f64 = 0.1;

/// Zoom a freshly mounted editor starts at.
pub const DEFAULT_INITIAL_ZOOM: f64 = 0.7;

// ── Tables ──────────────────────────────────────────────────────

/// Smallest per-table size multiplier.
pub const TABLE_SCALE_MIN: f64 = 0.5;

/// Largest per-table size multiplier.
pub const TABLE_SCALE_MAX: f64 = 2.0;

/// Degrees added by one rotate action.
pub const ROTATE_STEP_DEG: f64 = 45.0;

/// Canvas units moved by one directional nudge.
pub const NUDGE_STEP: f64 = 10.0;

/// Where a newly added table is placed.
pub const DEFAULT_TABLE_X: f64 = 350.0;

/// See [`DEFAULT_TABLE_X`].
pub const DEFAULT_TABLE_Y: f64 = 250.0;

/// Seat count given to a newly added table.
pub const DEFAULT_CAPACITY: u32 = 4;
