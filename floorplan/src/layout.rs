//! Floor layout model and the single mutation path for it.
//!
//! This module defines the data that describes a floor plan (`Floor`, `Table`,
//! `TableStatus`) and `LayoutStore`, the runtime owner of every floor plus the
//! current floor/table selection.
//!
//! DESIGN
//! ======
//! Floors are immutable value snapshots. Every mutation rebuilds the owning
//! floor's `layout` (full replace), resyncs `table_count`, stamps
//! `last_modified`, swaps the rebuilt floor into the store and returns a copy
//! of it so the caller can forward exactly that snapshot to the backing store.
//! Selection is held by id, so reading the selected floor always yields the
//! latest snapshot.
//!
//! INVARIANTS
//! ==========
//! - At least one floor exists once the store has been hydrated.
//! - `table.number` is unique within a floor (`max + 1`, or 1 when empty).
//! - `table.floor_id` matches the floor holding it.
//! - `position` stays inside `[0, MAX_TABLE_X] x [0, MAX_TABLE_Y]`.
//! - `scale` stays inside `[TABLE_SCALE_MIN, TABLE_SCALE_MAX]`.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{
    DEFAULT_CAPACITY, DEFAULT_TABLE_X, DEFAULT_TABLE_Y, MAX_TABLE_X, MAX_TABLE_Y, NUDGE_STEP, ROTATE_STEP_DEG,
};
use crate::geometry::{Bounds, Size, TableShape, clamp_table_scale, size_of};
use crate::guest::GuestEntry;
use crate::input::Direction;

/// Unique identifier for a table.
pub type TableId = Uuid;

/// Unique identifier for a floor.
pub type FloorId = Uuid;

// =============================================================================
// TYPES
// =============================================================================

/// Occupancy state of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Reserved,
    Occupied,
    Cleaning,
}

/// A seating unit placed on a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    /// Guest-facing number, unique within the floor.
    pub number: u32,
    pub floor_id: FloorId,
    /// Seat count. 2/4/6/8 pick a base size; anything else renders as a 4-top.
    pub capacity: u32,
    pub shape: TableShape,
    #[serde(default)]
    pub status: TableStatus,
    /// Top-left corner in canvas space.
    pub position: Point,
    /// Clockwise rotation in degrees around the box center.
    #[serde(default)]
    pub rotation: f64,
    /// Per-table size multiplier, independent of viewport zoom.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<Uuid>,
}

fn default_scale() -> f64 {
    1.0
}

impl Table {
    /// Rendered size from capacity, shape and scale.
    #[must_use]
    pub fn size(&self) -> Size {
        size_of(self.capacity, self.shape, self.scale)
    }

    /// Rendered box, used for drawing and hit-testing.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let size = self.size();
        Bounds {
            x: self.position.x,
            y: self.position.y,
            width: size.width,
            height: size.height,
            rotation: self.rotation,
        }
    }
}

/// A named floor and the tables laid out on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    pub layout: Vec<Table>,
    /// Denormalized `layout.len()`.
    pub table_count: usize,
    /// Milliseconds since Unix epoch of the last change.
    pub last_modified: i64,
}

impl Floor {
    /// Create an empty floor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), layout: Vec::new(), table_count: 0, last_modified: now_ms() }
    }

    /// Look up a table on this floor.
    #[must_use]
    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.layout.iter().find(|t| t.id == id)
    }

    /// Number the next added table receives.
    #[must_use]
    pub fn next_table_number(&self) -> u32 {
        self.layout
            .iter()
            .map(|t| t.number)
            .max()
            .map_or(1, |n| n.saturating_add(1))
    }

    /// A copy of this floor with `layout` replaced and bookkeeping refreshed.
    #[must_use]
    pub fn with_layout(&self, layout: Vec<Table>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            table_count: layout.len(),
            layout,
            last_modified: now_ms().max(self.last_modified),
        }
    }

    /// Restore the layout invariants on a floor that came from outside the
    /// store: tables point at this floor, positions and scales are clamped and
    /// `table_count` matches the layout. `last_modified` is left as received.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for table in &mut self.layout {
            table.floor_id = self.id;
            table.position = clamp_position(table.position);
            table.scale = clamp_table_scale(table.scale);
        }
        self.table_count = self.layout.len();
        self
    }
}

/// Current time as milliseconds since Unix epoch.
fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Clamp a canvas position to the layout box.
#[must_use]
pub fn clamp_position(pos: Point) -> Point {
    Point::new(clamp_axis(pos.x, MAX_TABLE_X), clamp_axis(pos.y, MAX_TABLE_Y))
}

fn clamp_axis(v: f64, max: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, max) }
}

// =============================================================================
// ERRORS
// =============================================================================

/// How a layout error should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input; shown as a warning, nothing changes.
    Validation,
    /// The referenced floor/table no longer exists; the stale selection is dropped.
    MissingReference,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("floor not found: {0}")]
    FloorNotFound(FloorId),
    #[error("table not found: {0}")]
    TableNotFound(TableId),
    #[error("floor name must not be empty")]
    EmptyFloorName,
    #[error("cannot delete the last remaining floor")]
    LastFloor,
}

impl LayoutError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FloorNotFound(_) => "E_FLOOR_NOT_FOUND",
            Self::TableNotFound(_) => "E_TABLE_NOT_FOUND",
            Self::EmptyFloorName => "E_EMPTY_FLOOR_NAME",
            Self::LastFloor => "E_LAST_FLOOR",
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FloorNotFound(_) | Self::TableNotFound(_) => ErrorKind::MissingReference,
            Self::EmptyFloorName | Self::LastFloor => ErrorKind::Validation,
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// All floors of one restaurant plus the editor's selection.
#[derive(Debug, Clone, Default)]
pub struct LayoutStore {
    floors: Vec<Floor>,
    selected_floor: Option<FloorId>,
    selected_table: Option<TableId>,
}

impl LayoutStore {
    /// Create a store over `floors`, selecting the first one.
    #[must_use]
    pub fn new(floors: Vec<Floor>) -> Self {
        let floors: Vec<Floor> = floors.into_iter().map(Floor::normalized).collect();
        let selected_floor = floors.first().map(|f| f.id);
        Self { floors, selected_floor, selected_table: None }
    }

    // --- Queries ---

    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[must_use]
    pub fn floor(&self, id: FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn selected_floor_id(&self) -> Option<FloorId> {
        self.selected_floor
    }

    /// The latest snapshot of the selected floor.
    #[must_use]
    pub fn selected_floor(&self) -> Option<&Floor> {
        self.selected_floor.and_then(|id| self.floor(id))
    }

    #[must_use]
    pub fn selected_table_id(&self) -> Option<TableId> {
        self.selected_table
    }

    /// The selected table on the selected floor.
    #[must_use]
    pub fn selected_table(&self) -> Option<&Table> {
        let id = self.selected_table?;
        self.selected_floor()?.table(id)
    }

    // --- Floor lifecycle ---

    /// Add a floor and select it.
    ///
    /// # Errors
    ///
    /// `EmptyFloorName` if `name` is blank.
    pub fn create_floor(&mut self, name: &str) -> Result<Floor, LayoutError> {
        let name = validate_name(name)?;
        let floor = Floor::new(name);
        self.floors.push(floor.clone());
        self.selected_floor = Some(floor.id);
        self.selected_table = None;
        Ok(floor)
    }

    /// Rename a floor.
    ///
    /// # Errors
    ///
    /// `EmptyFloorName` if `name` is blank, `FloorNotFound` if the floor is gone.
    pub fn rename_floor(&mut self, floor_id: FloorId, name: &str) -> Result<Floor, LayoutError> {
        let name = validate_name(name)?;
        let idx = self.floor_index(floor_id)?;
        let current = &self.floors[idx];
        let mut renamed = current.with_layout(current.layout.clone());
        renamed.name = name.to_string();
        self.floors[idx] = renamed.clone();
        Ok(renamed)
    }

    /// Remove a floor. The last floor cannot be removed. If the removed floor
    /// was selected, selection falls back to the first remaining floor.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` if the floor is gone, `LastFloor` if it is the only one.
    pub fn delete_floor(&mut self, floor_id: FloorId) -> Result<(), LayoutError> {
        let idx = self.floor_index(floor_id)?;
        if self.floors.len() <= 1 {
            return Err(LayoutError::LastFloor);
        }
        self.floors.remove(idx);
        if self.selected_floor == Some(floor_id) {
            self.selected_floor = self.floors.first().map(|f| f.id);
            self.selected_table = None;
        }
        Ok(())
    }

    /// Switch the selected floor. A table selection from another floor is dropped.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` if the floor is gone.
    pub fn select_floor(&mut self, floor_id: FloorId) -> Result<(), LayoutError> {
        self.floor_index(floor_id)?;
        self.selected_floor = Some(floor_id);
        self.reconcile_selection();
        Ok(())
    }

    /// Select a table on the selected floor. On failure the selection is cleared.
    ///
    /// # Errors
    ///
    /// `TableNotFound` if the table is not on the selected floor.
    pub fn select_table(&mut self, table_id: TableId) -> Result<(), LayoutError> {
        let on_floor = self.selected_floor().is_some_and(|f| f.table(table_id).is_some());
        if !on_floor {
            self.selected_table = None;
            return Err(LayoutError::TableNotFound(table_id));
        }
        self.selected_table = Some(table_id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_table = None;
    }

    /// Replace every floor with a pushed snapshot and drop stale selections.
    ///
    /// An empty push is ignored so the store never ends up without a floor.
    /// Returns `true` if the snapshot was applied.
    pub fn apply_remote(&mut self, floors: Vec<Floor>) -> bool {
        if floors.is_empty() {
            return false;
        }
        self.floors = floors.into_iter().map(Floor::normalized).collect();
        self.reconcile_selection();
        true
    }

    // --- Table mutations ---

    /// Append a new table with default capacity, status and position.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` if the floor is gone.
    pub fn add_table(&mut self, floor_id: FloorId, shape: TableShape) -> Result<Floor, LayoutError> {
        self.rebuild(floor_id, |floor| {
            let mut layout = floor.layout.clone();
            layout.push(Table {
                id: Uuid::new_v4(),
                number: floor.next_table_number(),
                floor_id: floor.id,
                capacity: DEFAULT_CAPACITY,
                shape,
                status: TableStatus::Available,
                position: Point::new(DEFAULT_TABLE_X, DEFAULT_TABLE_Y),
                rotation: 0.0,
                scale: 1.0,
                reservation_id: None,
                server_id: None,
            });
            Ok(layout)
        })
    }

    /// Remove a table. Clears the selection if it pointed at that table.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn delete_table(&mut self, floor_id: FloorId, table_id: TableId) -> Result<Floor, LayoutError> {
        let floor = self.rebuild(floor_id, |floor| {
            if floor.table(table_id).is_none() {
                return Err(LayoutError::TableNotFound(table_id));
            }
            Ok(floor
                .layout
                .iter()
                .filter(|t| t.id != table_id)
                .cloned()
                .collect())
        })?;
        if self.selected_table == Some(table_id) {
            self.selected_table = None;
        }
        Ok(floor)
    }

    /// Place a table at `position`, clamped to the layout box.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn move_table(&mut self, floor_id: FloorId, table_id: TableId, position: Point) -> Result<Floor, LayoutError> {
        let position = clamp_position(position);
        self.update_table(floor_id, table_id, |t| t.position = position)
    }

    /// Move a table one step in `direction`.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn nudge_table(&mut self, floor_id: FloorId, table_id: TableId, direction: Direction) -> Result<Floor, LayoutError> {
        let current = self
            .floor(floor_id)
            .ok_or(LayoutError::FloorNotFound(floor_id))?
            .table(table_id)
            .ok_or(LayoutError::TableNotFound(table_id))?
            .position;
        let (dx, dy) = direction.unit();
        let target = Point::new(current.x + dx * NUDGE_STEP, current.y + dy * NUDGE_STEP);
        self.move_table(floor_id, table_id, target)
    }

    /// Turn a table one 45 degree step clockwise.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn rotate_table(&mut self, floor_id: FloorId, table_id: TableId) -> Result<Floor, LayoutError> {
        self.update_table(floor_id, table_id, |t| {
            t.rotation = (t.rotation + ROTATE_STEP_DEG).rem_euclid(360.0);
        })
    }

    /// Change the seat count. Scale is left alone.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn set_capacity(&mut self, floor_id: FloorId, table_id: TableId, capacity: u32) -> Result<Floor, LayoutError> {
        self.update_table(floor_id, table_id, |t| t.capacity = capacity)
    }

    /// Store `scale` clamped to the table-scale bounds.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn set_scale(&mut self, floor_id: FloorId, table_id: TableId, scale: f64) -> Result<Floor, LayoutError> {
        let scale = clamp_table_scale(scale);
        self.update_table(floor_id, table_id, |t| t.scale = scale)
    }

    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn set_status(&mut self, floor_id: FloorId, table_id: TableId, status: TableStatus) -> Result<Floor, LayoutError> {
        self.update_table(floor_id, table_id, |t| t.status = status)
    }

    /// Put a guest on a table. A reservation links the table and marks it
    /// reserved; a waitlist party is seated straight away.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn assign_guest(&mut self, floor_id: FloorId, table_id: TableId, entry: &GuestEntry) -> Result<Floor, LayoutError> {
        let (reservation_id, status) = match entry {
            GuestEntry::Reservation { id, .. } => (Some(*id), TableStatus::Reserved),
            GuestEntry::Waitlist { .. } => (None, TableStatus::Occupied),
        };
        self.update_table(floor_id, table_id, |t| {
            t.reservation_id = reservation_id;
            t.status = status;
        })
    }

    /// Unlink any reservation and mark the table available.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn clear_reservation(&mut self, floor_id: FloorId, table_id: TableId) -> Result<Floor, LayoutError> {
        self.update_table(floor_id, table_id, |t| {
            t.reservation_id = None;
            t.status = TableStatus::Available;
        })
    }

    /// Set or clear the serving staff member.
    ///
    /// # Errors
    ///
    /// `FloorNotFound` / `TableNotFound`.
    pub fn assign_server(&mut self, floor_id: FloorId, table_id: TableId, server_id: Option<Uuid>) -> Result<Floor, LayoutError> {
        self.update_table(floor_id, table_id, |t| t.server_id = server_id)
    }

    // --- Internals ---

    fn floor_index(&self, floor_id: FloorId) -> Result<usize, LayoutError> {
        self.floors
            .iter()
            .position(|f| f.id == floor_id)
            .ok_or(LayoutError::FloorNotFound(floor_id))
    }

    /// The one path every table mutation goes through.
    fn rebuild<F>(&mut self, floor_id: FloorId, build: F) -> Result<Floor, LayoutError>
    where
        F: FnOnce(&Floor) -> Result<Vec<Table>, LayoutError>,
    {
        let idx = self.floor_index(floor_id)?;
        let layout = build(&self.floors[idx])?;
        let rebuilt = self.floors[idx].with_layout(layout);
        self.floors[idx] = rebuilt.clone();
        Ok(rebuilt)
    }

    fn update_table<F>(&mut self, floor_id: FloorId, table_id: TableId, mut edit: F) -> Result<Floor, LayoutError>
    where
        F: FnMut(&mut Table),
    {
        self.rebuild(floor_id, |floor| {
            if floor.table(table_id).is_none() {
                return Err(LayoutError::TableNotFound(table_id));
            }
            Ok(floor
                .layout
                .iter()
                .map(|t| {
                    let mut t = t.clone();
                    if t.id == table_id {
                        edit(&mut t);
                    }
                    t
                })
                .collect())
        })
    }

    fn reconcile_selection(&mut self) {
        if self.selected_floor().is_none() {
            self.selected_floor = self.floors.first().map(|f| f.id);
        }
        if self.selected_table().is_none() {
            self.selected_table = None;
        }
    }
}

fn validate_name(name: &str) -> Result<&str, LayoutError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LayoutError::EmptyFloorName);
    }
    Ok(trimmed)
}
