//! Editor core: the floor-plan view's state and its gesture wiring.
//!
//! `EditorCore` owns the layout store, the viewport controller and the
//! placement surface, and turns input events and toolbar commands into
//! [`Action`]s for the host. The host renders from [`EditorCore::table_views`],
//! forwards `Floor*` actions to the backing store, and shows `Notify` actions
//! to the user. Nothing in here performs I/O.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{ContainerRect, Point, client_to_canvas};
use crate::geometry::{Bounds, TableShape};
use crate::guest::GuestEntry;
use crate::hit::hit_test;
use crate::input::{Button, Direction, Modifiers, WheelDelta};
use crate::layout::{ErrorKind, Floor, FloorId, LayoutError, LayoutStore, TableId, TableStatus};
use crate::placement::{ClickOutcome, PlacementSurface};
use crate::viewport::ViewportController;

// =============================================================================
// ACTIONS
// =============================================================================

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NoticeLevel,
    /// Grepable error code, empty for informational notices.
    pub code: String,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, code: String::new(), message: message.into() }
    }

    #[must_use]
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, code: code.to_string(), message: message.into() }
    }

    #[must_use]
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, code: code.to_string(), message: message.into() }
    }
}

/// Actions returned from editor operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A floor was created locally; persist it.
    FloorCreated(Floor),
    /// A floor snapshot was rebuilt locally; persist it.
    FloorUpdated(Floor),
    /// A floor was removed locally; persist the removal.
    FloorDeleted { id: FloorId },
    /// View mode click: open the read-only table details.
    ShowTableDetails { table_id: TableId },
    Notify(Notification),
    /// The operation was refused. State is unchanged apart from a dropped
    /// stale selection.
    Rejected(LayoutError),
    /// The host must swallow the browser's default handling of this event.
    SuppressDefault,
    RenderNeeded,
}

/// Everything the renderer needs to draw one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub id: TableId,
    pub number: u32,
    pub capacity: u32,
    pub shape: TableShape,
    pub status: TableStatus,
    pub bounds: Bounds,
    pub selected: bool,
    pub has_reservation: bool,
}

// =============================================================================
// EDITOR CORE
// =============================================================================

/// Floor-plan editor state. Single-threaded; every call runs to completion.
#[derive(Debug, Clone)]
pub struct EditorCore {
    pub layout: LayoutStore,
    pub viewport: ViewportController,
    pub placement: PlacementSurface,
    /// Client-space rectangle of the canvas container.
    pub container: ContainerRect,
    /// Pointer moved since the last pointer-down; distinguishes a drag from a click.
    pointer_moved: bool,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(Vec::new(), crate::consts::DEFAULT_INITIAL_ZOOM)
    }
}

impl EditorCore {
    /// Editor over `floors` in view mode, first floor selected.
    #[must_use]
    pub fn new(floors: Vec<Floor>, initial_zoom: f64) -> Self {
        Self {
            layout: LayoutStore::new(floors),
            viewport: ViewportController::new(initial_zoom),
            placement: PlacementSurface::new(false),
            container: ContainerRect::default(),
            pointer_moved: false,
        }
    }

    // --- Data inputs ---

    /// Apply a subscription push.
    pub fn apply_remote(&mut self, floors: Vec<Floor>) -> Vec<Action> {
        if self.layout.apply_remote(floors) {
            if let Some(dragged) = self.placement.dragging() {
                if self.layout.selected_floor().and_then(|f| f.table(dragged)).is_none() {
                    self.placement.cancel_drag();
                }
            }
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Update the container rectangle after a layout/resize.
    pub fn set_container(&mut self, container: ContainerRect) {
        self.container = container;
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) -> Vec<Action> {
        self.placement.set_edit_mode(edit_mode);
        vec![Action::RenderNeeded]
    }

    // --- Floors ---

    pub fn create_floor(&mut self, name: &str) -> Vec<Action> {
        match self.layout.create_floor(name) {
            Ok(floor) => vec![Action::FloorCreated(floor), Action::RenderNeeded],
            Err(e) => self.reject(e),
        }
    }

    pub fn rename_floor(&mut self, floor_id: FloorId, name: &str) -> Vec<Action> {
        let result = self.layout.rename_floor(floor_id, name);
        self.updated(result)
    }

    pub fn delete_floor(&mut self, floor_id: FloorId) -> Vec<Action> {
        match self.layout.delete_floor(floor_id) {
            Ok(()) => vec![Action::FloorDeleted { id: floor_id }, Action::RenderNeeded],
            Err(e) => self.reject(e),
        }
    }

    pub fn select_floor(&mut self, floor_id: FloorId) -> Vec<Action> {
        self.placement.cancel_drag();
        match self.layout.select_floor(floor_id) {
            Ok(()) => vec![Action::RenderNeeded],
            Err(e) => self.reject(e),
        }
    }

    // --- Tables ---

    pub fn add_table(&mut self, floor_id: FloorId, shape: TableShape) -> Vec<Action> {
        let result = self.layout.add_table(floor_id, shape);
        self.updated(result)
    }

    pub fn delete_table(&mut self, floor_id: FloorId, table_id: TableId) -> Vec<Action> {
        if self.placement.dragging() == Some(table_id) {
            self.placement.cancel_drag();
        }
        let result = self.layout.delete_table(floor_id, table_id);
        self.updated(result)
    }

    pub fn move_table(&mut self, floor_id: FloorId, table_id: TableId, position: Point) -> Vec<Action> {
        let result = self.layout.move_table(floor_id, table_id, position);
        self.updated(result)
    }

    pub fn nudge_table(&mut self, floor_id: FloorId, table_id: TableId, direction: Direction) -> Vec<Action> {
        let result = self.layout.nudge_table(floor_id, table_id, direction);
        self.updated(result)
    }

    pub fn rotate_table(&mut self, floor_id: FloorId, table_id: TableId) -> Vec<Action> {
        let result = self.layout.rotate_table(floor_id, table_id);
        self.updated(result)
    }

    pub fn set_capacity(&mut self, floor_id: FloorId, table_id: TableId, capacity: u32) -> Vec<Action> {
        let result = self.layout.set_capacity(floor_id, table_id, capacity);
        self.updated(result)
    }

    pub fn set_scale(&mut self, floor_id: FloorId, table_id: TableId, scale: f64) -> Vec<Action> {
        let result = self.layout.set_scale(floor_id, table_id, scale);
        self.updated(result)
    }

    pub fn set_status(&mut self, floor_id: FloorId, table_id: TableId, status: TableStatus) -> Vec<Action> {
        let result = self.layout.set_status(floor_id, table_id, status);
        self.updated(result)
    }

    pub fn assign_guest(&mut self, floor_id: FloorId, table_id: TableId, entry: &GuestEntry) -> Vec<Action> {
        let result = self.layout.assign_guest(floor_id, table_id, entry);
        self.updated(result)
    }

    pub fn clear_reservation(&mut self, floor_id: FloorId, table_id: TableId) -> Vec<Action> {
        let result = self.layout.clear_reservation(floor_id, table_id);
        self.updated(result)
    }

    pub fn assign_server(&mut self, floor_id: FloorId, table_id: TableId, server_id: Option<Uuid>) -> Vec<Action> {
        let result = self.layout.assign_server(floor_id, table_id, server_id);
        self.updated(result)
    }

    /// Nudge the selected table on the selected floor (arrow keys / toolbar).
    pub fn nudge_selected(&mut self, direction: Direction) -> Vec<Action> {
        let Some((floor_id, table_id)) = self.selected_pair() else {
            return Vec::new();
        };
        self.nudge_table(floor_id, table_id, direction)
    }

    /// Rotate the selected table on the selected floor.
    pub fn rotate_selected(&mut self) -> Vec<Action> {
        let Some((floor_id, table_id)) = self.selected_pair() else {
            return Vec::new();
        };
        self.rotate_table(floor_id, table_id)
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, client: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.pointer_moved = false;
        if self.viewport.on_pointer_down(client, button, modifiers) {
            return vec![Action::SuppressDefault];
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let canvas = client_to_canvas(client, self.container, self.viewport.camera());
        let hit = self.layout.selected_floor().and_then(|floor| hit_test(canvas, floor));
        let Some(table_id) = hit else {
            self.layout.clear_selection();
            return vec![Action::RenderNeeded];
        };

        match self.placement.on_table_click(table_id) {
            ClickOutcome::Select(id) => {
                if let Err(e) = self.layout.select_table(id) {
                    return self.reject(e);
                }
                self.placement.begin_drag(id);
                vec![Action::RenderNeeded]
            }
            ClickOutcome::ShowDetails(id) => vec![Action::ShowTableDetails { table_id: id }],
        }
    }

    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        self.pointer_moved = true;
        if self.viewport.on_pointer_move(client) {
            return vec![Action::RenderNeeded];
        }
        Vec::new()
    }

    /// Ends a pan, or completes a drag by dropping the table under the pointer.
    pub fn on_pointer_up(&mut self, client: Point) -> Vec<Action> {
        let was_panning = self.viewport.is_panning();
        self.viewport.on_pointer_up();
        if was_panning {
            return Vec::new();
        }
        match self.placement.dragging() {
            Some(table_id) if self.pointer_moved => self.on_drop(table_id, client),
            Some(_) => {
                self.placement.cancel_drag();
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.viewport.on_pointer_leave();
        self.placement.cancel_drag();
        Vec::new()
    }

    /// A table was released over the canvas at `client`.
    pub fn on_drop(&mut self, table_id: TableId, client: Point) -> Vec<Action> {
        let camera = self.viewport.camera();
        let Some((table_id, position)) = self.placement.on_drop(table_id, client, self.container, camera) else {
            return Vec::new();
        };
        let Some(floor_id) = self.layout.selected_floor_id() else {
            return Vec::new();
        };
        self.move_table(floor_id, table_id, position)
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        let outcome = self.viewport.on_wheel(delta, modifiers);
        let mut actions = Vec::new();
        if outcome.suppress_default {
            actions.push(Action::SuppressDefault);
        }
        if outcome.changed {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Touch input ---

    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        self.viewport.on_touch_start(touches);
        Vec::new()
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        if self.viewport.on_touch_move(touches) {
            return vec![Action::SuppressDefault, Action::RenderNeeded];
        }
        Vec::new()
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.viewport.on_touch_end();
        Vec::new()
    }

    // --- Zoom buttons ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        render_if(self.viewport.zoom_in())
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        render_if(self.viewport.zoom_out())
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.viewport.reset();
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// Render model for the selected floor, in draw order.
    #[must_use]
    pub fn table_views(&self) -> Vec<TableView> {
        let Some(floor) = self.layout.selected_floor() else {
            return Vec::new();
        };
        let selected = self.layout.selected_table_id();
        floor
            .layout
            .iter()
            .map(|t| TableView {
                id: t.id,
                number: t.number,
                capacity: t.capacity,
                shape: t.shape,
                status: t.status,
                bounds: t.bounds(),
                selected: selected == Some(t.id),
                has_reservation: t.reservation_id.is_some(),
            })
            .collect()
    }

    // --- Internals ---

    fn selected_pair(&self) -> Option<(FloorId, TableId)> {
        Some((self.layout.selected_floor_id()?, self.layout.selected_table_id()?))
    }

    fn updated(&mut self, result: Result<Floor, LayoutError>) -> Vec<Action> {
        match result {
            Ok(floor) => vec![Action::FloorUpdated(floor), Action::RenderNeeded],
            Err(e) => self.reject(e),
        }
    }

    /// Validation errors warn the user; missing references silently drop the
    /// stale selection.
    fn reject(&mut self, error: LayoutError) -> Vec<Action> {
        match error.kind() {
            ErrorKind::Validation => {
                let notice = Notification::warning(error.error_code(), error.to_string());
                vec![Action::Notify(notice), Action::Rejected(error)]
            }
            ErrorKind::MissingReference => {
                self.layout.clear_selection();
                self.placement.cancel_drag();
                vec![Action::Rejected(error), Action::RenderNeeded]
            }
        }
    }
}

fn render_if(changed: bool) -> Vec<Action> {
    if changed { vec![Action::RenderNeeded] } else { Vec::new() }
}
