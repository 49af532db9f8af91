//! Table placement surface: the drop target for dragged tables.
//!
//! Dragging only works in edit mode. A drop at a client position is mapped
//! into canvas space with the owning viewport's *current* camera, then clamped
//! to the layout box (canvas extent minus the nominal 150x100 footprint, not
//! the dragged table's real size). The resulting position is handed to
//! [`LayoutStore::move_table`](crate::layout::LayoutStore::move_table) by the
//! caller.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::camera::{Camera, ContainerRect, Point, client_to_canvas};
use crate::layout::{TableId, clamp_position};

/// What a click on a table means in the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Edit mode: select the table for editing.
    Select(TableId),
    /// View mode: open the read-only detail view.
    ShowDetails(TableId),
}

/// Drop target state.
#[derive(Debug, Clone, Default)]
pub struct PlacementSurface {
    edit_mode: bool,
    dragging: Option<TableId>,
}

impl PlacementSurface {
    #[must_use]
    pub fn new(edit_mode: bool) -> Self {
        Self { edit_mode, dragging: None }
    }

    #[must_use]
    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Leaving edit mode abandons any drag in progress.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
        if !edit_mode {
            self.dragging = None;
        }
    }

    /// Table currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<TableId> {
        self.dragging
    }

    /// Start dragging a table. Refused in view mode.
    pub fn begin_drag(&mut self, table_id: TableId) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.dragging = Some(table_id);
        true
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Canvas position for a drop at `client`, clamped to the layout box.
    #[must_use]
    pub fn drop_position(client: Point, container: ContainerRect, camera: Camera) -> Point {
        clamp_position(client_to_canvas(client, container, camera))
    }

    /// Accept a drop of `table_id`. Returns the table and the clamped canvas
    /// position to move it to, or `None` in view mode. Ends the drag either way.
    pub fn on_drop(
        &mut self,
        table_id: TableId,
        client: Point,
        container: ContainerRect,
        camera: Camera,
    ) -> Option<(TableId, Point)> {
        self.dragging = None;
        if !self.edit_mode {
            return None;
        }
        Some((table_id, Self::drop_position(client, container, camera)))
    }

    /// Interpret a click on a table.
    #[must_use]
    pub fn on_table_click(&self, table_id: TableId) -> ClickOutcome {
        if self.edit_mode { ClickOutcome::Select(table_id) } else { ClickOutcome::ShowDetails(table_id) }
    }
}
