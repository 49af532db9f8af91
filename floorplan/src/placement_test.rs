#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

fn container() -> ContainerRect {
    ContainerRect::new(100.0, 50.0, 800.0, 600.0)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Edit mode gating
// =============================================================

#[test]
fn view_mode_refuses_drag() {
    let mut surface = PlacementSurface::new(false);
    assert!(!surface.begin_drag(Uuid::new_v4()));
    assert!(surface.dragging().is_none());
}

#[test]
fn edit_mode_allows_drag() {
    let mut surface = PlacementSurface::new(true);
    let id = Uuid::new_v4();
    assert!(surface.begin_drag(id));
    assert_eq!(surface.dragging(), Some(id));
}

#[test]
fn leaving_edit_mode_cancels_drag() {
    let mut surface = PlacementSurface::new(true);
    surface.begin_drag(Uuid::new_v4());
    surface.set_edit_mode(false);
    assert!(!surface.is_edit_mode());
    assert!(surface.dragging().is_none());
}

#[test]
fn view_mode_drop_is_ignored() {
    let mut surface = PlacementSurface::new(false);
    let result = surface.on_drop(Uuid::new_v4(), pt(300.0, 300.0), container(), Camera::default());
    assert!(result.is_none());
}

#[test]
fn cancel_drag_clears() {
    let mut surface = PlacementSurface::new(true);
    surface.begin_drag(Uuid::new_v4());
    surface.cancel_drag();
    assert!(surface.dragging().is_none());
}

// =============================================================
// Drop position
// =============================================================

#[test]
fn drop_uses_current_camera() {
    let mut surface = PlacementSurface::new(true);
    let id = Uuid::new_v4();
    surface.begin_drag(id);
    let camera = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 0.5 };
    // ((300 - 100 - 20) / 0.5, (200 - 50 - 10) / 0.5)
    let (dropped, pos) = surface.on_drop(id, pt(300.0, 200.0), container(), camera).unwrap();
    assert_eq!(dropped, id);
    assert_eq!(pos, pt(360.0, 280.0));
    assert!(surface.dragging().is_none());
}

#[test]
fn drop_clamps_to_nominal_box() {
    let far = PlacementSurface::drop_position(pt(5_000.0, 5_000.0), container(), Camera::default());
    assert_eq!(far, pt(650.0, 500.0));
    let before = PlacementSurface::drop_position(pt(0.0, 0.0), container(), Camera::default());
    assert_eq!(before, pt(0.0, 0.0));
}

#[test]
fn drop_never_leaves_layout_box() {
    let cameras = [
        Camera { pan_x: 0.0, pan_y: 0.0, zoom: 0.3 },
        Camera { pan_x: -400.0, pan_y: 250.0, zoom: 1.5 },
        Camera { pan_x: 900.0, pan_y: -900.0, zoom: 0.7 },
    ];
    for camera in cameras {
        for x in (-1_000..=2_000).step_by(250) {
            for y in (-1_000..=2_000).step_by(250) {
                let p = PlacementSurface::drop_position(pt(f64::from(x), f64::from(y)), container(), camera);
                assert!((0.0..=650.0).contains(&p.x));
                assert!((0.0..=500.0).contains(&p.y));
            }
        }
    }
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn click_selects_in_edit_mode() {
    let surface = PlacementSurface::new(true);
    let id = Uuid::new_v4();
    assert_eq!(surface.on_table_click(id), ClickOutcome::Select(id));
}

#[test]
fn click_shows_details_in_view_mode() {
    let surface = PlacementSurface::new(false);
    let id = Uuid::new_v4();
    assert_eq!(surface.on_table_click(id), ClickOutcome::ShowDetails(id));
}
