#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(20.0, 10.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn world_to_screen_inverts_screen_to_world() {
    let cam = Camera { pan_x: -35.0, pan_y: 12.5, zoom: 0.7 };
    let screen = Point::new(123.0, -45.0);
    let back = cam.world_to_screen(cam.screen_to_world(screen));
    assert!(point_approx_eq(back, screen));
}

// --- client_to_canvas ---

#[test]
fn client_to_canvas_subtracts_container_origin() {
    let rect = ContainerRect::new(100.0, 50.0, 800.0, 600.0);
    let p = client_to_canvas(Point::new(150.0, 80.0), rect, Camera::default());
    assert!(point_approx_eq(p, Point::new(50.0, 30.0)));
}

#[test]
fn client_to_canvas_applies_pan_then_zoom() {
    let rect = ContainerRect::new(10.0, 20.0, 800.0, 600.0);
    let cam = Camera { pan_x: 40.0, pan_y: -20.0, zoom: 0.5 };
    // ((250 - 10 - 40) / 0.5, (180 - 20 + 20) / 0.5)
    let p = client_to_canvas(Point::new(250.0, 180.0), rect, cam);
    assert!(point_approx_eq(p, Point::new(400.0, 360.0)));
}

#[test]
fn canvas_to_client_round_trips() {
    let rect = ContainerRect::new(64.0, 128.0, 800.0, 600.0);
    let cam = Camera { pan_x: 15.0, pan_y: 7.0, zoom: 1.3 };
    let canvas = Point::new(350.0, 250.0);
    let client = canvas_to_client(canvas, rect, cam);
    assert!(point_approx_eq(client_to_canvas(client, rect, cam), canvas));
}

// --- distance ---

#[test]
fn distance_is_euclidean() {
    assert!(approx_eq(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-2.0, 7.0);
    let b = Point::new(5.0, 1.0);
    assert!(approx_eq(distance(a, b), distance(b, a)));
}
