use uuid::Uuid;

use super::*;
use crate::geometry::TableShape;
use crate::layout::{Table, TableStatus};

fn table_at(floor: &Floor, x: f64, y: f64, shape: TableShape) -> Table {
    Table {
        id: Uuid::new_v4(),
        number: floor.next_table_number(),
        floor_id: floor.id,
        capacity: 4,
        shape,
        status: TableStatus::Available,
        position: Point::new(x, y),
        rotation: 0.0,
        scale: 1.0,
        reservation_id: None,
        server_id: None,
    }
}

#[test]
fn miss_on_empty_floor() {
    let floor = Floor::new("x");
    assert!(hit_test(Point::new(10.0, 10.0), &floor).is_none());
}

#[test]
fn hit_inside_square() {
    let floor = Floor::new("x");
    let t = table_at(&floor, 100.0, 100.0, TableShape::Square);
    let id = t.id;
    let floor = floor.with_layout(vec![t]);
    // 90x90 box
    assert_eq!(hit_test(Point::new(150.0, 150.0), &floor), Some(id));
    assert_eq!(hit_test(Point::new(190.0, 190.0), &floor), Some(id));
    assert!(hit_test(Point::new(191.0, 150.0), &floor).is_none());
}

#[test]
fn hit_uses_shape_size() {
    let floor = Floor::new("x");
    let t = table_at(&floor, 0.0, 0.0, TableShape::Communal);
    let id = t.id;
    let floor = floor.with_layout(vec![t]);
    // 90 * 2.5 = 225 wide
    assert_eq!(hit_test(Point::new(220.0, 50.0), &floor), Some(id));
}

#[test]
fn hit_uses_table_scale() {
    let floor = Floor::new("x");
    let mut t = table_at(&floor, 0.0, 0.0, TableShape::Square);
    t.scale = 0.5;
    let floor = floor.with_layout(vec![t]);
    assert!(hit_test(Point::new(60.0, 20.0), &floor).is_none());
}

#[test]
fn topmost_table_wins_overlap() {
    let floor = Floor::new("x");
    let below = table_at(&floor, 0.0, 0.0, TableShape::Square);
    let above = table_at(&floor, 40.0, 40.0, TableShape::Square);
    let above_id = above.id;
    let floor = floor.with_layout(vec![below, above]);
    assert_eq!(hit_test(Point::new(60.0, 60.0), &floor), Some(above_id));
}
