#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn size_approx_eq(s: Size, width: f64, height: f64) -> bool {
    approx_eq(s.width, width) && approx_eq(s.height, height)
}

// =============================================================
// Base sizes
// =============================================================

#[test]
fn base_size_per_capacity() {
    assert_eq!(base_size(2), Size::new(70.0, 70.0));
    assert_eq!(base_size(4), Size::new(90.0, 90.0));
    assert_eq!(base_size(6), Size::new(130.0, 90.0));
    assert_eq!(base_size(8), Size::new(150.0, 100.0));
}

#[test]
fn base_size_unknown_capacity_uses_four_seat_box() {
    assert_eq!(base_size(0), base_size(4));
    assert_eq!(base_size(5), base_size(4));
    assert_eq!(base_size(12), base_size(4));
}

// =============================================================
// Shape catalogue
// =============================================================

#[test]
fn all_lists_seventeen_distinct_shapes() {
    let unique: HashSet<TableShape> = TableShape::ALL.iter().copied().collect();
    assert_eq!(TableShape::ALL.len(), 17);
    assert_eq!(unique.len(), 17);
}

#[test]
fn documented_multipliers() {
    assert_eq!(TableShape::Rectangular.multiplier(), (1.5, 0.8));
    assert_eq!(TableShape::Bar.multiplier(), (1.8, 0.6));
    assert_eq!(TableShape::Communal.multiplier(), (2.5, 1.2));
    assert_eq!(TableShape::UShape.multiplier(), (1.6, 1.4));
    assert_eq!(TableShape::Square.multiplier(), (1.0, 1.0));
}

#[test]
fn shape_names_round_trip_through_from_str() {
    for shape in TableShape::ALL {
        assert_eq!(shape.as_str().parse::<TableShape>(), Ok(shape));
        assert_eq!(shape.to_string(), shape.as_str());
    }
}

#[test]
fn shape_serde_uses_kebab_case() {
    let json = serde_json::to_string(&TableShape::CornerBooth).unwrap();
    assert_eq!(json, "\"corner-booth\"");
    let parsed: TableShape = serde_json::from_str("\"u-shape\"").unwrap();
    assert_eq!(parsed, TableShape::UShape);
}

#[test]
fn unknown_shape_name_is_rejected() {
    let err = "trapezoid".parse::<TableShape>().unwrap_err();
    assert_eq!(err, ShapeParseError("trapezoid".into()));
}

// =============================================================
// size_of
// =============================================================

#[test]
fn size_of_square_four_top_is_base_box() {
    assert!(size_approx_eq(size_of(4, TableShape::Square, 1.0), 90.0, 90.0));
}

#[test]
fn size_of_applies_shape_then_scale() {
    // 150x100 * (2.5, 1.2) * 0.5
    assert!(size_approx_eq(size_of(8, TableShape::Communal, 0.5), 187.5, 60.0));
    // 90x90 * (1.5, 0.8) * 2.0
    assert!(size_approx_eq(size_of(4, TableShape::Rectangular, 2.0), 270.0, 144.0));
}

#[test]
fn size_of_clamps_scale() {
    assert_eq!(size_of(2, TableShape::Round, 0.1), size_of(2, TableShape::Round, 0.5));
    assert_eq!(size_of(2, TableShape::Round, 9.0), size_of(2, TableShape::Round, 2.0));
}

#[test]
fn size_of_is_deterministic() {
    for capacity in [1, 2, 4, 6, 8, 10] {
        for shape in TableShape::ALL {
            for scale in [0.5, 0.75, 1.0, 1.25, 2.0] {
                assert_eq!(size_of(capacity, shape, scale), size_of(capacity, shape, scale));
            }
        }
    }
}

#[test]
fn size_strictly_increases_with_scale() {
    for shape in TableShape::ALL {
        let mut prev = size_of(4, shape, 0.5);
        for step in 1..=15 {
            let scale = 0.5 + f64::from(step) * 0.1;
            let next = size_of(4, shape, scale);
            assert!(next.width > prev.width, "{shape} width at {scale}");
            assert!(next.height > prev.height, "{shape} height at {scale}");
            prev = next;
        }
    }
}

// =============================================================
// clamp_table_scale
// =============================================================

#[test]
fn clamp_table_scale_bounds() {
    assert_eq!(clamp_table_scale(0.3), 0.5);
    assert_eq!(clamp_table_scale(5.0), 2.0);
    assert_eq!(clamp_table_scale(1.25), 1.25);
}

#[test]
fn clamp_table_scale_non_finite_resets() {
    assert_eq!(clamp_table_scale(f64::NAN), 1.0);
    assert_eq!(clamp_table_scale(f64::INFINITY), 1.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_contains_unrotated() {
    let b = Bounds { x: 10.0, y: 20.0, width: 100.0, height: 50.0, rotation: 0.0 };
    assert!(b.contains(Point::new(10.0, 20.0)));
    assert!(b.contains(Point::new(60.0, 45.0)));
    assert!(!b.contains(Point::new(111.0, 45.0)));
    assert!(!b.contains(Point::new(60.0, 71.0)));
}

#[test]
fn bounds_contains_respects_rotation() {
    // 100x20 bar centered at (50, 10); rotated 90 degrees it stands upright.
    let b = Bounds { x: 0.0, y: 0.0, width: 100.0, height: 20.0, rotation: 90.0 };
    assert!(b.contains(Point::new(50.0, 50.0)));
    assert!(!b.contains(Point::new(90.0, 10.0)));
}
