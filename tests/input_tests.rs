// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn normalized_in_rect_center_and_edges() {
    let origin = Vec2::new(100.0, 20.0);
    let size = Vec2::new(200.0, 4.0);

    let mid = normalized_in_rect(Vec2::new(200.0, 22.0), origin, size).unwrap();
    assert!((mid.x - 0.5).abs() < 1e-6);
    assert!((mid.y - 0.5).abs() < 1e-6);

    let left = normalized_in_rect(Vec2::new(100.0, 20.0), origin, size).unwrap();
    assert_eq!(left, Vec2::ZERO);

    let right = normalized_in_rect(Vec2::new(300.0, 24.0), origin, size).unwrap();
    assert!((right.x - 1.0).abs() < 1e-6);
}

#[test]
fn normalized_in_rect_is_not_clamped() {
    let origin = Vec2::new(0.0, 0.0);
    let size = Vec2::new(100.0, 10.0);
    let past = normalized_in_rect(Vec2::new(150.0, 5.0), origin, size).unwrap();
    assert!(past.x > 1.0);
    let before = normalized_in_rect(Vec2::new(-25.0, 5.0), origin, size).unwrap();
    assert!(before.x < 0.0);
}

#[test]
fn normalized_in_rect_rejects_degenerate_rects() {
    let p = Vec2::new(10.0, 10.0);
    assert!(normalized_in_rect(p, Vec2::ZERO, Vec2::new(0.0, 10.0)).is_none());
    assert!(normalized_in_rect(p, Vec2::ZERO, Vec2::new(10.0, 0.0)).is_none());
    assert!(normalized_in_rect(p, Vec2::ZERO, Vec2::new(-5.0, 10.0)).is_none());
}

#[test]
fn normalized_in_rect_rejects_non_finite_points() {
    let r = normalized_in_rect(Vec2::new(f32::NAN, 0.0), Vec2::ZERO, Vec2::new(10.0, 10.0));
    assert!(r.is_none());
}
