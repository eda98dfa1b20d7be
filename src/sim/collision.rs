//! Collision predicates for the playfield geometry
//!
//! Everything here is a pure total function over circles and axis-aligned
//! rectangles. The simulation tick decides what a hit means; these only
//! answer whether shapes overlap.

use glam::Vec2;

/// Check whether a circle intersects an axis-aligned rectangle.
///
/// Uses the clamped-nearest-point distance: the closest point of the
/// rectangle to the circle center is found by clamping the center into the
/// rectangle, then the distance to that point is compared against the
/// radius. Edge contact counts as a hit. Handles the center being fully
/// inside the rectangle (distance zero).
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    let nearest = center.clamp(rect_pos, rect_pos + rect_size);
    center.distance_squared(nearest) <= radius * radius
}

/// Check whether two circles intersect.
///
/// Strict inequality: circles that are exactly tangent do not collide.
pub fn circle_intersects_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}
