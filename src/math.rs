use bevy::math::Vec3;
use bevy::prelude::Transform;

pub type Real = f32;
pub const DIM: usize = 3;

pub type Vector = Vec3;
pub type Point = Vec3;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec3::ZERO
}

#[inline(always)]
pub fn repeat_vector(value: Real) -> Vector {
    Vec3::splat(value)
}

/// Exact zero check inverse (prevents NaN from division by zero)
#[inline(always)]
pub fn inv_exact(e: Real) -> Real {
    if e == 0.0 { 0.0 } else { 1.0 / e }
}

/// Unit direction and length of `d`, or `None` when the length is too
/// degenerate to normalize (zero, subnormal, or non-finite).
#[inline(always)]
pub fn unit_and_length(d: Vector) -> Option<(Vector, Real)> {
    let length = d.length();
    if length.is_normal() {
        Some((d / length, length))
    } else {
        None
    }
}

/// Convert a point from the mesh's local frame into world space.
#[inline(always)]
pub fn local_to_world(transform: &Transform, point: Point) -> Point {
    transform.transform_point(point)
}

/// Convert a world-space point back into the mesh's local frame.
#[inline(always)]
pub fn world_to_local(transform: &Transform, point: Point) -> Point {
    transform.compute_affine().inverse().transform_point3(point)
}
