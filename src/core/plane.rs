//! Ground plane contact geometry
//!
//! A single infinite plane, fixed after initialization. Penetration is
//! detected through the signed distance of a particle to the plane.

use bevy::prelude::*;

use crate::error::InitError;
use crate::math::{Point, Real, Vector};

/// World position and up direction of the host's ground frame.
#[derive(Clone, Copy, Debug)]
pub struct GroundReference {
    pub position: Point,
    pub up: Vector,
}

/// Static ground plane: a point on the plane and a unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub position: Point,
    pub normal: Vector,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            position: Vector::ZERO,
            normal: Vector::Y,
        }
    }
}

impl Plane {
    /// Build the plane from the host's ground reference.
    ///
    /// A missing reference is non-fatal: the plane falls back to the origin
    /// with an upward normal, and the condition is reported via `warn!`.
    pub fn from_ground_reference(reference: Option<&GroundReference>) -> Result<Self, InitError> {
        match reference {
            Some(reference) => {
                let normal = reference
                    .up
                    .try_normalize()
                    .ok_or(InitError::DegenerateGroundNormal)?;
                Ok(Self {
                    position: reference.position,
                    normal,
                })
            }
            None => {
                warn!("no ground reference supplied, defaulting to plane at origin with +Y normal");
                Ok(Self::default())
            }
        }
    }

    /// Signed distance from `point` to the plane; negative means the point
    /// has penetrated below the plane.
    #[inline(always)]
    pub fn signed_distance(&self, point: Point) -> Real {
        (point - self.position).dot(self.normal)
    }
}
