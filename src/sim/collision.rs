//! AABB collision checks
//!
//! Detection is discrete: every check looks at current-frame bounds only,
//! with no interpolation between frames. A body moving further than its own
//! size in one frame can tunnel through a thin obstacle; that trade-off is
//! accepted here, substep externally if it matters.

use glam::Vec2;

use crate::sim::geometry::{Bounds2D, Size2D};

/// Rectangle collider derived from an owner's live position and size
///
/// The collider owns no state of its own: it is rebuilt from the owner's
/// position and declared size at every check, so its bounds always reflect
/// the current placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectCollider {
    bounds: Bounds2D,
}

impl RectCollider {
    pub fn new(position: Vec2, size: Size2D) -> Self {
        Self {
            bounds: Bounds2D::new(position, size),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Overlap against another collider. Edge contact is not a hit.
    pub fn intersects(&self, other: &RectCollider) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    /// Overlap against a boundary rectangle
    pub fn overlaps_bounds(&self, boundary: &Bounds2D) -> bool {
        self.bounds.overlaps(boundary)
    }

    /// True when the collider lies entirely inside `boundary`
    pub fn contained_in(&self, boundary: &Bounds2D) -> bool {
        boundary.contains(&self.bounds)
    }
}
