//! Deterministic scene simulation
//!
//! All gameplay state lives here. This module stays pure:
//! - Value-type geometry and kinematics
//! - Stable iteration order (entity insertion order)
//! - Rendering only through the abstract [`crate::backend::Backend`] trait
//! - No platform or clock dependencies (the loop passes `dt` in)

pub mod boundary;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod kinematics;
pub mod scene;

pub use boundary::{BouncePolicy, bounce_horizontal, bounce_vertical, wrap_vertical};
pub use collision::RectCollider;
pub use entity::{Entity, EntityId, Motion, Visual};
pub use geometry::{Bounds2D, GeometryError, Size2D};
pub use kinematics::Velocity2D;
pub use scene::Scene;
