//! Boundary resolution policies
//!
//! A policy converts a detected boundary penetration into a corrected
//! position and velocity. Application is single-pass: a body crossing the
//! same edge twice within one frame is corrected once, and the next frame's
//! pass picks up any residue. Exact edge contact counts as a crossing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::geometry::{Bounds2D, Size2D};
use crate::sim::kinematics::Velocity2D;

/// Boundary response for a kinematic body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BouncePolicy {
    /// No response; the body may leave the boundary freely.
    #[default]
    None,
    /// Reflect off the top/bottom edges. Horizontal axis untouched.
    BounceVertical,
    /// Reflect off the left/right edges. Vertical axis untouched.
    BounceHorizontal,
    /// Reflect off all four edges.
    Bounce,
    /// Leaving completely above the top edge re-enters at the bottom and
    /// vice versa. Velocity untouched.
    WrapVertical,
}

impl BouncePolicy {
    /// Apply the policy to a body described by position, size, and velocity
    pub fn apply(
        &self,
        position: &mut Vec2,
        size: Size2D,
        velocity: &mut Velocity2D,
        boundary: &Bounds2D,
    ) {
        match self {
            BouncePolicy::None => {}
            BouncePolicy::BounceVertical => bounce_vertical(position, size, velocity, boundary),
            BouncePolicy::BounceHorizontal => bounce_horizontal(position, size, velocity, boundary),
            BouncePolicy::Bounce => {
                bounce_vertical(position, size, velocity, boundary);
                bounce_horizontal(position, size, velocity, boundary);
            }
            BouncePolicy::WrapVertical => wrap_vertical(position, size, boundary),
        }
    }
}

/// Reflect off the top/bottom edges of `boundary`, clamping the body inside
///
/// After the call the body is fully contained on the vertical axis and the
/// vertical velocity sign has flipped once per crossed edge.
pub fn bounce_vertical(
    position: &mut Vec2,
    size: Size2D,
    velocity: &mut Velocity2D,
    boundary: &Bounds2D,
) {
    // Top contact
    if position.y <= boundary.top() {
        position.y = boundary.top();
        velocity.reverse_y();
    }

    // Bottom contact
    if position.y + size.height() >= boundary.bottom() {
        position.y = boundary.bottom() - size.height();
        velocity.reverse_y();
    }
}

/// Reflect off the left/right edges of `boundary`, clamping the body inside
pub fn bounce_horizontal(
    position: &mut Vec2,
    size: Size2D,
    velocity: &mut Velocity2D,
    boundary: &Bounds2D,
) {
    // Left contact
    if position.x <= boundary.left() {
        position.x = boundary.left();
        velocity.reverse_x();
    }

    // Right contact
    if position.x + size.width() >= boundary.right() {
        position.x = boundary.right() - size.width();
        velocity.reverse_x();
    }
}

/// Wrap a body top <-> bottom
///
/// Only triggers once the body has left the boundary completely, so it
/// scrolls out of view before reappearing on the other side.
pub fn wrap_vertical(position: &mut Vec2, size: Size2D, boundary: &Bounds2D) {
    // Completely above the top edge: reappear below the bottom.
    if position.y + size.height() < boundary.top() {
        position.y = boundary.bottom();
    }
    // Completely below the bottom edge: reappear above the top.
    else if position.y > boundary.bottom() {
        position.y = boundary.top() - size.height();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary_100() -> Bounds2D {
        Bounds2D::from_size(Size2D::new(100.0, 100.0).unwrap())
    }

    fn size_10() -> Size2D {
        Size2D::new(10.0, 10.0).unwrap()
    }

    #[test]
    fn test_bounce_at_bottom_clamps_and_flips_once() {
        let boundary = boundary_100();
        // Penetrating the bottom by 15: bottom edge at 115 vs boundary 100.
        let mut pos = Vec2::new(0.0, 105.0);
        let mut vel = Velocity2D::new(0.0, 20.0);

        bounce_vertical(&mut pos, size_10(), &mut vel, &boundary);

        assert_eq!(pos.y + size_10().height(), boundary.bottom());
        assert_eq!(pos.y, 90.0);
        assert_eq!(vel.dy, -20.0);
    }

    #[test]
    fn test_bounce_at_top_clamps_and_flips() {
        let boundary = boundary_100();
        let mut pos = Vec2::new(10.0, -5.0);
        let mut vel = Velocity2D::new(0.0, -50.0);

        bounce_vertical(&mut pos, size_10(), &mut vel, &boundary);

        assert_eq!(pos.y, 0.0);
        assert_eq!(vel.dy, 50.0);
    }

    #[test]
    fn test_bounce_inside_is_untouched() {
        let boundary = boundary_100();
        let mut pos = Vec2::new(10.0, 20.0);
        let mut vel = Velocity2D::new(0.0, 5.0);

        bounce_vertical(&mut pos, size_10(), &mut vel, &boundary);

        assert_eq!(pos.y, 20.0);
        assert_eq!(vel.dy, 5.0);
    }

    #[test]
    fn test_bounce_triggers_on_exact_edge_contact() {
        let boundary = boundary_100();

        let mut pos = Vec2::new(10.0, 0.0);
        let mut vel = Velocity2D::new(0.0, -10.0);
        bounce_vertical(&mut pos, size_10(), &mut vel, &boundary);
        assert_eq!(pos.y, 0.0);
        assert_eq!(vel.dy, 10.0);

        // Bottom edge exactly at the boundary bottom (90 + 10 == 100).
        let mut pos = Vec2::new(10.0, 90.0);
        let mut vel = Velocity2D::new(0.0, 10.0);
        bounce_vertical(&mut pos, size_10(), &mut vel, &boundary);
        assert_eq!(pos.y, 90.0);
        assert_eq!(vel.dy, -10.0);
    }

    #[test]
    fn test_bounce_horizontal_leaves_vertical_alone() {
        let boundary = boundary_100();
        let mut pos = Vec2::new(95.0, 40.0);
        let mut vel = Velocity2D::new(30.0, 7.0);

        bounce_horizontal(&mut pos, size_10(), &mut vel, &boundary);

        assert_eq!(pos.x, 90.0);
        assert_eq!(vel.dx, -30.0);
        assert_eq!(pos.y, 40.0);
        assert_eq!(vel.dy, 7.0);
    }

    #[test]
    fn test_two_axis_bounce_resolves_a_corner() {
        let boundary = boundary_100();
        let mut pos = Vec2::new(-4.0, 104.0);
        let mut vel = Velocity2D::new(-25.0, 40.0);

        BouncePolicy::Bounce.apply(&mut pos, size_10(), &mut vel, &boundary);

        assert_eq!(pos, Vec2::new(0.0, 90.0));
        assert_eq!(vel, Velocity2D::new(25.0, -40.0));
    }

    #[test]
    fn test_wrap_top_to_bottom() {
        let boundary = boundary_100();
        // Fully above the top (bottom edge at -2 < 0).
        let mut pos = Vec2::new(10.0, -12.0);
        wrap_vertical(&mut pos, size_10(), &boundary);
        assert_eq!(pos.y, boundary.bottom());
    }

    #[test]
    fn test_wrap_bottom_to_top() {
        let boundary = boundary_100();
        let mut pos = Vec2::new(10.0, 101.0);
        wrap_vertical(&mut pos, size_10(), &boundary);
        assert_eq!(pos.y, boundary.top() - size_10().height());
    }

    #[test]
    fn test_wrap_partially_visible_stays_put() {
        let boundary = boundary_100();
        // Straddling the top edge: still visible, no wrap yet.
        let mut pos = Vec2::new(10.0, -5.0);
        wrap_vertical(&mut pos, size_10(), &boundary);
        assert_eq!(pos.y, -5.0);
    }

    #[test]
    fn test_policy_none_is_inert() {
        let boundary = boundary_100();
        let mut pos = Vec2::new(500.0, 500.0);
        let mut vel = Velocity2D::new(1.0, 1.0);
        BouncePolicy::None.apply(&mut pos, size_10(), &mut vel, &boundary);
        assert_eq!(pos, Vec2::new(500.0, 500.0));
        assert_eq!(vel, Velocity2D::new(1.0, 1.0));
    }
}
