//! Entity model
//!
//! Entities are data, not behavior: position, size, an optional collider,
//! optional motion, and a visual variant. The variants are a capability set
//! built through factory constructors, not an inheritance chain; a
//! "kinematic entity" is just an entity whose motion is present.

use glam::Vec2;

use crate::backend::{Backend, DrawStyle, SpriteHandle, TextStyle};
use crate::sim::boundary::BouncePolicy;
use crate::sim::collision::RectCollider;
use crate::sim::geometry::{Bounds2D, Size2D};
use crate::sim::kinematics::Velocity2D;

/// Opaque scene-scoped entity identifier
///
/// Ids are allocated by the scene on insertion and never reused within a
/// scene's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Sentinel for an entity not yet registered with a scene
    pub(crate) const UNSET: Self = Self(0);
}

/// How an entity is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// Invisible: markers, trigger zones, colliders without a look.
    None,
    /// Filled rectangle covering the entity bounds.
    Rect(DrawStyle),
    /// Backend-owned image blitted at the entity position.
    Sprite(SpriteHandle),
    /// Text run at the entity position.
    Label { text: String, style: TextStyle },
}

/// Velocity plus boundary response for kinematic entities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub velocity: Velocity2D,
    pub policy: BouncePolicy,
    /// Narrower boundary than the scene, when declared.
    pub boundary: Option<Bounds2D>,
}

impl Motion {
    pub fn new(velocity: Velocity2D, policy: BouncePolicy) -> Self {
        Self {
            velocity,
            policy,
            boundary: None,
        }
    }

    /// Motion confined to a custom boundary instead of the scene bounds
    pub fn bounded(velocity: Velocity2D, policy: BouncePolicy, boundary: Bounds2D) -> Self {
        Self {
            velocity,
            policy,
            boundary: Some(boundary),
        }
    }
}

/// A game object owned by a scene
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    pub pos: Vec2,
    pub size: Size2D,
    visual: Visual,
    motion: Option<Motion>,
    has_collider: bool,
    alive: bool,
}

impl Entity {
    fn base(pos: Vec2, size: Size2D, visual: Visual) -> Self {
        Self {
            id: EntityId::UNSET,
            pos,
            size,
            visual,
            motion: None,
            has_collider: true,
            alive: true,
        }
    }

    /// Invisible entity with position and size only
    pub fn marker(pos: Vec2, size: Size2D) -> Self {
        Self::base(pos, size, Visual::None)
    }

    /// Filled rectangle
    pub fn rect(pos: Vec2, size: Size2D, style: DrawStyle) -> Self {
        Self::base(pos, size, Visual::Rect(style))
    }

    /// Sprite entity drawing a backend-registered image
    pub fn sprite(pos: Vec2, size: Size2D, handle: SpriteHandle) -> Self {
        Self::base(pos, size, Visual::Sprite(handle))
    }

    /// Text label. Labels carry no collider by default.
    pub fn label(pos: Vec2, text: impl Into<String>, style: TextStyle) -> Self {
        let mut ent = Self::base(
            pos,
            Size2D::ZERO,
            Visual::Label {
                text: text.into(),
                style,
            },
        );
        ent.has_collider = false;
        ent
    }

    /// Kinematic rectangle: the common arcade body
    pub fn kinematic(
        pos: Vec2,
        size: Size2D,
        style: DrawStyle,
        velocity: Velocity2D,
        policy: BouncePolicy,
    ) -> Self {
        Self::rect(pos, size, style).with_motion(Motion::new(velocity, policy))
    }

    /// Attach motion, turning the entity kinematic
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Confine this entity's motion to a boundary narrower than the scene
    pub fn with_boundary(mut self, boundary: Bounds2D) -> Self {
        debug_assert!(self.motion.is_some(), "boundary without motion has no effect");
        if let Some(motion) = self.motion.as_mut() {
            motion.boundary = Some(boundary);
        }
        self
    }

    /// Enable or disable the collider
    pub fn with_collider(mut self, enabled: bool) -> Self {
        self.has_collider = enabled;
        self
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flag the entity destroyed. One-way: a destroyed entity never comes
    /// back, and the scene prunes it at the start of the next update pass.
    pub(crate) fn destroy(&mut self) {
        self.alive = false;
    }

    /// Current bounds from live position and declared size
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::new(self.pos, self.size)
    }

    /// Collider view, if the entity has one. Destroyed owners are excluded
    /// from all collision checks, so this returns `None` for them.
    pub fn collider(&self) -> Option<RectCollider> {
        (self.has_collider && self.alive).then(|| RectCollider::new(self.pos, self.size))
    }

    #[inline]
    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    /// Mutable visual access, for relabeling or recoloring in place
    pub fn visual_mut(&mut self) -> &mut Visual {
        &mut self.visual
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    pub fn motion_mut(&mut self) -> Option<&mut Motion> {
        self.motion.as_mut()
    }

    /// Advance one frame: integrate velocity, then resolve against the
    /// entity's boundary (its own if declared, else `scene_bounds`).
    ///
    /// Updating a destroyed entity is a programming error; release builds
    /// skip it defensively.
    pub(crate) fn update(&mut self, dt: f32, scene_bounds: &Bounds2D) {
        debug_assert!(self.alive, "update on destroyed entity");
        if !self.alive {
            return;
        }
        let Some(motion) = self.motion.as_mut() else {
            return;
        };
        self.pos = motion.velocity.advance(self.pos, dt);
        let boundary = motion.boundary.unwrap_or(*scene_bounds);
        motion
            .policy
            .apply(&mut self.pos, self.size, &mut motion.velocity, &boundary);
    }

    /// Dispatch this entity's visual to the backend
    pub(crate) fn draw(&self, backend: &mut dyn Backend) {
        match &self.visual {
            Visual::None => {}
            Visual::Rect(style) => backend.draw_rect(self.bounds(), *style),
            Visual::Sprite(handle) => backend.draw_sprite(*handle, self.pos),
            Visual::Label { text, style } => backend.draw_text(self.pos, text, *style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Color;

    fn size(w: f32, h: f32) -> Size2D {
        Size2D::new(w, h).unwrap()
    }

    #[test]
    fn test_factories_set_capabilities() {
        let marker = Entity::marker(Vec2::ZERO, size(5.0, 5.0));
        assert_eq!(*marker.visual(), Visual::None);
        assert!(marker.motion().is_none());
        assert!(marker.collider().is_some());

        let label = Entity::label(Vec2::ZERO, "hi", TextStyle::default());
        assert!(label.collider().is_none());

        let body = Entity::kinematic(
            Vec2::ZERO,
            size(5.0, 5.0),
            DrawStyle::solid(Color::WHITE),
            Velocity2D::new(1.0, 0.0),
            BouncePolicy::Bounce,
        );
        assert!(body.motion().is_some());
        assert!(body.collider().is_some());
    }

    #[test]
    fn test_update_integrates_then_resolves() {
        let bounds = Bounds2D::from_size(size(100.0, 100.0));
        let mut ent = Entity::kinematic(
            Vec2::new(0.0, 95.0),
            size(10.0, 10.0),
            DrawStyle::solid(Color::WHITE),
            Velocity2D::new(0.0, 20.0),
            BouncePolicy::BounceVertical,
        );

        ent.update(1.0, &bounds);

        // 95 + 20 = 115 penetrates the bottom; clamped back to 90, dy flipped.
        assert_eq!(ent.pos, Vec2::new(0.0, 90.0));
        assert_eq!(ent.motion().unwrap().velocity, Velocity2D::new(0.0, -20.0));
    }

    #[test]
    fn test_update_without_motion_is_inert() {
        let bounds = Bounds2D::from_size(size(100.0, 100.0));
        let mut ent = Entity::marker(Vec2::new(3.0, 4.0), size(1.0, 1.0));
        ent.update(1.0, &bounds);
        assert_eq!(ent.pos, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_custom_boundary_overrides_scene_bounds() {
        let scene_bounds = Bounds2D::from_size(size(100.0, 100.0));
        let narrow = Bounds2D::from_size(size(100.0, 50.0));
        let mut ent = Entity::kinematic(
            Vec2::new(0.0, 45.0),
            size(10.0, 10.0),
            DrawStyle::solid(Color::WHITE),
            Velocity2D::new(0.0, 10.0),
            BouncePolicy::BounceVertical,
        )
        .with_boundary(narrow);

        ent.update(1.0, &scene_bounds);

        // Bounced off the custom boundary's bottom at y=50, not the scene's.
        assert_eq!(ent.pos.y, 40.0);
    }

    #[test]
    fn test_destroyed_entity_has_no_collider() {
        let mut ent = Entity::marker(Vec2::ZERO, size(5.0, 5.0));
        assert!(ent.collider().is_some());
        ent.destroy();
        assert!(!ent.is_alive());
        assert!(ent.collider().is_none());
    }
}
