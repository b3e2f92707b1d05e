//! Scene: entity collection, update pass, draw pass
//!
//! The scene is a state machine over its entity list. Entities are appended
//! and never reordered, so insertion order is both the update and the draw
//! order. Removal is deferred (mark-then-compact): `remove_entity` flags,
//! and the flagged entities are pruned at the start of the next update
//! pass, never during an in-progress iteration.

use crate::backend::Backend;
use crate::sim::entity::{Entity, EntityId};
use crate::sim::geometry::{Bounds2D, Size2D};

/// A fixed-size playfield owning an ordered entity collection and an
/// overlay stack drawn above it
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Size2D,
    bounds: Bounds2D,
    entities: Vec<Entity>,
    overlays: Vec<Entity>,
    next_id: u32,
}

impl Scene {
    pub fn new(size: Size2D) -> Self {
        Self {
            size,
            bounds: Bounds2D::from_size(size),
            entities: Vec::new(),
            overlays: Vec::new(),
            next_id: 1,
        }
    }

    #[inline]
    pub fn size(&self) -> Size2D {
        self.size
    }

    /// The default collision boundary for contained kinematic entities
    #[inline]
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register an entity, appending it to the update/draw order
    pub fn add_entity(&mut self, mut entity: Entity) -> EntityId {
        let id = self.next_entity_id();
        entity.assign_id(id);
        self.entities.push(entity);
        id
    }

    /// Flag an entity destroyed. It is skipped by update/draw immediately
    /// and pruned from the collection at the start of the next update pass.
    pub fn remove_entity(&mut self, id: EntityId) {
        if let Some(ent) = self.entities.iter_mut().find(|e| e.id() == id) {
            ent.destroy();
        }
    }

    /// Flag every entity destroyed (overlays are untouched)
    pub fn clear_entities(&mut self) {
        for ent in &mut self.entities {
            ent.destroy();
        }
    }

    /// Look up a live entity by id
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id && e.is_alive())
    }

    /// Mutable lookup, for steering an entity between frames
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.id() == id && e.is_alive())
    }

    /// Live entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_alive())
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities().count()
    }

    /// Push an entity on top of the overlay stack
    pub fn push_overlay(&mut self, mut entity: Entity) -> EntityId {
        let id = self.next_entity_id();
        entity.assign_id(id);
        self.overlays.push(entity);
        id
    }

    /// Remove and return the top overlay. No-op on an empty stack.
    pub fn pop_overlay(&mut self) -> Option<Entity> {
        self.overlays.pop()
    }

    pub fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    /// Overlays bottom-to-top (draw order)
    pub fn overlays(&self) -> impl Iterator<Item = &Entity> {
        self.overlays.iter()
    }

    /// Advance every live entity by `dt` seconds in insertion order:
    /// integrate kinematics, then resolve against the entity's boundary
    /// (its own if declared, else the scene bounds).
    pub fn update(&mut self, dt: f32) {
        // Deferred removal lands here, before the pass starts.
        self.entities.retain(|e| e.is_alive());

        let bounds = self.bounds;
        for ent in &mut self.entities {
            ent.update(dt, &bounds);
        }
    }

    /// Draw live entities in insertion order, then the overlay stack with
    /// the most recently pushed overlay on top
    pub fn draw(&self, backend: &mut dyn Backend) {
        for ent in self.entities.iter().filter(|e| e.is_alive()) {
            ent.draw(backend);
        }
        for overlay in self.overlays.iter().filter(|e| e.is_alive()) {
            overlay.draw(backend);
        }
    }
}
