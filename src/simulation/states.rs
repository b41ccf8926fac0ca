//! Core state types for the accretion disk simulation.
//!
//! Defines the body model and the registry that owns it:
//! - `Body` with stable `BodyId` and `BodyKind` (star or planet)
//! - `Registry`, the sole owner of all active bodies
//!
//! The registry holds the current simulation time `t` and a queue of
//! `RegistryEvent`s for external observers (spawn/despawn of visuals).

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Stable identifier for a body, unique for the body's lifetime.
/// Ids are allocated from a monotonic counter and never reused after
/// removal, so a stale id can always be distinguished from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// Tag separating the central star from the orbiting planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, always > 0
    pub radius: f64, // contact radius for collision detection
}

impl Body {
    /// Linear momentum `m * v`.
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }
}

/// Change notification for external observers (e.g. a visual layer that
/// spawns/despawns meshes). Never consumed by the physics itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent {
    Added(BodyId),
    Removed(BodyId),
}

/// Authoritative set of active bodies: exactly one star, zero or more
/// planets. The registry is the only component allowed to create or
/// destroy bodies; everything else refers to them by `BodyId` and must
/// not hold a reference across a step boundary, since merges can remove
/// bodies mid-step.
#[derive(Debug, Clone)]
pub struct Registry {
    bodies: Vec<Body>,
    star: BodyId,
    next_id: u64,
    events: Vec<RegistryEvent>,
    pub t: f64, // time
}

impl Registry {
    /// Create a registry containing only the central star.
    pub fn with_star(m: f64, radius: f64, x: NVec3, v: NVec3) -> Self {
        let star = BodyId(0);
        Self {
            bodies: vec![Body {
                id: star,
                kind: BodyKind::Star,
                x,
                v,
                m,
                radius,
            }],
            star,
            next_id: 1,
            events: vec![RegistryEvent::Added(star)],
            t: 0.0,
        }
    }

    /// Add a planet with a freshly allocated id and return that id.
    pub fn add_planet(&mut self, m: f64, radius: f64, x: NVec3, v: NVec3) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            kind: BodyKind::Planet,
            x,
            v,
            m,
            radius,
        });
        self.events.push(RegistryEvent::Added(id));
        id
    }

    /// Remove a body by id, returning it if it was present.
    /// The star is never removed by merge resolution; callers uphold that.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        self.events.push(RegistryEvent::Removed(id));
        Some(self.bodies.swap_remove(idx))
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn star_id(&self) -> BodyId {
        self.star
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.iter().any(|b| b.id == id)
    }

    /// Classify a contacted body for the external collision bridge.
    pub fn is_planet(&self, id: BodyId) -> bool {
        self.body(id).is_some_and(|b| b.kind == BodyKind::Planet)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Total system mass. Invariant across any sequence of merges.
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Total linear momentum of the system.
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.momentum())
    }

    /// Drain pending add/remove notifications for external observers.
    pub fn take_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }
}
