//! Collision detection and accretion resolution
//!
//! Detection scans the same unordered-pair space as the gravity solver
//! and emits transient `CollisionEvent`s when two bodies overlap.
//! Resolution consumes those events in detection order and mutates the
//! registry:
//! - planet + planet -> single merged planet (mass and momentum conserved)
//! - planet + star   -> star absorbs the planet's mass, keeps its identity

use std::collections::HashSet;

use crate::simulation::states::{Body, BodyId, BodyKind, Registry};

/// A detected overlapping pair. Valid only within the step that
/// produced it; merges may invalidate either id immediately after.
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    pub a: BodyId,
    pub b: BodyId,
    pub separation: f64, // center distance at detection time
}

/// Counts of what resolution actually applied this step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub merges: usize, // planet-planet mergers
    pub absorptions: usize, // planets swallowed by the star
}

/// Direct O(n^2) overlap scan. A pair collides when the center distance
/// is at most the sum of contact radii. Multi-body clusters are not
/// deduplicated here; the resolver's sequential skip rule decides which
/// pairing wins.
pub fn detect_collisions(registry: &Registry) -> Vec<CollisionEvent> {
    let bodies = registry.bodies();
    let n = bodies.len();
    let mut events = Vec::new();

    for i in 0..n {
        let bi = &bodies[i];
        for j in (i + 1)..n {
            let bj = &bodies[j];

            let separation = (bj.x - bi.x).norm();
            if separation <= bi.radius + bj.radius {
                events.push(CollisionEvent {
                    a: bi.id,
                    b: bj.id,
                    separation,
                });
            }
        }
    }

    events
}

/// Inelastic merge of two planets: mass sum, momentum-conserving
/// velocity, center-of-mass position. The merged radius conserves
/// volume assuming equal density, `r = cbrt(ra^3 + rb^3)`.
fn merge_planets(registry: &mut Registry, a: Body, b: Body) -> BodyId {
    let m = a.m + b.m;
    let x = (a.m * a.x + b.m * b.x) / m;
    let v = (a.momentum() + b.momentum()) / m;
    let radius = (a.radius.powi(3) + b.radius.powi(3)).cbrt();
    registry.add_planet(m, radius, x, v)
}

/// Apply the step's collision events to the registry, in detection
/// order (first-detected-wins).
///
/// A body consumed by one merge cannot participate in a second merge in
/// the same step: any later event referencing a consumed (or otherwise
/// missing) id is skipped as a no-op. The star absorbs planets without
/// being consumed itself, so it may swallow several in one step.
pub fn resolve_collisions(registry: &mut Registry, events: Vec<CollisionEvent>) -> MergeStats {
    let star = registry.star_id();
    let mut consumed: HashSet<BodyId> = HashSet::new();
    let mut stats = MergeStats::default();

    for event in events {
        if consumed.contains(&event.a) || consumed.contains(&event.b) {
            continue;
        }

        // Stale ids (already gone for any reason) are expected, not errors
        if !registry.contains(event.a) || !registry.contains(event.b) {
            continue;
        }

        if event.a == star || event.b == star {
            // Planet-star absorption: the star is dominant, so its
            // position and velocity stay put; only its mass grows
            let planet_id = if event.a == star { event.b } else { event.a };
            let planet = match registry.remove(planet_id) {
                Some(p) => p,
                None => continue,
            };
            if let Some(s) = registry.body_mut(star) {
                s.m += planet.m;
            }
            consumed.insert(planet_id);
            stats.absorptions += 1;
        } else {
            // Planet-planet merge
            let a = match registry.remove(event.a) {
                Some(a) => a,
                None => continue,
            };
            let b = match registry.remove(event.b) {
                Some(b) => b,
                None => continue,
            };
            debug_assert!(a.kind == BodyKind::Planet && b.kind == BodyKind::Planet);
            merge_planets(registry, a, b);
            consumed.insert(event.a);
            consumed.insert(event.b);
            stats.merges += 1;
        }
    }

    stats
}
