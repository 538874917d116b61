// Copyright 2025 the impel developers. This file is part of impel.
//
// impel is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// impel is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with impel. If not, see <http://www.gnu.org/licenses/>.

use cgmath::{InnerSpace, Vector2};
use log::trace;
use smallvec::SmallVec;

use crate::body::RigidBody;
use crate::collision::{circle_circle, circle_rectangle, Contact};
use crate::geom::Collider;

/// The world configuration: rectangular bounds and a gravity vector.
///
/// The world is stateless across ticks; it owns no bodies and holds only
/// this configuration. Bounds span `[-width/2, width/2]` by
/// `[-height/2, height/2]`, in meters.
#[derive(Copy, Clone, Debug)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub gravity: Vector2<f32>,
}

/// A contact found between two bodies of a slice, by index.
#[derive(Copy, Clone, Debug)]
pub struct PairContact {
    pub a: usize,
    pub b: usize,
    pub contact: Contact,
}

impl World {
    /// Create a world of the given extents under standard gravity.
    pub fn new(width: f32, height: f32) -> Self {
        World::with_gravity(width, height, Vector2::new(0.0, -9.8))
    }

    pub fn with_gravity(width: f32, height: f32, gravity: Vector2<f32>) -> Self {
        World {
            width,
            height,
            gravity,
        }
    }

    /// Apply this tick's gravity force to a body. Gravity is a force and
    /// so is consumed by the next `integrate`; it must be re-applied
    /// every tick.
    pub fn apply_gravity(&self, body: &mut RigidBody) {
        if !body.is_static() {
            let mass = body.mass();
            body.apply_force(self.gravity * mass);
        }
    }

    /// Keep a circle body inside the world bounds.
    ///
    /// Each of the four bounds is checked independently: a violated bound
    /// clamps that position component to the wall minus the radius and
    /// reflects the velocity component scaled by the body's restitution.
    /// A corner hit may correct both axes in one call. Bodies with
    /// rectangle colliders (or none) pass through the bounds, an
    /// asymmetry kept from the system this reimplements.
    pub fn resolve_wall_collisions(&self, body: &mut RigidBody) {
        if body.is_static() {
            return;
        }
        let radius = match body.collider {
            Some(Collider::Circle { radius }) => radius,
            _ => return,
        };
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;

        // Left wall
        if body.position.x - radius < -half_w {
            body.position.x = -half_w + radius;
            body.velocity.x = -body.velocity.x * body.restitution;
        }
        // Right wall
        if body.position.x + radius > half_w {
            body.position.x = half_w - radius;
            body.velocity.x = -body.velocity.x * body.restitution;
        }
        // Bottom wall
        if body.position.y - radius < -half_h {
            body.position.y = -half_h + radius;
            body.velocity.y = -body.velocity.y * body.restitution;
        }
        // Top wall
        if body.position.y + radius > half_h {
            body.position.y = half_h - radius;
            body.velocity.y = -body.velocity.y * body.restitution;
        }
    }

    /// Detect and resolve collisions between every unordered pair of
    /// bodies.
    ///
    /// Pairs where both bodies are static, or where either body lacks a
    /// collider, are skipped. Pairs are resolved sequentially: the
    /// position and velocity corrections of an earlier pair are visible
    /// to later pairs in the same pass. There is no relaxation or
    /// simultaneous solve, which makes dense stacks jitter; that
    /// trade-off is inherited deliberately.
    pub fn resolve_body_collisions(&self, bodies: &mut [RigidBody]) {
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for (k, b) in tail.iter_mut().enumerate() {
                if a.is_static() && b.is_static() {
                    continue;
                }
                if let Some(contact) = contact_between(a, b) {
                    trace!("resolving contact between bodies {} and {}", i, i + 1 + k);
                    resolve_contact(a, b, &contact);
                }
            }
        }
    }

    /// Detection-only variant of `resolve_body_collisions`: report every
    /// contact in the slice without mutating anything. Useful for debug
    /// overlays and tests.
    pub fn find_contacts(&self, bodies: &[RigidBody]) -> SmallVec<[PairContact; 8]> {
        let mut contacts = SmallVec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if bodies[i].is_static() && bodies[j].is_static() {
                    continue;
                }
                if let Some(contact) = contact_between(&bodies[i], &bodies[j]) {
                    contacts.push(PairContact { a: i, b: j, contact });
                }
            }
        }
        contacts
    }

    /// Advance the whole scene by one fixed timestep: per body, gravity,
    /// integration and wall resolution, then a single pairwise collision
    /// pass over the slice.
    pub fn step(&self, bodies: &mut [RigidBody], dt: f32) {
        for body in bodies.iter_mut() {
            self.apply_gravity(body);
            body.integrate(dt);
            self.resolve_wall_collisions(body);
        }
        self.resolve_body_collisions(bodies);
    }
}

/// Narrow-phase dispatch over the collider variants of a pair. The
/// returned contact normal points from `a` towards `b`. Rectangle pairs
/// produce no contact.
fn contact_between(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let collider_a = a.collider?;
    let collider_b = b.collider?;
    match (collider_a, collider_b) {
        (Collider::Circle { radius: radius_a }, Collider::Circle { radius: radius_b }) => {
            circle_circle(a.position, radius_a, b.position, radius_b)
        }
        (Collider::Circle { radius }, Collider::Rectangle { width, height }) => {
            circle_rectangle(a.position, radius, b.position, b.angle, width, height)
        }
        (Collider::Rectangle { width, height }, Collider::Circle { radius }) => {
            circle_rectangle(b.position, radius, a.position, a.angle, width, height)
                .map(Contact::flip)
        }
        (Collider::Rectangle { .. }, Collider::Rectangle { .. }) => None,
    }
}

/// Resolve a single contact.
///
/// Positional correction moves the bodies apart along the normal, each by
/// the other body's share of the combined mass; against a static body the
/// dynamic body absorbs the whole overlap. The velocity response reflects
/// each dynamic body's normal velocity component independently, scaled by
/// one plus the lesser restitution of the pair, and only if that body is
/// moving into the other. Tangential velocity is untouched; friction is
/// not modeled here.
fn resolve_contact(a: &mut RigidBody, b: &mut RigidBody, contact: &Contact) {
    let normal = contact.normal;
    match (a.is_static(), b.is_static()) {
        (false, false) => {
            let total = a.mass() + b.mass();
            a.position -= normal * (contact.overlap * (b.mass() / total));
            b.position += normal * (contact.overlap * (a.mass() / total));
        }
        (false, true) => a.position -= normal * contact.overlap,
        (true, false) => b.position += normal * contact.overlap,
        (true, true) => return,
    }

    let restitution = a.restitution.min(b.restitution);
    if !a.is_static() {
        let along = a.velocity.dot(normal);
        if along > 0.0 {
            a.velocity -= normal * ((1.0 + restitution) * along);
        }
    }
    if !b.is_static() {
        let along = b.velocity.dot(normal);
        if along < 0.0 {
            b.velocity -= normal * ((1.0 + restitution) * along);
        }
    }
}

/// Accumulator for driving the simulation at a fixed timestep from a
/// variable-rate host loop. Wall-clock time is consumed in whole
/// timesteps and the remainder carried forward.
#[derive(Copy, Clone, Debug)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        FixedTimestep {
            dt,
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed elapsed wall-clock seconds and return how many whole
    /// timesteps to simulate.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        ticks
    }
}
