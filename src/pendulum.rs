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

use std::f32::consts::FRAC_PI_4;

use cgmath::{InnerSpace, Point2, Vector2};

use crate::body::RigidBody;
use crate::error::Error;
use crate::geom::Collider;
use crate::math::VectorExt;

/// Threshold below which the pivot-to-bob vector is considered degenerate
/// and the projection is skipped for the tick.
const PROJECTION_EPSILON: f32 = 0.001;

/// A rigid body coupled to a fixed pivot by a hard distance constraint.
///
/// The bob integrates unconstrained every tick (gravity and any other
/// applied forces included) and is then projected back onto the rope
/// circle: its position is rescaled to exactly the rope length and the
/// radial component of its velocity is discarded, keeping only the
/// tangential part. Pendulum motion falls out of that projection; no
/// torque is ever integrated.
///
/// `apply_torque` writes an angular acceleration that the projection
/// supersedes, so it never affects the bob's trajectory. The behavior of
/// the system this reimplements is kept rather than corrected.
#[derive(Debug)]
pub struct Pendulum {
    bob: RigidBody,
    pivot: Point2<f32>,
    rope_length: f32,
    /// Swing angle in radians, zero pointing straight down.
    angle: f32,
    angular_velocity: f32,
    angular_acceleration: f32,
}

impl Pendulum {
    /// Construct a pendulum with its bob starting at a 45 degree swing.
    ///
    /// `mass` and `bob_radius` describe the bob, which carries a circle
    /// collider. Fails on a non-positive rope length or mass.
    pub fn new(
        pivot: Point2<f32>,
        mass: f32,
        bob_radius: f32,
        rope_length: f32,
    ) -> Result<Self, Error> {
        if rope_length <= 0.0 {
            return Err(Error::NonPositiveRopeLength(rope_length));
        }
        let angle = FRAC_PI_4;
        let start = Point2::new(
            pivot.x + rope_length * angle.sin(),
            pivot.y - rope_length * angle.cos(),
        );
        let mut bob = RigidBody::new(start, mass)?;
        bob.collider = Some(Collider::circle(bob_radius));
        Ok(Pendulum {
            bob,
            pivot,
            rope_length,
            angle,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
        })
    }

    pub fn bob(&self) -> &RigidBody {
        &self.bob
    }

    pub fn pivot(&self) -> Point2<f32> {
        self.pivot
    }

    pub fn rope_length(&self) -> f32 {
        self.rope_length
    }

    /// Current swing angle, `atan2(dx, -dy)` of the pivot-to-bob vector:
    /// zero hanging straight down, positive towards +x.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Angular velocity about the pivot, derived from the tangential
    /// speed during the last projection.
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Angular acceleration recorded by `apply_torque`. Diagnostic only;
    /// it is never integrated into the swing.
    pub fn angular_acceleration(&self) -> f32 {
        self.angular_acceleration
    }

    /// The bob's speed along the rope's perpendicular. After `update`
    /// this is the bob's entire speed, since the radial component has
    /// been projected away.
    pub fn tangential_speed(&self) -> f32 {
        let radial = (self.bob.position - self.pivot) / self.rope_length;
        self.bob.velocity.dot(radial.perpendicular())
    }

    /// Advance the pendulum one tick: unconstrained integration of the
    /// bob, then projection back onto the rope circle.
    pub fn update(&mut self, dt: f32) {
        self.bob.integrate(dt);

        let to_bob = self.bob.position - self.pivot;
        let current_length = to_bob.magnitude();
        if current_length <= PROJECTION_EPSILON {
            // Bob sits on the pivot; the rope direction is undefined, so
            // leave the state alone for this tick.
            return;
        }

        let along_rope = to_bob * (self.rope_length / current_length);
        self.bob.position = self.pivot + along_rope;
        self.angle = along_rope.x.atan2(-along_rope.y);
        self.angular_velocity = self.tangential_speed() / self.rope_length;

        // Discard the radial velocity component: the rope length never
        // changes, so neither may the distance to the pivot.
        let radial_dir = along_rope / self.rope_length;
        let radial_speed = self.bob.velocity.dot(radial_dir);
        self.bob.velocity -= radial_dir * radial_speed;
    }

    /// Forward a force to the bob.
    pub fn apply_force(&mut self, force: Vector2<f32>) {
        self.bob.apply_force(force);
    }

    /// Apply a gravity acceleration to the bob as a force, `F = m*g`.
    pub fn apply_gravity(&mut self, gravity: Vector2<f32>) {
        let mass = self.bob.mass();
        self.bob.apply_force(gravity * mass);
    }

    /// Record a torque about the pivot as an angular acceleration using
    /// the point-mass moment `I = m*L²`.
    ///
    /// The projection in `update` drives the motion instead, so this
    /// never moves the bob; see the type-level docs.
    pub fn apply_torque(&mut self, torque: f32) {
        let moment = self.bob.mass() * self.rope_length * self.rope_length;
        if moment > 0.0 {
            self.angular_acceleration = torque / moment;
        }
    }
}
