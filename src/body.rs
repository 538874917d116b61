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

use cgmath::{Point2, Vector2, Zero};

use crate::error::Error;
use crate::geom::Collider;

/// A physical body that has a mass and experiences linear movement.
///
/// A body accumulates forces into an acceleration that is consumed and
/// reset by `integrate`, so forces (gravity included) must be re-applied
/// every tick. Static bodies are immovable: force application and
/// integration are no-ops on them and collision resolution never touches
/// their state.
///
/// The `angle` field orients a rectangle collider and is advanced by
/// `angular_velocity`, but collisions produce no torque: `friction` and
/// `inertia` are carried as material/descriptive parameters and do not
/// participate in the collision response.
#[derive(Clone, Debug)]
pub struct RigidBody {
    pub position: Point2<f32>,
    pub velocity: Vector2<f32>,
    pub acceleration: Vector2<f32>,
    mass: f32,
    pub restitution: f32,
    pub friction: f32,
    is_static: bool,
    /// Orientation in radians.
    pub angle: f32,
    pub angular_velocity: f32,
    pub inertia: f32,
    pub collider: Option<Collider>,
}

impl RigidBody {
    /// Construct a dynamic body at rest. Fails if `mass` is not strictly
    /// positive, since force application divides by it.
    pub fn new(position: Point2<f32>, mass: f32) -> Result<Self, Error> {
        if mass <= 0.0 {
            return Err(Error::NonPositiveMass(mass));
        }
        Ok(RigidBody {
            position,
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            mass,
            restitution: 0.5,
            friction: 0.3,
            is_static: false,
            angle: 0.0,
            angular_velocity: 0.0,
            inertia: mass * 0.5,
            collider: None,
        })
    }

    /// Construct a static body. Static bodies behave as if they had
    /// infinite mass and are only ever moved by scene setup code.
    pub fn new_static(position: Point2<f32>) -> Self {
        RigidBody {
            position,
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            mass: f32::INFINITY,
            restitution: 0.5,
            friction: 0.3,
            is_static: true,
            angle: 0.0,
            angular_velocity: 0.0,
            inertia: f32::INFINITY,
            collider: None,
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Inverse mass, zero for static bodies.
    pub fn inv_mass(&self) -> f32 {
        if self.is_static {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Accumulate a force for the current tick. No-op on static bodies.
    pub fn apply_force(&mut self, force: Vector2<f32>) {
        if self.is_static {
            return;
        }
        self.acceleration += force / self.mass;
    }

    /// Integrate the body over the timestep with semi-implicit Euler:
    /// velocity is updated from the accumulated acceleration first, then
    /// position from the updated velocity. The force accumulator is
    /// cleared afterwards. No-op on static bodies.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_static {
            return;
        }
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.angle += self.angular_velocity * dt;
        self.acceleration = Vector2::zero();
    }
}
