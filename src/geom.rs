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

use serde::{Deserialize, Serialize};

/// Maximum tolerance for geometric error, i.e. what we consider the x86
/// floating point epsilon.
pub const COLLISION_EPSILON: f32 = 0.000001;

/// The shape a body presents to collision detection.
///
/// A collider is a plain geometric value with no physics state of its own.
/// It is owned by the body it is attached to; sizes are in meters and are
/// expected to be non-negative. A circle is a radius, a rectangle a full
/// width and height centered on the body and oriented by the body's angle.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
}

impl Collider {
    pub fn circle(radius: f32) -> Self {
        Collider::Circle { radius }
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        Collider::Rectangle { width, height }
    }

    /// Half extents of a rectangle collider, `(0, 0)` for a circle.
    pub fn half_extents(&self) -> (f32, f32) {
        match *self {
            Collider::Circle { .. } => (0.0, 0.0),
            Collider::Rectangle { width, height } => (width * 0.5, height * 0.5),
        }
    }
}
