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

//! A minimal 2D rigid body physics core intended for use in 2D video game
//! development.
//!
//! # Overview
//!
//! The crate advances the kinematic state of a collection of bodies under
//! gravity, keeps circle bodies inside a rectangular world, resolves
//! pairwise collisions between circles and oriented rectangles, and
//! supports a single analytic joint, a pendulum distance constraint.
//!
//! A host loop drives the simulation once per fixed timestep:
//!
//! - `World::apply_gravity` on every body,
//! - `RigidBody::integrate` on every body (semi-implicit Euler),
//! - `World::resolve_wall_collisions` on every body,
//! - `World::resolve_body_collisions` over the whole body slice,
//!
//! or, all at once, `World::step`. The host then reads back position,
//! angle and collider shape to render. All physics quantities are in
//! meters, seconds and kilograms; any pixel scale belongs to the renderer
//! and never enters this crate.
//!
//! Collision handling is deliberately simple: an exhaustive O(n²) narrow
//! phase with positional correction and an independent per-body normal
//! reflection. Pairs are resolved sequentially, so corrections from an
//! earlier pair are visible to later pairs within the same pass. There is
//! no broad phase, no rotational collision response and no continuous
//! collision detection.

pub extern crate cgmath;

mod body;
pub use crate::body::*;

mod collision;
pub use crate::collision::*;

mod error;
pub use crate::error::*;

mod geom;
pub use crate::geom::*;

mod math;
pub use crate::math::*;

mod pendulum;
pub use crate::pendulum::*;

mod world;
pub use crate::world::*;
