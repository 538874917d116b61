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

use thiserror::Error;

/// Errors raised when constructing simulation objects with degenerate
/// parameters.
///
/// The simulation itself is total and infallible; values that would
/// divide by zero during a tick are rejected up front instead.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A dynamic body requires a strictly positive mass.
    #[error("dynamic body mass must be positive, got {0}")]
    NonPositiveMass(f32),
    /// A pendulum requires a strictly positive rope length.
    #[error("pendulum rope length must be positive, got {0}")]
    NonPositiveRopeLength(f32),
}
