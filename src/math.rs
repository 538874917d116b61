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

use cgmath::Vector2;

/// Extra vector operations not covered by cgmath.
pub trait VectorExt {
    /// Returns the counter-clockwise perpendicular of the vector,
    /// i.e. `(x, y) -> (-y, x)`.
    fn perpendicular(self) -> Self;
}

impl VectorExt for Vector2<f32> {
    fn perpendicular(self) -> Self {
        Vector2::new(-self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    mod math {
        use cgmath::{InnerSpace, Vector2};

        use crate::math::*;

        #[test]
        fn test_perpendicular() {
            let v = Vector2::new(3.0f32, 2.0);
            let p = v.perpendicular();
            assert_eq!(p, Vector2::new(-2.0, 3.0));
            assert_eq!(v.dot(p), 0.0);
            // Two perpendiculars make a negation.
            assert_eq!(p.perpendicular(), -v);
        }
    }
}
