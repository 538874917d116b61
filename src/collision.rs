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

use cgmath::{Basis2, InnerSpace, Point2, Rad, Rotation, Rotation2, Vector2};
use log::debug;

use crate::geom::COLLISION_EPSILON;

/// A single point of contact between two overlapping shapes.
///
/// The normal is unit length and points from the first shape towards the
/// second; the overlap is the penetration depth along the normal and is
/// always positive.
#[derive(Copy, Clone, Debug)]
pub struct Contact {
    pub normal: Vector2<f32>,
    pub overlap: f32,
}

impl Contact {
    /// The same contact seen from the other shape.
    pub fn flip(self) -> Self {
        Contact {
            normal: -self.normal,
            overlap: self.overlap,
        }
    }
}

/// Computes the contact between two circles, if they overlap.
///
/// Coincident centers leave the contact normal undefined; that degenerate
/// pair is deterministically skipped.
pub fn circle_circle(
    center_a: Point2<f32>,
    radius_a: f32,
    center_b: Point2<f32>,
    radius_b: f32,
) -> Option<Contact> {
    let delta = center_b - center_a;
    let distance = delta.magnitude();
    if distance <= 0.0 {
        debug!("coincident circle centers, contact normal undefined; skipping");
        return None;
    }
    if distance >= radius_a + radius_b {
        return None;
    }
    Some(Contact {
        normal: delta / distance,
        overlap: (radius_a + radius_b) - distance,
    })
}

/// Computes the contact between a circle and an oriented rectangle, if
/// they overlap. The returned normal points from the circle towards the
/// rectangle.
///
/// The circle center is rotated into the rectangle's local frame and
/// clamped to the half extents to find the closest point on the
/// rectangle; the closest-point axis is then treated like a circle-circle
/// normal. If the center lies on the closest point (i.e. inside the
/// rectangle), the normal falls back to the local axis the center
/// penetrates deepest along, with the face-to-center distance added to
/// the overlap.
pub fn circle_rectangle(
    center: Point2<f32>,
    radius: f32,
    rect_center: Point2<f32>,
    rect_angle: f32,
    width: f32,
    height: f32,
) -> Option<Contact> {
    let rot = Basis2::from_angle(Rad(rect_angle));
    let inv_rot = Basis2::from_angle(Rad(-rect_angle));
    let half_w = width * 0.5;
    let half_h = height * 0.5;

    let local = inv_rot.rotate_vector(center - rect_center);
    let clamped = Vector2::new(
        local.x.max(-half_w).min(half_w),
        local.y.max(-half_h).min(half_h),
    );
    let closest = rect_center + rot.rotate_vector(clamped);
    let delta = center - closest;
    let distance2 = delta.magnitude2();

    if distance2 > COLLISION_EPSILON * COLLISION_EPSILON {
        let distance = distance2.sqrt();
        if distance >= radius {
            return None;
        }
        // `delta` points from the rectangle surface out to the circle.
        Some(Contact {
            normal: -delta / distance,
            overlap: radius - distance,
        })
    } else {
        // Center is inside the rectangle. Escape through the nearest
        // face; the normal keeps pointing circle-to-rectangle.
        debug!("circle center inside rectangle, falling back to axis normal");
        let pen_x = half_w - local.x.abs();
        let pen_y = half_h - local.y.abs();
        let (local_normal, penetration) = if pen_x < pen_y {
            (Vector2::new(-local.x.signum(), 0.0), pen_x)
        } else {
            (Vector2::new(0.0, -local.y.signum()), pen_y)
        };
        Some(Contact {
            normal: rot.rotate_vector(local_normal),
            overlap: radius + penetration,
        })
    }
}

#[cfg(test)]
mod tests {
    mod collision {
        use approx::assert_relative_eq;
        use cgmath::{InnerSpace, Point2};
        use std::f32::consts::FRAC_PI_2;

        use crate::collision::*;

        #[test]
        fn test_circle_circle_overlap() {
            let contact = circle_circle(
                Point2::new(0.0, 0.0),
                1.0,
                Point2::new(1.5, 0.0),
                1.0,
            )
            .unwrap();
            assert_relative_eq!(contact.normal.x, 1.0);
            assert_relative_eq!(contact.normal.y, 0.0);
            assert_relative_eq!(contact.overlap, 0.5);
        }

        #[test]
        fn test_circle_circle_separated() {
            assert!(circle_circle(
                Point2::new(0.0, 0.0),
                1.0,
                Point2::new(2.5, 0.0),
                1.0
            )
            .is_none());
            // Exactly touching circles do not collide.
            assert!(circle_circle(
                Point2::new(0.0, 0.0),
                1.0,
                Point2::new(2.0, 0.0),
                1.0
            )
            .is_none());
        }

        #[test]
        fn test_circle_circle_coincident_centers_skipped() {
            assert!(circle_circle(
                Point2::new(1.0, 1.0),
                0.5,
                Point2::new(1.0, 1.0),
                0.5
            )
            .is_none());
        }

        #[test]
        fn test_circle_rectangle_face() {
            // Circle resting just inside the top face of an axis-aligned
            // 4x3 rectangle.
            let contact = circle_rectangle(
                Point2::new(0.0, 2.0),
                0.6,
                Point2::new(0.0, 0.0),
                0.0,
                4.0,
                3.0,
            )
            .unwrap();
            assert_relative_eq!(contact.normal.x, 0.0);
            assert_relative_eq!(contact.normal.y, -1.0);
            assert_relative_eq!(contact.overlap, 0.1, epsilon = 1e-6);
        }

        #[test]
        fn test_circle_rectangle_respects_orientation() {
            // A 4x2 rectangle rotated a quarter turn presents its long
            // axis vertically; a circle to the right at x = 2.5 is 1.5m
            // from the surface.
            let contact = circle_rectangle(
                Point2::new(2.5, 0.0),
                1.6,
                Point2::new(0.0, 0.0),
                FRAC_PI_2,
                4.0,
                2.0,
            )
            .unwrap();
            assert_relative_eq!(contact.normal.x, -1.0, epsilon = 1e-6);
            assert_relative_eq!(contact.normal.y, 0.0, epsilon = 1e-6);
            assert_relative_eq!(contact.overlap, 0.1, epsilon = 1e-6);

            // Unrotated, the same circle never reaches the short face.
            assert!(circle_rectangle(
                Point2::new(2.5, 0.0),
                0.4,
                Point2::new(0.0, 0.0),
                0.0,
                4.0,
                2.0
            )
            .is_none());
        }

        #[test]
        fn test_circle_rectangle_center_inside() {
            // Center inside a 4x2 rectangle, nearest the +x face.
            let contact = circle_rectangle(
                Point2::new(1.5, 0.2),
                0.3,
                Point2::new(0.0, 0.0),
                0.0,
                4.0,
                2.0,
            )
            .unwrap();
            assert_relative_eq!(contact.normal.x, -1.0);
            assert_relative_eq!(contact.normal.y, 0.0);
            // Overlap carries the circle fully out of the rectangle.
            assert_relative_eq!(contact.overlap, 0.3 + 0.5, epsilon = 1e-6);
        }

        #[test]
        fn test_flip() {
            let contact = circle_circle(
                Point2::new(0.0, 0.0),
                1.0,
                Point2::new(0.0, 1.0),
                1.0,
            )
            .unwrap()
            .flip();
            assert_relative_eq!(contact.normal.y, -1.0);
            assert_relative_eq!(contact.overlap, 1.0);
            assert_relative_eq!(contact.normal.magnitude(), 1.0);
        }
    }
}
