//! Geometry shared by every slider variant.
//!
//! Angles throughout this crate are "compass" angles in degrees: `0.0`
//! points north (straight up) and values grow clockwise, matching how a
//! dial is read. Cartesian math happens only inside this module.

use std::f32::consts::PI;

/// A point in the host's coordinate space.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// A size in the host's coordinate space.
///
/// Alias for ```euclid::default::Size2D<f32>```.
pub type Size = euclid::default::Size2D<f32>;

/// A vector in the host's coordinate space.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// The compass angle (in degrees) of `point` as seen from `center`.
///
/// Returns a value in `[0.0, 360.0]`, or `None` when the two points
/// coincide and no direction exists. Callers treat `None` as "ignore the
/// touch".
pub fn angle_between(center: Point, point: Point) -> Option<f32> {
    let vector = point - center;
    if vector.x == 0.0 && vector.y == 0.0 {
        return None;
    }

    let cartesian = vector.y.atan2(vector.x);

    // Rotate so 0 points north, then wrap negatives into [0, 2*PI].
    let mut compass = cartesian + PI / 2.0;
    if compass < 0.0 {
        compass += 2.0 * PI;
    }

    Some(radians_to_degrees(compass))
}

/// The point on the circle of `radius` around `center` at the given
/// compass angle.
///
/// The offset from the center is rounded to whole units before it is
/// applied. This keeps handle centers off fractional coordinates so they
/// do not shimmer between redraws, and tests rely on it.
pub fn point_on_circle(center: Point, radius: f32, degrees: f32) -> Point {
    let cartesian = degrees_to_radians(degrees) - PI / 2.0;
    let offset = Vector::new(
        (radius * cartesian.cos()).round(),
        (radius * cartesian.sin()).round(),
    );
    center + offset
}

pub fn distance(a: Point, b: Point) -> f32 {
    let v = b - a;
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Converts the straight-line (chord) distance between two points on a
/// circle of `radius` into the length of the arc between them.
///
/// The ratio is clamped before `asin` so that rounding of the chord can
/// never produce a NaN.
pub fn arc_length_between(a: Point, b: Point, radius: f32) -> f32 {
    let diameter = radius * 2.0;
    let chord = distance(a, b);
    diameter * (chord / diameter).min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angle_between_cardinal_directions() {
        let center = Point::new(50.0, 50.0);

        let north = angle_between(center, Point::new(50.0, 0.0)).unwrap();
        let east = angle_between(center, Point::new(100.0, 50.0)).unwrap();
        let south = angle_between(center, Point::new(50.0, 100.0)).unwrap();
        let west = angle_between(center, Point::new(0.0, 50.0)).unwrap();

        assert_relative_eq!(north, 0.0, epsilon = 1e-4);
        assert_relative_eq!(east, 90.0, epsilon = 1e-4);
        assert_relative_eq!(south, 180.0, epsilon = 1e-4);
        assert_relative_eq!(west, 270.0, epsilon = 1e-4);
    }

    #[test]
    fn angle_between_coincident_points_is_none() {
        let p = Point::new(12.0, -3.5);
        assert!(angle_between(p, p).is_none());
    }

    #[test]
    fn point_on_circle_cardinal_directions() {
        let center = Point::new(100.0, 100.0);

        assert_eq!(point_on_circle(center, 50.0, 0.0), Point::new(100.0, 50.0));
        assert_eq!(point_on_circle(center, 50.0, 90.0), Point::new(150.0, 100.0));
        assert_eq!(point_on_circle(center, 50.0, 180.0), Point::new(100.0, 150.0));
        assert_eq!(point_on_circle(center, 50.0, 270.0), Point::new(50.0, 100.0));
    }

    #[test]
    fn angle_round_trips_through_point_on_circle() {
        let center = Point::new(80.0, 80.0);
        let radius = 60.0;

        // Rounding in point_on_circle costs up to about a degree.
        for deg in 1..360 {
            let deg = deg as f32;
            let p = point_on_circle(center, radius, deg);
            let back = angle_between(center, p).unwrap();
            assert!(
                (back - deg).abs() <= 1.0,
                "angle {deg} reconstructed as {back}"
            );
        }
    }

    #[test]
    fn arc_length_of_a_quarter_circle() {
        let center = Point::new(0.0, 0.0);
        let r = 100.0;
        let a = point_on_circle(center, r, 0.0);
        let b = point_on_circle(center, r, 90.0);

        assert_relative_eq!(
            arc_length_between(a, b, r),
            PI * r / 2.0,
            epsilon = 0.5
        );
    }

    #[test]
    fn arc_length_clamps_oversized_chords() {
        // A chord slightly longer than the diameter must not go NaN.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(201.0, 0.0);
        let arc = arc_length_between(a, b, 100.0);
        assert!(arc.is_finite());
        assert_relative_eq!(arc, PI * 100.0, epsilon = 1e-3);
    }
}
