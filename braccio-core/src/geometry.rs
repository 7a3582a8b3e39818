use nalgebra::Vector2;

use crate::consts::NEUTRAL_OFFSET_DEG;

/// Point in the vertical working plane of the arm.
///
/// The `x` component is the horizontal reach and the `y` component holds the
/// height (`z`) above the base pivot.
pub type PlanarPoint = nalgebra::Point2<f32>;

/// Calculate the angle of a triangle using the law of cosines.
///
/// Returns the angle opposite of side `c`. The cosine is clamped to [-1, 1]
/// so that a triangle collapsed onto a line still yields a defined angle.
pub fn law_of_cosines(a: f32, b: f32, c: f32) -> f32 {
    let a2 = a.powi(2);
    let b2 = b.powi(2);
    let c2 = c.powi(2);

    let numerator = a2 + b2 - c2;
    let denominator = 2.0 * a * b;

    (numerator / denominator).clamp(-1.0, 1.0).acos()
}

/// Vector of the given length along an absolute angle.
#[inline]
pub fn polar(length: f32, angle: f32) -> Vector2<f32> {
    Vector2::new(angle.cos(), angle.sin()) * length
}

/// Bearing of a vector measured from the positive x-axis.
#[inline]
pub fn bearing(vector: &Vector2<f32>) -> f32 {
    vector.y.atan2(vector.x)
}

/// Convert a raw joint value in degrees to a geometric angle in radians.
#[inline]
pub fn raw_to_angle(raw: i32) -> f32 {
    ((raw - NEUTRAL_OFFSET_DEG) as f32).to_radians()
}

/// Convert a geometric angle in radians to the nearest raw joint value.
#[inline]
pub fn angle_to_raw(angle: f32) -> i32 {
    offset_to_raw(angle, NEUTRAL_OFFSET_DEG)
}

/// Convert a geometric angle to a raw joint value with an arbitrary neutral offset.
#[inline]
pub fn offset_to_raw(angle: f32, offset: i32) -> i32 {
    (angle.to_degrees() + offset as f32).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_law_of_cosines() {
        let tolerance = 0.0001;

        // Right triangle 3-4-5.
        assert!((law_of_cosines(3.0, 4.0, 5.0) - std::f32::consts::FRAC_PI_2).abs() < tolerance);
        // Collapsed triangle overshooting the boundary.
        assert!((law_of_cosines(3.0, 4.0, 7.0001) - std::f32::consts::PI).abs() < tolerance);
        assert!(law_of_cosines(3.0, 4.0, 0.9999).abs() < tolerance);
    }

    #[test]
    fn test_raw_angle_conversion() {
        assert_eq!(raw_to_angle(90), 0.0);
        assert!((raw_to_angle(180) - std::f32::consts::FRAC_PI_2).abs() < 0.000_001);
        assert_eq!(angle_to_raw(0.0), 90);
        assert_eq!(angle_to_raw(-std::f32::consts::FRAC_PI_2), 0);
        assert_eq!(angle_to_raw(45.4_f32.to_radians()), 135);
        assert_eq!(offset_to_raw(0.0, 135), 135);
    }

    #[test]
    fn test_polar() {
        let vector = polar(2.0, std::f32::consts::FRAC_PI_2);

        assert!(vector.x.abs() < 0.0001);
        assert!((vector.y - 2.0).abs() < 0.0001);
        assert!((bearing(&vector) - std::f32::consts::FRAC_PI_2).abs() < 0.0001);
    }
}
