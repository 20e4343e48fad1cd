//! Conversions between 3D points and homogeneous coordinates.

use crate::{Vec3, Vec4};

/// Promotes a position to homogeneous form with `w = 1`.
#[inline]
#[must_use]
pub fn to_homogeneous(point: Vec3) -> Vec4 {
    point.extend(1.0)
}

/// Divides `xyz` by `w`.
///
/// Returns `None` when `|w| <= epsilon`: the point lies on the camera plane and
/// the divide is undefined. Negative `w` is divided like any other value.
#[inline]
#[must_use]
pub fn from_homogeneous(v: Vec4, epsilon: f64) -> Option<Vec3> {
    if v.w.abs() <= epsilon {
        None
    } else {
        Some(v.truncate() / v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_homogeneous_sets_unit_w() {
        let h = to_homogeneous(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(h, Vec4::new(1.0, -2.0, 3.0, 1.0));
    }

    #[test]
    fn test_from_homogeneous_divides() {
        let p = from_homogeneous(Vec4::new(2.0, 4.0, -6.0, 2.0), 1e-12).unwrap();
        assert_eq!(p, Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_from_homogeneous_negative_w_flips_sign() {
        let p = from_homogeneous(Vec4::new(1.0, 1.0, 1.0, -0.5), 1e-12).unwrap();
        assert_eq!(p, Vec3::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn test_from_homogeneous_zero_w() {
        assert!(from_homogeneous(Vec4::new(1.0, 1.0, 1.0, 0.0), 1e-12).is_none());
        assert!(from_homogeneous(Vec4::new(1.0, 1.0, 1.0, 1e-15), 1e-12).is_none());
    }
}
