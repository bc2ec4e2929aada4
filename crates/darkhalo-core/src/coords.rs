// =============================================================================
// Coordinate Transforms
// =============================================================================
//
// Pure geometric helpers used when pointing the flux calculation at the sky:
//
//   - observer_radius: line-of-sight distance + opening angle seen from the
//     observer -> galactocentric radius (law of cosines)
//   - galactic_longitude / galactic_latitude: equatorial (alpha, delta) ->
//     galactic (l, b) via spherical trigonometry
//
// None of this touches the halo model; it lives here because it is the only
// other non-trivial math in the repository. All angles are in radians.
//
// Each function comes in a scalar form and an `_arr` form. The array forms
// broadcast the way the numpy originals did: both inputs the same length, or
// either one of length 1.
//
// =============================================================================

use ndarray::Array1;

use crate::error::{HaloError, Result};

/// Calibration angles of the equatorial -> galactic rotation.
///
/// The default is the IAU-1958 galactic pole (alpha0, delta0) and the
/// ascending-node longitude l0, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalacticCalibration {
    /// Right ascension of the north galactic pole.
    pub alpha0: f64,
    /// Declination of the north galactic pole.
    pub delta0: f64,
    /// Galactic longitude of the ascending node of the galactic plane.
    pub l0: f64,
}

impl Default for GalacticCalibration {
    fn default() -> Self {
        Self {
            alpha0: 192.8595_f64.to_radians(),
            delta0: 27.1284_f64.to_radians(),
            l0: 123.0_f64.to_radians(),
        }
    }
}

/// Galactocentric radius of a point at line-of-sight distance `x` under
/// angle `psi` from the galactic center direction, for an observer sitting
/// `r0` kpc from the center.
///
/// Floating rounding at degenerate angles can push the radicand a hair
/// negative; the resulting NaN is mapped to 0.
pub fn observer_radius(x: f64, psi: f64, r0: f64) -> f64 {
    let r = (r0 * r0 + x * x - 2. * x * r0 * psi.cos()).sqrt();
    if r.is_nan() {
        0.0
    } else {
        r
    }
}

/// Vectorized [`observer_radius`] over the line-of-sight distances `x`.
pub fn observer_radius_arr(x: &Array1<f64>, psi: f64, r0: f64) -> Array1<f64> {
    x.mapv(|xi| observer_radius(xi, psi, r0))
}

/// Galactic longitude `l` of the equatorial direction (`alpha`, `delta`).
pub fn galactic_longitude(alpha: f64, delta: f64, cal: &GalacticCalibration) -> f64 {
    let right = (delta.cos() * (alpha - cal.alpha0).sin())
        / (delta.sin() * cal.delta0.cos()
            - delta.cos() * cal.delta0.sin() * (alpha - cal.alpha0).cos());
    cal.l0 - right.atan()
}

/// Galactic latitude `b` of the equatorial direction (`alpha`, `delta`).
pub fn galactic_latitude(alpha: f64, delta: f64, cal: &GalacticCalibration) -> f64 {
    (delta.sin() * cal.delta0.sin()
        + delta.cos() * cal.delta0.cos() * (alpha - cal.alpha0).cos())
    .asin()
}

/// Vectorized [`galactic_longitude`] with numpy-style broadcasting.
pub fn galactic_longitude_arr(
    alpha: &Array1<f64>,
    delta: &Array1<f64>,
    cal: &GalacticCalibration,
) -> Result<Array1<f64>> {
    broadcast_map(alpha, delta, |a, d| galactic_longitude(a, d, cal))
}

/// Vectorized [`galactic_latitude`] with numpy-style broadcasting.
pub fn galactic_latitude_arr(
    alpha: &Array1<f64>,
    delta: &Array1<f64>,
    cal: &GalacticCalibration,
) -> Result<Array1<f64>> {
    broadcast_map(alpha, delta, |a, d| galactic_latitude(a, d, cal))
}

/// Apply `f` elementwise over `a` and `b`, broadcasting a length-1 side.
fn broadcast_map<F: Fn(f64, f64) -> f64>(
    a: &Array1<f64>,
    b: &Array1<f64>,
    f: F,
) -> Result<Array1<f64>> {
    let n = match (a.len(), b.len()) {
        (x, y) if x == y => x,
        (_, 1) => a.len(),
        (1, _) => b.len(),
        (x, y) => {
            return Err(HaloError::ShapeMismatch(format!(
                "cannot broadcast arrays of length {x} and {y}"
            )))
        }
    };
    let pick = |arr: &Array1<f64>, i: usize| if arr.len() == 1 { arr[0] } else { arr[i] };
    Ok(Array1::from_iter((0..n).map(|i| f(pick(a, i), pick(b, i)))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_observer_radius_at_zero_distance_is_r0() {
        for &psi in &[0.0, 0.3, FRAC_PI_2, PI] {
            assert_relative_eq!(observer_radius(0.0, psi, 8.5), 8.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_observer_radius_towards_center() {
        // Looking straight at the galactic center, 8.5 kpc out: we hit it
        assert_relative_eq!(observer_radius(8.5, 0.0, 8.5), 0.0, epsilon = 1e-6);
        // and 1 kpc short of it we are 1 kpc away
        assert_relative_eq!(observer_radius(7.5, 0.0, 8.5), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_observer_radius_degenerate_angle_is_not_nan() {
        // x == r0 at psi == 0 sits exactly on the center; rounding can make
        // the radicand slightly negative
        let r = observer_radius(8.5, 0.0, 8.5);
        assert!(r.is_finite() && r >= 0.0);
    }

    #[test]
    fn test_north_galactic_pole_has_latitude_pi_over_two() {
        let cal = GalacticCalibration::default();
        let b = galactic_latitude(cal.alpha0, cal.delta0, &cal);
        assert_relative_eq!(b, FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_antipode_of_pole_has_latitude_minus_pi_over_two() {
        let cal = GalacticCalibration::default();
        let b = galactic_latitude(cal.alpha0 + PI, -cal.delta0, &cal);
        assert_relative_eq!(b, -FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_longitude_broadcasts_scalar_declination() {
        let cal = GalacticCalibration::default();
        let alpha = array![0.0, 0.5, 1.0, 1.5, 2.0];
        let delta = array![0.3];

        let l = galactic_longitude_arr(&alpha, &delta, &cal).unwrap();
        assert_eq!(l.len(), 5);
        for (i, &a) in alpha.iter().enumerate() {
            assert_relative_eq!(l[i], galactic_longitude(a, 0.3, &cal));
        }
    }

    #[test]
    fn test_latitude_broadcasts_scalar_ascension() {
        let cal = GalacticCalibration::default();
        let alpha = array![1.2];
        let delta = array![-0.5, 0.0, 0.5];

        let b = galactic_latitude_arr(&alpha, &delta, &cal).unwrap();
        assert_eq!(b.len(), 3);
        for (i, &d) in delta.iter().enumerate() {
            assert_relative_eq!(b[i], galactic_latitude(1.2, d, &cal));
        }
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let cal = GalacticCalibration::default();
        let err =
            galactic_longitude_arr(&array![0.0, 1.0], &array![0.0, 1.0, 2.0], &cal).unwrap_err();
        assert!(matches!(err, HaloError::ShapeMismatch(_)));
    }
}
