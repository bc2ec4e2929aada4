// =============================================================================
// Burkert Profile
// =============================================================================
//
// Burkert density profile (arXiv:astro-ph/9504041):
//
//     rho(r) = rho0 * rs^3 / [ (r + rs) * (r^2 + rs^2) ]
//
// A cored profile: rho(0) = rho0 is finite, unlike NFW. At the core radius
// rho(rs) = rho0 / 4. Generally gives good fits to rotation curves.
//
// =============================================================================

use ndarray::Array1;

/// Core radius fixed to the literature fit of the Milky Way halo, in kpc.
pub const BURKERT_RS: f64 = 7.2;

/// Central density for the literature fit, in 10^7 M_sol / kpc^3.
pub const BURKERT_RHO0: f64 = 0.48;

/// Burkert density at radius `r` (kpc).
///
/// # Arguments
/// * `r` - Radius to evaluate at, in kpc
/// * `rs` - Core radius, in kpc
/// * `rho0` - Central density, in 10^7 M_sol / kpc^3
///
/// # Returns
/// Density in 10^7 M_sol / kpc^3
pub fn burkert_rho(r: f64, rs: f64, rho0: f64) -> f64 {
    rho0 * rs.powi(3) / ((r + rs) * (r.powi(2) + rs.powi(2)))
}

/// Vectorized [`burkert_rho`]: evaluates at every radius in `r`.
pub fn burkert_rho_arr(r: &Array1<f64>, rs: f64, rho0: f64) -> Array1<f64> {
    r.mapv(|ri| burkert_rho(ri, rs, rho0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quarter_central_density_at_core_radius() {
        // rho(rs) = rho0 * rs^3 / (2rs * 2rs^2) = rho0 / 4
        assert_relative_eq!(burkert_rho(7.2, 7.2, 0.48), 0.48 / 4.0, epsilon = 1e-14);
    }

    #[test]
    fn test_finite_at_center() {
        assert_relative_eq!(burkert_rho(0.0, 7.2, 0.48), 0.48, epsilon = 1e-14);
    }

    #[test]
    fn test_positive_everywhere() {
        for &r in &[0.0, 0.1, 7.2, 50.0, 250.0] {
            assert!(burkert_rho(r, BURKERT_RS, BURKERT_RHO0) > 0.0);
        }
    }
}
