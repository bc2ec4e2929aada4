// =============================================================================
// Einasto Profile
// =============================================================================
//
// Einasto density profile (Einasto 1965, TrAlm 5, 87):
//
//     rho(r) = rhom2 * exp( -(2/alpha) * ((r/rm2)^alpha - 1) )
//
// rm2 is the radius where the logarithmic slope equals -2, and by
// construction rho(rm2) = rhom2 for any shape parameter alpha.
//
// =============================================================================

use ndarray::Array1;

/// Einasto density at radius `r` (kpc).
///
/// # Arguments
/// * `r` - Radius to evaluate at, in kpc
/// * `rm2` - Scale radius, in kpc
/// * `rhom2` - Scale density, in 10^7 M_sol / kpc^3
/// * `alpha` - Shape parameter (dimensionless)
///
/// # Returns
/// Density in 10^7 M_sol / kpc^3
pub fn einasto_rho(r: f64, rm2: f64, rhom2: f64, alpha: f64) -> f64 {
    rhom2 * (-2. / alpha * ((r / rm2).powf(alpha) - 1.)).exp()
}

/// Vectorized [`einasto_rho`]: evaluates at every radius in `r`.
pub fn einasto_rho_arr(r: &Array1<f64>, rm2: f64, rhom2: f64, alpha: f64) -> Array1<f64> {
    r.mapv(|ri| einasto_rho(ri, rm2, rhom2, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_density_at_scale_radius_for_any_alpha() {
        for &alpha in &[0.1, 0.17, 0.5, 1.0] {
            assert_relative_eq!(einasto_rho(20.0, 20.0, 0.06, alpha), 0.06, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_positive_and_decreasing_outward() {
        let mut prev = f64::INFINITY;
        for &r in &[0.1, 1.0, 8.5, 50.0, 250.0] {
            let dens = einasto_rho(r, 20.0, 0.06, 0.17);
            assert!(dens > 0.0);
            assert!(dens < prev);
            prev = dens;
        }
    }
}
