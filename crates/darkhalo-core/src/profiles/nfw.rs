// =============================================================================
// NFW Profile
// =============================================================================
//
// Navarro-Frenk-White density profile (arXiv:astro-ph/9508025):
//
//     rho(r) = rhos / [ (r/rs) * (1 + r/rs)^2 ]
//
// The canonical cuspy CDM profile: rho ~ r^-1 near the center and r^-3 far
// out. At the scale radius rho(rs) = rhos / 4.
//
// =============================================================================

use ndarray::Array1;

/// NFW density at radius `r` (kpc).
///
/// # Arguments
/// * `r` - Radius to evaluate at, in kpc
/// * `rs` - Scale radius, in kpc
/// * `rhos` - Scale density, in 10^7 M_sol / kpc^3
///
/// # Returns
/// Density in 10^7 M_sol / kpc^3
pub fn nfw_rho(r: f64, rs: f64, rhos: f64) -> f64 {
    rhos / ((r / rs) * (1. + r / rs).powi(2))
}

/// Vectorized [`nfw_rho`]: evaluates at every radius in `r`.
pub fn nfw_rho_arr(r: &Array1<f64>, rs: f64, rhos: f64) -> Array1<f64> {
    r.mapv(|ri| nfw_rho(ri, rs, rhos))
}
