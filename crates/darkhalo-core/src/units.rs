// =============================================================================
// Units
// =============================================================================
//
// Base unit convention used throughout this library:
//
//   Distance: kpc
//   Mass:     M_sol x 10^7
//   Density:  10^7 M_sol / kpc^3
//
// Downstream flux calculations work in particle-physics units, so we also
// carry the conversion to GeV / cm^3.
//
// =============================================================================

/// 1 kpc in cm.
pub const CM_PER_KPC: f64 = 3.085_677_581_491_367e21;

/// 1 solar mass in kg.
pub const KG_PER_SOLAR: f64 = 1.988_416e30;

/// 1 GeV/c^2 in kg.
pub const KG_PER_GEV: f64 = 1.782_661_92e-27;

/// 1 solar mass in GeV/c^2.
pub const GEV_PER_SOLAR: f64 = KG_PER_SOLAR / KG_PER_GEV;

/// Converts the internal density unit (10^7 M_sol / kpc^3) to GeV / cm^3.
///
/// Numerically ~0.3797, i.e. the canonical 0.4 GeV/cm^3 local dark matter
/// density is ~1.05 in internal units.
pub const GEV_CM3_PER_INTERNAL: f64 =
    1.0e7 * GEV_PER_SOLAR / (CM_PER_KPC * CM_PER_KPC * CM_PER_KPC);

/// Re-express a density from 10^7 M_sol / kpc^3 in GeV / cm^3.
pub fn density_to_gev_cm3(dens: f64) -> f64 {
    dens * GEV_CM3_PER_INTERNAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversion_factor_magnitude() {
        // Cross-check against the canonical local density:
        // 0.4 GeV/cm^3 ~ 1.05 x 10^7 M_sol / kpc^3
        assert_relative_eq!(GEV_CM3_PER_INTERNAL, 0.3797, epsilon = 1e-3);
        assert_relative_eq!(density_to_gev_cm3(1.05), 0.4, epsilon = 2e-3);
    }
}
