// =============================================================================
// Halo Model
// =============================================================================
//
// Building and evaluating a fitted dark-matter halo.
//
// THE BIG PICTURE
// ---------------
// A raw density family (NFW / Einasto / Burkert) has an arbitrary native
// normalization. We pin it to observation by a single multiplicative
// calibration:
//
//     scaling = local_density / rho_raw(local_distance)
//
// so that the scaled profile reproduces the configured local dark-matter
// density exactly at our distance from the galactic center. The total mass
// then follows by integrating a spherical shell over the configured radius
// interval:
//
//     M = 4 pi * int_{r_min}^{r_vir} r^2 rho_raw(r) * scaling dr
//
// Everything derived (mass, volume, average density, local density) is
// computed once at construction and cached; `rho` and `rho2` afterwards are
// pure lookups of the chosen kernel and the cached scaling factor. No
// re-integration ever happens on repeated calls.
//
// =============================================================================

use std::f64::consts::PI;

use ndarray::Array1;
use tracing::{debug, info};

use crate::config::HaloConfig;
use crate::error::{HaloError, Result};
use crate::profiles::Profile;
use crate::quadrature::{integrate, QuadratureConfig};
use crate::units;

/// A fitted dark-matter halo.
///
/// Built exactly once from a [`HaloConfig`]; immutable afterwards, so shared
/// read-only use across threads is fine.
#[derive(Debug, Clone)]
pub struct Halo {
    profile: Profile,
    scaling: f64,
    total_mass: f64,
    total_mass_err: f64,
    volume: f64,
    avg_dens: f64,
    loc_dens: f64,
}

impl Halo {
    /// Build the halo model described by `config`.
    ///
    /// # Errors
    /// * [`HaloError::UnknownModel`] - the configured family is not supported
    /// * [`HaloError::Unphysical`] - inner radius not strictly below the
    ///   virial radius
    /// * [`HaloError::IntegrationFailed`] - the mass integral did not
    ///   converge
    pub fn new(config: &HaloConfig) -> Result<Self> {
        info!("Building the halo object");
        config.validate()?;

        let profile = Profile::resolve(config)?;
        info!("Building a {} halo", profile.name());
        if let Some(citation) = config.citation() {
            info!("Please cite the original paper when using this profile: {citation}");
        }

        // Calibrate the raw kernel against the configured local density.
        // Computed once; every later evaluation reuses it.
        let scaling = config.local_density / profile.density(config.local_distance);

        debug!("Integrating the halo...");
        let integrand = |r: f64| r * r * profile.density(r) * scaling;
        let integral = integrate(
            integrand,
            config.minimal_distance,
            config.virial_radius,
            &QuadratureConfig::default(),
        )?;
        debug!(
            evaluations = integral.evaluations,
            error = integral.error,
            "Finished the integration of the halo"
        );

        // The error estimate carries the same 4 pi factor as the mass itself.
        let total_mass = 4. * PI * integral.value;
        let total_mass_err = 4. * PI * integral.error;
        let outer_vol = 4. * PI * config.virial_radius.powi(3) / 3.;
        let inner_vol = 4. * PI * config.minimal_distance.powi(3) / 3.;
        // Gates the division below; validate() already checked the radii,
        // but this is the quantity actually divided by.
        if outer_vol <= inner_vol {
            return Err(HaloError::Unphysical(
                "inner radius of the halo must be smaller than the outer one!".to_string(),
            ));
        }
        let volume = outer_vol - inner_vol;
        let avg_dens = total_mass / volume;
        let loc_dens = profile.density(config.local_distance) * scaling;
        info!("Done");

        Ok(Self {
            profile,
            scaling,
            total_mass,
            total_mass_err,
            volume,
            avg_dens,
            loc_dens,
        })
    }

    /// Calibrated density at radius `r` (kpc), in 10^7 M_sol / kpc^3.
    pub fn rho(&self, r: f64) -> f64 {
        self.profile.density(r) * self.scaling
    }

    /// Vectorized [`Halo::rho`].
    pub fn rho_arr(&self, r: &Array1<f64>) -> Array1<f64> {
        self.profile.density_arr(r) * self.scaling
    }

    /// Calibrated density squared at radius `r`. Literally `rho(r)^2`, never
    /// an independently fitted squared profile.
    pub fn rho2(&self, r: f64) -> f64 {
        self.rho(r).powi(2)
    }

    /// Vectorized [`Halo::rho2`].
    pub fn rho2_arr(&self, r: &Array1<f64>) -> Array1<f64> {
        self.rho_arr(r).mapv(|d| d * d)
    }

    /// Total mass of the halo between the configured radii, in 10^7 M_sol.
    pub fn mass(&self) -> f64 {
        self.total_mass
    }

    /// Numerical error estimate of the mass integral.
    pub fn mass_error(&self) -> f64 {
        self.total_mass_err
    }

    /// The halo's volume in kpc^3.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// The average density in 10^7 M_sol / kpc^3.
    pub fn avg_density(&self) -> f64 {
        self.avg_dens
    }

    /// The local dark matter density in 10^7 M_sol / kpc^3. Equals the
    /// configured value by construction of the scaling factor.
    pub fn local_density(&self) -> f64 {
        self.loc_dens
    }

    /// The local dark matter density in GeV / cm^3.
    pub fn local_density_gev(&self) -> f64 {
        units::density_to_gev_cm3(self.loc_dens)
    }

    /// The resolved profile this halo was built from.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HaloConfig;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn nfw_config() -> HaloConfig {
        HaloConfig::default()
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let mut cfg = nfw_config();
        cfg.name = "moore".to_string();
        assert!(matches!(
            Halo::new(&cfg).unwrap_err(),
            HaloError::UnknownModel(_)
        ));
    }

    #[test]
    fn test_inverted_radii_are_rejected() {
        let mut cfg = nfw_config();
        cfg.minimal_distance = cfg.virial_radius;
        assert!(matches!(
            Halo::new(&cfg).unwrap_err(),
            HaloError::Unphysical(_)
        ));
    }

    #[test]
    fn test_local_density_is_calibrated_exactly() {
        // Independent of the integration: the scaling factor is defined so
        // that rho(local_distance) == local_density
        for name in ["nfw", "einasto", "burkert"] {
            let mut cfg = nfw_config();
            cfg.name = name.to_string();
            let halo = Halo::new(&cfg).unwrap();
            assert_relative_eq!(
                halo.rho(cfg.local_distance),
                cfg.local_density,
                epsilon = 1e-12
            );
            assert_relative_eq!(halo.local_density(), cfg.local_density, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rho2_is_the_square_of_rho() {
        let halo = Halo::new(&nfw_config()).unwrap();
        for &r in &[0.5, 8.5, 50.0, 200.0] {
            assert_eq!(halo.rho2(r), halo.rho(r).powi(2));
        }
        let r = array![0.5, 8.5, 50.0, 200.0];
        let rho = halo.rho_arr(&r);
        let rho2 = halo.rho2_arr(&r);
        for i in 0..r.len() {
            assert_eq!(rho2[i], rho[i] * rho[i]);
        }
    }

    #[test]
    fn test_average_density_round_trips_mass() {
        let halo = Halo::new(&nfw_config()).unwrap();
        assert_relative_eq!(
            halo.avg_density() * halo.volume(),
            halo.mass(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_nfw_mass_matches_closed_form() {
        // NFW has an analytic enclosed mass:
        //   M(a, b) = 4 pi rhos rs^3 [ ln((rs+r)/rs) + rs/(rs+r) ]_a^b
        let cfg = nfw_config();
        let halo = Halo::new(&cfg).unwrap();

        let rs = cfg.virial_radius / cfg.nfw.concentration;
        let scaling = cfg.local_density / crate::profiles::nfw_rho(cfg.local_distance, rs, cfg.nfw.rhos);
        let rhos = cfg.nfw.rhos * scaling;
        let shell = |r: f64| ((rs + r) / rs).ln() + rs / (rs + r);
        let exact =
            4. * PI * rhos * rs.powi(3) * (shell(cfg.virial_radius) - shell(cfg.minimal_distance));

        assert_relative_eq!(halo.mass(), exact, max_relative = 1e-7);
        assert!(halo.mass_error() >= 0.0);
    }

    #[test]
    fn test_mass_error_is_scaled_like_the_mass() {
        // Rerun the builder's integral directly: the recorded error estimate
        // must carry the same 4 pi shell factor as the mass, not the raw
        // quadrature error
        let cfg = nfw_config();
        let halo = Halo::new(&cfg).unwrap();

        let profile = Profile::resolve(&cfg).unwrap();
        let scaling = cfg.local_density / profile.density(cfg.local_distance);
        let integral = integrate(
            |r| r * r * profile.density(r) * scaling,
            cfg.minimal_distance,
            cfg.virial_radius,
            &QuadratureConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(halo.mass(), 4. * PI * integral.value, max_relative = 1e-14);
        assert_relative_eq!(
            halo.mass_error(),
            4. * PI * integral.error,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_volume_is_a_spherical_shell() {
        let cfg = nfw_config();
        let halo = Halo::new(&cfg).unwrap();
        let expected =
            4. * PI / 3. * (cfg.virial_radius.powi(3) - cfg.minimal_distance.powi(3));
        assert_relative_eq!(halo.volume(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_local_density_gev_is_of_canonical_size() {
        let halo = Halo::new(&nfw_config()).unwrap();
        // 1.05 internal units ~ 0.4 GeV/cm^3
        let gev = halo.local_density_gev();
        assert!(gev > 0.35 && gev < 0.45, "got {gev}");
    }

    #[test]
    fn test_einasto_uses_configured_shape_parameter() {
        let mut cfg_a = nfw_config();
        cfg_a.name = "einasto".to_string();
        let mut cfg_b = cfg_a.clone();
        cfg_b.einasto.alpha = 0.7;

        let halo_a = Halo::new(&cfg_a).unwrap();
        let halo_b = Halo::new(&cfg_b).unwrap();
        // Both pass through the calibration point but differ away from it
        assert_relative_eq!(
            halo_a.rho(cfg_a.local_distance),
            halo_b.rho(cfg_b.local_distance),
            epsilon = 1e-12
        );
        assert!((halo_a.rho(2.0) - halo_b.rho(2.0)).abs() > 1e-6);
    }
}
