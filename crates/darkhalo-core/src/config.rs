// =============================================================================
// Halo Configuration
// =============================================================================
//
// Loading and validating the parameter mapping that the halo builder
// consumes. This is the boundary of the numeric core: everything inside
// `halo` and `profiles` receives an already-validated `HaloConfig` and does
// no I/O of its own.
//
// The file layout mirrors the upstream YAML: a family `name` plus one
// sub-table per family, and the shared geometry/calibration fields:
//
//     name: nfw
//     nfw:
//       concentration: 12.0
//       rhos: 0.4
//       citation: "arXiv:astro-ph/9508025"
//     virial_radius: 240.0
//     minimal_distance: 0.1
//     local_density: 1.05
//     local_distance: 8.5
//
// Any field can be overridden from the environment with the `DARKHALO__`
// prefix, e.g. `DARKHALO__LOCAL_DISTANCE=8.2`.
//
// =============================================================================

use std::path::Path;

use serde::Deserialize;

use crate::error::{HaloError, Result};

/// NFW family parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NfwConfig {
    /// Halo concentration; the scale radius is `virial_radius / concentration`.
    pub concentration: f64,
    /// Scale density, in 10^7 M_sol / kpc^3.
    pub rhos: f64,
    /// Paper to cite when using this profile.
    pub citation: String,
}

impl Default for NfwConfig {
    fn default() -> Self {
        Self {
            concentration: 12.0,
            rhos: 0.4,
            citation: "arXiv:astro-ph/9508025".to_string(),
        }
    }
}

/// Einasto family parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EinastoConfig {
    /// Scale radius (where the log-slope is -2), in kpc.
    pub rm2: f64,
    /// Scale density, in 10^7 M_sol / kpc^3.
    pub rhom2: f64,
    /// Shape parameter.
    pub alpha: f64,
    /// Paper to cite when using this profile.
    pub citation: String,
}

impl Default for EinastoConfig {
    fn default() -> Self {
        Self {
            rm2: 20.0,
            rhom2: 0.06,
            alpha: 0.17,
            citation: "1965TrAlm...5...87E".to_string(),
        }
    }
}

/// Burkert family parameters.
///
/// The core radius and central density are fixed to the literature fit
/// (see `profiles::{BURKERT_RS, BURKERT_RHO0}`), so there is nothing
/// configurable here beyond the citation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BurkertConfig {
    /// Paper to cite when using this profile.
    pub citation: String,
}

impl Default for BurkertConfig {
    fn default() -> Self {
        Self {
            citation: "arXiv:astro-ph/9504041".to_string(),
        }
    }
}

/// The full halo configuration handed to [`crate::Halo::new`].
///
/// The `Default` is a Milky-Way-like NFW setup; construct directly or load
/// from a file with [`HaloConfig::from_file`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HaloConfig {
    /// Selected family: `"nfw"`, `"einasto"` or `"burkert"`.
    pub name: String,
    pub nfw: NfwConfig,
    pub einasto: EinastoConfig,
    pub burkert: BurkertConfig,
    /// Outer integration bound, in kpc.
    pub virial_radius: f64,
    /// Inner integration bound, in kpc. Must be strictly below `virial_radius`.
    pub minimal_distance: f64,
    /// Density imposed at `local_distance`, in 10^7 M_sol / kpc^3.
    pub local_density: f64,
    /// Reference radius for the calibration (our distance to the galactic
    /// center), in kpc.
    pub local_distance: f64,
}

impl Default for HaloConfig {
    fn default() -> Self {
        Self {
            name: "nfw".to_string(),
            nfw: NfwConfig::default(),
            einasto: EinastoConfig::default(),
            burkert: BurkertConfig::default(),
            virial_radius: 240.0,
            minimal_distance: 0.1,
            // 1.05 x 10^7 M_sol / kpc^3 is roughly 0.4 GeV / cm^3
            local_density: 1.05,
            local_distance: 8.5,
        }
    }
}

impl HaloConfig {
    /// Load a configuration file, overlaying `DARKHALO__*` environment
    /// variables on top of it. Nested fields use `__` as a separator, e.g.
    /// `DARKHALO__NFW__CONCENTRATION=15`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("DARKHALO").separator("__"))
            .build()?;
        let cfg: Self = cfg.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the configuration for physical consistency.
    ///
    /// # Errors
    /// * [`HaloError::Unphysical`] when `minimal_distance >= virial_radius`
    /// * [`HaloError::InvalidValue`] for non-positive distances or densities
    pub fn validate(&self) -> Result<()> {
        if self.minimal_distance >= self.virial_radius {
            return Err(HaloError::Unphysical(
                "inner radius of the halo must be smaller than the outer one!".to_string(),
            ));
        }
        for (field, value) in [
            ("virial_radius", self.virial_radius),
            ("minimal_distance", self.minimal_distance),
            ("local_density", self.local_density),
            ("local_distance", self.local_distance),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(HaloError::InvalidValue(format!(
                    "{field} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Citation for the selected family, if the name is recognized.
    pub fn citation(&self) -> Option<&str> {
        match self.name.as_str() {
            "nfw" => Some(&self.nfw.citation),
            "einasto" => Some(&self.einasto.citation),
            "burkert" => Some(&self.burkert.citation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        HaloConfig::default().validate().unwrap();
    }

    #[test]
    fn test_inverted_radii_are_unphysical() {
        let mut cfg = HaloConfig::default();
        cfg.minimal_distance = cfg.virial_radius;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            HaloError::Unphysical(_)
        ));
    }

    #[test]
    fn test_negative_density_is_invalid() {
        let mut cfg = HaloConfig::default();
        cfg.local_density = -0.4;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            HaloError::InvalidValue(_)
        ));
    }

    #[test]
    fn test_citation_follows_selected_family() {
        let mut cfg = HaloConfig::default();
        assert_eq!(cfg.citation(), Some("arXiv:astro-ph/9508025"));
        cfg.name = "burkert".to_string();
        assert_eq!(cfg.citation(), Some("arXiv:astro-ph/9504041"));
        cfg.name = "isothermal".to_string();
        assert_eq!(cfg.citation(), None);
    }
}
