// =============================================================================
// Darkhalo Core Library
// =============================================================================
//
// This is the entry point for the halo-modeling library used by the
// neutrino-flux calculation. All the mathematical heavy-lifting happens here.
//
// STRUCTURE:
// ----------
// The library is organized into modules, each handling a specific concern:
//
//   - profiles:   Halo density families (NFW, Einasto, Burkert)
//   - halo:       Building a fitted halo model and evaluating it
//   - quadrature: Adaptive numerical integration (Gauss-Kronrod)
//   - coords:     Astronomical coordinate transforms
//   - config:     Halo configuration loading and validation
//   - units:      Unit conventions and conversions
//   - error:      Error types used throughout the library
//
// FOR MAINTAINERS:
// ----------------
// When adding new functionality:
//   1. Add it to the appropriate module (or create a new one)
//   2. Write tests in that module (see existing tests for examples)
//   3. Re-export public items here so users can access them easily
//
// =============================================================================

// Declare our modules - each is in its own file or folder
pub mod config;
pub mod coords;
pub mod error;
pub mod halo;
pub mod profiles;
pub mod quadrature;
pub mod units;

// Re-export commonly used items at the top level for convenience
// Users can write `use darkhalo_core::Halo` instead of
// `use darkhalo_core::halo::Halo`
pub use config::{BurkertConfig, EinastoConfig, HaloConfig, NfwConfig};
pub use coords::{galactic_latitude, galactic_longitude, observer_radius, GalacticCalibration};
pub use error::{HaloError, Result};
pub use halo::Halo;
pub use profiles::Profile;
pub use quadrature::{integrate, QuadratureConfig, QuadratureResult};
