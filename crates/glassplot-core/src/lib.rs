//! # Glassplot Core
//!
//! Optical glass property evaluation. Given glass records read from a
//! manufacturer catalog, this crate computes refractive index dispersion,
//! Abbe numbers and partial dispersions, absolute thermal index change and
//! thickness-corrected internal transmittance.
//!
//! All operations are pure, synchronous functions of their inputs. Nothing
//! here reads files; catalog parsing and presentation live elsewhere.
//!
//! ## Modules
//!
//! - [`spectral_line`] — Named reference wavelengths (d, F, C, ...).
//! - [`dispersion`] — The Zemax and CODE V dispersion formulas.
//! - [`thermal`] — Schott model for $dn/dT$.
//! - [`spline`] — Natural cubic spline.
//! - [`transmittance`] — Measured transmittance and its interpolation.
//! - [`glass`] — Glass records and derived quantities.
//! - [`catalog`] — Catalog collections and glass maps.
//! - [`grid`] — Wavelength/temperature sampling.
//! - [`error`] — Error type.
//!
//! ## Example
//!
//! ```
//! use glassplot_core::dispersion::{DispersionCoefficients, DispersionFormula};
//! use glassplot_core::glass::Glass;
//!
//! let mut bk7 = Glass::new("N-BK7", "SCHOTT");
//! bk7.set_formula(DispersionFormula::Sellmeier1);
//! bk7.set_dispersion_coefficients(
//!     DispersionCoefficients::from_slice(&[
//!         1.039_612_12, 0.006_000_698_67,
//!         0.231_792_344, 0.020_017_914_4,
//!         1.010_469_45, 103.560_653,
//!     ])
//!     .unwrap(),
//! );
//! assert!((bk7.nd() - 1.5168).abs() < 1e-4);
//! ```

pub mod catalog;
pub mod dispersion;
pub mod error;
pub mod glass;
pub mod grid;
pub mod spectral_line;
pub mod spline;
pub mod thermal;
pub mod transmittance;

pub use catalog::{Catalog, CatalogSet, GlassMapPoint, GlassMapSeries};
pub use dispersion::{DispersionCoefficients, DispersionFormula, DispersionModel, FormulaFamily};
pub use error::{GlassError, Result};
pub use glass::{DerivedQuantity, Glass, GlassStatus};
pub use spectral_line::SpectralLine;
pub use thermal::{ThermalCoefficients, DEFAULT_REFERENCE_TEMPERATURE};
pub use transmittance::{TransmittanceCurve, TransmittanceData};
