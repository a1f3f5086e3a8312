//! Temperature dependence of the refractive index.
//!
//! Uses the Schott model for the absolute temperature coefficient
//! $dn_{abs}/dT$:
//!
//! $$
//! \frac{dn_{abs}}{dT} = \frac{n^2 - 1}{2n}\left(D_0 + 2D_1\Delta T + 3D_2\Delta T^2
//!     + \frac{E_0 + 2E_1\Delta T}{\lambda^2 - \lambda_{tk}^2}\right)
//! $$
//!
//! with $\Delta T = T - T_0$. The reference temperature $T_0$ is passed in
//! by the caller; catalogs are usually measured at 20 °C or 25 °C.

use serde::{Deserialize, Serialize};

use crate::error::{GlassError, Result};

/// Number of thermal coefficients.
pub const THERMAL_COEFFICIENTS: usize = 6;

/// Reference temperature (°C) used when none is configured.
pub const DEFAULT_REFERENCE_TEMPERATURE: f64 = 25.0;

/// Thermal coefficients in catalog order: D0, D1, D2, E0, E1, λtk.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThermalCoefficients {
    pub d0: f64,
    pub d1: f64,
    pub d2: f64,
    pub e0: f64,
    pub e1: f64,
    /// Effective resonance wavelength (µm).
    pub ltk: f64,
}

impl ThermalCoefficients {
    pub fn from_array(values: [f64; THERMAL_COEFFICIENTS]) -> Self {
        let [d0, d1, d2, e0, e1, ltk] = values;
        Self { d0, d1, d2, e0, e1, ltk }
    }

    pub fn to_array(&self) -> [f64; THERMAL_COEFFICIENTS] {
        [self.d0, self.d1, self.d2, self.e0, self.e1, self.ltk]
    }

    /// Overwrite a coefficient by catalog position.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let slot = match index {
            0 => &mut self.d0,
            1 => &mut self.d1,
            2 => &mut self.d2,
            3 => &mut self.e0,
            4 => &mut self.e1,
            5 => &mut self.ltk,
            _ => {
                return Err(GlassError::CoefficientIndex {
                    index,
                    capacity: THERMAL_COEFFICIENTS,
                })
            }
        };
        *slot = value;
        Ok(())
    }

    /// $dn_{abs}/dT$ for a glass of index `n` at `lambda` (µm), evaluated at
    /// `temperature` relative to `reference_temperature`.
    pub fn dn_dt_abs(&self, n: f64, lambda: f64, temperature: f64, reference_temperature: f64) -> f64 {
        let dt = temperature - reference_temperature;
        let bracket = self.d0
            + 2.0 * self.d1 * dt
            + 3.0 * self.d2 * dt * dt
            + (self.e0 + 2.0 * self.e1 * dt) / (lambda * lambda - self.ltk * self.ltk);
        (n * n - 1.0) / (2.0 * n) * bracket
    }
}
