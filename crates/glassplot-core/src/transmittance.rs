//! Measured internal transmittance and its thickness-corrected interpolation.
//!
//! A catalog lists internal transmittance $T_i$ at wavelengths $\lambda_i$
//! for a reference sample thickness $t_{ref}$. By the Beer–Lambert law the
//! transmittance of a sample of thickness $t$ is
//!
//! $$ T_i' = T_i^{\,t / t_{ref}} $$
//!
//! The scaled samples are fitted once with a natural cubic spline
//! ([`CubicSpline`]) and the resulting [`TransmittanceCurve`] can then be
//! queried at any number of wavelengths.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GlassError, Result};
use crate::spline::CubicSpline;

/// Measured transmittance samples.
///
/// Wavelength, transmittance and thickness are stored as three parallel
/// sequences of equal length. The first thickness is the reference
/// thickness used for scaling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransmittanceColumns")]
pub struct TransmittanceData {
    wavelengths: Vec<f64>,
    transmittances: Vec<f64>,
    thicknesses: Vec<f64>,
}

/// Serialised form, checked by [`TransmittanceData::from_columns`].
#[derive(Deserialize)]
struct TransmittanceColumns {
    #[serde(default)]
    wavelengths: Vec<f64>,
    #[serde(default)]
    transmittances: Vec<f64>,
    #[serde(default)]
    thicknesses: Vec<f64>,
}

impl TryFrom<TransmittanceColumns> for TransmittanceData {
    type Error = GlassError;

    fn try_from(columns: TransmittanceColumns) -> Result<Self> {
        Self::from_columns(columns.wavelengths, columns.transmittances, columns.thicknesses)
    }
}

fn check_lengths(wavelengths: &[f64], transmittances: &[f64], thicknesses: &[f64]) -> Result<()> {
    for found in [transmittances.len(), thicknesses.len()] {
        if found != wavelengths.len() {
            return Err(GlassError::LengthMismatch {
                expected: wavelengths.len(),
                found,
            });
        }
    }
    Ok(())
}

impl TransmittanceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the three parallel sequences.
    pub fn from_columns(
        wavelengths: Vec<f64>,
        transmittances: Vec<f64>,
        thicknesses: Vec<f64>,
    ) -> Result<Self> {
        check_lengths(&wavelengths, &transmittances, &thicknesses)?;
        Ok(Self {
            wavelengths,
            transmittances,
            thicknesses,
        })
    }

    /// Append one measurement: wavelength (µm), transmittance (0–1), thickness (mm).
    pub fn push(&mut self, wavelength: f64, transmittance: f64, thickness: f64) {
        self.wavelengths.push(wavelength);
        self.transmittances.push(transmittance);
        self.thicknesses.push(thickness);
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn transmittances(&self) -> &[f64] {
        &self.transmittances
    }

    pub fn thicknesses(&self) -> &[f64] {
        &self.thicknesses
    }

    /// Thickness (mm) the transmittance values were measured at.
    pub fn reference_thickness(&self) -> Option<f64> {
        self.thicknesses.first().copied()
    }

    /// Fit a curve for a sample of `thickness` mm.
    ///
    /// # Errors
    /// [`GlassError::InsufficientData`] when no samples exist,
    /// [`GlassError::InvalidThickness`] when either thickness is not a
    /// positive finite number, [`GlassError::LengthMismatch`] when the
    /// columns disagree in length, and [`GlassError::NonMonotonic`] when the
    /// wavelengths are not strictly increasing.
    pub fn curve(&self, thickness: f64) -> Result<TransmittanceCurve> {
        check_lengths(&self.wavelengths, &self.transmittances, &self.thicknesses)?;
        let reference = self.reference_thickness().ok_or_else(|| {
            GlassError::InsufficientData("no transmittance data".to_string())
        })?;
        for t in [reference, thickness] {
            if !(t.is_finite() && t > 0.0) {
                return Err(GlassError::InvalidThickness(t));
            }
        }

        let exponent = thickness / reference;
        let scaled: Vec<f64> = self
            .transmittances
            .iter()
            .map(|&t| t.powf(exponent))
            .collect();

        if scaled.len() == 1 {
            return Ok(TransmittanceCurve::Constant(scaled[0]));
        }

        debug!(
            "Fitting transmittance spline over {} samples (thickness {} mm, reference {} mm)",
            scaled.len(),
            thickness,
            reference
        );
        let spline = CubicSpline::new(self.wavelengths.clone(), scaled)?;
        Ok(TransmittanceCurve::Spline(spline))
    }
}

/// Internal transmittance as a function of wavelength for one thickness.
#[derive(Debug, Clone)]
pub enum TransmittanceCurve {
    /// Only one sample was measured; its value holds at every wavelength.
    Constant(f64),
    Spline(CubicSpline),
}

impl TransmittanceCurve {
    /// Transmittance at `lambda` (µm).
    pub fn evaluate(&self, lambda: f64) -> f64 {
        match self {
            TransmittanceCurve::Constant(value) => *value,
            TransmittanceCurve::Spline(spline) => spline.evaluate(lambda),
        }
    }

    /// Transmittance at each wavelength (µm), in input order.
    pub fn evaluate_many(&self, lambdas: &[f64]) -> Vec<f64> {
        lambdas.iter().map(|&lambda| self.evaluate(lambda)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> TransmittanceData {
        let mut data = TransmittanceData::new();
        for (lambda, t) in [(0.31, 0.29), (0.33, 0.70), (0.35, 0.90), (0.40, 0.992), (0.50, 0.998), (0.70, 0.999)] {
            data.push(lambda, t, 10.0);
        }
        data
    }

    #[test]
    fn test_reference_thickness_reproduces_samples() {
        let data = sample();
        let curve = data.curve(10.0).unwrap();
        for (lambda, t) in data.wavelengths().iter().zip(data.transmittances()) {
            assert_abs_diff_eq!(curve.evaluate(*lambda), *t, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_doubling_thickness_squares_samples() {
        let data = sample();
        let thin = data.curve(10.0).unwrap();
        let thick = data.curve(20.0).unwrap();
        for &lambda in data.wavelengths() {
            let t = thin.evaluate(lambda);
            assert_abs_diff_eq!(thick.evaluate(lambda), t * t, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_empty_data_is_insufficient() {
        let err = TransmittanceData::new().curve(10.0).unwrap_err();
        assert!(matches!(err, GlassError::InsufficientData(_)));
    }

    #[test]
    fn test_single_sample_is_constant() {
        let mut data = TransmittanceData::new();
        data.push(0.5, 0.81, 5.0);
        let curve = data.curve(10.0).unwrap();
        assert_abs_diff_eq!(curve.evaluate(0.3), 0.81 * 0.81, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.evaluate(1.2), 0.81 * 0.81, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_thickness() {
        let data = sample();
        assert_eq!(data.curve(0.0).unwrap_err(), GlassError::InvalidThickness(0.0));

        let mut zero_ref = TransmittanceData::new();
        zero_ref.push(0.4, 0.9, 0.0);
        zero_ref.push(0.5, 0.95, 0.0);
        assert_eq!(zero_ref.curve(10.0).unwrap_err(), GlassError::InvalidThickness(0.0));
    }

    #[test]
    fn test_columns_must_have_equal_length() {
        let result = TransmittanceData::from_columns(vec![0.4, 0.5], vec![0.9], vec![10.0, 10.0]);
        assert_eq!(
            result.unwrap_err(),
            GlassError::LengthMismatch { expected: 2, found: 1 }
        );
    }

    #[test]
    fn test_deserialize_checks_column_lengths() {
        let json = r#"{"wavelengths":[0.4,0.5,0.6],"transmittances":[0.9],"thicknesses":[10.0]}"#;
        let err = serde_json::from_str::<TransmittanceData>(json).unwrap_err();
        assert!(err.to_string().contains("length"), "{}", err);

        let json = r#"{"wavelengths":[0.4,0.5],"transmittances":[0.9,0.95],"thicknesses":[10.0,10.0]}"#;
        let data: TransmittanceData = serde_json::from_str(json).unwrap();
        assert_eq!(data.len(), 2);
        assert_abs_diff_eq!(data.curve(10.0).unwrap().evaluate(0.5), 0.95, epsilon = 1e-12);
    }
}
