//! Closed-form dispersion formulas.
//!
//! Each formula maps a wavelength $\lambda$ in micrometres and a coefficient
//! vector to a refractive index. Coefficients are consumed positionally in
//! the order the catalog formats list them.
//!
//! ## Zemax AGF family
//!
//! | Formula | Equation | Coefficients |
//! |---------|----------|--------------|
//! | Schott | $n^2 = a_0 + a_1\lambda^2 + a_2\lambda^{-2} + a_3\lambda^{-4} + a_4\lambda^{-6} + a_5\lambda^{-8}$ | 6 |
//! | Sellmeier1 | $n^2 - 1 = \sum_{i=1}^{3} K_i\lambda^2/(\lambda^2 - L_i)$ | $K_1, L_1, K_2, L_2, K_3, L_3$ |
//! | Herzberger | $n = A + BL + CL^2 + D\lambda^2 + E\lambda^4 + F\lambda^6$, $L = 1/(\lambda^2 - 0.028)$ | 6 |
//! | Sellmeier2 | $n^2 - 1 = A + B_1\lambda^2/(\lambda^2 - \lambda_1^2) + B_2/(\lambda^2 - \lambda_2^2)$ | $A, B_1, \lambda_1, B_2, \lambda_2$ |
//! | Conrady | $n = n_0 + A/\lambda + B/\lambda^{3.5}$ | 3 |
//! | Sellmeier3 | four Sellmeier1 terms | 8 |
//! | Handbook of Optics1 | $n^2 = A + B/(\lambda^2 - C) - D\lambda^2$ | 4 |
//! | Handbook of Optics2 | $n^2 = A + B\lambda^2/(\lambda^2 - C) - D\lambda^2$ | 4 |
//! | Sellmeier4 | $n^2 = A + B\lambda^2/(\lambda^2 - C) + D\lambda^2/(\lambda^2 - E)$ | 5 |
//! | Extended1 | Schott $+ a_6\lambda^{-10} + a_7\lambda^{-12}$ | 8 |
//! | Sellmeier5 | five Sellmeier1 terms | 10 |
//! | Extended2 | Schott $+ a_6\lambda^4 + a_7\lambda^6$ | 8 |
//!
//! ## CODE V family
//!
//! | Formula | Equation | Coefficients |
//! |---------|----------|--------------|
//! | Laurent | $n^2 = A_0 + A_1\lambda^2 + \sum_{k=1}^{10} A_{k+1}\lambda^{-2k}$ | 12 |
//! | Glass Manufacturer Laurent | Schott form | 6 |
//! | Glass Manufacturer Sellmeier | Sellmeier1 form | 6 |
//! | Standard Sellmeier | $n^2 - 1 = \sum_{i=1}^{6} B_i\lambda^2/(\lambda^2 - \lambda_i^2)$ | $B_1, \lambda_1, \ldots$ |
//! | Cauchy | $n = A + B\lambda^{-2} + C\lambda^{-4}$ | 3 |
//! | Hartman | $n = A + B/(\lambda - C)^{1.2}$ | 3 |
//!
//! No formula checks the glass's valid wavelength range: extrapolation is
//! permitted and may produce physically meaningless values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GlassError, Result};

/// Number of coefficient slots, enough for the largest formula.
pub const MAX_COEFFICIENTS: usize = 12;

/// Herzberger pole, $\lambda_0^2$ in µm².
const HERZBERGER_POLE: f64 = 0.028;

/// Hartmann exponent.
const HARTMAN_EXPONENT: f64 = 1.2;

/// Catalog format a formula originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaFamily {
    /// Zemax AGF catalogs.
    Zemax,
    /// CODE V XML catalogs.
    CodeV,
}

/// A dispersion formula selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DispersionFormula {
    #[default]
    Schott,
    Sellmeier1,
    Herzberger,
    Sellmeier2,
    Conrady,
    Sellmeier3,
    HandbookOfOptics1,
    HandbookOfOptics2,
    Sellmeier4,
    Extended1,
    Sellmeier5,
    Extended2,
    Laurent,
    GlassManufacturerLaurent,
    GlassManufacturerSellmeier,
    StandardSellmeier,
    Cauchy,
    Hartman,
    Unknown,
}

impl DispersionFormula {
    /// Every selector, AGF formulas first.
    pub const ALL: [DispersionFormula; 19] = [
        DispersionFormula::Schott,
        DispersionFormula::Sellmeier1,
        DispersionFormula::Herzberger,
        DispersionFormula::Sellmeier2,
        DispersionFormula::Conrady,
        DispersionFormula::Sellmeier3,
        DispersionFormula::HandbookOfOptics1,
        DispersionFormula::HandbookOfOptics2,
        DispersionFormula::Sellmeier4,
        DispersionFormula::Extended1,
        DispersionFormula::Sellmeier5,
        DispersionFormula::Extended2,
        DispersionFormula::Laurent,
        DispersionFormula::GlassManufacturerLaurent,
        DispersionFormula::GlassManufacturerSellmeier,
        DispersionFormula::StandardSellmeier,
        DispersionFormula::Cauchy,
        DispersionFormula::Hartman,
        DispersionFormula::Unknown,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            DispersionFormula::Schott => "Schott",
            DispersionFormula::Sellmeier1 => "Sellmeier1",
            DispersionFormula::Herzberger => "Herzberger",
            DispersionFormula::Sellmeier2 => "Sellmeier2",
            DispersionFormula::Conrady => "Conrady",
            DispersionFormula::Sellmeier3 => "Sellmeier3",
            DispersionFormula::HandbookOfOptics1 => "Handbook of Optics1",
            DispersionFormula::HandbookOfOptics2 => "Handbook of Optics2",
            DispersionFormula::Sellmeier4 => "Sellmeier4",
            DispersionFormula::Extended1 => "Extended1",
            DispersionFormula::Sellmeier5 => "Sellmeier5",
            DispersionFormula::Extended2 => "Extended2",
            DispersionFormula::Laurent => "Laurent",
            DispersionFormula::GlassManufacturerLaurent => "Glass Manufacturer Laurent",
            DispersionFormula::GlassManufacturerSellmeier => "Glass Manufacturer Sellmeier",
            DispersionFormula::StandardSellmeier => "Standard Sellmeier",
            DispersionFormula::Cauchy => "Cauchy",
            DispersionFormula::Hartman => "Hartman",
            DispersionFormula::Unknown => "Unknown",
        }
    }

    /// Catalog format the formula belongs to; `None` for [`Unknown`](Self::Unknown).
    pub const fn family(self) -> Option<FormulaFamily> {
        match self {
            DispersionFormula::Schott
            | DispersionFormula::Sellmeier1
            | DispersionFormula::Herzberger
            | DispersionFormula::Sellmeier2
            | DispersionFormula::Conrady
            | DispersionFormula::Sellmeier3
            | DispersionFormula::HandbookOfOptics1
            | DispersionFormula::HandbookOfOptics2
            | DispersionFormula::Sellmeier4
            | DispersionFormula::Extended1
            | DispersionFormula::Sellmeier5
            | DispersionFormula::Extended2 => Some(FormulaFamily::Zemax),
            DispersionFormula::Laurent
            | DispersionFormula::GlassManufacturerLaurent
            | DispersionFormula::GlassManufacturerSellmeier
            | DispersionFormula::StandardSellmeier
            | DispersionFormula::Cauchy
            | DispersionFormula::Hartman => Some(FormulaFamily::CodeV),
            DispersionFormula::Unknown => None,
        }
    }

    /// Number of leading coefficient slots the formula reads.
    pub const fn coefficient_count(self) -> usize {
        match self {
            DispersionFormula::Conrady | DispersionFormula::Cauchy | DispersionFormula::Hartman => 3,
            DispersionFormula::HandbookOfOptics1 | DispersionFormula::HandbookOfOptics2 => 4,
            DispersionFormula::Sellmeier2 | DispersionFormula::Sellmeier4 => 5,
            DispersionFormula::Schott
            | DispersionFormula::Sellmeier1
            | DispersionFormula::Herzberger
            | DispersionFormula::GlassManufacturerLaurent
            | DispersionFormula::GlassManufacturerSellmeier => 6,
            DispersionFormula::Sellmeier3
            | DispersionFormula::Extended1
            | DispersionFormula::Extended2 => 8,
            DispersionFormula::Sellmeier5 => 10,
            DispersionFormula::Laurent | DispersionFormula::StandardSellmeier => 12,
            DispersionFormula::Unknown => 0,
        }
    }

    /// Map the integer formula code of an AGF `NM` record.
    ///
    /// Codes 1–12 select a formula; anything else (including 13, which AGF
    /// writers use for unsupported formulas) yields [`Unknown`](Self::Unknown).
    pub fn from_agf_code(code: i32) -> Self {
        match code {
            1 => DispersionFormula::Schott,
            2 => DispersionFormula::Sellmeier1,
            3 => DispersionFormula::Herzberger,
            4 => DispersionFormula::Sellmeier2,
            5 => DispersionFormula::Conrady,
            6 => DispersionFormula::Sellmeier3,
            7 => DispersionFormula::HandbookOfOptics1,
            8 => DispersionFormula::HandbookOfOptics2,
            9 => DispersionFormula::Sellmeier4,
            10 => DispersionFormula::Extended1,
            11 => DispersionFormula::Sellmeier5,
            12 => DispersionFormula::Extended2,
            _ => DispersionFormula::Unknown,
        }
    }

    /// Inverse of [`from_agf_code`](Self::from_agf_code) for the Zemax family.
    pub fn agf_code(self) -> Option<i32> {
        if self.family() != Some(FormulaFamily::Zemax) {
            return None;
        }
        (1..=12).find(|&code| Self::from_agf_code(code) == self)
    }

    /// Refractive index at `lambda` (µm).
    ///
    /// Returns exactly 0 for [`Unknown`](Self::Unknown). Callers must treat
    /// 0 as "no formula"; use [`try_evaluate`](Self::try_evaluate) to get an
    /// error instead.
    pub fn evaluate(self, lambda: f64, coefficients: &DispersionCoefficients) -> f64 {
        let c = coefficients.as_slice();
        let l2 = lambda * lambda;
        match self {
            DispersionFormula::Schott | DispersionFormula::GlassManufacturerLaurent => {
                schott_series(lambda, c).sqrt()
            }
            DispersionFormula::Sellmeier1 | DispersionFormula::GlassManufacturerSellmeier => {
                (1.0 + sellmeier_terms(l2, &c[..6])).sqrt()
            }
            DispersionFormula::Herzberger => {
                let l = 1.0 / (l2 - HERZBERGER_POLE);
                c[0] + c[1] * l + c[2] * l * l + c[3] * l2 + c[4] * l2 * l2 + c[5] * l2 * l2 * l2
            }
            DispersionFormula::Sellmeier2 => {
                let n2 = 1.0
                    + c[0]
                    + c[1] * l2 / (l2 - c[2] * c[2])
                    + c[3] / (l2 - c[4] * c[4]);
                n2.sqrt()
            }
            DispersionFormula::Conrady => c[0] + c[1] / lambda + c[2] / lambda.powf(3.5),
            DispersionFormula::Sellmeier3 => (1.0 + sellmeier_terms(l2, &c[..8])).sqrt(),
            DispersionFormula::HandbookOfOptics1 => {
                (c[0] + c[1] / (l2 - c[2]) - c[3] * l2).sqrt()
            }
            DispersionFormula::HandbookOfOptics2 => {
                (c[0] + c[1] * l2 / (l2 - c[2]) - c[3] * l2).sqrt()
            }
            DispersionFormula::Sellmeier4 => {
                (c[0] + c[1] * l2 / (l2 - c[2]) + c[3] * l2 / (l2 - c[4])).sqrt()
            }
            DispersionFormula::Extended1 => {
                let n2 = schott_series(lambda, c) + c[6] * lambda.powi(-10) + c[7] * lambda.powi(-12);
                n2.sqrt()
            }
            DispersionFormula::Sellmeier5 => (1.0 + sellmeier_terms(l2, &c[..10])).sqrt(),
            DispersionFormula::Extended2 => {
                let n2 = schott_series(lambda, c) + c[6] * l2 * l2 + c[7] * l2 * l2 * l2;
                n2.sqrt()
            }
            DispersionFormula::Laurent => {
                let inverse: f64 = c[2..]
                    .iter()
                    .zip(1..)
                    .map(|(&a, k)| a * lambda.powi(-2 * k))
                    .sum();
                (c[0] + c[1] * l2 + inverse).sqrt()
            }
            DispersionFormula::StandardSellmeier => {
                let n2_minus_1: f64 = c
                    .chunks_exact(2)
                    .map(|pair| pair[0] * l2 / (l2 - pair[1] * pair[1]))
                    .sum();
                (1.0 + n2_minus_1).sqrt()
            }
            DispersionFormula::Cauchy => c[0] + c[1] / l2 + c[2] / (l2 * l2),
            DispersionFormula::Hartman => c[0] + c[1] / (lambda - c[2]).powf(HARTMAN_EXPONENT),
            DispersionFormula::Unknown => 0.0,
        }
    }

    /// Like [`evaluate`](Self::evaluate), but [`Unknown`](Self::Unknown) is an error.
    pub fn try_evaluate(self, lambda: f64, coefficients: &DispersionCoefficients) -> Result<f64> {
        match self {
            DispersionFormula::Unknown => Err(GlassError::UnknownFormula(self.name().to_string())),
            _ => Ok(self.evaluate(lambda, coefficients)),
        }
    }

    /// Evaluate at each wavelength, preserving order and length.
    pub fn evaluate_many(self, lambdas: &[f64], coefficients: &DispersionCoefficients) -> Vec<f64> {
        lambdas
            .iter()
            .map(|&lambda| self.evaluate(lambda, coefficients))
            .collect()
    }
}

/// $a_0 + a_1\lambda^2 + a_2\lambda^{-2} + \ldots + a_5\lambda^{-8}$, the common
/// core of the Schott-type power series.
fn schott_series(lambda: f64, c: &[f64]) -> f64 {
    c[0] + c[1] * lambda.powi(2)
        + c[2] * lambda.powi(-2)
        + c[3] * lambda.powi(-4)
        + c[4] * lambda.powi(-6)
        + c[5] * lambda.powi(-8)
}

/// $\sum K_i\lambda^2/(\lambda^2 - L_i)$ over interleaved `(K, L)` pairs.
fn sellmeier_terms(l2: f64, pairs: &[f64]) -> f64 {
    pairs
        .chunks_exact(2)
        .map(|pair| pair[0] * l2 / (l2 - pair[1]))
        .sum()
}

impl fmt::Display for DispersionFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DispersionFormula {
    type Err = GlassError;

    /// Accepts display names and their compact forms, ignoring case and
    /// whitespace: `"Handbook of Optics1"`, `"HandbookOfOptics1"` and
    /// `"handbookofoptics1"` are equivalent.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = normalise(s);
        DispersionFormula::ALL
            .into_iter()
            .find(|formula| normalise(formula.name()) == wanted)
            .ok_or_else(|| GlassError::UnknownFormula(s.to_string()))
    }
}

fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fixed-capacity dispersion coefficient storage.
///
/// Unused slots are zero. Slots past a formula's
/// [`coefficient_count`](DispersionFormula::coefficient_count) are ignored
/// by that formula.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DispersionCoefficients([f64; MAX_COEFFICIENTS]);

impl DispersionCoefficients {
    /// All-zero coefficients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy leading coefficients from a slice.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() > MAX_COEFFICIENTS {
            return Err(GlassError::CoefficientIndex {
                index: values.len() - 1,
                capacity: MAX_COEFFICIENTS,
            });
        }
        let mut data = [0.0; MAX_COEFFICIENTS];
        data[..values.len()].copy_from_slice(values);
        Ok(Self(data))
    }

    /// Coefficient at `index`, or `None` past the capacity.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Overwrite the coefficient at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let slot = self.0.get_mut(index).ok_or(GlassError::CoefficientIndex {
            index,
            capacity: MAX_COEFFICIENTS,
        })?;
        *slot = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; MAX_COEFFICIENTS]> for DispersionCoefficients {
    fn from(values: [f64; MAX_COEFFICIENTS]) -> Self {
        Self(values)
    }
}

/// A formula together with the coefficients it evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DispersionModel {
    pub formula: DispersionFormula,
    pub coefficients: DispersionCoefficients,
}

impl DispersionModel {
    pub fn new(formula: DispersionFormula, coefficients: DispersionCoefficients) -> Self {
        Self { formula, coefficients }
    }

    /// Refractive index at `lambda` (µm); 0 when the formula is unknown.
    pub fn index(&self, lambda: f64) -> f64 {
        self.formula.evaluate(lambda, &self.coefficients)
    }

    /// Refractive index at each wavelength (µm).
    pub fn index_many(&self, lambdas: &[f64]) -> Vec<f64> {
        self.formula.evaluate_many(lambdas, &self.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn coefficients(values: &[f64]) -> DispersionCoefficients {
        DispersionCoefficients::from_slice(values).unwrap()
    }

    #[test]
    fn test_every_formula_has_a_name() {
        for formula in DispersionFormula::ALL {
            assert!(!formula.name().is_empty(), "{:?} has an empty name", formula);
        }
        assert_eq!(DispersionFormula::Unknown.name(), "Unknown");
    }

    #[test]
    fn test_unknown_formula_evaluates_to_zero() {
        let c = coefficients(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        for lambda in [0.3, 0.5875618, 1.0, 2.5] {
            assert_eq!(DispersionFormula::Unknown.evaluate(lambda, &c), 0.0);
        }
        assert_eq!(
            DispersionFormula::Unknown.try_evaluate(0.5, &c),
            Err(GlassError::UnknownFormula("Unknown".into()))
        );
    }

    #[test]
    fn test_schott_matches_hand_computed_value() {
        // H-ZF52 at the d line.
        let c = coefficients(&[
            3.267_600_58,
            -2.053_845_66e-2,
            3.515_076_72e-2,
            7.701_513_48e-3,
            -9.081_398_17e-4,
            7.526_495_55e-5,
        ]);
        let n = DispersionFormula::Schott.evaluate(0.587_561_8, &c);
        assert_abs_diff_eq!(n, 1.846_665_98, epsilon = 1e-7);
        assert_eq!(n, DispersionFormula::GlassManufacturerLaurent.evaluate(0.587_561_8, &c));
    }

    #[test]
    fn test_sellmeier_variants_agree_on_shared_terms() {
        let pairs = [1.039_612_12, 0.006_000_698_67, 0.231_792_344, 0.020_017_914_4];
        let lambda: f64 = 0.55;
        let l2 = lambda * lambda;
        let expected =
            (1.0 + pairs[0] * l2 / (l2 - pairs[1]) + pairs[2] * l2 / (l2 - pairs[3])).sqrt();

        let c = coefficients(&pairs);
        for formula in [
            DispersionFormula::Sellmeier1,
            DispersionFormula::Sellmeier3,
            DispersionFormula::Sellmeier5,
            DispersionFormula::GlassManufacturerSellmeier,
        ] {
            assert_abs_diff_eq!(formula.evaluate(lambda, &c), expected, epsilon = 1e-12);
        }

        // Standard Sellmeier squares the resonance wavelengths.
        let standard = coefficients(&[pairs[0], pairs[1].sqrt(), pairs[2], pairs[3].sqrt()]);
        assert_abs_diff_eq!(
            DispersionFormula::StandardSellmeier.evaluate(lambda, &standard),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_closed_form_formulas() {
        let lambda: f64 = 0.6;
        let l2 = lambda * lambda;

        let c = coefficients(&[1.5, 0.004, 0.0001]);
        assert_abs_diff_eq!(
            DispersionFormula::Cauchy.evaluate(lambda, &c),
            1.5 + 0.004 / l2 + 0.0001 / (l2 * l2),
            epsilon = 1e-14
        );

        let c = coefficients(&[1.5, 0.01, 0.0002]);
        assert_abs_diff_eq!(
            DispersionFormula::Conrady.evaluate(lambda, &c),
            1.5 + 0.01 / lambda + 0.0002 / lambda.powf(3.5),
            epsilon = 1e-14
        );

        let c = coefficients(&[1.5, 0.02, 0.2]);
        assert_abs_diff_eq!(
            DispersionFormula::Hartman.evaluate(lambda, &c),
            1.5 + 0.02 / (lambda - 0.2).powf(1.2),
            epsilon = 1e-14
        );

        let c = coefficients(&[1.5, 0.003, 0.0001, 0.001, 0.0, 0.0]);
        let l = 1.0 / (l2 - 0.028);
        assert_abs_diff_eq!(
            DispersionFormula::Herzberger.evaluate(lambda, &c),
            1.5 + 0.003 * l + 0.0001 * l * l + 0.001 * l2,
            epsilon = 1e-14
        );

        let c = coefficients(&[2.3, 0.01, 0.02, 0.01]);
        assert_abs_diff_eq!(
            DispersionFormula::HandbookOfOptics1.evaluate(lambda, &c),
            (2.3 + 0.01 / (l2 - 0.02) - 0.01 * l2).sqrt(),
            epsilon = 1e-14
        );
        assert_abs_diff_eq!(
            DispersionFormula::HandbookOfOptics2.evaluate(lambda, &c),
            (2.3 + 0.01 * l2 / (l2 - 0.02) - 0.01 * l2).sqrt(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_extended_formulas_reduce_to_schott() {
        let schott = [2.27, -0.01, 0.012, 2e-4, -1e-5, 1e-6];
        let c = coefficients(&schott);
        let n = DispersionFormula::Schott.evaluate(0.5, &c);
        assert_abs_diff_eq!(DispersionFormula::Extended1.evaluate(0.5, &c), n, epsilon = 1e-12);
        assert_abs_diff_eq!(DispersionFormula::Extended2.evaluate(0.5, &c), n, epsilon = 1e-12);
        assert_abs_diff_eq!(DispersionFormula::Laurent.evaluate(0.5, &c), n, epsilon = 1e-12);
    }

    #[test]
    fn test_every_coefficient_slot_contributes() {
        // Reference values at 0.6 µm, computed independently.
        let cases: [(DispersionFormula, &[f64], f64); 9] = [
            (
                DispersionFormula::Sellmeier2,
                &[0.3, 1.1, 0.1, 0.02, 0.15],
                1.578_191_316_250_292_5,
            ),
            (
                DispersionFormula::Sellmeier4,
                &[1.4, 0.9, 0.012, 0.7, 95.0],
                1.525_900_311_575_146_6,
            ),
            (
                DispersionFormula::Extended1,
                &[2.27, -0.01, 0.012, 2e-4, -1e-5, 1e-6, 3e-7, -4e-8],
                1.516_955_168_978_84,
            ),
            (
                DispersionFormula::Extended2,
                &[2.27, -0.01, 0.012, 2e-4, -1e-5, 1e-6, -3e-4, 2e-5],
                1.516_932_364_689_631_6,
            ),
            (
                DispersionFormula::Laurent,
                &[
                    2.27, -0.01, 0.012, 2e-4, -1e-5, 1e-6, -1e-7, 2e-8, -3e-9, 4e-10, -5e-11,
                    6e-12,
                ],
                1.516_941_546_999_151_6,
            ),
            (
                DispersionFormula::Herzberger,
                &[1.5, 0.003, 0.0001, 0.001, -2e-4, 3e-5],
                1.510_278_867_689_870_9,
            ),
            (
                DispersionFormula::Sellmeier3,
                &[0.6, 0.004, 0.4, 0.013, 0.2, 0.05, 0.9, 100.0],
                1.500_244_487_470_566_7,
            ),
            (
                DispersionFormula::Sellmeier5,
                &[0.6, 0.004, 0.4, 0.013, 0.2, 0.05, 0.9, 100.0, 0.05, 0.002],
                1.516_908_979_403_432,
            ),
            (
                DispersionFormula::StandardSellmeier,
                &[0.6, 0.063, 0.4, 0.114, 0.2, 0.224, 0.9, 10.0, 0.05, 0.045, 0.01, 0.03],
                1.520_235_425_877_960_7,
            ),
        ];
        for (formula, values, expected) in cases {
            assert_eq!(values.len(), formula.coefficient_count(), "{}", formula);
            let n = formula.evaluate(0.6, &coefficients(values));
            assert!((n - expected).abs() < 1e-12, "{}: {} vs {}", formula, n, expected);
        }
    }

    #[test]
    fn test_evaluate_many_matches_scalar() {
        let c = coefficients(&[1.5, 0.004, 0.0001]);
        let lambdas = [0.7, 0.4, 0.4, 1.2];
        let many = DispersionFormula::Cauchy.evaluate_many(&lambdas, &c);
        assert_eq!(many.len(), lambdas.len());
        for (lambda, n) in lambdas.iter().zip(&many) {
            assert_eq!(*n, DispersionFormula::Cauchy.evaluate(*lambda, &c));
        }
    }

    #[test]
    fn test_agf_codes() {
        assert_eq!(DispersionFormula::from_agf_code(2), DispersionFormula::Sellmeier1);
        assert_eq!(DispersionFormula::from_agf_code(13), DispersionFormula::Unknown);
        assert_eq!(DispersionFormula::from_agf_code(101), DispersionFormula::Unknown);
        for code in 1..=12 {
            assert_eq!(DispersionFormula::from_agf_code(code).agf_code(), Some(code));
        }
        assert_eq!(DispersionFormula::Cauchy.agf_code(), None);
    }

    #[test]
    fn test_parse_formula_names() {
        assert_eq!(
            "Handbook of Optics2".parse::<DispersionFormula>(),
            Ok(DispersionFormula::HandbookOfOptics2)
        );
        assert_eq!(
            "glassmanufacturersellmeier".parse::<DispersionFormula>(),
            Ok(DispersionFormula::GlassManufacturerSellmeier)
        );
        assert!("Lorentz".parse::<DispersionFormula>().is_err());
    }

    #[test]
    fn test_coefficient_bounds_are_checked() {
        let mut c = DispersionCoefficients::new();
        assert!(c.set(MAX_COEFFICIENTS - 1, 1.0).is_ok());
        assert_eq!(
            c.set(MAX_COEFFICIENTS, 1.0),
            Err(GlassError::CoefficientIndex {
                index: MAX_COEFFICIENTS,
                capacity: MAX_COEFFICIENTS
            })
        );
        assert!(DispersionCoefficients::from_slice(&[0.0; 13]).is_err());
        assert_eq!(c.get(MAX_COEFFICIENTS), None);
    }

    #[test]
    fn test_coefficient_counts_fit_capacity() {
        for formula in DispersionFormula::ALL {
            assert!(formula.coefficient_count() <= MAX_COEFFICIENTS);
        }
    }
}
