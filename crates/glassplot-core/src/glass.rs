//! Glass records and the quantities derived from them.
//!
//! A [`Glass`] is populated by a catalog reader and then only queried.
//! Every query is computed on demand from the dispersion formula, the
//! thermal coefficients or the transmittance samples; nothing is cached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispersion::{DispersionCoefficients, DispersionFormula, DispersionModel};
use crate::error::{GlassError, Result};
use crate::spectral_line::SpectralLine;
use crate::thermal::ThermalCoefficients;
use crate::transmittance::TransmittanceData;

/// Production status of a glass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlassStatus {
    #[default]
    NoData,
    Preferred,
    Obsolete,
    Special,
    Melt,
}

impl GlassStatus {
    /// Map the AGF status code; unknown codes mean "no data".
    pub fn from_agf_code(code: i32) -> Self {
        match code {
            1 => GlassStatus::Preferred,
            2 => GlassStatus::Obsolete,
            3 => GlassStatus::Special,
            4 => GlassStatus::Melt,
            _ => GlassStatus::NoData,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            GlassStatus::NoData => "No Data",
            GlassStatus::Preferred => "Preferred",
            GlassStatus::Obsolete => "Obsolete",
            GlassStatus::Special => "Special",
            GlassStatus::Melt => "Melt",
        }
    }
}

impl fmt::Display for GlassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlassStatus {
    type Err = GlassError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "-" | "no data" | "nodata" => Ok(GlassStatus::NoData),
            "preferred" => Ok(GlassStatus::Preferred),
            "obsolete" => Ok(GlassStatus::Obsolete),
            "special" => Ok(GlassStatus::Special),
            "melt" => Ok(GlassStatus::Melt),
            _ => Err(GlassError::UnknownStatus(s.to_string())),
        }
    }
}

/// A scalar property plotted on glass maps and listed in datasheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedQuantity {
    /// Index at the d line.
    Nd,
    /// Index at the e line.
    Ne,
    /// Abbe number $(n_d - 1)/(n_F - n_C)$.
    Vd,
    /// Abbe number $(n_e - 1)/(n_{F'} - n_{C'})$.
    Ve,
    /// Partial dispersion $(n_g - n_F)/(n_F - n_C)$.
    PgF,
    /// Partial dispersion $(n_C - n_t)/(n_{F'} - n_{C'})$.
    PCt,
}

impl DerivedQuantity {
    pub const ALL: [DerivedQuantity; 6] = [
        DerivedQuantity::Nd,
        DerivedQuantity::Ne,
        DerivedQuantity::Vd,
        DerivedQuantity::Ve,
        DerivedQuantity::PgF,
        DerivedQuantity::PCt,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            DerivedQuantity::Nd => "nd",
            DerivedQuantity::Ne => "ne",
            DerivedQuantity::Vd => "vd",
            DerivedQuantity::Ve => "ve",
            DerivedQuantity::PgF => "PgF",
            DerivedQuantity::PCt => "PCt",
        }
    }
}

impl fmt::Display for DerivedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DerivedQuantity {
    type Err = GlassError;

    /// Names are matched exactly: `"nd"`, `"ne"`, `"vd"`, `"ve"`, `"PgF"`, `"PCt"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DerivedQuantity::ALL
            .into_iter()
            .find(|quantity| quantity.name() == s)
            .ok_or_else(|| GlassError::UnknownQuantity(s.to_string()))
    }
}

/// One glass from a manufacturer catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Glass {
    name: String,
    supplier: String,
    status: GlassStatus,
    comment: String,
    mil: String,
    dispersion: DispersionModel,
    thermal: ThermalCoefficients,
    /// Valid wavelength range (µm), informational only.
    lambda_min: f64,
    lambda_max: f64,
    transmittance: TransmittanceData,
}

impl Glass {
    /// An empty record with Schott formula and zero coefficients.
    pub fn new(name: impl Into<String>, supplier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supplier: supplier.into(),
            ..Default::default()
        }
    }

    // --- identity ---

    /// Product name, e.g. `"N-BK7"`.
    pub fn product_name(&self) -> &str {
        &self.name
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    /// Unique key across catalogs: `"<name>_<supplier>"`.
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.name, self.supplier)
    }

    pub fn status(&self) -> GlassStatus {
        self.status
    }

    pub fn set_status(&mut self, status: GlassStatus) {
        self.status = status;
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Military glass code.
    pub fn mil(&self) -> &str {
        &self.mil
    }

    pub fn set_mil(&mut self, mil: impl Into<String>) {
        self.mil = mil.into();
    }

    // --- dispersion ---

    pub fn formula(&self) -> DispersionFormula {
        self.dispersion.formula
    }

    pub fn formula_name(&self) -> &'static str {
        self.dispersion.formula.name()
    }

    pub fn set_formula(&mut self, formula: DispersionFormula) {
        self.dispersion.formula = formula;
    }

    pub fn dispersion_coefficients(&self) -> &DispersionCoefficients {
        &self.dispersion.coefficients
    }

    pub fn set_dispersion_coefficients(&mut self, coefficients: DispersionCoefficients) {
        self.dispersion.coefficients = coefficients;
    }

    /// Write one dispersion coefficient by catalog position.
    pub fn set_dispersion_coefficient(&mut self, index: usize, value: f64) -> Result<()> {
        self.dispersion.coefficients.set(index, value)
    }

    pub fn lambda_min(&self) -> f64 {
        self.lambda_min
    }

    pub fn lambda_max(&self) -> f64 {
        self.lambda_max
    }

    /// Set the valid wavelength range (µm).
    pub fn set_lambda_range(&mut self, min: f64, max: f64) {
        self.lambda_min = min;
        self.lambda_max = max;
    }

    /// Refractive index at `lambda` (µm). Returns 0 if the formula is unknown.
    pub fn index(&self, lambda: f64) -> f64 {
        self.dispersion.index(lambda)
    }

    /// Refractive index at each wavelength (µm), in input order.
    pub fn index_many(&self, lambdas: &[f64]) -> Vec<f64> {
        self.dispersion.index_many(lambdas)
    }

    pub fn index_at(&self, line: SpectralLine) -> f64 {
        self.index(line.wavelength_micron())
    }

    /// Refractive index at a spectral line given by token (`"d"`, `"F_"`, ...).
    pub fn index_at_line(&self, token: &str) -> Result<f64> {
        let line: SpectralLine = token.parse()?;
        Ok(self.index_at(line))
    }

    pub fn nd(&self) -> f64 {
        self.index_at(SpectralLine::D)
    }

    pub fn ne(&self) -> f64 {
        self.index_at(SpectralLine::E)
    }

    pub fn vd(&self) -> f64 {
        (self.nd() - 1.0) / (self.index_at(SpectralLine::F) - self.index_at(SpectralLine::C))
    }

    pub fn ve(&self) -> f64 {
        (self.ne() - 1.0)
            / (self.index_at(SpectralLine::FPrime) - self.index_at(SpectralLine::CPrime))
    }

    pub fn pgf(&self) -> f64 {
        (self.index_at(SpectralLine::G) - self.index_at(SpectralLine::F))
            / (self.index_at(SpectralLine::F) - self.index_at(SpectralLine::C))
    }

    pub fn pct(&self) -> f64 {
        (self.index_at(SpectralLine::C) - self.index_at(SpectralLine::T))
            / (self.index_at(SpectralLine::FPrime) - self.index_at(SpectralLine::CPrime))
    }

    pub fn derived(&self, quantity: DerivedQuantity) -> f64 {
        match quantity {
            DerivedQuantity::Nd => self.nd(),
            DerivedQuantity::Ne => self.ne(),
            DerivedQuantity::Vd => self.vd(),
            DerivedQuantity::Ve => self.ve(),
            DerivedQuantity::PgF => self.pgf(),
            DerivedQuantity::PCt => self.pct(),
        }
    }

    /// Derived quantity by name; unrecognised names are an error.
    pub fn value(&self, name: &str) -> Result<f64> {
        Ok(self.derived(name.parse()?))
    }

    /// Derived quantity by name, with 0 for unrecognised names.
    pub fn value_or_zero(&self, name: &str) -> f64 {
        self.value(name).unwrap_or(0.0)
    }

    // --- thermal ---

    pub fn thermal_coefficients(&self) -> &ThermalCoefficients {
        &self.thermal
    }

    pub fn set_thermal_coefficients(&mut self, thermal: ThermalCoefficients) {
        self.thermal = thermal;
    }

    /// Write one thermal coefficient by catalog position (D0, D1, D2, E0, E1, λtk).
    pub fn set_thermal_coefficient(&mut self, index: usize, value: f64) -> Result<()> {
        self.thermal.set(index, value)
    }

    /// Absolute $dn/dT$ at `temperature` (°C) and `lambda` (µm).
    pub fn dn_dt_abs(&self, temperature: f64, lambda: f64, reference_temperature: f64) -> f64 {
        let n = self.index(lambda);
        self.thermal
            .dn_dt_abs(n, lambda, temperature, reference_temperature)
    }

    /// [`dn_dt_abs`](Self::dn_dt_abs) for each temperature at a fixed wavelength.
    pub fn dn_dt_abs_many(
        &self,
        temperatures: &[f64],
        lambda: f64,
        reference_temperature: f64,
    ) -> Vec<f64> {
        let n = self.index(lambda);
        temperatures
            .iter()
            .map(|&t| self.thermal.dn_dt_abs(n, lambda, t, reference_temperature))
            .collect()
    }

    // --- transmittance ---

    pub fn transmittance_data(&self) -> &TransmittanceData {
        &self.transmittance
    }

    pub fn set_transmittance_data(&mut self, data: TransmittanceData) {
        self.transmittance = data;
    }

    /// Append one measurement: wavelength (µm), transmittance (0–1), thickness (mm).
    pub fn append_transmittance_data(&mut self, lambda: f64, transmittance: f64, thickness: f64) {
        self.transmittance.push(lambda, transmittance, thickness);
    }

    /// Internal transmittance at `lambda` (µm) for a sample `thickness` mm thick.
    pub fn transmittance(&self, lambda: f64, thickness: f64) -> Result<f64> {
        Ok(self.transmittance.curve(thickness)?.evaluate(lambda))
    }

    /// Internal transmittance at each wavelength (µm), fitting the curve once.
    pub fn transmittance_many(&self, lambdas: &[f64], thickness: f64) -> Result<Vec<f64>> {
        Ok(self.transmittance.curve(thickness)?.evaluate_many(lambdas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_full_name_joins_product_and_supplier() {
        let glass = Glass::new("N-BK7", "SCHOTT");
        assert_eq!(glass.full_name(), "N-BK7_SCHOTT");
        assert_eq!(glass.product_name(), "N-BK7");
    }

    #[test]
    fn test_status_codes_and_names() {
        assert_eq!(GlassStatus::from_agf_code(1), GlassStatus::Preferred);
        assert_eq!(GlassStatus::from_agf_code(4), GlassStatus::Melt);
        assert_eq!(GlassStatus::from_agf_code(9), GlassStatus::NoData);
        assert_eq!(GlassStatus::NoData.to_string(), "No Data");
        assert_eq!("obsolete".parse::<GlassStatus>(), Ok(GlassStatus::Obsolete));
        assert!("discontinued".parse::<GlassStatus>().is_err());
    }

    #[test]
    fn test_unknown_quantity() {
        let glass = Glass::new("X", "Y");
        assert_eq!(
            glass.value("nF"),
            Err(GlassError::UnknownQuantity("nF".into()))
        );
        assert_eq!(glass.value_or_zero("nF"), 0.0);
    }

    #[test]
    fn test_quantity_names_are_exact() {
        for quantity in DerivedQuantity::ALL {
            assert_eq!(quantity.name().parse::<DerivedQuantity>(), Ok(quantity));
        }
        assert!("pgf".parse::<DerivedQuantity>().is_err());
    }

    #[test]
    fn test_abbe_number_from_cauchy_glass() {
        // A Cauchy glass has n = A + B/λ², so nd/nF/nC follow directly.
        let mut glass = Glass::new("C", "TEST");
        glass.set_formula(DispersionFormula::Cauchy);
        glass.set_dispersion_coefficients(DispersionCoefficients::from_slice(&[1.5, 0.005]).unwrap());

        let n = |line: SpectralLine| 1.5 + 0.005 / line.wavelength_micron().powi(2);
        let expected = (n(SpectralLine::D) - 1.0) / (n(SpectralLine::F) - n(SpectralLine::C));
        assert_abs_diff_eq!(glass.vd(), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(glass.value("vd").unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_coefficient_writes_are_bounds_checked() {
        let mut glass = Glass::new("X", "Y");
        assert!(glass.set_dispersion_coefficient(11, 1.0).is_ok());
        assert!(glass.set_dispersion_coefficient(12, 1.0).is_err());
        assert!(glass.set_thermal_coefficient(5, 0.17).is_ok());
        assert!(glass.set_thermal_coefficient(6, 0.0).is_err());
    }

    #[test]
    fn test_unknown_formula_gives_zero_index() {
        let mut glass = Glass::new("X", "Y");
        glass.set_formula(DispersionFormula::Unknown);
        assert_eq!(glass.index(0.5), 0.0);
        assert_eq!(glass.formula_name(), "Unknown");
    }
}
