//! TOML configuration deserialisation for plot jobs.

use serde::Deserialize;

use glassplot_core::grid::range_with_step;
use glassplot_core::thermal::DEFAULT_REFERENCE_TEMPERATURE;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "catalog")]
    pub catalogs: Vec<CatalogConfig>,
}

/// Session-wide settings.
#[derive(Debug, Deserialize)]
pub struct SettingsConfig {
    /// Reference temperature T0 for dn/dT (°C).
    #[serde(default = "default_reference_temperature")]
    pub reference_temperature: f64,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            reference_temperature: default_reference_temperature(),
        }
    }
}

fn default_reference_temperature() -> f64 {
    DEFAULT_REFERENCE_TEMPERATURE
}

/// What to tabulate.
#[derive(Debug, Deserialize)]
pub struct PlotConfig {
    /// Wavelengths in nm for dispersion and transmittance tables.
    #[serde(default = "default_wavelengths")]
    pub wavelengths: SampleSpec,
    /// Sample thickness for transmittance (mm).
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    /// Temperatures for the dn/dT table (°C).
    #[serde(default = "default_temperatures")]
    pub temperatures: SampleSpec,
    /// Wavelength for the dn/dT table (nm).
    #[serde(default = "default_dndt_wavelength")]
    pub dndt_wavelength: f64,
    /// Spectral lines listed in the property table.
    #[serde(default = "default_lines")]
    pub lines: Vec<String>,
    #[serde(default)]
    pub glassmap: GlassMapConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            wavelengths: default_wavelengths(),
            thickness: default_thickness(),
            temperatures: default_temperatures(),
            dndt_wavelength: default_dndt_wavelength(),
            lines: default_lines(),
            glassmap: GlassMapConfig::default(),
        }
    }
}

fn default_wavelengths() -> SampleSpec {
    SampleSpec::Range {
        range: [300.0, 1100.0],
        step: 5.0,
    }
}
fn default_thickness() -> f64 {
    10.0
}
fn default_temperatures() -> SampleSpec {
    SampleSpec::Range {
        range: [-40.0, 80.0],
        step: 10.0,
    }
}
fn default_dndt_wavelength() -> f64 {
    587.5618
}
fn default_lines() -> Vec<String> {
    ["t", "C", "C_", "d", "e", "F", "F_", "g"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Sample specification: either a stepped range or an explicit list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SampleSpec {
    Range { range: [f64; 2], step: f64 },
    List { values: Vec<f64> },
}

impl SampleSpec {
    pub fn samples(&self) -> Vec<f64> {
        match self {
            SampleSpec::Range { range, step } => range_with_step(range[0], range[1], *step),
            SampleSpec::List { values } => values.clone(),
        }
    }
}

/// Axes of the glass map.
#[derive(Debug, Deserialize)]
pub struct GlassMapConfig {
    #[serde(default = "default_map_x")]
    pub x: String,
    #[serde(default = "default_map_y")]
    pub y: String,
}

impl Default for GlassMapConfig {
    fn default() -> Self {
        Self {
            x: default_map_x(),
            y: default_map_y(),
        }
    }
}

fn default_map_x() -> String {
    "vd".into()
}
fn default_map_y() -> String {
    "nd".into()
}

/// One supplier's glasses.
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    pub supplier: String,
    #[serde(default, rename = "glass")]
    pub glasses: Vec<GlassConfig>,
}

/// A glass record in catalog order.
#[derive(Debug, Deserialize)]
pub struct GlassConfig {
    pub name: String,
    /// Formula name (e.g. "Sellmeier1"). Takes precedence over `agf_code`.
    #[serde(default)]
    pub formula: Option<String>,
    /// AGF formula code (1–12).
    #[serde(default)]
    pub agf_code: Option<i32>,
    #[serde(default)]
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub mil: String,
    /// Valid wavelength range [min, max] in µm.
    #[serde(default)]
    pub lambda_range: Option<[f64; 2]>,
    /// D0, D1, D2, E0, E1, λtk.
    #[serde(default)]
    pub thermal: Option<[f64; 6]>,
    /// Rows of [wavelength µm, transmittance, thickness mm].
    #[serde(default)]
    pub transmittance: Vec<[f64; 3]>,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to also save the property table as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}

/// Parse a TOML job configuration.
pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    Ok(config)
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
