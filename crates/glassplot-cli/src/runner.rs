//! Job runner: builds catalogs from the job file and tabulates glass properties.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use glassplot_core::catalog::{Catalog, CatalogSet, GlassMapSeries};
use glassplot_core::dispersion::{DispersionCoefficients, DispersionFormula};
use glassplot_core::glass::{DerivedQuantity, Glass, GlassStatus};
use glassplot_core::grid::nm_to_micron;
use glassplot_core::spectral_line::SpectralLine;
use glassplot_core::thermal::ThermalCoefficients;
use glassplot_core::transmittance::TransmittanceData;

use crate::config::{GlassConfig, JobConfig};

/// One named column of values.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Datasheet values for one glass.
#[derive(Debug, Clone, Serialize)]
pub struct GlassProperties {
    pub full_name: String,
    pub supplier: String,
    pub formula: String,
    pub status: String,
    pub nd: f64,
    pub ne: f64,
    pub vd: f64,
    pub ve: f64,
    pub pgf: f64,
    pub pct: f64,
    /// Refractive index per spectral line token, in `plot.lines` order.
    pub indices: Vec<(String, f64)>,
}

/// Everything a job produces.
pub struct PlotOutput {
    pub wavelengths_nm: Vec<f64>,
    pub dispersion: Vec<Series>,
    pub transmittance: Vec<Series>,
    pub temperatures: Vec<f64>,
    pub dndt: Vec<Series>,
    pub properties: Vec<GlassProperties>,
    pub glass_map: Vec<GlassMapSeries>,
}

/// Build every catalog described in the job.
pub fn build_catalogs(job: &JobConfig) -> Result<CatalogSet> {
    let mut set = CatalogSet::new();
    for catalog_cfg in &job.catalogs {
        let mut catalog = Catalog::new(&catalog_cfg.supplier);
        for glass_cfg in &catalog_cfg.glasses {
            let glass = build_glass(glass_cfg, &catalog_cfg.supplier)
                .with_context(|| format!("Glass '{}' ({})", glass_cfg.name, catalog_cfg.supplier))?;
            catalog.push(glass);
        }
        info!(
            "Catalog {}: {} glasses",
            catalog.supplier(),
            catalog.glass_count()
        );
        set.push(catalog);
    }
    Ok(set)
}

/// Build a Glass from its TOML description.
fn build_glass(cfg: &GlassConfig, supplier: &str) -> Result<Glass> {
    let mut glass = Glass::new(&cfg.name, supplier);

    let formula = match (&cfg.formula, cfg.agf_code) {
        (Some(name), _) => name.parse::<DispersionFormula>()?,
        (None, Some(code)) => DispersionFormula::from_agf_code(code),
        (None, None) => anyhow::bail!("either 'formula' or 'agf_code' is required"),
    };
    glass.set_formula(formula);
    glass.set_dispersion_coefficients(DispersionCoefficients::from_slice(&cfg.coefficients)?);

    if let Some(status) = &cfg.status {
        glass.set_status(status.parse::<GlassStatus>()?);
    }
    glass.set_comment(cfg.comment.as_str());
    glass.set_mil(cfg.mil.as_str());
    if let Some([min, max]) = cfg.lambda_range {
        glass.set_lambda_range(min, max);
    }
    if let Some(thermal) = cfg.thermal {
        glass.set_thermal_coefficients(ThermalCoefficients::from_array(thermal));
    }

    let mut data = TransmittanceData::new();
    for &[lambda, t, thickness] in &cfg.transmittance {
        data.push(lambda, t, thickness);
    }
    glass.set_transmittance_data(data);

    Ok(glass)
}

/// Spectral lines and glass-map axes named in `[plot]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSelection {
    pub lines: Vec<SpectralLine>,
    pub map_x: DerivedQuantity,
    pub map_y: DerivedQuantity,
}

/// Parse the names in `[plot]` that must resolve before anything is evaluated.
pub fn plot_selection(job: &JobConfig) -> Result<PlotSelection> {
    let lines = job
        .plot
        .lines
        .iter()
        .map(|token| token.parse::<SpectralLine>())
        .collect::<Result<Vec<_>, _>>()
        .context("plot.lines")?;
    let map_x = job.plot.glassmap.x.parse::<DerivedQuantity>().context("plot.glassmap.x")?;
    let map_y = job.plot.glassmap.y.parse::<DerivedQuantity>().context("plot.glassmap.y")?;
    Ok(PlotSelection {
        lines,
        map_x,
        map_y,
    })
}

/// Evaluate all tables for a parsed job.
pub fn run_job(job: &JobConfig) -> Result<PlotOutput> {
    let catalogs = build_catalogs(job)?;
    let PlotSelection {
        lines,
        map_x,
        map_y,
    } = plot_selection(job)?;

    let wavelengths_nm = job.plot.wavelengths.samples();
    let lambdas: Vec<f64> = wavelengths_nm.iter().copied().map(nm_to_micron).collect();
    let temperatures = job.plot.temperatures.samples();
    let dndt_lambda = nm_to_micron(job.plot.dndt_wavelength);
    let reference_temperature = job.settings.reference_temperature;

    let mut dispersion = Vec::new();
    let mut transmittance = Vec::new();
    let mut dndt = Vec::new();
    let mut properties = Vec::new();

    for glass in catalogs.glasses() {
        let name = glass.full_name();

        if glass.formula() == DispersionFormula::Unknown {
            warn!("{}: unknown dispersion formula, index tables skipped", name);
        } else {
            dispersion.push(Series {
                name: name.clone(),
                values: glass.index_many(&lambdas),
            });
            dndt.push(Series {
                name: name.clone(),
                values: glass.dn_dt_abs_many(&temperatures, dndt_lambda, reference_temperature),
            });
            properties.push(glass_properties(glass, &lines));
        }

        if glass.transmittance_data().is_empty() {
            info!("{}: no transmittance data", name);
        } else {
            let values = glass
                .transmittance_many(&lambdas, job.plot.thickness)
                .with_context(|| format!("Transmittance of {}", name))?;
            transmittance.push(Series { name, values });
        }
    }

    println!(
        "Evaluated {} glasses over {} wavelengths",
        catalogs.glasses().count(),
        wavelengths_nm.len()
    );

    Ok(PlotOutput {
        wavelengths_nm,
        dispersion,
        transmittance,
        temperatures,
        dndt,
        properties,
        glass_map: catalogs.glass_map(map_x, map_y),
    })
}

fn glass_properties(glass: &Glass, lines: &[SpectralLine]) -> GlassProperties {
    GlassProperties {
        full_name: glass.full_name(),
        supplier: glass.supplier().to_string(),
        formula: glass.formula_name().to_string(),
        status: glass.status().to_string(),
        nd: glass.nd(),
        ne: glass.ne(),
        vd: glass.vd(),
        ve: glass.ve(),
        pgf: glass.pgf(),
        pct: glass.pct(),
        indices: lines
            .iter()
            .map(|&line| (line.name().to_string(), glass.index_at(line)))
            .collect(),
    }
}

/// Write a table with `x_name` as the first column and one column per series.
pub fn write_series_csv(
    path: &Path,
    title: &str,
    metadata: &[String],
    x_name: &str,
    xs: &[f64],
    series: &[Series],
) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;

    // Metadata header
    writeln!(file, "# Glassplot — {}", title)?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    for line in metadata {
        writeln!(file, "# {}", line)?;
    }
    writeln!(file, "#")?;

    let mut header = vec![x_name.to_string()];
    header.extend(series.iter().map(|s| s.name.clone()));
    writeln!(file, "{}", header.join(","))?;

    for (row, x) in xs.iter().enumerate() {
        let mut cells = vec![format!("{}", x)];
        cells.extend(series.iter().map(|s| format!("{:.10e}", s.values[row])));
        writeln!(file, "{}", cells.join(","))?;
    }

    println!("{} written to: {}", title, path.display());
    Ok(())
}

/// Write the datasheet table to CSV.
pub fn write_properties_csv(properties: &[GlassProperties], path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Glassplot — Glass Properties")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "#")?;

    let line_names: Vec<String> = properties
        .first()
        .map(|p| p.indices.iter().map(|(k, _)| format!("n_{}", k)).collect())
        .unwrap_or_default();
    writeln!(
        file,
        "glass,supplier,formula,status,nd,ne,vd,ve,PgF,PCt{}{}",
        if line_names.is_empty() { "" } else { "," },
        line_names.join(",")
    )?;

    for p in properties {
        let mut cells = vec![
            p.full_name.clone(),
            p.supplier.clone(),
            p.formula.clone(),
            p.status.clone(),
        ];
        for value in [p.nd, p.ne, p.vd, p.ve, p.pgf, p.pct] {
            cells.push(format!("{:.6}", value));
        }
        cells.extend(p.indices.iter().map(|(_, n)| format!("{:.6}", n)));
        writeln!(file, "{}", cells.join(","))?;
    }

    println!("Properties written to: {}", path.display());
    Ok(())
}

/// Write the datasheet table to JSON.
pub fn write_properties_json(properties: &[GlassProperties], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(properties)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Properties (JSON) written to: {}", path.display());
    Ok(())
}

/// Write glass-map points, one row per glass.
pub fn write_glass_map_csv(
    series: &[GlassMapSeries],
    x_name: &str,
    y_name: &str,
    path: &Path,
) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Glassplot — Glass Map")?;
    writeln!(file, "#")?;
    writeln!(file, "supplier,glass,{},{}", x_name, y_name)?;
    for s in series {
        for point in &s.points {
            writeln!(
                file,
                "{},{},{:.6},{:.6}",
                s.supplier, point.label, point.x, point.y
            )?;
        }
    }

    println!("Glass map written to: {}", path.display());
    Ok(())
}
