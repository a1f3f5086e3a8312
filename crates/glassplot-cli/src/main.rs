//! Glassplot command-line interface.
//!
//! Tabulate optical glass properties from TOML job files:
//! ```sh
//! glassplot-cli run job.toml
//! glassplot-cli validate job.toml
//! glassplot-cli formulas
//! glassplot-cli lines
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use glassplot_core::dispersion::{DispersionFormula, FormulaFamily};
use glassplot_core::spectral_line::SpectralLine;

#[derive(Parser)]
#[command(name = "glassplot-cli")]
#[command(about = "Glassplot: optical glass dispersion, transmittance and thermal data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a job file and write CSV tables.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a job file and its glass definitions without writing output.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// List supported dispersion formulas.
    Formulas,
    /// List spectral lines and their wavelengths.
    Lines,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("Glassplot");
            println!("=========");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());
            log::info!(
                "Reference temperature: {} °C",
                job.settings.reference_temperature
            );

            let result = runner::run_job(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            let thickness = format!("thickness: {} mm", job.plot.thickness);
            let reference = format!(
                "reference_temperature: {} C",
                job.settings.reference_temperature
            );
            let dndt_at = format!("wavelength: {} nm", job.plot.dndt_wavelength);

            runner::write_series_csv(
                &out_dir.join("dispersion.csv"),
                "Refractive Index",
                &[],
                "wavelength_nm",
                &result.wavelengths_nm,
                &result.dispersion,
            )?;
            runner::write_series_csv(
                &out_dir.join("transmittance.csv"),
                "Internal Transmittance",
                &[thickness],
                "wavelength_nm",
                &result.wavelengths_nm,
                &result.transmittance,
            )?;
            runner::write_series_csv(
                &out_dir.join("dndt.csv"),
                "Absolute dn/dT",
                &[reference, dndt_at],
                "temperature_c",
                &result.temperatures,
                &result.dndt,
            )?;
            runner::write_properties_csv(&result.properties, &out_dir.join("properties.csv"))?;
            runner::write_glass_map_csv(
                &result.glass_map,
                &job.plot.glassmap.x,
                &job.plot.glassmap.y,
                &out_dir.join("glassmap.csv"),
            )?;

            if job.output.save_json {
                runner::write_properties_json(&result.properties, &out_dir.join("properties.json"))?;
            }

            println!("Done.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let catalogs = runner::build_catalogs(&job)?;
            runner::plot_selection(&job)?;
            println!(
                "Configuration is valid: {} ({} glasses)",
                config.display(),
                catalogs.glasses().count()
            );
            Ok(())
        }
        Commands::Formulas => {
            println!("Dispersion formulas:");
            for family in [FormulaFamily::Zemax, FormulaFamily::CodeV] {
                println!();
                println!("  {:?}:", family);
                for formula in DispersionFormula::ALL
                    .into_iter()
                    .filter(|f| f.family() == Some(family))
                {
                    let code = formula
                        .agf_code()
                        .map(|c| format!("[{:>2}] ", c))
                        .unwrap_or_default();
                    println!(
                        "    {}{:<30} {} coefficients",
                        code,
                        formula.name(),
                        formula.coefficient_count()
                    );
                }
            }
            Ok(())
        }
        Commands::Lines => {
            println!("Spectral lines:");
            for line in SpectralLine::ALL {
                println!("  {:<3} {:>10.4} nm", line.name(), line.wavelength_nm());
            }
            Ok(())
        }
    }
}
