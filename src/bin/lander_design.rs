use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lunar_lander_designer::config::{MissionFile, load_mission};
use lunar_lander_designer::export::{self, generate_report, writer_for_path};
use lunar_lander_designer::plot::{plot_convergence, plot_mass_breakdown};
use lunar_lander_designer::{DesignError, DesignState, LanderDesigner};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Size a crewed lunar lander by iterating the mass budget to closure"
)]
struct Cli {
    /// Mission document (TOML or YAML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Crew size
    #[arg(long)]
    crew: Option<u32>,

    /// Surface mission duration in days
    #[arg(long)]
    days: Option<f64>,

    /// Fixed payload in kg instead of the statistical estimate
    #[arg(long)]
    payload: Option<f64>,

    /// Specific impulse in seconds
    #[arg(long)]
    isp: Option<f64>,

    /// Starting guess for total vehicle mass in kg
    #[arg(long)]
    initial_mass: Option<f64>,

    /// Convergence tolerance on total mass in kg
    #[arg(long)]
    tolerance: Option<f64>,

    /// Iteration ceiling
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Log every pass
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Write the full result as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the iteration history as CSV (`-` for stdout)
    #[arg(long)]
    history: Option<PathBuf>,

    /// Directory for convergence and mass breakdown charts
    #[arg(long)]
    plots: Option<PathBuf>,

    /// Also write the text report to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn mission(&self) -> anyhow::Result<MissionFile> {
        let mut file = match &self.config {
            Some(path) => load_mission(path)
                .with_context(|| format!("failed to load mission from {}", path.display()))?,
            None => MissionFile::default(),
        };
        let mission = &mut file.mission;
        if let Some(crew) = self.crew {
            mission.n_crew = crew;
        }
        if let Some(days) = self.days {
            mission.mission_duration_days = days;
        }
        if self.payload.is_some() {
            mission.payload_override_kg = self.payload;
        }
        if let Some(isp) = self.isp {
            mission.isp_s = isp;
        }
        if let Some(mass) = self.initial_mass {
            mission.initial_total_mass_kg = mass;
        }
        if let Some(tolerance) = self.tolerance {
            file.run.tolerance_kg = tolerance;
        }
        if let Some(max_iterations) = self.max_iterations {
            file.run.max_iterations = max_iterations;
        }
        Ok(file)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = cli.mission()?;
    let designer = LanderDesigner::new(file.mission)?;
    let result = match designer.run(&file.run, cli.verbose) {
        Ok(result) => result,
        Err(DesignError::ConvergenceFailure {
            iterations,
            last_delta_kg,
            last_state,
        }) => {
            print_last_state(&last_state);
            anyhow::bail!(
                "design did not converge after {iterations} iterations (last change {last_delta_kg:.3} kg)"
            );
        }
        Err(err) => return Err(err.into()),
    };

    let report = generate_report(&result);
    print!("{report}");

    if let Some(path) = &cli.report {
        let mut writer = writer_for_path(path)?;
        writer.write_all(report.as_bytes())?;
        writer.flush()?;
        info!(path = %path.display(), "wrote report");
    }
    if let Some(path) = &cli.json {
        export::json::write_result(path, &result)?;
        info!(path = %path.display(), "wrote JSON result");
    }
    if let Some(path) = &cli.history {
        let writer = writer_for_path(path)?;
        export::history::write_csv(writer, &result.iteration_history)?;
        info!(path = %path.display(), "wrote iteration history");
    }
    if let Some(dir) = &cli.plots {
        let convergence = dir.join("convergence.png");
        plot_convergence(&result.iteration_history, &convergence)?;
        let breakdown = dir.join("mass_breakdown.png");
        plot_mass_breakdown(&result, &breakdown)?;
        info!(dir = %dir.display(), "wrote charts");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_last_state(state: &DesignState) {
    eprintln!("Last state (iteration {}):", state.iteration);
    eprintln!("  total mass : {:.1} kg", state.total_mass_kg);
    eprintln!("  payload    : {:.1} kg", state.payload_kg);
    eprintln!("  dry mass   : {:.1} kg", state.dry_mass_kg);
    eprintln!("  propellant : {:.1} kg", state.propellant_kg);
    eprintln!("  change     : {:.3} kg", state.delta_kg);
}
