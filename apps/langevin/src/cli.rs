//! Command-line surface.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use lv_core::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "langevin", version)]
#[command(about = "Brownian motion of a 2D particle under the Langevin equation")]
pub struct Cli {
    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print standard-normal samples (Box–Muller), one per line.
    Sample(SampleArgs),

    /// Integrate one trajectory and print `t x y vx vy` rows.
    Simulate(SimulateArgs),

    /// Run independent trajectories and print the mean squared displacement.
    Ensemble(EnsembleArgs),
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of samples to print.
    pub count: u64,

    /// Seed for the uniform source (default: wall clock).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a density histogram with this many bins, next to the N(0, 1)
    /// density, instead of the samples themselves.
    #[arg(long, value_name = "BINS", value_parser = clap::value_parser!(u32).range(1..))]
    pub histogram: Option<u32>,
}

/// Physical parameters shared by `simulate` and `ensemble`.
///
/// Positional values override `--config`, which overrides the built-in
/// defaults `T=1 m=1 gamma=1 dt=0.01 n_steps=1000`.
#[derive(Args, Debug)]
pub struct PhysicsArgs {
    /// Temperature T.
    #[arg(allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Particle mass m (must be non-zero).
    #[arg(allow_negative_numbers = true)]
    pub mass: Option<f64>,

    /// Friction coefficient gamma.
    #[arg(allow_negative_numbers = true)]
    pub friction: Option<f64>,

    /// Time step dt.
    #[arg(allow_negative_numbers = true)]
    pub dt: Option<f64>,

    /// Number of integration steps (positive).
    #[arg(allow_negative_numbers = true)]
    pub n_steps: Option<i64>,

    /// Seed for the uniform source (default: wall clock).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reject negative temperature / friction instead of emitting NaN.
    #[arg(long)]
    pub strict: bool,

    /// JSON file with any `SimConfig` fields.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl PhysicsArgs {
    /// Merge defaults, config file and command line into one `SimConfig`.
    pub fn resolve(&self) -> Result<SimConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };

        if let Some(t) = self.temperature {
            cfg.temperature = t;
        }
        if let Some(m) = self.mass {
            cfg.mass = m;
        }
        if let Some(g) = self.friction {
            cfg.friction = g;
        }
        if let Some(dt) = self.dt {
            cfg.dt = dt;
        }
        if let Some(n) = self.n_steps {
            if n <= 0 {
                bail!("n_steps must be a positive integer, got {n}");
            }
            cfg.n_steps = n as u64;
        }
        if cfg.n_steps == 0 {
            bail!("n_steps must be a positive integer, got 0");
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.strict {
            cfg.strict = true;
        }
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub physics: PhysicsArgs,

    /// Also write the trajectory as CSV to this path.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EnsembleArgs {
    #[command(flatten)]
    pub physics: PhysicsArgs,

    /// Number of independent trajectories.
    #[arg(long, default_value_t = 30)]
    pub runs: usize,

    /// Start of the fitting window for D and the energy average
    /// (default: half the run duration).
    #[arg(long, value_name = "T0")]
    pub fit_from: Option<f64>,

    /// Append a kinetic-energy density table with this many bins, next to
    /// the Boltzmann density, over the same window as the energy mean.
    #[arg(long, value_name = "BINS", value_parser = clap::value_parser!(u32).range(1..))]
    pub energy_bins: Option<u32>,
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}
