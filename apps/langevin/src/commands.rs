//! Subcommand bodies.  Each takes its data sink explicitly; `main` passes
//! locked stdout.
//!
//! All configuration is resolved and validated before the first byte is
//! written, so a rejected run leaves the sink empty.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use lv_analysis::{
    EnergyStats, Histogram, SampleStats, energy_histogram, fit_diffusion, fit_diffusion_slope,
    mean_squared_displacement, standard_normal_pdf, theoretical_diffusion, theoretical_msd,
};
use lv_core::{NormalSampler, SimRng, seed_from_time};
use lv_output::{CsvWriter, OutputWriter, TextWriter, TrajectoryOutputObserver};
use lv_sim::{Ensemble, IntegratorBuilder};

use crate::cli::{EnsembleArgs, SampleArgs, SimulateArgs};

/// `langevin sample <n>`
pub fn sample<W: Write>(args: &SampleArgs, sink: W) -> Result<()> {
    let (rng, seed) = match args.seed {
        Some(seed) => (SimRng::new(seed), seed),
        None => SimRng::from_time(),
    };
    info!(seed, count = args.count, "sampling standard normal variates");
    if args.count == 0 {
        return Ok(());
    }

    let mut sampler = NormalSampler::new(rng);
    let stats = match args.histogram {
        None => {
            let mut out = TextWriter::headerless(sink, 1);
            let mut stats = SampleStats::new();
            for _ in 0..args.count {
                let z = sampler.draw();
                out.write_row(&[z]).context("writing samples")?;
                stats.push(z);
            }
            out.finish().context("writing samples")?;
            stats
        }
        Some(bins) => {
            let samples: Vec<f64> = sampler.iter().take(args.count as usize).collect();
            let stats = SampleStats::from_slice(&samples);
            let hist = Histogram::from_values(&samples, bins as usize)?;

            let mut out = TextWriter::with_columns(sink, &["z", "density", "normal_pdf"])?;
            for b in hist.bins() {
                out.write_row(&[b.mid, b.density, standard_normal_pdf(b.mid)])?;
            }
            out.write_comment(&format!(
                "count = {}  mean = {:.6e}  variance = {:.6e}  seed = {seed}",
                stats.count(),
                stats.mean(),
                stats.variance(),
            ))?;
            out.finish()?;
            stats
        }
    };

    debug!(
        count = stats.count(),
        mean = stats.mean(),
        variance = stats.variance(),
        "sample statistics"
    );
    Ok(())
}

/// `langevin simulate [T] [m] [gamma] [dt] [n_steps]`
pub fn simulate<W: Write>(args: &SimulateArgs, sink: W) -> Result<()> {
    let config = args.physics.resolve()?;
    let mut builder = IntegratorBuilder::from_config(&config)?;
    let seed = builder.resolve_seed();
    let mut integrator = builder.build()?;

    let csv = match &args.csv {
        Some(path) => Some(TrajectoryOutputObserver::new(
            CsvWriter::from_path(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };
    let text = TrajectoryOutputObserver::new(TextWriter::trajectory(sink)?);

    let mut observers = (text, csv);
    let records = integrator.run(&mut observers);

    let (mut text, csv) = observers;
    if let Some(e) = text.take_error() {
        return Err(e).context("writing trajectory");
    }
    if let Some(mut csv) = csv {
        if let Some(e) = csv.take_error() {
            return Err(e).context("writing CSV trajectory");
        }
    }

    info!(records, seed, "simulation finished");
    Ok(())
}

/// `langevin ensemble [T] [m] [gamma] [dt] [n_steps] --runs K`
pub fn ensemble<W: Write>(args: &EnsembleArgs, sink: W) -> Result<()> {
    let config = args.physics.resolve()?;
    let params = config.parameters()?;
    let seed = config.seed.unwrap_or_else(seed_from_time);
    let ensemble = Ensemble::new(params, args.runs, seed)?;
    let fit_from = args.fit_from.unwrap_or(0.5 * params.duration());

    let members = ensemble.run()?;
    let msd = mean_squared_displacement(&members)?;
    let energy = EnergyStats::from_ensemble(&members, &params, fit_from)?;
    let energy_bins = args
        .energy_bins
        .map(|bins| energy_histogram(&members, &params, fit_from, bins as usize))
        .transpose()?;

    let mut out = TextWriter::with_columns(sink, &["t", "msd", "msd_theory"])?;
    for p in &msd {
        out.write_row(&[p.t, p.msd, theoretical_msd(&params, p.t)])?;
    }

    let d_theory = theoretical_diffusion(&params);
    out.write_comment(&format!("runs = {}  seed = {seed}  fit_from = {fit_from:.6e}", args.runs))?;
    out.write_comment(&format!(
        "D_fit_ratio = {}  D_fit_slope = {}  D_theory = {d_theory:.6e}",
        fmt_estimate(fit_diffusion(&msd, fit_from)),
        fmt_estimate(fit_diffusion_slope(&msd, fit_from)),
    ))?;
    out.write_comment(&format!(
        "mean_kinetic_energy = {:.6e}  expected = {:.6e}  samples = {}",
        energy.stats.mean(),
        energy.equipartition,
        energy.stats.count(),
    ))?;
    if let Some(bins) = energy_bins {
        out.begin_table(&["E", "density", "boltzmann"])?;
        for b in &bins {
            out.write_row(&[b.energy, b.density, b.boltzmann])?;
        }
    }
    out.finish()?;

    info!(runs = args.runs, seed, d_theory, "ensemble finished");
    Ok(())
}

fn fmt_estimate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.6e}"),
        None => "n/a".to_owned(),
    }
}
