//! Independent trajectories for ensemble averages.
//!
//! Each member owns a `SimRng` derived from the root seed with
//! `SimRng::child(run_index)`.  The children are drawn sequentially before
//! any member runs, so the parallel path (feature `parallel`) returns exactly
//! what the sequential path returns, in run-index order.

use lv_core::{NormalSampler, PhysicalParameters, SimRng};

use crate::{LangevinIntegrator, SimError, SimResult, Trajectory};

/// A batch of `runs` independent trajectories sharing one parameter set.
#[derive(Clone, Debug)]
pub struct Ensemble {
    params: PhysicalParameters,
    runs:   usize,
    seed:   u64,
}

impl Ensemble {
    pub fn new(params: PhysicalParameters, runs: usize, seed: u64) -> SimResult<Self> {
        if runs == 0 {
            return Err(SimError::Config("ensemble needs at least one run".into()));
        }
        params.validate()?;
        Ok(Self { params, runs, seed })
    }

    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run every member to completion, on Rayon's pool when the `parallel`
    /// feature is enabled.
    pub fn run(&self) -> SimResult<Vec<Trajectory>> {
        tracing::info!(runs = self.runs, seed = self.seed, "running ensemble");

        #[cfg(not(feature = "parallel"))]
        let members = self.run_sequential();

        #[cfg(feature = "parallel")]
        let members: SimResult<Vec<Trajectory>> = {
            use rayon::prelude::*;
            self.member_rngs()
                .into_par_iter()
                .map(|rng| self.run_member(rng))
                .collect()
        };

        members
    }

    /// Run every member on the calling thread, in run-index order.
    ///
    /// Always available, whatever the feature set; [`run`](Self::run)
    /// returns the same trajectories.
    pub fn run_sequential(&self) -> SimResult<Vec<Trajectory>> {
        self.member_rngs()
            .into_iter()
            .map(|rng| self.run_member(rng))
            .collect()
    }

    /// Child streams for every member, drawn from the root before any runs.
    fn member_rngs(&self) -> Vec<SimRng> {
        let mut root = SimRng::new(self.seed);
        (0..self.runs).map(|i| root.child(i as u64)).collect()
    }

    fn run_member(&self, rng: SimRng) -> SimResult<Trajectory> {
        let integrator = LangevinIntegrator::new(self.params, NormalSampler::new(rng))?;
        Ok(integrator.collect_trajectory())
    }
}
