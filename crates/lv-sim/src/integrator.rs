//! The `LangevinIntegrator` and its step rule.

use std::iter::FusedIterator;

use lv_core::{NormalSampler, ParticleState, PhysicalParameters, UniformSource};

use crate::{SimResult, Trajectory, TrajectoryObserver};

/// Advances one particle through `N` Euler–Maruyama steps.
///
/// The integrator is itself the trajectory stream: it implements
/// `Iterator<Item = ParticleState>` and yields exactly `N + 1` records:
/// the initial state, then one per step.  The stream is forward-only and
/// cannot be restarted; each record is produced only when requested, so a
/// consumer can write a long run without holding it in memory.
///
/// Velocity is updated before position, and position advances with the
/// post-step velocity.  The two axes draw independent variates (x first) and
/// never interact.
pub struct LangevinIntegrator<S: UniformSource> {
    params:     PhysicalParameters,
    sampler:    NormalSampler<S>,
    /// `γ / m`, cached.
    decay:      f64,
    /// `sqrt(2γkBT/m) · sqrt(dt)`, cached.
    step_noise: f64,
    state:      ParticleState,
    /// Records emitted so far, `0..=N + 1`.
    emitted:    u64,
}

impl<S: UniformSource> LangevinIntegrator<S> {
    /// Validate `params` and position the particle at the origin.
    ///
    /// Fails before any step is taken if the mass is zero or the time step is
    /// not positive.  Strict physical-domain checks are the caller's choice
    /// (see [`PhysicalParameters::validate_strict`]).
    pub fn new(params: PhysicalParameters, sampler: NormalSampler<S>) -> SimResult<Self> {
        params.validate()?;
        Ok(Self {
            decay: params.decay(),
            step_noise: params.step_noise(),
            params,
            sampler,
            state: ParticleState::ORIGIN,
            emitted: 0,
        })
    }

    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    /// The most recently emitted state (the origin before the first call to
    /// `next`).
    pub fn state(&self) -> &ParticleState {
        &self.state
    }

    /// Steps taken so far.
    pub fn steps_taken(&self) -> u64 {
        self.emitted.saturating_sub(1)
    }

    /// `true` once all `N + 1` records have been emitted.
    pub fn is_done(&self) -> bool {
        self.emitted > self.params.n_steps
    }

    /// Drain the remaining records into `observer`.
    ///
    /// Stops early, without taking further steps, once
    /// [`keep_going`](TrajectoryObserver::keep_going) returns `false`.
    /// Returns the number of records delivered by this call.
    pub fn run<O: TrajectoryObserver>(&mut self, observer: &mut O) -> u64 {
        observer.on_run_start(&self.params);
        let mut delivered = 0;
        while observer.keep_going() {
            let Some(state) = self.next() else { break };
            observer.on_record(self.emitted - 1, &state);
            delivered += 1;
        }
        observer.on_run_end(delivered);
        if self.is_done() {
            tracing::debug!(records = delivered, last = %self.state, "trajectory complete");
        } else {
            tracing::debug!(
                records = delivered,
                steps = self.steps_taken(),
                n_steps = self.params.n_steps,
                last = %self.state,
                "trajectory stopped by observer"
            );
        }
        delivered
    }

    /// Give back the sampler, e.g. to continue its stream elsewhere.
    pub fn into_sampler(self) -> NormalSampler<S> {
        self.sampler
    }

    /// Collect the remaining records into a [`Trajectory`].
    pub fn collect_trajectory(self) -> Trajectory {
        self.collect()
    }

    /// Apply one Euler–Maruyama step; `n` is the 1-based step index.
    fn step(&mut self, n: u64) {
        let dt = self.params.dt;
        let eta_x = self.sampler.draw();
        let eta_y = self.sampler.draw();

        let s = &mut self.state;
        s.vx = s.vx - self.decay * s.vx * dt + self.step_noise * eta_x;
        s.vy = s.vy - self.decay * s.vy * dt + self.step_noise * eta_y;
        s.x += s.vx * dt;
        s.y += s.vy * dt;
        s.t = n as f64 * dt;
    }
}

impl<S: UniformSource> Iterator for LangevinIntegrator<S> {
    type Item = ParticleState;

    fn next(&mut self) -> Option<ParticleState> {
        match self.emitted {
            0 => {}
            n if n <= self.params.n_steps => self.step(n),
            _ => return None,
        }
        self.emitted += 1;
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.params.n_steps.saturating_add(1).saturating_sub(self.emitted);
        match usize::try_from(remaining) {
            Ok(r) => (r, Some(r)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<S: UniformSource> FusedIterator for LangevinIntegrator<S> {}
