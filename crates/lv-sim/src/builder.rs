//! Fluent builder for a seeded [`LangevinIntegrator`].

use lv_core::{NormalSampler, PhysicalParameters, SimConfig, SimRng};

use crate::{LangevinIntegrator, SimResult};

/// Fluent builder for [`LangevinIntegrator<SimRng>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                              |
/// |-----------------|--------------------------------------|
/// | `.seed(s)`      | Wall-clock seed (logged at `info`)   |
/// | `.strict(b)`    | `false`: negative T / γ pass through |
///
/// # Example
///
/// ```rust,ignore
/// let integrator = IntegratorBuilder::new(params)
///     .seed(42)
///     .strict(true)
///     .build()?;
/// ```
pub struct IntegratorBuilder {
    params: PhysicalParameters,
    seed:   Option<u64>,
    strict: bool,
}

impl IntegratorBuilder {
    pub fn new(params: PhysicalParameters) -> Self {
        Self { params, seed: None, strict: false }
    }

    /// Take parameters, seed and validation mode from a resolved config.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        Ok(Self {
            params: config.parameters()?,
            seed:   config.seed,
            strict: config.strict,
        })
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject negative temperature / friction at build time.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The seed that [`build`](Self::build) will use, resolving the
    /// wall-clock fallback now so it can be reported.
    pub fn resolve_seed(&mut self) -> u64 {
        *self.seed.get_or_insert_with(lv_core::seed_from_time)
    }

    /// Validate and return a ready-to-run integrator.
    pub fn build(mut self) -> SimResult<LangevinIntegrator<SimRng>> {
        if self.strict {
            self.params.validate_strict()?;
        }
        let seed = self.resolve_seed();
        tracing::info!(
            seed,
            temperature = self.params.temperature,
            mass = self.params.mass,
            friction = self.params.friction,
            dt = self.params.dt,
            n_steps = self.params.n_steps,
            "building Langevin integrator"
        );
        LangevinIntegrator::new(self.params, NormalSampler::new(SimRng::new(seed)))
    }
}
