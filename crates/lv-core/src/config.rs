//! Run configuration with documented defaults.
//!
//! `SimConfig` is resolved once (from defaults, an optional JSON file and
//! command-line overrides) and then turned into [`PhysicalParameters`] by
//! [`SimConfig::parameters`], which applies the selected validation mode.

use crate::{LvResult, PhysicalParameters};

/// Top-level configuration for a simulation run.
///
/// | Field         | Default  |
/// |---------------|----------|
/// | `temperature` | 1.0      |
/// | `mass`        | 1.0      |
/// | `friction`    | 1.0      |
/// | `kb`          | 1.0      |
/// | `dt`          | 0.01     |
/// | `n_steps`     | 1000     |
/// | `seed`        | `None` (wall-clock seed) |
/// | `strict`      | `false`  |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub temperature: f64,
    pub mass:        f64,
    pub friction:    f64,
    pub kb:          f64,
    pub dt:          f64,
    pub n_steps:     u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: Option<u64>,

    /// Reject negative temperature / friction instead of letting them
    /// propagate as `NaN` noise.
    pub strict: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            mass:        1.0,
            friction:    1.0,
            kb:          PhysicalParameters::DEFAULT_KB,
            dt:          0.01,
            n_steps:     1000,
            seed:        None,
            strict:      false,
        }
    }
}

impl SimConfig {
    /// Build validated physical parameters for this run.
    pub fn parameters(&self) -> LvResult<PhysicalParameters> {
        let params = PhysicalParameters::new(
            self.temperature,
            self.mass,
            self.friction,
            self.dt,
            self.n_steps,
        )
        .with_kb(self.kb);

        if self.strict {
            params.validate_strict()?;
        } else {
            params.validate()?;
        }

        if params.is_degenerate() {
            tracing::warn!(
                temperature = params.temperature,
                friction = params.friction,
                mass = params.mass,
                "noise amplitude is not finite; trajectory will contain NaN"
            );
        }
        Ok(params)
    }
}
