//! Physical parameters of a 2D Langevin run.
//!
//! # Coefficients
//!
//! ```text
//! decay       = γ / m
//! noise_scale = sqrt(2 γ kB T / m)      (fluctuation-dissipation)
//! step_noise  = noise_scale · sqrt(dt)
//! ```
//!
//! With these two coefficients the stationary velocity variance per axis is
//! `kB T`.
//!
//! # Validation modes
//!
//! [`validate`](PhysicalParameters::validate) rejects only what makes the
//! run meaningless before it starts: zero mass and a non-positive or
//! non-finite time step.  Negative temperature or friction pass through and
//! produce a `NaN` noise amplitude.
//! [`validate_strict`](PhysicalParameters::validate_strict) rejects those as
//! well.

use crate::{LvError, LvResult};

/// Immutable parameter set for one trajectory (or one ensemble).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalParameters {
    /// Temperature `T`.
    pub temperature: f64,
    /// Particle mass `m`.  Must be non-zero.
    pub mass: f64,
    /// Friction coefficient `γ`.
    pub friction: f64,
    /// Boltzmann constant `kB`.  1.0 in reduced units.
    pub kb: f64,
    /// Time step `dt`.  Must be positive.
    pub dt: f64,
    /// Number of integration steps `N`.  A run emits `N + 1` records.
    pub n_steps: u64,
}

impl PhysicalParameters {
    /// Reduced-unit Boltzmann constant.
    pub const DEFAULT_KB: f64 = 1.0;

    pub fn new(temperature: f64, mass: f64, friction: f64, dt: f64, n_steps: u64) -> Self {
        Self {
            temperature,
            mass,
            friction,
            kb: Self::DEFAULT_KB,
            dt,
            n_steps,
        }
    }

    /// Override the Boltzmann constant.
    pub fn with_kb(mut self, kb: f64) -> Self {
        self.kb = kb;
        self
    }

    /// Damping rate `γ / m`.
    #[inline]
    pub fn decay(&self) -> f64 {
        self.friction / self.mass
    }

    /// Noise amplitude `sqrt(2 γ kB T / m)`.
    #[inline]
    pub fn noise_scale(&self) -> f64 {
        (2.0 * self.friction * self.kb * self.temperature / self.mass).sqrt()
    }

    /// Per-step noise amplitude `sqrt(2 γ kB T / m) · sqrt(dt)`.
    #[inline]
    pub fn step_noise(&self) -> f64 {
        self.noise_scale() * self.dt.sqrt()
    }

    /// Stationary per-axis velocity variance of the step rule,
    /// `noise_scale² / (2 decay) = kB T`.
    ///
    /// The mass cancels because the noise amplitude carries `1/m` under the
    /// square root.  For unit mass this is the textbook `kB T / m`.
    pub fn stationary_velocity_variance(&self) -> f64 {
        self.kb * self.temperature
    }

    /// Simulated time covered by a full run, `N · dt`.
    pub fn duration(&self) -> f64 {
        self.n_steps as f64 * self.dt
    }

    /// `true` when a derived coefficient is `NaN` or infinite, i.e. the run
    /// would emit non-finite values.
    pub fn is_degenerate(&self) -> bool {
        !(self.decay().is_finite() && self.step_noise().is_finite())
    }

    /// Reject parameters that make a run impossible to start.
    pub fn validate(&self) -> LvResult<()> {
        if self.mass == 0.0 {
            return Err(LvError::ZeroMass);
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(LvError::InvalidParameter {
                name:   "dt",
                value:  self.dt,
                reason: "time step must be positive and finite",
            });
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus the physical-domain checks that the
    /// default mode deliberately leaves open.
    pub fn validate_strict(&self) -> LvResult<()> {
        self.validate()?;
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(LvError::InvalidParameter {
                name:   "mass",
                value:  self.mass,
                reason: "mass must be positive and finite",
            });
        }
        non_negative("temperature", self.temperature)?;
        non_negative("friction", self.friction)?;
        if !(self.kb.is_finite() && self.kb > 0.0) {
            return Err(LvError::InvalidParameter {
                name:   "kb",
                value:  self.kb,
                reason: "Boltzmann constant must be positive and finite",
            });
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> LvResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LvError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative and finite",
        })
    }
}
