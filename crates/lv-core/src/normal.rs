//! Standard-normal sampling via the Box–Muller transform.
//!
//! ```text
//! u  = (raw + 1) / (RAW_MAX + 2)            ∈ (0, 1), never 0 or 1
//! Z  = sqrt(-2 ln u1) · cos(2π u2)          ~ N(0, 1)
//! ```
//!
//! Only the cosine branch is used, so every variate costs exactly two
//! uniform draws.  That fixed cost is what makes trajectories reproducible
//! draw-for-draw from a seed.

use std::f64::consts::TAU;

use crate::UniformSource;

/// Produces i.i.d. standard-normal variates from an owned [`UniformSource`].
pub struct NormalSampler<S: UniformSource> {
    source: S,
}

impl<S: UniformSource> NormalSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One uniform draw rescaled into the open interval `(0, 1)`.
    ///
    /// The extreme native outputs `0` and `RAW_MAX` land on
    /// `1 / (RAW_MAX + 2)` and `(RAW_MAX + 1) / (RAW_MAX + 2)`.  Without the
    /// shift, `ln(0)` would turn the variate into `±∞` or `NaN`.
    #[inline]
    pub fn uniform_open(&mut self) -> f64 {
        let raw = self.source.next_raw();
        (raw as f64 + 1.0) / (S::RAW_MAX as f64 + 2.0)
    }

    /// Draw one standard-normal variate.  Advances the source by two draws.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        let u1 = self.uniform_open();
        let u2 = self.uniform_open();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    /// Fill `out` with consecutive variates.
    pub fn fill(&mut self, out: &mut [f64]) {
        for slot in out {
            *slot = self.draw();
        }
    }

    /// An endless stream of variates borrowing this sampler.
    pub fn iter(&mut self) -> impl Iterator<Item = f64> + '_ {
        std::iter::from_fn(move || Some(self.draw()))
    }

    /// Mutable access to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
