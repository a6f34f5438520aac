//! Mean squared displacement and diffusion-coefficient estimates.
//!
//! For `dv = −v/τ dt + σ dW` with `τ = m/γ` and `σ = sqrt(2γkBT/m)`, a
//! particle released at rest from the origin has per-axis position variance
//!
//! ```text
//! σx²(t) = σ²τ² [ t − 2τ(1 − e^{−t/τ}) + (τ/2)(1 − e^{−2t/τ}) ]
//! ```
//!
//! so `⟨r²⟩ = 2 σx²` grows as `t³` at first and as `4D(t − 3τ/2)` for
//! `t ≫ τ`, with `D = σ²τ²/2 = kB T m / γ`.  At unit mass that is the
//! Einstein relation `D = kB T / γ`.

use lv_core::PhysicalParameters;
use lv_sim::Trajectory;

use crate::{AnalysisError, AnalysisResult};

/// Ensemble-averaged `⟨x² + y²⟩` at time `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MsdPoint {
    pub t:   f64,
    pub msd: f64,
}

/// Average `x² + y²` across `members` at every time index.
///
/// All members must have the same length; times are taken from the first.
pub fn mean_squared_displacement(members: &[Trajectory]) -> AnalysisResult<Vec<MsdPoint>> {
    let first = members.first().ok_or(AnalysisError::EmptyEnsemble)?;
    let len = first.len();
    if let Some((run, t)) = members.iter().enumerate().find(|(_, t)| t.len() != len) {
        return Err(AnalysisError::LengthMismatch { run, expected: len, got: t.len() });
    }

    let runs = members.len() as f64;
    let mut sums = vec![0.0; len];
    for member in members {
        for (sum, state) in sums.iter_mut().zip(member) {
            *sum += state.displacement_sq();
        }
    }

    Ok(first
        .iter()
        .zip(sums)
        .map(|(state, sum)| MsdPoint { t: state.t, msd: sum / runs })
        .collect())
}

/// Mean of `msd / 4t` over points with `t ≥ t_start` (and `t > 0`).
///
/// Biased low by the `3τ/2` offset unless `t_start ≫ τ`; see
/// [`fit_diffusion_slope`] for an offset-free estimate.  `None` if no point
/// qualifies.
pub fn fit_diffusion(points: &[MsdPoint], t_start: f64) -> Option<f64> {
    let ratios: Vec<f64> = points
        .iter()
        .filter(|p| p.t > 0.0 && p.t >= t_start)
        .map(|p| p.msd / (4.0 * p.t))
        .collect();
    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Least-squares slope of `msd` against `t` over `t ≥ t_start`, divided by 4.
///
/// `None` with fewer than two qualifying points or zero spread in `t`.
pub fn fit_diffusion_slope(points: &[MsdPoint], t_start: f64) -> Option<f64> {
    let fit: Vec<&MsdPoint> = points.iter().filter(|p| p.t >= t_start).collect();
    if fit.len() < 2 {
        return None;
    }
    let n = fit.len() as f64;
    let t_mean = fit.iter().map(|p| p.t).sum::<f64>() / n;
    let m_mean = fit.iter().map(|p| p.msd).sum::<f64>() / n;
    let (sxy, sxx) = fit.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
        let dt = p.t - t_mean;
        (sxy + dt * (p.msd - m_mean), sxx + dt * dt)
    });
    if sxx == 0.0 {
        return None;
    }
    Some(sxy / sxx / 4.0)
}

/// Long-time diffusion coefficient `D = σ²τ²/2` of the step rule.
///
/// Equals the Einstein value `kB T / γ` at unit mass.  Infinite for `γ = 0`.
pub fn theoretical_diffusion(params: &PhysicalParameters) -> f64 {
    params.kb * params.temperature * params.mass / params.friction
}

/// Expected `⟨r²⟩(t)` for a particle released at rest from the origin.
///
/// With `γ = 0` the noise amplitude vanishes too, so the particle never
/// moves and the result is 0.
pub fn theoretical_msd(params: &PhysicalParameters, t: f64) -> f64 {
    if params.friction == 0.0 {
        return 0.0;
    }
    let tau = params.mass / params.friction;
    let amplitude = params.noise_scale() * tau;
    let per_axis = amplitude * amplitude
        * (t - 2.0 * tau * (1.0 - (-t / tau).exp()) + 0.5 * tau * (1.0 - (-2.0 * t / tau).exp()));
    2.0 * per_axis
}
