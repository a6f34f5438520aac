//! Kinetic-energy statistics.
//!
//! At equilibrium each velocity component has variance `s² = kB T` (see
//! `PhysicalParameters::stationary_velocity_variance`), so
//! `E = ½ m (vx² + vy²)` is exponentially distributed with mean `m s²`.  At
//! unit mass this is the 2D Boltzmann law `P(E) = exp(−E / kB T) / kB T`.

use lv_core::{ParticleState, PhysicalParameters};
use lv_sim::Trajectory;

use crate::{AnalysisError, AnalysisResult, Histogram, SampleStats};

/// `½ m (vx² + vy²)`.
#[inline]
pub fn kinetic_energy(state: &ParticleState, mass: f64) -> f64 {
    0.5 * mass * state.speed_sq()
}

/// Exponential density of kinetic energy `e` with mean `mean`; the 2D
/// Boltzmann law when `mean = kB T`.
pub fn boltzmann_density(e: f64, mean: f64) -> f64 {
    if e < 0.0 { 0.0 } else { (-e / mean).exp() / mean }
}

/// Kinetic-energy summary over an ensemble, compared with equipartition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyStats {
    pub stats:         SampleStats,
    /// Expected mean, `m · kB T` (`kB T` at unit mass).
    pub equipartition: f64,
}

impl EnergyStats {
    /// Pool every record with `t ≥ t_from` across all members.
    ///
    /// Records before `t_from` are still relaxing from rest and would bias
    /// the mean low.
    pub fn from_ensemble(
        members: &[Trajectory],
        params:  &PhysicalParameters,
        t_from:  f64,
    ) -> AnalysisResult<Self> {
        if members.is_empty() {
            return Err(AnalysisError::EmptyEnsemble);
        }
        let stats = members
            .iter()
            .flat_map(|t| t.iter())
            .filter(|s| s.t >= t_from)
            .map(|s| kinetic_energy(s, params.mass))
            .collect();
        Ok(Self { stats, equipartition: params.mass * params.stationary_velocity_variance() })
    }

    /// Observed over expected mean; 1.0 at equilibrium.
    pub fn ratio(&self) -> f64 {
        self.stats.mean() / self.equipartition
    }
}

/// One bin of the kinetic-energy distribution next to its Boltzmann value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyBin {
    /// Bin centre.
    pub energy:    f64,
    pub density:   f64,
    /// [`boltzmann_density`] at `energy` with the expected mean `m · kB T`.
    pub boltzmann: f64,
}

/// Binned density of kinetic energy over `[0, E_max]` for records with
/// `t ≥ t_from`, where `E_max` is the largest energy observed.
pub fn energy_histogram(
    members: &[Trajectory],
    params:  &PhysicalParameters,
    t_from:  f64,
    bins:    usize,
) -> AnalysisResult<Vec<EnergyBin>> {
    if members.is_empty() {
        return Err(AnalysisError::EmptyEnsemble);
    }
    let energies: Vec<f64> = members
        .iter()
        .flat_map(|t| t.iter())
        .filter(|s| s.t >= t_from)
        .map(|s| kinetic_energy(s, params.mass))
        .filter(|e| e.is_finite())
        .collect();
    let e_max = energies.iter().copied().reduce(f64::max).ok_or(AnalysisError::EmptySample)?;

    let mut hist = Histogram::new(0.0, e_max, bins)?;
    hist.extend(energies);

    let mean = params.mass * params.stationary_velocity_variance();
    Ok(hist
        .bins()
        .map(|b| EnergyBin {
            energy:    b.mid,
            density:   b.density,
            boltzmann: boltzmann_density(b.mid, mean),
        })
        .collect())
}
