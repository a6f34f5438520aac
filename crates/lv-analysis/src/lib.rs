//! `lv-analysis`: estimators over normal samples and Langevin ensembles.
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`stats`]  | `SampleStats` (Welford mean / variance), `Histogram`         |
//! | [`msd`]    | Ensemble mean squared displacement, diffusion estimates      |
//! | [`energy`] | Kinetic energy, `EnergyStats`, Boltzmann comparison          |
//!
//! In 2D the long-time limit is `⟨r²⟩ ≈ 4 D t`.  At unit mass `D` is the
//! Einstein value `kB T / γ` and the equilibrium kinetic energy is
//! `⟨E⟩ = kB T`; [`msd`] and [`energy`] give the general forms.

pub mod energy;
pub mod error;
pub mod msd;
pub mod stats;

#[cfg(test)]
mod tests;

pub use energy::{EnergyBin, EnergyStats, boltzmann_density, energy_histogram, kinetic_energy};
pub use error::{AnalysisError, AnalysisResult};
pub use msd::{
    MsdPoint, fit_diffusion, fit_diffusion_slope, mean_squared_displacement,
    theoretical_diffusion, theoretical_msd,
};
pub use stats::{Histogram, HistogramBin, SampleStats, standard_normal_pdf};
