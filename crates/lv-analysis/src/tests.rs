//! Tests for lv-analysis estimators.

use lv_core::{ParticleState, PhysicalParameters};
use lv_sim::{Ensemble, Trajectory};

fn line(points: &[(f64, f64, f64)]) -> Trajectory {
    points
        .iter()
        .map(|&(t, x, y)| ParticleState { t, x, y, ..ParticleState::ORIGIN })
        .collect()
}

#[cfg(test)]
mod stats {
    use lv_core::{NormalSampler, SimRng};

    use crate::{AnalysisError, Histogram, HistogramBin, SampleStats, standard_normal_pdf};

    #[test]
    fn known_values() {
        let s = SampleStats::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.count(), 4);
        assert!((s.mean() - 2.5).abs() < 1e-15);
        assert!((s.variance() - 5.0 / 3.0).abs() < 1e-15);
        assert!((s.std_error() - (5.0f64 / 12.0).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn degenerate_counts() {
        assert!(SampleStats::new().mean().is_nan());
        let one = SampleStats::from_slice(&[3.0]);
        assert_eq!(one.mean(), 3.0);
        assert!(one.variance().is_nan());
    }

    #[test]
    fn histogram_bins_and_densities() {
        let h = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(h.total(), 5);
        assert_eq!(h.width(), 1.0);
        let bins: Vec<HistogramBin> = h.bins().collect();
        let counts: Vec<u64> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, [1, 1, 1, 2], "maximum lands in the last bin");
        assert_eq!(bins[0].mid, 0.5);
        assert_eq!(bins[3].mid, 3.5);
        assert_eq!(bins[3].density, 0.4);
        let area: f64 = bins.iter().map(|b| b.density * h.width()).sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn histogram_out_of_range_and_non_finite() {
        let mut h = Histogram::new(0.0, 1.0, 2).unwrap();
        h.extend([-1.0, 2.0, f64::NAN, 0.25]);
        assert_eq!(h.total(), 3);
        let bins: Vec<HistogramBin> = h.bins().collect();
        assert_eq!((bins[0].count, bins[1].count), (1, 0));
        assert!((bins[0].density - 1.0 / 1.5).abs() < 1e-15);
    }

    #[test]
    fn histogram_degenerate_inputs() {
        let h = Histogram::from_values(&[2.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(h.bins().map(|b| b.count).collect::<Vec<_>>(), [0, 3]);

        assert!(matches!(Histogram::new(0.0, 1.0, 0), Err(AnalysisError::InvalidHistogram(_))));
        assert!(matches!(Histogram::new(1.0, 0.0, 3), Err(AnalysisError::InvalidHistogram(_))));
        assert!(matches!(Histogram::from_values(&[], 3), Err(AnalysisError::EmptySample)));
        assert!(matches!(Histogram::from_values(&[f64::NAN], 3), Err(AnalysisError::EmptySample)));
    }

    #[test]
    fn normal_samples_follow_the_gaussian_density() {
        let mut sampler = NormalSampler::new(SimRng::new(12));
        let samples: Vec<f64> = sampler.iter().take(100_000).collect();
        let h = Histogram::from_values(&samples, 20).unwrap();
        let mut checked = 0;
        for b in h.bins().filter(|b| b.mid.abs() < 1.5) {
            let want = standard_normal_pdf(b.mid);
            assert!(((b.density - want) / want).abs() < 0.05, "z={}: {} vs {want}", b.mid, b.density);
            checked += 1;
        }
        assert!(checked >= 4);
        assert!((standard_normal_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
    }

    #[test]
    fn streaming_matches_normal_contract() {
        let mut sampler = NormalSampler::new(SimRng::new(31));
        let s: SampleStats = sampler.iter().take(100_000).collect();
        assert!(s.mean().abs() < 0.02, "mean {}", s.mean());
        assert!((s.variance() - 1.0).abs() < 0.03, "variance {}", s.variance());
    }
}

#[cfg(test)]
mod msd {
    use super::*;
    use crate::{
        AnalysisError, MsdPoint, fit_diffusion, fit_diffusion_slope, mean_squared_displacement,
        theoretical_diffusion, theoretical_msd,
    };

    #[test]
    fn averages_squared_radius_per_time() {
        let a = line(&[(0.0, 0.0, 0.0), (1.0, 3.0, 4.0)]);
        let b = line(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0)]);
        let msd = mean_squared_displacement(&[a, b]).unwrap();
        assert_eq!(msd, [MsdPoint { t: 0.0, msd: 0.0 }, MsdPoint { t: 1.0, msd: 13.0 }]);
    }

    #[test]
    fn empty_and_ragged_ensembles_rejected() {
        assert!(matches!(mean_squared_displacement(&[]), Err(AnalysisError::EmptyEnsemble)));
        let a = line(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
        let b = line(&[(0.0, 0.0, 0.0)]);
        assert!(matches!(
            mean_squared_displacement(&[a, b]),
            Err(AnalysisError::LengthMismatch { run: 1, expected: 2, got: 1 })
        ));
    }

    #[test]
    fn ratio_fit_on_pure_diffusion() {
        let points: Vec<MsdPoint> = (0..=100)
            .map(|i| {
                let t = i as f64 * 0.1;
                MsdPoint { t, msd: 4.0 * 0.7 * t }
            })
            .collect();
        let d = fit_diffusion(&points, 2.0).unwrap();
        assert!((d - 0.7).abs() < 1e-12);
        assert!(fit_diffusion(&points, 100.0).is_none());
    }

    #[test]
    fn slope_fit_ignores_constant_offset() {
        let points: Vec<MsdPoint> = (0..=100)
            .map(|i| {
                let t = i as f64 * 0.1;
                MsdPoint { t, msd: 4.0 * 2.0 * (t - 1.5) }
            })
            .collect();
        let d = fit_diffusion_slope(&points, 5.0).unwrap();
        assert!((d - 2.0).abs() < 1e-9);
        assert!(fit_diffusion_slope(&points[..1], 0.0).is_none());
    }

    #[test]
    fn theory_limits() {
        let unit = PhysicalParameters::new(1.0, 1.0, 1.0, 0.01, 1000);
        assert_eq!(theoretical_diffusion(&unit), 1.0);
        assert_eq!(theoretical_msd(&unit, 0.0), 0.0);

        // t ≫ τ: 4D(t − 3τ/2)
        let late = theoretical_msd(&unit, 50.0);
        assert!((late - 4.0 * (50.0 - 1.5)).abs() < 1e-9, "got {late}");

        // t ≪ τ: σ²t³/3 per axis, two axes
        let early = theoretical_msd(&unit, 1e-2);
        let want = 2.0 * 2.0 * 1e-6 / 3.0;
        assert!(((early - want) / want).abs() < 0.02, "got {early}, want {want}");

        let frictionless = PhysicalParameters { friction: 0.0, ..unit };
        assert_eq!(theoretical_msd(&frictionless, 5.0), 0.0);
        assert!(theoretical_diffusion(&frictionless).is_infinite());
    }

    #[test]
    fn ensemble_msd_tracks_theory() {
        let params = PhysicalParameters::new(1.0, 1.0, 1.0, 0.01, 2000);
        let members = Ensemble::new(params, 400, 2718).unwrap().run().unwrap();
        let msd = mean_squared_displacement(&members).unwrap();
        assert_eq!(msd.len(), 2001);
        assert_eq!(msd[0].msd, 0.0);

        for idx in [500, 1000, 2000] {
            let p = msd[idx];
            let want = theoretical_msd(&params, p.t);
            assert!(((p.msd - want) / want).abs() < 0.2, "t={}: msd {} vs {want}", p.t, p.msd);
        }

        let d = fit_diffusion_slope(&msd, 5.0).unwrap();
        assert!((d - theoretical_diffusion(&params)).abs() < 0.35, "D = {d}");
    }

    #[test]
    fn zero_temperature_ensemble_has_zero_msd() {
        let params = PhysicalParameters::new(0.0, 1.0, 1.0, 0.01, 100);
        let members = Ensemble::new(params, 5, 1).unwrap().run().unwrap();
        let msd = mean_squared_displacement(&members).unwrap();
        assert!(msd.iter().all(|p| p.msd == 0.0));
    }
}

#[cfg(test)]
mod energy {
    use super::*;
    use crate::{
        AnalysisError, EnergyStats, boltzmann_density, energy_histogram, kinetic_energy,
    };

    #[test]
    fn kinetic_energy_formula() {
        let s = ParticleState { vx: 3.0, vy: 4.0, ..ParticleState::ORIGIN };
        assert_eq!(kinetic_energy(&s, 2.0), 25.0);
    }

    #[test]
    fn boltzmann_density_normalised() {
        let kt = 1.5;
        let de = 1e-3;
        let total: f64 = (0..30_000).map(|i| boltzmann_density((i as f64 + 0.5) * de, kt) * de).sum();
        assert!((total - 1.0).abs() < 1e-3, "integral {total}");
        assert_eq!(boltzmann_density(-1.0, kt), 0.0);
    }

    #[test]
    fn equilibrium_energy_matches_equipartition() {
        let params = PhysicalParameters::new(1.5, 1.0, 1.0, 0.01, 1000);
        let members = Ensemble::new(params, 200, 99).unwrap().run().unwrap();
        let e = EnergyStats::from_ensemble(&members, &params, 5.0).unwrap();
        assert_eq!(e.equipartition, 1.5);
        assert!((e.ratio() - 1.0).abs() < 0.1, "ratio {}", e.ratio());
        // Exponential law: standard deviation ≈ mean.
        assert!((e.stats.std_dev() / e.stats.mean() - 1.0).abs() < 0.15);
    }

    #[test]
    fn relaxation_window_is_respected() {
        let params = PhysicalParameters::new(1.0, 1.0, 1.0, 0.01, 10);
        let members = Ensemble::new(params, 2, 1).unwrap().run().unwrap();
        let all = EnergyStats::from_ensemble(&members, &params, 0.0).unwrap();
        let late = EnergyStats::from_ensemble(&members, &params, 0.05 - 1e-9).unwrap();
        assert_eq!(all.stats.count(), 22);
        assert_eq!(late.stats.count(), 12);
    }

    #[test]
    fn energy_histogram_tracks_boltzmann_law() {
        let params = PhysicalParameters::new(1.5, 1.0, 1.0, 0.01, 1000);
        let members = Ensemble::new(params, 200, 99).unwrap().run().unwrap();
        let bins = energy_histogram(&members, &params, 5.0, 40).unwrap();
        assert_eq!(bins.len(), 40);

        let width = bins[1].energy - bins[0].energy;
        assert!((bins[0].energy - 0.5 * width).abs() < 1e-12, "range starts at E = 0");
        let area: f64 = bins.iter().map(|b| b.density * width).sum();
        assert!((area - 1.0).abs() < 1e-9, "area {area}");

        let mut checked = 0;
        for b in bins.iter().filter(|b| b.boltzmann > 0.2) {
            assert_eq!(b.boltzmann, boltzmann_density(b.energy, 1.5));
            let rel = (b.density - b.boltzmann) / b.boltzmann;
            assert!(rel.abs() < 0.15, "E={}: {} vs {}", b.energy, b.density, b.boltzmann);
            checked += 1;
        }
        assert!(checked >= 2, "only {checked} bins checked");
    }

    #[test]
    fn energy_histogram_needs_records() {
        let params = PhysicalParameters::new(1.0, 1.0, 1.0, 0.01, 10);
        let members = Ensemble::new(params, 2, 1).unwrap().run().unwrap();
        assert!(matches!(
            energy_histogram(&members, &params, 1.0, 5),
            Err(AnalysisError::EmptySample)
        ));
        assert!(matches!(
            energy_histogram(&[], &params, 0.0, 5),
            Err(AnalysisError::EmptyEnsemble)
        ));
        // At rest every energy is 0; the range widens instead of failing.
        let cold = PhysicalParameters { temperature: 0.0, ..params };
        let members = Ensemble::new(cold, 2, 1).unwrap().run().unwrap();
        let bins = energy_histogram(&members, &cold, 0.0, 2).unwrap();
        assert_eq!(bins.len(), 2);
    }

    #[test]
    fn empty_ensemble_rejected() {
        let params = PhysicalParameters::new(1.0, 1.0, 1.0, 0.01, 10);
        assert!(matches!(
            EnergyStats::from_ensemble(&[], &params, 0.0),
            Err(AnalysisError::EmptyEnsemble)
        ));
    }
}
