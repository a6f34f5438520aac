//! Streaming sample statistics and density histograms.

use std::f64::consts::TAU;

use crate::{AnalysisError, AnalysisResult};

/// Running count, mean and unbiased variance (Welford's update).
///
/// Accumulates without storing samples, so a sampling run of any length can
/// be summarised in constant memory.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleStats {
    count: u64,
    mean:  f64,
    /// Sum of squared deviations from the running mean.
    m2:    f64,
}

impl SampleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(values: &[f64]) -> Self {
        values.iter().copied().collect()
    }

    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// `NaN` when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.mean }
    }

    /// Unbiased (n − 1) variance; `NaN` with fewer than two samples.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Standard error of the mean.
    pub fn std_error(&self) -> f64 {
        (self.variance() / self.count as f64).sqrt()
    }
}

impl Extend<f64> for SampleStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl FromIterator<f64> for SampleStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Density of the standard normal distribution, `exp(−z²/2) / sqrt(2π)`.
pub fn standard_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / TAU.sqrt()
}

// ── Histogram ─────────────────────────────────────────────────────────────────

/// One bin of a [`Histogram`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    /// Bin centre.
    pub mid:     f64,
    pub count:   u64,
    /// `count / (total · width)`; integrates to the in-range fraction.
    pub density: f64,
}

/// Equal-width bins over `[lo, hi]`; the last bin includes `hi`.
///
/// Values outside the range count toward the total but land in no bin, so
/// densities stay normalised against every sample seen.  Non-finite values
/// are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    lo:     f64,
    hi:     f64,
    width:  f64,
    counts: Vec<u64>,
    total:  u64,
}

impl Histogram {
    /// A zero-width range `lo == hi` is widened to `[lo − ½, hi + ½]`.
    pub fn new(lo: f64, hi: f64, bins: usize) -> AnalysisResult<Self> {
        if bins == 0 {
            return Err(AnalysisError::InvalidHistogram("needs at least one bin"));
        }
        if !(lo.is_finite() && hi.is_finite()) || hi < lo {
            return Err(AnalysisError::InvalidHistogram("range must be finite with lo <= hi"));
        }
        let (lo, hi) = if hi == lo { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        Ok(Self {
            lo,
            hi,
            width: (hi - lo) / bins as f64,
            counts: vec![0; bins],
            total: 0,
        })
    }

    /// Bin `values` over their own finite `[min, max]`.
    pub fn from_values(values: &[f64], bins: usize) -> AnalysisResult<Self> {
        let (lo, hi) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if lo > hi {
            return Err(AnalysisError::EmptySample);
        }
        let mut hist = Self::new(lo, hi, bins)?;
        hist.extend(values.iter().copied());
        Ok(hist)
    }

    pub fn push(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.total += 1;
        if value < self.lo || value > self.hi {
            return;
        }
        let last = self.counts.len() - 1;
        let idx = ((value - self.lo) / self.width) as usize;
        self.counts[idx.min(last)] += 1;
    }

    /// Finite values pushed so far, in range or not.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        let norm = self.total as f64 * self.width;
        self.counts.iter().enumerate().map(move |(i, &count)| HistogramBin {
            mid: self.lo + (i as f64 + 0.5) * self.width,
            count,
            density: count as f64 / norm,
        })
    }
}

impl Extend<f64> for Histogram {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}
