//! Seedable uniform sources.
//!
//! Every sampler owns its source outright; there is no process-wide
//! generator.  Independent trajectories that run concurrently each get their
//! own [`SimRng`], derived deterministically from a root seed with
//! [`SimRng::child`].
//!
//! A source produces *native* integers in `[0, RAW_MAX]`.  Mapping those onto
//! the open interval `(0, 1)` is the sampler's job (see
//! [`NormalSampler::uniform_open`][crate::NormalSampler::uniform_open]).

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::{LvError, LvResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UniformSource ─────────────────────────────────────────────────────────────

/// A stateful generator of uniformly distributed integers in `[0, RAW_MAX]`.
///
/// `RAW_MAX + 2` must be exactly representable as an `f64` (i.e. at most
/// 2^53) so the open-interval rescaling never rounds onto 0 or 1.
pub trait UniformSource {
    /// Largest value [`next_raw`](Self::next_raw) can return.
    const RAW_MAX: u64;

    /// Advance the source by one draw.
    fn next_raw(&mut self) -> u64;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Deterministic uniform source for one trajectory.
///
/// Wraps `SmallRng` and exposes its 32-bit output, so `RAW_MAX = u32::MAX`.
/// Not `Clone`: two copies of one stream would silently produce correlated
/// trajectories.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the wall clock.  Returns the seed used so callers can log it
    /// and reproduce the run later.
    pub fn from_time() -> (Self, u64) {
        let seed = seed_from_time();
        (Self::new(seed), seed)
    }

    /// Derive a child `SimRng` with a different seed offset, used to seed
    /// ensemble members deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }
}

impl UniformSource for SimRng {
    const RAW_MAX: u64 = u32::MAX as u64;

    #[inline]
    fn next_raw(&mut self) -> u64 {
        u64::from(self.0.next_u32())
    }
}

/// Nanoseconds since the Unix epoch, folded to 64 bits.
///
/// A clock set before 1970 yields 0 rather than an error; the seed is logged
/// either way.
pub fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Replays a fixed sequence of raw draws, cycling when exhausted.
///
/// `MAX` is the native range, so `ScriptedSource::<2>` maps raws `0, 1, 2` to
/// uniforms `0.25, 0.5, 0.75`.  Used for golden-value regression fixtures
/// where every uniform must be known by hand.
#[derive(Clone, Debug)]
pub struct ScriptedSource<const MAX: u64> {
    raws: Vec<u64>,
    next: usize,
}

impl<const MAX: u64> ScriptedSource<MAX> {
    pub fn new(raws: Vec<u64>) -> LvResult<Self> {
        if raws.is_empty() {
            return Err(LvError::Config("scripted source needs at least one draw".into()));
        }
        if let Some(&bad) = raws.iter().find(|&&r| r > MAX) {
            return Err(LvError::Config(format!(
                "scripted draw {bad} exceeds source maximum {MAX}"
            )));
        }
        Ok(Self { raws, next: 0 })
    }

    /// Number of draws taken so far (not wrapped).
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl<const MAX: u64> UniformSource for ScriptedSource<MAX> {
    const RAW_MAX: u64 = MAX;

    fn next_raw(&mut self) -> u64 {
        let raw = self.raws[self.next % self.raws.len()];
        self.next += 1;
        raw
    }
}
