//! Observer trait for streaming records out of a run.

use lv_core::{ParticleState, PhysicalParameters};

/// Callbacks invoked by [`LangevinIntegrator::run`][crate::LangevinIntegrator::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl TrajectoryObserver for Progress {
///     fn on_record(&mut self, index: u64, state: &ParticleState) {
///         if index % self.every == 0 {
///             eprintln!("{index}: {state}");
///         }
///     }
/// }
/// ```
pub trait TrajectoryObserver {
    /// Called once before the first record.
    fn on_run_start(&mut self, _params: &PhysicalParameters) {}

    /// Called for every emitted record.  `index` is 0 for the initial state
    /// and `n` for the state after step `n`.
    fn on_record(&mut self, _index: u64, _state: &ParticleState) {}

    /// Called once after the last record.
    fn on_run_end(&mut self, _records: u64) {}

    /// Checked before each record; returning `false` ends the run early.
    fn keep_going(&self) -> bool {
        true
    }
}

impl<O: TrajectoryObserver + ?Sized> TrajectoryObserver for &mut O {
    fn on_run_start(&mut self, params: &PhysicalParameters) {
        (**self).on_run_start(params);
    }

    fn on_record(&mut self, index: u64, state: &ParticleState) {
        (**self).on_record(index, state);
    }

    fn on_run_end(&mut self, records: u64) {
        (**self).on_run_end(records);
    }

    fn keep_going(&self) -> bool {
        (**self).keep_going()
    }
}

/// An absent observer is a no-op; lets callers attach optional sinks.
impl<O: TrajectoryObserver> TrajectoryObserver for Option<O> {
    fn on_run_start(&mut self, params: &PhysicalParameters) {
        if let Some(o) = self {
            o.on_run_start(params);
        }
    }

    fn on_record(&mut self, index: u64, state: &ParticleState) {
        if let Some(o) = self {
            o.on_record(index, state);
        }
    }

    fn on_run_end(&mut self, records: u64) {
        if let Some(o) = self {
            o.on_run_end(records);
        }
    }

    fn keep_going(&self) -> bool {
        self.as_ref().is_none_or(|o| o.keep_going())
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: TrajectoryObserver, B: TrajectoryObserver> TrajectoryObserver for (A, B) {
    fn on_run_start(&mut self, params: &PhysicalParameters) {
        self.0.on_run_start(params);
        self.1.on_run_start(params);
    }

    fn on_record(&mut self, index: u64, state: &ParticleState) {
        self.0.on_record(index, state);
        self.1.on_record(index, state);
    }

    fn on_run_end(&mut self, records: u64) {
        self.0.on_run_end(records);
        self.1.on_run_end(records);
    }

    /// Stops as soon as either side stops.
    fn keep_going(&self) -> bool {
        self.0.keep_going() && self.1.keep_going()
    }
}
