//! `TrajectoryOutputObserver<W>`: bridges `TrajectoryObserver` to an `OutputWriter`.

use lv_core::ParticleState;
use lv_sim::TrajectoryObserver;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TrajectoryObserver`] that writes every record to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the first error no further rows are written
/// and the run is asked to stop; once `run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct TrajectoryOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::debug!(error = %e, "trajectory output failed; stopping run");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TrajectoryObserver for TrajectoryOutputObserver<W> {
    fn on_record(&mut self, _index: u64, state: &ParticleState) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_state(state);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _records: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn keep_going(&self) -> bool {
        self.last_error.is_none()
    }
}
