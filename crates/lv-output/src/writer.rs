//! The `OutputWriter` trait implemented by all backend writers.

use lv_core::ParticleState;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
///
/// Writers emit their header on construction, so a writer that exists has
/// already committed to a format.
pub trait OutputWriter {
    /// Write one trajectory record.
    fn write_state(&mut self, state: &ParticleState) -> OutputResult<()>;

    /// Flush all buffered output.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
