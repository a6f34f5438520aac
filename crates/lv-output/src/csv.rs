//! CSV output backend.
//!
//! Header `t,x,y,vx,vy`; values use Rust's shortest round-trip formatting so
//! a reader recovers every `f64` bit-for-bit.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use lv_core::ParticleState;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Writes a trajectory as CSV.
pub struct CsvWriter<W: Write> {
    inner:    Writer<W>,
    rows:     u64,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Self::start(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        Self::start(Writer::from_writer(sink))
    }

    fn start(mut inner: Writer<W>) -> OutputResult<Self> {
        inner.write_record(ParticleState::COLUMNS)?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_state(&mut self, state: &ParticleState) -> OutputResult<()> {
        self.inner.write_record(state.as_array().iter().map(f64::to_string))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        tracing::debug!(rows = self.rows, "CSV output flushed");
        Ok(())
    }
}
