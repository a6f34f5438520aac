//! Whitespace-separated text tables.
//!
//! Rows are space-separated `{:.15e}` values (16 significant digits); an
//! optional header is a single `# `-prefixed line of column names.  Comment
//! lines also start with `#`, so the files load directly into gnuplot or
//! `numpy.loadtxt`.

use std::io::{BufWriter, Write};

use lv_core::ParticleState;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Buffered text-table writer over any `Write` sink.
pub struct TextWriter<W: Write> {
    sink:     BufWriter<W>,
    columns:  usize,
    rows:     u64,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    /// Trajectory table: header `# t x y vx vy`, five values per row.
    pub fn trajectory(sink: W) -> OutputResult<Self> {
        Self::with_columns(sink, &ParticleState::COLUMNS)
    }

    /// A table with a `# `-prefixed header naming `columns`.
    pub fn with_columns(sink: W, columns: &[&str]) -> OutputResult<Self> {
        let mut w = Self::headerless(sink, columns.len());
        w.begin_table(columns)?;
        Ok(w)
    }

    /// A table with no header line, e.g. one sample per line.
    pub fn headerless(sink: W, columns: usize) -> Self {
        Self {
            sink: BufWriter::new(sink),
            columns,
            rows: 0,
            finished: false,
        }
    }

    /// Write one row; `values.len()` must equal the column count.
    pub fn write_row(&mut self, values: &[f64]) -> OutputResult<()> {
        if values.len() != self.columns {
            return Err(OutputError::ColumnCount { expected: self.columns, got: values.len() });
        }
        let mut first = true;
        for v in values {
            if !first {
                self.sink.write_all(b" ")?;
            }
            write!(self.sink, "{v:.15e}")?;
            first = false;
        }
        self.sink.write_all(b"\n")?;
        self.rows += 1;
        Ok(())
    }

    /// Start another table in the same stream.  Writes a `# ` header for
    /// `columns`; later rows must have that many values.
    pub fn begin_table(&mut self, columns: &[&str]) -> OutputResult<()> {
        writeln!(self.sink, "# {}", columns.join(" "))?;
        self.columns = columns.len();
        Ok(())
    }

    /// Write a `# `-prefixed comment line.
    pub fn write_comment(&mut self, text: &str) -> OutputResult<()> {
        writeln!(self.sink, "# {text}")?;
        Ok(())
    }

    /// Data rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.sink.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_state(&mut self, state: &ParticleState) -> OutputResult<()> {
        self.write_row(&state.as_array())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.sink.flush()?;
        tracing::debug!(rows = self.rows, "text output flushed");
        Ok(())
    }
}
