//! `lv-output`: trajectory writers for the Langevin workspace.
//!
//! | Writer       | Format                                                    |
//! |--------------|-----------------------------------------------------------|
//! | `TextWriter` | `# t x y vx vy` header, whitespace-separated `{:.15e}`    |
//! | `CsvWriter`  | `t,x,y,vx,vy` header, shortest round-trip decimals         |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`TrajectoryOutputObserver`], which implements
//! `lv_sim::TrajectoryObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lv_output::{TextWriter, TrajectoryOutputObserver};
//!
//! let writer = TextWriter::trajectory(std::io::stdout().lock())?;
//! let mut obs = TrajectoryOutputObserver::new(writer);
//! integrator.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     return Err(e.into());
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryOutputObserver;
pub use text::TextWriter;
pub use writer::OutputWriter;
