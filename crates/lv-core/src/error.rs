//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `LvError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `lv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LvError {
    /// `mass == 0` makes both `γ/m` and `sqrt(2γkBT/m)` divide by zero.
    #[error("mass must be non-zero")]
    ZeroMass,

    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        value:  f64,
        reason: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lv-*` crates.
pub type LvResult<T> = Result<T, LvError>;
