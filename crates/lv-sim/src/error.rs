use lv_core::LvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] LvError),
}

pub type SimResult<T> = Result<T, SimError>;
