use std::result;

use composer::ComposerError;
use composer::SubmitError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("BadRequest: {0}")]
    BadRequest(String),
    #[error("FileNotFound: {0}")]
    FileNotFound(String),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("Config: {0:?}")]
    Config(#[from] config::ConfigError),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(tracing::subscriber::SetGlobalDefaultError),
    #[error("Serde: {0:?}")]
    Serde(#[from] serde_json::Error),
    #[error("Composer: {0:?}")]
    Composer(#[from] ComposerError),
    #[error("Submit: {0}")]
    Submit(#[from] SubmitError),
}
