use std::result;

use common::error::CommonError;
use thiserror::Error;

pub type Result<T> = result::Result<T, ComposerError>;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("reqwest: {0:?}")]
    Reqwest(#[from] reqwest::Error),
    #[error("serde: {0:?}")]
    Serde(#[from] serde_json::Error),
    #[error("io: {0:?}")]
    Io(#[from] std::io::Error),
    #[error("url: {0:?}")]
    Url(#[from] url::ParseError),
    #[error("common: {0:?}")]
    Common(#[from] CommonError),
}

/// Missing input that blocks a submission before anything is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no area drawn")]
    MissingShape,
    #[error("event name is empty")]
    MissingName,
    #[error("start or end date is empty")]
    MissingDates,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("invalid event: {0}")]
    Invalid(#[from] ValidationError),
    #[error("rejected by server: {0:?}")]
    Rejected(Option<String>),
    #[error("transport: {0}")]
    Transport(#[from] ComposerError),
}
