use fantoccini::error::{CmdError, NewSessionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("WebDriver session error: {0}")]
    Session(#[from] NewSessionError),

    #[error("WebDriver command failed: {0}")]
    Command(#[from] CmdError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid category filter: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error("Unexpected script result: {0}")]
    ScriptResult(String),
}

pub type Result<T> = std::result::Result<T, Error>;
