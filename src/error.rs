// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordFreqError {
    #[error("failed to read input file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file '{path}' is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Decode { path: PathBuf, valid_up_to: usize },

    #[error("cannot resolve a locale usable for case folding: {reason}")]
    LocaleResolution { reason: String },

    #[error("failed to write report to '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
