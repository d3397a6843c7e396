//! Error types for the encode and decode pipelines.
//!
//! Each pipeline fails on the first problem it meets. Nothing is retried and no
//! partial output is reported as a success.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("file does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("output file {} already exists (use --force to overwrite)", path.display())]
    OutputExists { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("symbol {symbol} has no code in the table")]
    MissingCode { symbol: u8 },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("file does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("output file {} already exists (use --force to overwrite)", path.display())]
    OutputExists { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("invalid bit {found:?} at body offset {offset}")]
    InvalidBit { found: char, offset: usize },
    #[error("code body ends in the middle of a code after {decoded} symbols")]
    TruncatedBody { decoded: usize },
    #[error("code body present where the header allows none")]
    UnexpectedBody,
    #[error("code body missing for a header with more than one symbol")]
    MissingBody,
    #[error("header promises {expected} symbols but the body holds {found}")]
    CountMismatch { expected: u64, found: u64 },
}
