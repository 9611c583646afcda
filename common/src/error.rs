use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a candidate token is not a dotted-quad address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("segment '{segment}' is outside 0-255")]
    OctetOutOfRange { segment: String },

    #[error("segment '{segment}' contains a character that is not a digit")]
    InvalidCharacter { segment: String },

    #[error("expected 4 segments, found {found}")]
    SegmentCount { found: usize },
}

/// Failures of the file side of the pipeline.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("no file given")]
    NoInput,

    #[error("opening file {} failed: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading file {} failed: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("creating script {} failed: {source}", path.display())]
    CreateScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing script {} failed: {source}", path.display())]
    WriteScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
