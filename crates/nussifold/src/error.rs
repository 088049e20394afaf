use std::fmt;
use std::error;
use std::io;

use nf_nussinov::MAX_LENGTH;

/// Everything that can go wrong between reading input and writing results.
#[derive(Debug)]
pub enum CliError {
    /// Reading the input or writing the output failed.
    Io(io::Error),

    /// The input did not contain a sequence.
    MissingSequence,

    /// The sequence is longer than the supported index range.
    SequenceTooLong(usize),

    /// The FASTA input could not be parsed.
    Fasta(String),

    /// JSON serialization failed.
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingSequence => write!(f, "No sequence found in input"),
            Self::SequenceTooLong(n) => write!(f,
                "Sequence of length {n} exceeds the maximum length of {MAX_LENGTH}"),
            Self::Fasta(e) => write!(f, "FASTA parse error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl error::Error for CliError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
