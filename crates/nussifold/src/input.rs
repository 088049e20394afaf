//! Reading the sequence to fold.
//!
//! Plain input: the first whitespace-separated token is the sequence.
//! FASTA input (first non-blank line starts with `>`): the sequence of the
//! first record that has one.

use std::fs::File;
use std::io::{self, Read};
use bio::io::fasta;

use crate::config::InputSource;
use crate::error::CliError;

pub fn read_sequence(source: &InputSource) -> Result<String, CliError> {
    match source {
        InputSource::Argument(seq) => parse_sequence(seq.as_bytes()),
        InputSource::File(path) => parse_sequence(File::open(path)?),
        InputSource::Stdin => parse_sequence(io::stdin().lock()),
    }
}

pub fn parse_sequence<R: Read>(mut reader: R) -> Result<String, CliError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let content = content.trim_start();

    if content.starts_with('>') {
        return first_fasta_sequence(content.as_bytes());
    }
    content.split_whitespace()
        .next()
        .map(String::from)
        .ok_or(CliError::MissingSequence)
}

fn first_fasta_sequence<R: Read>(reader: R) -> Result<String, CliError> {
    for result in fasta::Reader::new(reader).records() {
        let record = result.map_err(|e| CliError::Fasta(e.to_string()))?;
        if !record.seq().is_empty() {
            return Ok(String::from_utf8_lossy(record.seq()).into_owned());
        }
    }
    Err(CliError::MissingSequence)
}
