//! # nussifold
//!
//! Predicts a maximal base-pairing secondary structure of an RNA sequence
//! with the Nussinov algorithm and reports it as a list of pairs and in
//! dot-bracket notation.
//!
//! ```bash
//! nussifold GGGAAAUCC
//! echo GGGAAAUCC | nussifold -f json
//! nussifold -i rna.fa --all -vv
//! ```

mod config;
mod error;
mod input;
mod output;

use std::io::{self, BufWriter, Write};
use log::info;

use nf_nussinov::NussinovDP;
use nf_nussinov::MAX_LENGTH;

use crate::config::Config;
use crate::error::CliError;
use crate::input::read_sequence;
use crate::output::{write_result, FoldResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = config::cli().get_matches();
    let config = Config::from(&matches);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let mut sequence = read_sequence(&config.input)?;
    if config.uppercase {
        sequence.make_ascii_uppercase();
    }
    if sequence.len() > MAX_LENGTH {
        return Err(CliError::SequenceTooLong(sequence.len()).into());
    }
    info!("Folding sequence of length {}.", sequence.len());

    let ndp = NussinovDP::from(sequence.as_str());
    if config.dump_table {
        eprint!("{}", ndp.score_table());
    }

    let result = FoldResult::new(&ndp, config.all_structures);
    info!("Found {} base pairs.", result.score);

    let mut writer = BufWriter::new(io::stdout());
    write_result(&mut writer, &result, config.format)?;
    writer.flush()?;

    Ok(())
}
