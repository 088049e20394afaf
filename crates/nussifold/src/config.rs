//! Command-line options.

use std::path::PathBuf;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Argument(String),
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub format: OutputFormat,
    pub uppercase: bool,
    pub all_structures: bool,
    pub dump_table: bool,
    pub log_level: LevelFilter,
}

pub fn cli() -> Command {
    Command::new("nussifold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Predict a maximal base-pairing RNA secondary structure (Nussinov)")
        .arg(
            Arg::new("sequence")
                .value_name("SEQUENCE")
                .help("RNA sequence (default: read from --input or stdin)"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .conflicts_with("sequence")
                .help("Read the sequence from a (FASTA) file"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format: text or json"),
        )
        .arg(
            Arg::new("uppercase")
                .short('u')
                .long("uppercase")
                .action(ArgAction::SetTrue)
                .help("Convert the sequence to uppercase before folding"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Also report every co-optimal structure"),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .action(ArgAction::SetTrue)
                .help("Dump the score table to stderr (diagnostics)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Suppress all log messages"),
        )
}

impl From<&ArgMatches> for Config {
    fn from(matches: &ArgMatches) -> Self {
        let input = if let Some(seq) = matches.get_one::<String>("sequence") {
            InputSource::Argument(seq.clone())
        } else if let Some(path) = matches.get_one::<String>("input") {
            InputSource::File(PathBuf::from(path))
        } else {
            InputSource::Stdin
        };

        let format = match matches.get_one::<String>("format").map(|s| s.as_str()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        let log_level = if matches.get_flag("quiet") {
            LevelFilter::Off
        } else {
            match matches.get_count("verbose") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Config {
            input,
            format,
            uppercase: matches.get_flag("uppercase"),
            all_structures: matches.get_flag("all"),
            dump_table: matches.get_flag("table"),
            log_level,
        }
    }
}
