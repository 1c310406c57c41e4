use std::process::ExitCode;

use clap::{Command, Arg, value_parser};
use log::{info, error};
use stem_frequency::{
    output::{self, OutputFormat},
    pipeline::{DEFAULT_COUNT, DEFAULT_INPUT_PATH},
    stopwords::DEFAULT_STOPWORDS_PATH,
    StemFrequency, StopwordSet,
};

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("Stem Frequency")
        .about("Lists the most common word stems in a text file")
        .arg(Arg::new("input")
            .default_value(DEFAULT_INPUT_PATH))
        .arg(Arg::new("stopwords")
            .short('s')
            .long("stopwords")
            .default_value(DEFAULT_STOPWORDS_PATH))
        .arg(Arg::new("count")
            .short('n')
            .long("count")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .value_parser(OutputFormat::NAMES)
            .default_value("text"))
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let stopwords_path = matches.get_one::<String>("stopwords").unwrap();
    let count = matches.get_one::<usize>("count").copied().unwrap_or(DEFAULT_COUNT);
    let format: OutputFormat = match matches.get_one::<String>("format").unwrap().parse() {
        Ok(f) => f,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    info!("loading stopwords from {}", stopwords_path);
    let stopwords = match StopwordSet::from_path(stopwords_path) {
        Ok(s) => s,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    let stem_frequency = StemFrequency::new(stopwords);
    let stems = match stem_frequency.find_common_stems(input, count) {
        Ok(stems) => stems,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    match output::render(&stems, format) {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!("error rendering results: {}", err);
            ExitCode::FAILURE
        },
    }
}
