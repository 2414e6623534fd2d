use crate::domain::Mode;
use clap::{Arg, ArgAction, Command};

/// Turn a command-line mode word into a [`Mode`]
pub fn parse_mode(value: &str) -> Result<Mode, String> {
    match value {
        "e" | "encode" => Ok(Mode::Encode),
        "d" | "decode" => Ok(Mode::Decode),
        other => Err(format!(
            "Invalid mode '{}'; expected e, encode, d or decode",
            other
        )),
    }
}

pub fn build_cli() -> Command {
    Command::new("hamming")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hamming(7,4) encoder and single-bit error corrector")
        .after_help(
            "Without MODE and INPUT the program asks for them interactively.\n\
             Each input line holds 4 bits to encode or 7 bits to decode, e.g. 1010 or 1011010.",
        )
        .arg(
            Arg::new("mode")
                .help("e/encode to encode 4-bit messages, d/decode to correct 7-bit codewords")
                .index(1)
                .value_parser(parse_mode),
        )
        .arg(
            Arg::new("input")
                .help("File with one row of bits per line")
                .index(2),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - print only the output rows")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for computation (0 = auto-detect)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
