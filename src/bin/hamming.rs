//! Hamming(7,4) command-line tool
//!
//! `hamming e messages.txt` encodes 4-bit rows, `hamming d codewords.txt`
//! decodes 7-bit rows and fixes single flipped bits. Without both arguments
//! the tool asks for them interactively.

use anyhow::{Context, Result};
use hamming74::domain::Mode;
use hamming74::pipeline::{run_file, CodecOutput};
use hamming74::prompt::{prompt_for_job, Job, RESTART_HINT};
use hamming74::reporters::{CodecReporter, ConsoleCodecReporter, Reporter, SilentCodecReporter};
use hamming74::CodecConfig;
use std::io::{self, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = hamming74::parse_args();
    let quiet = matches.get_flag("quiet");
    let config = CodecConfig::from_args(&matches);

    let mode = matches.get_one::<Mode>("mode").copied();
    let input = matches.get_one::<String>("input").map(PathBuf::from);

    let (job, interactive) = match (mode, input) {
        (Some(mode), Some(path)) => (Job { path, mode }, false),
        _ => {
            let stdin = io::stdin();
            let job = prompt_for_job(stdin.lock(), io::stdout())
                .context("Failed to read file path and mode")?;
            (job, true)
        }
    };

    let reporter: Box<dyn CodecReporter> = if quiet {
        Box::new(SilentCodecReporter::new())
    } else {
        Box::new(ConsoleCodecReporter::new())
    };

    let output = match run_file(job.mode, &job.path, &config, reporter.as_ref()) {
        Ok(output) => output,
        Err(err) => {
            reporter.report_error(&err.to_string());
            if interactive {
                println!("{}", RESTART_HINT);
            }
            std::process::exit(1);
        }
    };

    print_rows(&output).context("Failed to write output rows")?;

    if interactive {
        println!("{}", RESTART_HINT);
    }
    Ok(())
}

fn print_rows(output: &CodecOutput) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in output.rendered_rows() {
        writeln!(out, "{}", row)?;
    }
    out.flush()
}
