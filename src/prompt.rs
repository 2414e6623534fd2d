//! Interactive prompt for a file path and a mode
//!
//! Used when the command line does not name both. The mode question repeats
//! until the answer starts with `e` or `d`.

use crate::domain::Mode;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const INSTRUCTIONS: &str = "Create a text file with lines of binary messages separated by line breaks. \
The individual bits should not have any spaces between them. If you are encoding messages, \
there should be 4 bits per message; if you are decoding messages, there should be 7 bits per message.";

pub const PATH_QUESTION: &str = "Enter the path to this file (e.g. testFiles/exampleFile.txt)";

pub const MODE_QUESTION: &str = "Enter e if you are encoding. Enter d if you are decoding";

pub const INVALID_MODE: &str = "Invalid mode; please type e or d";

pub const RESTART_HINT: &str = "Restart the program to encode or decode another file";

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub path: PathBuf,
    pub mode: Mode,
}

/// Read one line without its line ending; `None` at end of input
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn end_of_input(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("input ended before a {} was given", what),
    )
}

/// Ask for a file path, then for a mode, re-asking while the mode is invalid
pub fn prompt_for_job<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Job> {
    writeln!(output, "{}", INSTRUCTIONS)?;
    writeln!(output, "{}", PATH_QUESTION)?;
    output.flush()?;
    let path = read_answer(&mut input)?.ok_or_else(|| end_of_input("file path"))?;

    writeln!(output, "{}", MODE_QUESTION)?;
    output.flush()?;
    let mode = loop {
        let answer = read_answer(&mut input)?.ok_or_else(|| end_of_input("mode"))?;
        if let Some(mode) = Mode::from_user_input(&answer) {
            break mode;
        }
        writeln!(output, "{}", INVALID_MODE)?;
        output.flush()?;
    };

    Ok(Job {
        path: PathBuf::from(path),
        mode,
    })
}
