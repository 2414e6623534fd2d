//! Reading and validating rows of bits
//!
//! Each line of the source is one row of `0`/`1` characters with no
//! separators. Carriage returns are ignored so files written on Windows read
//! the same. The first bad line stops the read.

mod error;

pub use error::{InputError, InputResult};

use crate::domain::BitRow;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a single line into a row of width `N`
///
/// Length is checked before characters, so a short line with a bad character
/// is reported as a length problem. `line_number` is 1-based.
pub fn parse_row<const N: usize>(line: &str, line_number: usize) -> InputResult<BitRow<N>> {
    let cleaned: Vec<char> = line.chars().filter(|&c| c != '\r').collect();

    if cleaned.len() != N {
        return Err(InputError::LengthMismatch {
            line: line_number,
            length: cleaned.len(),
            expected: N,
        });
    }

    let mut row = BitRow::zeros();
    for (i, &c) in cleaned.iter().enumerate() {
        match c {
            '0' => {}
            '1' => row.set(i, true),
            other => {
                return Err(InputError::InvalidCharacter {
                    character: other,
                    line: line_number,
                })
            }
        }
    }
    Ok(row)
}

/// Read every line of `reader` as a row of width `N`
///
/// Lines are read as raw bytes, so bytes that are not valid UTF-8 show up as
/// an invalid character on their line rather than as a read failure.
/// `source_name` only appears in error messages.
pub fn read_rows<const N: usize, R: BufRead>(
    mut reader: R,
    source_name: &str,
) -> InputResult<Vec<BitRow<N>>> {
    let mut rows = Vec::new();
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|source| InputError::SourceUnavailable {
                source_name: source_name.to_string(),
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        let line = String::from_utf8_lossy(&buffer);
        rows.push(parse_row::<N>(&line, line_number)?);
    }

    debug!("Read {} rows of width {} from {}", rows.len(), N, source_name);
    Ok(rows)
}

/// Open `path` for buffered reading
pub fn open_source<P: AsRef<Path>>(path: P) -> InputResult<BufReader<File>> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| InputError::SourceUnavailable {
            source_name: path.display().to_string(),
            source,
        })
}

/// Open `path` and read it as rows of width `N`
pub fn read_rows_from_path<const N: usize, P: AsRef<Path>>(path: P) -> InputResult<Vec<BitRow<N>>> {
    let path = path.as_ref();
    let reader = open_source(path)?;
    read_rows::<N, _>(reader, &path.display().to_string())
}
