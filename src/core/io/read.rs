use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Failure while loading a sample file. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open sample file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number on line {line} ({content:?}): {source}")]
    Parse {
        line: usize,
        content: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Read a sample file: one floating-point value per line, no header.
///
/// # Arguments
/// * `filename` - Path to the text file
///
/// # Returns
/// The samples in file order. The whole file must parse; any bad line fails
/// the read and nothing is returned.
pub fn read_samples<P: AsRef<Path>>(filename: P) -> Result<Vec<f64>, ReadError> {
    let path = filename.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "reading sample file");
    parse_samples(BufReader::new(file))
}

/// Parse samples from any buffered reader, one value per line.
///
/// Surrounding whitespace is ignored, but a line that is empty after
/// trimming is rejected like any other non-numeric line.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<f64>, ReadError> {
    let mut samples = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| ReadError::Read {
            line: line_num + 1,
            source,
        })?;

        let text = line.trim();
        let value = text.parse::<f64>().map_err(|source| ReadError::Parse {
            line: line_num + 1,
            content: text.to_string(),
            source,
        })?;

        samples.push(value);
    }

    debug!(n = samples.len(), "samples loaded");
    Ok(samples)
}
