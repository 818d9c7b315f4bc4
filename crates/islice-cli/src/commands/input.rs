//! Sources the `run` command can slice.
//!
//! Both are forward-only: lines are read lazily, so a slice that stops early
//! never reads the rest of the file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Elements fed to the executor. Read failures travel as elements.
pub type Lines = Box<dyn Iterator<Item = io::Result<String>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSpec {
    /// The integers `0..N`, rendered as text.
    Range(usize),
    /// One element per line of a file, or of stdin for `-`.
    Lines(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceSpec {
    pub fn open(&self) -> Result<Lines, InputError> {
        match self {
            SourceSpec::Range(len) => Ok(Box::new((0..*len).map(|i| Ok(i.to_string())))),
            SourceSpec::Lines(path) if path.as_os_str() == "-" => {
                Ok(Box::new(io::stdin().lock().lines()))
            }
            SourceSpec::Lines(path) => {
                let file = File::open(path).map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file).lines()))
            }
        }
    }
}
