use std::fs;
use std::path::{Path, PathBuf};

use quotemill_core::{ReferenceSnapshot, VersionRequest};
use serde::Deserialize;
use thiserror::Error;

/// A self-contained pricing run: the reference data snapshot plus the
/// version request, loaded from one TOML document.
#[derive(Debug, Deserialize)]
pub struct CalculationFile {
    #[serde(default)]
    pub snapshot: ReferenceSnapshot,
    pub request: VersionRequest,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read input file `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse input file `{path}`: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

impl InputError {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Read { .. } => "input_read",
            Self::Parse { .. } => "input_parse",
        }
    }
}

pub fn load(path: &Path) -> Result<CalculationFile, InputError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| InputError::Read { path: path.to_path_buf(), source })?;
    toml::from_str::<CalculationFile>(&raw)
        .map_err(|source| InputError::Parse { path: path.to_path_buf(), source })
}
