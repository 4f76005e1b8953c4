//! Return the document source untouched

use std::{fs, io, path::PathBuf};

use super::CliError;

/// Options for the raw command
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    /// Document text given inline
    pub input: Option<String>,
    /// Document file
    pub file: Option<PathBuf>,
}

/// Read the document text as-is. A file that does not exist yields `None`.
pub fn read_raw(options: &RawOptions) -> Result<Option<String>, CliError> {
    if let Some(text) = &options.input {
        return Ok(Some(text.clone()));
    }

    let path = options.file.as_ref().ok_or(CliError::NoInput)?;
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CliError::Io(e)),
    }
}
