//! File I/O utilities
//!
//! Reading serde documents from disk, with the file path folded into every
//! error message.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ControlsError;

/// Read a JSON document, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, ControlsError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;

    serde_json::from_reader(reader)
        .map_err(|e| ControlsError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a YAML document, returning an error if the file doesn't exist
pub fn read_yaml_required<T, P>(path: P) -> Result<T, ControlsError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;

    serde_yaml::from_reader(reader)
        .map_err(|e| ControlsError::Yaml(format!("Failed to parse {}: {}", path.display(), e)))
}

fn open_required(path: &Path) -> Result<BufReader<File>, ControlsError> {
    if !path.exists() {
        return Err(ControlsError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| ControlsError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    Ok(BufReader::new(file))
}
