use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{IngestError, Result};

/// Read and deserialize a JSON artifact.
pub fn read_json_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })
}
