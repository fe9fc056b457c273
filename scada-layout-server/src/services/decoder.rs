use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Yaml,
    Json,
}

impl FileType {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(FileType::Yaml),
            "json" => Some(FileType::Json),
            _ => None,
        }
    }
}

/// Reads `path` and decodes it into `T`.
pub fn decode_file<T: DeserializeOwned>(path: &Path, file_type: FileType) -> Result<T, LayoutError> {
    let decode_error = |message: String| LayoutError::Decode {
        path: path.display().to_string(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| decode_error(e.to_string()))?;

    match file_type {
        FileType::Yaml => serde_yaml::from_str(&content).map_err(|e| decode_error(e.to_string())),
        FileType::Json => serde_json::from_str(&content).map_err(|e| decode_error(e.to_string())),
    }
}
