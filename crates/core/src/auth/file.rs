use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::errors::CoreError;

use super::traits::{CredentialStore, AUTH_TOKEN_KEY};

/// Persistent key/value token store backed by a small JSON file.
///
/// The file holds a flat JSON object, like browser local storage. The
/// token sits under [`AUTH_TOKEN_KEY`]; any other keys are left untouched.
/// A missing file means no token. Writers do not lock, last write wins.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, CoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(CoreError::Storage(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(CoreError::Storage(format!(
                "Failed to parse {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::Storage(format!("Failed to serialize credentials: {e}")))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get_token(&self) -> Option<String> {
        match self.read_entries() {
            Ok(entries) => entries
                .get(AUTH_TOKEN_KEY)
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(e) => {
                tracing::warn!("Ignoring unreadable credential file: {e}");
                None
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<(), CoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    fn clear_token(&self) -> Result<(), CoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(AUTH_TOKEN_KEY).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
