use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The request data handed to a transport layer.
///
/// `params` is sent as a single JSON-encoded form field, `fields` as plain form
/// fields and `files` as file parts. Keys in `fields` and `files` share one
/// namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payload {
    params: IndexMap<String, Value>,
    fields: IndexMap<String, String>,
    files: IndexMap<String, PathBuf>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        params: IndexMap<String, Value>,
        fields: IndexMap<String, String>,
        files: IndexMap<String, PathBuf>,
    ) -> Self {
        Self {
            params,
            fields,
            files,
        }
    }

    pub fn params(&self) -> &IndexMap<String, Value> {
        &self.params
    }

    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn files(&self) -> &IndexMap<String, PathBuf> {
        &self.files
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Sets a top-level parameter, returning the previous value.
    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.params.insert(key.into(), value.into())
    }

    /// Removes a top-level parameter without disturbing the order of the others.
    pub fn remove_param(&mut self, key: &str) -> Option<Value> {
        self.params.shift_remove(key)
    }

    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn add_file(&mut self, key: impl Into<String>, path: impl AsRef<Path>) {
        self.files.insert(key.into(), path.as_ref().to_path_buf());
    }

    /// True when `key` names either a field or a file.
    pub fn has_key(&self, key: &str) -> bool {
        self.fields.contains_key(key) || self.files.contains_key(key)
    }

    /// Renders `params` as the JSON string sent in the `params` form field.
    pub fn params_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.params)?)
    }
}
