use assembly_payload::{AssemblyBuilder, BuilderConfig};
use std::fs::File;
use std::io::{Error, Write};
use std::path::{Path, PathBuf};

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, Error> {
    let path = dir.join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// A builder backed by the real filesystem with the default expiry.
pub fn local_builder() -> AssemblyBuilder {
    AssemblyBuilder::with_config(BuilderConfig::default())
}

/// Step names under `params.steps`, in payload order.
pub fn step_names(payload: &assembly_payload::Payload) -> Vec<String> {
    payload
        .param("steps")
        .and_then(|steps| steps.as_object())
        .map(|steps| steps.keys().cloned().collect())
        .unwrap_or_default()
}
