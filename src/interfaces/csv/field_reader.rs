use crate::application::builder::AssemblyBuilder;
use crate::error::{AssemblyError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One `key,value` row of a fields file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct FieldRecord {
    pub key: String,
    pub value: String,
}

/// Reads assembly fields from a CSV source with a `key,value` header.
///
/// Whitespace around cells is trimmed. Every row must have exactly two cells;
/// values containing commas must be quoted, with the quote directly after the
/// separator.
pub struct FieldReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FieldReader<R> {
    /// Creates a new `FieldReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records(self) -> impl Iterator<Item = Result<FieldRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AssemblyError::from))
    }

    /// Feeds every record into [`AssemblyBuilder::set_field`], stopping at the
    /// first error. Returns the number of fields set.
    pub fn apply(self, builder: &mut AssemblyBuilder) -> Result<usize> {
        let mut count = 0;
        for record in self.records() {
            let record = record?;
            builder.set_field(record.key, record.value)?;
            count += 1;
        }
        Ok(count)
    }
}

impl FieldReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}
