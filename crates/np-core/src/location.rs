//! Source locations and the file registry.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, NetlistError};

/// A source file record from the dump's `files` section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceFile {
    /// Identifier the XML uses to reference this file.
    pub id: String,
    /// Path of the source file as reported by the elaborator.
    pub filename: String,
    /// Language tag emitted by the elaborator.
    pub language: String,
}

/// Registry mapping file identifiers to their records.
#[derive(Debug, Clone, Default)]
pub struct FileTable {
    files: BTreeMap<String, SourceFile>,
}

impl FileTable {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file record under its identifier.
    pub fn insert(&mut self, file: SourceFile) {
        self.files.insert(file.id.clone(), file);
    }

    /// Looks up a file record by identifier.
    pub fn lookup(&self, id: &str) -> Option<&SourceFile> {
        self.files.get(id)
    }

    /// Returns the number of registered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true when no files are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A source region within a registered file.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Location {
    /// Identifier of the file this location refers to.
    pub file_id: String,
    /// First line of the region.
    pub start_line: u32,
    /// First column of the region.
    pub start_col: u32,
    /// Last line of the region.
    pub end_line: u32,
    /// Last column of the region.
    pub end_col: u32,
}

fn location_error(loc: &str, detail: impl Into<String>) -> NetlistError {
    NetlistError::Malformed(
        ErrorInfo::new("loc-format", detail).detail("loc", loc.to_string()),
    )
}

impl Location {
    /// Parses the `fileId,startLine,startCol,endLine,endCol` tuple emitted
    /// by the elaborator.
    pub fn parse(loc: &str) -> Result<Self, NetlistError> {
        let mut parts = loc.split(',');
        let file_id = parts
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| location_error(loc, "location tuple is missing the file id"))?
            .to_string();
        let mut fields = [0u32; 4];
        for field in fields.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| location_error(loc, "location tuple has too few fields"))?;
            *field = part
                .parse()
                .map_err(|_| location_error(loc, "location field is not numeric"))?;
        }
        if parts.next().is_some() {
            return Err(location_error(loc, "location tuple has too many fields"));
        }
        Ok(Self {
            file_id,
            start_line: fields[0],
            start_col: fields[1],
            end_line: fields[2],
            end_col: fields[3],
        })
    }

    /// Renders the location as `filename:line`, resolving the file through
    /// the registry. Unless `full_names` is set the filename is reduced to
    /// its final path component.
    pub fn describe(&self, files: &FileTable, full_names: bool) -> String {
        let filename = match files.lookup(&self.file_id) {
            Some(file) if full_names => file.filename.clone(),
            Some(file) => file
                .filename
                .rsplit('/')
                .next()
                .unwrap_or(file.filename.as_str())
                .to_string(),
            None => self.file_id.clone(),
        };
        format!("{}:{}", filename, self.start_line)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.file_id, self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}
