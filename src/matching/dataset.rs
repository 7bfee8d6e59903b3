// Reference dataset loading.
//
// Each record is one line: `author,f1,f2,f3,f4,f5` with the features in
// signature order. Fields are trimmed, so `Jane Austen, 5.1, 0.9, ...` is
// accepted. Blank lines and `#` comments are skipped. Any other line that
// does not parse fails the whole load; a partially loaded reference set is
// never returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{DetectionError, Result};
use crate::signature::features::{FeatureType, Signature};
use crate::text::LossyLines;

/// One author and their reference signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    pub author: String,
    pub signature: Signature,
}

/// Ordered list of reference entries.
///
/// The list is the single source of truth for both lookup directions.
/// Nothing here assumes signatures or author names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceSet {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceSet {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Parse a reference set from a readable stream.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut entries = Vec::new();

        for (i, line) in LossyLines::new(reader).enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let entry = parse_record(trimmed).map_err(|reason| {
                DetectionError::MalformedDataset {
                    line: i + 1,
                    reason,
                }
            })?;
            debug!(author = %entry.author, "Loaded reference signature");
            entries.push(entry);
        }

        info!(authors = entries.len(), "Loaded reference dataset");
        Ok(Self { entries })
    }

    /// Open and parse a reference dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            DetectionError::InvalidArgument(format!(
                "cannot open dataset {}: {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Signature recorded for `author`. If the author appears more than
    /// once, the last row wins.
    pub fn signature_of(&self, author: &str) -> Option<&Signature> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.author == author)
            .map(|entry| &entry.signature)
    }

    /// Author recorded for `signature`. If several authors share the exact
    /// signature, the last row wins.
    pub fn author_of(&self, signature: &Signature) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.signature == *signature)
            .map(|entry| entry.author.as_str())
    }
}

impl<'a> IntoIterator for &'a ReferenceSet {
    type Item = &'a ReferenceEntry;
    type IntoIter = std::slice::Iter<'a, ReferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse a single `author,f1,...,f5` record.
fn parse_record(line: &str) -> std::result::Result<ReferenceEntry, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let expected = FeatureType::ALL.len() + 1;
    if fields.len() != expected {
        return Err(format!("expected {expected} fields, found {}", fields.len()));
    }

    let author = fields[0];
    if author.is_empty() {
        return Err("author name is empty".to_string());
    }

    let mut values = [0.0; 5];
    for ((slot, field), feature) in values.iter_mut().zip(&fields[1..]).zip(FeatureType::ALL) {
        let value = field
            .parse::<f64>()
            .map_err(|_| format!("{feature} value {field:?} is not a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(format!(
                "{feature} value {field:?} must be a non-negative finite number"
            ));
        }
        *slot = value;
    }

    Ok(ReferenceEntry {
        author: author.to_string(),
        signature: Signature::from_values(values),
    })
}
