//! Descriptor input parsing
//!
//! Reads one descriptor record or an array of records from a JSON file.
//! Only the descriptor fields are interpreted; every field is optional and
//! falls back to its documented default.

use anyhow::{Context, Result};
use emofp_core::AudioDescriptorSet;
use serde::Deserialize;
use std::path::Path;

/// One input record: optional track tag plus audio descriptors
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptorRecord {
    /// Free-form track identifier, echoed into the output
    #[serde(default)]
    pub track: Option<String>,
    #[serde(flatten)]
    pub descriptors: AudioDescriptorSet,
}

/// A file holds either a single record or an array of records
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputFile {
    Many(Vec<DescriptorRecord>),
    One(DescriptorRecord),
}

/// Read descriptor records from a JSON file
pub fn read_records(path: &Path) -> Result<Vec<DescriptorRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    parse_records(&content)
        .with_context(|| format!("Failed to parse descriptor JSON in {}", path.display()))
}

fn parse_records(content: &str) -> Result<Vec<DescriptorRecord>> {
    let parsed: InputFile = serde_json::from_str(content)?;
    Ok(match parsed {
        InputFile::Many(records) => records,
        InputFile::One(record) => vec![record],
    })
}
