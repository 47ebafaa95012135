use crate::types::ExtractError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

// Default value functions for serde
fn default_block_marker() -> String {
    "Issue ID:".to_string()
}

fn default_field_labels() -> Vec<String> {
    // Ordered longest-first so a more specific label is always tested before
    // any label it starts with. The parser also prefers the longest match
    // outright, so this ordering is a readability convention, not a
    // correctness requirement.
    [
        "Confidentiality Impact",
        "Availability Impact",
        "Integrity Impact",
        "Classification",
        "Fix Group ID",
        "Date Created",
        "Last Updated",
        "Source File",
        "How to Fix",
        "Issue ID",
        "Severity",
        "Location",
        "Status",
        "Notes",
        "Line",
        "CWE",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Configuration for the extraction engine.
///
/// The defaults cover the SAST report layout the engine was built against;
/// a YAML config file can re-target the marker and vocabulary for other
/// scanner formats without touching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Marker that opens a new issue block. Everything before its first
    /// occurrence in a chunk is report preamble and is discarded.
    #[serde(default = "default_block_marker")]
    pub block_marker: String,

    /// Recognized field labels. A line starting with one of these opens a
    /// field; any other non-blank line continues the field opened last.
    #[serde(default = "default_field_labels")]
    pub field_labels: Vec<String>,

    /// Drop findings whose block contained no recognized label at all.
    /// Off by default: empty records are preserved so callers can count
    /// blocks that failed to parse.
    #[serde(default)]
    pub drop_empty_findings: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            block_marker: default_block_marker(),
            field_labels: default_field_labels(),
            drop_empty_findings: false,
        }
    }
}

impl ExtractionConfig {
    /// Load config from file path (functional approach)
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ExtractionConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|_| {
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Check the caller-supplied contract before the engine runs.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.block_marker.trim().is_empty() {
            return Err(ExtractError::EmptyBlockMarker);
        }
        if self.field_labels.is_empty() {
            return Err(ExtractError::EmptyVocabulary);
        }
        if self.field_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ExtractError::BlankLabel);
        }
        Ok(())
    }
}
