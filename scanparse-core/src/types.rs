use serde::{Deserialize, Serialize};

/// The schema version stamped on every report output.
/// Bump this when the output shape changes.
pub const SCHEMA_VERSION: &str = "0.1.0";

// ===== SEVERITY SUMMARY TYPES =====
// The summary table is a fixed six-column header followed by one line of
// counts. Categories never appear more than once in a merged result.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityCategory {
    Critical,
    High,
    Medium,
    Low,
    Info,
    Total,
}

impl SeverityCategory {
    /// Fixed column order of the summary table header. Merged summaries are
    /// always emitted in this order.
    pub const CANONICAL_ORDER: [SeverityCategory; 6] = [
        SeverityCategory::Critical,
        SeverityCategory::High,
        SeverityCategory::Medium,
        SeverityCategory::Low,
        SeverityCategory::Info,
        SeverityCategory::Total,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityCategory::Critical => "Critical",
            SeverityCategory::High => "High",
            SeverityCategory::Medium => "Medium",
            SeverityCategory::Low => "Low",
            SeverityCategory::Info => "Info",
            SeverityCategory::Total => "Total",
        }
    }

    /// Position of this category in [`Self::CANONICAL_ORDER`].
    pub fn canonical_index(self) -> usize {
        match self {
            SeverityCategory::Critical => 0,
            SeverityCategory::High => 1,
            SeverityCategory::Medium => 2,
            SeverityCategory::Low => 3,
            SeverityCategory::Info => 4,
            SeverityCategory::Total => 5,
        }
    }
}

/// One (category, count) row of the severity summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCount {
    pub category: SeverityCategory,
    pub count: u64,
}

// ===== FINDING TYPES =====

/// One recognized label/value pair inside a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub label: String,
    pub value: String,
}

/// One structured record extracted from a single issue block.
///
/// Entries keep the order their fields were first opened in the source text.
/// Labels that never appeared in the block are simply absent, not
/// null-filled. Values are free text and may carry sub-structure of their own
/// (a Location value combining file path and line number, for example).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub fields: Vec<FieldEntry>,
}

impl Finding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a label. A label already present is updated in
    /// place; its position in the entry order does not change.
    pub fn insert(&mut self, label: &str, value: String) {
        if let Some(entry) = self.fields.iter_mut().find(|e| e.label == label) {
            entry.value = value;
        } else {
            self.fields.push(FieldEntry {
                label: label.to_string(),
                value,
            });
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ===== EXTRACTION RESULTS =====

/// What one text chunk yielded: the summary rows and findings found in it.
/// Either side may be empty — a page can carry the summary table, issue
/// blocks, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkExtraction {
    pub summary: Vec<SeverityCount>,
    pub findings: Vec<Finding>,
}

/// Merged output across all chunks of a document.
///
/// Summary rows are per-category sums in canonical order, omitting
/// categories never observed. Findings keep source order: chunk order,
/// then block order within a chunk. Built once per extraction call and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub summary: Vec<SeverityCount>,
    pub findings: Vec<Finding>,
}

// ===== ERRORS =====

/// Caller-contract violations.
///
/// Malformed report text is never an error — missing summary tables, blocks
/// without recognized labels, and unparseable counts all degrade to partial
/// or empty results.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The block-start marker is empty or whitespace.
    #[error("block marker must not be empty")]
    EmptyBlockMarker,

    /// The label vocabulary has no entries.
    #[error("label vocabulary must not be empty")]
    EmptyVocabulary,

    /// The label vocabulary contains an empty or whitespace-only label.
    #[error("label vocabulary contains a blank label")]
    BlankLabel,
}
