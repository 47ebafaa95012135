use crate::types::{ExtractionResult, Finding, SeverityCount, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The serialization-ready report format. Carries a schema version so
/// consumers can detect and handle shape changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub schema_version: String,
    pub extraction_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Name of the text source this report was extracted from.
    pub source: String,
    pub profile: ExtractionProfile,
    pub summary: Vec<SeverityCount>,
    pub findings: Vec<Finding>,
}

/// Quantitative measurement of an extraction run — deterministic,
/// mechanically computed from the result. Travels with the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionProfile {
    pub chunk_count: usize,
    pub summary_row_count: usize,
    pub finding_count: usize,
    /// Findings whose block carried no recognized label. Zero when the
    /// drop-empty policy is on, since those never reach the result.
    pub empty_finding_count: usize,
    /// How often each recognized label actually appeared across findings.
    pub label_counts: HashMap<String, usize>,
}

impl ExtractionProfile {
    pub fn from_result(result: &ExtractionResult, chunk_count: usize) -> Self {
        let mut label_counts: HashMap<String, usize> = HashMap::new();
        let mut empty_finding_count = 0;

        for finding in &result.findings {
            if finding.is_empty() {
                empty_finding_count += 1;
            }
            for label in finding.labels() {
                *label_counts.entry(label.to_string()).or_insert(0) += 1;
            }
        }

        Self {
            chunk_count,
            summary_row_count: result.summary.len(),
            finding_count: result.findings.len(),
            empty_finding_count,
            label_counts,
        }
    }
}

/// Envelope-free view: just the summary rows and findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatReport {
    pub format: String,
    pub summary: Vec<SeverityCount>,
    pub findings: Vec<Finding>,
}

impl ExtractionReport {
    pub fn new(result: ExtractionResult, source: &str, chunk_count: usize) -> Self {
        let profile = ExtractionProfile::from_result(&result, chunk_count);
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            extraction_id: Uuid::new_v4(),
            created_at: Utc::now(),
            source: source.to_string(),
            profile,
            summary: result.summary,
            findings: result.findings,
        }
    }

    pub fn to_flat_format(&self) -> FlatReport {
        FlatReport {
            format: "flat".to_string(),
            summary: self.summary.clone(),
            findings: self.findings.clone(),
        }
    }

    pub fn save_to_json(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn save_with_format(&self, path: &str, format: &str) -> Result<()> {
        match format {
            "flat" => {
                let flat = self.to_flat_format();
                let json = serde_json::to_string_pretty(&flat)?;
                std::fs::write(path, json)?;
            }
            _ => {
                self.save_to_json(path)?;
            }
        }
        Ok(())
    }
}
