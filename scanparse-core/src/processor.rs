use crate::config::ExtractionConfig;
use crate::extract::{extract_summary, parse_block, split_blocks};
use crate::report::ExtractionReport;
use crate::source::TextSource;
use crate::types::*;
use anyhow::Result;
use std::time::Instant;

/// Runs the extraction passes over report text.
///
/// Construction validates the caller-supplied config; extraction itself
/// never fails — irregular text degrades to partial or empty results. The
/// processor holds no mutable state, so the same input always produces the
/// same output and concurrent use needs no coordination.
pub struct ReportProcessor {
    config: ExtractionConfig,
}

impl ReportProcessor {
    pub fn new(config: ExtractionConfig) -> Result<Self, ExtractError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Processor with the stock marker and vocabulary.
    pub fn with_defaults() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract summary rows and findings from one merged text string.
    ///
    /// The summary pass and the block pass run independently over the same
    /// text; either side may come back empty. When the config asks for it,
    /// findings whose block had no recognized label are dropped here, not
    /// in the block parser, which never filters.
    pub fn extract_from_single_text(&self, text: &str) -> ChunkExtraction {
        let summary = extract_summary(text);

        let mut findings: Vec<Finding> = split_blocks(text, &self.config.block_marker)
            .into_iter()
            .map(|block| parse_block(block, &self.config.field_labels))
            .collect();

        if self.config.drop_empty_findings {
            findings.retain(|f| !f.is_empty());
        }

        ChunkExtraction { summary, findings }
    }

    /// Extract from ordered chunks (one per page) and merge.
    ///
    /// Summary counts are summed per category and emitted in canonical
    /// order, omitting categories no chunk reported — a document with no
    /// summary table anywhere merges to an empty summary, not six zero
    /// rows. Findings are concatenated in chunk order with no dedup.
    pub fn extract_summary_and_findings<S: AsRef<str>>(&self, chunks: &[S]) -> ExtractionResult {
        let mut totals: [Option<u64>; SeverityCategory::CANONICAL_ORDER.len()] =
            [None; SeverityCategory::CANONICAL_ORDER.len()];
        let mut findings = Vec::new();

        for chunk in chunks {
            let extraction = self.extract_from_single_text(chunk.as_ref());
            for row in extraction.summary {
                let slot = &mut totals[row.category.canonical_index()];
                *slot = Some(slot.unwrap_or(0).saturating_add(row.count));
            }
            findings.extend(extraction.findings);
        }

        let summary = SeverityCategory::CANONICAL_ORDER
            .iter()
            .filter_map(|category| {
                totals[category.canonical_index()].map(|count| SeverityCount {
                    category: *category,
                    count,
                })
            })
            .collect();

        ExtractionResult { summary, findings }
    }

    /// Run a full source through the engine and wrap the result in a
    /// serialization-ready report, with stage timing output.
    pub fn process_source(&self, source: &dyn TextSource) -> Result<ExtractionReport> {
        let start = Instant::now();
        println!("📄 Processing report source: {}", source.name());

        let chunks = source.chunks()?;
        println!(
            "⏱️  Source read: {:.3}s ({} chunks)",
            start.elapsed().as_secs_f64(),
            chunks.len()
        );

        let stage_start = Instant::now();
        let result = self.extract_summary_and_findings(&chunks);
        println!(
            "⏱️  Extraction: {:.3}s",
            stage_start.elapsed().as_secs_f64()
        );
        println!(
            "📊 Extracted {} summary rows and {} findings",
            result.summary.len(),
            result.findings.len()
        );

        Ok(ExtractionReport::new(result, &source.name(), chunks.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "Critical High Medium Low Info Total\n1 2 3 0 5 11\nIssue ID: ABC-1\nSeverity: High\nStatus: Open\nNotes: some\nwrapped text\nHow to Fix: patch it";

    #[test]
    fn single_text_yields_summary_and_finding() {
        let processor = ReportProcessor::with_defaults();
        let extraction = processor.extract_from_single_text(REPORT);

        let counts: Vec<u64> = extraction.summary.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![1, 2, 3, 0, 5, 11]);

        assert_eq!(extraction.findings.len(), 1);
        let finding = &extraction.findings[0];
        assert_eq!(finding.get("Issue ID"), Some("ABC-1"));
        assert_eq!(finding.get("Severity"), Some("High"));
        assert_eq!(finding.get("Status"), Some("Open"));
        assert_eq!(finding.get("Notes"), Some("some wrapped text"));
        assert_eq!(finding.get("How to Fix"), Some("patch it"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let processor = ReportProcessor::with_defaults();
        let first = processor.extract_from_single_text(REPORT);
        let second = processor.extract_from_single_text(REPORT);
        assert_eq!(first, second);
    }

    #[test]
    fn partial_summaries_sum_per_category() {
        let processor = ReportProcessor::with_defaults();
        let chunk_a = "Critical High Medium Low Info Total\n2 0 1 0 0 3";
        let chunk_b = "Critical High Medium Low Info Total\n3 1 0 0 0 4";
        let result = processor.extract_summary_and_findings(&[chunk_a, chunk_b]);

        assert_eq!(result.summary.len(), 6);
        assert_eq!(result.summary[0].category, SeverityCategory::Critical);
        assert_eq!(result.summary[0].count, 5);
        assert_eq!(result.summary[1].count, 1);
    }

    #[test]
    fn findings_concatenate_in_chunk_order() {
        let processor = ReportProcessor::with_defaults();
        let chunk_a = "Issue ID: A-1\nSeverity: High";
        let chunk_b = "Issue ID: B-1\nSeverity: Low";
        let result = processor.extract_summary_and_findings(&[chunk_a, chunk_b]);

        assert!(result.summary.is_empty());
        assert_eq!(result.findings.len(), 2);
        assert_eq!(result.findings[0].get("Issue ID"), Some("A-1"));
        assert_eq!(result.findings[1].get("Issue ID"), Some("B-1"));
    }

    #[test]
    fn all_empty_summaries_merge_to_empty() {
        let processor = ReportProcessor::with_defaults();
        let result = processor.extract_summary_and_findings(&["no table", "none here either"]);
        assert!(result.summary.is_empty());
        assert!(result.findings.is_empty());
    }

    #[test]
    fn marker_free_text_raises_nothing() {
        let processor = ReportProcessor::with_defaults();
        let extraction =
            processor.extract_from_single_text("plain prose without any markers at all");
        assert!(extraction.findings.is_empty());
    }

    #[test]
    fn empty_findings_kept_by_default_dropped_on_request() {
        let text = "Issue ID: A-1\nSeverity: High\nIssue ID:\nunrecognized gibberish only";

        // With the full vocabulary both blocks produce at least one field,
        // so nothing is dropped.
        let keep = ReportProcessor::with_defaults();
        let extraction = keep.extract_from_single_text(text);
        assert_eq!(extraction.findings.len(), 2);

        let config = ExtractionConfig {
            drop_empty_findings: true,
            field_labels: vec!["Severity".to_string()],
            ..ExtractionConfig::default()
        };
        // With only "Severity" recognized, the second block is label-free
        // and the policy drops it.
        let drop = ReportProcessor::new(config).unwrap();
        let extraction = drop.extract_from_single_text(text);
        assert_eq!(extraction.findings.len(), 1);
        assert_eq!(extraction.findings[0].get("Severity"), Some("High"));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = ExtractionConfig {
            block_marker: String::new(),
            ..ExtractionConfig::default()
        };
        assert!(ReportProcessor::new(config).is_err());
    }
}
