//! Severity summary table extraction.
//!
//! Scanner reports carry a six-column severity count table: a header line
//! naming the categories followed by a line of counts. The table appears on
//! one page of a multi-page document, so most chunks legitimately have none.

use crate::types::{SeverityCategory, SeverityCount};
use regex::Regex;
use std::sync::LazyLock;

// Header labels separated by horizontal whitespace, a newline, then six
// integers on one line. `[^\S\n]` tolerates extra spacing inside each line
// while keeping the newline boundary between header and counts rigid.
// A reordered or truncated header never matches.
static SUMMARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let header = SeverityCategory::CANONICAL_ORDER
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(r"[^\S\n]+");
    let counts = r"(\d+)[^\S\n]+(\d+)[^\S\n]+(\d+)[^\S\n]+(\d+)[^\S\n]+(\d+)[^\S\n]+(\d+)";
    Regex::new(&format!(r"{header}[^\S\n]*\n[^\S\n]*{counts}")).unwrap()
});

/// Find the severity summary table in `text`.
///
/// Returns the six counts in canonical category order, or an empty vector
/// when no table is present. Only the first table in a chunk is honored.
pub fn extract_summary(text: &str) -> Vec<SeverityCount> {
    let Some(caps) = SUMMARY_REGEX.captures(text) else {
        return Vec::new();
    };

    let mut rows = Vec::with_capacity(SeverityCategory::CANONICAL_ORDER.len());
    for (i, category) in SeverityCategory::CANONICAL_ORDER.iter().enumerate() {
        let Ok(count) = caps[i + 1].parse::<u64>() else {
            // A count too large to represent: treat the table as absent
            // rather than emitting misaligned rows.
            return Vec::new();
        };
        rows.push(SeverityCount {
            category: *category,
            count,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(rows: &[SeverityCount]) -> Vec<u64> {
        rows.iter().map(|r| r.count).collect()
    }

    #[test]
    fn well_formed_table() {
        let text = "Critical High Medium Low Info Total\n1 2 3 0 5 11";
        let rows = extract_summary(text);
        assert_eq!(rows.len(), 6);
        assert_eq!(counts(&rows), vec![1, 2, 3, 0, 5, 11]);
        assert_eq!(rows[0].category, SeverityCategory::Critical);
        assert_eq!(rows[5].category, SeverityCategory::Total);
    }

    #[test]
    fn table_embedded_mid_text() {
        let text = "Scan completed on 2024-03-01.\nSummary of results follows.\n  Critical   High  Medium   Low   Info   Total  \n  0    4   7   12   30   53\nDetails begin on the next page.";
        let rows = extract_summary(text);
        assert_eq!(counts(&rows), vec![0, 4, 7, 12, 30, 53]);
    }

    #[test]
    fn missing_table_is_empty_not_error() {
        assert!(extract_summary("no summary here at all").is_empty());
        assert!(extract_summary("").is_empty());
    }

    #[test]
    fn header_split_across_lines_rejected() {
        // The header must sit on a single line.
        let text = "Critical High Medium\nLow Info Total\n1 2 3 4 5 15";
        assert!(extract_summary(text).is_empty());
    }

    #[test]
    fn counts_split_across_lines_rejected() {
        let text = "Critical High Medium Low Info Total\n1 2 3\n4 5 15";
        assert!(extract_summary(text).is_empty());
    }

    #[test]
    fn reordered_header_rejected() {
        let text = "High Critical Medium Low Info Total\n1 2 3 4 5 15";
        assert!(extract_summary(text).is_empty());
    }

    #[test]
    fn only_first_table_is_used() {
        let text = "Critical High Medium Low Info Total\n1 1 1 1 1 5\nCritical High Medium Low Info Total\n9 9 9 9 9 45";
        let rows = extract_summary(text);
        assert_eq!(counts(&rows), vec![1, 1, 1, 1, 1, 5]);
    }

    #[test]
    fn overflowing_count_degrades_to_empty() {
        let text = "Critical High Medium Low Info Total\n1 2 3 4 5 99999999999999999999999999";
        assert!(extract_summary(text).is_empty());
    }
}
