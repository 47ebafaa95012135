//! Label-driven field parsing within one issue block.
//!
//! Lines are scanned top to bottom. A line starting with a recognized label
//! closes the previously open field and opens a new one; a line matching no
//! label continues the value of the field opened most recently. The
//! open-field state lives entirely within a single call; nothing leaks
//! across blocks or calls.

use crate::types::Finding;

/// Match a recognized label at the start of `line`.
///
/// The longest matching label wins, so a `Date Created` line can never be
/// claimed by a plain `Date` entry that also appears in the vocabulary. A
/// label only counts when followed by a colon, whitespace, or end of line,
/// so `Status` cannot claim a line starting with `Statusline`.
fn match_label<'a>(line: &str, labels: &'a [String]) -> Option<&'a str> {
    let mut best: Option<&'a str> = None;
    for label in labels {
        if !line.starts_with(label.as_str()) {
            continue;
        }
        let boundary_ok = match line[label.len()..].chars().next() {
            None => true,
            Some(c) => c == ':' || c.is_whitespace(),
        };
        if !boundary_ok {
            continue;
        }
        if best.map_or(true, |b| label.len() > b.len()) {
            best = Some(label);
        }
    }
    best
}

/// Value text on a label line: everything after the label, with one leading
/// colon stripped. Handles both `Label: value` and `Label value` forms.
fn rest_after_label(line: &str, label: &str) -> String {
    let rest = line[label.len()..].trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    rest.trim().to_string()
}

/// Parse one issue block into a [`Finding`].
///
/// Blank lines neither close nor extend a field. Unmatched lines with no
/// field open are noise ahead of the first label and are dropped. Every
/// block yields exactly one Finding; a block with no recognized labels
/// yields an empty one. Filtering those is the caller's policy, not the
/// parser's.
pub fn parse_block(block: &str, labels: &[String]) -> Finding {
    let mut finding = Finding::new();
    let mut open: Option<(&str, String)> = None;

    for raw_line in block.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(label) = match_label(line, labels) {
            if let Some((prev_label, value)) = open.take() {
                finding.insert(prev_label, value.trim().to_string());
            }
            open = Some((label, rest_after_label(line, label)));
        } else if let Some((_, value)) = open.as_mut() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(line);
        }
    }

    if let Some((label, value)) = open {
        finding.insert(label, value.trim().to_string());
    }

    finding
}
