//! Issue block segmentation.
//!
//! An issue block runs from one occurrence of the block-start marker up to
//! (but not including) the next occurrence, or to end of input for the last
//! block. Report preamble before the first marker carries no issue data and
//! is discarded.
//!
//! Splitting on the marker keeps the segmentation non-overlapping and total
//! by construction, which a single multi-line capture pattern would not
//! guarantee on malformed input.

/// Split `text` into issue blocks on `marker`.
///
/// The returned slices cover everything from the first marker onward exactly
/// once. No marker, no blocks. `marker` must be non-empty; the engine
/// validates this at construction.
pub fn split_blocks<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    let starts: Vec<usize> = text.match_indices(marker).map(|(i, _)| i).collect();

    let mut blocks = Vec::with_capacity(starts.len());
    for (idx, &start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(text.len());
        blocks.push(&text[start..end]);
    }
    blocks
}
