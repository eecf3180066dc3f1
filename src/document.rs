//! Document-level aggregation of sentence labels.
//!
//! Each aggregator reduces the labels predicted for a document's sentences,
//! in sentence order, to one label. An empty sequence has no label.

use std::collections::HashMap;

/// Combines per-sentence labels into one document label.
pub trait DocumentAggregator {
    /// Registry name.
    fn name(&self) -> &str;

    /// Document label, `None` for an empty sequence.
    fn aggregate(&self, tags: &[String]) -> Option<String>;
}

/// The label predicted for the most sentences.
///
/// Among equally frequent labels the one that first appears latest wins.
///
/// # Examples
///
/// ```
/// use sentir::document::{DocumentAggregator, MostFrequent};
///
/// let tags: Vec<String> = ["joy", "fear", "fear", "joy", "anger"]
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(MostFrequent.aggregate(&tags).as_deref(), Some("fear"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MostFrequent;

impl DocumentAggregator for MostFrequent {
    fn name(&self) -> &str {
        "MostFrequent"
    }

    fn aggregate(&self, tags: &[String]) -> Option<String> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in tags.iter().map(String::as_str) {
            let count = counts.entry(tag).or_insert(0);
            if *count == 0 {
                order.push(tag);
            }
            *count += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for tag in order {
            let count = counts[tag];
            if best.map_or(true, |(_, best_count)| count >= best_count) {
                best = Some((tag, count));
            }
        }
        best.map(|(tag, _)| tag.to_string())
    }
}

/// The label of the final sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Last;

impl DocumentAggregator for Last {
    fn name(&self) -> &str {
        "Last"
    }

    fn aggregate(&self, tags: &[String]) -> Option<String> {
        tags.last().cloned()
    }
}

/// The label of the longest run of consecutive identical labels.
///
/// Among runs of equal length the earliest wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostContinuous;

impl DocumentAggregator for MostContinuous {
    fn name(&self) -> &str {
        "MostContinuous"
    }

    fn aggregate(&self, tags: &[String]) -> Option<String> {
        let mut best: Option<(&str, usize)> = None;
        let mut run: Option<(&str, usize)> = None;

        for tag in tags.iter().map(String::as_str) {
            let length = match run {
                Some((current, length)) if current == tag => length + 1,
                _ => 1,
            };
            run = Some((tag, length));
            if best.map_or(true, |(_, best_length)| length > best_length) {
                best = run;
            }
        }
        best.map(|(tag, _)| tag.to_string())
    }
}
