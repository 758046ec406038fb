/// Per-character match annotation for search results
use crate::bookmark::MatchedChar;
use crate::search::same_letter;
use serde::{Deserialize, Serialize};

/// Tag every character of `name` with whether the greedy query cursor consumed it
///
/// Runs the same left-to-right cursor as the filter, independently. Once the
/// query is exhausted the rest of the name is tagged unmatched. The output has
/// exactly one entry per character of `name`, original case preserved.
///
/// Example: `annotate("GitHub", "gh")` tags `G` and `H`.
pub fn annotate(name: &str, query: &str) -> Vec<MatchedChar> {
    let mut pending = query.chars().peekable();

    name.chars()
        .map(|ch| {
            let is_match = pending.next_if(|&q| same_letter(ch, q)).is_some();
            MatchedChar { ch, is_match }
        })
        .collect()
}

/// A run of consecutive characters sharing one match tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
}

/// Merge an annotation into runs, so the renderer emits one span per run
pub fn segments(annotated: &[MatchedChar]) -> Vec<HighlightSegment> {
    annotated.iter().fold(Vec::new(), |mut runs: Vec<HighlightSegment>, c| {
        match runs.last_mut() {
            Some(run) if run.is_match == c.is_match => run.text.push(c.ch),
            _ => runs.push(HighlightSegment {
                text: c.ch.to_string(),
                is_match: c.is_match,
            }),
        }
        runs
    })
}

/// The characters the query consumed, in order
pub fn matched_text(annotated: &[MatchedChar]) -> String {
    annotated
        .iter()
        .filter(|c| c.is_match)
        .map(|c| c.ch)
        .collect()
}
