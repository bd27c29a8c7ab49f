//! Eligible-occurrence search for one candidate.
//!
//! Runs the candidate's literal matcher over linkable text spans only and
//! records byte offsets against the unmodified content. Nothing is mutated
//! here; substitution happens afterwards in one pass.

use super::candidates::Candidate;
use super::tokenizer::{Span, is_inline_markup};
use crate::utils::string_utils::{
    char_at, char_before, entity_ranges, is_whole_occurrence, splits_entity,
};

/// Byte range of one occurrence to be wrapped, in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

/// Nearest visible character before span `idx`, looking through inline tags.
///
/// Block tags, comments and the start of input all count as a boundary.
fn visible_char_before(content: &str, spans: &[Span], idx: usize) -> Option<char> {
    for span in spans[..idx].iter().rev() {
        match *span {
            Span::Text { start, end, .. } => return content[start..end].chars().next_back(),
            Span::Markup { start, end } if is_inline_markup(&content[start..end]) => {}
            Span::Markup { .. } => return None,
        }
    }
    None
}

/// Nearest visible character after span `idx`, looking through inline tags.
fn visible_char_after(content: &str, spans: &[Span], idx: usize) -> Option<char> {
    for span in &spans[idx + 1..] {
        match *span {
            Span::Text { start, end, .. } => return content[start..end].chars().next(),
            Span::Markup { start, end } if is_inline_markup(&content[start..end]) => {}
            Span::Markup { .. } => return None,
        }
    }
    None
}

/// Find up to `limit` eligible occurrences of `candidate` in document order.
///
/// An occurrence is eligible when it lies inside a single linkable text span,
/// is not glued to an alphanumeric character on either side, and does not
/// cut through a character reference such as `&amp;`. Neighbours are taken
/// from the visible text, so `<b>Super</b>Uber` does not contain `Uber`
/// while `<li>Uber</li><li>Taxi</li>` does. Inserted anchors are inline, so
/// linking one candidate never changes the verdict for another.
pub fn find_eligible_matches(
    content: &str,
    spans: &[Span],
    candidate: &Candidate<'_>,
    limit: usize,
) -> Vec<MatchRange> {
    let mut found = Vec::new();
    if limit == 0 {
        return found;
    }

    for (idx, span) in spans.iter().enumerate() {
        if !span.is_linkable() {
            continue;
        }

        let text = &content[span.start()..span.end()];
        let entities = if text.contains('&') {
            entity_ranges(text)
        } else {
            Vec::new()
        };

        let mut pos = 0;
        while pos < text.len() {
            let Some(m) = candidate.matcher.find_at(text, pos) else {
                break;
            };

            let before = if m.start() == 0 {
                visible_char_before(content, spans, idx)
            } else {
                char_before(text, m.start())
            };
            let after = if m.end() == text.len() {
                visible_char_after(content, spans, idx)
            } else {
                char_at(text, m.end())
            };

            if is_whole_occurrence(before, after) && !splits_entity(&entities, m.start(), m.end())
            {
                found.push(MatchRange {
                    start: span.start() + m.start(),
                    end: span.start() + m.end(),
                });
                if found.len() == limit {
                    return found;
                }
                pos = m.end();
            } else {
                // Retry one character later; a shifted occurrence may still qualify
                let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
                pos = m.start() + step;
            }
        }
    }

    found
}
