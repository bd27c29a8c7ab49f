//! UTF-8-safe string helpers used by the text scanner
//!
//! All offsets handled here are byte offsets into the original content string.
//! Every helper respects UTF-8 character boundaries and never panics on
//! multi-byte input such as accented Portuguese text or emoji.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Used to keep log lines short when previewing article content.
///
/// # Examples
/// ```
/// # use kodegen_tools_interlink::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("Seguro Automóvel", 14), "Seguro Automóv");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Character immediately before byte offset `idx`, if any.
#[inline]
pub fn char_before(s: &str, idx: usize) -> Option<char> {
    s.get(..idx)?.chars().next_back()
}

/// Character starting at byte offset `idx`, if any.
#[inline]
pub fn char_at(s: &str, idx: usize) -> Option<char> {
    s.get(idx..)?.chars().next()
}

/// Whether an occurrence with these neighbours stands on its own.
///
/// The occurrence must not be immediately preceded or followed by an
/// alphanumeric character. This is looser than a Unicode word
/// boundary: `"Uber"` matches in `"Uber-style"` and `"(Uber)"` but not in
/// `"Ubers"` or `"SuperUber"`. `None` means the edge of the text.
///
/// # Examples
/// ```
/// # use kodegen_tools_interlink::utils::string_utils::is_whole_occurrence;
/// assert!(is_whole_occurrence(Some(' '), Some('.')));
/// assert!(is_whole_occurrence(None, None));
/// assert!(!is_whole_occurrence(None, Some('s')));
/// assert!(!is_whole_occurrence(Some('é'), Some(' ')));
/// ```
#[inline]
pub fn is_whole_occurrence(before: Option<char>, after: Option<char>) -> bool {
    before.is_none_or(|c| !c.is_alphanumeric()) && after.is_none_or(|c| !c.is_alphanumeric())
}

/// Byte ranges of character references (`&amp;`, `&#39;`, `&#x27;`) in `text`.
///
/// A bare `&` not followed by a well-formed reference is not reported.
pub fn entity_ranges(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'&' {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        if j < bytes.len() && bytes[j] == b'#' {
            j += 1;
            if j < bytes.len() && (bytes[j] == b'x' || bytes[j] == b'X') {
                j += 1;
            }
        }
        let name_start = j;
        while j < bytes.len() && bytes[j].is_ascii_alphanumeric() {
            j += 1;
        }

        if j > name_start && j < bytes.len() && bytes[j] == b';' {
            ranges.push((i, j + 1));
            i = j + 1;
        } else {
            i += 1;
        }
    }

    ranges
}

/// Whether `[start, end)` cuts through any of the given entity ranges.
///
/// Ranges fully inside or fully outside the span are fine; only partial
/// overlap counts as splitting.
pub fn splits_entity(entities: &[(usize, usize)], start: usize, end: usize) -> bool {
    entities.iter().any(|&(e_start, e_end)| {
        let overlaps = e_start < end && start < e_end;
        let contained = start <= e_start && e_end <= end;
        overlaps && !contained
    })
}
