//! String utilities for the domain layer.
//!
//! All matching in the detection engine is case-insensitive but must hand
//! back byte ranges into the caller's original-case text, so the helpers
//! here compare lowercase characters while tracking offsets in the source.

/// Trim and case-fold user input.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Find the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Returns the `(start, end)` byte range in `haystack`. An empty needle
/// never matches.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    find_ignore_case_from(haystack, needle, 0)
}

/// Find the first case-insensitive occurrence of `word` that is not
/// embedded in a larger word.
pub fn find_word_ignore_case(haystack: &str, word: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some((start, end)) = find_ignore_case_from(haystack, word, from) {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().is_none_or(|c| !is_word_char(c));
        if before_ok && after_ok {
            return Some((start, end));
        }
        // Resume one character past this match's start
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Cut `text` at the first clause-ending punctuation mark.
///
/// `,` `;` `!` `?` and newlines always end a clause. A `.` only ends one
/// when followed by whitespace or the end of the text, so decimals such as
/// `3.5` survive.
pub fn truncate_at_clause_end(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        let ends_clause = match ch {
            ',' | ';' | '!' | '?' | '\n' => true,
            '.' => chars.peek().is_none_or(|(_, next)| next.is_whitespace()),
            _ => false,
        };
        if ends_clause {
            return &text[..idx];
        }
    }
    text
}

/// Lowercase words of `text` with surrounding punctuation removed.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !is_word_char(c)).to_lowercase())
        .filter(|w| !w.is_empty())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn find_ignore_case_from(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(fold).collect();
    if needle.is_empty() || from > haystack.len() {
        return None;
    }

    haystack[from..].char_indices().find_map(|(offset, _)| {
        let start = from + offset;
        match_len_at(&haystack[start..], &needle).map(|len| (start, start + len))
    })
}

/// Per-character case fold.
///
/// `str::to_lowercase` maps a word-final `Σ` to `ς` while `char::to_lowercase`
/// always gives `σ`; both sigmas fold to `σ` here so text lowered either way
/// still lines up.
fn fold(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|c| if c == 'ς' { 'σ' } else { c })
}

/// Byte length of the prefix of `rest` that case-folds to `needle`.
fn match_len_at(rest: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in rest.char_indices() {
        for lower in fold(ch) {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}
