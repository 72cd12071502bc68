//! Sentence and paragraph splitting shared by both generation modes.

/// Characters that terminate a sentence. Runs of them produce empty fragments,
/// which every caller drops through its length filter.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Length in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `n` characters of `s`.
pub(crate) fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// True when the trimmed fragment is strictly longer than `min` characters.
pub(crate) fn longer_than(s: &str, min: usize) -> bool {
    char_len(s.trim()) > min
}

/// Untrimmed fragments between sentence terminators.
pub(crate) fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
}

/// Untrimmed blocks separated by two or more consecutive newlines.
pub(crate) fn paragraphs(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < bytes.len() && bytes[i] == b'\n' {
            i += 1;
        }
        if i - run_start >= 2 {
            parts.push(&text[start..run_start]);
            start = i;
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Whitespace-separated tokens with their byte offsets in `s`.
pub(crate) fn tokens(s: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in s.char_indices() {
        if c.is_whitespace() {
            if let Some(begin) = start.take() {
                out.push((begin, &s[begin..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(begin) = start {
        out.push((begin, &s[begin..]));
    }
    out
}
