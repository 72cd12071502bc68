//! Question synthesis from a single sentence or paragraph basis.
//!
//! Rules are tried in a fixed order and the first one that produces a question wins.
//! The order matters: a definition phrase beats a plain "is", which beats "are".

use super::split::{char_len, take_chars, tokens};

const MIN_TOKENS: usize = 5;
const SHORT_QUOTE_CHARS: usize = 100;
const MAIN_IDEA_QUOTE_CHARS: usize = 80;
const KEYWORD_MIN_CHARS: usize = 4;
const MAX_KEYWORDS: usize = 3;
const DEFINITION_PHRASES: [&str; 2] = ["is defined as", "refers to"];

struct Basis<'a> {
    text: &'a str,
    tokens: Vec<(usize, &'a str)>,
}

type Rule = for<'a> fn(&Basis<'a>) -> Option<String>;

const RULES: [Rule; 5] = [
    short_statement,
    definition,
    copula_is,
    copula_are,
    keywords,
];

/// Build a question for `sentence`. Total: every input yields a non-empty question.
#[must_use]
pub fn synthesize(sentence: &str) -> String {
    let text = sentence.trim();
    let basis = Basis {
        text,
        tokens: tokens(text),
    };
    RULES
        .iter()
        .find_map(|rule| rule(&basis))
        .unwrap_or_else(|| main_idea(&basis))
}

fn short_statement(basis: &Basis<'_>) -> Option<String> {
    (basis.tokens.len() < MIN_TOKENS).then(|| {
        format!(
            "What does this statement describe: \"{}...\"?",
            take_chars(basis.text, SHORT_QUOTE_CHARS)
        )
    })
}

fn definition(basis: &Basis<'_>) -> Option<String> {
    // ASCII lowering keeps byte offsets aligned with the original text.
    let lower = basis.text.to_ascii_lowercase();
    let split_at = DEFINITION_PHRASES
        .iter()
        .filter_map(|phrase| lower.find(phrase))
        .min()?;
    let left = basis.text[..split_at].trim();
    (!left.is_empty()).then(|| format!("What is {left}?"))
}

/// Subject before the first standalone `verb` token that has text on both sides.
fn subject_before<'a>(basis: &Basis<'a>, verb: &str) -> Option<&'a str> {
    let last = basis.tokens.len().checked_sub(1)?;
    (1..last)
        .find(|&i| basis.tokens[i].1.eq_ignore_ascii_case(verb))
        .map(|i| basis.text[..basis.tokens[i].0].trim())
}

fn copula_is(basis: &Basis<'_>) -> Option<String> {
    subject_before(basis, "is").map(|subject| format!("What is {subject}?"))
}

fn copula_are(basis: &Basis<'_>) -> Option<String> {
    subject_before(basis, "are").map(|subject| format!("What are {subject}?"))
}

fn keywords(basis: &Basis<'_>) -> Option<String> {
    let picked: Vec<&str> = basis
        .tokens
        .iter()
        .map(|(_, token)| *token)
        .filter(|token| char_len(token) > KEYWORD_MIN_CHARS)
        .take(MAX_KEYWORDS)
        .collect();
    (!picked.is_empty())
        .then(|| format!("Explain the concept related to: {}", picked.join(", ")))
}

fn main_idea(basis: &Basis<'_>) -> String {
    format!(
        "What is the main idea of: \"{}...\"?",
        take_chars(basis.text, MAIN_IDEA_QUOTE_CHARS)
    )
}
