// Whitespace tokenization, token cleanup and sentence/phrase splitting.
//
// Cleanup is deliberately shallow: lowercase, then trim punctuation runs
// from the ends of the token. Interior punctuation ("don't", "e-mail")
// survives.

/// Characters stripped from either end of a token.
pub const PUNCTUATION: &[char] = &[
    '!', '.', ',', ':', ';', '-', '?', '<', '>', '#', '*', '\'', '"', '[', '(', ']', ')', '\n',
    '\t', '\\',
];

/// Sentence terminators.
pub const SENTENCE_TERMINATORS: &[char] = &['!', '.', '?'];

/// Phrase separators inside a sentence.
pub const PHRASE_SEPARATORS: &[char] = &[',', ':', ';'];

/// Lowercase a token and strip leading and trailing punctuation runs.
pub fn clean_token(token: &str) -> String {
    token.to_lowercase().trim_matches(PUNCTUATION).to_string()
}

/// Split `text` on any of `separators`, then drop trailing pieces for which
/// `droppable` holds. Interior pieces are always kept.
fn split_dropping_trailing<'a>(
    text: &'a str,
    separators: &[char],
    droppable: impl Fn(&str) -> bool,
) -> Vec<&'a str> {
    let mut pieces: Vec<&str> = text.split(separators).collect();
    while pieces.last().is_some_and(|piece| droppable(*piece)) {
        pieces.pop();
    }
    pieces
}

/// Split text into sentences on `! . ?`.
///
/// Trailing empty or whitespace-only segments are not sentences, so a text
/// ending in a terminator (or a terminator and a space) gains no phantom
/// sentence. Interior empty segments, as left by an ellipsis, are kept.
pub fn sentences(text: &str) -> Vec<&str> {
    split_dropping_trailing(text, SENTENCE_TERMINATORS, |piece| piece.trim().is_empty())
}

/// Pieces of a sentence split on `, : ;`.
///
/// Only truly empty trailing pieces are dropped: `"a,b,"` yields two pieces
/// but `"a, b, "` yields three, the last being `" "`.
pub fn phrases(sentence: &str) -> Vec<&str> {
    split_dropping_trailing(sentence, PHRASE_SEPARATORS, str::is_empty)
}

/// Number of phrases in a sentence: zero when the sentence has no phrase
/// separator, otherwise the number of pieces between separators.
pub fn phrase_count(sentence: &str) -> usize {
    if sentence.contains(PHRASE_SEPARATORS) {
        phrases(sentence).len()
    } else {
        0
    }
}
