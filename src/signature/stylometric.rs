// Stylometric feature extraction.
//
// A single pass over the lines of the text accumulates word-level counts
// and the full text for sentence splitting. The five features are then
// derived from those counts:
//
//   average word length      = cleaned characters / words
//   type-token ratio         = distinct words / words
//   hapax legomena ratio     = words seen exactly once / words
//   average sentence length  = words / sentences
//   sentence complexity      = phrases / sentences
//
// Tokens that clean down to nothing (a lone dash, an ellipsis) are not
// words and do not count toward any total. Bytes that are not valid UTF-8
// are decoded lossily rather than rejected.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::debug;

use super::features::Signature;
use super::tokenize::{self, clean_token};
use super::traits::SignatureExtractor;
use crate::error::{DetectionError, Result};
use crate::text::LossyLines;

/// Default extractor producing the five-feature stylometric signature.
#[derive(Debug, Default, Clone, Copy)]
pub struct StylometricExtractor;

/// Raw counts gathered from a text before they are turned into ratios.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    pub character_count: usize,
    pub distinct_words: usize,
    pub hapax_count: usize,
    pub sentence_count: usize,
    pub phrase_count: usize,
}

impl TextStats {
    /// Gather counts from a stream, reading it to the end.
    pub fn collect(text: &mut dyn BufRead) -> Result<Self> {
        let mut occurrences: HashMap<String, usize> = HashMap::new();
        let mut buffer = String::new();
        let mut word_count = 0;
        let mut character_count = 0;

        for line in LossyLines::new(text) {
            let line = line?;
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(&line);

            for token in line.split_whitespace() {
                let word = clean_token(token);
                if word.is_empty() {
                    continue;
                }
                word_count += 1;
                character_count += word.chars().count();
                *occurrences.entry(word).or_insert(0) += 1;
            }
        }

        let hapax_count = occurrences.values().filter(|&&count| count == 1).count();

        let sentences = tokenize::sentences(&buffer);
        let phrase_count = sentences.iter().map(|s| tokenize::phrase_count(s)).sum();

        Ok(Self {
            word_count,
            character_count,
            distinct_words: occurrences.len(),
            hapax_count,
            sentence_count: sentences.len(),
            phrase_count,
        })
    }

    /// Turn the counts into a signature.
    ///
    /// Fails with `DegenerateInput` when there are no words or no sentences,
    /// since every feature would be a division by zero.
    pub fn to_signature(&self) -> Result<Signature> {
        if self.word_count == 0 {
            return Err(DetectionError::DegenerateInput(
                "text contains no words".to_string(),
            ));
        }
        if self.sentence_count == 0 {
            return Err(DetectionError::DegenerateInput(
                "text contains no sentences".to_string(),
            ));
        }

        let words = self.word_count as f64;
        let sentences = self.sentence_count as f64;

        Ok(Signature::from_values([
            self.character_count as f64 / words,
            self.distinct_words as f64 / words,
            self.hapax_count as f64 / words,
            words / sentences,
            self.phrase_count as f64 / sentences,
        ]))
    }
}

impl SignatureExtractor for StylometricExtractor {
    fn extract(&self, text: &mut dyn BufRead) -> Result<Signature> {
        let stats = TextStats::collect(text)?;

        debug!(
            words = stats.word_count,
            distinct = stats.distinct_words,
            hapax = stats.hapax_count,
            sentences = stats.sentence_count,
            phrases = stats.phrase_count,
            "Collected text statistics"
        );

        stats.to_signature()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(text: &str) -> TextStats {
        TextStats::collect(&mut text.as_bytes()).unwrap()
    }

    #[test]
    fn test_collect_counts() {
        let stats = stats_of("The cat saw the dog. The dog ran!");
        assert_eq!(stats.word_count, 8);
        // the, cat, saw, dog, ran
        assert_eq!(stats.distinct_words, 5);
        // cat, saw, ran
        assert_eq!(stats.hapax_count, 3);
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.phrase_count, 0);
    }

    #[test]
    fn test_lines_do_not_fuse_into_one_sentence_word() {
        let stats = stats_of("first line\nsecond line");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.sentence_count, 1);
    }

    #[test]
    fn test_punctuation_only_tokens_are_not_words() {
        let stats = stats_of("Yes -- no ... maybe");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.character_count, 3 + 2 + 5);
    }

    #[test]
    fn test_empty_text_is_degenerate() {
        let result = StylometricExtractor.extract(&mut "".as_bytes());
        assert!(matches!(result, Err(DetectionError::DegenerateInput(_))));
    }

    #[test]
    fn test_only_terminators_is_degenerate() {
        let result = StylometricExtractor.extract(&mut "... !!! ???".as_bytes());
        assert!(matches!(result, Err(DetectionError::DegenerateInput(_))));
    }
}
