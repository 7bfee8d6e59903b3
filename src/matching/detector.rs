// Authorship detector — the public entry point composing extraction and
// matching.
//
// Given a mystery text, the detector:
// 1. Extracts the text's linguistic signature
// 2. Scans the reference set for the closest signature
// 3. Returns the author attached to that signature
//
// The reference set and weights are fixed at construction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use super::dataset::ReferenceSet;
use super::distance::{Match, Matcher};
use super::weights::FeatureWeights;
use crate::error::{DetectionError, Result};
use crate::signature::features::Signature;
use crate::signature::stylometric::StylometricExtractor;
use crate::signature::traits::SignatureExtractor;

pub struct AuthorshipDetector {
    matcher: Matcher,
    extractor: Box<dyn SignatureExtractor + Send + Sync>,
}

impl AuthorshipDetector {
    pub fn new(references: ReferenceSet, weights: FeatureWeights) -> Self {
        Self::with_extractor(references, weights, Box::new(StylometricExtractor))
    }

    /// Build a detector that uses a custom signature extractor.
    pub fn with_extractor(
        references: ReferenceSet,
        weights: FeatureWeights,
        extractor: Box<dyn SignatureExtractor + Send + Sync>,
    ) -> Self {
        Self {
            matcher: Matcher::new(references, weights),
            extractor,
        }
    }

    /// Build a detector from a reference dataset stream.
    pub fn from_dataset(dataset: impl BufRead, weights: FeatureWeights) -> Result<Self> {
        Ok(Self::new(ReferenceSet::from_reader(dataset)?, weights))
    }

    /// Build a detector from a reference dataset file.
    pub fn open(path: &Path, weights: FeatureWeights) -> Result<Self> {
        Ok(Self::new(ReferenceSet::load(path)?, weights))
    }

    pub fn weights(&self) -> &FeatureWeights {
        self.matcher.weights()
    }

    pub fn references(&self) -> &ReferenceSet {
        self.matcher.references()
    }

    pub fn calculate_signature(&self, text: &mut dyn BufRead) -> Result<Signature> {
        self.extractor.extract(text)
    }

    /// Signature of the text file at `path`.
    pub fn calculate_signature_in(&self, path: &Path) -> Result<Signature> {
        let mut reader = open_text(path)?;
        self.calculate_signature(&mut reader)
    }

    /// Weighted distance between two signatures. Lower means more similar.
    pub fn calculate_similarity(&self, first: &Signature, second: &Signature) -> f64 {
        self.matcher.distance(first, second)
    }

    /// Checked variant of `calculate_similarity` for callers holding
    /// optional signatures. A missing side is an invalid argument.
    pub fn calculate_similarity_opt(
        &self,
        first: Option<&Signature>,
        second: Option<&Signature>,
    ) -> Result<f64> {
        match (first, second) {
            (Some(first), Some(second)) => Ok(self.calculate_similarity(first, second)),
            (None, _) => Err(DetectionError::InvalidArgument(
                "first signature is missing".to_string(),
            )),
            (_, None) => Err(DetectionError::InvalidArgument(
                "second signature is missing".to_string(),
            )),
        }
    }

    /// Closest reference author for the text, with its distance.
    pub fn closest_match(&self, text: &mut dyn BufRead) -> Result<Match> {
        if self.matcher.references().is_empty() {
            return Err(DetectionError::EmptyReferenceSet);
        }
        let signature = self.calculate_signature(text)?;
        let found = self
            .matcher
            .closest(&signature)
            .ok_or(DetectionError::EmptyReferenceSet)?;

        info!(
            author = %found.author,
            distance = found.distance,
            "Attributed text"
        );
        Ok(found)
    }

    /// Name of the reference author whose signature is closest to the text.
    pub fn find_author(&self, text: &mut dyn BufRead) -> Result<String> {
        Ok(self.closest_match(text)?.author)
    }

    /// `find_author` for the text file at `path`.
    pub fn find_author_in(&self, path: &Path) -> Result<String> {
        let mut reader = open_text(path)?;
        self.find_author(&mut reader)
    }

    /// Every reference author ranked by distance from the text.
    pub fn rank_authors(&self, text: &mut dyn BufRead) -> Result<Vec<Match>> {
        let signature = self.calculate_signature(text)?;
        Ok(self.matcher.rank(&signature))
    }
}

/// Open a text file for reading. A path that cannot be opened is reported
/// as an invalid argument before any extraction starts.
pub fn open_text(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        DetectionError::InvalidArgument(format!("cannot open text {}: {e}", path.display()))
    })?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedExtractor(Signature);

    impl SignatureExtractor for FixedExtractor {
        fn extract(&self, _text: &mut dyn BufRead) -> Result<Signature> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_custom_extractor_is_used() {
        let references =
            ReferenceSet::from_reader("A,1,1,1,1,1\nB,2,2,2,2,2\n".as_bytes()).unwrap();
        let detector = AuthorshipDetector::with_extractor(
            references,
            FeatureWeights::default(),
            Box::new(FixedExtractor(Signature::from_values([2.0; 5]))),
        );
        assert_eq!(detector.find_author(&mut "anything".as_bytes()).unwrap(), "B");
    }

    #[test]
    fn test_similarity_opt_rejects_missing() {
        let detector = AuthorshipDetector::new(ReferenceSet::default(), FeatureWeights::default());
        let sig = Signature::from_values([1.0; 5]);
        assert!(matches!(
            detector.calculate_similarity_opt(None, Some(&sig)),
            Err(DetectionError::InvalidArgument(_))
        ));
        assert!(matches!(
            detector.calculate_similarity_opt(Some(&sig), None),
            Err(DetectionError::InvalidArgument(_))
        ));
        assert_eq!(
            detector.calculate_similarity_opt(Some(&sig), Some(&sig)).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_find_author_with_no_references() {
        let detector = AuthorshipDetector::new(ReferenceSet::default(), FeatureWeights::default());
        assert!(matches!(
            detector.find_author(&mut "Some words here.".as_bytes()),
            Err(DetectionError::EmptyReferenceSet)
        ));
    }
}
