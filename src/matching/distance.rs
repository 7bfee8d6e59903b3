// Weighted L1 distance and nearest-neighbour matching.
//
//   distance(a, b) = sum over features of |a_f - b_f| * w_f
//
// Lower is closer. With non-negative weights the distance is symmetric and
// zero for identical signatures. The closest author is found by a linear
// scan in reference order; the first entry at the minimum distance wins.

use serde::Serialize;
use tracing::debug;

use super::dataset::ReferenceSet;
use super::weights::FeatureWeights;
use crate::signature::features::{FeatureType, Signature};

/// Compute the weighted L1 distance between two signatures.
pub fn weighted_distance(a: &Signature, b: &Signature, weights: &FeatureWeights) -> f64 {
    FeatureType::ALL
        .iter()
        .map(|&feature| (a.get(feature) - b.get(feature)).abs() * weights.get(feature))
        .sum()
}

/// A reference author together with its distance from a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub author: String,
    pub distance: f64,
}

/// Nearest-neighbour matcher over an immutable reference set.
#[derive(Debug, Clone)]
pub struct Matcher {
    references: ReferenceSet,
    weights: FeatureWeights,
}

impl Matcher {
    pub fn new(references: ReferenceSet, weights: FeatureWeights) -> Self {
        Self {
            references,
            weights,
        }
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    pub fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    pub fn distance(&self, a: &Signature, b: &Signature) -> f64 {
        weighted_distance(a, b, &self.weights)
    }

    /// Find the reference entry closest to `query`.
    ///
    /// Returns `None` for an empty reference set. Ties go to the entry that
    /// appears first; a NaN distance never wins.
    pub fn closest(&self, query: &Signature) -> Option<Match> {
        let mut best: Option<Match> = None;

        for entry in self.references.iter() {
            let distance = self.distance(&entry.signature, query);
            let closer = match &best {
                Some(current) => distance < current.distance,
                None => !distance.is_nan(),
            };
            if closer {
                best = Some(Match {
                    author: entry.author.clone(),
                    distance,
                });
            }
        }

        if let Some(found) = &best {
            debug!(
                author = %found.author,
                distance = found.distance,
                candidates = self.references.len(),
                "Closest reference signature"
            );
        }

        best
    }

    /// Every reference entry ordered by ascending distance from `query`.
    ///
    /// The sort is stable, so equal distances keep reference order.
    pub fn rank(&self, query: &Signature) -> Vec<Match> {
        let mut ranked: Vec<Match> = self
            .references
            .iter()
            .map(|entry| Match {
                author: entry.author.clone(),
                distance: self.distance(&entry.signature, query),
            })
            .collect();
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::dataset::ReferenceEntry;

    fn entry(author: &str, values: [f64; 5]) -> ReferenceEntry {
        ReferenceEntry {
            author: author.to_string(),
            signature: Signature::from_values(values),
        }
    }

    #[test]
    fn test_weighted_distance_hand_computed() {
        let a = Signature::from_values([1.0, 0.5, 0.2, 10.0, 2.0]);
        let b = Signature::from_values([2.0, 0.25, 0.2, 12.0, 1.0]);
        let w = FeatureWeights::new([1.0, 4.0, 100.0, 0.5, 3.0]).unwrap();
        // 1*1 + 0.25*4 + 0*100 + 2*0.5 + 1*3
        assert!((weighted_distance(&a, &b, &w) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weights_ignore_feature() {
        let a = Signature::from_values([1.0, 1.0, 1.0, 1.0, 1.0]);
        let b = Signature::from_values([9.0, 1.0, 1.0, 1.0, 1.0]);
        let w = FeatureWeights::new([0.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(weighted_distance(&a, &b, &w), 0.0);
    }

    #[test]
    fn test_closest_tie_goes_to_first() {
        let references = ReferenceSet::new(vec![
            entry("Left", [1.0, 0.0, 0.0, 0.0, 0.0]),
            entry("Right", [3.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let matcher = Matcher::new(references, FeatureWeights::new([1.0; 5]).unwrap());
        let query = Signature::from_values([2.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(matcher.closest(&query).unwrap().author, "Left");
    }

    #[test]
    fn test_closest_skips_nan_distance() {
        let references = ReferenceSet::new(vec![
            entry("Broken", [f64::NAN, 0.0, 0.0, 0.0, 0.0]),
            entry("Fine", [5.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let matcher = Matcher::new(references, FeatureWeights::new([1.0; 5]).unwrap());
        let query = Signature::from_values([0.0; 5]);
        assert_eq!(matcher.closest(&query).unwrap().author, "Fine");
    }

    #[test]
    fn test_closest_empty_is_none() {
        let matcher = Matcher::new(ReferenceSet::default(), FeatureWeights::default());
        assert!(matcher.closest(&Signature::from_values([0.0; 5])).is_none());
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let references = ReferenceSet::new(vec![
            entry("Far", [10.0, 0.0, 0.0, 0.0, 0.0]),
            entry("Near", [1.0, 0.0, 0.0, 0.0, 0.0]),
            entry("Middle", [5.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let matcher = Matcher::new(references, FeatureWeights::new([1.0; 5]).unwrap());
        let ranked = matcher.rank(&Signature::from_values([0.0; 5]));
        let authors: Vec<&str> = ranked.iter().map(|m| m.author.as_str()).collect();
        assert_eq!(authors, vec!["Near", "Middle", "Far"]);
    }
}
