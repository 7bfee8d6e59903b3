// Signature: the five-feature stylometric fingerprint of a text.
//
// The feature order is fixed and shared by the dataset format, the weight
// vector and the distance computation. `FeatureType::ALL` is that order.

use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// One dimension of a linguistic signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    AverageWordLength,
    TypeTokenRatio,
    HapaxLegomenaRatio,
    AverageSentenceLength,
    AverageSentenceComplexity,
}

impl FeatureType {
    /// Every feature, in signature order.
    pub const ALL: [FeatureType; 5] = [
        FeatureType::AverageWordLength,
        FeatureType::TypeTokenRatio,
        FeatureType::HapaxLegomenaRatio,
        FeatureType::AverageSentenceLength,
        FeatureType::AverageSentenceComplexity,
    ];

    /// Position of this feature in a signature or weight vector.
    pub fn index(self) -> usize {
        match self {
            FeatureType::AverageWordLength => 0,
            FeatureType::TypeTokenRatio => 1,
            FeatureType::HapaxLegomenaRatio => 2,
            FeatureType::AverageSentenceLength => 3,
            FeatureType::AverageSentenceComplexity => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureType::AverageWordLength => "Average word length",
            FeatureType::TypeTokenRatio => "Type-token ratio",
            FeatureType::HapaxLegomenaRatio => "Hapax legomena ratio",
            FeatureType::AverageSentenceLength => "Average sentence length",
            FeatureType::AverageSentenceComplexity => "Average sentence complexity",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete linguistic signature.
///
/// Immutable once built: the fields are private and there are no setters.
/// Two signatures are equal when all five values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    average_word_length: f64,
    type_token_ratio: f64,
    hapax_legomena_ratio: f64,
    average_sentence_length: f64,
    average_sentence_complexity: f64,
}

impl Signature {
    /// Build a signature from values given in `FeatureType::ALL` order.
    pub fn from_values(values: [f64; 5]) -> Self {
        let [
            average_word_length,
            type_token_ratio,
            hapax_legomena_ratio,
            average_sentence_length,
            average_sentence_complexity,
        ] = values;
        Self {
            average_word_length,
            type_token_ratio,
            hapax_legomena_ratio,
            average_sentence_length,
            average_sentence_complexity,
        }
    }

    pub fn get(&self, feature: FeatureType) -> f64 {
        match feature {
            FeatureType::AverageWordLength => self.average_word_length,
            FeatureType::TypeTokenRatio => self.type_token_ratio,
            FeatureType::HapaxLegomenaRatio => self.hapax_legomena_ratio,
            FeatureType::AverageSentenceLength => self.average_sentence_length,
            FeatureType::AverageSentenceComplexity => self.average_sentence_complexity,
        }
    }

    /// The five values in `FeatureType::ALL` order.
    pub fn values(&self) -> [f64; 5] {
        FeatureType::ALL.map(|feature| self.get(feature))
    }

    /// Iterate over `(feature, value)` pairs in signature order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureType, f64)> + '_ {
        FeatureType::ALL.into_iter().map(|feature| (feature, self.get(feature)))
    }

    /// Display the signature as a feature table in the terminal.
    pub fn display(&self, title: &str) {
        println!("\n{}", format!("=== {title} ===").bold());
        println!();
        for (feature, value) in self.iter() {
            println!("  {:<30} {}", feature.label(), format!("{value:>10.4}").bright_green());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_round_trip_in_order() {
        let sig = Signature::from_values([5.1, 0.9, 0.8, 5.0, 2.0]);
        assert_eq!(sig.values(), [5.1, 0.9, 0.8, 5.0, 2.0]);
        assert_eq!(sig.get(FeatureType::HapaxLegomenaRatio), 0.8);
        assert_eq!(sig.get(FeatureType::AverageSentenceComplexity), 2.0);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, feature) in FeatureType::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_value_equality() {
        let a = Signature::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = Signature::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
        let c = Signature::from_values([1.0, 2.0, 3.0, 4.0, 5.5]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_named_fields() {
        let sig = Signature::from_values([5.1, 0.9, 0.8, 5.0, 2.0]);
        let json = serde_json::to_value(sig).unwrap();
        assert_eq!(json["average_word_length"], 5.1);
        assert_eq!(json["average_sentence_complexity"], 2.0);
    }
}
