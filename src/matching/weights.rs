// Per-feature weights for the distance metric.
//
// Weights are validated once at construction and never change afterwards.
// The order matches `FeatureType::ALL`.

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};
use crate::signature::features::FeatureType;

/// Five non-negative, finite weights, one per signature feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureWeights([f64; 5]);

impl Default for FeatureWeights {
    /// Weights tuned for the bundled twelve-author reference set.
    fn default() -> Self {
        Self([11.0, 33.0, 50.0, 0.4, 4.0])
    }
}

impl FeatureWeights {
    pub fn new(weights: [f64; 5]) -> Result<Self> {
        for (feature, weight) in FeatureType::ALL.iter().zip(weights) {
            if !weight.is_finite() || weight < 0.0 {
                return Err(DetectionError::InvalidArgument(format!(
                    "weight for {feature} must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(Self(weights))
    }

    /// Parse a comma-separated list such as `"11,33,50,0.4,4"`.
    pub fn parse(list: &str) -> Result<Self> {
        let weights = list
            .split(',')
            .map(|field| {
                let field = field.trim();
                field.parse::<f64>().map_err(|_| {
                    DetectionError::InvalidArgument(format!("weight {field:?} is not a number"))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::try_from(weights.as_slice())
    }

    pub fn get(&self, feature: FeatureType) -> f64 {
        self.0[feature.index()]
    }

    pub fn values(&self) -> [f64; 5] {
        self.0
    }
}

impl TryFrom<&[f64]> for FeatureWeights {
    type Error = DetectionError;

    fn try_from(weights: &[f64]) -> Result<Self> {
        let array: [f64; 5] = weights.try_into().map_err(|_| {
            DetectionError::InvalidArgument(format!(
                "expected {} weights, got {}",
                FeatureType::ALL.len(),
                weights.len()
            ))
        })?;
        Self::new(array)
    }
}

impl TryFrom<Vec<f64>> for FeatureWeights {
    type Error = DetectionError;

    fn try_from(weights: Vec<f64>) -> Result<Self> {
        Self::try_from(weights.as_slice())
    }
}

impl From<FeatureWeights> for Vec<f64> {
    fn from(weights: FeatureWeights) -> Self {
        weights.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let w = FeatureWeights::parse("11, 33, 50, 0.4, 4").unwrap();
        assert_eq!(w, FeatureWeights::default());
        assert_eq!(w.get(FeatureType::AverageSentenceLength), 0.4);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let result = FeatureWeights::try_from(&[1.0, 2.0, 3.0][..]);
        assert!(matches!(result, Err(DetectionError::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(FeatureWeights::new([1.0, -0.5, 1.0, 1.0, 1.0]).is_err());
        assert!(FeatureWeights::new([1.0, 1.0, f64::NAN, 1.0, 1.0]).is_err());
        assert!(FeatureWeights::new([0.0; 5]).is_ok());
    }

    #[test]
    fn test_parse_non_numeric_rejected() {
        assert!(FeatureWeights::parse("1,2,three,4,5").is_err());
    }
}
