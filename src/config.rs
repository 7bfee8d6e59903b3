use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::weights::FeatureWeights;

/// Default location of the reference dataset.
pub const DEFAULT_DATASET_PATH: &str = "./signatures.csv";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags take
/// precedence over anything set here. Weights and the ranking depth are
/// kept as raw strings and only parsed by the commands that use them, so a
/// bad QUILLPRINT_WEIGHTS does not break `signature` or `dataset`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Reference dataset path (QUILLPRINT_DATASET)
    pub dataset_path: PathBuf,
    /// Comma-separated feature weights (QUILLPRINT_WEIGHTS)
    pub weights_list: Option<String>,
    /// How many ranked authors `find` shows (QUILLPRINT_TOP)
    pub top_value: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is parsed here beyond the dataset path, so loading never
    /// fails on a malformed value.
    pub fn load() -> Result<Self> {
        let dataset_path = env::var("QUILLPRINT_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));

        Ok(Self {
            dataset_path,
            weights_list: env::var("QUILLPRINT_WEIGHTS").ok(),
            top_value: env::var("QUILLPRINT_TOP").ok(),
        })
    }

    /// Feature weights, or the defaults when none are configured.
    pub fn weights(&self) -> Result<FeatureWeights> {
        match &self.weights_list {
            Some(list) => FeatureWeights::parse(list).context("QUILLPRINT_WEIGHTS is invalid"),
            None => Ok(FeatureWeights::default()),
        }
    }

    /// Number of ranked authors to show (at least 1).
    pub fn top(&self) -> Result<usize> {
        match &self.top_value {
            Some(value) => {
                let top: usize = value.trim().parse().with_context(|| {
                    format!("QUILLPRINT_TOP must be a whole number, got {value:?}")
                })?;
                Ok(top.max(1))
            }
            None => Ok(1),
        }
    }

    /// Check that the reference dataset exists.
    /// Call this before any operation that attributes authorship.
    pub fn require_dataset(&self) -> Result<()> {
        if !self.dataset_path.is_file() {
            anyhow::bail!(
                "Reference dataset not found at {}\n\
                 Pass --dataset or set QUILLPRINT_DATASET in your .env file.",
                self.dataset_path.display()
            );
        }
        Ok(())
    }
}
