// Signature extractor trait.
//
// The detector only needs "text in, signature out", so extraction sits
// behind a trait and the stylometric implementation can be swapped for
// another feature set in tests or later experiments.

use std::io::BufRead;

use super::features::Signature;
use crate::error::Result;

/// Trait for computing a linguistic signature from a text stream.
pub trait SignatureExtractor {
    /// Read the whole stream and produce its signature.
    fn extract(&self, text: &mut dyn BufRead) -> Result<Signature>;
}
