// Quillprint: stylometric authorship attribution
//
// This is the library root. A text is reduced to a five-feature linguistic
// signature, and the signature is matched against a reference set of
// per-author signatures using a weighted L1 distance.

pub mod config;
pub mod error;
pub mod matching;
pub mod output;
pub mod signature;
pub mod text;

pub use error::DetectionError;
pub use matching::detector::AuthorshipDetector;
pub use signature::features::{FeatureType, Signature};
