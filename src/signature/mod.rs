// Signature extraction — tokenization and the five stylometric features.

pub mod features;
pub mod stylometric;
pub mod tokenize;
pub mod traits;
