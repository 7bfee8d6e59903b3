// Matching — reference dataset, feature weights and nearest-author search.

pub mod dataset;
pub mod detector;
pub mod distance;
pub mod weights;
