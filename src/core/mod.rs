//! Core data types shared across the engine.
//!
//! - [`Symbol`]: the unit every operation counts in (one `char`)
//! - [`SimilarityLevel`]: classification of a similarity percentage

pub mod types;

pub use types::{SimilarityLevel, Symbol};
