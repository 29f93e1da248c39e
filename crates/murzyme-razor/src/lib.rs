//! murzyme-razor: Hypothesis comparison engine.
//!
//! Two pure procedures over [`HypothesisRecord`](murzyme_common::HypothesisRecord)s:
//! an Occam's-razor simplicity comparison of a pair, and a fixed rubric of
//! consistency rules per record. `summary` combines both into the verdict
//! shown to the user.

pub mod simplicity;
pub mod consistency;
pub mod summary;

pub use simplicity::{compare, Simpler, SimplicityScore};
pub use consistency::{check, ConsistencyResult, ConsistencyRule};
pub use summary::{analyse, Conclusion, ModelAnalysis, ModelReport};
