//! murzyme-common: Shared types, errors, and configuration used across all Murzyme crates.

pub mod error;
pub mod hypothesis;
pub mod form;
pub mod config;

// Re-export commonly used types
pub use error::{MurzymeError, Result};
pub use hypothesis::{
    HypothesisRecord, ProposalFeatures, StructuralFeatures, ExperimentalFeatures,
    ActiveSiteAccess, SubstrateSize, KineticIsotopeEffect,
};
pub use config::MurzymeConfig;
