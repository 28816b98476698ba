//! Data layer - Static tables and constants
//!
//! This module contains all static data used by the transcompiler:
//! - Default command to speech mappings
//! - Default symbol categories
//! - Spoken vocabulary and pipeline constants

pub mod categories;
pub mod constants;
pub mod mappings;

// Re-export commonly used items
pub use categories::DEFAULT_CATEGORIES;
pub use constants::{DEFAULT_MAX_ITERATIONS, DEPTH_TIERS, ORDINAL_WORDS};
pub use mappings::DEFAULT_MAPPINGS;
