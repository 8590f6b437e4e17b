//!
//! A crate deciding strong bisimilarity between two labelled transition
//! systems by partition refinement, in the style of Kanellakis-Smolka.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod bisimilar;
mod partition;
mod refine;
mod signature;

pub use bisimilar::*;
pub use partition::*;
pub use refine::*;
pub use signature::*;
