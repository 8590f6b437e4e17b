//!
//! A crate containing IO related functionality. This includes the reading of
//! .aut (Aldebaran) lts formats and writing equivalence class diagrams in the
//! GraphViz dot format.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod line_iterator;

pub mod io_aut;
pub mod io_dot;
