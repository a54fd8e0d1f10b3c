//! rcsv: streaming toolkit for delimited text
//!
//! Layers, innermost first:
//! - `domain`: column specs, header resolution, row projection
//! - `infrastructure`: row reader/writer traits, csv implementations, inputs
//! - `application`: streaming services built on the two above
//! - `cli`: command registry, per-command argument parsing, dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
