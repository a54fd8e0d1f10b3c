//! Application layer: streaming row services
//!
//! This layer drives domain projections over the I/O boundary traits.

pub mod error;
pub mod services;
pub mod stream;

pub use error::{ApplicationError, ApplicationResult};
pub use stream::{read_header, StreamSummary};
