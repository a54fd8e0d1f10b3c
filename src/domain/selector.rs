//! Column specification parsing
//!
//! Turns a user string such as `id,2-4,name,name` into an ordered list of
//! selectors. Tokens are not trimmed and repeated tokens are kept, so
//! `1,1` later fans out into two copies of the first column.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// One user column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Bare token, resolved against the header as 1-based index or name.
    Name(String),
    /// Inclusive 1-based range `start-end`.
    Range { start: usize, end: usize },
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Name(token) => write!(f, "{}", token),
            ColumnSelector::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

fn range_regex() -> &'static Regex {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    RANGE.get_or_init(|| Regex::new(r"^(\d+)-(\d+)$").expect("range pattern compiles"))
}

/// Parse a comma-separated column specification.
///
/// # Errors
/// * `EmptySpec` if `spec` is empty
/// * `InvalidRange` for `start-end` tokens with `start > end` or `start == 0`
#[instrument(level = "trace")]
pub fn parse_column_spec(spec: &str) -> DomainResult<Vec<ColumnSelector>> {
    if spec.is_empty() {
        return Err(DomainError::EmptySpec);
    }
    let selectors = spec
        .split(',')
        .map(parse_token)
        .collect::<DomainResult<Vec<_>>>()?;
    trace!("parsed {} selectors from {:?}", selectors.len(), spec);
    Ok(selectors)
}

fn parse_token(token: &str) -> DomainResult<ColumnSelector> {
    let Some(caps) = range_regex().captures(token) else {
        return Ok(ColumnSelector::Name(token.to_string()));
    };
    let invalid = || DomainError::InvalidRange {
        token: token.to_string(),
    };
    // digits only, so parsing fails only on overflow
    let start: usize = caps[1].parse().map_err(|_| invalid())?;
    let end: usize = caps[2].parse().map_err(|_| invalid())?;
    if start == 0 || start > end {
        return Err(invalid());
    }
    Ok(ColumnSelector::Range { start, end })
}
