//! Positional input arguments to input sources

use std::path::PathBuf;

use tracing::debug;

use crate::infrastructure::traits::InputSource;
use crate::infrastructure::{InfraError, InfraResult};

/// Sentinel argument meaning standard input.
pub const STDIN_SENTINEL: &str = "-";

/// Map positional arguments to exactly `expected` input sources.
///
/// With no arguments and a single expected input, stdin is used.
pub fn resolve_inputs(args: &[String], expected: usize) -> InfraResult<Vec<InputSource>> {
    if args.is_empty() && expected == 1 {
        debug!("no input file given, reading stdin");
        return Ok(vec![InputSource::Stdin]);
    }
    if args.len() != expected {
        return Err(InfraError::Arity {
            expected,
            found: args.len(),
        });
    }
    Ok(args
        .iter()
        .map(|arg| {
            if arg == STDIN_SENTINEL {
                InputSource::Stdin
            } else {
                InputSource::Path(PathBuf::from(arg))
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_reads_stdin() {
        assert_eq!(resolve_inputs(&[], 1).unwrap(), vec![InputSource::Stdin]);
    }

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(
            resolve_inputs(&args(&["-"]), 1).unwrap(),
            vec![InputSource::Stdin]
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            resolve_inputs(&args(&["a.csv", "b.csv"]), 2).unwrap(),
            vec![
                InputSource::Path("a.csv".into()),
                InputSource::Path("b.csv".into())
            ]
        );
    }

    #[test]
    fn test_wrong_count_is_arity_error() {
        let err = resolve_inputs(&args(&["a.csv", "b.csv"]), 1).unwrap_err();
        assert!(matches!(
            err,
            InfraError::Arity {
                expected: 1,
                found: 2
            }
        ));
    }
}
