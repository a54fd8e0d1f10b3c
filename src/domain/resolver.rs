//! Header resolution: binds selectors to zero-based column positions

use itertools::Itertools;
use tracing::{debug, warn};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::selector::ColumnSelector;

/// Resolve `selectors` against `header`.
///
/// Bare tokens are tried as a 1-based index within the header width first,
/// then as an exact header name (first occurrence wins). Ranges expand to
/// their contiguous block of positions. Order and duplicates are preserved.
///
/// Resolution is all-or-nothing: the first unresolved selector fails the
/// whole call with `ColumnNotFound`.
pub fn resolve_columns<S: AsRef<str>>(
    selectors: &[ColumnSelector],
    header: &[S],
) -> DomainResult<Vec<usize>> {
    let width = header.len();
    let duplicated: Vec<&str> = header.iter().map(|name| name.as_ref()).duplicates().collect();

    let mut positions = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match selector {
            ColumnSelector::Range { start, end } => {
                if *start == 0 || *end > width {
                    return Err(DomainError::ColumnNotFound(selector.to_string()));
                }
                positions.extend((*start - 1)..*end);
            }
            ColumnSelector::Name(token) => {
                let position = resolve_token(token, header)
                    .ok_or_else(|| DomainError::ColumnNotFound(token.clone()))?;
                if duplicated.contains(&token.as_str()) && header[position].as_ref() == token {
                    warn!("header name {:?} is ambiguous, using column {}", token, position + 1);
                }
                positions.push(position);
            }
        }
    }
    debug!("resolved {} selectors to positions {:?}", selectors.len(), positions);
    Ok(positions)
}

fn resolve_token<S: AsRef<str>>(token: &str, header: &[S]) -> Option<usize> {
    if let Ok(index) = token.parse::<usize>() {
        if (1..=header.len()).contains(&index) {
            return Some(index - 1);
        }
    }
    header.iter().position(|name| name.as_ref() == token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selector::parse_column_spec;
    use rstest::rstest;

    fn resolve(spec: &str, header: &[&str]) -> DomainResult<Vec<usize>> {
        resolve_columns(&parse_column_spec(spec).unwrap(), header)
    }

    #[rstest]
    #[case("1", vec![0])]
    #[case("name", vec![1])]
    #[case("2-3", vec![1, 2])]
    #[case("city,id", vec![3, 0])]
    #[case("1,1", vec![0, 0])]
    #[case("4-4,age", vec![3, 2])]
    fn test_resolve(#[case] spec: &str, #[case] expected: Vec<usize>) {
        let header = ["id", "name", "age", "city"];
        assert_eq!(resolve(spec, &header).unwrap(), expected);
    }

    #[test]
    fn test_unknown_name_fails_whole_resolution() {
        let err = resolve("id,doesnotexist,name", &["id", "name"]).unwrap_err();
        assert_eq!(err, DomainError::ColumnNotFound("doesnotexist".into()));
    }

    #[test]
    fn test_index_out_of_width_falls_back_to_name() {
        // "5" is not a valid position for three columns, but it is a header name
        assert_eq!(resolve("5", &["a", "5", "c"]).unwrap(), vec![1]);
        assert!(resolve("4", &["a", "b", "c"]).is_err());
    }

    #[test]
    fn test_index_wins_over_numeric_name() {
        assert_eq!(resolve("2", &["1", "2", "3"]).unwrap(), vec![1]);
    }

    #[test]
    fn test_range_beyond_width_fails() {
        let err = resolve("2-5", &["a", "b", "c"]).unwrap_err();
        assert_eq!(err, DomainError::ColumnNotFound("2-5".into()));
    }

    #[test]
    fn test_duplicate_header_names_resolve_to_first() {
        assert_eq!(resolve("x", &["x", "y", "x"]).unwrap(), vec![0]);
    }

    #[test]
    fn test_range_starting_at_zero_fails() {
        let selectors = [ColumnSelector::Range { start: 0, end: 2 }];
        let err = resolve_columns(&selectors, &["a", "b", "c"]).unwrap_err();
        assert_eq!(err, DomainError::ColumnNotFound("0-2".into()));
    }

    #[test]
    fn test_zero_is_not_an_index() {
        assert!(resolve("0", &["a", "b"]).is_err());
    }
}
