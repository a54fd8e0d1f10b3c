//! Row projection: include/exclude column shaping with a fixed width

use std::collections::HashSet;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::Row;

/// How resolved positions shape the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Emit the resolved positions in selector order.
    Include,
    /// Emit every column except the resolved positions, in header order.
    Exclude,
}

#[derive(Debug, Clone)]
enum Plan {
    Include(Vec<usize>),
    Exclude(HashSet<usize>),
}

/// Projects the header and every data row through the same positions.
///
/// Positions and widths are fixed at construction and never re-resolved.
#[derive(Debug, Clone)]
pub struct RowProjector {
    plan: Plan,
    input_width: usize,
    output_width: usize,
    rows_seen: u64,
}

impl RowProjector {
    /// Build a projector for a header of `input_width` columns.
    ///
    /// `positions` must come from resolving against that header.
    pub fn new(mode: ProjectionMode, positions: Vec<usize>, input_width: usize) -> Self {
        debug_assert!(positions.iter().all(|p| *p < input_width));
        let (plan, output_width) = match mode {
            ProjectionMode::Include => {
                let width = positions.len();
                (Plan::Include(positions), width)
            }
            ProjectionMode::Exclude => {
                let drop: HashSet<usize> = positions.into_iter().collect();
                let width = input_width - drop.len();
                (Plan::Exclude(drop), width)
            }
        };
        Self {
            plan,
            input_width,
            output_width,
            rows_seen: 0,
        }
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.output_width
    }

    /// Number of data rows projected so far.
    pub fn rows_seen(&self) -> u64 {
        self.rows_seen
    }

    /// Project the header row. Does not count as a data row.
    pub fn project_header(&self, header: &Row) -> DomainResult<Row> {
        self.check_width(0, header)?;
        let mut out = Row::with_capacity(0, self.output_width);
        self.fill(header, &mut out);
        Ok(out)
    }

    /// Project one data row into `out`, reusing its allocation.
    ///
    /// # Errors
    /// `WidthMismatch` if `row` does not have the header's width.
    pub fn project(&mut self, row: &Row, out: &mut Row) -> DomainResult<()> {
        self.rows_seen += 1;
        self.check_width(self.rows_seen, row)?;
        self.fill(row, out);
        Ok(())
    }

    fn check_width(&self, row_no: u64, row: &Row) -> DomainResult<()> {
        if row.len() != self.input_width {
            return Err(DomainError::WidthMismatch {
                row: row_no,
                expected: self.input_width,
                found: row.len(),
            });
        }
        Ok(())
    }

    fn fill(&self, row: &Row, out: &mut Row) {
        out.clear();
        match &self.plan {
            Plan::Include(positions) => {
                for &p in positions {
                    out.push_field(&row[p]);
                }
            }
            Plan::Exclude(drop) => {
                for (p, cell) in row.iter().enumerate() {
                    if !drop.contains(&p) {
                        out.push_field(cell);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::from(cells.to_vec())
    }

    fn cells(row: &Row) -> Vec<&str> {
        row.iter().collect()
    }

    #[test]
    fn test_include_duplicates_and_reorders() {
        let mut projector = RowProjector::new(ProjectionMode::Include, vec![2, 0, 0], 3);
        assert_eq!(projector.output_width(), 3);

        let header = projector.project_header(&row(&["a", "b", "c"])).unwrap();
        assert_eq!(cells(&header), vec!["c", "a", "a"]);

        let mut out = Row::new();
        projector.project(&row(&["1", "2", "3"]), &mut out).unwrap();
        assert_eq!(cells(&out), vec!["3", "1", "1"]);
    }

    #[test]
    fn test_exclude_keeps_header_order_and_dedups() {
        let mut projector = RowProjector::new(ProjectionMode::Exclude, vec![3, 1, 1], 4);
        assert_eq!(projector.output_width(), 2);

        let header = projector
            .project_header(&row(&["id", "name", "age", "city"]))
            .unwrap();
        assert_eq!(cells(&header), vec!["id", "age"]);

        let mut out = Row::new();
        projector
            .project(&row(&["1", "ann", "33", "oslo"]), &mut out)
            .unwrap();
        assert_eq!(cells(&out), vec!["1", "33"]);
    }

    #[test]
    fn test_exclude_everything_yields_empty_rows() {
        let mut projector = RowProjector::new(ProjectionMode::Exclude, vec![0, 1], 2);
        let mut out = Row::new();
        projector.project(&row(&["x", "y"]), &mut out).unwrap();
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let mut projector = RowProjector::new(ProjectionMode::Include, vec![0], 2);
        let mut out = Row::new();
        projector.project(&row(&["1", "2"]), &mut out).unwrap();

        let err = projector.project(&row(&["1"]), &mut out).unwrap_err();
        assert_eq!(
            err,
            DomainError::WidthMismatch {
                row: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_output_buffer_is_reused_between_rows() {
        let mut projector = RowProjector::new(ProjectionMode::Include, vec![1], 2);
        let mut out = Row::new();
        projector.project(&row(&["a", "b"]), &mut out).unwrap();
        projector.project(&row(&["c", "d"]), &mut out).unwrap();
        assert_eq!(cells(&out), vec!["d"]);
        assert_eq!(projector.rows_seen(), 2);
    }
}
