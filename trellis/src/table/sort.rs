//! The sort engine: directives and derived row ordering.

use super::item::TableRow;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// An active sort directive: which column to order by, and which way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Column id to read from each row.
    pub column: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a column.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on a column.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Compute the next directive for a header activation on `column`.
///
/// A different column starts ascending; the same column flips direction.
/// Repeated activations cycle ascending/descending; there is no third
/// "unsorted" state.
pub fn toggle(current: Option<&SortSpec>, column: &str) -> SortSpec {
    match current {
        Some(spec) if spec.column == column => SortSpec {
            column: column.to_string(),
            direction: spec.direction.flipped(),
        },
        _ => SortSpec::ascending(column),
    }
}

/// Derive the view order for `rows` under a directive.
///
/// Returns indices into `rows`: the same records, no copies, drops, or
/// duplicates. `None` keeps the original order. The sort is stable, so
/// rows with equal keys keep their original relative order, and
/// descending flips the comparator rather than reversing the result,
/// which preserves that tie-break order in both directions.
pub fn sort_view<T: TableRow>(rows: &[T], spec: Option<&SortSpec>) -> Vec<usize> {
    let mut view: Vec<usize> = (0..rows.len()).collect();
    let Some(spec) = spec else {
        return view;
    };
    view.sort_by(|&a, &b| {
        let ord = rows[a]
            .value(&spec.column)
            .compare(&rows[b].value(&spec.column));
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    view
}
