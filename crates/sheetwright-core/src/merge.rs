//! Merged range registration

use crate::cell::{intersect, sort_addresses, CellAddress, CellRange, CellStorage};
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};

/// Result of a merge request
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The range was appended to the sheet's merged ranges
    Registered(CellRange),
    /// The range overlaps `conflict`, which was registered earlier
    Rejected {
        /// Range covering the requested addresses
        requested: CellRange,
        /// First registered range sharing a cell with it
        conflict: CellRange,
    },
}

impl MergeOutcome {
    /// Check if the merge was registered
    pub fn is_registered(&self) -> bool {
        matches!(self, MergeOutcome::Registered(_))
    }

    /// The range that was requested, registered or not
    pub fn range(&self) -> CellRange {
        match *self {
            MergeOutcome::Registered(range) => range,
            MergeOutcome::Rejected { requested, .. } => requested,
        }
    }
}

/// Register `refs` as a merged range unless it overlaps an existing one
///
/// The registered range spans the first and last address in row-major
/// order. On overlap nothing is registered and an error diagnostic naming
/// the conflicting range is recorded.
pub fn merge_cells(
    storage: &mut CellStorage,
    diagnostics: &mut Diagnostics,
    refs: &[CellAddress],
) -> Result<MergeOutcome> {
    let mut sorted = refs.to_vec();
    sort_addresses(&mut sorted);

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            return Err(Error::invalid_argument(
                "merge requires at least one cell address",
            ))
        }
    };
    let requested = CellRange::new(first, last);

    // Rows are bounded by the row-major extremes; columns need a scan
    let min_col = sorted.iter().map(|a| a.col).min().unwrap_or(first.col);
    let max_col = sorted.iter().map(|a| a.col).max().unwrap_or(last.col);
    let bounds = CellRange::from_indices(first.row, min_col, last.row, max_col);

    for existing in storage.merged_cells() {
        if !existing.overlaps(&bounds) {
            continue;
        }
        let covered: Vec<CellAddress> = existing.cells().collect();
        if !intersect(&covered, &sorted).is_empty() {
            let conflict = *existing;
            diagnostics.error(format!(
                "Invalid Range for: {}. Some cells in this range are already included in another merged cell range: {}.",
                requested, conflict
            ));
            return Ok(MergeOutcome::Rejected {
                requested,
                conflict,
            });
        }
    }

    storage.push_merged(requested);
    Ok(MergeOutcome::Registered(requested))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addrs(range: &str) -> Vec<CellAddress> {
        CellRange::parse(range).unwrap().cells().collect()
    }

    fn quiet() -> Diagnostics {
        let mut diags = Diagnostics::new();
        diags.set_forward_to_log(false);
        diags
    }

    #[test]
    fn test_overlap_is_rejected() {
        let mut storage = CellStorage::new();
        let mut diags = quiet();

        let first = merge_cells(&mut storage, &mut diags, &addrs("A1:A2")).unwrap();
        assert!(first.is_registered());

        let second = merge_cells(&mut storage, &mut diags, &addrs("A2:A3")).unwrap();
        assert_eq!(
            second,
            MergeOutcome::Rejected {
                requested: CellRange::parse("A2:A3").unwrap(),
                conflict: CellRange::parse("A1:A2").unwrap(),
            }
        );

        assert_eq!(storage.merged_cells().len(), 1);
        assert_eq!(diags.errors().count(), 1);
        assert!(diags.entries()[0].message.contains("A1:A2"));
    }

    #[test]
    fn test_disjoint_ranges_both_register() {
        let mut storage = CellStorage::new();
        let mut diags = quiet();

        assert!(merge_cells(&mut storage, &mut diags, &addrs("A1:A2"))
            .unwrap()
            .is_registered());
        assert!(merge_cells(&mut storage, &mut diags, &addrs("B1:B2"))
            .unwrap()
            .is_registered());

        assert_eq!(storage.merged_cells().len(), 2);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unordered_refs_use_row_major_bounds() {
        let mut storage = CellStorage::new();
        let mut diags = quiet();
        let mut refs = addrs("B2:C3");
        refs.reverse();

        let outcome = merge_cells(&mut storage, &mut diags, &refs).unwrap();
        assert_eq!(outcome.range().to_string(), "B2:C3");
    }

    #[test]
    fn test_scattered_refs_still_collide() {
        let mut storage = CellStorage::new();
        let mut diags = quiet();
        assert!(merge_cells(&mut storage, &mut diags, &addrs("A2"))
            .unwrap()
            .is_registered());

        // Row-major corners B1 and C2 alone would miss A2
        let refs = addrs("B1").into_iter().chain(addrs("A2")).chain(addrs("C2"));
        let outcome = merge_cells(&mut storage, &mut diags, &refs.collect::<Vec<_>>()).unwrap();
        assert!(!outcome.is_registered());
        assert_eq!(storage.merged_cells().len(), 1);
    }

    #[test]
    fn test_empty_request() {
        let mut storage = CellStorage::new();
        let mut diags = quiet();
        assert!(matches!(
            merge_cells(&mut storage, &mut diags, &[]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
