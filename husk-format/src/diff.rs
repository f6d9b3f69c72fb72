//! Line-diff hunks and distance-based grouping for the corrected strategy.

use similar::{DiffTag, TextDiff};

/// One contiguous change region, as paired line ranges into the original and
/// corrected content. Indices are 0-based; a pure insertion has `old_len` 0
/// and `old_start` pointing at the line it goes in front of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hunk {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
}

impl Hunk {
    fn old_end(&self) -> usize {
        self.old_start + self.old_len
    }

    fn absorb(&mut self, other: &Hunk) {
        self.old_len = other.old_start + other.old_len - self.old_start;
        self.new_len = other.new_start + other.new_len - self.new_start;
    }
}

/// Compute maximal contiguous change hunks between two line sequences.
pub(crate) fn diff_hunks(old: &[String], new: &[String]) -> Vec<Hunk> {
    let old_refs: Vec<&str> = old.iter().map(String::as_str).collect();
    let new_refs: Vec<&str> = new.iter().map(String::as_str).collect();
    let diff = TextDiff::from_slices(&old_refs, &new_refs);

    let mut hunks: Vec<Hunk> = Vec::new();
    for op in diff.ops() {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        let old_range = op.old_range();
        let new_range = op.new_range();
        let hunk = Hunk {
            old_start: old_range.start,
            old_len: old_range.len(),
            new_start: new_range.start,
            new_len: new_range.len(),
        };
        // Adjacent delete/insert ops belong to one change region.
        match hunks.last_mut() {
            Some(last) if last.old_end() == hunk.old_start => last.absorb(&hunk),
            _ => hunks.push(hunk),
        }
    }
    hunks
}

/// Merge hunks separated by at most `distance` unchanged lines.
///
/// The tolerated lines are folded into the merged ranges. A negative
/// distance never merges and additionally splits balanced replace-hunks one
/// line at a time.
pub(crate) fn group_hunks(hunks: Vec<Hunk>, distance: i64) -> Vec<Hunk> {
    if distance < 0 {
        return hunks.iter().flat_map(split_balanced).collect();
    }

    let mut grouped: Vec<Hunk> = Vec::new();
    for hunk in hunks {
        match grouped.last_mut() {
            Some(last) if (hunk.old_start - last.old_end()) as i64 <= distance => {
                last.absorb(&hunk);
            }
            _ => grouped.push(hunk),
        }
    }
    grouped
}

/// Split a balanced replace-hunk into one hunk per line. Hunks that delete
/// and insert different line counts stay whole, since pairing replacement
/// lines to original lines would be ambiguous.
fn split_balanced(hunk: &Hunk) -> Vec<Hunk> {
    if hunk.old_len != hunk.new_len || hunk.old_len <= 1 {
        return vec![hunk.clone()];
    }
    (0..hunk.old_len)
        .map(|i| Hunk {
            old_start: hunk.old_start + i,
            old_len: 1,
            new_start: hunk.new_start + i,
            new_len: 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_change_no_hunks() {
        let old = lines(&["a", "b"]);
        assert!(diff_hunks(&old, &old).is_empty());
    }

    #[test]
    fn test_single_line_replace() {
        let old = lines(&["a", "b", "c"]);
        let new = lines(&["a", "B", "c"]);
        let hunks = diff_hunks(&old, &new);
        assert_eq!(
            hunks,
            vec![Hunk {
                old_start: 1,
                old_len: 1,
                new_start: 1,
                new_len: 1,
            }]
        );
    }

    #[test]
    fn test_two_separated_changes() {
        let old = lines(&["a", "b", "c", "d"]);
        let new = lines(&["a", "B", "c", "D"]);
        let hunks = diff_hunks(&old, &new);
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[0].old_start, 1);
        assert_eq!(hunks[1].old_start, 3);
    }

    #[test]
    fn test_insertion_hunk() {
        let old = lines(&["a", "c"]);
        let new = lines(&["a", "b", "c"]);
        let hunks = diff_hunks(&old, &new);
        assert_eq!(
            hunks,
            vec![Hunk {
                old_start: 1,
                old_len: 0,
                new_start: 1,
                new_len: 1,
            }]
        );
    }

    #[test]
    fn test_group_within_distance() {
        let old = lines(&["a", "b", "c", "d"]);
        let new = lines(&["a", "B", "c", "D"]);
        let grouped = group_hunks(diff_hunks(&old, &new), 1);
        assert_eq!(
            grouped,
            vec![Hunk {
                old_start: 1,
                old_len: 3,
                new_start: 1,
                new_len: 3,
            }]
        );
    }

    #[test]
    fn test_group_beyond_distance_stays_split() {
        let old = lines(&["a", "b", "c", "c2", "d"]);
        let new = lines(&["a", "B", "c", "c2", "D"]);
        let grouped = group_hunks(diff_hunks(&old, &new), 1);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_negative_distance_never_merges() {
        let old = lines(&["a", "b", "c", "d"]);
        let new = lines(&["a", "B", "c", "D"]);
        let grouped = group_hunks(diff_hunks(&old, &new), -1);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_negative_distance_splits_balanced_runs() {
        let old = lines(&["a", "b", "c"]);
        let new = lines(&["A", "B", "c"]);
        let grouped = group_hunks(diff_hunks(&old, &new), -1);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].old_start, 0);
        assert_eq!(grouped[1].old_start, 1);
    }
}
