//! Per-column space counting.
//!
//! The statistical signal for column boundaries is how many rows carry a
//! space at each character position. Rows shorter than the widest row are
//! counted as if padded with trailing spaces, so a position beyond every
//! row's end counts all rows.

/// Space statistics for one block of rows, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceProfile {
    /// `counts[i]` = number of rows with a space (or no character at all)
    /// at position `i`. Length equals the widest row.
    counts: Vec<usize>,
    num_rows: usize,
}

impl SpaceProfile {
    /// Count spaces per column across `rows`.
    ///
    /// Two passes: the first finds the maximum row width so the count
    /// vector can be sized up front, the second walks every row once and
    /// treats the run past a short row's end as spaces. O(total bytes).
    pub fn build(rows: &[String]) -> Self {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut counts = vec![0usize; width];
        for row in rows {
            let bytes = row.as_bytes();
            for (i, slot) in counts.iter_mut().enumerate() {
                if i >= bytes.len() || bytes[i] == b' ' {
                    *slot += 1;
                }
            }
        }
        Self {
            counts,
            num_rows: rows.len(),
        }
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.counts.len()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Space count at position `i`.
    pub fn count(&self, i: usize) -> usize {
        self.counts[i]
    }

    /// Every distinct count value present in the profile, plus zero,
    /// sorted ascending. Never empty, so a threshold search always has
    /// at least one candidate.
    pub fn unique_counts(&self) -> Vec<usize> {
        let mut values = self.counts.clone();
        values.push(0);
        values.sort_unstable();
        values.dedup();
        values
    }
}
