//! Inclusive 1-based page ranges.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Inclusive, 1-based span of pages.
///
/// Values built through [`PageRange::clamped`] always satisfy
/// `1 <= start <= end <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// First page (1-indexed).
    pub start: u32,
    /// Last page (1-indexed, inclusive).
    pub end: u32,
}

impl PageRange {
    /// Normalize a requested range against a document's page count.
    ///
    /// `start` is clamped into `[1, total]` and `end` into `[start, total]`,
    /// so a reversed or out-of-bounds request collapses to the nearest valid
    /// range instead of failing. A `total` of zero is treated as one page.
    pub fn clamped(start: i64, end: i64, total: u32) -> Self {
        let total = i64::from(total.max(1));
        let start = start.clamp(1, total);
        let end = end.clamp(start, total);

        // Both values are within [1, u32::MAX] after clamping.
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Number of pages in the range.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// A clamped range always covers at least one page.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the range contains `page`.
    pub fn contains(&self, page: u32) -> bool {
        (self.start..=self.end).contains(&page)
    }

    /// Iterate over the page numbers in the range.
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
