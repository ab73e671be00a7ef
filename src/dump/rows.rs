//! Lazy row iteration over a byte region.

use crate::dump::{DumpRow, BYTES_PER_ROW};
use crate::region::ByteRegion;

impl<'a> ByteRegion<'a> {
    /// Iterate over the region's dump rows.
    ///
    /// The iterator is lazy and finite: it yields `ceil(len / 16)` rows
    /// (zero for an empty region) and allocates only the row being
    /// produced. Calling this again re-scans the same region, so a dump
    /// is restartable and reflects the region's current contents.
    pub fn dump_rows(&self) -> DumpRows<'a> {
        tracing::debug!(len = self.len(), base = self.base(), "dumping region");
        DumpRows {
            remaining: self.bytes(),
            offset: self.base(),
        }
    }
}

/// Iterator over the rows of a region dump.
///
/// Cloning is cheap and leaves the original untouched, so a partially
/// consumed dump can be forked or restarted.
#[derive(Debug, Clone)]
pub struct DumpRows<'a> {
    remaining: &'a [u8],
    offset: u64,
}

impl Iterator for DumpRows<'_> {
    type Item = DumpRow;

    fn next(&mut self) -> Option<DumpRow> {
        if self.remaining.is_empty() {
            return None;
        }
        let take = self.remaining.len().min(BYTES_PER_ROW);
        let (chunk, rest) = self.remaining.split_at(take);
        let row = DumpRow::from_chunk(self.offset, chunk);
        self.remaining = rest;
        self.offset += take as u64;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rows = self.remaining.len().div_ceil(BYTES_PER_ROW);
        (rows, Some(rows))
    }
}

impl ExactSizeIterator for DumpRows<'_> {}

impl std::iter::FusedIterator for DumpRows<'_> {}
