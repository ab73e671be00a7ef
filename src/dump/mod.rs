//! Hex+ASCII dump rendering for byte regions.
//!
//! A dump is one row per 16 input bytes. Each row carries the row's
//! display offset, its bytes, and a printable-ASCII gutter, and renders
//! to one line of text:
//!
//! ```text
//! 00000000: 48 65 6c 6c 6f                                    |Hello|
//! ```
//!
//! Rows are produced lazily by [`DumpRows`]; nothing is buffered and
//! the source region is re-scannable, so a dump is a pure function of
//! the region's current contents.

mod row;
mod rows;

pub use self::row::DumpRow;
pub use self::rows::DumpRows;

use crate::region::ByteRegion;
use std::fmt::Write;

/// Number of bytes rendered per dump row.
pub const BYTES_PER_ROW: usize = 16;

/// Render every row of `region`, one line per row, each terminated by
/// a newline. An empty region renders to an empty string.
pub fn dump_to_string(region: &ByteRegion<'_>) -> String {
    let mut out = String::new();
    for row in region.dump_rows() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{row}");
    }
    out
}
