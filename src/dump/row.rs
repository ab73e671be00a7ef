//! One rendered row of a region dump.

use crate::classify::ascii_cell;
use crate::dump::BYTES_PER_ROW;
use crate::error::{BytelensError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One 16-byte (or shorter, for the final row) slice of a region,
/// ready for display.
///
/// Rows are transient values: they are produced by iteration, rendered
/// or serialized, and dropped. The `ascii` gutter always has exactly
/// one character per byte, `.` standing in for anything outside the
/// printable ASCII range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpRow {
    /// Display offset of the row's first byte
    pub offset: u64,
    /// The row's bytes, at most 16
    pub bytes: Vec<u8>,
    /// Printable-ASCII rendering, one character per byte
    pub ascii: String,
}

impl DumpRow {
    pub(crate) fn from_chunk(offset: u64, chunk: &[u8]) -> Self {
        debug_assert!(chunk.len() <= BYTES_PER_ROW);
        DumpRow {
            offset,
            bytes: chunk.to_vec(),
            ascii: chunk.iter().map(|&b| ascii_cell(b)).collect(),
        }
    }

    /// Compact lowercase hex digits of the row's bytes, no separators.
    pub fn hex_digits(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Serialize the row to a JSON string.
    ///
    /// # Errors
    /// Returns a `Serialization` error if JSON encoding fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BytelensError::Serialization(e.to_string()))
    }

    /// Deserialize a row from a JSON string.
    ///
    /// # Errors
    /// Returns a `Serialization` error if the JSON is malformed
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| BytelensError::Serialization(e.to_string()))
    }
}

impl fmt::Display for DumpRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}: ", self.offset)?;
        for b in &self.bytes {
            write!(f, "{:02x} ", b)?;
        }
        // Blank cells keep the gutter aligned on a short final row
        for _ in self.bytes.len()..BYTES_PER_ROW {
            f.write_str("   ")?;
        }
        write!(f, " |{}|", self.ascii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_row_render() {
        let bytes: Vec<u8> = (0x41..0x51).collect();
        let row = DumpRow::from_chunk(0, &bytes);
        assert_eq!(
            row.to_string(),
            "00000000: 41 42 43 44 45 46 47 48 49 4a 4b 4c 4d 4e 4f 50  |ABCDEFGHIJKLMNOP|"
        );
    }

    #[test]
    fn test_short_row_pads_gutter() {
        let row = DumpRow::from_chunk(0x10, b"Hi");
        let line = row.to_string();
        assert!(line.starts_with("00000010: 48 69 "));
        assert!(line.ends_with(" |Hi|"));
        // Offset prefix + 16 three-char cells + " |" before the gutter
        let gutter = line.find('|').unwrap();
        assert_eq!(gutter, 10 + 16 * 3 + 1);
    }

    #[test]
    fn test_nonprintable_bytes_dotted() {
        let row = DumpRow::from_chunk(0, &[0x00, 0x1f, 0x20, 0x7e, 0x7f, 0xff]);
        assert_eq!(row.ascii, ".. ~..");
    }

    #[test]
    fn test_hex_digits() {
        let row = DumpRow::from_chunk(0, b"Hello");
        assert_eq!(row.hex_digits(), "48656c6c6f");
    }

    #[test]
    fn test_json_round_trip() {
        let row = DumpRow::from_chunk(0x20, b"json");
        let json = row.to_json().unwrap();
        let back = DumpRow::from_json(&json).unwrap();
        assert_eq!(row, back);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(DumpRow::from_json("{not json").is_err());
    }
}
