//! Borrowed byte-region views.
//!
//! This module provides the ByteRegion type, the bounds-known read-only
//! view over caller-owned bytes that every inspection entry point takes.
//! The view borrows and never copies; the borrow checker guarantees the
//! underlying buffer outlives the inspection, so a region can never
//! describe memory the caller does not own.

use crate::error::{BytelensError, Result};
use std::fmt;
use std::ops::Range;

/// A read-only view over a contiguous span of caller-owned bytes.
///
/// A region pairs the borrowed bytes with a display base: the offset
/// printed for the region's first byte. The base is presentation-only
/// and defaults to 0; it does not move the view within the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRegion<'a> {
    bytes: &'a [u8],
    base: u64,
}

impl<'a> ByteRegion<'a> {
    /// Create a region over `bytes` with a display base of 0.
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteRegion { bytes, base: 0 }
    }

    /// Create a region whose first byte is labeled `base` in dump output.
    pub fn with_base(bytes: &'a [u8], base: u64) -> Self {
        ByteRegion { bytes, base }
    }

    /// The viewed bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Display offset of the first byte.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Length of the region in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the region is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Narrow the view to `range`, keeping display offsets consistent:
    /// the sub-region's base is this region's base plus `range.start`.
    ///
    /// # Errors
    /// Returns `RegionBounds` if the range is inverted or extends past
    /// the end of the region.
    pub fn slice(&self, range: Range<usize>) -> Result<ByteRegion<'a>> {
        if range.start > range.end || range.end > self.bytes.len() {
            return Err(BytelensError::RegionBounds {
                start: range.start,
                end: range.end,
                len: self.bytes.len(),
            });
        }
        Ok(ByteRegion {
            bytes: &self.bytes[range.start..range.end],
            base: self.base + range.start as u64,
        })
    }
}

impl<'a> From<&'a [u8]> for ByteRegion<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteRegion::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteRegion<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        ByteRegion::new(bytes)
    }
}

impl fmt::Display for ByteRegion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes at {:#010x}", self.bytes.len(), self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_basics() {
        let data = [0u8, 1, 2, 3];
        let region = ByteRegion::new(&data);
        assert_eq!(region.len(), 4);
        assert!(!region.is_empty());
        assert_eq!(region.base(), 0);
        assert_eq!(region.bytes(), &data);

        let empty = ByteRegion::new(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_slice_adjusts_base() {
        let data: Vec<u8> = (0..32).collect();
        let region = ByteRegion::with_base(&data, 0x1000);
        let sub = region.slice(8..16).unwrap();
        assert_eq!(sub.base(), 0x1008);
        assert_eq!(sub.bytes(), &data[8..16]);
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let data = [0u8; 8];
        let region = ByteRegion::new(&data);
        assert!(region.slice(0..9).is_err());
        assert!(region.slice(6..4).is_err());
        // Empty range at the end is still in bounds
        assert!(region.slice(8..8).is_ok());
    }

    #[test]
    fn test_display() {
        let data = [0u8; 5];
        let region = ByteRegion::with_base(&data, 0x40);
        assert_eq!(region.to_string(), "5 bytes at 0x00000040");
    }
}
