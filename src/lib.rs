//! Bytelens: inspection utilities for raw byte regions.
//!
//! This crate provides two small, pure components over caller-owned
//! byte buffers:
//!
//! - A memory inspector that renders a region as the canonical
//!   hex+ASCII dump (one row per 16 bytes, zero-padded offsets, a `.`
//!   for every non-printable byte), produced lazily row by row.
//! - A byte-order probe that reports whether the running target stores
//!   the least-significant byte of a multi-byte integer at the lowest
//!   address.
//!
//! Around those sit layout reports for the target's primitive types and
//! byte/bit classification helpers shared with the dump renderer.
//!
//! Regions are borrowed, bounds-known slices, so a dump can never read
//! outside the caller's buffer. Neither component performs I/O or keeps
//! state between calls; the only allocations are the rows handed back.
//!
//! # Example
//!
//! ```
//! use bytelens::{ByteRegion, Endianness};
//!
//! let region = ByteRegion::new(b"Hello");
//! for row in region.dump_rows() {
//!     println!("{row}");
//! }
//!
//! if Endianness::detect() == Endianness::Little {
//!     // low-order byte first; swap before writing big-endian wire data
//! }
//! ```

/// Byte classification and bit-pattern rendering
pub mod classify;
/// Hex+ASCII dump rendering
pub mod dump;
/// Native byte-order probing
pub mod endian;
/// Error types
pub mod error;
/// Primitive type layout reports
pub mod layout;
/// Tracing initialization
pub mod logging;
/// Borrowed byte-region views
pub mod region;

pub use crate::dump::{dump_to_string, DumpRow, DumpRows};
pub use crate::endian::{ByteOrderReport, Endianness};
pub use crate::error::{BytelensError, Result};
pub use crate::layout::{primitive_layouts, target_report, TargetReport, TypeLayout};
pub use crate::region::ByteRegion;
