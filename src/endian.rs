//! Native byte-order probing.
//!
//! The probe stores a marker in a four-byte integer and inspects which
//! end of its storage the low-order byte landed on. The result is a
//! hardware/ABI property that cannot change while the process runs, so
//! it is computed once and cached.
//!
//! Mixed-endian layouts are not representable; on such a target the
//! two-valued result reflects only the placement of the low-order byte.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker stored in a four-byte integer to tell the two layouts apart.
/// Its low-order byte is nonzero and every other byte is zero.
const PROBE_VALUE: u32 = 1;

static NATIVE: Lazy<Endianness> = Lazy::new(Endianness::probe);

/// The ordering of a multi-byte integer's bytes in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    /// Least-significant byte at the lowest address
    Little,
    /// Most-significant byte at the lowest address
    Big,
}

impl Endianness {
    /// Report the byte order of the running process.
    ///
    /// The probe runs once per process; every later call returns the
    /// cached result, so repeated calls are idempotent and free.
    pub fn detect() -> Endianness {
        *NATIVE
    }

    fn probe() -> Endianness {
        let bytes = PROBE_VALUE.to_ne_bytes();
        if bytes[0] == PROBE_VALUE as u8 {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// The other byte order. Useful when selecting a byte-swap routine
    /// for a wire format of fixed endianness.
    pub fn opposite(self) -> Endianness {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }

    /// Run the probe and return the marker value together with its
    /// actual in-memory byte sequence, lowest address first.
    pub fn report() -> ByteOrderReport {
        let endianness = Endianness::detect();
        tracing::debug!(%endianness, "byte-order probe");
        ByteOrderReport {
            probe_value: PROBE_VALUE,
            bytes: PROBE_VALUE.to_ne_bytes(),
            endianness,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little"),
            Endianness::Big => write!(f, "big"),
        }
    }
}

/// Result of one byte-order probe: the marker value and how its bytes
/// were laid out in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteOrderReport {
    /// The marker value that was stored
    pub probe_value: u32,
    /// The marker's storage, lowest address first
    pub bytes: [u8; 4],
    /// The byte order those bytes imply
    pub endianness: Endianness,
}
