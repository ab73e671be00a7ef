//! Error types for the bytelens inspection library.
//!
//! The inspection routines themselves are error-free for any in-bounds
//! region; the only runtime failures are sub-region requests outside a
//! parent view and serialization of inspection records.

use thiserror::Error;

/// Main error type for bytelens operations.
#[derive(Debug, Error)]
pub enum BytelensError {
    /// Sub-region request outside the parent region's bounds
    #[error("region bounds violated: requested {start:#x}..{end:#x} of a {len}-byte region")]
    RegionBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for bytelens operations
pub type Result<T> = std::result::Result<T, BytelensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BytelensError::RegionBounds {
            start: 0x10,
            end: 0x40,
            len: 32,
        };
        assert_eq!(
            err.to_string(),
            "region bounds violated: requested 0x10..0x40 of a 32-byte region"
        );

        let err = BytelensError::Serialization("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "Serialization error: unexpected end of input");
    }
}
