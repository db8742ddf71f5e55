//! Defines [`GeoBlobError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoBlobError {
    /// A fixed marker byte did not match its expected value.
    #[error("invalid {kind} marker: expected {expected:#04x}, found {found:#04x}")]
    InvalidMarker {
        /// Which marker failed to match (e.g. `"start"`, `"mbr"`, `"magic"`).
        kind: &'static str,
        /// The byte the format mandates at this position.
        expected: u8,
        /// The byte actually present in the blob.
        found: u8,
    },

    /// A geometry-type/flag integer does not match any known combination.
    #[error("unsupported geometry type code: {0}")]
    UnsupportedType(i64),

    /// Fewer bytes remain in the blob than the current structure requires.
    #[error("unexpected end of blob")]
    Truncated,

    /// An element or coordinate count does not fit in the i32 the formats mandate.
    #[error("overflow: count does not fit in i32")]
    Overflow,

    /// Structurally invalid data that is none of the above.
    #[error("malformed blob: {0}")]
    Malformed(String),
}

/// Crate-specific result type.
pub type GeoBlobResult<T> = std::result::Result<T, GeoBlobError>;
