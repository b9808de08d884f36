//! Source map error types.

use thiserror::Error;

/// An error raised while building, serializing or decoding a source map.
///
/// The builder variants are usage errors: they mean the caller emitted mappings in
/// an order the format cannot represent, and the current file should be abandoned.
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// `add_mapping` was called before any `add_line`.
    #[error("a line must be added before mappings can be added")]
    NoLine,

    /// A mapping referenced a source that was never registered.
    #[error("unknown source file \"{url}\"")]
    UnknownSource {
        /// The unregistered source URL.
        url: String,
    },

    /// A mapping was added at a column before the previous mapping on the same line.
    #[error("mapping added out of order at line {line}: column {col0} after column {last_col0}")]
    OutOfOrder {
        /// 0-indexed generated line.
        line: usize,
        /// The rejected column.
        col0: u32,
        /// The last column recorded on the line.
        last_col0: u32,
    },

    /// A source URL was given without both an original line and column.
    #[error("the source location must be provided when a source url is provided (\"{url}\")")]
    MissingSourceLocation {
        /// The source URL of the incomplete mapping.
        url: String,
    },

    /// A character outside the base64 alphabet was found in a mappings string.
    #[error("invalid base64 digit '{ch}' in mappings")]
    InvalidBase64Digit {
        /// The offending character.
        ch: char,
    },

    /// The mappings string ended in the middle of a VLQ value.
    #[error("unterminated VLQ value in mappings")]
    UnterminatedVlq,

    /// A VLQ value did not fit in 64 bits.
    #[error("VLQ value overflows in mappings")]
    VlqOverflow,

    /// A segment had a field count other than 1, 4 or 5.
    #[error("invalid segment with {len} fields in mappings")]
    InvalidSegmentLength {
        /// Number of fields decoded.
        len: usize,
    },

    /// A decoded delta produced a value outside the `u32` range.
    #[error("{field} out of range in decoded mappings")]
    ValueOutOfRange {
        /// Name of the field that went negative.
        field: &'static str,
    },

    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SourceMapError::OutOfOrder {
            line: 2,
            col0: 3,
            last_col0: 7,
        };
        assert_eq!(
            error.to_string(),
            "mapping added out of order at line 2: column 3 after column 7"
        );
        assert_eq!(
            SourceMapError::UnknownSource {
                url: "a.ts".to_string()
            }
            .to_string(),
            "unknown source file \"a.ts\""
        );
    }
}
