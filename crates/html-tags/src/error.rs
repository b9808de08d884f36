//! Tag name error types.

use thiserror::Error;

/// An error raised while interpreting a tag name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// A name starting with `:` lacked the closing colon of `:namespace:name`.
    #[error("unsupported format \"{name}\" expecting \":namespace:name\"")]
    UnsupportedNamespace {
        /// The malformed name.
        name: String,
    },
}
