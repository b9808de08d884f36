//! Source Map v3 generation for compiled templates.
//!
//! This crate builds standard source maps incrementally while code is emitted,
//! serializes them to JSON or an inline `sourceMappingURL` comment, and decodes
//! `mappings` strings back into absolute positions.

mod decode;
mod error;
mod generator;
mod json;
pub mod vlq;

pub use decode::{decode_mappings, DecodedMappings, DecodedSegment, OriginalPosition};
pub use error::SourceMapError;
pub use generator::{Segment, SourceLocation, SourceMapGenerator};
pub use json::{SourceMapJson, SOURCE_MAPPING_URL_PREFIX};
