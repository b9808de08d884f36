//! The Source Map v3 JSON document.

use crate::{decode_mappings, DecodedMappings, SourceMapError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Prefix of the inline source map comment appended to generated JavaScript.
pub const SOURCE_MAPPING_URL_PREFIX: &str = "//# sourceMappingURL=data:application/json;base64,";

/// A Source Map v3 object.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapJson {
    /// Name of the generated file, or empty.
    #[serde(default)]
    pub file: String,
    /// Always 3.
    pub version: u32,
    /// Always empty for generated maps.
    #[serde(default)]
    pub source_root: String,
    /// Source URLs in registration order.
    pub sources: Vec<String>,
    /// Source contents parallel to `sources`; `None` when not embedded.
    #[serde(default)]
    pub sources_content: Vec<Option<String>>,
    /// The VLQ-encoded mappings.
    pub mappings: String,
}

impl SourceMapJson {
    /// Parses a source map from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SourceMapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this map as compact JSON.
    pub fn to_json_string(&self) -> Result<String, SourceMapError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the inline comment embedding this map as a base64 data URL.
    pub fn to_js_comment(&self) -> Result<String, SourceMapError> {
        let json = self.to_json_string()?;
        tracing::debug!(
            sources = self.sources.len(),
            bytes = json.len(),
            "encoding inline source map"
        );
        Ok(format!(
            "{SOURCE_MAPPING_URL_PREFIX}{}",
            STANDARD.encode(json.as_bytes())
        ))
    }

    /// Decodes the `mappings` field.
    pub fn decode_mappings(&self) -> Result<DecodedMappings, SourceMapError> {
        decode_mappings(&self.mappings)
    }
}
