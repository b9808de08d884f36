//! Emit plans: recorded code generation output to replay into a source map.

use serde::Deserialize;
use source_map::{SourceMapError, SourceMapGenerator};

/// A recorded emit: the sources a compiler registered and the mappings it added,
/// line by line.
///
/// ```json
/// {
///   "file": "app.js",
///   "sources": [{ "url": "app.html", "content": "<p>hi</p>" }],
///   "lines": [[{ "col": 0, "source": "app.html", "line": 0, "column": 0 }], [{ "col": 4 }]]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitPlan {
    /// Name of the generated file.
    #[serde(default)]
    pub file: Option<String>,
    /// Sources in registration order.
    #[serde(default)]
    pub sources: Vec<PlanSource>,
    /// Mappings for each generated line.
    pub lines: Vec<Vec<PlanMapping>>,
}

/// A registered source.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanSource {
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// One `add_mapping` call.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanMapping {
    /// Generated column.
    pub col: u32,
    #[serde(default)]
    pub source: Option<String>,
    /// Original line.
    #[serde(default)]
    pub line: Option<u32>,
    /// Original column.
    #[serde(default)]
    pub column: Option<u32>,
}

impl EmitPlan {
    /// Parses a plan from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replays the plan into a fresh generator, stopping at the first usage error.
    pub fn replay(&self, default_file: Option<&str>) -> Result<SourceMapGenerator, SourceMapError> {
        let mut generator = SourceMapGenerator::new(self.file.as_deref().or(default_file));

        for source in &self.sources {
            generator.add_source(source.url.as_str(), source.content.as_deref());
        }

        for line in &self.lines {
            generator.add_line();
            for mapping in line {
                generator.add_mapping(
                    mapping.col,
                    mapping.source.as_deref(),
                    mapping.line,
                    mapping.column,
                )?;
            }
        }

        Ok(generator)
    }
}
