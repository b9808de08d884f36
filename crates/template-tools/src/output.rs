//! Output formatting.

use crate::cli::OutputFormat;
use html_tags::{ContentType, TagRegistry};
use serde::Serialize;
use source_map::{DecodedMappings, SourceMapJson};

/// A tag rule as reported to the user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSummary {
    pub name: String,
    /// Whether the name is listed or known (as opposed to the fallback rule).
    pub known: bool,
    pub is_void: bool,
    pub closed_by_parent: bool,
    pub can_self_close: bool,
    pub ignore_first_lf: bool,
    pub content_type: ContentType,
    pub implicit_namespace_prefix: Option<String>,
    pub prevent_namespace_inheritance: bool,
    /// Sorted for stable output.
    pub closed_by_children: Vec<String>,
}

impl TagSummary {
    /// Summarizes the rule for `name` with the content type resolved for `ns`.
    pub fn new(registry: &TagRegistry, name: &str, ns: Option<&str>) -> Self {
        let rule = registry.get(name);
        let mut closed_by_children: Vec<String> =
            rule.closed_by_children().map(str::to_owned).collect();
        closed_by_children.sort_unstable();

        Self {
            name: name.to_string(),
            known: registry.is_known(name),
            is_void: rule.is_void(),
            closed_by_parent: rule.closed_by_parent(),
            can_self_close: rule.can_self_close(),
            ignore_first_lf: rule.ignore_first_lf(),
            content_type: rule.content_type(ns),
            implicit_namespace_prefix: rule.implicit_namespace_prefix().map(str::to_owned),
            prevent_namespace_inheritance: rule.prevent_namespace_inheritance(),
            closed_by_children,
        }
    }

    fn human(&self) -> String {
        let mut flags = Vec::new();
        if !self.known {
            flags.push("unknown".to_string());
        }
        if self.is_void {
            flags.push("void".to_string());
        }
        if self.closed_by_parent {
            flags.push("closed-by-parent".to_string());
        }
        if self.can_self_close {
            flags.push("self-closing".to_string());
        }
        if self.ignore_first_lf {
            flags.push("ignore-first-lf".to_string());
        }
        if let Some(prefix) = &self.implicit_namespace_prefix {
            flags.push(format!("ns={prefix}"));
        }
        if self.prevent_namespace_inheritance {
            flags.push("no-ns-inheritance".to_string());
        }
        if !self.closed_by_children.is_empty() {
            flags.push(format!("closed-by=[{}]", self.closed_by_children.join(",")));
        }

        let content = match self.content_type {
            ContentType::RawText => "raw-text",
            ContentType::EscapableRawText => "escapable-raw-text",
            ContentType::ParsableData => "parsable-data",
        };

        if flags.is_empty() {
            format!("{}: {content}", self.name)
        } else {
            format!("{}: {content} {}", self.name, flags.join(" "))
        }
    }
}

/// Formats tag summaries.
pub fn format_tags(summaries: &[TagSummary], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => summaries
            .iter()
            .map(TagSummary::human)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(summaries).unwrap_or_default(),
    }
}

/// One encoded plan as reported in JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPlan {
    pub plan: String,
    /// `None` when the plan added no mappings.
    pub source_map: Option<SourceMapJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Formats encoded plans. Human output is one line per plan.
pub fn format_encoded(plans: &[EncodedPlan], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => plans
            .iter()
            .map(|encoded| match (&encoded.comment, &encoded.source_map) {
                (Some(comment), _) => comment.clone(),
                (None, Some(map)) => serde_json::to_string(map).unwrap_or_default(),
                (None, None) => format!("{}: no mappings", encoded.plan),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(plans).unwrap_or_default(),
    }
}

/// A decoded segment as reported to the user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRow {
    pub generated_line: u32,
    pub generated_column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_column: Option<u32>,
}

/// Flattens decoded mappings into rows, resolving source indices to URLs.
pub fn segment_rows(map: &SourceMapJson, decoded: &DecodedMappings) -> Vec<SegmentRow> {
    decoded
        .segments()
        .map(|(line, segment)| SegmentRow {
            generated_line: line,
            generated_column: segment.generated_column,
            source: segment.source.map(|pos| {
                map.sources
                    .get(pos.source_index as usize)
                    .cloned()
                    .unwrap_or_else(|| format!("#{}", pos.source_index))
            }),
            original_line: segment.source.map(|pos| pos.line),
            original_column: segment.source.map(|pos| pos.column),
        })
        .collect()
}

/// Formats decoded segments; human output is `line:col -> source:line:col`.
pub fn format_segments(rows: &[SegmentRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => rows
            .iter()
            .map(|row| match (&row.source, row.original_line, row.original_column) {
                (Some(source), Some(line), Some(column)) => format!(
                    "{}:{} -> {source}:{line}:{column}",
                    row.generated_line, row.generated_column
                ),
                _ => format!("{}:{}", row.generated_line, row.generated_column),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(rows).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_tags::tag_registry;
    use pretty_assertions::assert_eq;
    use source_map::decode_mappings;

    #[test]
    fn test_tag_human_output() {
        let registry = tag_registry();
        let summaries = vec![
            TagSummary::new(registry, "br", None),
            TagSummary::new(registry, "title", Some("svg")),
            TagSummary::new(registry, "x-foo", None),
            TagSummary::new(registry, "tr", None),
        ];
        assert_eq!(
            format_tags(&summaries, OutputFormat::Human),
            "br: parsable-data void closed-by-parent\n\
             title: parsable-data\n\
             x-foo: parsable-data unknown self-closing\n\
             tr: parsable-data closed-by-parent closed-by=[tr]"
        );
    }

    #[test]
    fn test_tag_json_output() {
        let summaries = vec![TagSummary::new(tag_registry(), "foreignObject", None)];
        let json: serde_json::Value =
            serde_json::from_str(&format_tags(&summaries, OutputFormat::Json)).unwrap();
        assert_eq!(json[0]["implicitNamespacePrefix"], "svg");
        assert_eq!(json[0]["preventNamespaceInheritance"], true);
        assert_eq!(json[0]["contentType"], "parsable-data");
    }

    #[test]
    fn test_segment_rows() {
        let map = SourceMapJson {
            file: String::new(),
            version: 3,
            source_root: String::new(),
            sources: vec!["x.ts".to_string()],
            sources_content: vec![None],
            mappings: "AAAA;I".to_string(),
        };
        let decoded = decode_mappings(&map.mappings).unwrap();
        let rows = segment_rows(&map, &decoded);
        assert_eq!(
            format_segments(&rows, OutputFormat::Human),
            "0:0 -> x.ts:0:0\n1:4"
        );
    }
}
