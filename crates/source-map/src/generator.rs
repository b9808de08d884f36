//! Incremental source map generator.

use crate::{vlq, SourceMapError, SourceMapJson};
use indexmap::IndexMap;

/// An original source position referenced by a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Index of the source in the generator's `sources` list.
    pub source_index: usize,
    /// 0-indexed line in the original source.
    pub line0: u32,
    /// 0-indexed column in the original source.
    pub col0: u32,
}

/// A single mapping on a generated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// 0-indexed column in the generated output.
    pub col0: u32,
    /// The original position, if this segment maps back to a source.
    pub source: Option<SourceLocation>,
}

/// A builder that records mappings line by line and serializes them as a
/// Source Map v3 document.
///
/// Mappings must be added in output order: a line is started with
/// [`add_line`](Self::add_line) and every [`add_mapping`](Self::add_mapping) on it
/// must use a column no smaller than the previous one.
///
/// # Example
///
/// ```
/// use source_map::SourceMapGenerator;
///
/// let mut generator = SourceMapGenerator::new(None);
/// generator.add_source("x.ts", Some("abc"));
/// generator.add_line().add_mapping(0, Some("x.ts"), Some(0), Some(0))?;
/// generator.add_line().add_mapping(4, None, None, None)?;
///
/// let map = generator.to_json().expect("has mappings");
/// assert_eq!(map.mappings, "AAAA;I");
/// # Ok::<(), source_map::SourceMapError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceMapGenerator {
    file: Option<String>,
    /// Registered sources and their content, in insertion order.
    sources: IndexMap<String, Option<String>>,
    lines: Vec<Vec<Segment>>,
    /// Column of the last mapping on the current line.
    last_col0: u32,
    has_mappings: bool,
}

impl SourceMapGenerator {
    /// Creates a generator for the given output file name.
    pub fn new(file: Option<&str>) -> Self {
        Self {
            file: file.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Registers an original source. The first registration of a URL wins; later
    /// calls with the same URL are ignored.
    pub fn add_source(&mut self, url: impl Into<String>, content: Option<&str>) -> &mut Self {
        self.sources
            .entry(url.into())
            .or_insert_with(|| content.map(str::to_owned));
        self
    }

    /// Starts a new generated line.
    pub fn add_line(&mut self) -> &mut Self {
        self.lines.push(Vec::new());
        self.last_col0 = 0;
        self
    }

    /// Adds a mapping at `col0` on the current generated line.
    ///
    /// When `source_url` is given it must have been registered with
    /// [`add_source`](Self::add_source), and both `source_line0` and `source_col0`
    /// must be present. The generator is left untouched when an error is returned.
    pub fn add_mapping(
        &mut self,
        col0: u32,
        source_url: Option<&str>,
        source_line0: Option<u32>,
        source_col0: Option<u32>,
    ) -> Result<&mut Self, SourceMapError> {
        let line = self
            .lines
            .len()
            .checked_sub(1)
            .ok_or(SourceMapError::NoLine)?;

        let source = match source_url {
            Some(url) => {
                let index = self.sources.get_index_of(url).ok_or_else(|| {
                    SourceMapError::UnknownSource {
                        url: url.to_string(),
                    }
                })?;
                Some((url, index))
            }
            None => None,
        };

        if col0 < self.last_col0 {
            return Err(SourceMapError::OutOfOrder {
                line,
                col0,
                last_col0: self.last_col0,
            });
        }

        let source = source
            .map(|(url, source_index)| match (source_line0, source_col0) {
                (Some(line0), Some(src_col0)) => Ok(SourceLocation {
                    source_index,
                    line0,
                    col0: src_col0,
                }),
                _ => Err(SourceMapError::MissingSourceLocation {
                    url: url.to_string(),
                }),
            })
            .transpose()?;

        tracing::trace!(line, col0, ?source, "mapping added");

        self.lines[line].push(Segment { col0, source });
        self.last_col0 = col0;
        self.has_mappings = true;
        Ok(self)
    }

    /// Returns true once at least one mapping has been added.
    #[inline]
    pub fn has_mappings(&self) -> bool {
        self.has_mappings
    }

    /// Returns the number of generated lines started so far.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the recorded segments, one entry per generated line.
    pub fn lines(&self) -> &[Vec<Segment>] {
        &self.lines
    }

    /// Returns the registered source URLs in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Builds the Source Map v3 object, or `None` if no mapping was ever added.
    pub fn to_json(&self) -> Option<SourceMapJson> {
        if !self.has_mappings {
            return None;
        }

        let mut encoder = MappingsEncoder::default();
        for (index, segments) in self.lines.iter().enumerate() {
            if index > 0 {
                encoder.next_line();
            }
            for (pos, segment) in segments.iter().enumerate() {
                if pos > 0 {
                    encoder.out.push(',');
                }
                encoder.segment(segment);
            }
        }

        Some(SourceMapJson {
            file: self.file.clone().unwrap_or_default(),
            version: 3,
            source_root: String::new(),
            sources: self.sources.keys().cloned().collect(),
            sources_content: self
                .sources
                .values()
                .map(|content| content.clone().filter(|text| !text.is_empty()))
                .collect(),
            mappings: encoder.out,
        })
    }

    /// Serializes the map as compact JSON. Yields `null` when there are no mappings.
    pub fn to_json_string(&self) -> Result<String, SourceMapError> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    /// Returns the inline `//# sourceMappingURL=` comment, or an empty string when
    /// there are no mappings.
    pub fn to_js_comment(&self) -> Result<String, SourceMapError> {
        match self.to_json() {
            Some(map) => map.to_js_comment(),
            None => Ok(String::new()),
        }
    }
}

/// Delta state for the `mappings` field.
///
/// The generated column restarts at zero on every line; the source fields carry
/// over for the whole file.
#[derive(Debug, Default)]
struct MappingsEncoder {
    last_generated_column: i64,
    last_source_index: i64,
    last_source_line: i64,
    last_source_column: i64,
    out: String,
}

impl MappingsEncoder {
    fn next_line(&mut self) {
        self.out.push(';');
        self.last_generated_column = 0;
    }

    fn segment(&mut self, segment: &Segment) {
        let col0 = i64::from(segment.col0);
        vlq::encode(col0 - self.last_generated_column, &mut self.out);
        self.last_generated_column = col0;

        if let Some(source) = segment.source {
            let index = source.source_index as i64;
            let line0 = i64::from(source.line0);
            let src_col0 = i64::from(source.col0);

            vlq::encode(index - self.last_source_index, &mut self.out);
            vlq::encode(line0 - self.last_source_line, &mut self.out);
            vlq::encode(src_col0 - self.last_source_column, &mut self.out);

            self.last_source_index = index;
            self.last_source_line = line0;
            self.last_source_column = src_col0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mappings(generator: &SourceMapGenerator) -> String {
        generator.to_json().map(|map| map.mappings).unwrap_or_default()
    }

    #[test]
    fn test_no_mappings() {
        let mut generator = SourceMapGenerator::new(Some("out.js"));
        generator.add_source("a.ts", Some("a")).add_line().add_line();
        assert!(!generator.has_mappings());
        assert!(generator.to_json().is_none());
        assert_eq!(generator.to_json_string().unwrap(), "null");
        assert_eq!(generator.to_js_comment().unwrap(), "");
    }

    #[test]
    fn test_simple_scenario() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_source("x.ts", Some("abc"));
        generator
            .add_line()
            .add_mapping(0, Some("x.ts"), Some(0), Some(0))
            .unwrap();
        generator.add_line().add_mapping(4, None, None, None).unwrap();

        let map = generator.to_json().unwrap();
        assert_eq!(map.mappings, "AAAA;I");
        assert_eq!(map.file, "");
        assert_eq!(map.version, 3);
        assert_eq!(map.source_root, "");
        assert_eq!(map.sources, vec!["x.ts".to_string()]);
        assert_eq!(map.sources_content, vec![Some("abc".to_string())]);
    }

    #[test]
    fn test_source_fields_carry_across_lines() {
        let mut generator = SourceMapGenerator::new(Some("out.js"));
        generator.add_source("a.ts", None).add_source("b.ts", None);
        generator
            .add_line()
            .add_mapping(0, Some("a.ts"), Some(0), Some(0))
            .unwrap()
            .add_mapping(5, Some("a.ts"), Some(0), Some(5))
            .unwrap();
        generator
            .add_line()
            .add_mapping(2, Some("b.ts"), Some(3), Some(1))
            .unwrap();

        assert_eq!(mappings(&generator), "AAAA,KAAK;ECGJ");
    }

    #[test]
    fn test_generated_column_resets_per_line() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_line().add_mapping(8, None, None, None).unwrap();
        generator.add_line().add_mapping(8, None, None, None).unwrap();
        assert_eq!(mappings(&generator), "Q;Q");
    }

    #[test]
    fn test_empty_lines_are_separated() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_line().add_mapping(0, None, None, None).unwrap();
        generator.add_line();
        generator.add_line().add_mapping(2, None, None, None).unwrap();
        generator.add_line();
        assert_eq!(mappings(&generator), "A;;E;");
    }

    #[test]
    fn test_equal_columns_allowed() {
        let mut generator = SourceMapGenerator::new(None);
        generator
            .add_line()
            .add_mapping(3, None, None, None)
            .unwrap()
            .add_mapping(3, None, None, None)
            .unwrap();
        assert_eq!(mappings(&generator), "G,A");
    }

    #[test]
    fn test_mapping_before_line() {
        let mut generator = SourceMapGenerator::new(None);
        let err = generator.add_mapping(0, None, None, None).unwrap_err();
        assert!(matches!(err, SourceMapError::NoLine));
        assert!(!generator.has_mappings());
    }

    #[test]
    fn test_unknown_source() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_line();
        let err = generator
            .add_mapping(0, Some("missing.ts"), Some(0), Some(0))
            .unwrap_err();
        assert!(matches!(err, SourceMapError::UnknownSource { url } if url == "missing.ts"));
    }

    #[test]
    fn test_out_of_order_leaves_state_untouched() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_line().add_mapping(7, None, None, None).unwrap();
        let err = generator.add_mapping(3, None, None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "mapping added out of order at line 0: column 3 after column 7"
        );
        assert_eq!(generator.lines()[0].len(), 1);

        // The tracker still holds 7.
        generator.add_mapping(7, None, None, None).unwrap();
        assert_eq!(mappings(&generator), "O,A");
    }

    #[test]
    fn test_add_line_resets_order_tracker() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_line().add_mapping(10, None, None, None).unwrap();
        generator.add_line().add_mapping(1, None, None, None).unwrap();
        assert_eq!(generator.line_count(), 2);
    }

    #[test]
    fn test_missing_source_location() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_source("a.ts", None).add_line();
        let err = generator
            .add_mapping(0, Some("a.ts"), Some(1), None)
            .unwrap_err();
        assert!(matches!(err, SourceMapError::MissingSourceLocation { .. }));
        let err = generator
            .add_mapping(0, Some("a.ts"), None, Some(1))
            .unwrap_err();
        assert!(matches!(err, SourceMapError::MissingSourceLocation { .. }));
        assert!(generator.lines()[0].is_empty());
    }

    #[test]
    fn test_first_source_content_wins() {
        let mut generator = SourceMapGenerator::new(None);
        generator
            .add_source("a.ts", Some("content1"))
            .add_source("b.ts", None)
            .add_source("a.ts", Some("content2"));
        generator.add_line().add_mapping(0, None, None, None).unwrap();

        let map = generator.to_json().unwrap();
        assert_eq!(map.sources, vec!["a.ts".to_string(), "b.ts".to_string()]);
        assert_eq!(
            map.sources_content,
            vec![Some("content1".to_string()), None]
        );
    }

    #[test]
    fn test_empty_content_serializes_as_null() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_source("a.ts", Some(""));
        generator.add_line().add_mapping(0, None, None, None).unwrap();
        assert_eq!(generator.to_json().unwrap().sources_content, vec![None]);
    }

    #[test]
    fn test_projection_recomputes_after_mutation() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_line().add_mapping(0, None, None, None).unwrap();
        assert_eq!(mappings(&generator), "A");
        generator.add_mapping(1, None, None, None).unwrap();
        assert_eq!(mappings(&generator), "A,C");
    }

    #[test]
    fn test_json_string_key_order() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_source("x.ts", Some("abc"));
        generator
            .add_line()
            .add_mapping(0, Some("x.ts"), Some(0), Some(0))
            .unwrap();
        generator.add_line().add_mapping(4, None, None, None).unwrap();

        insta::assert_snapshot!(
            generator.to_json_string().unwrap(),
            @r#"{"file":"","version":3,"sourceRoot":"","sources":["x.ts"],"sourcesContent":["abc"],"mappings":"AAAA;I"}"#
        );
    }

    #[test]
    fn test_js_comment() {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_source("x.ts", Some("abc"));
        generator
            .add_line()
            .add_mapping(0, Some("x.ts"), Some(0), Some(0))
            .unwrap();
        generator.add_line().add_mapping(4, None, None, None).unwrap();

        assert_eq!(
            generator.to_js_comment().unwrap(),
            "//# sourceMappingURL=data:application/json;base64,\
             eyJmaWxlIjoiIiwidmVyc2lvbiI6Mywic291cmNlUm9vdCI6IiIsInNvdXJjZXMiOlsieC50cyJdLCJzb3VyY2VzQ29udGVudCI6WyJhYmMiXSwibWFwcGluZ3MiOiJBQUFBO0kifQ=="
        );
    }

    #[test]
    fn test_js_comment_utf8_content() {
        let mut generator = SourceMapGenerator::new(Some("out.js"));
        generator.add_source("a.ts", Some("é"));
        generator
            .add_line()
            .add_mapping(0, Some("a.ts"), Some(0), Some(0))
            .unwrap();

        assert_eq!(
            generator.to_js_comment().unwrap(),
            "//# sourceMappingURL=data:application/json;base64,\
             eyJmaWxlIjoib3V0LmpzIiwidmVyc2lvbiI6Mywic291cmNlUm9vdCI6IiIsInNvdXJjZXMiOlsiYS50cyJdLCJzb3VyY2VzQ29udGVudCI6WyLDqSJdLCJtYXBwaW5ncyI6IkFBQUEifQ=="
        );
    }
}
