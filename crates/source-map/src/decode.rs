//! Decoding of the `mappings` field back into absolute positions.

use crate::{vlq, SourceMapError};

/// A position in an original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OriginalPosition {
    /// Index into the map's `sources`.
    pub source_index: u32,
    /// 0-indexed original line.
    pub line: u32,
    /// 0-indexed original column.
    pub column: u32,
}

/// A decoded mapping segment with absolute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedSegment {
    /// 0-indexed column in the generated line.
    pub generated_column: u32,
    /// The original position, for segments with a source.
    pub source: Option<OriginalPosition>,
}

/// Decoded mappings, one segment list per generated line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedMappings {
    lines: Vec<Vec<DecodedSegment>>,
}

impl DecodedMappings {
    /// Returns the segments grouped by generated line.
    pub fn lines(&self) -> &[Vec<DecodedSegment>] {
        &self.lines
    }

    /// Returns every segment with its 0-indexed generated line.
    pub fn segments(&self) -> impl Iterator<Item = (u32, &DecodedSegment)> {
        self.lines.iter().enumerate().flat_map(|(line, segments)| {
            segments.iter().map(move |segment| (line as u32, segment))
        })
    }

    /// Finds the original position for a generated line and column.
    ///
    /// Uses the last segment on the line starting at or before `column`. Returns
    /// `None` if there is no such segment or it has no source.
    pub fn original_position(&self, line: u32, column: u32) -> Option<OriginalPosition> {
        let segments = self.lines.get(line as usize)?;
        let idx = segments.partition_point(|segment| segment.generated_column <= column);
        segments.get(idx.checked_sub(1)?)?.source
    }
}

/// Running absolute values while decoding.
#[derive(Debug, Default)]
struct DecodeState {
    generated_column: i64,
    source_index: i64,
    source_line: i64,
    source_column: i64,
}

/// Decodes a `mappings` string.
pub fn decode_mappings(mappings: &str) -> Result<DecodedMappings, SourceMapError> {
    let mut state = DecodeState::default();
    let mut lines = Vec::new();

    for line in mappings.split(';') {
        state.generated_column = 0;
        let mut segments = Vec::new();

        for segment in line.split(',').filter(|segment| !segment.is_empty()) {
            let mut chars = segment.chars().peekable();
            let mut fields = Vec::with_capacity(5);
            while chars.peek().is_some() {
                fields.push(vlq::decode(&mut chars)?);
            }

            state.generated_column += fields[0];
            let generated_column = to_u32(state.generated_column, "generated column")?;

            let source = match fields.len() {
                1 => None,
                // A fifth field indexes `names`, which is not tracked.
                4 | 5 => {
                    state.source_index += fields[1];
                    state.source_line += fields[2];
                    state.source_column += fields[3];
                    Some(OriginalPosition {
                        source_index: to_u32(state.source_index, "source index")?,
                        line: to_u32(state.source_line, "source line")?,
                        column: to_u32(state.source_column, "source column")?,
                    })
                }
                len => return Err(SourceMapError::InvalidSegmentLength { len }),
            };

            segments.push(DecodedSegment {
                generated_column,
                source,
            });
        }

        lines.push(segments);
    }

    Ok(DecodedMappings { lines })
}

fn to_u32(value: i64, field: &'static str) -> Result<u32, SourceMapError> {
    u32::try_from(value).map_err(|_| SourceMapError::ValueOutOfRange { field })
}
