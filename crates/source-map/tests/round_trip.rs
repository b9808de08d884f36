//! Encoding then decoding a generated map must reproduce the mappings that were added.

use proptest::prelude::*;
use source_map::{OriginalPosition, SourceMapGenerator};

const SOURCES: [&str; 3] = ["a.ts", "b.ts", "c.html"];

/// One mapping request: column step from the previous mapping, and an optional source.
type MappingInput = (u32, Option<(usize, u32, u32)>);

fn mapping_strategy() -> impl Strategy<Value = MappingInput> {
    (
        0u32..40,
        prop::option::of((0usize..SOURCES.len(), 0u32..500, 0u32..200)),
    )
}

fn lines_strategy() -> impl Strategy<Value = Vec<Vec<MappingInput>>> {
    prop::collection::vec(prop::collection::vec(mapping_strategy(), 0..8), 1..12)
}

type Tuple = (u32, u32, Option<OriginalPosition>);

fn build(lines: &[Vec<MappingInput>]) -> (SourceMapGenerator, Vec<Tuple>) {
    let mut generator = SourceMapGenerator::new(Some("out.js"));
    for url in SOURCES {
        generator.add_source(url, None);
    }

    let mut expected = Vec::new();
    for (line, mappings) in lines.iter().enumerate() {
        generator.add_line();
        let mut col0 = 0;
        for (step, source) in mappings {
            col0 += step;
            match source {
                Some((index, line0, src_col0)) => {
                    generator
                        .add_mapping(col0, Some(SOURCES[*index]), Some(*line0), Some(*src_col0))
                        .unwrap();
                    expected.push((
                        line as u32,
                        col0,
                        Some(OriginalPosition {
                            source_index: *index as u32,
                            line: *line0,
                            column: *src_col0,
                        }),
                    ));
                }
                None => {
                    generator.add_mapping(col0, None, None, None).unwrap();
                    expected.push((line as u32, col0, None));
                }
            }
        }
    }
    (generator, expected)
}

proptest! {
    #[test]
    fn decoded_mappings_match_input(lines in lines_strategy()) {
        let (generator, expected) = build(&lines);

        match generator.to_json() {
            None => prop_assert!(expected.is_empty()),
            Some(map) => {
                let decoded = map.decode_mappings().unwrap();
                prop_assert_eq!(decoded.lines().len(), lines.len());
                let actual: Vec<Tuple> = decoded
                    .segments()
                    .map(|(line, segment)| (line, segment.generated_column, segment.source))
                    .collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn out_of_order_column_is_rejected(first in 1u32..1000, back in 1u32..1000) {
        let mut generator = SourceMapGenerator::new(None);
        generator.add_line().add_mapping(first, None, None, None).unwrap();
        let rejected = first.saturating_sub(back);
        prop_assume!(rejected < first);
        prop_assert!(generator.add_mapping(rejected, None, None, None).is_err());
        prop_assert_eq!(generator.lines()[0].len(), 1);
    }
}
