//! Subcommand execution.

use crate::cli::{Args, Command, OutputFormat};
use crate::config::ToolsConfig;
use crate::output::{self, EncodedPlan, TagSummary};
use crate::plan::EmitPlan;
use camino::{Utf8Path, Utf8PathBuf};
use html_tags::tag_registry;
use miette::Diagnostic;
use rayon::prelude::*;
use source_map::{SourceMapError, SourceMapJson};
use std::fs;
use thiserror::Error;

/// Command errors.
#[derive(Debug, Error, Diagnostic)]
pub enum CommandError {
    /// Failed to read an input file.
    #[error("failed to read {path}")]
    #[diagnostic(code(template_tools::read))]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid JSON for its kind.
    #[error("failed to parse {path}")]
    #[diagnostic(code(template_tools::parse))]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A plan violated the source map builder contract, or a map failed to decode.
    #[error("{path}: {source}")]
    #[diagnostic(
        code(template_tools::source_map),
        help("mappings must follow add_line and be added in output order")
    )]
    SourceMap {
        path: Utf8PathBuf,
        source: SourceMapError,
    },
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of inputs that failed.
    pub failed: usize,
}

/// Runs the selected subcommand, printing results to stdout.
pub fn run(args: &Args) -> Result<RunSummary, CommandError> {
    let config = ToolsConfig::load(&args.workspace);

    match &args.command {
        Command::Tag { names, ns } => {
            println!("{}", tags(&config, names, ns.as_deref(), args.output));
            Ok(RunSummary::default())
        }
        Command::Encode { plans, comment } => encode(&config, plans, *comment, args.output),
        Command::Decode { map } => {
            println!("{}", decode(map, args.output)?);
            Ok(RunSummary::default())
        }
    }
}

fn tags(config: &ToolsConfig, names: &[String], ns: Option<&str>, format: OutputFormat) -> String {
    let owned;
    let registry = if config.extra_elements.is_empty() {
        tag_registry()
    } else {
        owned = config.tag_registry();
        &owned
    };

    let summaries: Vec<TagSummary> = names
        .iter()
        .map(|name| TagSummary::new(registry, name, ns))
        .collect();
    output::format_tags(&summaries, format)
}

fn encode(
    config: &ToolsConfig,
    plans: &[Utf8PathBuf],
    comment: bool,
    format: OutputFormat,
) -> Result<RunSummary, CommandError> {
    // One generator per plan; plans are independent.
    let results: Vec<Result<EncodedPlan, CommandError>> = plans
        .par_iter()
        .map(|path| encode_plan(path, config.file.as_deref(), comment))
        .collect();

    let mut summary = RunSummary::default();
    let mut encoded = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(plan) => encoded.push(plan),
            Err(e) => {
                summary.failed += 1;
                eprintln!("{}", error_chain(&e));
            }
        }
    }

    if !encoded.is_empty() {
        println!("{}", output::format_encoded(&encoded, format));
    }
    Ok(summary)
}

fn encode_plan(
    path: &Utf8Path,
    default_file: Option<&str>,
    comment: bool,
) -> Result<EncodedPlan, CommandError> {
    let content = read(path)?;
    let plan = EmitPlan::from_json(&content).map_err(|source| CommandError::Parse {
        path: path.to_owned(),
        source,
    })?;

    let source_map_error = |source| CommandError::SourceMap {
        path: path.to_owned(),
        source,
    };
    let generator = plan.replay(default_file).map_err(source_map_error)?;
    tracing::debug!(%path, lines = generator.line_count(), "plan replayed");

    let comment = if comment && generator.has_mappings() {
        Some(generator.to_js_comment().map_err(source_map_error)?)
    } else {
        None
    };

    Ok(EncodedPlan {
        plan: path.to_string(),
        source_map: generator.to_json(),
        comment,
    })
}

fn decode(path: &Utf8Path, format: OutputFormat) -> Result<String, CommandError> {
    let content = read(path)?;
    let map: SourceMapJson = serde_json::from_str(&content).map_err(|source| CommandError::Parse {
        path: path.to_owned(),
        source,
    })?;
    let decoded = map
        .decode_mappings()
        .map_err(|source| CommandError::SourceMap {
            path: path.to_owned(),
            source,
        })?;
    Ok(output::format_segments(
        &output::segment_rows(&map, &decoded),
        format,
    ))
}

/// Formats an error followed by each of its causes, one per line.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut out = format!("Error: {error}");
    let mut cause = error.source();
    while let Some(e) = cause {
        out.push_str(&format!("\n  caused by: {e}"));
        cause = e.source();
    }
    out
}

fn read(path: &Utf8Path) -> Result<String, CommandError> {
    fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })
}
