//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

/// Inspect HTML tag rules and encode template source maps.
#[derive(Debug, Parser)]
#[command(name = "template-tools")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing template-tools.json
    #[arg(long, default_value = ".", global = true)]
    pub workspace: Utf8PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the parsing rules for one or more tag names
    Tag {
        /// Tag names to look up
        #[arg(required = true)]
        names: Vec<String>,

        /// Namespace prefix used to resolve the content type
        #[arg(long)]
        ns: Option<String>,
    },

    /// Encode source maps from emit plan files
    Encode {
        /// Emit plan JSON files
        #[arg(required = true)]
        plans: Vec<Utf8PathBuf>,

        /// Print the inline sourceMappingURL comment instead of the JSON map
        #[arg(long)]
        comment: bool,
    },

    /// Decode the mappings of a source map file
    Decode {
        /// Source map JSON file
        map: Utf8PathBuf,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_command() {
        let args = Args::parse_from(["template-tools", "tag", "br", "title", "--ns", "svg"]);
        assert_eq!(args.output, OutputFormat::Human);
        match args.command {
            Command::Tag { names, ns } => {
                assert_eq!(names, vec!["br".to_string(), "title".to_string()]);
                assert_eq!(ns.as_deref(), Some("svg"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "template-tools",
            "encode",
            "a.json",
            "--comment",
            "--output",
            "json",
            "--workspace",
            "proj",
        ]);
        assert_eq!(args.output, OutputFormat::Json);
        assert_eq!(args.workspace, Utf8PathBuf::from("proj"));
        assert!(matches!(args.command, Command::Encode { comment: true, .. }));
    }

    #[test]
    fn test_tag_requires_a_name() {
        assert!(Args::try_parse_from(["template-tools", "tag"]).is_err());
    }
}
