//! Command line argument parsing for the blur CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Blur - fuzzy word completion over a dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "blur")]
#[command(about = "Fuzzy word completion over a dictionary trie")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BlurArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BlurArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fuzzy search a dictionary
    Search(SearchArgs),

    /// Complete a prefix from a dictionary
    Complete(CompleteArgs),

    /// List the edit-distance variants of a word
    Variants(VariantsArgs),

    /// Levenshtein distance between two words
    Distance(DistanceArgs),
}

/// Arguments for fuzzy search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICT")]
    pub dictionary: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Search configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum edit distance of query variants (0-2)
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Score penalty per edit
    #[arg(long)]
    pub distance_penalty: Option<usize>,

    /// Shortest query that is searched at all
    #[arg(long)]
    pub min_query_length: Option<usize>,
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICT")]
    pub dictionary: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of completions to return
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Prefer short completions instead of long ones
    #[arg(long)]
    pub shortest: bool,
}

/// Arguments for listing variants
#[derive(Parser, Debug, Clone)]
pub struct VariantsArgs {
    /// Word to blur
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance (0-2)
    #[arg(short = 'd', long, default_value = "1")]
    pub distance: usize,

    /// Print at most this many variants
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    #[arg(value_name = "A")]
    pub first: String,

    #[arg(value_name = "B")]
    pub second: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_command() {
        let args = BlurArgs::try_parse_from([
            "blur",
            "search",
            "/path/to/words.txt",
            "hapy",
            "-n",
            "5",
            "--max-distance",
            "1",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.dictionary, PathBuf::from("/path/to/words.txt"));
            assert_eq!(search_args.query, "hapy");
            assert_eq!(search_args.count, 5);
            assert_eq!(search_args.max_distance, Some(1));
            assert_eq!(search_args.distance_penalty, None);
            assert!(search_args.config.is_none());
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_complete_command() {
        let args =
            BlurArgs::try_parse_from(["blur", "complete", "words.txt", "ha", "--shortest"])
                .unwrap();

        if let Command::Complete(complete_args) = args.command {
            assert_eq!(complete_args.prefix, "ha");
            assert_eq!(complete_args.count, 10);
            assert!(complete_args.shortest);
        } else {
            panic!("Expected Complete command");
        }
    }

    #[test]
    fn test_variants_command() {
        let args =
            BlurArgs::try_parse_from(["blur", "variants", "hap", "-d", "2", "--limit", "3"])
                .unwrap();

        if let Command::Variants(variants_args) = args.command {
            assert_eq!(variants_args.word, "hap");
            assert_eq!(variants_args.distance, 2);
            assert_eq!(variants_args.limit, Some(3));
        } else {
            panic!("Expected Variants command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = BlurArgs::try_parse_from([
            "blur", "-vv", "-f", "json", "--pretty", "distance", "kitten", "sitting",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }

    #[test]
    fn test_verbosity_levels() {
        let quiet = BlurArgs::try_parse_from(["blur", "-q", "-vvv", "distance", "a", "b"]).unwrap();
        assert_eq!(quiet.verbosity(), 0);

        let normal = BlurArgs::try_parse_from(["blur", "distance", "a", "b"]).unwrap();
        assert_eq!(normal.verbosity(), 1);
    }

    #[test]
    fn test_missing_query_is_rejected() {
        assert!(BlurArgs::try_parse_from(["blur", "search", "words.txt"]).is_err());
    }
}
