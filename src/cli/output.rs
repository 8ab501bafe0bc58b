//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{BlurArgs, OutputFormat};
use crate::error::Result;
use crate::fuzzy::ScoredCompletion;
use crate::spelling::Candidate;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Result structure for fuzzy search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<ScoredCompletion>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// Result structure for prefix completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResults {
    pub prefix: String,
    pub strategy: String,
    pub completions: Vec<String>,
}

/// Result structure for variant listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct VariantResults {
    pub word: String,
    pub max_distance: usize,
    pub total: usize,
    pub variants: Vec<Candidate>,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub first: String,
    pub second: String,
    pub distance: usize,
}

impl HumanOutput for SearchResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.results.is_empty() {
            return writeln!(out, "No matches for '{}'", self.query);
        }
        for (i, result) in self.results.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {:<24} score {:>4}  distance {}",
                i + 1,
                result.text,
                result.score,
                result.distance
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for CompletionResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.completions.is_empty() {
            return writeln!(out, "No completions for '{}'", self.prefix);
        }
        for completion in &self.completions {
            writeln!(out, "{completion}")?;
        }
        Ok(())
    }
}

impl HumanOutput for VariantResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for variant in &self.variants {
            writeln!(out, "{}\t{}", variant.distance, variant.text)?;
        }
        if self.variants.len() < self.total {
            writeln!(out, "... {} more", self.total - self.variants.len())?;
        }
        Ok(())
    }
}

impl HumanOutput for DistanceResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.distance)
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &BlurArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result to `out` in the format selected by `args`.
pub fn write_result<T>(out: &mut dyn Write, message: &str, result: &T, args: &BlurArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            if args.pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn render<T: Serialize + HumanOutput>(result: &T, argv: &[&str]) -> String {
        let args = BlurArgs::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        write_result(&mut buf, "done", result, &args).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_search_results_human() {
        let results = SearchResults {
            query: "hap".to_string(),
            results: vec![ScoredCompletion {
                text: "happier".to_string(),
                distance: 0,
                score: 7,
            }],
            dictionary_words: 5,
            duration_ms: 0,
        };
        let text = render(&results, &["blur", "distance", "a", "b"]);
        assert!(text.contains("happier"));
        assert!(text.contains("score    7"));
        assert!(!text.contains("done"));
    }

    #[test]
    fn test_empty_completions_human() {
        let results = CompletionResults {
            prefix: "zz".to_string(),
            strategy: "longest".to_string(),
            completions: vec![],
        };
        let text = render(&results, &["blur", "distance", "a", "b"]);
        assert_eq!(text, "No completions for 'zz'\n");
    }

    #[test]
    fn test_variants_truncation_note() {
        let results = VariantResults {
            word: "ab".to_string(),
            max_distance: 1,
            total: 3,
            variants: vec![Candidate::new("ab", 0)],
        };
        let text = render(&results, &["blur", "distance", "a", "b"]);
        assert_eq!(text, "0\tab\n... 2 more\n");
    }

    #[test]
    fn test_json_output() {
        let result = DistanceResult {
            first: "kitten".to_string(),
            second: "sitting".to_string(),
            distance: 3,
        };
        let text = render(&result, &["blur", "-f", "json", "distance", "a", "b"]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["distance"], 3);
        assert_eq!(value["first"], "kitten");
        assert_eq!(text.lines().count(), 1);

        let pretty = render(
            &result,
            &["blur", "-f", "json", "--pretty", "distance", "a", "b"],
        );
        assert!(pretty.lines().count() > 1);
    }

    #[test]
    fn test_verbose_prints_message() {
        let result = DistanceResult {
            first: "a".to_string(),
            second: "b".to_string(),
            distance: 1,
        };
        let text = render(&result, &["blur", "-vv", "distance", "a", "b"]);
        assert_eq!(text, "done\n\n1\n");
    }
}
