//! Command implementations for the blur CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::fuzzy::{FuzzyConfig, FuzzySearcher};
use crate::spelling::variants::blur;
use crate::trie::Trie;
use crate::trie::heuristic::HeuristicStrategy;
use crate::util::levenshtein::levenshtein_distance;

/// Execute a CLI command.
pub fn execute_command(args: BlurArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => {
            let results = run_search(search_args)?;
            output_result("Search completed", &results, &args)
        }
        Command::Complete(complete_args) => {
            let results = run_complete(complete_args)?;
            output_result("Completion finished", &results, &args)
        }
        Command::Variants(variants_args) => {
            let results = run_variants(variants_args)?;
            output_result("Variants generated", &results, &args)
        }
        Command::Distance(distance_args) => {
            let result = run_distance(distance_args);
            output_result("Distance computed", &result, &args)
        }
    }
}

/// Fuzzy search a dictionary file.
pub fn run_search(args: &SearchArgs) -> Result<SearchResults> {
    let config = resolve_config(args)?;
    let searcher = FuzzySearcher::with_config(config)?;
    let mut trie = load_trie(&args.dictionary)?;

    let start_time = Instant::now();
    let results = searcher.search_scored(&mut trie, &args.query, args.count)?;
    let duration = start_time.elapsed();

    info!(
        "search for {:?} returned {} results in {:?}",
        args.query,
        results.len(),
        duration
    );

    Ok(SearchResults {
        query: args.query.clone(),
        results,
        dictionary_words: trie.len(),
        duration_ms: duration.as_millis() as u64,
    })
}

/// Complete a prefix from a dictionary file.
pub fn run_complete(args: &CompleteArgs) -> Result<CompletionResults> {
    let strategy = if args.shortest {
        HeuristicStrategy::ShortestCompletion
    } else {
        HeuristicStrategy::LongestCompletion
    };

    let mut trie = load_trie(&args.dictionary)?;
    trie.setup_heuristics(strategy)?;
    let completions = trie.find_completions(&args.prefix, args.count)?;

    Ok(CompletionResults {
        prefix: args.prefix.clone(),
        strategy: strategy.to_string(),
        completions,
    })
}

/// List the blur of a word, closest first.
pub fn run_variants(args: &VariantsArgs) -> Result<VariantResults> {
    let mut variants = blur(args.distance, &args.word)?.into_sorted_vec();
    let total = variants.len();
    if let Some(limit) = args.limit {
        variants.truncate(limit);
    }

    Ok(VariantResults {
        word: args.word.clone(),
        max_distance: args.distance,
        total,
        variants,
    })
}

/// Levenshtein distance between the two arguments.
pub fn run_distance(args: &DistanceArgs) -> DistanceResult {
    DistanceResult {
        first: args.first.clone(),
        second: args.second.clone(),
        distance: levenshtein_distance(&args.first, &args.second),
    }
}

/// Start from the config file (or defaults) and apply flag overrides.
fn resolve_config(args: &SearchArgs) -> Result<FuzzyConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_from_file(path)?,
        None => FuzzyConfig::default(),
    };

    if let Some(max_distance) = args.max_distance {
        config.max_distance = max_distance;
    }
    if let Some(distance_penalty) = args.distance_penalty {
        config.distance_penalty = distance_penalty;
    }
    if let Some(min_query_length) = args.min_query_length {
        config.min_query_length = min_query_length;
    }

    config.validate()?;
    Ok(config)
}

fn load_config_from_file(path: &Path) -> Result<FuzzyConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    let config: FuzzyConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

fn load_trie(path: &Path) -> Result<Trie> {
    let mut trie = Trie::new();
    trie.load_dictionary(path)
        .with_context(|| format!("failed to load dictionary {}", path.display()))?;
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::BlurError;

    fn dictionary(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn search_args(dictionary: PathBuf, query: &str) -> SearchArgs {
        SearchArgs {
            dictionary,
            query: query.to_string(),
            count: 3,
            config: None,
            max_distance: None,
            distance_penalty: None,
            min_query_length: None,
        }
    }

    #[test]
    fn test_run_search() {
        let dict = dictionary(&["hat", "hats", "happy", "happier", "hap"]);
        let results = run_search(&search_args(dict.path().to_path_buf(), "hap")).unwrap();

        let texts: Vec<&str> = results.results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["happier", "happy", "hats"]);
        assert_eq!(results.dictionary_words, 5);
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let dict = dictionary(&["hat", "hats", "happy", "happier", "hap"]);
        let mut config_file = NamedTempFile::new().unwrap();
        write!(config_file, r#"{{"min_query_length": 10, "distance_penalty": 1}}"#).unwrap();
        config_file.flush().unwrap();

        let mut args = search_args(dict.path().to_path_buf(), "hap");
        args.config = Some(config_file.path().to_path_buf());
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.min_query_length, 10);
        assert_eq!(config.distance_penalty, 1);

        args.min_query_length = Some(2);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.min_query_length, 2);
        assert_eq!(config.distance_penalty, 1);
    }

    #[test]
    fn test_invalid_max_distance_flag() {
        let mut args = search_args(PathBuf::from("unused.txt"), "hap");
        args.max_distance = Some(5);
        assert!(matches!(
            resolve_config(&args),
            Err(BlurError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_malformed_config_file() {
        let mut config_file = NamedTempFile::new().unwrap();
        write!(config_file, "not json").unwrap();
        config_file.flush().unwrap();

        let mut args = search_args(PathBuf::from("unused.txt"), "hap");
        args.config = Some(config_file.path().to_path_buf());
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn test_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let args = search_args(dir.path().join("missing.txt"), "hap");
        let err = run_search(&args).unwrap_err();
        assert!(err.to_string().contains("failed to load dictionary"));
    }

    #[test]
    fn test_run_complete() {
        let dict = dictionary(&["hat", "hats", "happier"]);
        let mut args = CompleteArgs {
            dictionary: dict.path().to_path_buf(),
            prefix: "h".to_string(),
            count: 5,
            shortest: false,
        };
        let results = run_complete(&args).unwrap();
        assert_eq!(results.completions, vec!["happier", "hats"]);
        assert_eq!(results.strategy, "longest");

        args.shortest = true;
        let results = run_complete(&args).unwrap();
        assert_eq!(results.completions, vec!["hats", "happier"]);
        assert_eq!(results.strategy, "shortest");
    }

    #[test]
    fn test_run_variants() {
        let args = VariantsArgs {
            word: "hap".to_string(),
            distance: 1,
            limit: Some(2),
        };
        let results = run_variants(&args).unwrap();
        assert_eq!(results.total, 201);
        assert_eq!(results.variants.len(), 2);
        assert_eq!(results.variants[0].text, "hap");
        assert_eq!(results.variants[0].distance, 0);
        assert_eq!(results.variants[1].distance, 1);
    }

    #[test]
    fn test_run_variants_rejects_large_distance() {
        let args = VariantsArgs {
            word: "hap".to_string(),
            distance: 3,
            limit: None,
        };
        assert!(run_variants(&args).is_err());
    }

    #[test]
    fn test_run_distance() {
        let args = DistanceArgs {
            first: "kitten".to_string(),
            second: "sitting".to_string(),
        };
        assert_eq!(run_distance(&args).distance, 3);
    }
}
