use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use namecrack_fetch::{
    CensusLists, DEFAULT_YEAR, NameDataset, cache_dir_from_env, load_census_lists,
    load_ranked_names_or_empty,
};
use namecrack_search::{
    CandidateSource, DEFAULT_MAX_ATTEMPTS, Gender, NameDistribution, NameListError,
    RandomNameGenerator, SearchConfig, SearchOutcome, SearchResult, TargetDigest,
    search_with_progress,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "namecrack")]
#[command(about = "Find a name matching a specific SHA1 hash")]
struct Args {
    /// SHA1 hash to search for
    hash: String,

    /// Maximum number of names to try
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u64).range(1..))]
    max_attempts: u64,

    /// Birth year of the SSA name list used for ranking
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    year: u16,

    /// Name dataset cache directory (default: $NAMECRACK_CACHE_DIR or ./name_cache)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Seed for the random name generator used after the ranked names
    #[arg(long)]
    seed: Option<u64>,

    /// Disable progress display
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy(),
        )
        .init();

    run(Args::parse()).await
}

async fn run(args: Args) -> ExitCode {
    // Validate hash format before touching the dataset
    let target: TargetDigest = match args.hash.parse() {
        Ok(target) => target,
        Err(e) => {
            println!("Error: Invalid SHA1 hash format. Must be 40 hexadecimal characters. ({e})");
            return ExitCode::from(1);
        }
    };

    println!("Searching for name matching hash: {}", args.hash);
    println!("Starting with most common names first...");

    let cache_dir = args.cache_dir.clone().unwrap_or_else(cache_dir_from_env);
    let dataset = NameDataset::new(cache_dir).with_year(args.year);
    let ranked = load_ranked_names_or_empty(&dataset).await;
    println!("Loaded {} common names to try first...", ranked.len());

    let (male, female) = fallback_distributions(&dataset).await;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generator = RandomNameGenerator::new(male, female, rng);
    let candidates = CandidateSource::new(ranked, generator);
    let config = SearchConfig::with_max_attempts(args.max_attempts);

    let progress_bar = if !args.no_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress bar template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    // Hashing is CPU-bound.
    let progress_bar_clone = progress_bar.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        search_with_progress(&target, &config, candidates, |progress| {
            if let Some(ref pb) = progress_bar_clone {
                pb.set_message(format!(
                    "Checked {} names ({} phase)...",
                    progress.attempts, progress.phase
                ));
            }
        })
    })
    .await;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Search task failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    report(&outcome, args.max_attempts);
    ExitCode::SUCCESS
}

/// Census frequency lists for the random phase, or the built-in ones when
/// the census files can't be fetched or parsed.
async fn fallback_distributions(dataset: &NameDataset) -> (NameDistribution, NameDistribution) {
    let parsed = match load_census_lists(dataset).await {
        Ok(lists) => parse_census_lists(&lists),
        Err(e) => {
            tracing::warn!(error = %e, "error loading census name lists, using built-in lists");
            return builtin_distributions();
        }
    };
    match parsed {
        Ok(distributions) => distributions,
        Err(e) => {
            tracing::warn!(error = %e, "malformed census name list, using built-in lists");
            builtin_distributions()
        }
    }
}

fn parse_census_lists(
    lists: &CensusLists,
) -> Result<(NameDistribution, NameDistribution), NameListError> {
    Ok((NameDistribution::parse_census(&lists.male)?, NameDistribution::parse_census(&lists.female)?))
}

fn builtin_distributions() -> (NameDistribution, NameDistribution) {
    (NameDistribution::builtin(Gender::Male), NameDistribution::builtin(Gender::Female))
}

fn report(outcome: &SearchOutcome, max_attempts: u64) {
    tracing::debug!(attempts = outcome.attempts, "search finished");
    match &outcome.result {
        SearchResult::Found { name, digest } => {
            println!("\nFound match!");
            println!("Name: {}", name);
            println!("Hash: {}", digest);
        }
        SearchResult::NotFound => {
            println!("\nNo matching name found after trying {} names.", max_attempts);
        }
    }
}
