use crate::candidates::{Candidate, Phase};
use crate::digest::{TargetDigest, digest_hex, name_digest};

/// Default ceiling on candidates examined.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// Default number of attempts between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Total candidates examined across both phases.
    pub max_attempts: u64,
    /// Report progress every this many attempts. 0 disables reporting.
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS, progress_interval: DEFAULT_PROGRESS_INTERVAL }
    }
}

impl SearchConfig {
    pub fn with_max_attempts(max_attempts: u64) -> Self {
        Self { max_attempts, ..Self::default() }
    }
}

/// Snapshot handed to the progress observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub attempts: u64,
    /// Phase of the candidate that was just examined.
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// `name` is the candidate as it was produced, before lowercasing.
    Found { name: String, digest: String },
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub result: SearchResult,
    /// Candidates examined, never more than the configured ceiling.
    pub attempts: u64,
}

/// Searches `candidates` for a name whose digest equals `target`, examining at
/// most `max_attempts` of them.
pub fn search<I>(target: &TargetDigest, max_attempts: u64, candidates: I) -> SearchOutcome
where
    I: IntoIterator<Item = Candidate>,
{
    let config = SearchConfig { max_attempts, progress_interval: 0 };
    search_with_progress(target, &config, candidates, |_| {})
}

/// Like [`search`], calling `observer` every `config.progress_interval`
/// attempts.
///
/// The first match in iteration order is returned. The search stops as soon as
/// the attempt ceiling is reached, whichever phase is active, or when the
/// candidates run out.
pub fn search_with_progress<I, F>(
    target: &TargetDigest,
    config: &SearchConfig,
    candidates: I,
    mut observer: F,
) -> SearchOutcome
where
    I: IntoIterator<Item = Candidate>,
    F: FnMut(&Progress),
{
    let mut attempts = 0u64;
    let mut phase = Phase::Ranked;
    let mut candidates = candidates.into_iter();

    while attempts < config.max_attempts {
        let Some(candidate) = candidates.next() else {
            tracing::debug!(attempts, "candidates exhausted before the attempt budget");
            break;
        };

        if candidate.phase != phase {
            tracing::debug!(attempts, from = %phase, to = %candidate.phase, "switching phase");
            phase = candidate.phase;
        }

        attempts += 1;

        if config.progress_interval > 0 && attempts % config.progress_interval == 0 {
            observer(&Progress { attempts, phase });
        }

        let digest = name_digest(&candidate.name);
        if target.matches(&digest) {
            tracing::debug!(attempts, %phase, "match found");
            return SearchOutcome {
                result: SearchResult::Found { name: candidate.name, digest: digest_hex(&digest) },
                attempts,
            };
        }
    }

    SearchOutcome { result: SearchResult::NotFound, attempts }
}
