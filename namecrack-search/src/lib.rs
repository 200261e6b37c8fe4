//! Finds a first name whose SHA1 digest matches a target digest.
//!
//! Candidates are drawn from a single lazy sequence: a frequency-ranked list of
//! known names, most common first, followed by an endless stream of random
//! first names drawn by census frequency. The search hashes each candidate
//! (lowercased) and stops at the first match or when the attempt ceiling is
//! reached, whichever comes first. The ceiling is shared by both phases.
//!
//! This crate does no I/O. Where the ranked list comes from is up to the caller
//! (see `namecrack-fetch` for the SSA baby-name dataset).
//!
//! ```
//! use namecrack_search::{CandidateSource, RandomNameGenerator, SearchResult, TargetDigest, search};
//!
//! let target: TargetDigest = "a51dda7c7ff50b61eaea0444371f4a6a9301e501".parse().unwrap();
//! let ranked = vec!["mary".to_string(), "john".to_string()];
//! let candidates = CandidateSource::new(ranked, RandomNameGenerator::seeded(0));
//!
//! let outcome = search(&target, 10, candidates);
//! assert_eq!(outcome.attempts, 2);
//! assert!(matches!(outcome.result, SearchResult::Found { ref name, .. } if name == "john"));
//! ```

pub mod candidates;
pub mod digest;
pub mod generator;
pub mod search;

pub use candidates::{Candidate, CandidateSource, NoFallback, Phase};
pub use digest::{DIGEST_HEX_LEN, DIGEST_LEN, DigestFormatError, TargetDigest, digest_hex, name_digest};
pub use generator::{Gender, NameDistribution, NameGenerator, NameListError, RandomNameGenerator};
pub use search::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_PROGRESS_INTERVAL, Progress, SearchConfig, SearchOutcome,
    SearchResult, search, search_with_progress,
};
