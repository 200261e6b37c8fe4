//! The candidate sequence: ranked names first, generated names after.

use std::fmt;

use crate::generator::NameGenerator;

/// Which part of the candidate sequence a name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Frequency-ranked names, most common first.
    Ranked,
    /// Names produced by the fallback generator.
    Fallback,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Ranked => f.write_str("ranked"),
            Phase::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub phase: Phase,
}

/// Yields every ranked name in order, then calls the fallback generator
/// forever (if there is one).
///
/// Names are not deduplicated across phases: a ranked name the generator
/// happens to produce again is yielded again. Consumers bound the sequence
/// themselves.
pub struct CandidateSource<G> {
    ranked: std::vec::IntoIter<String>,
    fallback: Option<G>,
}

impl<G: NameGenerator> CandidateSource<G> {
    pub fn new(ranked: Vec<String>, fallback: G) -> Self {
        Self { ranked: ranked.into_iter(), fallback: Some(fallback) }
    }

    /// Number of ranked names not yet yielded.
    pub fn ranked_remaining(&self) -> usize {
        self.ranked.len()
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Placeholder generator type for sources with no fallback phase.
#[derive(Debug, Clone, Copy)]
pub enum NoFallback {}

impl NameGenerator for NoFallback {
    fn next_name(&mut self) -> String {
        match *self {}
    }
}

impl CandidateSource<NoFallback> {
    /// A finite source over the ranked list only.
    pub fn ranked_only(ranked: Vec<String>) -> Self {
        Self { ranked: ranked.into_iter(), fallback: None }
    }
}

impl<G: NameGenerator> Iterator for CandidateSource<G> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if let Some(name) = self.ranked.next() {
            return Some(Candidate { name, phase: Phase::Ranked });
        }
        let generator = self.fallback.as_mut()?;
        Some(Candidate { name: generator.next_name(), phase: Phase::Fallback })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ranked = self.ranked.len();
        if self.fallback.is_some() { (usize::MAX, None) } else { (ranked, Some(ranked)) }
    }
}
