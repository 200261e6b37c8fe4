//! Random first names for the fallback phase.
//!
//! Names are drawn the way census-based name generators do it: pick a gender
//! at random, then a first name weighted by its frequency in that gender's
//! census list. Lists use the census `dist.*.first` layout, one
//! `NAME FREQUENCY CUMULATIVE RANK` row per line.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces candidate names on demand.
///
/// Callable any number of times. No ordering or uniqueness guarantee.
pub trait NameGenerator {
    fn next_name(&mut self) -> String;
}

impl<G: NameGenerator + ?Sized> NameGenerator for &mut G {
    fn next_name(&mut self) -> String {
        (**self).next_name()
    }
}

impl<G: NameGenerator + ?Sized> NameGenerator for Box<G> {
    fn next_name(&mut self) -> String {
        (**self).next_name()
    }
}

const BUILTIN_MALE: &str = include_str!("../data/dist.male.first");
const BUILTIN_FEMALE: &str = include_str!("../data/dist.female.first");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NameListError {
    #[error("malformed name list row on line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("name list has no names with a positive frequency")]
    NoWeight,
}

/// First names with their relative frequencies.
#[derive(Debug, Clone)]
pub struct NameDistribution {
    names: Vec<String>,
    index: WeightedIndex<f64>,
}

impl NameDistribution {
    pub fn new(entries: Vec<(String, f64)>) -> Result<Self, NameListError> {
        let (names, weights): (Vec<String>, Vec<f64>) = entries.into_iter().unzip();
        let index = WeightedIndex::new(weights).map_err(|_| NameListError::NoWeight)?;
        Ok(Self { names, index })
    }

    /// Parse a census `dist.male.first` / `dist.female.first` list.
    ///
    /// Only the name and frequency columns are used. Names are capitalized
    /// (`MARY` becomes `Mary`). Blank lines are skipped.
    pub fn parse_census(text: &str) -> Result<Self, NameListError> {
        let mut entries = Vec::with_capacity(text.len() / 36);
        for (i, line) in text.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(name) = fields.next() else {
                continue;
            };
            let frequency = fields
                .next()
                .and_then(|f| f.parse::<f64>().ok())
                .filter(|f| f.is_finite() && *f >= 0.0)
                .ok_or_else(|| NameListError::Malformed { line: i + 1, content: line.to_string() })?;
            entries.push((capitalize(name), frequency));
        }
        Self::new(entries)
    }

    /// The list shipped with this crate, used when no census list is supplied.
    pub fn builtin(gender: Gender) -> Self {
        let text = match gender {
            Gender::Male => BUILTIN_MALE,
            Gender::Female => BUILTIN_FEMALE,
        };
        Self::parse_census(text).expect("built-in name list is well-formed")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.names[self.index.sample(rng)]
    }
}

fn capitalize(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Draws a gender uniformly, then a first name by census frequency.
#[derive(Debug, Clone)]
pub struct RandomNameGenerator<R = StdRng> {
    rng: R,
    male: NameDistribution,
    female: NameDistribution,
}

impl RandomNameGenerator<StdRng> {
    /// Built-in lists, seeded from OS entropy; every run produces a different sequence.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Built-in lists with a reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomNameGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::new(
            NameDistribution::builtin(Gender::Male),
            NameDistribution::builtin(Gender::Female),
            rng,
        )
    }

    pub fn new(male: NameDistribution, female: NameDistribution, rng: R) -> Self {
        Self { rng, male, female }
    }

    pub fn distribution(&self, gender: Gender) -> &NameDistribution {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

impl<R: Rng> NameGenerator for RandomNameGenerator<R> {
    fn next_name(&mut self) -> String {
        let names = if self.rng.gen_bool(0.5) { &self.male } else { &self.female };
        names.sample(&mut self.rng).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(entries: &[(&str, f64)]) -> NameDistribution {
        NameDistribution::new(entries.iter().map(|(n, f)| (n.to_string(), *f)).collect()).unwrap()
    }

    #[test]
    fn test_builtin_lists_load() {
        let male = NameDistribution::builtin(Gender::Male);
        let female = NameDistribution::builtin(Gender::Female);

        assert_eq!(male.len(), 1219);
        assert!(female.len() > 1800);
        assert_eq!(male.names()[0], "James");
        assert_eq!(female.names()[0], "Mary");
    }

    #[test]
    fn test_builtin_lists_cover_less_common_names() {
        let female = NameDistribution::builtin(Gender::Female);
        let male = NameDistribution::builtin(Gender::Male);

        for name in ["Hannah", "Madison", "Abigail", "Zelda"] {
            assert!(female.names().iter().any(|n| n == name), "missing {name}");
        }
        for name in ["Tyler", "Dylan", "Wyatt", "Alonso"] {
            assert!(male.names().iter().any(|n| n == name), "missing {name}");
        }
    }

    #[test]
    fn test_parse_census() {
        let text = "MARY           2.629  2.629      1\n\nPATRICIA       1.073  3.702      2\n";
        let names = NameDistribution::parse_census(text).unwrap();
        assert_eq!(names.names(), ["Mary", "Patricia"]);
    }

    #[test]
    fn test_parse_census_rejects_malformed() {
        assert_eq!(
            NameDistribution::parse_census("MARY 2.629 2.629 1\nPATRICIA\n").unwrap_err(),
            NameListError::Malformed { line: 2, content: "PATRICIA".into() }
        );
        assert!(matches!(
            NameDistribution::parse_census("MARY -1.0 0 1\n"),
            Err(NameListError::Malformed { line: 1, .. })
        ));
        assert_eq!(NameDistribution::parse_census("").unwrap_err(), NameListError::NoWeight);
        assert_eq!(
            NameDistribution::parse_census("MARY 0.000 0.000 1\n").unwrap_err(),
            NameListError::NoWeight
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("MARY"), "Mary");
        assert_eq!(capitalize("mcKENZIE"), "Mckenzie");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_sampling_follows_frequency() {
        let names = distribution(&[("Common", 99.0), ("Rare", 1.0)]);
        let mut rng = StdRng::seed_from_u64(5);

        let common = (0..10_000).filter(|_| names.sample(&mut rng) == "Common").count();

        assert!(common > 9_500, "Common drawn {common} times");
        assert!(common < 10_000);
    }

    #[test]
    fn test_every_weighted_name_is_reachable() {
        let male = distribution(&[("Adam", 1.0), ("Bob", 1.0), ("Cal", 1.0)]);
        let female = distribution(&[("Dee", 1.0), ("Eve", 1.0), ("Hannah", 1.0)]);
        let mut generator = RandomNameGenerator::new(male, female, StdRng::seed_from_u64(11));

        let drawn: Vec<String> = (0..1_000).map(|_| generator.next_name()).collect();

        for name in ["Adam", "Bob", "Cal", "Dee", "Eve", "Hannah"] {
            assert!(drawn.iter().any(|n| n == name), "{name} never drawn");
        }
    }

    #[test]
    fn test_zero_frequency_names_are_never_drawn() {
        let names = distribution(&[("Never", 0.0), ("Always", 1.0)]);
        let mut rng = StdRng::seed_from_u64(2);
        assert!((0..1_000).all(|_| names.sample(&mut rng) == "Always"));
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = RandomNameGenerator::seeded(42);
        let mut b = RandomNameGenerator::seeded(42);

        let first: Vec<String> = (0..50).map(|_| a.next_name()).collect();
        let second: Vec<String> = (0..50).map(|_| b.next_name()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_names_come_from_lists() {
        let mut generator = RandomNameGenerator::seeded(7);
        for _ in 0..500 {
            let name = generator.next_name();
            assert!(
                generator.distribution(Gender::Male).names().contains(&name)
                    || generator.distribution(Gender::Female).names().contains(&name),
                "unexpected name {name}"
            );
        }
    }

    #[test]
    fn test_generator_through_mut_ref() {
        fn take<G: NameGenerator>(mut generator: G) -> String {
            generator.next_name()
        }

        let mut generator = RandomNameGenerator::seeded(3);
        let mut expected = RandomNameGenerator::seeded(3);
        assert_eq!(take(&mut generator), expected.next_name());
        assert_eq!(generator.next_name(), expected.next_name());
    }
}
