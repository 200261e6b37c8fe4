//! Supplies the ranked name list for `namecrack-search`.
//!
//! Names come from the US Social Security Administration baby-name dataset,
//! published as a single zip of `yobYYYY.txt` files (one per birth year, each
//! line `Name,Gender,Count`). The archive is downloaded once into a cache
//! directory and extracted there; later runs read the year file straight from
//! the cache.
//!
//! The 1990 census first-name lists used by the random fallback generator
//! are cached in the same directory (see [`census`]).
//!
//! [`load_ranked_names_or_empty`] is the boundary the search side uses: any
//! failure here (network, cache, malformed data) is logged and turned into an
//! empty list, so the search simply starts with its fallback phase.

use std::path::PathBuf;

use tokio::fs;

pub mod census;
pub mod download;
pub mod error;
pub mod records;

pub use census::{CENSUS_BASE_URL, CENSUS_FEMALE_FILE, CENSUS_MALE_FILE, CensusLists, load_census_lists};
pub use download::{RETRY_BASE_DELAY_MS, download_file, extract_archive, partial_path};
pub use error::Error;
pub use records::{NameRecord, parse_line, parse_records, rank};

/// SSA national baby-name archive.
pub const SSA_NAMES_URL: &str = "https://www.ssa.gov/oact/babynames/names.zip";

/// Environment variable name for specifying the name cache directory.
pub const CACHE_DIR_ENV: &str = "NAMECRACK_CACHE_DIR";

/// Cache directory used when [`CACHE_DIR_ENV`] is unset.
pub const DEFAULT_CACHE_DIR: &str = "name_cache";

/// Year file ranked when none is specified.
pub const DEFAULT_YEAR: u16 = 1998;

/// Maximum download attempts for the archive.
pub const MAX_RETRIES: u32 = 5;

const ARCHIVE_NAME: &str = "names.zip";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Returns the cache directory from the NAMECRACK_CACHE_DIR environment
/// variable, or falls back to `./name_cache`.
pub fn cache_dir_from_env() -> PathBuf {
    std::env::var(CACHE_DIR_ENV).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR))
}

/// Where to find (or fetch) the ranked names, and which year to rank.
#[derive(Debug, Clone)]
pub struct NameDataset {
    pub cache_dir: PathBuf,
    pub year: u16,
    pub url: String,
    /// Directory the census `dist.*.first` lists are fetched from.
    pub census_url: String,
    pub retries: u32,
}

impl NameDataset {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            year: DEFAULT_YEAR,
            url: SSA_NAMES_URL.to_string(),
            census_url: CENSUS_BASE_URL.to_string(),
            retries: MAX_RETRIES,
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    /// Path of the `yobYYYY.txt` file for the configured year.
    pub fn year_file(&self) -> PathBuf {
        self.cache_dir.join(format!("yob{}.txt", self.year))
    }

    pub fn archive_path(&self) -> PathBuf {
        self.cache_dir.join(ARCHIVE_NAME)
    }
}

pub(crate) fn http_client(url: &str) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| Error::HttpRequest { url: url.to_string(), source })
}

/// Make sure the year file is in the cache, downloading and extracting the
/// archive if it isn't.
pub async fn ensure_cached(dataset: &NameDataset) -> Result<PathBuf, Error> {
    let year_file = dataset.year_file();
    if fs::try_exists(&year_file).await? {
        tracing::debug!(path = %year_file.display(), "name dataset cached");
        return Ok(year_file);
    }

    fs::create_dir_all(&dataset.cache_dir).await?;

    tracing::info!(url = %dataset.url, "downloading name dataset");
    let client = http_client(&dataset.url)?;
    let archive = dataset.archive_path();
    download_file(&client, &dataset.url, &archive, dataset.retries).await?;

    let cache_dir = dataset.cache_dir.clone();
    tokio::task::spawn_blocking(move || extract_archive(&archive, &cache_dir))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(format!("Task panicked: {}", e))))??;

    if !fs::try_exists(&year_file).await? {
        return Err(Error::MissingYear { year: dataset.year, path: year_file });
    }
    Ok(year_file)
}

/// Load the dataset's year file and rank its names, most frequent first.
pub async fn load_ranked_names(dataset: &NameDataset) -> Result<Vec<String>, Error> {
    let year_file = ensure_cached(dataset).await?;
    let text = fs::read_to_string(&year_file).await?;
    let records = parse_records(&text)?;
    Ok(rank(records))
}

/// Like [`load_ranked_names`], but never fails: errors are logged and an empty
/// list is returned instead.
pub async fn load_ranked_names_or_empty(dataset: &NameDataset) -> Vec<String> {
    match load_ranked_names(dataset).await {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(error = %e, "error loading name dataset, continuing without ranked names");
            Vec::new()
        }
    }
}
