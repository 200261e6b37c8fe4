//! 1990 US census first-name frequency lists.
//!
//! The census publishes one list per gender, `dist.male.first` and
//! `dist.female.first`, each row `NAME FREQUENCY CUMULATIVE RANK`. They feed
//! the random fallback generator. Files are cached next to the SSA dataset
//! and passed on unparsed.

use std::path::PathBuf;

use tokio::fs;

use crate::download::download_file;
use crate::error::Error;
use crate::{NameDataset, http_client};

/// Directory holding the census name lists.
pub const CENSUS_BASE_URL: &str = "https://www2.census.gov/topics/genealogy/1990surnames";

pub const CENSUS_MALE_FILE: &str = "dist.male.first";
pub const CENSUS_FEMALE_FILE: &str = "dist.female.first";

/// Raw text of both census lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusLists {
    pub male: String,
    pub female: String,
}

impl NameDataset {
    pub fn census_file(&self, file_name: &str) -> PathBuf {
        self.cache_dir.join(file_name)
    }
}

async fn ensure_census_file(
    dataset: &NameDataset,
    client: &reqwest::Client,
    file_name: &str,
) -> Result<PathBuf, Error> {
    let path = dataset.census_file(file_name);
    if fs::try_exists(&path).await? {
        tracing::debug!(path = %path.display(), "census list cached");
        return Ok(path);
    }

    fs::create_dir_all(&dataset.cache_dir).await?;
    let url = format!("{}/{}", dataset.census_url.trim_end_matches('/'), file_name);
    tracing::info!(%url, "downloading census name list");
    download_file(client, &url, &path, dataset.retries).await?;
    Ok(path)
}

/// Read both census lists from the cache, downloading whichever is missing.
pub async fn load_census_lists(dataset: &NameDataset) -> Result<CensusLists, Error> {
    let client = http_client(&dataset.census_url)?;
    let male = ensure_census_file(dataset, &client, CENSUS_MALE_FILE).await?;
    let female = ensure_census_file(dataset, &client, CENSUS_FEMALE_FILE).await?;
    Ok(CensusLists {
        male: fs::read_to_string(male).await?,
        female: fs::read_to_string(female).await?,
    })
}
