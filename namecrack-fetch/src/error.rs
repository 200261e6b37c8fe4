use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed for {url}: {source}")]
    HttpRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid name archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("No data for year {year}: '{path}' missing after extraction")]
    MissingYear { year: u16, path: PathBuf },

    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("Download failed after {retries} retries for {url}")]
    MaxRetriesExceeded { url: String, retries: u32 },
}
