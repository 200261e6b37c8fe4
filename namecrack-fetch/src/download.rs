use std::ffi::OsString;
use std::fs::{self as std_fs, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs;

use crate::error::Error;

/// Base delay for exponential backoff (doubles each retry)
pub const RETRY_BASE_DELAY_MS: u64 = 200;

/// Sibling of `dest` that receives the bytes until they are complete.
pub fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

/// Download `url` into `dest`, retrying transport errors and non-2xx
/// responses up to `retries` times in total.
///
/// The body is written to [`partial_path`] and renamed into place, so `dest`
/// only ever exists complete.
pub async fn download_file(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
    retries: u32,
) -> Result<(), Error> {
    let mut last_error = None;
    for attempt in 0..retries {
        if attempt > 0 {
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1).min(10));
            tracing::debug!(attempt, delay_ms = delay, %url, "retrying download");
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                last_error = Some(Error::HttpRequest { url: url.to_string(), source: e });
                continue;
            }
        };

        if !response.status().is_success() {
            last_error = Some(Error::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
            continue;
        }

        match response.bytes().await {
            Ok(body) => {
                let partial = partial_path(dest);
                fs::write(&partial, &body).await?;
                fs::rename(&partial, dest).await?;
                tracing::info!(bytes = body.len(), path = %dest.display(), "downloaded");
                return Ok(());
            }
            Err(e) => {
                last_error = Some(Error::HttpRequest { url: url.to_string(), source: e });
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| Error::MaxRetriesExceeded { url: url.to_string(), retries }))
}

/// Extract every file in the zip at `archive` flat into `dir`, returning the
/// number of files written. Directory structure inside the archive is dropped.
///
/// Each file is unpacked next to its final name and renamed once fully
/// written; a failed entry leaves nothing behind under either name.
pub fn extract_archive(archive: &Path, dir: &Path) -> Result<usize, Error> {
    let mut zip = zip::ZipArchive::new(File::open(archive)?)?;

    let mut extracted = 0;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        if entry.is_dir() {
            continue;
        }
        // Entries with absolute or `..` paths have no enclosed name and are skipped.
        let Some(path) = entry.enclosed_name() else {
            tracing::warn!(name = entry.name(), "skipping unsafe archive entry");
            continue;
        };
        let Some(file_name) = path.file_name() else {
            continue;
        };

        let dest = dir.join(file_name);
        let partial = partial_path(&dest);
        let written = File::create(&partial).and_then(|mut out| io::copy(&mut entry, &mut out));
        if let Err(e) = written {
            let _ = std_fs::remove_file(&partial);
            return Err(e.into());
        }
        std_fs::rename(&partial, &dest)?;
        extracted += 1;
    }

    tracing::info!(files = extracted, dir = %dir.display(), "extracted name archive");
    Ok(extracted)
}
