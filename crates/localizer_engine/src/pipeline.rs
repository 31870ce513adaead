use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use localizer_logging::{localizer_debug, localizer_info, localizer_warn};
use thiserror::Error;

use crate::cache::find_cached_asset;
use crate::config::LocalizeConfig;
use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::filename::{asset_filename, asset_stem, infer_extension};
use crate::harvest::{latest_backup_file, master_links};
use crate::persist::{ensure_assets_dir, AtomicFileWriter, PersistError};
use crate::report::{ErrorRecord, LocalizeReport};
use crate::rewrite::apply_mapping;
use crate::types::FetchError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot read data file {path:?}: {source}")]
    ReadData { path: PathBuf, source: io::Error },
    #[error("http client setup failed: {0}")]
    Client(FetchError),
    #[error("tokio runtime: {0}")]
    Runtime(io::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("cannot encode run log: {0}")]
    EncodeLog(#[from] serde_json::Error),
}

/// Counts for the final summary line. `downloaded + reused` is the number of
/// URLs that ended up mapped and therefore rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub candidates: usize,
    pub downloaded: usize,
    pub reused: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Runs the whole localization pipeline once, blocking until done.
///
/// The engine owns its tokio runtime; callers stay synchronous. Exactly one
/// instance may run against a given directory at a time.
pub fn run(config: &LocalizeConfig) -> Result<RunSummary, PipelineError> {
    let fetcher = ReqwestFetcher::new(config.fetch_settings()).map_err(PipelineError::Client)?;
    let runtime = tokio::runtime::Runtime::new().map_err(PipelineError::Runtime)?;
    runtime.block_on(run_with(config, &fetcher))
}

/// Pipeline body with an injectable fetcher. Downloads are strictly
/// sequential: each URL is fetched, persisted, and mapped before the next
/// one is attempted.
pub async fn run_with(
    config: &LocalizeConfig,
    fetcher: &dyn Fetcher,
) -> Result<RunSummary, PipelineError> {
    let content = fs::read_to_string(&config.data_file).map_err(|source| PipelineError::ReadData {
        path: config.data_file.clone(),
        source,
    })?;

    let backup_text = latest_backup_file(&config.backup_dir, &config.backup_excludes).and_then(
        |path| match fs::read_to_string(&path) {
            Ok(text) => {
                localizer_info!("reconciling against backup {}", path.display());
                Some(text)
            }
            Err(err) => {
                localizer_warn!("backup {} unreadable, skipping: {err}", path.display());
                None
            }
        },
    );

    let candidates = master_links(&content, backup_text.as_deref());
    localizer_info!("found {} candidate remote assets", candidates.len());

    ensure_assets_dir(&config.assets_dir)?;
    let assets_writer = AtomicFileWriter::new(config.assets_dir.clone());

    let mut report = LocalizeReport::default();
    let mut summary = RunSummary {
        candidates: candidates.len(),
        ..RunSummary::default()
    };

    for url in &candidates {
        if config.skip_markers.iter().any(|marker| url.contains(marker)) {
            localizer_debug!("skipping excluded url {url}");
            summary.skipped += 1;
            continue;
        }

        let stem = asset_stem(url);
        if let Some(existing) = find_cached_asset(&config.assets_dir, &stem) {
            if let Some(name) = existing.file_name().and_then(|n| n.to_str()) {
                localizer_debug!("reusing cached {name} for {url}");
                report
                    .mapping
                    .insert(url.clone(), local_path(&config.local_prefix, name));
                summary.reused += 1;
                continue;
            }
        }

        localizer_info!("downloading {url}");
        match fetcher.fetch(url).await {
            Ok(output) => {
                let extension = infer_extension(url, output.metadata.content_type.as_deref());
                let filename = asset_filename(url, &extension);
                match assets_writer.write_bytes(&filename, &output.bytes) {
                    Ok(_) => {
                        localizer_info!("saved {filename} ({} bytes)", output.metadata.byte_len);
                        report
                            .mapping
                            .insert(url.clone(), local_path(&config.local_prefix, &filename));
                        summary.downloaded += 1;
                    }
                    Err(err) => {
                        localizer_warn!("could not persist {url}: {err}");
                        report.errors.push(ErrorRecord {
                            url: url.clone(),
                            reason: err.to_string(),
                        });
                        summary.failed += 1;
                    }
                }
            }
            Err(err) => {
                localizer_warn!("download failed for {url}: {err}");
                report.errors.push(ErrorRecord {
                    url: url.clone(),
                    reason: err.to_string(),
                });
                summary.failed += 1;
            }
        }
    }

    let rewritten = apply_mapping(&content, &report.mapping);
    write_in_place(&config.data_file, &rewritten)?;
    write_in_place(&config.log_file, &report.to_pretty_json()?)?;

    Ok(summary)
}

fn local_path(prefix: &str, filename: &str) -> String {
    format!("{prefix}/{filename}")
}

/// Atomically overwrite `path` with `content`, treating the parent directory
/// as the write root. An empty parent means the current directory.
fn write_in_place(path: &Path, content: &str) -> Result<(), PersistError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let filename = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        PersistError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path has no filename",
        ))
    })?;
    AtomicFileWriter::new(dir.to_path_buf()).write_text(filename, content)?;
    Ok(())
}
