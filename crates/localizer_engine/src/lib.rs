//! Localizer engine: harvest remote image links, download them, rewrite the
//! source text to point at the local copies.
mod cache;
mod config;
mod fetch;
mod filename;
mod harvest;
mod persist;
mod pipeline;
mod report;
mod rewrite;
mod types;

pub use cache::find_cached_asset;
pub use config::LocalizeConfig;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::{asset_filename, asset_stem, infer_extension};
pub use harvest::{extract_candidate_urls, is_image_candidate, latest_backup_file, master_links};
pub use persist::{ensure_assets_dir, AtomicFileWriter, PersistError};
pub use pipeline::{run, run_with, PipelineError, RunSummary};
pub use report::{ErrorRecord, LocalizeReport};
pub use rewrite::apply_mapping;
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
