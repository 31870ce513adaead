use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchSettings;

/// File layout and network knobs for one localization run.
///
/// `Default` carries the fixed paths the tool normally operates on; tests
/// build their own instance pointing into temporary directories.
#[derive(Debug, Clone)]
pub struct LocalizeConfig {
    /// Primary text file that is scanned and rewritten in place.
    pub data_file: PathBuf,
    /// Directory the downloaded assets are written to.
    pub assets_dir: PathBuf,
    /// Run log: mapping plus error records, overwritten each run.
    pub log_file: PathBuf,
    /// Directory searched for the most recent backup JSON file.
    pub backup_dir: PathBuf,
    /// Filenames in `backup_dir` that are never treated as backups.
    pub backup_excludes: Vec<String>,
    /// Prefix used when writing local paths into the rewritten text.
    pub local_prefix: String,
    /// URLs containing any of these markers are left alone entirely.
    pub skip_markers: Vec<String>,
    /// Per-request timeout for downloads.
    pub request_timeout: Duration,
    /// User-agent sent with each request; some hosts block the default one.
    pub user_agent: String,
}

impl Default for LocalizeConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("constants.ts"),
            assets_dir: PathBuf::from("assets"),
            log_file: PathBuf::from("localize_log.json"),
            backup_dir: PathBuf::from("."),
            backup_excludes: [
                "package.json",
                "package-lock.json",
                "tsconfig.json",
                "vercel.json",
                "localize_log.json",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            local_prefix: "./assets".to_string(),
            skip_markers: vec!["jsdelivr".to_string()],
            request_timeout: Duration::from_secs(15),
            user_agent: "Mozilla/5.0 (compatible; asset-localizer/0.1)".to_string(),
        }
    }
}

impl LocalizeConfig {
    /// Network settings derived from this configuration.
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: self.request_timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}
