//! Batch entry point: localize the remote image assets referenced by the
//! configured data file. No command-line flags; the run is driven entirely
//! by `LocalizeConfig::default()`.

use localizer_engine::LocalizeConfig;
use localizer_logging::{localizer_info, LogDestination};

fn main() -> anyhow::Result<()> {
    localizer_logging::initialize(LogDestination::Both);

    let config = LocalizeConfig::default();
    let summary = localizer_engine::run(&config)?;

    localizer_info!(
        "localization complete: {} candidates, {} downloaded, {} reused, {} skipped, {} failed",
        summary.candidates,
        summary.downloaded,
        summary.reused,
        summary.skipped,
        summary.failed
    );
    if summary.failed > 0 {
        localizer_info!(
            "failed urls are listed in {} and will be retried on the next run",
            config.log_file.display()
        );
    }
    Ok(())
}
