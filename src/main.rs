use std::process::ExitCode;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info};

use port_tracker::integration::{RunSummary, exit_status, opencv_backend};
use port_tracker::{DemoConfig, SourceSpec};

/// Name the source in any error that ends the run.
fn with_source_context<T>(result: port_tracker::Result<T>, source: &SourceSpec) -> Result<T> {
    result.with_context(|| format!("tracking demo on {source}"))
}

fn run(config: DemoConfig) -> Result<RunSummary> {
    let source = config.source.clone();
    with_source_context(opencv_backend::run(config), &source)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Live video: DemoConfig::default().with_device(port_tracker::config::DEFAULT_DEVICE_INDEX)
    let result = run(DemoConfig::default());
    match &result {
        Ok(summary) => info!(
            "done: {} frames tracked, {} failures",
            summary.tracked_frames, summary.failures
        ),
        Err(err) => error!("{:#}", err),
    }
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use port_tracker::Error;

    #[test]
    fn test_unavailable_source_gets_context() {
        let source = SourceSpec::File("missing.mp4".into());
        let result: Result<RunSummary> = with_source_context(
            Err(Error::SourceUnavailable(source.to_string())),
            &source,
        );

        assert_eq!(exit_status(&result), 1);
        let err = result.unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "tracking demo on file missing.mp4: video source file missing.mp4 could not be opened"
        );
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::SourceUnavailable(_))
        ));
    }
}
