use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::{self},
    prelude::*,
};

const LIBRARY_TARGETS: [&str; 2] = ["cyclopep", "cyclopep_cli"];

fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Our own crates log at the requested level; dependencies stay at WARN.
fn targets_for(level: LevelFilter) -> Targets {
    LIBRARY_TARGETS
        .iter()
        .fold(Targets::new().with_default(LevelFilter::WARN.min(level)), |targets, name| {
            targets.with_target(*name, level)
        })
}

fn file_layer<S>(file: File) -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let filter = targets_for(level_for(verbosity, quiet));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(&path).map_err(CliError::Io)?;
        subscriber.with(file_layer(file)).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::{debug, info};

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(7, false), LevelFilter::TRACE);
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn dependencies_are_capped_at_warn() {
        let targets = targets_for(LevelFilter::TRACE);
        assert!(targets.would_enable("cyclopep::workflows", &tracing::Level::TRACE));
        assert!(!targets.would_enable("indicatif", &tracing::Level::INFO));
        assert!(targets.would_enable("indicatif", &tracing::Level::WARN));

        let quiet = targets_for(LevelFilter::ERROR);
        assert!(!quiet.would_enable("serde_json", &tracing::Level::WARN));
    }

    #[test]
    #[serial]
    fn file_layer_writes_without_ansi() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("search.log");

        let file = File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry()
            .with(targets_for(LevelFilter::DEBUG))
            .with(file_layer(file));

        tracing::subscriber::with_default(subscriber, || {
            debug!(target: "cyclopep::engine", round = 3, "Round complete.");
            info!(target: "some_dependency", "Filtered out.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Round complete."));
        assert!(content.contains("round=3"));
        assert!(content.contains("DEBUG"));
        assert!(!content.contains("Filtered out."));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
