//! Log setup. The terminal belongs to the UI, so logs go to a file.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: failures only
pub const DEFAULT_FILTER: &str = "travelsathi_tui=warn";

const LOG_FILE_PREFIX: &str = "travelsathi-tui";

pub fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Directory holding `travelsathi-tui.log`
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "travelsathi", "travelsathi-tui")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Install the global subscriber writing to the log file.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir().context("No home directory for the log file")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(&dir)
        .context("Could not open log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRegistrationApi;
    use crate::app::App;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Run `f` against a fresh app with logs captured under `filter`
    fn capture(filter: EnvFilter, f: impl FnOnce(&mut App)) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || sink.clone())
                .with_ansi(false),
        );

        tracing::subscriber::with_default(subscriber, || {
            let mut app = App::with_api(Arc::new(MockRegistrationApi::new()), false);
            f(&mut app);
        });
        captured.text()
    }

    #[test]
    fn test_routine_events_silent_by_default() {
        let output = capture(default_filter(), |app| {
            app.submit();
            app.navigate_to_login();
            app.go_back();
        });
        assert_eq!(output, "");
    }

    #[test]
    fn test_navigation_logged_at_debug() {
        let output = capture(EnvFilter::new("travelsathi_tui=debug"), |app| {
            app.navigate_to_login();
        });
        assert!(output.contains("Navigating to /login"), "got {output:?}");
    }

    #[test]
    fn test_log_dir_is_under_project_dirs() {
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("logs"));
        }
    }
}
