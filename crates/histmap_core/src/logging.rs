//! Logging bootstrap for the gazetteer client.
//!
//! # Responsibility
//! - Start rolling file logs once per process and keep them alive.
//! - Capture panics as structured error events.
//!
//! # Invariants
//! - Repeated initialization with identical settings is a no-op.
//! - Conflicting settings after initialization are rejected, not applied.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::error;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "histmap";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const PANIC_PAYLOAD_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Validated logging settings: a known level plus an absolute directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    level: &'static str,
    dir: PathBuf,
}

impl LogSettings {
    /// Validates a raw level/directory pair.
    ///
    /// # Errors
    /// - Level is not one of trace|debug|info|warn|error.
    /// - Directory is empty or not absolute.
    pub fn resolve(level: &str, dir: &str) -> Result<Self, String> {
        let level = match level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" | "warning" => "warn",
            "error" => "error",
            other => {
                return Err(format!(
                    "unsupported log level `{other}`; expected trace|debug|info|warn|error"
                ))
            }
        };

        let dir = dir.trim();
        if dir.is_empty() {
            return Err("log directory cannot be empty".to_string());
        }
        let dir = Path::new(dir);
        if !dir.is_absolute() {
            return Err(format!(
                "log directory must be absolute, got `{}`",
                dir.display()
            ));
        }

        Ok(Self {
            level,
            dir: dir.to_path_buf(),
        })
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Starts rolling file logging, or verifies it is already active with the
/// same settings.
///
/// # Errors
/// - Invalid settings (see [`LogSettings::resolve`]).
/// - The log directory cannot be created or the backend fails to start.
/// - Logging is already active with different settings.
pub fn init_logging(level: &str, dir: &str) -> Result<(), String> {
    let settings = LogSettings::resolve(level, dir)?;

    let active = ACTIVE.get_or_try_init(|| start_logger(settings.clone()))?;
    if active.settings != settings {
        return Err(format!(
            "logging already active with level `{}` at `{}`; refusing to switch",
            active.settings.level,
            active.settings.dir.display()
        ));
    }

    Ok(())
}

/// Settings of the active logger, when one has been started.
pub fn logging_status() -> Option<LogSettings> {
    ACTIVE.get().map(|active| active.settings.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(settings: LogSettings) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&settings.dir)
        .map_err(|err| format!("cannot create `{}`: {err}", settings.dir.display()))?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", settings.level))?
        .log_to_file(
            FileSpec::default()
                .directory(&settings.dir)
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    hook_panics();

    log::info!(
        "event=app_start module=core status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        settings,
        _handle: handle,
    })
}

fn hook_panics() {
    static HOOKED: OnceCell<()> = OnceCell::new();
    if HOOKED.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| loc.to_string());
        error!(
            "event=panic_captured module=core status=error location={location} payload={}",
            describe_panic_payload(info)
        );
        previous(info);
    }));
}

// Payloads can carry user text; keep one line, capped.
fn describe_panic_payload(info: &std::panic::PanicHookInfo<'_>) -> String {
    let text = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());

    let one_line = text.replace(['\n', '\r'], " ");
    if one_line.chars().count() <= PANIC_PAYLOAD_MAX_CHARS {
        return one_line;
    }
    let mut capped: String = one_line.chars().take(PANIC_PAYLOAD_MAX_CHARS).collect();
    capped.push_str("...");
    capped
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, LogSettings};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("histmap-log-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn resolve_normalizes_level_aliases() {
        let settings = LogSettings::resolve("WARNING", "/tmp/histmap").expect("valid settings");
        assert_eq!(settings.level(), "warn");

        let err = LogSettings::resolve("chatty", "/tmp/histmap").expect_err("unknown level");
        assert!(err.contains("unsupported log level"));
    }

    #[test]
    fn resolve_rejects_relative_or_empty_dirs() {
        assert!(LogSettings::resolve("info", "").is_err());
        let err = LogSettings::resolve("info", "var/log").expect_err("relative dir");
        assert!(err.contains("absolute"));
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicting_settings() {
        let dir = scratch_dir("init");
        let dir_str = dir.to_str().expect("utf-8 temp dir").to_string();

        init_logging("info", &dir_str).expect("first init");
        init_logging("info", &dir_str).expect("same settings again");

        let err = init_logging("error", &dir_str).expect_err("level conflict");
        assert!(err.contains("refusing to switch"));

        let other = scratch_dir("other");
        let err = init_logging("info", other.to_str().expect("utf-8 temp dir"))
            .expect_err("dir conflict");
        assert!(err.contains("refusing to switch"));

        let active = logging_status().expect("logging active");
        assert_eq!(active.level(), "info");
        assert_eq!(active.dir(), dir.as_path());
    }
}
