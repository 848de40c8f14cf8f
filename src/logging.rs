use crate::cli::Args;
use crate::config::Config;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use crate::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits the log destination into directory and file name.
///
/// An explicit `--log-file` wins over the path stored in the config file;
/// without either, logs go to the platform log directory.
pub fn resolve_log_target(
    cli_path: Option<&str>,
    config_path: Option<&str>,
) -> (String, String) {
    match cli_path.or(config_path) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive: Directive = format!("{APP_NAME}=info")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging for the process.
///
/// Logs always go to a daily rolling file. With `--debug` they are also
/// mirrored to stderr so table output on stdout stays clean.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // A broken config file must not prevent logging; it is reported later
    let config_log_path = Config::load().ok().and_then(|config| config.log_file_path);

    let (log_dir, log_file_name) =
        resolve_log_target(args.log_file.as_deref(), config_log_path.as_deref());

    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    let installed = if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stderr)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .try_init()
    } else {
        registry.try_init()
    };
    installed.map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
