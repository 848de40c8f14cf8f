use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a full URL starting with `http://` or `https://`;
///   bare domain names are rejected
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
pub fn validate_config(
    api_domain: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.trim().is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        return Err(AppError::config_error(
            "API domain must start with http:// or https://",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
