//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HogoConfig;
use crate::domain::errors::HogoError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HogoConfig
/// 4. Applies environment variable overrides (HOGO_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use hogo::config::loader::load_config;
///
/// let config = load_config("hogo.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HogoConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HogoError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HogoError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Same as [`load_config`] for TOML already in memory
pub fn load_config_from_str(contents: &str) -> Result<HogoConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: HogoConfig = toml::from_str(&contents)
        .map_err(|e| HogoError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        HogoError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Configuration with defaults and environment overrides only
pub fn default_config() -> Result<HogoConfig> {
    let mut config = HogoConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        HogoError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_VAR_RE.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HogoError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using HOGO_* prefix
///
/// Environment variables follow the pattern: HOGO_<SECTION>_<KEY>
/// For example: HOGO_APPLICATION_LOG_LEVEL, HOGO_REDACTION_KEEP_PREFECTURE
fn apply_env_overrides(config: &mut HogoConfig) -> Result<()> {
    if let Ok(val) = std::env::var("HOGO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    config
        .detection
        .apply_env_overrides()
        .map_err(|e| HogoError::Configuration(format!("{e:#}")))?;
    config
        .redaction
        .apply_env_overrides()
        .map_err(|e| HogoError::Configuration(format!("{e:#}")))?;
    config
        .assist
        .apply_env_overrides()
        .map_err(|e| HogoError::Configuration(format!("{e:#}")))?;
    config
        .audit
        .apply_env_overrides()
        .map_err(|e| HogoError::Configuration(format!("{e:#}")))?;

    if let Ok(val) = std::env::var("HOGO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            HogoError::Configuration(format!("Invalid HOGO_LOGGING_LOCAL_ENABLED value: {val}"))
        })?;
    }
    if let Ok(val) = std::env::var("HOGO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("HOGO_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("HOGO_LOADER_TEST_VAR", "社外秘");
        let input = "custom_keywords = [\"${HOGO_LOADER_TEST_VAR}\"]";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "custom_keywords = [\"社外秘\"]\n");
        std::env::remove_var("HOGO_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("HOGO_LOADER_MISSING_VAR");
        let input = "primary_model = \"${HOGO_LOADER_MISSING_VAR}\"";
        assert!(substitute_env_vars(input).is_err());
    }

    #[test]
    fn test_comments_are_not_substituted() {
        std::env::remove_var("HOGO_LOADER_COMMENTED_VAR");
        let input = "# primary_model = \"${HOGO_LOADER_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent.toml").is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[detection]
enable_names = true
custom_keywords = ["株式会社ホゴ"]
recent_birth_year_window = 15

[redaction]
name_initial = true
substitution = "positional"

[assist]
primary_model = "large"
fallback_model = "small"
timeout_seconds = 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.detection.recent_birth_year_window, 15);
        assert!(config.redaction.name_initial);
        assert_eq!(config.assist.fallback_model.as_deref(), Some("small"));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        assert!(load_config_from_str("[application\nlog_level = ").is_err());
    }
}
