//! Configuration semantic validation.
//!
//! Checks values that parse fine as TOML but cannot drive a scan.

use crate::config::Config;
use crate::scanner::{ExcludeFilter, ExtensionSet};
use crate::{MusicScanError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the extension list is empty or holds blank entries,
/// an exclude pattern is not a valid glob, or the report prefix is unusable.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    ExtensionSet::new(&config.scanner.extensions).map_err(|e| match e {
        MusicScanError::Config(msg) => MusicScanError::Config(format!("scanner.extensions: {msg}")),
        other => other,
    })?;
    ExcludeFilter::new(&config.scanner.exclude)?;
    validate_report_section(config)?;
    Ok(())
}

fn validate_report_section(config: &Config) -> Result<()> {
    let prefix = &config.report.prefix;
    if prefix.trim().is_empty() {
        return Err(MusicScanError::Config(
            "report.prefix must not be empty".to_string(),
        ));
    }
    if prefix.contains(['/', '\\']) {
        return Err(MusicScanError::Config(format!(
            "report.prefix must not contain path separators, got '{prefix}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config_semantics(&Config::default()).is_ok());
    }

    #[test]
    fn empty_extensions_rejected() {
        let mut config = Config::default();
        config.scanner.extensions.clear();

        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("scanner.extensions"));
    }

    #[test]
    fn invalid_exclude_rejected() {
        let mut config = Config::default();
        config.scanner.exclude.push("[oops".to_string());

        assert!(matches!(
            validate_config_semantics(&config),
            Err(MusicScanError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn prefix_with_separator_rejected() {
        let mut config = Config::default();
        config.report.prefix = "../music".to_string();

        assert!(validate_config_semantics(&config).is_err());
    }

    #[test]
    fn blank_prefix_rejected() {
        let mut config = Config::default();
        config.report.prefix = "  ".to_string();

        assert!(validate_config_semantics(&config).is_err());
    }
}
