use crate::core::{EncodingPolicy, TransformMode};
use crate::utils::error::{CaserError, Result};
use crate::utils::validation::{validate_log_level, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub caser: CaserSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaserSection {
    pub default_mode: Option<TransformMode>,
    pub encoding: Option<EncodingPolicy>,
    pub quiet: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CaserError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CASER_MODE})；未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Option<Regex>> = OnceLock::new();
        let Some(re) = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").ok())
            .as_ref()
        else {
            return content.to_string();
        };

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn default_mode(&self) -> Option<TransformMode> {
        self.caser.default_mode
    }

    pub fn encoding(&self) -> EncodingPolicy {
        self.caser.encoding.unwrap_or_default()
    }

    pub fn quiet(&self) -> bool {
        self.caser.quiet.unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[caser]
default_mode = "invert"
encoding = "strict"
quiet = true

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.default_mode(), Some(TransformMode::Invert));
        assert_eq!(config.encoding(), EncodingPolicy::Strict);
        assert!(config.quiet());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mode_aliases_match_command_line() {
        let config =
            TomlConfig::from_toml_str("[caser]\ndefault_mode = \"UPPER\"\nencoding = \"Strict\"\n")
                .unwrap();
        assert_eq!(config.default_mode(), Some(TransformMode::Upper));
        assert_eq!(config.encoding(), EncodingPolicy::Strict);

        let config = TomlConfig::from_toml_str("[caser]\ndefault_mode = \"swap\"\n").unwrap();
        assert_eq!(config.default_mode(), Some(TransformMode::Invert));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_mode(), None);
        assert_eq!(config.encoding(), EncodingPolicy::Replace);
        assert!(!config.quiet());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CASER_TEST_DEFAULT_MODE", "lower");

        let toml_content = r#"
[caser]
default_mode = "${CASER_TEST_DEFAULT_MODE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_mode(), Some(TransformMode::Lower));

        std::env::remove_var("CASER_TEST_DEFAULT_MODE");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let toml_content = r#"
[logging]
level = "${CASER_TEST_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), Some("${CASER_TEST_SURELY_UNSET}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(TomlConfig::from_toml_str("[caser]\ndefault_mode = \"title\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[caser]\nencoding = \"latin1\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[caser]\nwindow_width = 600\n").is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[caser]\ndefault_mode = \"upper\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_mode(), Some(TransformMode::Upper));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/caser.toml");
        assert!(matches!(result, Err(CaserError::IoError(_))));
    }
}
