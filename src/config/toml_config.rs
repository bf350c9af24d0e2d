use crate::core::render::OutputFormat;
use crate::core::years::validate_year;
use crate::utils::error::{BirthdayError, Result};
use crate::utils::validation::{validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern must compile"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    pub view: Option<ViewConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: Option<String>,
    pub url: Option<String>,
    /// 沒有指定輸入時嘗試的靜態清單
    pub reference_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BirthdayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIRTHDAY_SOURCE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.source.path {
            validate_path("source.path", path)?;
        }
        if let Some(url) = &self.source.url {
            validate_url("source.url", url)?;
        }
        if let Some(url) = &self.source.reference_url {
            validate_url("source.reference_url", url)?;
        }
        if let Some(year) = self.view.as_ref().and_then(|v| v.year) {
            validate_year("view.year", year)?;
        }
        if let Some(path) = self.output.as_ref().and_then(|o| o.path.as_deref()) {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
path = "people.json"
reference_url = "https://example.com/birthday.json"

[view]
year = 2024

[output]
format = "csv"
path = "./out/cards.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.path.as_deref(), Some("people.json"));
        assert_eq!(config.view.as_ref().and_then(|v| v.year), Some(2024));
        let output = config.output.as_ref().unwrap();
        assert_eq!(output.format, Some(OutputFormat::Csv));
        assert_eq!(output.path.as_deref(), Some("./out/cards.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_leaves_everything_unset() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.path.is_none());
        assert!(config.source.url.is_none());
        assert!(config.view.is_none());
        assert!(config.output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BDAY_TEST_SOURCE_URL", "https://test.example.com/people.json");

        let toml_content = r#"
[source]
url = "${BDAY_TEST_SOURCE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source.url.as_deref(),
            Some("https://test.example.com/people.json")
        );

        std::env::remove_var("BDAY_TEST_SOURCE_URL");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[source]\nurl = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[view]\nyear = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[view]\nyear = 1999\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[view]\nyear = 2000\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_format_is_config_error() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, BirthdayError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[view]\nyear = 2021\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.view.and_then(|v| v.year), Some(2021));
    }
}
