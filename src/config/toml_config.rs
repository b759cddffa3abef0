use crate::adapters::warnings::{WarningsData, DEFAULT_MAX_WARNINGS};
use crate::domain::model::{NameRules, DEFAULT_INVALID_NAME_CHARS};
use crate::utils::error::{BaseError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelpersConfig {
    #[serde(default)]
    pub names: NamesConfig,
    #[serde(default)]
    pub warnings: WarningsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamesConfig {
    #[serde(default = "default_invalid_name_chars")]
    pub invalid_name_chars: String,
    #[serde(default = "default_true")]
    pub show_warnings: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningsConfig {
    #[serde(default = "default_max_warnings")]
    pub max_warnings: usize,
}

fn default_invalid_name_chars() -> String {
    DEFAULT_INVALID_NAME_CHARS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_warnings() -> usize {
    DEFAULT_MAX_WARNINGS
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            invalid_name_chars: default_invalid_name_chars(),
            show_warnings: true,
        }
    }
}

impl Default for WarningsConfig {
    fn default() -> Self {
        Self {
            max_warnings: default_max_warnings(),
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl HelpersConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BaseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INVALID_NAME_CHARS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name_rules(&self) -> NameRules {
        NameRules::new(self.names.invalid_name_chars.clone())
    }

    pub fn show_warnings(&self) -> bool {
        self.names.show_warnings
    }

    pub fn warnings_data(&self) -> WarningsData {
        WarningsData::new(self.warnings.max_warnings)
    }
}

impl Validate for HelpersConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_no_whitespace_chars(
            "names.invalid_name_chars",
            &self.names.invalid_name_chars,
        )?;
        validation::validate_positive_number("warnings.max_warnings", self.warnings.max_warnings, 1)?;
        Ok(())
    }
}
