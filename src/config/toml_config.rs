use crate::core::registry::DEFAULT_CAPACITY;
use crate::core::ConfigProvider;
use crate::domain::model::BillingRates;
use crate::utils::error::{MarinaError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub marina: Option<MarinaConfig>,
    pub registry: Option<RegistryConfig>,
    pub billing: Option<BillingRates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarinaConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub max_boats: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MarinaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MarinaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MARINA_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        // 驗證清單容量
        if let Some(registry) = &self.registry {
            if let Some(max_boats) = registry.max_boats {
                crate::utils::validation::validate_positive_number(
                    "registry.max_boats",
                    max_boats,
                    1,
                )?;
            }
        }

        // 驗證各存放方式的費率
        let rates = self.rates();
        crate::utils::validation::validate_rate("billing.slip", rates.slip)?;
        crate::utils::validation::validate_rate("billing.land", rates.land)?;
        crate::utils::validation::validate_rate("billing.trailer", rates.trailer)?;
        crate::utils::validation::validate_rate("billing.storage", rates.storage)?;

        Ok(())
    }

    /// 取得碼頭名稱
    pub fn marina_name(&self) -> &str {
        self.marina.as_ref().map(|m| m.name.as_str()).unwrap_or("marina")
    }

    /// 取得清單容量上限
    pub fn capacity(&self) -> usize {
        self.registry
            .as_ref()
            .and_then(|r| r.max_boats)
            .unwrap_or(DEFAULT_CAPACITY)
    }

    /// 取得費率表，未設定的欄位用預設費率
    pub fn rates(&self) -> BillingRates {
        self.billing.unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn rates(&self) -> BillingRates {
        self.rates()
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
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[marina]
name = "test-marina"
description = "Test marina"

[registry]
max_boats = 50

[billing]
slip = 13.00
land = 15.00
trailer = 26.00
storage = 12.00
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.marina_name(), "test-marina");
        assert_eq!(config.capacity(), 50);
        assert_eq!(config.rates().slip, 13.00);
        assert_eq!(config.rates().storage, 12.00);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_MARINA_NAME", "harbor-from-env");

        let toml_content = r#"
[marina]
name = "${TEST_MARINA_NAME}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.marina_name(), "harbor-from-env");

        std::env::remove_var("TEST_MARINA_NAME");
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.capacity(), DEFAULT_CAPACITY);
        assert_eq!(config.rates(), BillingRates::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_billing_section_uses_defaults() {
        let toml_content = r#"
[billing]
storage = 9.50
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let rates = config.rates();

        assert_eq!(rates.storage, 9.50);
        assert_eq!(rates.slip, BillingRates::default().slip);
        assert_eq!(rates.land, BillingRates::default().land);
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[billing]
slip = -1.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[registry]
max_boats = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[marina]
name = "file-test"

[registry]
max_boats = 80
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.marina_name(), "file-test");
        assert_eq!(config.capacity(), 80);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(TomlConfig::from_file("/no/such/marina.toml").is_err());
    }
}
