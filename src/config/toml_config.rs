use crate::adapters::relay::DEFAULT_RELAY_ENDPOINT;
use crate::content;
use crate::core::contact::DEFAULT_RESET_AFTER;
use crate::core::scroll_spy::{ScrollSpyConfig, DEFAULT_REFERENCE_LINE, DEFAULT_SCROLLED_THRESHOLD};
use crate::render::{SiteIdentity, Theme};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub relay: RelaySection,
    pub scroll_spy: ScrollSpySection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub owner: String,
    pub base_path: String,
    pub theme: Theme,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: format!("{} | Portfolio", content::OWNER_NAME),
            owner: content::OWNER_NAME.to_string(),
            base_path: "/portfolio/".to_string(),
            theme: Theme::default(),
            email: content::CONTACT_EMAIL.to_string(),
            phone: content::CONTACT_PHONE.to_string(),
            location: content::CONTACT_LOCATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaySection {
    pub endpoint: String,
    pub reset_after_ms: u64,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            reset_after_ms: DEFAULT_RESET_AFTER.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpySection {
    pub reference_line_px: f64,
    pub scrolled_threshold_px: f64,
}

impl Default for ScrollSpySection {
    fn default() -> Self {
        Self {
            reference_line_px: DEFAULT_REFERENCE_LINE,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub directory: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: "./dist".to_string(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${RELAY_ENDPOINT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn reset_after(&self) -> Duration {
        Duration::from_millis(self.relay.reset_after_ms)
    }

    pub fn scroll_spy_config(&self) -> ScrollSpyConfig {
        ScrollSpyConfig {
            reference_line: self.scroll_spy.reference_line_px,
            scrolled_threshold: self.scroll_spy.scrolled_threshold_px,
        }
    }

    pub fn identity(&self) -> SiteIdentity {
        SiteIdentity {
            title: self.site.title.clone(),
            owner: self.site.owner.clone(),
            email: self.site.email.clone(),
            phone: self.site.phone.clone(),
            location: self.site.location.clone(),
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("relay.endpoint", &self.relay.endpoint)?;
        validation::validate_positive_number("relay.reset_after_ms", self.relay.reset_after_ms, 1)?;
        validation::validate_base_path("site.base_path", &self.site.base_path)?;
        validation::validate_non_empty_string("site.owner", &self.site.owner)?;
        validation::validate_path("output.directory", &self.output.directory)?;
        validation::validate_range(
            "scroll_spy.reference_line_px",
            self.scroll_spy.reference_line_px,
            0.0,
            10_000.0,
        )?;
        validation::validate_range(
            "scroll_spy.scrolled_threshold_px",
            self.scroll_spy.scrolled_threshold_px,
            0.0,
            10_000.0,
        )?;

        if self.site.email.is_empty() {
            return Err(SiteError::ConfigError {
                message: "site.email is required for the hire-me link".to_string(),
            });
        }
        Ok(())
    }
}
