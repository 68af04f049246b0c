use crate::shared::api_utils::resource_url;
use serde::Deserialize;

/// localStorage key holding an optional TOML document that overrides the defaults
pub const CONFIG_STORAGE_KEY: &str = "catalog_admin_config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the mock REST API
    pub base_url: String,
    /// Resource name of the curriculum collection
    #[serde(default = "default_curriculum_resource")]
    pub curriculum: String,
    /// Resource name of the pricing plan collection
    #[serde(default = "default_pricing_resource")]
    pub pricing_plans: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            page_size_options: vec![2, 4, 8, 16],
        }
    }
}

fn default_curriculum_resource() -> String {
    "curriculum_plans".to_string()
}

fn default_pricing_resource() -> String {
    "pricing_plans".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://694cec27da5ddabf0037d71b.mockapi.io"
curriculum = "curriculum_plans"
pricing_plans = "pricing_plans"

[pagination]
page_size = 4
page_size_options = [2, 4, 8, 16]
"#;

impl ApiConfig {
    pub fn resource_url(&self, resource: &str) -> String {
        resource_url(&self.base_url, resource)
    }

    pub fn curriculum_url(&self) -> String {
        self.resource_url(&self.curriculum)
    }

    pub fn pricing_plans_url(&self) -> String {
        self.resource_url(&self.pricing_plans)
    }
}

/// Parse and validate a TOML configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> anyhow::Result<()> {
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    if config.pagination.page_size == 0 {
        anyhow::bail!("pagination.page_size must be greater than zero");
    }
    if config.pagination.page_size_options.is_empty()
        || config.pagination.page_size_options.contains(&0)
    {
        anyhow::bail!("pagination.page_size_options must be non-empty and positive");
    }
    Ok(())
}

/// Load configuration
///
/// Search order:
/// 1. TOML document stored in localStorage under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(contents) = read_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage key '{}'", CONFIG_STORAGE_KEY);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.pagination.page_size, 4);
        assert_eq!(
            config.api.curriculum_url(),
            "https://694cec27da5ddabf0037d71b.mockapi.io/curriculum_plans"
        );
        assert_eq!(
            config.api.pricing_plans_url(),
            "https://694cec27da5ddabf0037d71b.mockapi.io/pricing_plans"
        );
    }

    #[test]
    fn test_override_with_defaults() {
        let config = parse_config(
            r#"
            [api]
            base_url = "http://localhost:3000/api/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.curriculum_url(), "http://localhost:3000/api/curriculum_plans");
        assert_eq!(config.pagination, PaginationConfig::default());
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let res = parse_config(
            r#"
            [api]
            base_url = "http://localhost"

            [pagination]
            page_size = 0
            page_size_options = [5]
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_rejects_empty_base_url() {
        assert!(parse_config("[api]\nbase_url = \"  \"\n").is_err());
    }
}
