use crate::model::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;

/// One brand with its case-insensitive matching terms. Declaration order in
/// the config file is the match order: when terms overlap across brands, the
/// first declared brand wins.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    pub terms: Vec<String>,
}

/// Regional knobs forwarded to the ranked-list provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub gl: String,
    pub hl: String,
    pub google_domain: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            gl: "in".to_string(),
            hl: "en".to_string(),
            google_domain: "google.co.in".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub search_query: String,
    pub target_results: usize,
    pub video_keyword: String,
    pub max_videos_per_brand: u32,
    pub video_brands: Vec<String>,
    #[serde(default)]
    pub search_params: SearchParams,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    pub brands: Vec<BrandEntry>,
}

fn default_output_dir() -> String {
    "out".to_string()
}

impl AppConfig {
    /// Queries used by the engagement pipeline, one per configured brand,
    /// e.g. "Atomberg smart fan".
    pub fn brand_queries(&self) -> Vec<String> {
        self.video_brands
            .iter()
            .map(|b| format!("{} {}", b, self.video_keyword))
            .collect()
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: AppConfig = serde_json::from_str(&content)?;

    if config.brands.is_empty() {
        return Err(ConfigError::Invalid("no brands configured".into()));
    }
    for brand in &mut config.brands {
        if brand.terms.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "brand '{}' has no matching terms",
                brand.name
            )));
        }
        // Matching is case-insensitive; normalize once here instead of on
        // every classify call.
        for term in &mut brand.terms {
            *term = term.to_lowercase();
        }
    }

    Ok(config)
}

/// API keys live in the environment (or a .env file), never in config.json.
pub fn env_key(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingKey(name))
}
