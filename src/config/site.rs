//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::reviews::{DEFAULT_REVIEW_LIMIT, DEFAULT_TTL_SECS};

/// Environment variable carrying the Places API key
pub const API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";

/// Environment variable carrying the place identifier
pub const PLACE_ID_ENV: &str = "GOOGLE_PLACE_ID";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub cache_dir: String,
    pub public_dir: String,

    // Reviews
    #[serde(default)]
    pub reviews: ReviewsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Platinium Wedding Care".to_string(),
            url: "http://example.com".to_string(),

            content_dir: "public/content".to_string(),
            cache_dir: ".gowncare-cache".to_string(),
            public_dir: "dist/data".to_string(),

            reviews: ReviewsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Let the environment supply review credentials.
    /// Set-but-empty variables are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = present(API_KEY_ENV) {
            self.reviews.api_key = Some(key);
        }
        if let Some(place) = present(PLACE_ID_ENV) {
            self.reviews.place_id = Some(place);
        }
    }
}

/// Third-party review settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    pub api_key: Option<String>,
    pub place_id: Option<String>,
    pub endpoint: String,
    /// Freshness window for the cached list
    pub cache_ttl_secs: u64,
    /// Reviews kept from one fetch
    pub max_reviews: usize,
    /// Reviews plus CMS testimonials in the exported feed
    pub max_combined: usize,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            place_id: None,
            endpoint: "https://maps.googleapis.com/maps/api/place/details/json".to_string(),
            cache_ttl_secs: DEFAULT_TTL_SECS,
            max_reviews: DEFAULT_REVIEW_LIMIT,
            max_combined: 10,
        }
    }
}

impl ReviewsConfig {
    /// Freshness window, saturating at the largest representable duration
    pub fn cache_ttl(&self) -> chrono::Duration {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}
