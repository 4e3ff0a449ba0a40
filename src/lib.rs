//! gowncare: content and reviews back-end for a wedding-garment care site
//!
//! Loads typed collections (services, features, testimonials, preservation
//! packages, calls to action, gallery items) from markdown front matter and
//! serves customer reviews from a third-party API behind a one-hour cache.

pub mod commands;
pub mod config;
pub mod content;
pub mod reviews;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentLoader;
use reviews::{FileStore, PlacesClient, ReviewCache};

/// A site checkout: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Review cache directory
    pub cache_dir: PathBuf,
    /// Export (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env_overrides();

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let cache_dir = base_dir.join(&config.cache_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            cache_dir,
            public_dir,
        }
    }

    pub fn loader(&self) -> ContentLoader {
        ContentLoader::new(&self.content_dir)
    }

    /// Review cache backed by the on-disk store
    pub fn review_cache(&self) -> ReviewCache<FileStore> {
        let reviews = &self.config.reviews;
        ReviewCache::new(FileStore::new(&self.cache_dir))
            .with_ttl(reviews.cache_ttl())
            .with_limit(reviews.max_reviews)
    }

    pub fn places_client(&self) -> Result<PlacesClient> {
        Ok(PlacesClient::new(&self.config.reviews)?)
    }

    /// Export the site data
    pub async fn export(&self) -> Result<()> {
        commands::export::run(self).await
    }

    /// Clean the cache and export directories
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
