//! Content loader - loads typed collections from the content directory

use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::entities::{
    ContentEntity, Cta, Feature, GalleryItem, PreservationPackage, Service, Testimonial,
};
use super::FrontMatter;

/// Errors raised while loading a content folder
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to enumerate {path:?}: {source}")]
    Enumerate {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads content from the content directory
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
}

impl ContentLoader {
    /// Create a new content loader rooted at `content_dir`
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Load every file of one folder, sorted by `order`.
    ///
    /// Any failure is logged and turns into an empty collection.
    pub async fn load_markdown_files<T: ContentEntity>(&self, folder: &str) -> Vec<T> {
        match self.try_load_markdown_files(folder).await {
            Ok(items) => {
                tracing::debug!("Loaded {} items from {}", items.len(), folder);
                items
            }
            Err(e) => {
                tracing::error!("Error loading markdown files from {}: {}", folder, e);
                Vec::new()
            }
        }
    }

    /// Load the folder an entity type declares
    pub async fn load<T: ContentEntity>(&self) -> Vec<T> {
        self.load_markdown_files(T::FOLDER).await
    }

    pub async fn load_services(&self) -> Vec<Service> {
        self.load().await
    }

    pub async fn load_features(&self) -> Vec<Feature> {
        self.load().await
    }

    pub async fn load_testimonials(&self) -> Vec<Testimonial> {
        self.load().await
    }

    pub async fn load_preservation(&self) -> Vec<PreservationPackage> {
        self.load().await
    }

    pub async fn load_cta_sections(&self) -> Vec<Cta> {
        self.load().await
    }

    pub async fn load_gallery_items(&self) -> Vec<GalleryItem> {
        self.load().await
    }

    /// Fallible load: a single unreadable file fails the whole folder
    pub async fn try_load_markdown_files<T: ContentEntity>(
        &self,
        folder: &str,
    ) -> Result<Vec<T>, ContentError> {
        let folder = Path::new(folder.trim_matches('/'));

        let paths: Vec<PathBuf> = self
            .enumerate()?
            .into_iter()
            .filter(|path| self.in_folder(path, folder))
            .collect();

        let reads = paths.into_iter().map(|path| async move {
            let result = tokio::fs::read_to_string(&path).await;
            result.map_err(|source| ContentError::Read { path, source })
        });
        let contents = try_join_all(reads).await?;

        let mut items: Vec<T> = contents
            .iter()
            .map(|content| T::from_front_matter(FrontMatter::parse(content)))
            .collect();

        // Stable: equal orders keep enumeration order
        items.sort_by(|a, b| a.order().total_cmp(&b.order()));

        Ok(items)
    }

    /// All markdown files under the content root, in path order
    fn enumerate(&self) -> Result<Vec<PathBuf>, ContentError> {
        if !self.content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| ContentError::Enumerate {
                path: self.content_dir.clone(),
                source,
            })?;
            if entry.file_type().is_file() && is_markdown_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn in_folder(&self, path: &Path, folder: &Path) -> bool {
        path.strip_prefix(&self.content_dir)
            .map(|relative| relative.starts_with(folder))
            .unwrap_or(false)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
