//! Clean the review cache and exported data

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the cache directory and the export directory
pub fn run(site: &Site) -> Result<()> {
    for dir in [&site.cache_dir, &site.public_dir] {
        if dir.exists() {
            fs::remove_dir_all(dir)?;
            tracing::info!("Deleted: {:?}", dir);
        }
    }

    Ok(())
}
