//! Export content and reviews as JSON for the front-end

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::content::{GalleryItem, MarkdownRenderer};
use crate::reviews::combine_with_manual;
use crate::Site;

/// Write every collection into the export directory
pub async fn run(site: &Site) -> Result<()> {
    let start = Instant::now();
    let loader = site.loader();

    let services = loader.load_services().await;
    let features = loader.load_features().await;
    let testimonials = loader.load_testimonials().await;
    let preservation = loader.load_preservation().await;
    let ctas = loader.load_cta_sections().await;
    let gallery = render_bodies(loader.load_gallery_items().await);

    tracing::info!(
        "Loaded {} services, {} features, {} testimonials, {} packages, {} CTAs, {} gallery items",
        services.len(),
        features.len(),
        testimonials.len(),
        preservation.len(),
        ctas.len(),
        gallery.len()
    );

    let client = site.places_client()?;
    let reviews = site.review_cache().get_reviews(&client).await;
    let reviews = combine_with_manual(reviews, &testimonials, site.config.reviews.max_combined);

    let out = &site.public_dir;
    fs::create_dir_all(out).with_context(|| format!("Failed to create {:?}", out))?;

    write_json(out, "services.json", &services)?;
    write_json(out, "features.json", &features)?;
    write_json(out, "testimonials.json", &testimonials)?;
    write_json(out, "preservation.json", &preservation)?;
    write_json(out, "cta.json", &ctas)?;
    write_json(out, "gallery.json", &gallery)?;
    write_json(out, "reviews.json", &reviews)?;

    let duration = start.elapsed();
    tracing::info!("Exported to {:?} in {:.2}s", out, duration.as_secs_f64());

    Ok(())
}

/// Gallery bodies go out as HTML
fn render_bodies(items: Vec<GalleryItem>) -> Vec<GalleryItem> {
    let renderer = MarkdownRenderer::new();
    items
        .into_iter()
        .map(|mut item| {
            item.body = item.body.map(|body| renderer.render(&body));
            item
        })
        .collect()
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(value)?;
    fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

/// Watch the content directory and export again on changes
pub async fn watch(site: &Site) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher
        .watch(&site.content_dir, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {:?}", site.content_dir))?;

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_export = Instant::now();

    while let Some(_event) = rx.recv().await {
        // Debounce: editors emit bursts of events per save
        if last_export.elapsed() > Duration::from_millis(500) {
            tracing::info!("Content changed, exporting...");
            if let Err(e) = run(site).await {
                tracing::error!("Export failed: {}", e);
            }
            last_export = Instant::now();
        }
    }

    Ok(())
}
