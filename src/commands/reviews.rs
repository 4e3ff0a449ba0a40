//! Show the current review list

use anyhow::Result;
use chrono::Utc;

use crate::reviews::Review;
use crate::Site;

/// Print reviews, fetching when the cache is stale or `refresh` is set
pub async fn run(site: &Site, refresh: bool) -> Result<()> {
    let reviews = load(site, refresh).await?;

    println!("Reviews ({}):", reviews.len());
    for review in &reviews {
        println!("  {}", format_review(review));
    }

    Ok(())
}

pub async fn load(site: &Site, refresh: bool) -> Result<Vec<Review>> {
    let client = site.places_client()?;
    let cache = site.review_cache();

    let reviews = if refresh {
        cache.refresh_at(&client, Utc::now()).await
    } else {
        cache.get_reviews(&client).await
    };

    Ok(reviews)
}

fn format_review(review: &Review) -> String {
    let date = review
        .date
        .as_deref()
        .map(|d| d.get(..10).unwrap_or(d))
        .unwrap_or("----------");
    format!(
        "{} {} {} - {}",
        date,
        "*".repeat(review.rating as usize),
        review.name,
        review.id.as_deref().unwrap_or("-")
    )
}
