//! Time-based cache in front of the review source
//!
//! The cache is either stale/empty or fresh. It becomes fresh when a fetch
//! result is stored and goes stale once the window has elapsed, which is
//! only noticed on the next read.

use chrono::{DateTime, Duration, Utc};

use super::fallback::fallback_reviews;
use super::google::{fetch_google_reviews, ReviewSource};
use super::model::Review;
use super::store::ReviewStore;

/// Key holding the JSON array of reviews
pub const REVIEWS_KEY: &str = "google_reviews";

/// Key holding the write time in milliseconds since the epoch
pub const TIMESTAMP_KEY: &str = "google_reviews_timestamp";

/// Default freshness window
pub const DEFAULT_TTL_SECS: u64 = 60 * 60;

/// Default number of reviews kept from a fetch
pub const DEFAULT_REVIEW_LIMIT: usize = 10;

pub struct ReviewCache<S> {
    store: S,
    ttl: Duration,
    limit: usize,
}

impl<S: ReviewStore> ReviewCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ttl: Duration::seconds(DEFAULT_TTL_SECS as i64),
            limit: DEFAULT_REVIEW_LIMIT,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reviews for display, fetching only when the cache is stale
    pub async fn get_reviews<R>(&self, source: &R) -> Vec<Review>
    where
        R: ReviewSource + ?Sized,
    {
        self.get_reviews_at(source, Utc::now()).await
    }

    pub async fn get_reviews_at<R>(&self, source: &R, now: DateTime<Utc>) -> Vec<Review>
    where
        R: ReviewSource + ?Sized,
    {
        if self.is_fresh(now) {
            tracing::debug!("Serving reviews from cache");
            return self.read_cached();
        }

        self.refresh_at(source, now).await
    }

    /// Fetch and store regardless of freshness
    pub async fn refresh_at<R>(&self, source: &R, now: DateTime<Utc>) -> Vec<Review>
    where
        R: ReviewSource + ?Sized,
    {
        let reviews = fetch_google_reviews(source, self.limit).await;
        self.write(&reviews, now);
        reviews
    }

    /// Fresh iff a parsable timestamp exists and is younger than the window
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        let Some(stored) = self.store.get(TIMESTAMP_KEY) else {
            return false;
        };
        let Ok(stored_ms) = stored.trim().parse::<i64>() else {
            tracing::warn!("Ignoring malformed review timestamp {:?}", stored);
            return false;
        };
        now.timestamp_millis()
            .checked_sub(stored_ms)
            .is_some_and(|age| age < self.ttl.num_milliseconds())
    }

    /// Stored reviews; a missing or undecodable entry yields the fallback list
    pub fn read_cached(&self) -> Vec<Review> {
        let Some(raw) = self.store.get(REVIEWS_KEY) else {
            return fallback_reviews();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Cached reviews unreadable, using fallback: {}", e);
            fallback_reviews()
        })
    }

    fn write(&self, reviews: &[Review], now: DateTime<Utc>) {
        let encoded = match serde_json::to_string(reviews) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode reviews for cache: {}", e);
                return;
            }
        };

        let result = self
            .store
            .put(REVIEWS_KEY, &encoded)
            .and_then(|_| self.store.put(TIMESTAMP_KEY, &now.timestamp_millis().to_string()));
        if let Err(e) = result {
            tracing::error!("Failed to store reviews: {}", e);
        }
    }
}
