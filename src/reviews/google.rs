//! Google Places client and the fetch-or-fallback policy

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::fallback::fallback_reviews;
use super::model::{PlaceDetailsResponse, Review};
use crate::config::ReviewsConfig;

/// Fields requested from the place details endpoint
const DETAIL_FIELDS: &str = "reviews,rating,user_ratings_total";

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Google Places API not configured")]
    NotConfigured,

    #[error("HTTP error! status: {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Google Places API error: {0}")]
    ApiStatus(String),

    #[error("No reviews found in response")]
    MissingReviews,
}

impl FetchError {
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let body = if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let head: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", head, body.len())
        };
        FetchError::Http {
            status: status.as_u16(),
            body,
        }
    }
}

/// Anything that can answer a place details lookup
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Whether the identifying configuration is present
    fn is_configured(&self) -> bool;

    /// Issue one lookup. Non-2xx responses are errors; the API-level
    /// `status` field is left for the caller to judge.
    async fn fetch_place_details(&self) -> Result<PlaceDetailsResponse, FetchError>;
}

/// HTTP client for the place details endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    place_id: Option<String>,
}

impl PlacesClient {
    pub fn new(config: &ReviewsConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: non_empty(config.api_key.as_deref()),
            place_id: non_empty(config.place_id.as_deref()),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl ReviewSource for PlacesClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.place_id.is_some()
    }

    async fn fetch_place_details(&self) -> Result<PlaceDetailsResponse, FetchError> {
        let (Some(api_key), Some(place_id)) = (&self.api_key, &self.place_id) else {
            return Err(FetchError::NotConfigured);
        };

        tracing::debug!(endpoint = %self.endpoint, "Fetching place details");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("place_id", place_id.as_str()),
                ("fields", DETAIL_FIELDS),
                ("key", api_key.as_str()),
                ("reviews_sort", "newest"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status, &body));
        }

        Ok(response.json().await?)
    }
}

/// Fetch the newest reviews, at most `limit`, newest first.
///
/// This is where every fetch failure becomes the fallback list: an
/// unconfigured source is answered without a request, any error is logged
/// once here.
pub async fn fetch_google_reviews<S>(source: &S, limit: usize) -> Vec<Review>
where
    S: ReviewSource + ?Sized,
{
    if !source.is_configured() {
        tracing::warn!("Google Places API not configured, using fallback reviews");
        return fallback_reviews();
    }

    match try_fetch_google_reviews(source, limit).await {
        Ok(reviews) => {
            tracing::info!("Fetched {} Google reviews", reviews.len());
            reviews
        }
        Err(e) => {
            tracing::error!("Failed to fetch Google reviews: {}", e);
            fallback_reviews()
        }
    }
}

/// Fallible fetch: API status other than `OK` is an error, and so is an
/// `OK` response without a review list
pub async fn try_fetch_google_reviews<S>(
    source: &S,
    limit: usize,
) -> Result<Vec<Review>, FetchError>
where
    S: ReviewSource + ?Sized,
{
    let details = source.fetch_place_details().await?;
    if details.status != "OK" {
        return Err(FetchError::ApiStatus(details.status));
    }

    let mut reviews = details
        .result
        .and_then(|r| r.reviews)
        .ok_or(FetchError::MissingReviews)?;
    reviews.sort_by(|a, b| b.time.cmp(&a.time));

    Ok(reviews.into_iter().take(limit).map(Review::from).collect())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::reviews::model::{GoogleReview, PlaceResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted source that counts lookups
    pub(crate) struct FakeSource {
        pub configured: bool,
        pub status: String,
        pub reviews: Vec<GoogleReview>,
        pub fail_http: Option<u16>,
        pub calls: AtomicUsize,
    }

    impl FakeSource {
        pub fn ok(reviews: Vec<GoogleReview>) -> Self {
            Self {
                configured: true,
                status: "OK".to_string(),
                reviews,
                fail_http: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReviewSource for FakeSource {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn fetch_place_details(&self) -> Result<PlaceDetailsResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(code) = self.fail_http {
                let status = StatusCode::from_u16(code).unwrap();
                return Err(FetchError::from_status(status, "upstream failure"));
            }
            Ok(PlaceDetailsResponse {
                status: self.status.clone(),
                result: Some(PlaceResult {
                    reviews: Some(self.reviews.clone()),
                    rating: Some(4.9),
                    user_ratings_total: Some(self.reviews.len() as u64),
                }),
            })
        }
    }

    pub(crate) fn google_review(name: &str, time: i64) -> GoogleReview {
        GoogleReview {
            author_name: name.to_string(),
            author_url: None,
            language: Some("en".to_string()),
            profile_photo_url: Some(format!("https://photos.example/{}", name)),
            rating: 5,
            relative_time_description: Some("a week ago".to_string()),
            text: format!("Review by {}", name),
            time,
        }
    }

    #[tokio::test]
    async fn test_sorted_newest_first_and_truncated() {
        let reviews: Vec<_> = (0..12)
            .map(|i| google_review(&format!("r{}", i), 1_700_000_000 + i * 86_400))
            .collect();
        let source = FakeSource::ok(reviews);

        let cards = fetch_google_reviews(&source, 10).await;
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[0].name, "r11");
        assert_eq!(cards[9].name, "r2");
        assert_eq!(cards[0].image.as_deref(), Some("https://photos.example/r11"));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_api_status_error_returns_fallback() {
        let mut source = FakeSource::ok(vec![google_review("x", 1)]);
        source.status = "REQUEST_DENIED".to_string();

        let err = try_fetch_google_reviews(&source, 10).await.unwrap_err();
        assert!(matches!(err, FetchError::ApiStatus(ref s) if s == "REQUEST_DENIED"));

        assert_eq!(fetch_google_reviews(&source, 10).await, fallback_reviews());
    }

    #[tokio::test]
    async fn test_http_error_returns_fallback() {
        let mut source = FakeSource::ok(Vec::new());
        source.fail_http = Some(503);

        let cards = fetch_google_reviews(&source, 10).await;
        assert_eq!(cards, fallback_reviews());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_makes_no_request() {
        let mut source = FakeSource::ok(vec![google_review("x", 1)]);
        source.configured = false;

        let cards = fetch_google_reviews(&source, 10).await;
        assert_eq!(cards, fallback_reviews());
        assert_eq!(source.calls(), 0);
    }

    /// Answers `OK` with a fixed result body
    struct OkWith(Option<PlaceResult>);

    #[async_trait]
    impl ReviewSource for OkWith {
        fn is_configured(&self) -> bool {
            true
        }

        async fn fetch_place_details(&self) -> Result<PlaceDetailsResponse, FetchError> {
            Ok(PlaceDetailsResponse {
                status: "OK".to_string(),
                result: self.0.clone(),
            })
        }
    }

    #[tokio::test]
    async fn test_ok_without_result_returns_fallback() {
        let source = OkWith(None);

        let err = try_fetch_google_reviews(&source, 10).await.unwrap_err();
        assert!(matches!(err, FetchError::MissingReviews));
        assert_eq!(fetch_google_reviews(&source, 10).await, fallback_reviews());
    }

    #[tokio::test]
    async fn test_ok_without_reviews_returns_fallback() {
        let source = OkWith(Some(PlaceResult {
            reviews: None,
            rating: Some(4.9),
            user_ratings_total: Some(0),
        }));

        assert_eq!(fetch_google_reviews(&source, 10).await, fallback_reviews());
    }

    #[tokio::test]
    async fn test_ok_with_empty_reviews_is_empty() {
        let source = OkWith(Some(PlaceResult {
            reviews: Some(Vec::new()),
            ..Default::default()
        }));

        assert!(fetch_google_reviews(&source, 10).await.is_empty());
    }

    #[test]
    fn test_error_body_truncated() {
        let body = "x".repeat(2000);
        let err = FetchError::from_status(StatusCode::BAD_GATEWAY, &body);
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("truncated, 2000 total bytes"));
    }

    #[test]
    fn test_blank_credentials_are_unconfigured() {
        let config = ReviewsConfig {
            api_key: Some("  ".to_string()),
            place_id: Some("ChIJ123".to_string()),
            ..Default::default()
        };
        let client = PlacesClient::new(&config).unwrap();
        assert!(!client.is_configured());
    }

    mod http {
        use super::*;
        use axum::{extract::Query, http::StatusCode as AxumStatus, routing::get, Json, Router};
        use std::collections::HashMap;

        async fn serve(app: Router) -> String {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            format!("http://{}/maps/api/place/details/json", addr)
        }

        fn client_for(endpoint: String) -> PlacesClient {
            PlacesClient::new(&ReviewsConfig {
                api_key: Some("test-key".to_string()),
                place_id: Some("place-123".to_string()),
                endpoint,
                ..Default::default()
            })
            .unwrap()
        }

        #[tokio::test]
        async fn test_places_client_success() {
            let app = Router::new().route(
                "/maps/api/place/details/json",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    assert_eq!(params["place_id"], "place-123");
                    assert_eq!(params["key"], "test-key");
                    assert_eq!(params["fields"], "reviews,rating,user_ratings_total");
                    Json(serde_json::json!({
                        "status": "OK",
                        "result": {
                            "rating": 4.8,
                            "user_ratings_total": 2,
                            "reviews": [
                                {"author_name": "Old", "rating": 4, "text": "ok", "time": 100},
                                {"author_name": "New", "rating": 5, "text": "great", "time": 200,
                                 "author_url": "https://maps.example/new"}
                            ]
                        }
                    }))
                }),
            );
            let client = client_for(serve(app).await);

            let cards = fetch_google_reviews(&client, 10).await;
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[0].name, "New");
            assert_eq!(cards[0].id.as_deref(), Some("google-200"));
            assert_eq!(cards[1].rating, 4);
        }

        #[tokio::test]
        async fn test_places_client_http_error() {
            let app = Router::new().route(
                "/maps/api/place/details/json",
                get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
            );
            let client = client_for(serve(app).await);

            let err = client.fetch_place_details().await.unwrap_err();
            assert!(matches!(err, FetchError::Http { status: 500, .. }));
            assert_eq!(fetch_google_reviews(&client, 10).await, fallback_reviews());
        }

        #[tokio::test]
        async fn test_places_client_api_status() {
            let app = Router::new().route(
                "/maps/api/place/details/json",
                get(|| async { Json(serde_json::json!({"status": "INVALID_REQUEST"})) }),
            );
            let client = client_for(serve(app).await);

            let err = try_fetch_google_reviews(&client, 10).await.unwrap_err();
            assert!(matches!(err, FetchError::ApiStatus(_)));
        }

        #[tokio::test]
        async fn test_places_client_result_without_reviews() {
            let app = Router::new().route(
                "/maps/api/place/details/json",
                get(|| async {
                    Json(serde_json::json!({
                        "status": "OK",
                        "result": {"rating": 4.9, "user_ratings_total": 0}
                    }))
                }),
            );
            let client = client_for(serve(app).await);

            let err = try_fetch_google_reviews(&client, 10).await.unwrap_err();
            assert!(matches!(err, FetchError::MissingReviews));
            assert_eq!(fetch_google_reviews(&client, 10).await, fallback_reviews());
        }
    }
}
