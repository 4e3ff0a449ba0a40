//! Reviews module - third-party reviews behind a one-hour cache

mod cache;
mod fallback;
mod google;
mod model;
mod store;

pub use cache::{
    ReviewCache, DEFAULT_REVIEW_LIMIT, DEFAULT_TTL_SECS, REVIEWS_KEY, TIMESTAMP_KEY,
};
pub use fallback::fallback_reviews;
pub use google::{
    fetch_google_reviews, try_fetch_google_reviews, FetchError, PlacesClient, ReviewSource,
};
pub use model::{GoogleReview, PlaceDetailsResponse, PlaceResult, Review, ReviewOrigin};
pub use store::{FileStore, MemoryStore, ReviewStore, StoreError};

use crate::content::Testimonial;

/// Remote reviews first, then CMS testimonials, at most `max` in total
pub fn combine_with_manual(
    reviews: Vec<Review>,
    manual: &[Testimonial],
    max: usize,
) -> Vec<Review> {
    let manual = manual
        .iter()
        .enumerate()
        .filter_map(|(i, t)| Review::from_manual(i, t));

    reviews.into_iter().chain(manual).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_puts_remote_first_and_truncates() {
        let manual: Vec<Testimonial> = (0..8)
            .map(|i| Testimonial {
                name: Some(format!("Client {}", i)),
                text: Some("Thank you".to_string()),
                rating: Some(5.0),
                ..Default::default()
            })
            .collect();

        let combined = combine_with_manual(fallback_reviews(), &manual, 10);
        assert_eq!(combined.len(), 10);
        assert_eq!(combined[0].source, Some(ReviewOrigin::Google));
        assert_eq!(combined[6].name, "Client 0");
        assert_eq!(combined[9].source, Some(ReviewOrigin::Manual));
    }

    #[test]
    fn test_combine_skips_incomplete_manual_entries() {
        let manual = vec![
            Testimonial {
                name: Some("No text".to_string()),
                rating: Some(5.0),
                ..Default::default()
            },
            Testimonial {
                name: Some("Complete".to_string()),
                text: Some("Spotless".to_string()),
                rating: Some(4.0),
                ..Default::default()
            },
        ];

        let combined = combine_with_manual(Vec::new(), &manual, 10);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].name, "Complete");
        assert_eq!(combined[0].id.as_deref(), Some("manual-2"));
    }
}
