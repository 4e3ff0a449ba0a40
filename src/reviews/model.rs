//! Review shapes: the local card format and the Places API payload

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::content::Testimonial;

/// Where a review was collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewOrigin {
    Google,
    Manual,
    Facebook,
    Trustpilot,
}

/// A testimonial as shown on a review card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub text: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// ISO 8601 date or timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ReviewOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

impl Review {
    /// Convert a CMS testimonial. Entries without a name, text or rating
    /// cannot fill a card and are skipped.
    pub fn from_manual(index: usize, t: &Testimonial) -> Option<Self> {
        let name = t.name.clone()?;
        let text = t.text.clone()?;
        let rating = t.rating?.clamp(0.0, 5.0).round() as u8;

        Some(Self {
            id: Some(format!("manual-{}", index + 1)),
            name,
            location: t.location.clone(),
            text,
            rating,
            image: t.image.clone(),
            date: t.date.clone(),
            source: Some(ReviewOrigin::Manual),
            source_url: None,
            verified: t.verified,
            service_type: t.service_type.clone(),
        })
    }
}

/// One review from the place details endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleReview {
    pub author_name: String,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub relative_time_description: Option<String>,
    #[serde(default)]
    pub text: String,
    /// Seconds since the Unix epoch
    pub time: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaceResult {
    /// Absent when the place has no reviews or the field was not returned
    #[serde(default)]
    pub reviews: Option<Vec<GoogleReview>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
}

/// Body of a place details response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceResult>,
}

impl From<GoogleReview> for Review {
    fn from(review: GoogleReview) -> Self {
        let date = DateTime::<Utc>::from_timestamp(review.time, 0)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true));

        Self {
            id: Some(format!("google-{}", review.time)),
            name: review.author_name,
            location: None,
            text: review.text,
            rating: review.rating,
            image: review.profile_photo_url,
            date,
            source: Some(ReviewOrigin::Google),
            source_url: review.author_url,
            verified: Some(true),
            service_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_review_conversion() {
        let review = GoogleReview {
            author_name: "Priya Shah".to_string(),
            author_url: Some("https://maps.google.com/u/1".to_string()),
            language: Some("en".to_string()),
            profile_photo_url: None,
            rating: 4,
            relative_time_description: None,
            text: "Lovely work on my veil.".to_string(),
            time: 1_705_312_800,
        };

        let card = Review::from(review);
        assert_eq!(card.id.as_deref(), Some("google-1705312800"));
        assert_eq!(card.date.as_deref(), Some("2024-01-15T10:00:00.000Z"));
        assert_eq!(card.source, Some(ReviewOrigin::Google));
        assert_eq!(card.verified, Some(true));
        assert_eq!(card.rating, 4);
        assert_eq!(card.source_url.as_deref(), Some("https://maps.google.com/u/1"));
    }

    #[test]
    fn test_review_json_shape() {
        let card = Review {
            id: None,
            name: "A".to_string(),
            location: None,
            text: "B".to_string(),
            rating: 5,
            image: None,
            date: None,
            source: Some(ReviewOrigin::Manual),
            source_url: Some("u".to_string()),
            verified: None,
            service_type: Some("Formal Wear".to_string()),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["source"], "manual");
        assert_eq!(json["sourceUrl"], "u");
        assert_eq!(json["serviceType"], "Formal Wear");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_from_manual_requires_card_fields() {
        let mut t = Testimonial {
            name: Some("Jo".to_string()),
            text: Some("Great".to_string()),
            rating: Some(4.6),
            ..Default::default()
        };
        let card = Review::from_manual(0, &t).unwrap();
        assert_eq!(card.id.as_deref(), Some("manual-1"));
        assert_eq!(card.rating, 5);

        t.text = None;
        assert!(Review::from_manual(0, &t).is_none());
    }
}
