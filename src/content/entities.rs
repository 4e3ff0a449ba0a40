//! Typed content entities
//!
//! Each entity is a [`ContentRecord`] read under a fixed expected shape.
//! Fields missing from the source (or carrying the wrong kind of value) are
//! left as `None`; defaulting belongs to whoever renders them.

use serde::{Deserialize, Serialize};

use super::frontmatter::{ContentRecord, FrontMatter};

/// A content type that can be built from one front-matter block
pub trait ContentEntity: Sized {
    /// Logical folder under the content root
    const FOLDER: &'static str;

    /// Build from a parsed record and the markdown body that followed it
    fn from_front_matter(fm: FrontMatter) -> Self;

    /// Numeric `order` used for sorting
    fn order(&self) -> f64;
}

fn order_of(order: Option<f64>) -> f64 {
    order.unwrap_or(0.0)
}

/// A cleaning or care service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ContentEntity for Service {
    const FOLDER: &'static str = "services";

    fn from_front_matter(fm: FrontMatter) -> Self {
        let r = &fm.record;
        Self {
            title: r.text("title"),
            description: r.text("description"),
            category: r.text("category"),
            featured: r.flag("featured"),
            duration: r.text("duration"),
            link: r.text("link"),
            order: r.number("order"),
            features: r.list("features"),
            image: r.text("image"),
        }
    }

    fn order(&self) -> f64 {
        order_of(self.order)
    }
}

/// A "why choose us" feature tile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl ContentEntity for Feature {
    const FOLDER: &'static str = "features";

    fn from_front_matter(fm: FrontMatter) -> Self {
        let r = &fm.record;
        Self {
            title: r.text("title"),
            description: r.text("description"),
            icon: r.text("icon"),
            category: r.text("category"),
            featured: r.flag("featured"),
            order: r.number("order"),
        }
    }

    fn order(&self) -> f64 {
        order_of(self.order)
    }
}

/// A customer testimonial maintained in the CMS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl ContentEntity for Testimonial {
    const FOLDER: &'static str = "testimonials";

    fn from_front_matter(fm: FrontMatter) -> Self {
        let r = &fm.record;
        Self {
            name: r.text("name"),
            location: r.text("location"),
            text: r.text("text"),
            rating: r.number("rating"),
            service_type: r.text("serviceType"),
            date: r.text("date"),
            verified: r.flag("verified"),
            image: r.text("image"),
            order: r.number("order"),
        }
    }

    fn order(&self) -> f64 {
        order_of(self.order)
    }
}

/// A preservation box package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreservationPackage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ContentEntity for PreservationPackage {
    const FOLDER: &'static str = "preservation";

    fn from_front_matter(fm: FrontMatter) -> Self {
        let r = &fm.record;
        Self {
            title: r.text("title"),
            description: r.text("description"),
            category: r.text("category"),
            price: r.text("price"),
            highlighted: r.flag("highlighted"),
            order: r.number("order"),
            features: r.list("features"),
            image: r.text("image"),
        }
    }

    fn order(&self) -> f64 {
        order_of(self.order)
    }
}

/// A call-to-action banner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_button_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_button_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl ContentEntity for Cta {
    const FOLDER: &'static str = "cta";

    fn from_front_matter(fm: FrontMatter) -> Self {
        let r = &fm.record;
        Self {
            title: r.text("title"),
            subtitle: r.text("subtitle"),
            primary_button_text: r.text("primaryButtonText"),
            primary_button_link: r.text("primaryButtonLink"),
            secondary_button_text: r.text("secondaryButtonText"),
            secondary_button_link: r.text("secondaryButtonLink"),
            order: r.number("order"),
        }
    }

    fn order(&self) -> f64 {
        order_of(self.order)
    }
}

/// A before/after gallery entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    /// Markdown following the front-matter block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ContentEntity for GalleryItem {
    const FOLDER: &'static str = "gallery";

    fn from_front_matter(fm: FrontMatter) -> Self {
        let r = &fm.record;
        let body = fm.body.trim();
        Self {
            title: r.text("title"),
            description: r.text("description"),
            category: r.text("category"),
            before_image: r.text("beforeImage"),
            after_image: r.text("afterImage"),
            order: r.number("order"),
            body: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    fn order(&self) -> f64 {
        order_of(self.order)
    }
}

/// Read a record without any entity shape, e.g. for inspection
impl ContentEntity for ContentRecord {
    const FOLDER: &'static str = "";

    fn from_front_matter(fm: FrontMatter) -> Self {
        fm.record
    }

    fn order(&self) -> f64 {
        ContentRecord::order(self)
    }
}
