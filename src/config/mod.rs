//! Configuration module

mod site;

pub use site::ReviewsConfig;
pub use site::SiteConfig;
pub use site::{API_KEY_ENV, PLACE_ID_ENV};
