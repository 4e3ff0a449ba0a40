//! Content module - front-matter parsing and typed content collections

pub mod entities;
mod frontmatter;
pub mod loader;
mod markdown;

pub use entities::{
    ContentEntity, Cta, Feature, GalleryItem, PreservationPackage, Service, Testimonial,
};
pub use frontmatter::{parse_block, ContentRecord, FieldValue, FrontMatter};
pub use loader::{ContentError, ContentLoader};
pub use markdown::MarkdownRenderer;
