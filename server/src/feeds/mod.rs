pub mod json;
pub mod metadata;
pub mod rss;
