use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_http_url;

pub const COLLECTION: &str = "blogpost";

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub cover_image: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}
