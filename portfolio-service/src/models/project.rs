use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_http_url;

pub const COLLECTION: &str = "project";

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Project {
    pub title: String,
    /// Short description.
    pub summary: String,
    /// Tech stack.
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub repo_url: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}
