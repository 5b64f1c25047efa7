pub mod blog_post;
pub mod project;

pub use blog_post::BlogPost;
pub use project::Project;

use std::borrow::Cow;
use validator::ValidationError;

/// Accepts absolute `http`/`https` URLs with a host.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let valid = url::Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("http_url");
        err.message = Some(Cow::from("must be an absolute http or https URL"));
        Err(err)
    }
}
