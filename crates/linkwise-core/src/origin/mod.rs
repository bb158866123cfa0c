//! Origin and domain helpers.
//!
//! Everything here is total over strings: inputs that do not parse as
//! absolute URLs degrade to "no origin" / "not the same domain" instead of
//! failing. [`try_origin_of_url`] is the one fallible entry point, for
//! callers that want to report why a URL was rejected.

mod domain;
mod error;

pub use domain::{base_domain, has_same_domain, site_identity};
pub use error::OriginError;

use url::Url;

/// Returns `scheme://host` for a URL, without port, path, query or fragment.
///
/// # Examples
///
/// - `try_origin_of_url("https://www.yahoo.com/news?x=1")` → `"https://www.yahoo.com"`
/// - `try_origin_of_url("mailto:me@example.com")` → `Err(MissingHost)`
pub fn try_origin_of_url(url: &str) -> Result<String, OriginError> {
    let parsed = Url::parse(url).map_err(|source| OriginError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| OriginError::MissingHost(url.to_string()))?;
    Ok(format!("{}://{}", parsed.scheme(), host))
}

/// Like [`try_origin_of_url`], but yields an empty string on failure.
pub fn get_origin_of_url(url: &str) -> String {
    match try_origin_of_url(url) {
        Ok(origin) => origin,
        Err(err) => {
            tracing::trace!(%err, "no origin");
            String::new()
        }
    }
}
