//! Link descriptor: the part of an anchor element the classifier looks at.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::origin::get_origin_of_url;

/// Immutable snapshot of an anchor (`<a>`) taken for classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    /// Raw `href` attribute as written in the page; may be empty.
    pub href: String,
    /// Origin (`scheme://host`) the href points at, or empty if unknown.
    pub origin: String,
    /// Whether the anchor carries an `onclick` handler.
    #[serde(default)]
    pub has_onclick: bool,
}

impl LinkDescriptor {
    /// Descriptor with an explicitly supplied origin.
    pub fn new(href: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            origin: origin.into(),
            has_onclick: false,
        }
    }

    /// Builds a descriptor for `href` as it appears on the page at `page_url`.
    ///
    /// The origin is derived the way a browser derives `anchor.origin`: the
    /// href is resolved against the page URL first, so `/about` on
    /// `https://example.com/x` has origin `https://example.com`. Hrefs that do
    /// not resolve (or a page URL that does not parse) leave the origin empty.
    pub fn resolve(href: impl Into<String>, page_url: &str) -> Self {
        let href = href.into();
        let origin = Url::parse(page_url)
            .and_then(|base| base.join(&href))
            .map(|resolved| get_origin_of_url(resolved.as_str()))
            .unwrap_or_default();
        Self {
            href,
            origin,
            has_onclick: false,
        }
    }

    /// Marks whether the anchor has an `onclick` handler.
    pub fn with_onclick(mut self, has_onclick: bool) -> Self {
        self.has_onclick = has_onclick;
        self
    }
}
