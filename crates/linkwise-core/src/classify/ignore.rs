//! Generic ignore rules for anchors.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::link::LinkDescriptor;
use crate::strategy::Strategy;

/// `scheme://...#x`: absolute href carrying a non-empty page anchor.
static ABSOLUTE_WITH_FRAGMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://[^#]*#.")
        .expect("Failed to compile absolute fragment regex")
});

const JAVASCRIPT_SCHEME: &str = "javascript:";

/// Why a link is skipped. Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// `href=""`.
    EmptyHref,
    /// `href="#section"`.
    PageFragment,
    /// `href="https://host/path#section"`.
    AbsoluteWithFragment,
    /// `href="javascript:..."`, any case.
    JavascriptScheme,
    /// Anchor has an `onclick` handler.
    OnclickHandler,
    /// The site strategy vetoed it.
    Strategy,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::EmptyHref => "empty href",
            IgnoreReason::PageFragment => "page fragment",
            IgnoreReason::AbsoluteWithFragment => "absolute href with fragment",
            IgnoreReason::JavascriptScheme => "javascript: href",
            IgnoreReason::OnclickHandler => "onclick handler",
            IgnoreReason::Strategy => "site strategy",
        }
    }
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First rule that says `link` should be skipped, or `None` to process it.
pub fn ignore_reason(link: &LinkDescriptor, strategy: Option<&dyn Strategy>) -> Option<IgnoreReason> {
    let href = link.href.as_str();
    let reason = if href.is_empty() {
        IgnoreReason::EmptyHref
    } else if href.starts_with('#') {
        IgnoreReason::PageFragment
    } else if ABSOLUTE_WITH_FRAGMENT_PATTERN.is_match(href) {
        IgnoreReason::AbsoluteWithFragment
    } else if has_javascript_scheme(href) {
        IgnoreReason::JavascriptScheme
    } else if link.has_onclick {
        IgnoreReason::OnclickHandler
    } else if strategy.is_some_and(|s| s.should_ignore(link)) {
        IgnoreReason::Strategy
    } else {
        return None;
    };
    tracing::trace!(href, %reason, "ignoring link");
    Some(reason)
}

/// Whether `link` should be left alone entirely.
pub fn should_ignore(link: &LinkDescriptor, strategy: Option<&dyn Strategy>) -> bool {
    ignore_reason(link, strategy).is_some()
}

fn has_javascript_scheme(href: &str) -> bool {
    href.get(..JAVASCRIPT_SCHEME.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(JAVASCRIPT_SCHEME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str) -> LinkDescriptor {
        LinkDescriptor::resolve(href, "https://mochajs.org/")
    }

    #[test]
    fn empty_href() {
        assert_eq!(ignore_reason(&link(""), None), Some(IgnoreReason::EmptyHref));
    }

    #[test]
    fn page_fragment() {
        assert_eq!(ignore_reason(&link("#backers"), None), Some(IgnoreReason::PageFragment));
        assert_eq!(ignore_reason(&link("#"), None), Some(IgnoreReason::PageFragment));
    }

    #[test]
    fn absolute_with_fragment() {
        assert_eq!(
            ignore_reason(&link("https://mochajs.org/#backers"), None),
            Some(IgnoreReason::AbsoluteWithFragment)
        );
        assert_eq!(
            ignore_reason(&link("HTTP://example.org/a/b?c=d#section"), None),
            Some(IgnoreReason::AbsoluteWithFragment)
        );
    }

    #[test]
    fn absolute_with_empty_fragment_is_kept() {
        assert_eq!(ignore_reason(&link("https://example.org/#"), None), None);
    }

    #[test]
    fn relative_with_fragment_is_kept() {
        // Only scheme-qualified hrefs are checked for a trailing anchor.
        assert_eq!(ignore_reason(&link("/docs#api"), None), None);
    }

    #[test]
    fn javascript_scheme_any_case() {
        for href in ["javascript:void(0)", "JavaScript:alert(1)", "JAVASCRIPT:"] {
            assert_eq!(
                ignore_reason(&link(href), None),
                Some(IgnoreReason::JavascriptScheme),
                "{href}"
            );
        }
        assert_eq!(ignore_reason(&link("/javascript:"), None), None);
        assert_eq!(ignore_reason(&link("java"), None), None);
    }

    #[test]
    fn non_ascii_prefix_does_not_panic() {
        assert_eq!(ignore_reason(&link("/ñandú/página"), None), None);
    }

    #[test]
    fn plain_absolute_href_is_kept() {
        let href = "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Object/defineProperty";
        assert!(!should_ignore(&link(href), None));
    }

    #[test]
    fn onclick_always_ignored() {
        let l = link("http://www.google.com/").with_onclick(true);
        assert_eq!(ignore_reason(&l, None), Some(IgnoreReason::OnclickHandler));
    }

    #[test]
    fn display_names() {
        assert_eq!(IgnoreReason::OnclickHandler.to_string(), "onclick handler");
        assert_eq!(IgnoreReason::Strategy.to_string(), "site strategy");
    }
}
