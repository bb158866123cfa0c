//! Link classification.
//!
//! Two decisions are made per anchor, in this order:
//! - whether to ignore it at all ([`should_ignore`]), and
//! - if not, whether it is [`AnchorType::Relative`] (same site as the page)
//!   or [`AnchorType::Absolute`] ([`determine_anchor_type`]).
//!
//! A site [`Strategy`] may override either decision. Both functions are total:
//! malformed input degrades to "ignore" or "absolute", never to an error.

mod ignore;

pub use ignore::{ignore_reason, should_ignore, IgnoreReason};

use serde::{Deserialize, Serialize};

use crate::link::LinkDescriptor;
use crate::origin::has_same_domain;
use crate::strategy::Strategy;

/// How a non-ignored link should be handled downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorType {
    /// Points at the same site as the page.
    Relative,
    /// Points somewhere else.
    Absolute,
}

impl AnchorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorType::Relative => "relative",
            AnchorType::Absolute => "absolute",
        }
    }
}

impl std::fmt::Display for AnchorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `link` relative to the page at `page_origin`.
///
/// Strategy overrides come first, absolute before relative; otherwise the
/// link is relative iff its origin shares a base domain with the page.
pub fn determine_anchor_type(
    link: &LinkDescriptor,
    page_origin: &str,
    strategy: Option<&dyn Strategy>,
) -> AnchorType {
    if let Some(strategy) = strategy {
        if strategy.should_treat_as_absolute(link) {
            tracing::trace!(href = %link.href, "strategy forces absolute");
            return AnchorType::Absolute;
        }
        if strategy.should_treat_as_relative(link) {
            tracing::trace!(href = %link.href, "strategy forces relative");
            return AnchorType::Relative;
        }
    }

    if has_same_domain(&link.origin, page_origin) {
        AnchorType::Relative
    } else {
        AnchorType::Absolute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strategy with fixed answers.
    #[derive(Debug)]
    struct Fixed {
        relative: bool,
        absolute: bool,
    }

    impl Strategy for Fixed {
        fn should_treat_as_relative(&self, _link: &LinkDescriptor) -> bool {
            self.relative
        }

        fn should_treat_as_absolute(&self, _link: &LinkDescriptor) -> bool {
            self.absolute
        }
    }

    fn drive_link() -> LinkDescriptor {
        LinkDescriptor::new("http://drive.google.com/file/1", "http://drive.google.com")
    }

    #[test]
    fn same_base_domain_is_relative() {
        assert_eq!(
            determine_anchor_type(&drive_link(), "http://google.com", None),
            AnchorType::Relative
        );
    }

    #[test]
    fn different_base_domain_is_absolute() {
        assert_eq!(
            determine_anchor_type(&drive_link(), "https://www.yahoo.com/", None),
            AnchorType::Absolute
        );
    }

    #[test]
    fn missing_origin_is_absolute() {
        let link = LinkDescriptor::new("mailto:me@example.com", "");
        assert_eq!(
            determine_anchor_type(&link, "https://example.com", None),
            AnchorType::Absolute
        );
        assert_eq!(
            determine_anchor_type(&drive_link(), "", None),
            AnchorType::Absolute
        );
    }

    #[test]
    fn strategy_absolute_overrides_domain_match() {
        let s = Fixed { relative: false, absolute: true };
        assert_eq!(
            determine_anchor_type(&drive_link(), "http://google.com", Some(&s)),
            AnchorType::Absolute
        );
    }

    #[test]
    fn strategy_relative_overrides_domain_mismatch() {
        let s = Fixed { relative: true, absolute: false };
        assert_eq!(
            determine_anchor_type(&drive_link(), "https://www.yahoo.com/", Some(&s)),
            AnchorType::Relative
        );
    }

    #[test]
    fn absolute_wins_when_strategy_says_both() {
        let s = Fixed { relative: true, absolute: true };
        assert_eq!(
            determine_anchor_type(&drive_link(), "http://google.com", Some(&s)),
            AnchorType::Absolute
        );
    }

    #[test]
    fn strategy_without_opinion_falls_back_to_domains() {
        let s = Fixed { relative: false, absolute: false };
        assert_eq!(
            determine_anchor_type(&drive_link(), "http://google.com", Some(&s)),
            AnchorType::Relative
        );
        assert_eq!(
            determine_anchor_type(&drive_link(), "https://www.yahoo.com/", Some(&s)),
            AnchorType::Absolute
        );
    }

    #[test]
    fn anchor_type_string_forms() {
        assert_eq!(AnchorType::Relative.to_string(), "relative");
        assert_eq!(AnchorType::Absolute.as_str(), "absolute");
    }
}
