//! Built-in strategies for known sites.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Strategy;
use crate::link::LinkDescriptor;

static RAW_SEGMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/raw/").expect("Failed to compile raw segment regex"));

/// `github.com`: raw file links are served from another host, always absolute.
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubStrategy;

impl GithubStrategy {
    pub const SITE: &'static str = "github.com";
}

impl Strategy for GithubStrategy {
    fn should_treat_as_absolute(&self, link: &LinkDescriptor) -> bool {
        RAW_SEGMENT_PATTERN.is_match(&link.href)
    }
}

/// `google.com`: subdomains already compare equal; no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleStrategy;

impl GoogleStrategy {
    pub const SITE: &'static str = "google.com";
}

impl Strategy for GoogleStrategy {}

/// `yahoo.com`: subdomains already compare equal; no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct YahooStrategy;

impl YahooStrategy {
    pub const SITE: &'static str = "yahoo.com";
}

impl Strategy for YahooStrategy {}
