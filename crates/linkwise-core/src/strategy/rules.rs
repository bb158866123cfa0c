//! Strategies described by href patterns in the config file.

use regex::{Regex, RegexBuilder};

use super::{Strategy, StrategyError};
use crate::config::SiteRule;
use crate::link::LinkDescriptor;

/// Strategy whose predicates are lists of case-insensitive href patterns.
///
/// A predicate is true iff any of its patterns matches the full href; an
/// empty list is always false.
#[derive(Debug, Clone)]
pub struct RuleStrategy {
    site: String,
    ignore: Vec<Regex>,
    relative: Vec<Regex>,
    absolute: Vec<Regex>,
}

impl RuleStrategy {
    /// Compiles every pattern of `rule`. Fails on the first invalid pattern.
    pub fn from_rule(rule: &SiteRule) -> Result<Self, StrategyError> {
        let site = rule.site.trim().to_ascii_lowercase();
        if site.is_empty() {
            return Err(StrategyError::EmptySite);
        }
        Ok(Self {
            ignore: compile(&site, &rule.ignore)?,
            relative: compile(&site, &rule.relative)?,
            absolute: compile(&site, &rule.absolute)?,
            site,
        })
    }

    /// Normalized site identity this strategy was built for.
    pub fn site(&self) -> &str {
        &self.site
    }
}

fn compile(site: &str, patterns: &[String]) -> Result<Vec<Regex>, StrategyError> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| StrategyError::InvalidPattern {
                    site: site.to_string(),
                    pattern: pattern.clone(),
                    source,
                })
        })
        .collect()
}

fn any_match(patterns: &[Regex], href: &str) -> bool {
    patterns.iter().any(|p| p.is_match(href))
}

impl Strategy for RuleStrategy {
    fn should_ignore(&self, link: &LinkDescriptor) -> bool {
        any_match(&self.ignore, &link.href)
    }

    fn should_treat_as_relative(&self, link: &LinkDescriptor) -> bool {
        any_match(&self.relative, &link.href)
    }

    fn should_treat_as_absolute(&self, link: &LinkDescriptor) -> bool {
        any_match(&self.absolute, &link.href)
    }
}
