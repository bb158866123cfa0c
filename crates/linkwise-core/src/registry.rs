//! Site identity → strategy lookup.
//!
//! The registry is built once (from the built-ins and the config file) and
//! is read-only afterwards, so a shared reference can be handed to any
//! number of classification calls.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::config::LinkwiseConfig;
use crate::origin::site_identity;
use crate::strategy::{GithubStrategy, GoogleStrategy, RuleStrategy, Strategy, YahooStrategy};

/// Immutable map from site identity (e.g. "github.com") to its strategy.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Registry with no strategies; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the built-in site strategies.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert(GithubStrategy::SITE, Box::new(GithubStrategy));
        registry.insert(GoogleStrategy::SITE, Box::new(GoogleStrategy));
        registry.insert(YahooStrategy::SITE, Box::new(YahooStrategy));
        registry
    }

    /// Built-ins (unless disabled) plus every configured site rule.
    ///
    /// A configured rule for a built-in site replaces the built-in.
    pub fn from_config(cfg: &LinkwiseConfig) -> Result<Self> {
        let mut registry = if cfg.builtin_strategies {
            Self::builtin()
        } else {
            Self::empty()
        };
        for rule in &cfg.sites {
            let strategy = RuleStrategy::from_rule(rule)
                .with_context(|| format!("invalid site rule for {:?}", rule.site))?;
            let site = strategy.site().to_string();
            if registry.strategies.contains_key(&site) {
                tracing::debug!(%site, "configured rule replaces registered strategy");
            }
            registry.insert(&site, Box::new(strategy));
        }
        tracing::debug!(sites = registry.strategies.len(), "strategy registry built");
        Ok(registry)
    }

    fn insert(&mut self, site: &str, strategy: Box<dyn Strategy>) {
        self.strategies.insert(site.to_string(), strategy);
    }

    /// Exact lookup by site identity.
    pub fn get(&self, site: &str) -> Option<&dyn Strategy> {
        self.strategies.get(site).map(|s| s.as_ref())
    }

    /// Lookup by the site identity of a page URL (host without leading `www.`).
    pub fn for_page_url(&self, page_url: &str) -> Option<&dyn Strategy> {
        let site = site_identity(page_url)?;
        self.get(&site)
    }

    /// Registered site identities, sorted.
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        sites.sort_unstable();
        sites
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
