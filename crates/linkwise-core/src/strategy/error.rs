//! Errors raised while building strategies from configuration.

/// A configured site rule could not be turned into a strategy.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("site rule has an empty site identity")]
    EmptySite,
    #[error("site {site}: invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        site: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
