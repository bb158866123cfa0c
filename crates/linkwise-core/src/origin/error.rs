//! Error type for origin extraction.

/// Why a URL could not be reduced to an origin.
#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    /// The string is not an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Parsed, but there is no host to build an origin from (e.g. `mailto:`).
    #[error("URL has no host: {0}")]
    MissingHost(String),
}
