//! Per-site link policies.
//!
//! A strategy answers three independent questions about a link: skip it
//! entirely, force it relative, or force it absolute. Each known site gets
//! its own zero-sized implementation; sites described in the config file
//! get a [`RuleStrategy`]. Strategies never hold mutable state, so one
//! instance serves every classification for the life of the process.
//!
//! Looking a strategy up is the caller's job (see
//! [`crate::registry::StrategyRegistry`]); the classifier only ever receives
//! an `Option<&dyn Strategy>`.

mod error;
mod rules;
mod sites;

pub use error::StrategyError;
pub use rules::RuleStrategy;
pub use sites::{GithubStrategy, GoogleStrategy, YahooStrategy};

use crate::link::LinkDescriptor;

/// Site-specific overrides for link classification.
///
/// Every predicate defaults to `false`, which defers to the generic rules.
pub trait Strategy: std::fmt::Debug + Send + Sync {
    /// Veto processing of this link on top of the generic ignore rules.
    fn should_ignore(&self, _link: &LinkDescriptor) -> bool {
        false
    }

    /// Treat the link as same-site regardless of its origin.
    fn should_treat_as_relative(&self, _link: &LinkDescriptor) -> bool {
        false
    }

    /// Treat the link as off-site regardless of its origin. Checked before
    /// [`Strategy::should_treat_as_relative`].
    fn should_treat_as_absolute(&self, _link: &LinkDescriptor) -> bool {
        false
    }
}
