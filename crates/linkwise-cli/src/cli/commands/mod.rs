//! CLI command handlers. Each command is in its own file for clarity.

mod classify;
mod completions;
mod modifier;
mod origin;
mod same_domain;
mod sites;
mod timer;

pub use classify::run_classify;
pub use completions::run_completions;
pub use modifier::run_modifier;
pub use origin::run_origin;
pub use same_domain::run_same_domain;
pub use sites::run_sites;
pub use timer::run_timer;
