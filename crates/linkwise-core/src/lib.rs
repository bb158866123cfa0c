pub mod config;
pub mod logging;

pub mod classify;
pub mod interaction;
pub mod link;
pub mod origin;
pub mod registry;
pub mod strategy;

pub use classify::{determine_anchor_type, should_ignore, AnchorType};
pub use interaction::{is_sleep_timer_enabled, key_held_during_click, ClickEvent, ModifierKey};
pub use link::LinkDescriptor;
pub use origin::{get_origin_of_url, has_same_domain};
pub use registry::StrategyRegistry;
pub use strategy::Strategy;
