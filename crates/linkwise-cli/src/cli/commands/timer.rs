//! `linkwise timer` – check or start a sleep timer.

use anyhow::Result;
use linkwise_core::interaction::{is_sleep_timer_enabled, now_ms, sleep_expiration};
use std::time::Duration;

/// With an expiration, prints whether the sleep is still running; without
/// one, prints the expiration of a new sleep of `minutes`.
pub fn run_timer(expiration: Option<u64>, now: Option<u64>, minutes: u64) -> Result<()> {
    let now = now.unwrap_or_else(now_ms);
    match expiration {
        Some(expiration) => {
            let state = if is_sleep_timer_enabled(expiration, now) {
                "enabled"
            } else {
                "disabled"
            };
            println!("{state}");
        }
        None => {
            let sleep = Duration::from_secs(minutes.saturating_mul(60));
            let expiration = sleep_expiration(now, sleep);
            tracing::debug!(now, minutes, expiration, "new sleep timer");
            println!("{expiration}");
        }
    }
    Ok(())
}
