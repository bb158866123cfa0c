//! Click and sleep-timer helpers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Modifier flags of a mouse click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Command on macOS, Windows/Super key elsewhere.
    pub meta_key: bool,
    pub alt_key: bool,
}

/// Which single modifier was held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    Command,
    Alt,
    /// No modifier, or both at once.
    #[default]
    None,
}

impl ModifierKey {
    /// `"command"`, `"alt"` or `""`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierKey::Command => "command",
            ModifierKey::Alt => "alt",
            ModifierKey::None => "",
        }
    }
}

impl std::fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exactly one of meta/alt held maps to that key; anything else is `None`.
pub fn key_held_during_click(event: &ClickEvent) -> ModifierKey {
    match (event.meta_key, event.alt_key) {
        (true, false) => ModifierKey::Command,
        (false, true) => ModifierKey::Alt,
        _ => ModifierKey::None,
    }
}

/// Whether a sleep that ends at `expiration_ms` is still running at `current_ms`.
pub fn is_sleep_timer_enabled(expiration_ms: u64, current_ms: u64) -> bool {
    expiration_ms > current_ms
}

/// Expiration timestamp for a sleep of `duration` starting at `now_ms`.
pub fn sleep_expiration(now_ms: u64, duration: Duration) -> u64 {
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    now_ms.saturating_add(millis)
}

/// Wall-clock milliseconds since the Unix epoch (0 if the clock is before it).
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_timer_is_strict() {
        let t = 1_700_000_000_000;
        assert!(is_sleep_timer_enabled(t + 1, t));
        assert!(is_sleep_timer_enabled(t + 30, t));
        assert!(!is_sleep_timer_enabled(t, t));
        assert!(!is_sleep_timer_enabled(t - 1, t));
        assert!(!is_sleep_timer_enabled(t - 30, t));
    }

    #[test]
    fn sleep_expiration_adds_duration() {
        let now = 1_000;
        let exp = sleep_expiration(now, Duration::from_secs(60));
        assert_eq!(exp, 61_000);
        assert!(is_sleep_timer_enabled(exp, now));
        assert!(!is_sleep_timer_enabled(exp, exp));
    }

    #[test]
    fn sleep_expiration_saturates() {
        assert_eq!(sleep_expiration(u64::MAX - 1, Duration::from_secs(1)), u64::MAX);
        assert_eq!(sleep_expiration(0, Duration::MAX), u64::MAX);
    }

    #[test]
    fn now_is_after_2020() {
        assert!(now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn modifier_keys() {
        let ev = |meta_key, alt_key| ClickEvent { meta_key, alt_key };
        assert_eq!(key_held_during_click(&ev(true, false)), ModifierKey::Command);
        assert_eq!(key_held_during_click(&ev(false, true)), ModifierKey::Alt);
        assert_eq!(key_held_during_click(&ev(false, false)), ModifierKey::None);
        assert_eq!(key_held_during_click(&ev(true, true)), ModifierKey::None);
    }

    #[test]
    fn modifier_strings() {
        assert_eq!(ModifierKey::Command.to_string(), "command");
        assert_eq!(ModifierKey::Alt.as_str(), "alt");
        assert_eq!(ModifierKey::None.as_str(), "");
        assert_eq!(ModifierKey::default(), ModifierKey::None);
    }
}
