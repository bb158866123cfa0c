//! `linkwise modifier` – map held keys to the click modifier.

use anyhow::Result;
use linkwise_core::{key_held_during_click, ClickEvent};

pub fn run_modifier(meta_key: bool, alt_key: bool) -> Result<()> {
    let key = key_held_during_click(&ClickEvent { meta_key, alt_key });
    println!("{key}");
    Ok(())
}
