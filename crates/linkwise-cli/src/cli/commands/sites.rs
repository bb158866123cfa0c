//! `linkwise sites` – list sites with a registered strategy.

use anyhow::Result;
use linkwise_core::StrategyRegistry;

pub fn run_sites(registry: &StrategyRegistry) -> Result<()> {
    if registry.is_empty() {
        println!("No site strategies registered.");
    } else {
        for site in registry.sites() {
            println!("{site}");
        }
    }
    Ok(())
}
