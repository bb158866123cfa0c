//! `linkwise same-domain` – compare base domains of two URLs.

use anyhow::Result;
use linkwise_core::origin::has_same_domain;

pub fn run_same_domain(a: &str, b: &str) -> Result<()> {
    println!("{}", has_same_domain(a, b));
    Ok(())
}
