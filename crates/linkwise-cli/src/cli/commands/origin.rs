//! `linkwise origin` – print scheme://host of a URL.

use anyhow::Result;
use linkwise_core::origin::try_origin_of_url;

pub fn run_origin(url: &str) -> Result<()> {
    let origin = try_origin_of_url(url)?;
    println!("{origin}");
    Ok(())
}
