//! `linkwise classify` – classify hrefs found on a page.

use anyhow::{Context, Result};
use linkwise_core::classify::{determine_anchor_type, ignore_reason, AnchorType};
use linkwise_core::origin::try_origin_of_url;
use linkwise_core::{LinkDescriptor, Strategy, StrategyRegistry};
use serde::Serialize;

use crate::cli::ClassifyArgs;

/// Result for one href, as printed.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Outcome {
    href: String,
    origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignored: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    anchor_type: Option<AnchorType>,
}

impl Outcome {
    fn decision(&self) -> String {
        match (self.ignored, self.anchor_type) {
            (Some(reason), _) => format!("ignore ({reason})"),
            (None, Some(anchor_type)) => anchor_type.to_string(),
            (None, None) => "-".to_string(),
        }
    }
}

fn classify_hrefs(
    page_url: &str,
    page_origin: &str,
    hrefs: &[String],
    onclick: bool,
    strategy: Option<&dyn Strategy>,
) -> Vec<Outcome> {
    hrefs
        .iter()
        .map(|href| {
            let link = LinkDescriptor::resolve(href.as_str(), page_url).with_onclick(onclick);
            let ignored = ignore_reason(&link, strategy);
            let anchor_type = match ignored {
                Some(_) => None,
                None => Some(determine_anchor_type(&link, page_origin, strategy)),
            };
            Outcome {
                ignored: ignored.map(|r| r.as_str()),
                anchor_type,
                href: link.href,
                origin: link.origin,
            }
        })
        .collect()
}

pub fn run_classify(registry: &StrategyRegistry, args: &ClassifyArgs) -> Result<()> {
    let page_origin = try_origin_of_url(&args.page)
        .with_context(|| format!("invalid page URL: {}", args.page))?;
    let strategy = if args.no_strategy {
        None
    } else {
        registry.for_page_url(&args.page)
    };
    tracing::debug!(
        page = %args.page,
        strategy = strategy.is_some(),
        links = args.hrefs.len(),
        "classifying"
    );

    let outcomes = classify_hrefs(&args.page, &page_origin, &args.hrefs, args.onclick, strategy);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("{}\t{}", outcome.href, outcome.decision());
        }
    }
    Ok(())
}
