use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::info;

use crate::utils::{fetch, write_json};

const DIRECTORY_URL: &str = "https://locations.tacobell.com/";
pub const OUTPUT_PATH: &str = "states.json";

pub fn main(output: &Path) -> Result<()> {
    info!("Fetching state directory from {DIRECTORY_URL}");
    let html = fetch(DIRECTORY_URL)?;

    let states = parse_directory(&html);
    info!("Found {} states", states.len());

    write_json(output, &states)?;
    info!("Saved {}", output.display());
    Ok(())
}

/// Maps each state's display name to its directory page.
fn parse_directory(html: &str) -> BTreeMap<String, String> {
    let container = Selector::parse("div.directory-container").expect("hardcoded");
    let links = Selector::parse("a.DirLinks").expect("hardcoded");

    let document = Html::parse_document(html);
    let mut states = BTreeMap::new();
    if let Some(container) = document.select(&container).next() {
        for link in container.select(&links) {
            let name: String = link.text().map(str::trim).collect();
            let href = link.value().attr("href").unwrap_or_default();
            states.insert(name, format!("{DIRECTORY_URL}{href}"));
        }
    }
    states
}
