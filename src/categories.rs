use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::info;

use crate::{model::load_locations, utils::fetch};

const SITE_URL: &str = "https://www.tacobell.com";

#[derive(Debug, PartialEq, Eq)]
struct Category {
    name: String,
    url: String,
    description: String,
}

pub fn main(locations: &Path, store: Option<String>) -> Result<()> {
    let store = match store {
        Some(x) => x,
        None => {
            load_locations(locations)?
                .into_iter()
                .next()
                .with_context(|| format!("No locations found in {}", locations.display()))?
                .store_number
        }
    };
    println!("\nStore ID: {store}\n");

    let url = format!("{SITE_URL}/food?store={store}");
    info!("Fetching menu from {url}");
    let html = fetch(&url)?;

    let categories = parse_categories(&html, &store)?;
    display(&categories, &mut io::stdout().lock())?;
    Ok(())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NextData {
    #[serde(default)]
    props: Props,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Props {
    #[serde(default)]
    page_props: PageProps,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageProps {
    #[serde(default)]
    product_categories: Vec<RawCategory>,
}

#[derive(Deserialize)]
struct RawCategory {
    label: Option<String>,
    slug: Option<String>,
    subtitle: Option<String>,
}

/// Reads the menu categories out of the page's embedded `__NEXT_DATA__` payload.
fn parse_categories(html: &str, store: &str) -> Result<Vec<Category>> {
    let selector = Selector::parse("script#__NEXT_DATA__").expect("hardcoded");
    let document = Html::parse_document(html);
    let script = document
        .select(&selector)
        .next()
        .context("Could not find __NEXT_DATA__ script tag")?;

    let payload: String = script.text().collect();
    let data: NextData =
        serde_json::from_str(&payload).context("Failed to parse __NEXT_DATA__ payload")?;

    Ok(data
        .props
        .page_props
        .product_categories
        .into_iter()
        .map(|x| {
            let url = match x.slug.as_deref() {
                Some(slug) if !slug.is_empty() => format!("{SITE_URL}{slug}?store={store}"),
                _ => String::new(),
            };
            Category {
                name: x.label.unwrap_or_else(|| "Unknown".to_string()),
                url,
                description: x.subtitle.unwrap_or_default(),
            }
        })
        .collect())
}

fn display<W: Write>(categories: &[Category], out: &mut W) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "No categories found");
    }

    let rule = "=".repeat(80);
    writeln!(out, "\n{rule}\nMENU CATEGORIES\n{rule}\n")?;
    for (i, category) in categories.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, category.name)?;
        writeln!(out, "   Description: {}", category.description)?;
        writeln!(out, "   URL: {}\n", category.url)?;
    }
    writeln!(out, "{rule}\nTotal categories: {}\n{rule}", categories.len())
}
