use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use geo::{BoundingRect, MultiPoint, Point};
use itertools::{Itertools, MinMaxResult};
use tracing::info;

use crate::{
    model::{load_locations, LOCATIONS_PATH},
    utils::{progress_bar, write_json},
    HeatmapEntry, LocationRecord, Region,
};

mod menus;
mod price;

const MENU_DIR: &str = "Menu";
const OUTPUT_PATH: &str = "Data/florida_luxe_heatmap.json";
const PRODUCT: &str = "Classic Luxe Box";

#[derive(Debug, clap::Args)]
pub struct HeatmapArgs {
    /// JSON array of store locations
    #[arg(long, default_value = LOCATIONS_PATH)]
    pub locations: PathBuf,
    /// Directory of `<region>_<store>_menu.json` files
    #[arg(long, default_value = MENU_DIR)]
    pub menus: PathBuf,
    #[arg(long, default_value = OUTPUT_PATH)]
    pub output: PathBuf,
    #[arg(long, default_value = "FL")]
    pub region: Region,
    /// Exact menu item name to price
    #[arg(long, default_value = PRODUCT)]
    pub product: String,
}

#[derive(Debug, Default)]
pub struct Heatmap {
    pub entries: Vec<HeatmapEntry>,
    pub skipped: Skipped,
}

/// Stores in the region that produced no entry, by reason.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Skipped {
    pub no_menu: usize,
    pub bad_menu: usize,
    pub no_product: usize,
    pub no_price: usize,
    pub no_coordinates: usize,
}

pub fn main(args: &HeatmapArgs) -> Result<()> {
    run(args, &mut io::stdout().lock())?;
    Ok(())
}

fn run<W: Write>(args: &HeatmapArgs, out: &mut W) -> Result<Heatmap> {
    info!("Loading locations from {}", args.locations.display());
    let locations = load_locations(&args.locations)?;

    let heatmap = build(&locations, args, out)?;
    summarize(&heatmap, &args.product, out)?;

    write_json(&args.output, &heatmap.entries)?;
    writeln!(out, "\nSaved heatmap data to {}", args.output.display())?;

    Ok(heatmap)
}

fn build<W: Write>(
    locations: &[LocationRecord],
    args: &HeatmapArgs,
    out: &mut W,
) -> Result<Heatmap> {
    let stores: Vec<_> = args.region.filter(locations).collect();
    writeln!(out, "Found {} {} locations", stores.len(), args.region)?;

    let pb = progress_bar(stores.len() as u64);
    let mut heatmap = Heatmap::default();
    for location in stores {
        pb.inc(1);
        let store = &location.store_number;
        let path = menus::menu_path(&args.menus, args.region, store);

        let menu = match menus::load(&path, store) {
            Ok(Some(x)) => x,
            Ok(None) => {
                heatmap.skipped.no_menu += 1;
                continue;
            }
            Err(e) => {
                pb.suspend(|| writeln!(out, "Error processing {}: {e}", e.path().display()))?;
                heatmap.skipped.bad_menu += 1;
                continue;
            }
        };

        let Some(text) = price::find_price(&menu, &args.product) else {
            heatmap.skipped.no_product += 1;
            continue;
        };
        let Some(price) = price::parse_price(text) else {
            heatmap.skipped.no_price += 1;
            continue;
        };

        let Some(entry) = HeatmapEntry::new(location, price) else {
            heatmap.skipped.no_coordinates += 1;
            continue;
        };

        pb.suspend(|| writeln!(out, "Store {store}: ${:.2}", price.get()))?;
        heatmap.entries.push(entry);
    }
    pb.finish_and_clear();

    Ok(heatmap)
}

fn summarize<W: Write>(heatmap: &Heatmap, product: &str, out: &mut W) -> Result<()> {
    let entries = &heatmap.entries;
    let skipped = &heatmap.skipped;

    writeln!(out, "\nTotal stores with {product} pricing: {}", entries.len())?;
    writeln!(
        out,
        "Skipped: {} without a menu, {} unreadable menus, {} without {product}, {} without a price, {} without coordinates",
        skipped.no_menu,
        skipped.bad_menu,
        skipped.no_product,
        skipped.no_price,
        skipped.no_coordinates
    )?;

    let (min, max) = match entries.iter().map(|x| x.price).minmax() {
        MinMaxResult::NoElements => return Ok(()),
        MinMaxResult::OneElement(x) => (x, x),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    writeln!(out, "Price range: ${:.2} - ${:.2}", min.get(), max.get())?;

    let points: MultiPoint = entries.iter().map(|x| Point::new(x.lng, x.lat)).collect();
    if let Some(rect) = points.bounding_rect() {
        writeln!(
            out,
            "Bounds: ({:.4}, {:.4}) - ({:.4}, {:.4})",
            rect.min().y,
            rect.min().x,
            rect.max().y,
            rect.max().x
        )?;
    }

    Ok(())
}
