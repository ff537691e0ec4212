use std::sync::LazyLock;

use regex::Regex;
use typed_floats::tf64::NonNaNFinite;

use crate::MenuRecord;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+(?:\.\d+)?)").expect("hardcoded"));

/// Price tag of the first item named exactly `product`, in category then item order.
pub fn find_price<'a>(menu: &'a MenuRecord, product: &str) -> Option<&'a str> {
    menu.categories
        .values()
        .flatten()
        .find(|x| x.name.as_deref() == Some(product))
        .map(|x| x.price.as_str())
}

/// First amount in a price tag, e.g. `12.5` from `"Price: $12.50 each"`.
/// Amounts too long to fit a finite `f64` count as no price.
pub fn parse_price(text: &str) -> Option<NonNaNFinite> {
    let digits = PRICE_RE.captures(text)?.get(1)?.as_str();
    NonNaNFinite::new(digits.parse().ok()?).ok()
}
