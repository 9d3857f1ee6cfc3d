//! The cleaning pipeline: reference lookups and USD derivation, then the
//! row drops (incomplete, exact duplicate, sentinel outlier) and the
//! first-cuisine simplification.
//!
//! Step order matters. Lookups run against every raw row before the
//! completeness check, so an unmapped country code or rating color aborts
//! the whole load even when the offending row would have been dropped
//! later. Duplicate detection keys on the full decoded input record and
//! therefore runs before the cuisine list is cut down to its first label.

use std::collections::HashSet;

use anyhow::{Context, Result};

use crate::{data::Restaurant, dataset::ColumnMap, reference};

/// Converted price known to be corrupt in the source export; rows carrying
/// it are dropped unconditionally.
pub const OUTLIER_AMOUNT_USD: f64 = 25_000_017.0;

const CUISINE_SEPARATOR: char = ',';

/// Per-load drop counters, reported for logging only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanCounts {
    pub read: usize,
    pub incomplete: usize,
    pub duplicate: usize,
    pub outlier: usize,
}

pub fn clean(
    records: &[Vec<String>],
    columns: &ColumnMap,
) -> Result<(Vec<Restaurant>, CleanCounts)> {
    let mut counts = CleanCounts::default();
    let mut seen: HashSet<&Vec<String>> = HashSet::new();
    let mut rows = Vec::new();

    for (row_idx, record) in records.iter().enumerate() {
        counts.read += 1;
        let derived =
            derive_row(record, columns).with_context(|| format!("Row {}", row_idx + 2))?;

        let Some(row) = derived else {
            counts.incomplete += 1;
            continue;
        };
        if !seen.insert(record) {
            counts.duplicate += 1;
            continue;
        }
        if row.amount_usd == Some(OUTLIER_AMOUNT_USD) {
            counts.outlier += 1;
            continue;
        }
        rows.push(row);
    }
    Ok((rows, counts))
}

/// Derives one cleaned row, or `None` when the record is incomplete or
/// malformed and must be dropped silently. Reference-table misses on
/// non-empty fields are errors, not drops.
fn derive_row(record: &[String], columns: &ColumnMap) -> Result<Option<Restaurant>> {
    let field = |idx: usize| record.get(idx).map(|s| s.as_str()).unwrap_or("");

    let country = match field(columns.country_code) {
        "" => None,
        raw => match raw.trim().parse::<i64>() {
            Ok(code) => Some(reference::country_of(code)?),
            // A non-integral code is a malformed row, not a table gap.
            Err(_) => None,
        },
    };

    let color_name = match field(columns.rating_color) {
        "" => None,
        raw => Some(reference::color_name_of(raw)?),
    };

    let average_cost_for_two = parse_f64(field(columns.average_cost_for_two));
    let currency = field(columns.currency);
    let amount_usd = match (average_cost_for_two, reference::usd_rate_of(currency)) {
        (Some(cost), Some(rate)) => Some(cost * rate),
        _ => None,
    };

    let restaurant_name = field(columns.restaurant_name);
    let city = field(columns.city);
    let cuisines = field(columns.cuisines);
    let rating_text = field(columns.rating_text);

    let (Some(country), Some(color_name)) = (country, color_name) else {
        return Ok(None);
    };
    if restaurant_name.is_empty()
        || city.is_empty()
        || cuisines.is_empty()
        || currency.is_empty()
        || rating_text.is_empty()
    {
        return Ok(None);
    }
    let (
        Some(restaurant_id),
        Some(average_cost_for_two),
        Some(aggregate_rating),
        Some(votes),
        Some(latitude),
        Some(longitude),
    ) = (
        parse_i64(field(columns.restaurant_id)),
        average_cost_for_two,
        parse_f64(field(columns.aggregate_rating)),
        parse_i64(field(columns.votes)),
        parse_f64(field(columns.latitude)),
        parse_f64(field(columns.longitude)),
    )
    else {
        return Ok(None);
    };

    let cuisine = cuisines
        .split(CUISINE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string();

    Ok(Some(Restaurant {
        restaurant_id,
        restaurant_name: restaurant_name.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        cuisine,
        average_cost_for_two,
        currency: currency.to_string(),
        amount_usd,
        rating_color: field(columns.rating_color).to_string(),
        color_name: color_name.to_string(),
        aggregate_rating,
        rating_text: rating_text.to_string(),
        votes,
        latitude,
        longitude,
    }))
}

fn parse_i64(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

fn parse_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}
