//! Pure filter and aggregation operations over cleaned rows.
//!
//! Every operation takes a shared slice and returns fresh values; the
//! canonical collection is never mutated, so one loaded dataset can back
//! any number of concurrent read-only views. Empty results are ordinary
//! values: filters return empty vectors and [`best_of_cuisine`] returns
//! `None` when nothing matches.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use serde::Serialize;

use crate::data::{DistinctField, KeyField, NumericField, Restaurant};

/// Rows whose `field` value is a member of `allowed`. Set semantics: an
/// empty `allowed` set yields an empty result.
pub fn filter_by(
    rows: &[Restaurant],
    field: KeyField,
    allowed: &HashSet<String>,
) -> Vec<Restaurant> {
    rows.iter()
        .filter(|row| allowed.contains(field.value_of(row)))
        .cloned()
        .collect()
}

pub fn count_distinct(rows: &[Restaurant], field: KeyField) -> usize {
    rows.iter().map(|row| field.value_of(row)).unique().count()
}

/// Sum of a numeric field; absent values are skipped.
pub fn sum(rows: &[Restaurant], field: NumericField) -> f64 {
    rows.iter().filter_map(|row| field.value_of(row)).sum()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateOp {
    /// Number of rows in the group.
    Count,
    /// Number of distinct values of a field within the group.
    CountDistinct(DistinctField),
    /// Mean of a numeric field; absent values are skipped.
    Mean(NumericField),
    /// Sum of a numeric field; absent values are skipped.
    Sum(NumericField),
}

/// One output row of [`group_aggregate`]: the group's key values in
/// grouping order plus the aggregated measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub keys: Vec<String>,
    pub value: f64,
}

/// Groups rows by one or more key fields and aggregates a measure per
/// group, sorted by measure. The sort is stable and groups enter in
/// first-seen row order, so ties rank deterministically.
pub fn group_aggregate(
    rows: &[Restaurant],
    group: &[KeyField],
    op: AggregateOp,
    descending: bool,
) -> Vec<GroupRow> {
    let mut slots: HashMap<Vec<String>, usize> = HashMap::new();
    let mut accumulators: Vec<(Vec<String>, Accumulator)> = Vec::new();

    for row in rows {
        let keys: Vec<String> = group
            .iter()
            .map(|field| field.value_of(row).to_string())
            .collect();
        let slot = *slots.entry(keys).or_insert_with_key(|keys| {
            accumulators.push((keys.clone(), Accumulator::new(op)));
            accumulators.len() - 1
        });
        accumulators[slot].1.add(row);
    }

    let mut out: Vec<GroupRow> = accumulators
        .into_iter()
        .map(|(keys, acc)| GroupRow {
            keys,
            value: acc.finish(),
        })
        .collect();
    out.sort_by(|a, b| compare_measures(a.value, b.value, descending));
    out
}

/// Ranks measures in the requested direction. Groups with an undefined
/// measure (no observed values) always sort last.
fn compare_measures(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.total_cmp(&a),
        (false, false) => a.total_cmp(&b),
    }
}

enum Accumulator {
    Count(usize),
    Distinct(DistinctField, HashSet<String>),
    Mean(NumericField, f64, usize),
    Sum(NumericField, f64),
}

impl Accumulator {
    fn new(op: AggregateOp) -> Self {
        match op {
            AggregateOp::Count => Accumulator::Count(0),
            AggregateOp::CountDistinct(field) => Accumulator::Distinct(field, HashSet::new()),
            AggregateOp::Mean(field) => Accumulator::Mean(field, 0.0, 0),
            AggregateOp::Sum(field) => Accumulator::Sum(field, 0.0),
        }
    }

    fn add(&mut self, row: &Restaurant) {
        match self {
            Accumulator::Count(count) => *count += 1,
            Accumulator::Distinct(field, values) => {
                values.insert(field.value_of(row));
            }
            Accumulator::Mean(field, total, count) => {
                if let Some(value) = field.value_of(row) {
                    *total += value;
                    *count += 1;
                }
            }
            Accumulator::Sum(field, total) => {
                if let Some(value) = field.value_of(row) {
                    *total += value;
                }
            }
        }
    }

    fn finish(&self) -> f64 {
        match self {
            Accumulator::Count(count) => *count as f64,
            Accumulator::Distinct(_, values) => values.len() as f64,
            Accumulator::Mean(_, total, count) => {
                if *count == 0 {
                    f64::NAN
                } else {
                    total / *count as f64
                }
            }
            Accumulator::Sum(_, total) => *total,
        }
    }
}

/// First `n` rows after a stable sort on `sort_key`. Rows with an absent
/// sort value land last in either direction; any `n` is accepted and
/// fewer rows come back when fewer exist.
pub fn top_n(
    rows: &[Restaurant],
    sort_key: NumericField,
    n: usize,
    ascending: bool,
) -> Vec<Restaurant> {
    let mut sorted: Vec<Restaurant> = rows.to_vec();
    sorted.sort_by(|a, b| match (sort_key.value_of(a), sort_key.value_of(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) if ascending => left.total_cmp(&right),
        (Some(left), Some(right)) => right.total_cmp(&left),
    });
    sorted.truncate(n);
    sorted
}

/// Best restaurant within one cuisine: the matching rows fold per
/// restaurant name into column-wise maxima, then the top-rated entry
/// wins (first-seen name on rating ties).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisineChampion {
    pub restaurant_name: String,
    pub aggregate_rating: f64,
    pub country: String,
    pub amount_usd: Option<f64>,
    pub city: String,
}

/// `None` when the cuisine has no rows under the current filters; callers
/// branch on the empty case instead of indexing into an empty table.
pub fn best_of_cuisine(rows: &[Restaurant], cuisine: &str) -> Option<CuisineChampion> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut champions: Vec<CuisineChampion> = Vec::new();

    for row in rows.iter().filter(|row| row.cuisine == cuisine) {
        match slots.get(row.restaurant_name.as_str()) {
            Some(&slot) => {
                let entry = &mut champions[slot];
                entry.aggregate_rating = entry.aggregate_rating.max(row.aggregate_rating);
                entry.amount_usd = match (entry.amount_usd, row.amount_usd) {
                    (Some(current), Some(candidate)) => Some(current.max(candidate)),
                    (current, candidate) => current.or(candidate),
                };
                if row.country > entry.country {
                    entry.country = row.country.clone();
                }
                if row.city > entry.city {
                    entry.city = row.city.clone();
                }
            }
            None => {
                slots.insert(row.restaurant_name.as_str(), champions.len());
                champions.push(CuisineChampion {
                    restaurant_name: row.restaurant_name.clone(),
                    aggregate_rating: row.aggregate_rating,
                    country: row.country.clone(),
                    amount_usd: row.amount_usd,
                    city: row.city.clone(),
                });
            }
        }
    }

    champions.into_iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.aggregate_rating <= current.aggregate_rating => Some(current),
        _ => Some(candidate),
    })
}
