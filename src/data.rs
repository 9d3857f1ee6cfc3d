//! Core row type produced by the cleaning pipeline, plus the typed field
//! selectors the query layer accepts.

use serde::Serialize;

/// One cleaned listing row. Built once per load and never mutated; query
/// operations derive fresh copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub restaurant_id: i64,
    pub restaurant_name: String,
    /// Country display name mapped from the export's numeric code.
    pub country: String,
    pub city: String,
    /// First label of the export's comma-joined cuisine list.
    pub cuisine: String,
    /// Price for two in the restaurant's local currency.
    pub average_cost_for_two: f64,
    pub currency: String,
    /// Price for two converted to USD; absent when the currency has no
    /// exchange rate. Rows with an absent amount are retained.
    pub amount_usd: Option<f64>,
    pub rating_color: String,
    pub color_name: String,
    pub aggregate_rating: f64,
    pub rating_text: String,
    pub votes: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Categorical fields usable as filter and grouping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyField {
    Country,
    City,
    Cuisine,
}

impl KeyField {
    pub fn value_of<'a>(&self, row: &'a Restaurant) -> &'a str {
        match self {
            KeyField::Country => &row.country,
            KeyField::City => &row.city,
            KeyField::Cuisine => &row.cuisine,
        }
    }
}

/// Numeric fields usable as sort keys and aggregation measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Votes,
    AggregateRating,
    AmountUsd,
}

impl NumericField {
    /// `None` only for an absent converted amount; aggregations skip
    /// absent values rather than fail.
    pub fn value_of(&self, row: &Restaurant) -> Option<f64> {
        match self {
            NumericField::Votes => Some(row.votes as f64),
            NumericField::AggregateRating => Some(row.aggregate_rating),
            NumericField::AmountUsd => row.amount_usd,
        }
    }
}

/// Fields whose per-group distinct counts drive the dashboard rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctField {
    RestaurantId,
    City,
    Cuisine,
}

impl DistinctField {
    pub fn value_of(&self, row: &Restaurant) -> String {
        match self {
            DistinctField::RestaurantId => row.restaurant_id.to_string(),
            DistinctField::City => row.city.clone(),
            DistinctField::Cuisine => row.cuisine.clone(),
        }
    }
}
