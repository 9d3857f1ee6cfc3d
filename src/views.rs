//! Dashboard view compositions.
//!
//! One function per chart or metric block of the dashboard, each a thin
//! parametrization of the query layer. Outputs are plain serializable
//! tables and records the presentation layer renders directly; nothing
//! here touches a terminal or a chart library.

use serde::Serialize;

use crate::{
    data::{DistinctField, KeyField, NumericField, Restaurant},
    query::{self, AggregateOp, CuisineChampion, GroupRow},
};

/// Cuisines highlighted on the dashboard's headline metric row.
pub const FEATURED_CUISINES: &[&str] = &["Indian", "American", "Cafe", "Italian", "Pizza"];

/// Catch-all cuisine bucket. Excluded from the best-rated ranking but
/// kept in the worst-rated one.
pub const CATCH_ALL_CUISINE: &str = "Others";

/// Row-level vote floor applied before ranking the best-rated cuisines.
pub const BEST_CUISINE_VOTE_FLOOR: i64 = 100;

/// Mean-rating floor for the worst-rated ranking; unrated buckets fall out.
pub const WORST_CUISINE_RATING_FLOOR: f64 = 1.0;

const HIGH_RATING_FLOOR: f64 = 4.0;
const LOW_RATING_CEILING: f64 = 2.5;
const CITY_RANKING_SIZE: usize = 10;
const RATED_CITY_RANKING_SIZE: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewMetrics {
    pub restaurants: usize,
    pub countries: usize,
    pub cities: usize,
    pub total_votes: i64,
    pub cuisines: usize,
}

pub fn overview(rows: &[Restaurant]) -> OverviewMetrics {
    OverviewMetrics {
        restaurants: rows.len(),
        countries: query::count_distinct(rows, KeyField::Country),
        cities: query::count_distinct(rows, KeyField::City),
        total_votes: query::sum(rows, NumericField::Votes) as i64,
        cuisines: query::count_distinct(rows, KeyField::Cuisine),
    }
}

/// Per-country breakdowns, each sorted descending by its measure.
#[derive(Debug, Clone, Serialize)]
pub struct CountryReport {
    pub restaurants: Vec<GroupRow>,
    pub cities: Vec<GroupRow>,
    pub mean_votes: Vec<GroupRow>,
    pub mean_cost_usd: Vec<GroupRow>,
}

pub fn country_report(rows: &[Restaurant]) -> CountryReport {
    let by_country = [KeyField::Country];
    CountryReport {
        restaurants: query::group_aggregate(
            rows,
            &by_country,
            AggregateOp::CountDistinct(DistinctField::RestaurantId),
            true,
        ),
        cities: query::group_aggregate(
            rows,
            &by_country,
            AggregateOp::CountDistinct(DistinctField::City),
            true,
        ),
        mean_votes: query::group_aggregate(
            rows,
            &by_country,
            AggregateOp::Mean(NumericField::Votes),
            true,
        ),
        mean_cost_usd: query::group_aggregate(
            rows,
            &by_country,
            AggregateOp::Mean(NumericField::AmountUsd),
            true,
        ),
    }
}

/// City rankings; every group carries the country as a second key so the
/// renderer can color by it.
#[derive(Debug, Clone, Serialize)]
pub struct CityReport {
    pub most_restaurants: Vec<GroupRow>,
    pub highly_rated: Vec<GroupRow>,
    pub poorly_rated: Vec<GroupRow>,
    pub cuisine_variety: Vec<GroupRow>,
}

pub fn city_report(rows: &[Restaurant]) -> CityReport {
    let by_city = [KeyField::City, KeyField::Country];

    let mut most_restaurants = query::group_aggregate(
        rows,
        &by_city,
        AggregateOp::CountDistinct(DistinctField::RestaurantId),
        true,
    );
    most_restaurants.truncate(CITY_RANKING_SIZE);

    let highly: Vec<Restaurant> = rows
        .iter()
        .filter(|row| row.aggregate_rating >= HIGH_RATING_FLOOR)
        .cloned()
        .collect();
    let mut highly_rated = query::group_aggregate(&highly, &by_city, AggregateOp::Count, true);
    highly_rated.truncate(RATED_CITY_RANKING_SIZE);

    let poorly: Vec<Restaurant> = rows
        .iter()
        .filter(|row| row.aggregate_rating <= LOW_RATING_CEILING)
        .cloned()
        .collect();
    let mut poorly_rated = query::group_aggregate(&poorly, &by_city, AggregateOp::Count, true);
    poorly_rated.truncate(RATED_CITY_RANKING_SIZE);

    let mut cuisine_variety = query::group_aggregate(
        rows,
        &by_city,
        AggregateOp::CountDistinct(DistinctField::Cuisine),
        true,
    );
    cuisine_variety.truncate(CITY_RANKING_SIZE);

    CityReport {
        most_restaurants,
        highly_rated,
        poorly_rated,
        cuisine_variety,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedChampion {
    pub cuisine: String,
    /// Absent when no restaurant of the cuisine survives the filters.
    pub champion: Option<CuisineChampion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CuisineReport {
    pub featured: Vec<FeaturedChampion>,
    pub top_restaurants: Vec<Restaurant>,
    pub best_rated: Vec<GroupRow>,
    pub worst_rated: Vec<GroupRow>,
}

pub fn cuisine_report(rows: &[Restaurant], top: usize) -> CuisineReport {
    let featured = FEATURED_CUISINES
        .iter()
        .map(|cuisine| FeaturedChampion {
            cuisine: (*cuisine).to_string(),
            champion: query::best_of_cuisine(rows, cuisine),
        })
        .collect();

    CuisineReport {
        featured,
        top_restaurants: query::top_n(rows, NumericField::AggregateRating, top, false),
        best_rated: best_rated_cuisines(rows, top),
        worst_rated: worst_rated_cuisines(rows, top),
    }
}

/// Mean rating per cuisine over well-voted rows, best first, with the
/// catch-all bucket removed.
pub fn best_rated_cuisines(rows: &[Restaurant], top: usize) -> Vec<GroupRow> {
    let voted: Vec<Restaurant> = rows
        .iter()
        .filter(|row| row.votes >= BEST_CUISINE_VOTE_FLOOR)
        .cloned()
        .collect();
    let mut ranked = query::group_aggregate(
        &voted,
        &[KeyField::Cuisine],
        AggregateOp::Mean(NumericField::AggregateRating),
        true,
    );
    ranked.retain(|group| group.keys[0] != CATCH_ALL_CUISINE);
    ranked.truncate(top);
    ranked
}

/// Mean rating per cuisine, worst first. No vote floor and the catch-all
/// bucket stays in; buckets under the rating floor fall out.
pub fn worst_rated_cuisines(rows: &[Restaurant], top: usize) -> Vec<GroupRow> {
    let mut ranked = query::group_aggregate(
        rows,
        &[KeyField::Cuisine],
        AggregateOp::Mean(NumericField::AggregateRating),
        false,
    );
    ranked.retain(|group| group.value >= WORST_CUISINE_RATING_FLOOR);
    ranked.truncate(top);
    ranked
}
