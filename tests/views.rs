mod common;

use common::restaurant;
use food_zone::data::Restaurant;
use food_zone::views::{
    BEST_CUISINE_VOTE_FLOOR, CATCH_ALL_CUISINE, best_rated_cuisines, city_report, country_report,
    cuisine_report, overview, worst_rated_cuisines,
};

fn sample_rows() -> Vec<Restaurant> {
    vec![
        restaurant(1, "Spice Route", "India", "New Delhi", "Indian", 4.5, 900, Some(12.0)),
        restaurant(2, "Chutney Corner", "India", "Mumbai", "Indian", 4.1, 400, Some(9.0)),
        restaurant(3, "Taco Verde", "Brazil", "Sao Paulo", "Mexican", 3.9, 150, Some(20.0)),
        restaurant(4, "Green Fork", "Brazil", "Sao Paulo", CATCH_ALL_CUISINE, 2.2, 300, None),
        restaurant(5, "Harbour Grill", "England", "London", "Seafood", 4.8, 120, Some(60.0)),
        restaurant(6, "Corner Cafe", "England", "London", "Cafe", 0.0, 40, Some(8.0)),
    ]
}

#[test]
fn overview_reports_the_headline_metrics() {
    let rows = sample_rows();
    let metrics = overview(&rows);
    assert_eq!(metrics.restaurants, 6);
    assert_eq!(metrics.countries, 3);
    assert_eq!(metrics.cities, 4);
    assert_eq!(metrics.total_votes, 1910);
    assert_eq!(metrics.cuisines, 5);
}

#[test]
fn country_report_sorts_every_breakdown_descending() {
    let rows = sample_rows();
    let report = country_report(&rows);
    assert_eq!(report.restaurants[0].keys, vec!["India"]);
    assert!(
        report
            .restaurants
            .windows(2)
            .all(|pair| pair[0].value >= pair[1].value)
    );
    assert!(
        report
            .mean_votes
            .windows(2)
            .all(|pair| pair[0].value >= pair[1].value)
    );
}

#[test]
fn city_report_bounds_the_ranking_sizes() {
    let rows = sample_rows();
    let report = city_report(&rows);
    assert!(report.most_restaurants.len() <= 10);
    assert!(report.highly_rated.len() <= 7);
    assert!(report.poorly_rated.len() <= 7);
    assert!(report.cuisine_variety.len() <= 10);

    // Sao Paulo holds two restaurants and leads the count ranking.
    assert_eq!(report.most_restaurants[0].keys, vec!["Sao Paulo", "Brazil"]);

    // Only ratings >= 4.0 feed the highly-rated ranking.
    let highly_total: f64 = report.highly_rated.iter().map(|group| group.value).sum();
    assert_eq!(highly_total, 3.0);
}

#[test]
fn best_rated_cuisines_apply_the_vote_floor_and_drop_the_catch_all() {
    let rows = sample_rows();
    let ranked = best_rated_cuisines(&rows, 10);

    assert!(ranked.iter().all(|group| group.keys[0] != CATCH_ALL_CUISINE));
    // Harbour Grill and Corner Cafe sit under the vote floor.
    assert!(rows.iter().any(|row| row.votes < BEST_CUISINE_VOTE_FLOOR));
    assert!(ranked.iter().all(|group| group.keys[0] != "Cafe"));
    assert_eq!(ranked[0].keys, vec!["Indian"]);
}

#[test]
fn worst_rated_cuisines_keep_the_catch_all_and_apply_the_rating_floor() {
    let rows = sample_rows();
    let ranked = worst_rated_cuisines(&rows, 10);

    assert!(ranked.iter().any(|group| group.keys[0] == CATCH_ALL_CUISINE));
    // Corner Cafe's zero mean falls under the floor.
    assert!(ranked.iter().all(|group| group.value >= 1.0));
    assert!(ranked.windows(2).all(|pair| pair[0].value <= pair[1].value));
    assert_eq!(ranked[0].keys, vec![CATCH_ALL_CUISINE]);
}

#[test]
fn cuisine_report_lists_every_featured_cuisine_even_without_matches() {
    let rows = sample_rows();
    let report = cuisine_report(&rows, 10);
    assert_eq!(report.featured.len(), 5);

    let indian = report
        .featured
        .iter()
        .find(|entry| entry.cuisine == "Indian")
        .expect("featured entry");
    let champion = indian.champion.as_ref().expect("champion");
    assert_eq!(champion.restaurant_name, "Spice Route");

    let pizza = report
        .featured
        .iter()
        .find(|entry| entry.cuisine == "Pizza")
        .expect("featured entry");
    assert!(pizza.champion.is_none());
}

#[test]
fn cuisine_report_top_restaurants_respect_the_requested_size() {
    let rows = sample_rows();
    let report = cuisine_report(&rows, 2);
    assert_eq!(report.top_restaurants.len(), 2);
    assert_eq!(report.top_restaurants[0].restaurant_name, "Harbour Grill");
    assert!(report.best_rated.len() <= 2);
    assert!(report.worst_rated.len() <= 2);
}
