pub mod cli;
pub mod data;
pub mod dataset;
pub mod export;
pub mod io_utils;
pub mod normalize;
pub mod query;
pub mod reference;
pub mod table;
pub mod transform;
pub mod views;

use std::{collections::HashSet, env, path::Path, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::{
    cli::{Cli, CitiesArgs, Commands, CountriesArgs, CuisinesArgs, OverviewArgs},
    data::{KeyField, Restaurant},
    query::GroupRow,
    table::format_number,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("food_zone", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Overview(args) => handle_overview(&args),
        Commands::Countries(args) => handle_countries(&args),
        Commands::Cities(args) => handle_cities(&args),
        Commands::Cuisines(args) => handle_cuisines(&args),
        Commands::Export(args) => export::execute(&args),
    }
}

fn load_rows(
    input: &Path,
    delimiter: Option<u8>,
    encoding_label: Option<&str>,
) -> Result<Vec<Restaurant>> {
    let delimiter = io_utils::resolve_input_delimiter(input, delimiter);
    let encoding = io_utils::resolve_encoding(encoding_label)?;
    dataset::load_and_clean(input, delimiter, encoding)
}

/// An omitted filter flag keeps the dashboard's everything-selected
/// default; an explicit selection narrows with set semantics.
fn apply_filter(rows: Vec<Restaurant>, field: KeyField, selected: &[String]) -> Vec<Restaurant> {
    if selected.is_empty() {
        return rows;
    }
    let allowed: HashSet<String> = selected.iter().cloned().collect();
    query::filter_by(&rows, field, &allowed)
}

fn handle_overview(args: &OverviewArgs) -> Result<()> {
    let rows = load_rows(&args.input, args.delimiter, args.input_encoding.as_deref())?;
    let rows = apply_filter(rows, KeyField::Country, &args.countries);
    let metrics = views::overview(&rows);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }
    let headers = string_headers(&["metric", "value"]);
    let table_rows = vec![
        vec!["restaurants".to_string(), metrics.restaurants.to_string()],
        vec!["countries".to_string(), metrics.countries.to_string()],
        vec!["cities".to_string(), metrics.cities.to_string()],
        vec!["total_votes".to_string(), metrics.total_votes.to_string()],
        vec!["cuisines".to_string(), metrics.cuisines.to_string()],
    ];
    table::print_table(&headers, &table_rows);
    Ok(())
}

fn handle_countries(args: &CountriesArgs) -> Result<()> {
    let rows = load_rows(&args.input, args.delimiter, args.input_encoding.as_deref())?;
    let rows = apply_filter(rows, KeyField::Country, &args.countries);
    let report = views::country_report(&rows);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_group_section(
        "Restaurants per country",
        &["country", "restaurants"],
        &report.restaurants,
    );
    print_group_section("Cities per country", &["country", "cities"], &report.cities);
    print_group_section(
        "Mean votes per restaurant by country",
        &["country", "mean_votes"],
        &report.mean_votes,
    );
    print_group_section(
        "Mean price for two (USD) by country",
        &["country", "mean_cost_usd"],
        &report.mean_cost_usd,
    );
    Ok(())
}

fn handle_cities(args: &CitiesArgs) -> Result<()> {
    let rows = load_rows(&args.input, args.delimiter, args.input_encoding.as_deref())?;
    let rows = apply_filter(rows, KeyField::Country, &args.countries);
    let report = views::city_report(&rows);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_group_section(
        "Top cities by restaurants",
        &["city", "country", "restaurants"],
        &report.most_restaurants,
    );
    print_group_section(
        "Top cities by restaurants rated 4.0 or better",
        &["city", "country", "restaurants"],
        &report.highly_rated,
    );
    print_group_section(
        "Top cities by restaurants rated 2.5 or worse",
        &["city", "country", "restaurants"],
        &report.poorly_rated,
    );
    print_group_section(
        "Top cities by distinct cuisines",
        &["city", "country", "cuisines"],
        &report.cuisine_variety,
    );
    Ok(())
}

fn handle_cuisines(args: &CuisinesArgs) -> Result<()> {
    let rows = load_rows(&args.input, args.delimiter, args.input_encoding.as_deref())?;
    let rows = apply_filter(rows, KeyField::Country, &args.countries);
    let rows = apply_filter(rows, KeyField::Cuisine, &args.cuisines);
    let report = views::cuisine_report(&rows, args.top as usize);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Best restaurant per featured cuisine");
    let headers = string_headers(&[
        "cuisine",
        "restaurant",
        "rating",
        "city",
        "country",
        "price_usd",
    ]);
    let featured_rows: Vec<Vec<String>> = report
        .featured
        .iter()
        .map(|entry| match &entry.champion {
            Some(champion) => vec![
                entry.cuisine.clone(),
                champion.restaurant_name.clone(),
                format_number(champion.aggregate_rating),
                champion.city.clone(),
                champion.country.clone(),
                champion
                    .amount_usd
                    .map(format_number)
                    .unwrap_or_default(),
            ],
            None => vec![
                entry.cuisine.clone(),
                "(no restaurants)".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
        })
        .collect();
    table::print_table(&headers, &featured_rows);
    println!();

    println!("Top {} restaurants by rating", args.top);
    let headers = string_headers(&[
        "restaurant_id",
        "restaurant",
        "country",
        "city",
        "cuisine",
        "price_usd",
        "rating",
        "rating_text",
    ]);
    let top_rows: Vec<Vec<String>> = report
        .top_restaurants
        .iter()
        .map(|row| {
            vec![
                row.restaurant_id.to_string(),
                row.restaurant_name.clone(),
                row.country.clone(),
                row.city.clone(),
                row.cuisine.clone(),
                row.amount_usd.map(format_number).unwrap_or_default(),
                format_number(row.aggregate_rating),
                row.rating_text.clone(),
            ]
        })
        .collect();
    table::print_table(&headers, &top_rows);
    println!();

    print_group_section(
        "Best rated cuisines",
        &["cuisine", "mean_rating"],
        &report.best_rated,
    );
    print_group_section(
        "Worst rated cuisines",
        &["cuisine", "mean_rating"],
        &report.worst_rated,
    );
    Ok(())
}

fn print_group_section(title: &str, columns: &[&str], groups: &[GroupRow]) {
    println!("{title}");
    let headers = string_headers(columns);
    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|group| {
            group
                .keys
                .iter()
                .cloned()
                .chain([format_number(group.value)])
                .collect()
        })
        .collect();
    table::print_table(&headers, &rows);
    println!();
}

fn string_headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
