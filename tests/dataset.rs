mod common;

use common::{
    LISTING_HEADER, ROW_BAWARCHI, ROW_OCEAN_BASKET, TestWorkspace, sample_listing_csv,
};
use encoding_rs::UTF_8;
use food_zone::dataset::load_and_clean;

#[test]
fn load_and_clean_keeps_only_the_valid_rows() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("listings.csv", &sample_listing_csv());

    let rows = load_and_clean(&path, b',', UTF_8).expect("load");

    let mut ids: Vec<i64> = rows.iter().map(|row| row.restaurant_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn cuisine_keeps_only_the_first_label() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("listings.csv", &sample_listing_csv());

    let rows = load_and_clean(&path, b',', UTF_8).expect("load");

    let ocean = rows.iter().find(|row| row.restaurant_id == 1).expect("row");
    assert_eq!(ocean.cuisine, "Seafood");
    assert!(rows.iter().all(|row| !row.cuisine.contains(',')));
}

#[test]
fn known_currencies_convert_exactly() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("listings.csv", &sample_listing_csv());

    let rows = load_and_clean(&path, b',', UTF_8).expect("load");

    let ocean = rows.iter().find(|row| row.restaurant_id == 1).expect("row");
    assert_eq!(ocean.amount_usd, Some(45.5));

    let bawarchi = rows.iter().find(|row| row.restaurant_id == 2).expect("row");
    let expected = 850.0 * 0.012;
    let amount = bawarchi.amount_usd.expect("converted amount");
    assert!((amount - expected).abs() < 1e-9);
}

#[test]
fn country_codes_map_to_display_names() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("listings.csv", &sample_listing_csv());

    let rows = load_and_clean(&path, b',', UTF_8).expect("load");

    let ocean = rows.iter().find(|row| row.restaurant_id == 1).expect("row");
    assert_eq!(ocean.country, "South Africa");
    assert_eq!(ocean.color_name, "green");
}

#[test]
fn unknown_currency_rows_are_retained_without_usd_amount() {
    let workspace = TestWorkspace::new();
    let contents = [
        LISTING_HEADER,
        r#"9,"Pierogi House",215,"London","Polish",120,"Zloty(zl)",4.1,"5BA829","Very Good",88,51.5,-0.12"#,
    ]
    .join("\n");
    let path = workspace.write("listings.csv", &contents);

    let rows = load_and_clean(&path, b',', UTF_8).expect("load");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount_usd, None);
}

#[test]
fn unknown_country_code_aborts_the_load() {
    let workspace = TestWorkspace::new();
    let contents = [
        LISTING_HEADER,
        r#"9,"Mystery Diner",999,"Nowhere","Cafe",40,"Dollar($)",3.0,"5BA829","Average",10,0.0,0.0"#,
    ]
    .join("\n");
    let path = workspace.write("listings.csv", &contents);

    let err = load_and_clean(&path, b',', UTF_8).unwrap_err();
    assert!(format!("{err:#}").contains("unknown country code 999"));
}

#[test]
fn unknown_rating_color_aborts_the_load() {
    let workspace = TestWorkspace::new();
    let contents = [
        LISTING_HEADER,
        r#"9,"Mystery Diner",1,"New Delhi","Cafe",40,"Dollar($)",3.0,"ABCDEF","Average",10,0.0,0.0"#,
    ]
    .join("\n");
    let path = workspace.write("listings.csv", &contents);

    let err = load_and_clean(&path, b',', UTF_8).unwrap_err();
    assert!(format!("{err:#}").contains("unknown rating color code 'ABCDEF'"));
}

#[test]
fn exact_duplicates_collapse_to_one_row() {
    let workspace = TestWorkspace::new();
    let contents = [
        LISTING_HEADER,
        ROW_OCEAN_BASKET,
        ROW_OCEAN_BASKET,
        ROW_OCEAN_BASKET,
        ROW_BAWARCHI,
    ]
    .join("\n");
    let path = workspace.write("listings.csv", &contents);

    let rows = load_and_clean(&path, b',', UTF_8).expect("load");
    assert_eq!(rows.len(), 2);
}

#[test]
fn header_spelling_and_order_do_not_matter() {
    let workspace = TestWorkspace::new();
    let contents = [
        "restaurant id,restaurant name,COUNTRY CODE,City,Cuisines,AverageCostForTwo,Currency,aggregate rating,Rating color,Rating text,Votes,Latitude,Longitude",
        ROW_BAWARCHI,
    ]
    .join("\n");
    let path = workspace.write("listings.csv", &contents);

    let rows = load_and_clean(&path, b',', UTF_8).expect("load");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].restaurant_name, "Bawarchi");
    assert_eq!(rows[0].country, "India");
}

#[test]
fn missing_required_column_is_a_load_error() {
    let workspace = TestWorkspace::new();
    let contents = ["Restaurant ID,Restaurant Name,City", r#"1,"Solo","Town""#].join("\n");
    let path = workspace.write("listings.csv", &contents);

    let err = load_and_clean(&path, b',', UTF_8).unwrap_err();
    assert!(format!("{err:#}").contains("Required column 'country_code'"));
}
