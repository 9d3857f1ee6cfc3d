#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

use food_zone::data::Restaurant;

/// Raw header row the way the export actually spells it.
pub const LISTING_HEADER: &str = "Restaurant ID,Restaurant Name,Country Code,City,Cuisines,Average Cost for two,Currency,Aggregate Rating,Rating Color,Rating Text,Votes,Latitude,Longitude";

pub const ROW_OCEAN_BASKET: &str = r#"1,"Ocean Basket",189,"Cape Town","Seafood,Grill",45.5,"Dollar($)",4.4,"5BA829","Very Good",602,-33.91,18.42"#;
pub const ROW_BAWARCHI: &str = r#"2,"Bawarchi",1,"New Delhi","Indian",850,"Indian Rupees(Rs.)",3.8,"9ACD32","Good",1203,28.61,77.21"#;
/// City field left empty; the row must be dropped as incomplete.
pub const ROW_MISSING_CITY: &str = r#"3,"Nameless Corner",1,,"Indian",400,"Indian Rupees(Rs.)",3.1,"CDD614","Average",25,28.61,77.21"#;
/// Converts to the corrupt 25000017.0 USD price; always dropped.
pub const ROW_PRICE_OUTLIER: &str = r#"4,"Golden Spoon",216,"New York","American",25000017,"Dollar($)",4.9,"3F7E00","Excellent",2301,40.71,-74.0"#;

/// Five input rows: two valid, one incomplete, one exact duplicate, one
/// price outlier. Cleaning keeps exactly the two valid rows.
pub fn sample_listing_csv() -> String {
    [
        LISTING_HEADER,
        ROW_OCEAN_BASKET,
        ROW_MISSING_CITY,
        ROW_OCEAN_BASKET,
        ROW_PRICE_OUTLIER,
        ROW_BAWARCHI,
    ]
    .join("\n")
}

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// In-memory row builder for query and view tests; fields the test does
/// not care about get fixed fillers.
pub fn restaurant(
    id: i64,
    name: &str,
    country: &str,
    city: &str,
    cuisine: &str,
    rating: f64,
    votes: i64,
    amount_usd: Option<f64>,
) -> Restaurant {
    Restaurant {
        restaurant_id: id,
        restaurant_name: name.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        cuisine: cuisine.to_string(),
        average_cost_for_two: amount_usd.unwrap_or(100.0),
        currency: "Dollar($)".to_string(),
        amount_usd,
        rating_color: "5BA829".to_string(),
        color_name: "green".to_string(),
        aggregate_rating: rating,
        rating_text: "Good".to_string(),
        votes,
        latitude: 0.0,
        longitude: 0.0,
    }
}
