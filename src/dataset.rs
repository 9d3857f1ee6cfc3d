//! Loading: raw CSV → canonical headers → cleaned [`Restaurant`] rows.
//!
//! The loader reads and decodes every record up front (the export is a few
//! thousand rows), resolves the required columns against the canonicalized
//! header row, and hands the decoded records to the cleaning pipeline.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use encoding_rs::Encoding;
use log::{debug, info};

use crate::{data::Restaurant, io_utils, normalize, transform};

/// Indexes of the required columns within the canonicalized header row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub restaurant_id: usize,
    pub restaurant_name: usize,
    pub country_code: usize,
    pub city: usize,
    pub cuisines: usize,
    pub average_cost_for_two: usize,
    pub currency: usize,
    pub rating_color: usize,
    pub aggregate_rating: usize,
    pub rating_text: usize,
    pub votes: usize,
    pub latitude: usize,
    pub longitude: usize,
}

impl ColumnMap {
    /// Resolves required columns against canonical headers; header order
    /// is irrelevant and extra columns are ignored.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| anyhow!("Required column '{name}' not found in input headers"))
        };
        Ok(Self {
            restaurant_id: find("restaurant_id")?,
            restaurant_name: find("restaurant_name")?,
            country_code: find("country_code")?,
            city: find("city")?,
            cuisines: find("cuisines")?,
            average_cost_for_two: find("average_cost_for_two")?,
            currency: find("currency")?,
            rating_color: find("rating_color")?,
            aggregate_rating: find("aggregate_rating")?,
            rating_text: find("rating_text")?,
            votes: find("votes")?,
            latitude: find("latitude")?,
            longitude: find("longitude")?,
        })
    }
}

pub fn load_and_clean(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
) -> Result<Vec<Restaurant>> {
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter, true)?;
    let raw_headers = io_utils::reader_headers(&mut reader, encoding)?;
    let headers = normalize::canonical_headers(&raw_headers);
    let columns = ColumnMap::resolve(&headers)
        .with_context(|| format!("Validating headers for {path:?}"))?;

    let mut records = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        records.push(io_utils::decode_record(&record, encoding)?);
    }

    let (rows, counts) =
        transform::clean(&records, &columns).with_context(|| format!("Cleaning rows from {path:?}"))?;
    debug!(
        "Dropped {} incomplete, {} duplicate, {} outlier row(s)",
        counts.incomplete, counts.duplicate, counts.outlier
    );
    info!(
        "Loaded {} cleaned row(s) from {} input row(s) in '{}'",
        rows.len(),
        counts.read,
        path.display()
    );
    Ok(rows)
}
