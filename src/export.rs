//! Writes the cleaned dataset back out as CSV, derived columns included.

use anyhow::{Context, Result};
use log::info;

use crate::{cli::ExportArgs, data::Restaurant, dataset, io_utils};

pub const EXPORT_HEADERS: &[&str] = &[
    "restaurant_id",
    "restaurant_name",
    "country",
    "city",
    "cuisine",
    "average_cost_for_two",
    "currency",
    "amount_usd",
    "rating_color",
    "color_name",
    "aggregate_rating",
    "rating_text",
    "votes",
    "latitude",
    "longitude",
];

pub fn execute(args: &ExportArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let rows = dataset::load_and_clean(&args.input, delimiter, encoding)?;

    let output_delimiter =
        io_utils::resolve_output_delimiter(args.output.as_deref(), args.output_delimiter, delimiter);
    let mut writer = io_utils::open_csv_writer(args.output.as_deref(), output_delimiter)?;
    writer
        .write_record(EXPORT_HEADERS)
        .context("Writing output headers")?;
    for row in &rows {
        writer
            .write_record(&record_fields(row))
            .with_context(|| format!("Writing restaurant {}", row.restaurant_id))?;
    }
    writer.flush().context("Flushing output")?;
    info!("Exported {} cleaned row(s)", rows.len());
    Ok(())
}

fn record_fields(row: &Restaurant) -> Vec<String> {
    vec![
        row.restaurant_id.to_string(),
        row.restaurant_name.clone(),
        row.country.clone(),
        row.city.clone(),
        row.cuisine.clone(),
        row.average_cost_for_two.to_string(),
        row.currency.clone(),
        row.amount_usd.map(|v| v.to_string()).unwrap_or_default(),
        row.rating_color.clone(),
        row.color_name.clone(),
        row.aggregate_rating.to_string(),
        row.rating_text.clone(),
        row.votes.to_string(),
        row.latitude.to_string(),
        row.longitude.to_string(),
    ]
}
