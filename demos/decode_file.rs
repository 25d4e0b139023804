//! Decodes a saved forecast envelope and prints its tables.
//!
//! Usage: `cargo run --example decode_file -- data/forecast_sample.json`

use openmeteo_frames::{Granularity, MeteoError, RequestSchema, ResponseDecoder, VariableSpec};
use std::path::PathBuf;

fn main() -> Result<(), MeteoError> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/forecast_sample.json"));

    // Must match the order the variables were requested in.
    let schema = RequestSchema::builder()
        .current(vec![VariableSpec::float("temperature_2m"), VariableSpec::float("is_day")])
        .minutely_15(vec![
            VariableSpec::float("is_day"),
            VariableSpec::float("apparent_temperature"),
            VariableSpec::float("temperature_2m"),
            VariableSpec::float("precipitation"),
        ])
        .hourly(vec![
            VariableSpec::float("temperature_2m"),
            VariableSpec::float("apparent_temperature"),
            VariableSpec::float("precipitation"),
        ])
        .daily(vec![
            VariableSpec::float("temperature_2m_max"),
            VariableSpec::float("temperature_2m_min"),
            VariableSpec::int64("sunrise"),
            VariableSpec::int64("sunset"),
            VariableSpec::float("daylight_duration"),
            VariableSpec::float("sunshine_duration"),
            VariableSpec::float("apparent_temperature_max"),
            VariableSpec::float("apparent_temperature_min"),
        ])
        .build();

    let response = ResponseDecoder::new(schema).decode_path(&path)?;

    let coordinate = response.coordinate;
    println!(
        "Coordinates: {}°N {}°E",
        coordinate.latitude, coordinate.longitude
    );
    println!("Elevation: {} m asl", coordinate.elevation);
    println!(
        "Timezone: {} {}",
        response.timezone.name, response.timezone.abbreviation
    );
    println!(
        "Timezone difference to GMT+0: {}s",
        response.timezone.utc_offset_seconds
    );

    if let Some(current) = &response.current {
        println!("\nCurrent time: {}", current.time());
        for (name, value) in current.values() {
            println!("Current {}: {}", name, value);
        }
    }

    for granularity in Granularity::SERIES {
        if let Some(table) = response.table(granularity) {
            println!("\n{} data\n{}", granularity, table.to_dataframe()?);
        }
    }
    Ok(())
}
