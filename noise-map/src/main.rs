use std::process::ExitCode;

use noise_map::dataset::NoiseDataset;
use noise_map::export::{FeatureCollection, boundaries_to_geojson, stations_to_geojson};
use noise_map::ingest::{load_readings, load_stations};
use noise_map::overlay::{MapSnapshot, compute_overlay};
use noise_map::projection::{ProjectionConfig, Projector};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(stations_path), Some(readings_path)) = (args.next(), args.next()) else {
        eprintln!("Usage: noise-map <stations.csv> <readings.csv> [output.geojson]");
        return ExitCode::from(2);
    };
    let output_path = args.next();

    let stations = match load_stations(&stations_path) {
        Ok(stations) => stations,
        Err(e) => {
            eprintln!("Failed to load {stations_path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let readings = match load_readings(&readings_path) {
        Ok(readings) => readings,
        Err(e) => {
            eprintln!("Failed to load {readings_path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dataset = NoiseDataset::new(stations, readings);

    // The default config cannot fail validation
    let projector = Projector::new(ProjectionConfig::default()).expect("default projection config");

    let segments = match compute_overlay(dataset.stations(), &projector) {
        Ok(segments) => segments,
        Err(e) => {
            eprintln!("Overlay computation failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let snapshot = MapSnapshot::new(dataset.stations().to_vec(), segments);

    let geojson = FeatureCollection::merged([
        stations_to_geojson(snapshot.stations(), &dataset.stations_with_data()),
        boundaries_to_geojson(snapshot.segments()),
    ]);
    let rendered =
        serde_json::to_string_pretty(&geojson).expect("feature collection serializes");

    if let Some(path) = &output_path {
        if let Err(e) = std::fs::write(path, &rendered) {
            eprintln!("Failed to write {path}: {e}");
            return ExitCode::FAILURE;
        }
    } else {
        println!("{rendered}");
    }

    eprintln!(
        "{} stations ({} with data), {} readings, {} boundary segments{}",
        snapshot.stations().len(),
        dataset.stations_with_data().len(),
        dataset.readings().len(),
        snapshot.segments().len(),
        output_path
            .map(|p| format!(", written to {p}"))
            .unwrap_or_default()
    );

    ExitCode::SUCCESS
}
