#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

//! Measures how chain lengths in a `ChainedHashMap` grow with the load factor and plots the
//! results.

use std::sync::Once;

use chainmap::ChainedHashMap;
use env_logger::Builder;
use log::{LevelFilter, info, warn};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

// Number of buckets in every measured map
const TABLE_SIZE: usize = 10_000;
// Target load factors, from sparse to heavily chained
const LOAD_FACTORS: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 2.0, 4.0, 8.0, 10.0];
// Length of the random alphanumeric keys
const KEY_LEN: usize = 12;

const PROBES_PLOT: &str = "average_chain_probes.png";
const LONGEST_PLOT: &str = "longest_chain.png";

static INIT: Once = Once::new();

fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chainmap", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        let _ = builder.try_init();
    });
}

/// Chain statistics for one filled map
#[derive(Debug, Clone, Copy)]
struct ChainStats {
    load: f64,
    avg_probes: f64,
    longest: usize,
    empty_ratio: f64,
}

fn random_key(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric).take(KEY_LEN).map(char::from).collect()
}

// Average number of entries compared by a successful lookup: a key at position i (1-based)
// in its chain costs i comparisons.
fn measure(map: &ChainedHashMap<usize>) -> ChainStats {
    let lengths = map.chain_lengths();
    let total_cost: usize = lengths.iter().map(|&l| l * (l + 1) / 2).sum();
    let empty = lengths.iter().filter(|&&l| l == 0).count();

    ChainStats {
        load: map.load().unwrap_or(0.0),
        avg_probes: if map.is_empty() { 0.0 } else { total_cost as f64 / map.len() as f64 },
        longest: map.max_chain_len(),
        empty_ratio: empty as f64 / lengths.len() as f64,
    }
}

fn run(load_factor: f64, rng: &mut impl Rng) -> Result<ChainStats, Box<dyn std::error::Error>> {
    let n_keys = (TABLE_SIZE as f64 * load_factor) as usize;
    let mut map = ChainedHashMap::new(TABLE_SIZE)?;

    let keys: Vec<String> = (0..n_keys).map(|_| random_key(&mut *rng)).collect();
    for (i, key) in keys.iter().enumerate() {
        map.set(key.as_str(), i);
    }

    let missing = keys.iter().filter(|key| !map.contains_key(key)).count();
    if missing > 0 {
        warn!("{missing} inserted keys could not be found");
    }

    Ok(measure(&map))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let mut rng = rand::rng();
    let mut results = Vec::with_capacity(LOAD_FACTORS.len());

    for &load_factor in &LOAD_FACTORS {
        let stats = run(load_factor, &mut rng)?;
        info!(
            "load {:.2}: avg probes = {:.3}, longest chain = {}, empty buckets = {:.1}%",
            stats.load,
            stats.avg_probes,
            stats.longest,
            stats.empty_ratio * 100.0
        );
        results.push(stats);
    }

    let font_family = "sans-serif";
    let measured = RGBColor(50, 90, 220);
    let expected = RGBColor(220, 50, 50);
    let max_load = LOAD_FACTORS.iter().fold(0.0, |max: f64, &x| max.max(x)) * 1.05;

    // Plot 1: average probes per successful lookup against the 1 + a/2 estimate
    let root = BitMapBackend::new(PROBES_PLOT, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_probes = results.iter().fold(0.0, |max: f64, s| max.max(s.avg_probes)).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Probes per Successful Lookup", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_load, 0.0..max_probes)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Entries Compared")
        .axis_desc_style((font_family, 16))
        .draw()?;

    let measured_style = ShapeStyle::from(&measured).stroke_width(2);
    chart
        .draw_series(LineSeries::new(results.iter().map(|s| (s.load, s.avg_probes)), measured_style))?
        .label("Measured")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], measured_style));
    chart.draw_series(
        results.iter().map(|s| Circle::new((s.load, s.avg_probes), 4, measured.filled())),
    )?;

    let expected_style = ShapeStyle::from(&expected.mix(0.6)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            results.iter().map(|s| (s.load, 1.0 + s.load / 2.0)),
            expected_style,
        ))?
        .label("1 + load / 2")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], expected_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    root.present()?;

    // Plot 2: longest chain
    let root = BitMapBackend::new(LONGEST_PLOT, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_longest = results.iter().map(|s| s.longest).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Longest Bucket Chain", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_load, 0.0..max_longest)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Chain Length")
        .axis_desc_style((font_family, 16))
        .draw()?;

    chart.draw_series(LineSeries::new(
        results.iter().map(|s| (s.load, s.longest as f64)),
        measured_style,
    ))?;
    chart.draw_series(
        results.iter().map(|s| Circle::new((s.load, s.longest as f64), 4, measured.filled())),
    )?;

    root.present()?;
    println!("Plots written to {PROBES_PLOT} and {LONGEST_PLOT}");

    Ok(())
}
