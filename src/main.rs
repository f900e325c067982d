//! Lode CLI - Run a pattern optimization from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use lode::blocks::{BlockKind, Sample};
use lode::geometry::{Dimensions, Position};
use lode::schema::RunConfig;
use lode::search::DiggingPattern;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json>", args[0]);
        eprintln!();
        eprintln!("Search for efficient mining dig patterns.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to run configuration file");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });
    let config: RunConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    println!("Lode Pattern Search");
    println!("===================");
    println!(
        "Sample: {}x{}x{} at floor level {}",
        config.sample.width, config.sample.height, config.sample.length, config.sample.lowest_floor
    );
    println!("Samples per pattern: {}", config.evaluation.sample_count);
    println!(
        "Dig budget: {} blocks, reach: {:?}",
        config.search.max_dug_blocks, config.search.reach
    );
    println!();

    println!("Searching...");
    let start = Instant::now();
    let outcome = lode::run(&config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });
    let elapsed = start.elapsed();

    let dims = Arc::new(Dimensions::new(
        config.sample.width,
        config.sample.height,
        config.sample.length,
    ));

    println!();
    println!(
        "Evaluated {} patterns in {:.2}s ({:.0} patterns/s)",
        outcome.patterns_evaluated,
        elapsed.as_secs_f32(),
        outcome.patterns_evaluated as f32 / elapsed.as_secs_f32()
    );
    println!("Retained {} patterns:", outcome.store.len());

    for (i, kept) in outcome.store.iter().enumerate() {
        println!();
        println!("--- Pattern {} ---", i + 1);
        println!("{}", render_pattern(&kept.pattern, &dims));
        println!("{}", kept.stats.full_report(outcome.sample_count));
    }
}

/// Carves the pattern into solid rock and prints it layer by layer, lowest
/// layer first. Removed blocks show as light shade, remaining rock as full
/// blocks.
fn render_pattern(pattern: &DiggingPattern, dims: &Arc<Dimensions>) -> String {
    let mut sample = Sample::new(Arc::clone(dims), BlockKind::Rock);
    pattern.dig_into(&mut sample);

    let mut out = String::new();
    for y in 0..dims.height() {
        out.push_str(&format!("Layer y={}\n", y));
        for z in 0..dims.length() {
            for x in 0..dims.width() {
                let symbol = match sample.block_at(Position::new(x, y, z)) {
                    BlockKind::Air => '░',
                    BlockKind::Rock => '█',
                    BlockKind::Ore(kind) => kind.symbol(),
                };
                out.push(symbol);
            }
            out.push('\n');
        }
    }
    out
}

fn print_example_config() {
    let config = RunConfig::default();
    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
