//! Rosenbrock GA CLI - Run the genetic algorithm and print its progress.

use std::fs;
use std::path::PathBuf;
use std::process;

use rosenbrock_ga::{EvolutionConfig, EvolutionEngine};

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.json] [--history <history.json>]", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Minimize the Rosenbrock function with a genetic algorithm.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to GA configuration file (default settings if omitted)");
    eprintln!("  --history    Write per-generation best/average fitness as JSON");
    eprintln!("  --example    Print the default configuration");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("rosenbrock-ga");

    let mut config_path: Option<PathBuf> = None;
    let mut history_path: Option<PathBuf> = None;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--example" => {
                print_example_config();
                return;
            }
            "-h" | "--help" => {
                print_usage(program);
                return;
            }
            "--history" => match rest.next() {
                Some(path) => history_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--history requires a path");
                    print_usage(program);
                    process::exit(1);
                }
            },
            path if config_path.is_none() => config_path = Some(PathBuf::from(path)),
            other => {
                eprintln!("Unexpected argument: {}", other);
                print_usage(program);
                process::exit(1);
            }
        }
    }

    let config = match &config_path {
        Some(path) => EvolutionConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config {}: {}", path.display(), e);
            process::exit(1);
        }),
        None => EvolutionConfig::default(),
    };

    let mut engine = EvolutionEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    });

    let result = engine.run_with_callback(|stats| {
        println!(
            "Generation {}: x = {}, y = {}",
            stats.generation,
            stats.best.x(),
            stats.best.y()
        );
    });

    match &result.best {
        Some(best) => println!(
            "Best candidate: x = {}, y = {} (fitness {:e})",
            best.x(),
            best.y(),
            best.fitness()
        ),
        None => println!("No generations were run."),
    }

    if let Some(path) = history_path {
        let json = serde_json::to_string_pretty(&result.history).unwrap_or_else(|e| {
            eprintln!("Error serializing history: {}", e);
            process::exit(1);
        });
        if let Err(e) = fs::write(&path, json) {
            eprintln!("Error writing history {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn print_example_config() {
    let config = EvolutionConfig::default();
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            process::exit(1);
        }
    }
}
