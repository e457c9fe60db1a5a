//! Debug utility for inspecting persisted navigation state in local environments.

use std::path::PathBuf;

use clap::Parser;

use waypoint_core::storage::StorageConfig;
use waypoint_core::{FileStore, NavigationStore, TripId};

#[derive(Parser)]
#[command(name = "nav-check")]
#[command(about = "Waypoint navigation-state inspector")]
#[command(version)]
struct Cli {
    /// Storage root to inspect (default: ~/.waypoint)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Trip identifiers to resolve individually
    #[arg(value_name = "TRIP_ID")]
    trip_ids: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let storage = match cli.root {
        Some(root) => StorageConfig::with_root(root),
        None => StorageConfig::default(),
    };
    let state_file = storage.navigation_state_file();

    println!("═══════════════════════════════════════════════════════════");
    println!("  Waypoint Navigation Check");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("State file: {}", state_file.display());
    println!();

    let backend = match FileStore::open(&state_file) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Could not open navigation state file: {}", e);
            std::process::exit(1);
        }
    };
    let store = NavigationStore::new(backend);

    println!("── Saved References ──────────────────────────────────────");
    match store.all_references() {
        Ok(references) if references.is_empty() => println!("  (no saved references)"),
        Ok(references) => {
            for reference in references {
                println!(
                    "  trip {} → {:?} {}",
                    reference.trip_id, reference.activity_type, reference.activity_id
                );
            }
        }
        Err(e) => eprintln!("  failed to enumerate references: {}", e),
    }
    println!();

    if !cli.trip_ids.is_empty() {
        println!("── Trip Lookups ──────────────────────────────────────────");
        for raw in &cli.trip_ids {
            let trip_id = TripId::new(raw.as_str());
            match store.load(&trip_id) {
                Ok(Some(reference)) => println!(
                    "  {} → {:?} {}",
                    trip_id, reference.activity_type, reference.activity_id
                ),
                Ok(None) => println!("  {} → (no saved reference)", trip_id),
                Err(e) => println!("  {} → error: {}", trip_id, e),
            }
        }
        println!();
    }

    println!("═══════════════════════════════════════════════════════════");
}
