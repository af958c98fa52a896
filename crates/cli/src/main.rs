use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filter_service::{FilterSnapshot, FilterStateEngine, InMemoryFileList, PopulationReceiver};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use view_files::{load_population, selection_label, ViewFile, ViewFileStatus};

/// SeedFilter - filter a transfer list by status and name
#[derive(Parser)]
#[command(name = "seedfilter")]
#[command(about = "Filter downloading/extracting files by status and name", long_about = None)]
struct Cli {
    /// Path to a JSON file holding the file list
    #[arg(short, long, default_value = "files.json")]
    files: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show files that pass the filters, followed by the filter state
    Filter {
        /// Status to keep, or "all"
        #[arg(long, default_value = "all", value_parser = parse_status_filter)]
        status: StatusFilter,

        /// Case-insensitive name substring
        #[arg(long, default_value = "")]
        name: String,

        /// Print the filter state as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which status filters are available for the file list
    Facets,
}

/// `None` means every status
#[derive(Clone, Copy)]
struct StatusFilter(Option<ViewFileStatus>);

fn parse_status_filter(s: &str) -> Result<StatusFilter, String> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(StatusFilter(None));
    }
    s.parse::<ViewFileStatus>()
        .map(|status| StatusFilter(Some(status)))
        .map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let files = load_population(&cli.files)
        .with_context(|| format!("Failed to load file list from {}", cli.files.display()))?;
    info!("Loaded {} files from {}", files.len(), cli.files.display());

    let (list, mut populations) = InMemoryFileList::new();
    let list = Arc::new(list);
    let mut engine = FilterStateEngine::new(list.clone());
    list.set_files(files.to_vec());
    deliver(&mut engine, &mut populations);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter { status, name, json } => {
            handle_filter(&mut engine, &mut populations, status, &name, json)?
        }
        Commands::Facets => print_snapshot(&engine.snapshot()),
    }

    Ok(())
}

/// Feed every population the list service has pushed into the engine
fn deliver(engine: &mut FilterStateEngine<Arc<InMemoryFileList>>, populations: &mut PopulationReceiver) {
    while let Ok(population) = populations.try_recv() {
        engine.on_population_changed(population);
    }
}

/// Handle the 'filter' command
fn handle_filter(
    engine: &mut FilterStateEngine<Arc<InMemoryFileList>>,
    populations: &mut PopulationReceiver,
    status: StatusFilter,
    name: &str,
    json: bool,
) -> Result<()> {
    engine.filter_status(status.0);
    deliver(engine, populations);
    if engine.status_filter() != status.0 {
        println!(
            "{} No files are {}, showing all statuses",
            "!".yellow(),
            selection_label(status.0)
        );
    }

    engine.filter_name(name);
    deliver(engine, populations);

    let snapshot = engine.snapshot();
    let visible = engine.list_service().filtered_files();
    if json {
        let output = serde_json::json!({
            "files": visible.as_slice(),
            "filter": snapshot,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_files(&visible);
    println!();
    print_snapshot(&snapshot);
    Ok(())
}

fn print_files(files: &[ViewFile]) {
    println!("{}", format!("{} files", files.len()).bold().blue());
    for file in files {
        let size = file
            .remote_size
            .or(file.local_size)
            .map(|bytes| format!("{bytes} B"))
            .unwrap_or_else(|| "-".to_string());
        let kind = if file.is_dir { "/" } else { "" };
        println!(
            "  {:<12} {}{} ({})",
            file.status.to_string().cyan(),
            file.name,
            kind,
            size
        );
    }
}

fn print_snapshot(snapshot: &FilterSnapshot) {
    println!("{}", "Status filters:".bold().blue());
    print_facet("all", true, snapshot.all_selected());
    for facet in snapshot.facets() {
        print_facet(facet.status.as_str(), facet.enabled, facet.selected);
    }
}

fn print_facet(label: &str, enabled: bool, selected: bool) {
    let marker = if selected { "●".green() } else { "○".normal() };
    let label = if enabled {
        label.normal()
    } else {
        label.dimmed()
    };
    println!("  {} {}", marker, label);
}
