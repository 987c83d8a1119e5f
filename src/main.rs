//! FS25 Vehicle Sorter.
//!
//! Sortiert die TAB-Reihenfolge der Fahrzeuge in einem Farming Simulator 25 Savegame.
//! Kommandozeilen-Frontend über dem Intent/Command-Controller.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use fs25_vehicle_sorter::{AppController, AppIntent, AppState, SorterOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "FS25-Vehicle-Sorter")]
#[command(version, about = "Sortiert die TAB-Reihenfolge der Fahrzeuge eines FS25-Savegames", long_about = None)]
struct Cli {
    /// Savegame-Ordner oder Name wie `savegame1` (Standard: zuletzt verwendeter Ordner)
    #[arg(short, long, value_name = "DIR", global = true)]
    folder: Option<PathBuf>,

    /// Auch nicht per TAB anwählbare Fahrzeuge anzeigen
    #[arg(short, long, global = true)]
    all: bool,

    /// Änderungen nicht speichern
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Angezeigte Fahrzeuge in TAB-Reihenfolge auflisten
    List,
    /// Details eines Fahrzeugs anzeigen
    Show {
        /// uniqueId des Fahrzeugs
        unique_id: String,
    },
    /// Fahrzeug verschieben
    Move {
        /// uniqueId des Fahrzeugs
        unique_id: String,
        #[command(flatten)]
        target: MoveTarget,
    },
    /// Angezeigte Fahrzeuge nach Name sortieren
    Sort,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MoveTarget {
    /// Um N Plätze nach oben (ohne N: große Schrittweite aus den Optionen)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    up: Option<Option<usize>>,
    /// Um N Plätze nach unten (ohne N: große Schrittweite aus den Optionen)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    down: Option<Option<usize>>,
    /// An den Anfang
    #[arg(long)]
    top: bool,
    /// Ans Ende
    #[arg(long)]
    bottom: bool,
}

impl MoveTarget {
    fn intent(&self) -> AppIntent {
        match (self.up, self.down) {
            (Some(Some(steps)), _) => AppIntent::MoveUpRequested { steps },
            (Some(None), _) => AppIntent::LargeMoveUpRequested,
            (_, Some(Some(steps))) => AppIntent::MoveDownRequested { steps },
            (_, Some(None)) => AppIntent::LargeMoveDownRequested,
            _ if self.top => AppIntent::MoveToTopRequested,
            _ => AppIntent::MoveToBottomRequested,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "FS25 Vehicle Sorter v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();
    let config_path = SorterOptions::config_path();
    let options = SorterOptions::load_from_file(&config_path);
    let persisted_show_all = options.show_all_vehicles;

    let folder = cli
        .folder
        .clone()
        .map(|folder| options.resolve_savegame_folder(&folder))
        .or_else(|| options.last_savegame_folder.clone())
        .context("Kein Savegame-Ordner angegeben (--folder)")?;

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    if cli.all {
        controller.handle_intent(
            &mut state,
            AppIntent::ShowAllVehiclesToggled { show_all: true },
        )?;
    }
    controller.handle_intent(&mut state, AppIntent::SavegameFolderSelected { folder })?;
    if state.manager.is_none() {
        bail!(
            "{}",
            state
                .ui
                .status_message
                .take()
                .unwrap_or_else(|| "Savegame konnte nicht geladen werden".to_string())
        );
    }

    let mutated = run_command(&cli.command, &mut controller, &mut state)?;
    if mutated {
        if cli.dry_run {
            log::info!("--dry-run: Änderungen werden nicht gespeichert");
            print_display_list(&state);
        } else {
            controller.handle_intent(&mut state, AppIntent::SaveRequested)?;
        }
    }

    if let Some(message) = state.ui.status_message.take() {
        println!("{}", message);
    }

    controller.handle_intent(&mut state, AppIntent::ExitRequested)?;
    state.options.show_all_vehicles = persisted_show_all;
    if let Err(e) = state.options.save_to_file(&config_path) {
        log::warn!("Optionen konnten nicht gespeichert werden: {}", e);
    }
    Ok(())
}

/// Führt das Subcommand aus. Liefert `true`, wenn die Reihenfolge geändert wurde.
fn run_command(
    command: &Command,
    controller: &mut AppController,
    state: &mut AppState,
) -> Result<bool> {
    match command {
        Command::List => {
            print_display_list(state);
            Ok(false)
        }
        Command::Show { unique_id } => {
            controller.handle_intent(
                state,
                AppIntent::VehicleSelected {
                    unique_id: unique_id.clone(),
                },
            )?;
            let details = state
                .selected_details()
                .with_context(|| format!("Keine Details für {}", unique_id))?;
            println!("Name:           {}", details.name);
            println!("Position:       {}", details.position);
            println!("Betriebsstunden: {:.1}", details.operating_time);
            println!("Kennzeichen:    {}", details.license_plates);
            println!("Attached to:    {}", details.attached_to);
            println!("Has attached:   {}", details.has_attached);
            Ok(false)
        }
        Command::Move { unique_id, target } => {
            controller.handle_intent(
                state,
                AppIntent::VehicleSelected {
                    unique_id: unique_id.clone(),
                },
            )?;
            controller.handle_intent(state, target.intent())?;
            if let Some(details) = state.selected_details() {
                println!("{}: {}", details.name, details.position);
            }
            Ok(true)
        }
        Command::Sort => {
            controller.handle_intent(state, AppIntent::SortByNameRequested)?;
            Ok(true)
        }
    }
}

fn print_display_list(state: &AppState) {
    for (index, vehicle) in state.display_list().iter().enumerate() {
        println!(
            "{:>4}  {:<40} {:>8.1} h  {}",
            index + 1,
            vehicle.name,
            vehicle.operating_time,
            vehicle.unique_id
        );
    }
}
