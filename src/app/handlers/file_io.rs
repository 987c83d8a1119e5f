//! Handler für Datei-Operationen (Laden, Speichern mit Backup).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Lädt die Fahrzeuge aus dem gewählten Savegame-Ordner.
pub fn load(state: &mut AppState, folder: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_savegame(state, folder)
}

/// Schreibt die aktuelle Reihenfolge ins Savegame (inkl. Backup).
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_savegame(state)
}
