//! Use-Case-Funktionen für Savegame-Aktionen.
//! Alle Dateisystem-Operationen (I/O) laufen über den `VehicleManager`.

use super::selection::{current_filter, refresh_selection};
use crate::app::AppState;
use crate::core::{SorterError, VehicleManager};
use anyhow::Context;
use std::path::PathBuf;

/// Lädt `vehicles.xml` aus dem gewählten Ordner in den AppState.
///
/// Fehlt die Datei, bleibt der bisherige Zustand erhalten und eine
/// Statusnachricht fordert zur Auswahl eines anderen Ordners auf.
pub fn load_savegame(state: &mut AppState, folder: PathBuf) -> anyhow::Result<()> {
    let manager = match VehicleManager::load(&folder, current_filter(state)) {
        Ok(manager) => manager,
        Err(e @ SorterError::NotFound { .. }) => {
            log::warn!("{}", e);
            state.ui.status_message = Some(format!("{}. Bitte einen Savegame-Ordner wählen.", e));
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Savegame {} konnte nicht geladen werden", folder.display())
            })
        }
    };

    state.ui.status_message = Some(format!(
        "{} Fahrzeuge geladen ({} angezeigt)",
        manager.vehicles().total_count(),
        manager.vehicles().display_count()
    ));
    state.options.last_savegame_folder = Some(folder);
    state.manager = Some(manager);
    refresh_selection(state);
    Ok(())
}

/// Speichert die aktuelle Reihenfolge mit Backup und lädt neu.
pub fn save_savegame(state: &mut AppState) -> anyhow::Result<()> {
    let manager = state
        .manager
        .as_mut()
        .ok_or(SorterError::NoSavegameLoaded)?;

    let backup = match manager.save() {
        Ok(backup) => backup,
        Err(e) => {
            state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {}", e));
            return Err(e).context("Savegame konnte nicht gespeichert werden");
        }
    };

    let backup_name = backup
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| backup.display().to_string());
    state.ui.status_message = Some(format!("Gespeichert, Backup: {}", backup_name));
    refresh_selection(state);
    Ok(())
}
