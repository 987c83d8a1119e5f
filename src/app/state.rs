//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Vehicle, VehicleDetails, VehicleManager};
use crate::shared::SorterOptions;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// `uniqueId` des ausgewählten Fahrzeugs (überlebt Verschieben, Sortieren, Speichern)
    pub selected_unique_id: Option<String>,
    /// Erster sichtbarer Listen-Index nach der letzten Aktion
    pub scroll_target: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die Auswahl auf.
    pub fn clear(&mut self) {
        self.selected_unique_id = None;
        self.scroll_target = None;
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statusnachricht (Laden, Speichern, Fehlerhinweise)
    pub status_message: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geladenes Savegame (None = noch kein Ordner gewählt)
    pub manager: Option<VehicleManager>,
    /// Selection-State
    pub selection: SelectionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: SorterOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(SorterOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: SorterOptions) -> Self {
        Self {
            manager: None,
            selection: SelectionState::new(),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Angezeigte Fahrzeuge (leer, wenn nichts geladen ist).
    pub fn display_list(&self) -> Vec<&Vehicle> {
        self.manager
            .as_ref()
            .map_or_else(Vec::new, |m| m.display_list().collect())
    }

    /// Anzahl der angezeigten Fahrzeuge (für UI-Anzeige)
    pub fn display_count(&self) -> usize {
        self.manager
            .as_ref()
            .map_or(0, |m| m.vehicles().display_count())
    }

    /// Detailfelder des ausgewählten Fahrzeugs.
    pub fn selected_details(&self) -> Option<VehicleDetails> {
        let manager = self.manager.as_ref()?;
        let unique_id = self.selection.selected_unique_id.as_deref()?;
        match manager.details(unique_id) {
            Ok(details) => Some(details),
            Err(e) => {
                log::warn!("Details für {} nicht verfügbar: {}", unique_id, e);
                None
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
