//! Handler für Auswahl und Sichtbarkeitsfilter.

use crate::app::use_cases;
use crate::app::AppState;

/// Wählt ein Fahrzeug der Anzeigeliste aus.
pub fn select_vehicle(state: &mut AppState, unique_id: &str) -> anyhow::Result<()> {
    use_cases::selection::select_vehicle(state, unique_id)
}

/// Schaltet zwischen "nur anwählbare" und "alle Fahrzeuge" um.
pub fn set_show_all_vehicles(state: &mut AppState, show_all: bool) {
    use_cases::selection::set_show_all_vehicles(state, show_all);
}
