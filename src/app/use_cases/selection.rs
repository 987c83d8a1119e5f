//! Use-Case-Funktionen für Auswahl und Anzeige-Filter.

use crate::app::AppState;
use crate::core::{SorterError, VehicleFilter};
use anyhow::Context;

/// Wählt ein Fahrzeug aus und setzt das Scroll-Ziel.
///
/// Nur Fahrzeuge der Anzeigeliste sind auswählbar.
pub fn select_vehicle(state: &mut AppState, unique_id: &str) -> anyhow::Result<()> {
    let manager = state
        .manager
        .as_ref()
        .ok_or(SorterError::NoSavegameLoaded)?;
    let index = manager
        .vehicles()
        .display_index_of(unique_id)
        .ok_or_else(|| {
            SorterError::Precondition(format!(
                "Fahrzeug '{}' ist nicht in der Anzeigeliste",
                unique_id
            ))
        })
        .with_context(|| format!("Auswahl von {} fehlgeschlagen", unique_id))?;

    state.selection.selected_unique_id = Some(unique_id.to_string());
    state.selection.scroll_target = Some(state.options.scroll_target(index));
    Ok(())
}

/// Setzt den Sichtbarkeitsfilter und merkt ihn in den Optionen.
///
/// Die Anzeigeliste wird aus der aktuellen Gesamtreihenfolge neu abgeleitet.
/// Eine Auswahl, die danach nicht mehr sichtbar ist, wird aufgehoben.
pub fn set_show_all_vehicles(state: &mut AppState, show_all: bool) {
    state.options.show_all_vehicles = show_all;

    let Some(manager) = state.manager.as_mut() else {
        return;
    };
    manager.set_show_all_vehicles(show_all);
    refresh_selection(state);
}

/// Gleicht Auswahl und Scroll-Ziel mit der aktuellen Anzeigeliste ab.
pub fn refresh_selection(state: &mut AppState) {
    let index = match (&state.manager, &state.selection.selected_unique_id) {
        (Some(manager), Some(unique_id)) => manager.vehicles().display_index_of(unique_id),
        _ => None,
    };

    match index {
        Some(index) => state.selection.scroll_target = Some(state.options.scroll_target(index)),
        None => state.selection.clear(),
    }
}

/// Filter passend zu den aktuellen Optionen.
pub fn current_filter(state: &AppState) -> VehicleFilter {
    VehicleFilter::from_show_all(state.options.show_all_vehicles)
}
