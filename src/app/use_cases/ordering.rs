//! Use-Case-Funktionen für Verschieben und Sortieren.

use crate::app::AppState;
use crate::core::SorterError;

/// Verschieberichtung in der Anzeigeliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Richtung Listenanfang
    Up,
    /// Richtung Listenende
    Down,
}

/// Verschiebt das ausgewählte Fahrzeug und setzt das Scroll-Ziel auf die neue Position.
pub fn move_selected(state: &mut AppState, direction: Direction, steps: usize) -> anyhow::Result<()> {
    let unique_id = state
        .selection
        .selected_unique_id
        .clone()
        .ok_or_else(|| SorterError::Precondition("Kein Fahrzeug ausgewählt".to_string()))?;
    let manager = state
        .manager
        .as_mut()
        .ok_or(SorterError::NoSavegameLoaded)?;

    let new_index = match direction {
        Direction::Up => manager.move_up(&unique_id, steps)?,
        Direction::Down => manager.move_down(&unique_id, steps)?,
    };

    state.selection.scroll_target = Some(state.options.scroll_target(new_index));
    Ok(())
}

/// Sortiert die Anzeigeliste nach Name, die Auswahl bleibt erhalten.
pub fn sort_by_name(state: &mut AppState) -> anyhow::Result<()> {
    let manager = state
        .manager
        .as_mut()
        .ok_or(SorterError::NoSavegameLoaded)?;
    manager.sort_by_name();
    super::selection::refresh_selection(state);
    Ok(())
}
