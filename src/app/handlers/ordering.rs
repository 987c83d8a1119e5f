//! Handler für Reihenfolge-Änderungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Verschiebt die Auswahl nach oben.
pub fn move_up(state: &mut AppState, steps: usize) -> anyhow::Result<()> {
    use_cases::ordering::move_selected(state, use_cases::ordering::Direction::Up, steps)
}

/// Verschiebt die Auswahl nach unten.
pub fn move_down(state: &mut AppState, steps: usize) -> anyhow::Result<()> {
    use_cases::ordering::move_selected(state, use_cases::ordering::Direction::Down, steps)
}

/// Sortiert die Anzeigeliste nach Name.
pub fn sort_by_name(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::ordering::sort_by_name(state)
}
