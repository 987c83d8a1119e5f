//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::MOVE_TO_END_STEPS;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Verschiebe-Intents ohne ausgewähltes Fahrzeug erzeugen keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let has_selection = state.selection.selected_unique_id.is_some();

    match intent {
        AppIntent::SavegameFolderSelected { folder } => vec![AppCommand::LoadSavegame { folder }],
        AppIntent::ShowAllVehiclesToggled { show_all } => {
            vec![AppCommand::SetShowAllVehicles { show_all }]
        }
        AppIntent::VehicleSelected { unique_id } => vec![AppCommand::SelectVehicle { unique_id }],
        AppIntent::MoveUpRequested { steps } if has_selection => {
            vec![AppCommand::MoveSelectedUp { steps }]
        }
        AppIntent::MoveDownRequested { steps } if has_selection => {
            vec![AppCommand::MoveSelectedDown { steps }]
        }
        AppIntent::LargeMoveUpRequested if has_selection => vec![AppCommand::MoveSelectedUp {
            steps: state.options.large_step,
        }],
        AppIntent::LargeMoveDownRequested if has_selection => {
            vec![AppCommand::MoveSelectedDown {
                steps: state.options.large_step,
            }]
        }
        AppIntent::MoveToTopRequested if has_selection => vec![AppCommand::MoveSelectedUp {
            steps: MOVE_TO_END_STEPS,
        }],
        AppIntent::MoveToBottomRequested if has_selection => vec![AppCommand::MoveSelectedDown {
            steps: MOVE_TO_END_STEPS,
        }],
        AppIntent::MoveUpRequested { .. }
        | AppIntent::MoveDownRequested { .. }
        | AppIntent::LargeMoveUpRequested
        | AppIntent::LargeMoveDownRequested
        | AppIntent::MoveToTopRequested
        | AppIntent::MoveToBottomRequested => {
            log::debug!("Verschieben ohne Auswahl ignoriert");
            Vec::new()
        }
        AppIntent::SortByNameRequested => vec![AppCommand::SortByName],
        AppIntent::SaveRequested => vec![AppCommand::SaveSavegame],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
