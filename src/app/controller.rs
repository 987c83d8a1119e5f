//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadSavegame { folder } => handlers::file_io::load(state, folder)?,
            AppCommand::SaveSavegame => handlers::file_io::save(state)?,

            // === Anzeige & Auswahl ===
            AppCommand::SetShowAllVehicles { show_all } => {
                handlers::selection::set_show_all_vehicles(state, show_all)
            }
            AppCommand::SelectVehicle { unique_id } => {
                handlers::selection::select_vehicle(state, &unique_id)?
            }

            // === Reihenfolge ===
            AppCommand::MoveSelectedUp { steps } => handlers::ordering::move_up(state, steps)?,
            AppCommand::MoveSelectedDown { steps } => {
                handlers::ordering::move_down(state, steps)?
            }
            AppCommand::SortByName => handlers::ordering::sort_by_name(state)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
