use fs25_vehicle_sorter::core::{list_backups, vehicles_path};
use fs25_vehicle_sorter::{AppCommand, AppController, AppIntent, AppState, SorterError};
use std::path::Path;

const FIXTURE: &str = include_str!("fixtures/vehicles.xml");

fn savegame() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(vehicles_path(dir.path()), FIXTURE).expect("Fixture schreiben");
    dir
}

fn loaded_state(folder: &Path) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SavegameFolderSelected {
                folder: folder.to_path_buf(),
            },
        )
        .expect("Laden sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn display_ids(state: &AppState) -> Vec<String> {
    state
        .display_list()
        .iter()
        .map(|v| v.unique_id.clone())
        .collect()
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(state.command_log.entries(), &[AppCommand::RequestExit]);
}

#[test]
fn test_missing_vehicles_file_sets_retry_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (_, state) = loaded_state(dir.path());

    assert!(state.manager.is_none());
    let message = state.ui.status_message.expect("Statusnachricht erwartet");
    assert!(message.contains("vehicles.xml"), "{message}");
    assert_eq!(state.options.last_savegame_folder, None);
}

#[test]
fn test_save_without_savegame_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let err = controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect_err("Speichern ohne Savegame muss fehlschlagen");

    assert!(matches!(
        err.downcast_ref::<SorterError>(),
        Some(SorterError::NoSavegameLoaded)
    ));
}

#[test]
fn test_load_remembers_folder_and_shows_tabbable_only() {
    let dir = savegame();
    let (_, state) = loaded_state(dir.path());

    assert_eq!(
        state.options.last_savegame_folder.as_deref(),
        Some(dir.path())
    );
    assert_eq!(
        display_ids(&state),
        vec!["vehicle6a0b1c2d", "vehicle11223344", "vehicleaabbccdd"]
    );
    assert_eq!(state.display_count(), 3);
}

#[test]
fn test_selection_survives_move_and_save() {
    let dir = savegame();
    let (mut controller, mut state) = loaded_state(dir.path());

    controller
        .handle_intent(
            &mut state,
            AppIntent::VehicleSelected {
                unique_id: "vehicleaabbccdd".to_string(),
            },
        )
        .expect("Auswahl");
    controller
        .handle_intent(&mut state, AppIntent::MoveToTopRequested)
        .expect("Verschieben");

    assert_eq!(display_ids(&state)[0], "vehicleaabbccdd");
    assert_eq!(state.selection.scroll_target, Some(0));

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern");

    assert_eq!(
        state.selection.selected_unique_id.as_deref(),
        Some("vehicleaabbccdd")
    );
    assert_eq!(display_ids(&state)[0], "vehicleaabbccdd");
    assert_eq!(list_backups(dir.path()).expect("Backups").len(), 1);
    let message = state.ui.status_message.as_deref().unwrap_or_default();
    assert!(message.starts_with("Gespeichert"), "{message}");

    let details = state.selected_details().expect("Details");
    assert_eq!(details.position, "1 of 3 tabbable (total: 5)");
}

#[test]
fn test_move_without_selection_is_ignored() {
    let dir = savegame();
    let (mut controller, mut state) = loaded_state(dir.path());
    let before = display_ids(&state);
    let logged = state.command_log.len();

    controller
        .handle_intent(&mut state, AppIntent::MoveDownRequested { steps: 5 })
        .expect("Intent ohne Auswahl");

    assert_eq!(display_ids(&state), before);
    assert_eq!(state.command_log.len(), logged);
}

#[test]
fn test_hiding_selected_vehicle_clears_selection() {
    let dir = savegame();
    let (mut controller, mut state) = loaded_state(dir.path());

    controller
        .handle_intent(&mut state, AppIntent::ShowAllVehiclesToggled { show_all: true })
        .expect("Filter");
    assert_eq!(state.display_count(), 5);
    assert!(state.options.show_all_vehicles);

    controller
        .handle_intent(
            &mut state,
            AppIntent::VehicleSelected {
                unique_id: "vehicle9f8e7d6c".to_string(),
            },
        )
        .expect("Auswahl");
    let details = state.selected_details().expect("Details");
    assert_eq!(details.attached_to, "vario700");

    controller
        .handle_intent(&mut state, AppIntent::ShowAllVehiclesToggled { show_all: false })
        .expect("Filter");
    assert_eq!(state.selection.selected_unique_id, None);
    assert_eq!(state.display_count(), 3);
}

#[test]
fn test_selecting_hidden_vehicle_fails() {
    let dir = savegame();
    let (mut controller, mut state) = loaded_state(dir.path());

    let err = controller
        .handle_intent(
            &mut state,
            AppIntent::VehicleSelected {
                unique_id: "vehicle9f8e7d6c".to_string(),
            },
        )
        .expect_err("Ausgeblendetes Fahrzeug ist nicht auswählbar");

    assert!(matches!(
        err.downcast_ref::<SorterError>(),
        Some(SorterError::Precondition(_))
    ));
    assert_eq!(state.selection.selected_unique_id, None);
}

#[test]
fn test_sort_keeps_selection_and_updates_scroll_target() {
    let dir = savegame();
    let (mut controller, mut state) = loaded_state(dir.path());
    state.options.scroll_context = 1;

    controller
        .handle_intent(
            &mut state,
            AppIntent::VehicleSelected {
                unique_id: "vehicle6a0b1c2d".to_string(),
            },
        )
        .expect("Auswahl");
    controller
        .handle_intent(&mut state, AppIntent::SortByNameRequested)
        .expect("Sortieren");

    assert_eq!(
        display_ids(&state),
        vec!["vehicleaabbccdd", "vehicle11223344", "vehicle6a0b1c2d"]
    );
    assert_eq!(state.selection.scroll_target, Some(1));
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::SortByName)
    ));
}
