use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Savegame-Ordner wurde im Ordnerdialog gewählt
    SavegameFolderSelected { folder: PathBuf },
    /// Checkbox "Alle Fahrzeuge anzeigen" umgeschaltet
    ShowAllVehiclesToggled { show_all: bool },
    /// Fahrzeug in der Liste angeklickt
    VehicleSelected { unique_id: String },
    /// Auswahl um `steps` Plätze nach oben verschieben ("-1")
    MoveUpRequested { steps: usize },
    /// Auswahl um `steps` Plätze nach unten verschieben ("+1")
    MoveDownRequested { steps: usize },
    /// Auswahl um die große Schrittweite aus den Optionen nach oben ("-5")
    LargeMoveUpRequested,
    /// Auswahl um die große Schrittweite aus den Optionen nach unten ("+5")
    LargeMoveDownRequested,
    /// Auswahl an den Anfang ("Top")
    MoveToTopRequested,
    /// Auswahl ans Ende ("Bottom")
    MoveToBottomRequested,
    /// Anzeigeliste nach Name sortieren
    SortByNameRequested,
    /// Reihenfolge ins Savegame schreiben
    SaveRequested,
    /// Anwendung beenden
    ExitRequested,
}
