use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// `vehicles.xml` aus einem Savegame-Ordner laden
    LoadSavegame { folder: PathBuf },
    /// Sichtbarkeitsfilter setzen (ohne Neuladen)
    SetShowAllVehicles { show_all: bool },
    /// Fahrzeug auswählen
    SelectVehicle { unique_id: String },
    /// Ausgewähltes Fahrzeug um `steps` Plätze nach oben
    MoveSelectedUp { steps: usize },
    /// Ausgewähltes Fahrzeug um `steps` Plätze nach unten
    MoveSelectedDown { steps: usize },
    /// Anzeigeliste nach Name sortieren
    SortByName,
    /// Savegame mit Backup speichern
    SaveSavegame,
    /// Anwendung beenden
    RequestExit,
}
