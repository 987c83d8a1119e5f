//! Fehlertypen der Savegame-Verarbeitung.
//!
//! Bei `NotFound` fragt ein Frontend erneut nach einem Ordner,
//! `WriteAfterBackup` erfordert eine manuelle Wiederherstellung.

use std::path::PathBuf;
use thiserror::Error;

/// Fehler beim Laden, Bearbeiten oder Speichern eines Savegames.
#[derive(Debug, Error)]
pub enum SorterError {
    /// `vehicles.xml` existiert im gewählten Ordner nicht
    #[error("Keine vehicles.xml gefunden in {}", folder.display())]
    NotFound { folder: PathBuf },

    /// Datei vorhanden, aber nicht lesbar (Rechte, Encoding, ...)
    #[error("{} konnte nicht gelesen werden: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ungültiges XML oder fehlende Pflichtattribute
    #[error("Savegame ist beschaedigt: {0}")]
    Parse(String),

    /// Backup-Umbenennung fehlgeschlagen, Original ist unverändert
    #[error("Speichern fehlgeschlagen ({}): {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backup wurde erstellt, das Schreiben der neuen Datei scheiterte danach.
    /// `vehicles.xml` fehlt jetzt, die Daten liegen nur noch im Backup.
    #[error(
        "KRITISCH: vehicles.xml konnte nicht geschrieben werden, Daten liegen nur in {}: {source}",
        backup.display()
    )]
    WriteAfterBackup {
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation mit einem Fahrzeug, das nicht in der erwarteten Liste steht
    #[error("Ungueltiger Aufruf: {0}")]
    Precondition(String),

    /// Operation ohne geladenes Savegame
    #[error("Kein Savegame geladen")]
    NoSavegameLoaded,
}

impl SorterError {
    /// Baut einen Parse-Fehler aus einer beliebigen Fehlermeldung.
    pub fn parse(message: impl std::fmt::Display) -> Self {
        Self::Parse(message.to_string())
    }

    /// `true`, wenn der Fehler durch erneute Ordnerauswahl behoben werden kann.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// `true`, wenn nach dem Fehler keine lesbare `vehicles.xml` mehr existiert.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::WriteAfterBackup { .. })
    }
}
