//! Zeitgestempelte Backups der `vehicles.xml`.
//!
//! Vor jedem Speichern wird die bestehende Datei umbenannt (nicht kopiert),
//! erst danach wird neu geschrieben. Scheitert das Schreiben, existiert die
//! alte Version weiterhin als Backup.

use chrono::{DateTime, Local, NaiveDateTime};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Dateiname der Fahrzeugliste im Savegame-Ordner.
pub const VEHICLES_FILE_NAME: &str = "vehicles.xml";

/// Zeitstempel-Format im Backup-Namen (sortierbar).
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Ein gefundenes Backup im Savegame-Ordner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    /// Vollständiger Pfad
    pub path: PathBuf,
    /// Zeitstempel aus dem Dateinamen
    pub created: NaiveDateTime,
}

const BACKUP_NAME_PATTERN: &str = r"^vehicles_(\d{4}-\d{2}-\d{2}-\d{2}-\d{2}-\d{2})(?:_\d+)?\.xml$";

/// Kompiliertes Muster für Backup-Namen; `None` nur bei ungültigem Muster (wird geloggt).
fn backup_name_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(BACKUP_NAME_PATTERN) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::error!("Backup-Muster ungültig, Backups werden nicht erkannt: {}", e);
                None
            }
        })
        .as_ref()
}

/// Zeitstempel aus einem Backup-Dateinamen.
fn backup_timestamp(name: &str) -> Option<NaiveDateTime> {
    let captures = backup_name_pattern()?.captures(name)?;
    NaiveDateTime::parse_from_str(&captures[1], BACKUP_TIMESTAMP_FORMAT).ok()
}

/// Pfad der `vehicles.xml` in einem Savegame-Ordner.
pub fn vehicles_path(folder: &Path) -> PathBuf {
    folder.join(VEHICLES_FILE_NAME)
}

/// Backup-Dateiname für einen Zeitpunkt, z.B. `vehicles_2025-03-01-18-30-05.xml`.
pub fn backup_file_name(now: DateTime<Local>) -> String {
    format!("vehicles_{}.xml", now.format(BACKUP_TIMESTAMP_FORMAT))
}

/// Benennt `vehicles.xml` in ein zeitgestempeltes Backup um.
///
/// Existiert für dieselbe Sekunde bereits ein Backup, wird `_1`, `_2`, ...
/// angehängt statt zu überschreiben. Liefert den Backup-Pfad.
pub fn create_backup(folder: &Path, now: DateTime<Local>) -> std::io::Result<PathBuf> {
    let original = vehicles_path(folder);
    let base_name = backup_file_name(now);

    let mut backup = folder.join(&base_name);
    let mut counter = 1u32;
    while backup.exists() {
        let stem = base_name.trim_end_matches(".xml");
        backup = folder.join(format!("{}_{}.xml", stem, counter));
        counter += 1;
    }

    std::fs::rename(&original, &backup)?;
    log::info!(
        "Backup erstellt: {} -> {}",
        original.display(),
        backup.display()
    );
    Ok(backup)
}

/// Listet alle Backups im Ordner, ältestes zuerst.
pub fn list_backups(folder: &Path) -> std::io::Result<Vec<BackupFile>> {
    let mut backups = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(created) = backup_timestamp(name) else {
            continue;
        };
        backups.push(BackupFile {
            path: entry.path(),
            created,
        });
    }

    backups.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.path.cmp(&b.path)));
    Ok(backups)
}

/// Prüft, ob ein Dateiname dem Backup-Schema entspricht.
pub fn is_backup_file_name(name: &str) -> bool {
    backup_timestamp(name).is_some()
}
