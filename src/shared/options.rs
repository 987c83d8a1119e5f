//! Zentrale Konfiguration für den FS25 Vehicle Sorter.
//!
//! `SorterOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "fs25_vehicle_sorter.toml";

/// Schrittweite der großen Verschiebe-Buttons ("+5" / "-5").
pub const LARGE_STEP: usize = 5;

/// Anzahl Einträge, die beim Scrollen oberhalb der Auswahl sichtbar bleiben.
pub const SCROLL_CONTEXT: usize = 5;

/// Distanz für "ganz nach oben" / "ganz nach unten".
pub const MOVE_TO_END_STEPS: usize = 9999;

/// Alle zur Laufzeit änderbaren Sorter-Optionen.
/// Wird als `fs25_vehicle_sorter.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SorterOptions {
    /// Auch nicht per TAB anwählbare Fahrzeuge anzeigen
    #[serde(default)]
    pub show_all_vehicles: bool,
    /// Zuletzt geöffneter Savegame-Ordner
    #[serde(default)]
    pub last_savegame_folder: Option<PathBuf>,
    /// Schrittweite der großen Verschiebe-Buttons
    #[serde(default = "default_large_step")]
    pub large_step: usize,
    /// Kontext-Einträge oberhalb der Auswahl beim Scrollen
    #[serde(default = "default_scroll_context")]
    pub scroll_context: usize,
    /// Überschreibt den Spiel-Ordner, in dem Savegames gesucht werden
    #[serde(default)]
    pub savegame_root: Option<PathBuf>,
}

impl Default for SorterOptions {
    fn default() -> Self {
        Self {
            show_all_vehicles: false,
            last_savegame_folder: None,
            large_step: LARGE_STEP,
            scroll_context: SCROLL_CONTEXT,
            savegame_root: None,
        }
    }
}

/// Serde-Default für `large_step` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_large_step() -> usize {
    LARGE_STEP
}

/// Serde-Default für `scroll_context`.
fn default_scroll_context() -> usize {
    SCROLL_CONTEXT
}

impl SorterOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("fs25_vehicle_sorter"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Scroll-Ziel für einen Anzeige-Index: `max(0, index - scroll_context)`.
    pub fn scroll_target(&self, display_index: usize) -> usize {
        display_index.saturating_sub(self.scroll_context)
    }

    /// Startordner für die Savegame-Auswahl.
    ///
    /// Reihenfolge: Override aus den Optionen, dann Plattform-Standard.
    pub fn savegame_root(&self) -> Option<PathBuf> {
        self.savegame_root.clone().or_else(default_savegame_root)
    }

    /// Löst einen Savegame-Ordner auf.
    ///
    /// Ein relativer Pfad, der im Arbeitsverzeichnis nicht existiert (z.B. nur
    /// `savegame3`), wird unter [`Self::savegame_root`] gesucht. Findet sich dort
    /// nichts, bleibt der Pfad unverändert.
    pub fn resolve_savegame_folder(&self, folder: &Path) -> PathBuf {
        if folder.is_absolute() || folder.exists() {
            return folder.to_path_buf();
        }
        match self.savegame_root() {
            Some(root) if root.join(folder).is_dir() => {
                let resolved = root.join(folder);
                log::info!("Savegame-Ordner aufgelöst: {}", resolved.display());
                resolved
            }
            _ => folder.to_path_buf(),
        }
    }
}

/// Plattform-Standardordner von FS25, falls bekannt.
///
/// Windows: `~\Documents\My Games\FarmingSimulator2025`,
/// macOS: `~/Library/Application Support/FarmingSimulator2025`.
pub fn default_savegame_root() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        let home = std::env::var_os("USERPROFILE")?;
        Some(
            PathBuf::from(home)
                .join("Documents")
                .join("My Games")
                .join("FarmingSimulator2025"),
        )
    } else if cfg!(target_os = "macos") {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("FarmingSimulator2025"),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let opts: SorterOptions = toml::from_str("show_all_vehicles = true\n").expect("TOML");
        assert!(opts.show_all_vehicles);
        assert_eq!(opts.large_step, LARGE_STEP);
        assert_eq!(opts.scroll_context, SCROLL_CONTEXT);
        assert_eq!(opts.last_savegame_folder, None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(OPTIONS_FILE_NAME);
        let opts = SorterOptions {
            show_all_vehicles: true,
            last_savegame_folder: Some(PathBuf::from("/games/savegame3")),
            large_step: 10,
            ..SorterOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern");
        assert_eq!(SorterOptions::load_from_file(&path), opts);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(OPTIONS_FILE_NAME);
        std::fs::write(&path, "large_step = \"viele\"").expect("write");
        assert_eq!(SorterOptions::load_from_file(&path), SorterOptions::default());
    }

    #[test]
    fn test_scroll_target_saturates() {
        let opts = SorterOptions::default();
        assert_eq!(opts.scroll_target(2), 0);
        assert_eq!(opts.scroll_target(12), 7);
    }

    #[test]
    fn test_savegame_root_override_wins() {
        let opts = SorterOptions {
            savegame_root: Some(PathBuf::from("/custom")),
            ..SorterOptions::default()
        };
        assert_eq!(opts.savegame_root(), Some(PathBuf::from("/custom")));
    }

    #[test]
    fn test_bare_savegame_name_resolves_under_root() {
        let root = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(root.path().join("savegame_sorter_test_7")).expect("mkdir");
        let opts = SorterOptions {
            savegame_root: Some(root.path().to_path_buf()),
            ..SorterOptions::default()
        };

        assert_eq!(
            opts.resolve_savegame_folder(Path::new("savegame_sorter_test_7")),
            root.path().join("savegame_sorter_test_7")
        );
        // Unbekannter Name und absolute Pfade bleiben unverändert
        assert_eq!(
            opts.resolve_savegame_folder(Path::new("savegame_sorter_test_8")),
            PathBuf::from("savegame_sorter_test_8")
        );
        assert_eq!(
            opts.resolve_savegame_folder(root.path()),
            root.path().to_path_buf()
        );
    }
}
