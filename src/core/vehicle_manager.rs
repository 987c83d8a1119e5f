//! Laden, Umsortieren und Speichern der Fahrzeuge eines Savegames.

use super::backup::{self, vehicles_path};
use super::{SorterError, Vehicle, VehicleFilter, VehicleList};
use crate::xml::{parse_vehicles_xml, write_vehicles_xml, VehiclesDocument};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Anzeige-Text, wenn keine Verknüpfung existiert.
pub const NOTHING_LABEL: &str = "Nothing";

/// Detailfelder eines Fahrzeugs, so wie ein Frontend sie anzeigt.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDetails {
    /// Anzeigename
    pub name: String,
    /// Position in der TAB-Reihenfolge, z.B. `3 of 12 tabbable (total: 20)`
    pub position: String,
    /// Betriebsstunden
    pub operating_time: f64,
    /// Kennzeichen oder `[None]`
    pub license_plates: String,
    /// Name des ziehenden Fahrzeugs oder `Nothing`
    pub attached_to: String,
    /// `<Anzahl>: Name, Name` oder `Nothing`
    pub has_attached: String,
}

/// Hält die Fahrzeuge eines geladenen Savegames samt Original-Dokument.
///
/// Zustand wird bei jedem Laden komplett ersetzt und direkt nach dem
/// Speichern von der Platte neu aufgebaut.
#[derive(Debug, Clone)]
pub struct VehicleManager {
    folder: PathBuf,
    document: VehiclesDocument,
    vehicles: VehicleList,
}

impl VehicleManager {
    /// Lädt `<folder>/vehicles.xml`.
    ///
    /// Fehlt die Datei, kommt [`SorterError::NotFound`] zurück; ungültiges XML
    /// oder fehlende Pflichtattribute liefern [`SorterError::Parse`].
    pub fn load(folder: impl AsRef<Path>, filter: VehicleFilter) -> Result<Self, SorterError> {
        let folder = folder.as_ref().to_path_buf();
        let path = vehicles_path(&folder);

        let xml_content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SorterError::NotFound { folder });
            }
            Err(source) => return Err(SorterError::Read { path, source }),
        };

        let document = parse_vehicles_xml(&xml_content)?;
        let vehicles = document
            .nodes()
            .iter()
            .map(Vehicle::from_node)
            .collect::<Result<Vec<_>, _>>()?;
        let vehicles = VehicleList::new(vehicles, filter)?;

        log::info!(
            "Savegame geladen: {} ({} Fahrzeuge, {} angezeigt)",
            folder.display(),
            vehicles.total_count(),
            vehicles.display_count()
        );

        Ok(Self {
            folder,
            document,
            vehicles,
        })
    }

    /// Schreibt die aktuelle Reihenfolge zurück und lädt danach neu.
    ///
    /// Ablauf: Dokument umsortieren → `vehicles.xml` in Backup umbenennen →
    /// neu schreiben → neu laden. Liefert den Pfad des Backups.
    pub fn save(&mut self) -> Result<PathBuf, SorterError> {
        self.save_with(Local::now(), |path, content| std::fs::write(path, content))
    }

    /// Wie [`Self::save`], mit festem Zeitstempel und austauschbarem Schreibschritt.
    fn save_with<W>(&mut self, now: DateTime<Local>, write: W) -> Result<PathBuf, SorterError>
    where
        W: FnOnce(&Path, &str) -> std::io::Result<()>,
    {
        self.document.reorder(&self.vehicles.all_ids());
        let xml_content = write_vehicles_xml(&self.document);

        let backup = backup::create_backup(&self.folder, now).map_err(|source| {
            SorterError::Save {
                path: vehicles_path(&self.folder),
                source,
            }
        })?;

        if let Err(source) = write(&vehicles_path(&self.folder), &xml_content) {
            log::error!(
                "vehicles.xml konnte nach dem Backup nicht geschrieben werden: {}",
                source
            );
            return Err(SorterError::WriteAfterBackup { backup, source });
        }

        log::info!(
            "{} Fahrzeuge gespeichert, Backup: {}",
            self.vehicles.total_count(),
            backup.display()
        );

        *self = Self::load(&self.folder, self.vehicles.filter())?;
        Ok(backup)
    }

    /// Savegame-Ordner.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Original-Dokument (in der Reihenfolge des letzten Ladens/Speicherns).
    pub fn document(&self) -> &VehiclesDocument {
        &self.document
    }

    /// Beide Fahrzeuglisten.
    pub fn vehicles(&self) -> &VehicleList {
        &self.vehicles
    }

    /// Alle Fahrzeuge in maßgeblicher Reihenfolge.
    pub fn all_vehicles(&self) -> impl ExactSizeIterator<Item = &Vehicle> + '_ {
        self.vehicles.all_vehicles()
    }

    /// Angezeigte Fahrzeuge.
    pub fn display_list(&self) -> impl ExactSizeIterator<Item = &Vehicle> + '_ {
        self.vehicles.display_list()
    }

    /// Ob alle Fahrzeuge (auch nicht anwählbare) angezeigt werden.
    pub fn show_all_vehicles(&self) -> bool {
        self.vehicles.filter() == VehicleFilter::All
    }

    /// Schaltet den Filter um und leitet die Anzeigeliste neu ab (ohne Neuladen).
    pub fn set_show_all_vehicles(&mut self, show_all: bool) {
        self.vehicles.set_filter(VehicleFilter::from_show_all(show_all));
        log::info!(
            "Filter: {} von {} Fahrzeugen angezeigt",
            self.vehicles.display_count(),
            self.vehicles.total_count()
        );
    }

    /// Siehe [`VehicleList::move_up`].
    pub fn move_up(&mut self, unique_id: &str, positions: usize) -> Result<usize, SorterError> {
        self.vehicles.move_up(unique_id, positions)
    }

    /// Siehe [`VehicleList::move_down`].
    pub fn move_down(&mut self, unique_id: &str, positions: usize) -> Result<usize, SorterError> {
        self.vehicles.move_down(unique_id, positions)
    }

    /// Siehe [`VehicleList::sort_by_name`].
    pub fn sort_by_name(&mut self) {
        self.vehicles.sort_by_name();
        log::info!(
            "{} Fahrzeuge nach Name sortiert",
            self.vehicles.display_count()
        );
    }

    /// Siehe [`VehicleList::attached_to`].
    pub fn get_attached_to(&self, unique_id: &str) -> Result<Option<&Vehicle>, SorterError> {
        self.vehicles.attached_to(unique_id)
    }

    /// Siehe [`VehicleList::attached_vehicles`].
    pub fn get_attached_vehicles(&self, unique_id: &str) -> Result<Vec<&Vehicle>, SorterError> {
        self.vehicles.attached_vehicles(unique_id)
    }

    /// Detailfelder für ein angezeigtes Fahrzeug.
    pub fn details(&self, unique_id: &str) -> Result<VehicleDetails, SorterError> {
        let vehicle = self.vehicles.get(unique_id).ok_or_else(|| {
            SorterError::Precondition(format!("Fahrzeug '{}' ist nicht geladen", unique_id))
        })?;

        let attached_to = self
            .get_attached_to(unique_id)?
            .map_or_else(|| NOTHING_LABEL.to_string(), |parent| parent.to_string());

        let attached = self.get_attached_vehicles(unique_id)?;
        let has_attached = if attached.is_empty() {
            NOTHING_LABEL.to_string()
        } else {
            let names: Vec<&str> = attached.iter().map(|v| v.name.as_str()).collect();
            format!("{}: {}", attached.len(), names.join(", "))
        };

        Ok(VehicleDetails {
            name: vehicle.name.clone(),
            position: self.vehicles.position_label(unique_id)?,
            operating_time: vehicle.operating_time,
            license_plates: vehicle.license_plates.clone(),
            attached_to,
            has_attached,
        })
    }
}
