//! Doppelte Fahrzeugliste: maßgebliche Gesamtreihenfolge und gefilterte Anzeigeliste.
//!
//! `all_order` ist die Reihenfolge, die ins Savegame geschrieben wird und im
//! Spiel die TAB-Reihenfolge bestimmt. `display_order` enthält nur Fahrzeuge,
//! die den aktuellen Filter passieren, und wird vom Benutzer direkt umsortiert.
//!
//! Invariante: die Fahrzeuge der Anzeigeliste stehen in `all_order` in
//! derselben relativen Reihenfolge wie in `display_order`. Jede Verschiebung
//! entfernt genau ein Fahrzeug aus `all_order` und fügt es an genau einer
//! Stelle wieder ein; ausgeblendete Fahrzeuge werden nie bewegt.

use super::{SorterError, Vehicle};
use std::collections::HashMap;

/// Sichtbarkeitsfilter der Anzeigeliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleFilter {
    /// Nur per TAB anwählbare Fahrzeuge (Standard)
    #[default]
    TabbableOnly,
    /// Alle Fahrzeuge
    All,
}

impl VehicleFilter {
    /// Filter passend zur "Alle Fahrzeuge anzeigen"-Checkbox.
    pub fn from_show_all(show_all: bool) -> Self {
        if show_all {
            Self::All
        } else {
            Self::TabbableOnly
        }
    }

    /// Prüft, ob ein Fahrzeug in der Anzeigeliste erscheint.
    pub fn accepts(self, vehicle: &Vehicle) -> bool {
        match self {
            Self::TabbableOnly => vehicle.is_tabbable,
            Self::All => true,
        }
    }
}

/// Richtung einer Verschiebung in der Anzeigeliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveDirection {
    Up,
    Down,
}

/// Beide Fahrzeuglisten über einer gemeinsamen Fahrzeugmenge.
#[derive(Debug, Clone, Default)]
pub struct VehicleList {
    /// Fahrzeuge in Ladereihenfolge (Arena, wird nie umsortiert)
    vehicles: Vec<Vehicle>,
    /// `uniqueId` → Arena-Index
    index_by_id: HashMap<String, usize>,
    /// Maßgebliche Reihenfolge (Arena-Indizes)
    all_order: Vec<usize>,
    /// Anzeigereihenfolge (Arena-Indizes, Teilmenge von `all_order`)
    display_order: Vec<usize>,
    /// Aktueller Filter
    filter: VehicleFilter,
}

impl VehicleList {
    /// Baut beide Listen aus Fahrzeugen in Dokumentreihenfolge.
    pub fn new(vehicles: Vec<Vehicle>, filter: VehicleFilter) -> Result<Self, SorterError> {
        let mut index_by_id = HashMap::with_capacity(vehicles.len());
        for (index, vehicle) in vehicles.iter().enumerate() {
            if index_by_id
                .insert(vehicle.unique_id.clone(), index)
                .is_some()
            {
                return Err(SorterError::parse(format!(
                    "uniqueId '{}' ist mehrfach vergeben",
                    vehicle.unique_id
                )));
            }
        }

        let mut list = Self {
            all_order: (0..vehicles.len()).collect(),
            vehicles,
            index_by_id,
            display_order: Vec::new(),
            filter,
        };
        list.rebuild_display_order();
        Ok(list)
    }

    /// Aktueller Sichtbarkeitsfilter.
    pub fn filter(&self) -> VehicleFilter {
        self.filter
    }

    /// Setzt den Filter und leitet die Anzeigeliste aus `all_order` neu ab.
    pub fn set_filter(&mut self, filter: VehicleFilter) {
        self.filter = filter;
        self.rebuild_display_order();
    }

    fn rebuild_display_order(&mut self) {
        let filter = self.filter;
        let vehicles = &self.vehicles;
        self.display_order = self
            .all_order
            .iter()
            .copied()
            .filter(|&i| filter.accepts(&vehicles[i]))
            .collect();
    }

    /// Alle Fahrzeuge in maßgeblicher Reihenfolge.
    pub fn all_vehicles(&self) -> impl ExactSizeIterator<Item = &Vehicle> + '_ {
        self.all_order.iter().map(move |&i| &self.vehicles[i])
    }

    /// Fahrzeuge der Anzeigeliste in Anzeigereihenfolge.
    pub fn display_list(&self) -> impl ExactSizeIterator<Item = &Vehicle> + '_ {
        self.display_order.iter().map(move |&i| &self.vehicles[i])
    }

    /// `uniqueId`s in maßgeblicher Reihenfolge.
    pub fn all_ids(&self) -> Vec<&str> {
        self.all_vehicles().map(|v| v.unique_id.as_str()).collect()
    }

    /// `uniqueId`s in Anzeigereihenfolge.
    pub fn display_ids(&self) -> Vec<&str> {
        self.display_list().map(|v| v.unique_id.as_str()).collect()
    }

    /// Anzahl aller Fahrzeuge.
    pub fn total_count(&self) -> usize {
        self.all_order.len()
    }

    /// Anzahl der angezeigten Fahrzeuge.
    pub fn display_count(&self) -> usize {
        self.display_order.len()
    }

    /// Sucht ein Fahrzeug über seine `uniqueId`.
    pub fn get(&self, unique_id: &str) -> Option<&Vehicle> {
        self.index_by_id
            .get(unique_id)
            .map(|&index| &self.vehicles[index])
    }

    /// Index des Fahrzeugs in der Anzeigeliste.
    pub fn display_index_of(&self, unique_id: &str) -> Option<usize> {
        let index = *self.index_by_id.get(unique_id)?;
        self.display_order.iter().position(|&i| i == index)
    }

    /// Positionsanzeige (1-basiert), z.B. `3 of 12 tabbable (total: 20)`.
    pub fn position_label(&self, unique_id: &str) -> Result<String, SorterError> {
        let index = self.require_displayed(unique_id)?.1;
        let position = index + 1;
        Ok(match self.filter {
            VehicleFilter::All => format!("{} of {}", position, self.total_count()),
            VehicleFilter::TabbableOnly => format!(
                "{} of {} tabbable (total: {})",
                position,
                self.display_count(),
                self.total_count()
            ),
        })
    }

    /// Verschiebt ein Fahrzeug um bis zu `positions` Plätze nach oben (frühere TAB-Position).
    ///
    /// Die Distanz wird auf den verfügbaren Platz begrenzt, `9999` springt an den Anfang.
    /// Liefert den neuen Index in der Anzeigeliste.
    pub fn move_up(&mut self, unique_id: &str, positions: usize) -> Result<usize, SorterError> {
        let (arena_index, current) = self.require_displayed(unique_id)?;
        let distance = positions.min(current);
        if distance == 0 {
            return Ok(current);
        }

        let new_index = current - distance;
        self.display_order.remove(current);
        self.display_order.insert(new_index, arena_index);
        self.reconcile_all_order(arena_index, new_index, MoveDirection::Up);

        log::debug!("{} nach oben: {} -> {}", unique_id, current, new_index);
        Ok(new_index)
    }

    /// Verschiebt ein Fahrzeug um bis zu `positions` Plätze nach unten (spätere TAB-Position).
    ///
    /// Die Distanz wird auf den verfügbaren Platz begrenzt, `9999` springt ans Ende.
    /// Liefert den neuen Index in der Anzeigeliste.
    pub fn move_down(&mut self, unique_id: &str, positions: usize) -> Result<usize, SorterError> {
        let (arena_index, current) = self.require_displayed(unique_id)?;
        let last = self.display_order.len() - 1;
        let distance = positions.min(last - current);
        if distance == 0 {
            return Ok(current);
        }

        let new_index = current + distance;
        self.display_order.remove(current);
        self.display_order.insert(new_index, arena_index);
        self.reconcile_all_order(arena_index, new_index, MoveDirection::Down);

        log::debug!("{} nach unten: {} -> {}", unique_id, current, new_index);
        Ok(new_index)
    }

    /// Überträgt eine Verschiebung der Anzeigeliste auf `all_order`.
    ///
    /// Erster Slot: vor das erste Fahrzeug, das den Filter passiert.
    /// Letzter Slot: hinter das letzte Fahrzeug, das den Filter passiert.
    /// Sonst: direkt neben den Anzeige-Nachbarn, an dem das Fahrzeug vorbeigezogen ist.
    fn reconcile_all_order(&mut self, arena_index: usize, new_index: usize, direction: MoveDirection) {
        if let Some(pos) = self.all_order.iter().position(|&i| i == arena_index) {
            self.all_order.remove(pos);
        }

        let last = self.display_order.len() - 1;
        let filter = self.filter;
        let vehicles = &self.vehicles;
        let all_position = |target: usize, order: &[usize]| order.iter().position(|&i| i == target);

        let slot = if new_index == 0 {
            self.all_order
                .iter()
                .position(|&i| filter.accepts(&vehicles[i]))
                .unwrap_or(0)
        } else if new_index == last {
            self.all_order
                .iter()
                .rposition(|&i| filter.accepts(&vehicles[i]))
                .map_or(self.all_order.len(), |pos| pos + 1)
        } else {
            match direction {
                MoveDirection::Down => {
                    let previous = self.display_order[new_index - 1];
                    all_position(previous, &self.all_order).map_or(self.all_order.len(), |p| p + 1)
                }
                MoveDirection::Up => {
                    let next = self.display_order[new_index + 1];
                    all_position(next, &self.all_order).unwrap_or(0)
                }
            }
        };

        self.all_order.insert(slot, arena_index);
    }

    /// Sortiert die Anzeigeliste nach Name (ohne Groß-/Kleinschreibung).
    ///
    /// `all_order` wird neu aufgebaut: zuerst alle ausgeblendeten Fahrzeuge in
    /// ihrer bisherigen Reihenfolge, danach die angezeigten in sortierter Reihenfolge.
    // TODO: Produktentscheidung einholen, ob ausgeblendete Fahrzeuge wirklich als Block vorne landen sollen
    pub fn sort_by_name(&mut self) {
        let vehicles = &self.vehicles;
        self.display_order
            .sort_by_key(|&i| vehicles[i].name.to_lowercase());

        let filter = self.filter;
        let mut rebuilt: Vec<usize> = self
            .all_order
            .iter()
            .copied()
            .filter(|&i| !filter.accepts(&vehicles[i]))
            .collect();
        rebuilt.extend(self.display_order.iter().copied());
        self.all_order = rebuilt;
    }

    /// Das Fahrzeug, an dem `unique_id` hängt (erster Treffer in `all_order`).
    pub fn attached_to(&self, unique_id: &str) -> Result<Option<&Vehicle>, SorterError> {
        self.require_known(unique_id)?;

        let mut parents = self
            .all_vehicles()
            .filter(|candidate| {
                candidate
                    .attached_vehicle_ids()
                    .iter()
                    .any(|id| id == unique_id)
            });
        let first = parents.next();
        if first.is_some() {
            let others = parents.count();
            if others > 0 {
                log::warn!(
                    "{} ist an {} Fahrzeuge angehängt, verwende das erste",
                    unique_id,
                    others + 1
                );
            }
        }
        Ok(first)
    }

    /// Alle Fahrzeuge, die an `unique_id` hängen, in `all_order`-Reihenfolge.
    pub fn attached_vehicles(&self, unique_id: &str) -> Result<Vec<&Vehicle>, SorterError> {
        let vehicle = self.require_known(unique_id)?;
        let attached_ids = vehicle.attached_vehicle_ids();

        for id in &attached_ids {
            if !self.index_by_id.contains_key(id) {
                log::warn!("{} verweist auf unbekanntes Fahrzeug {}", unique_id, id);
            }
        }

        Ok(self
            .all_vehicles()
            .filter(|v| attached_ids.contains(&v.unique_id))
            .collect())
    }

    fn require_known(&self, unique_id: &str) -> Result<&Vehicle, SorterError> {
        self.get(unique_id).ok_or_else(|| {
            SorterError::Precondition(format!("Fahrzeug '{}' ist nicht geladen", unique_id))
        })
    }

    /// Arena-Index und Anzeige-Index eines angezeigten Fahrzeugs.
    fn require_displayed(&self, unique_id: &str) -> Result<(usize, usize), SorterError> {
        let arena_index = *self.index_by_id.get(unique_id).ok_or_else(|| {
            SorterError::Precondition(format!("Fahrzeug '{}' ist nicht geladen", unique_id))
        })?;
        let display_index = self
            .display_order
            .iter()
            .position(|&i| i == arena_index)
            .ok_or_else(|| {
                SorterError::Precondition(format!(
                    "Fahrzeug '{}' ist nicht in der Anzeigeliste",
                    unique_id
                ))
            })?;
        Ok((arena_index, display_index))
    }

    /// Prüft die Listen-Invariante (Anzeigeliste ist geordnete Teilfolge von `all_order`).
    pub fn is_consistent(&self) -> bool {
        let mut all = self.all_order.iter();
        let ordered_subsequence = self
            .display_order
            .iter()
            .all(|d| all.by_ref().any(|a| a == d));
        let mut sorted_all = self.all_order.clone();
        sorted_all.sort_unstable();
        ordered_subsequence && sorted_all == (0..self.vehicles.len()).collect::<Vec<_>>()
    }
}
