//! Einzelnes Fahrzeug aus der `vehicles.xml`.

use super::SorterError;
use crate::xml::{read_attached_vehicle_ids, read_vehicle_fields, VehicleNode};
use std::fmt;
use std::sync::Arc;

/// Platzhalter für Fahrzeuge ohne Kennzeichen.
pub const NO_LICENSE_PLATES: &str = "[None]";

/// Sekunden pro Betriebsstunde.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Repräsentiert ein Fahrzeug in FS25.
///
/// FS25 identifiziert Fahrzeuge über `uniqueId` (Hash-Strings) statt über
/// fortlaufende Nummern. Die Reihenfolge der Elemente im XML bestimmt die
/// TAB-Reihenfolge im Spiel.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Stabiler Schlüssel, wird nie neu vergeben
    pub unique_id: String,
    /// Anzeigename: Dateiname ohne Pfad/Endung, ggf. mit ` (ModName)`
    pub name: String,
    /// Betriebsstunden, auf eine Nachkommastelle gerundet
    pub operating_time: f64,
    /// Kennzeichen oder [`NO_LICENSE_PLATES`]
    pub license_plates: String,
    /// Fahrzeug ist per TAB im Spiel anwählbar
    pub is_tabbable: bool,
    /// Original-Node im Dokument
    node: Arc<str>,
}

impl Vehicle {
    /// Baut ein Fahrzeug aus einem `<vehicle>`-Node.
    ///
    /// Fehlende Pflichtattribute (`uniqueId`, `filename`, `operatingTime`)
    /// oder eine unlesbare Betriebszeit liefern [`SorterError::Parse`].
    pub fn from_node(node: &VehicleNode) -> Result<Self, SorterError> {
        let fields = read_vehicle_fields(&node.source)?;

        let unique_id = fields
            .unique_id
            .ok_or_else(|| SorterError::parse("Fahrzeug ohne uniqueId"))?;
        let filename = fields.filename.ok_or_else(|| {
            SorterError::parse(format!("Fahrzeug '{}' hat kein filename-Attribut", unique_id))
        })?;
        let operating_time_raw = fields.operating_time.ok_or_else(|| {
            SorterError::parse(format!(
                "Fahrzeug '{}' hat kein operatingTime-Attribut",
                unique_id
            ))
        })?;
        let operating_seconds: f64 = operating_time_raw.trim().parse().map_err(|_| {
            SorterError::parse(format!(
                "Fahrzeug '{}': operatingTime '{}' ist keine Zahl",
                unique_id, operating_time_raw
            ))
        })?;

        // Attacher-Joints einmal prüfen, damit spätere Abfragen nicht scheitern
        read_attached_vehicle_ids(&node.source)?;

        Ok(Self {
            name: display_name(&filename, fields.mod_name.as_deref()),
            operating_time: operating_hours(operating_seconds),
            license_plates: fields
                .license_plates
                .unwrap_or_else(|| NO_LICENSE_PLATES.to_string()),
            is_tabbable: fields
                .is_tabbable
                .is_some_and(|flag| flag.eq_ignore_ascii_case("true")),
            unique_id,
            node: Arc::clone(&node.source),
        })
    }

    /// `uniqueId`s der an dieses Fahrzeug angehängten Fahrzeuge.
    ///
    /// Wird bei jedem Aufruf aus `attacherJoints/attachedImplement` neu gelesen.
    pub fn attached_vehicle_ids(&self) -> Vec<String> {
        match read_attached_vehicle_ids(&self.node) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("Attacher-Joints von {} unlesbar: {}", self.unique_id, e);
                Vec::new()
            }
        }
    }

    /// Original-Quelltext des Fahrzeug-Nodes.
    pub fn node_source(&self) -> &str {
        &self.node
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Leitet den Anzeigenamen aus `filename` und optionalem `modName` ab.
fn display_name(filename: &str, mod_name: Option<&str>) -> String {
    let base = filename
        .rsplit('/')
        .next()
        .unwrap_or(filename)
        .replace(".xml", "");
    match mod_name {
        Some(mod_name) => format!("{} ({})", base, mod_name),
        None => base,
    }
}

/// Rechnet Sekunden in Stunden um (eine Nachkommastelle).
fn operating_hours(seconds: f64) -> f64 {
    (seconds / SECONDS_PER_HOUR * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn node(source: &str) -> VehicleNode {
        VehicleNode::new("ignored", source)
    }

    #[test]
    fn test_from_node_reads_base_game_vehicle() {
        let vehicle = Vehicle::from_node(&node(
            r#"<vehicle uniqueId="vehicle0f3a" filename="data/vehicles/fendt/vario700/vario700.xml" operatingTime="5580.5">
                <licensePlates variation="1" characters="FS 25"/>
                <enterable isTabbable="TRUE"/>
            </vehicle>"#,
        ))
        .expect("Fahrzeug erwartet");

        assert_eq!(vehicle.unique_id, "vehicle0f3a");
        assert_eq!(vehicle.name, "vario700");
        assert_relative_eq!(vehicle.operating_time, 1.6);
        assert_eq!(vehicle.license_plates, "FS 25");
        assert!(vehicle.is_tabbable);
        assert_eq!(vehicle.to_string(), "vario700");
    }

    #[test]
    fn test_from_node_appends_mod_name() {
        let vehicle = Vehicle::from_node(&node(
            r#"<vehicle uniqueId="m1" filename="$moddir$FS25_bigTractor/bigTractor.xml" modName="FS25_bigTractor" operatingTime="0"/>"#,
        ))
        .expect("Fahrzeug erwartet");

        assert_eq!(vehicle.name, "bigTractor (FS25_bigTractor)");
        assert_eq!(vehicle.license_plates, NO_LICENSE_PLATES);
        assert!(!vehicle.is_tabbable);
    }

    #[test]
    fn test_enterable_without_flag_is_not_tabbable() {
        let vehicle = Vehicle::from_node(&node(
            r#"<vehicle uniqueId="t" filename="t.xml" operatingTime="0"><enterable/></vehicle>"#,
        ))
        .expect("Fahrzeug erwartet");
        assert!(!vehicle.is_tabbable);
    }

    #[test]
    fn test_missing_required_attributes_fail() {
        for source in [
            r#"<vehicle filename="a.xml" operatingTime="0"/>"#,
            r#"<vehicle uniqueId="a" operatingTime="0"/>"#,
            r#"<vehicle uniqueId="a" filename="a.xml"/>"#,
            r#"<vehicle uniqueId="a" filename="a.xml" operatingTime="viel"/>"#,
        ] {
            let err = Vehicle::from_node(&node(source)).expect_err(source);
            assert!(matches!(err, SorterError::Parse(_)), "{source}: {err}");
        }
    }

    #[test]
    fn test_attached_vehicle_ids_are_derived_on_demand() {
        let vehicle = Vehicle::from_node(&node(
            r#"<vehicle uniqueId="b" filename="b.xml" operatingTime="0">
                <attacherJoints>
                    <attachedImplement jointIndex="1" attachedVehicleUniqueId="c"/>
                </attacherJoints>
            </vehicle>"#,
        ))
        .expect("Fahrzeug erwartet");

        assert_eq!(vehicle.attached_vehicle_ids(), vec!["c".to_string()]);
        assert_eq!(vehicle.attached_vehicle_ids(), vec!["c".to_string()]);
    }

    #[test]
    fn test_operating_hours_rounds_to_one_decimal() {
        assert_relative_eq!(operating_hours(0.0), 0.0);
        assert_relative_eq!(operating_hours(3600.0), 1.0);
        assert_relative_eq!(operating_hours(3960.0), 1.1);
        assert_relative_eq!(operating_hours(123_456.0), 34.3);
    }

    #[test]
    fn test_display_name_strips_path_and_extension() {
        assert_eq!(display_name("a/b/c/tractor.xml", None), "tractor");
        assert_eq!(display_name("plain.xml", Some("Mod")), "plain (Mod)");
    }
}
