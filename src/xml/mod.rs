//! XML Import/Export für FS25 `vehicles.xml`.
//!
//! Fahrzeuge werden als unveränderte Original-Nodes gehalten; Speichern
//! vertauscht nur deren Reihenfolge, der Rest des Dokuments bleibt erhalten.

pub mod document;
pub mod parser;
pub mod writer;

pub use document::{VehicleNode, VehiclesDocument};
pub use parser::{parse_vehicles_xml, read_attached_vehicle_ids, read_vehicle_fields};
pub use writer::{write_vehicles_xml, XML_DECLARATION};
