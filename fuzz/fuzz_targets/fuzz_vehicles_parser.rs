#![no_main]

use fs25_vehicle_sorter::{parse_vehicles_xml, write_vehicles_xml, Vehicle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = parse_vehicles_xml(xml) else {
        return;
    };

    for node in document.nodes() {
        if let Ok(vehicle) = Vehicle::from_node(node) {
            let _ = vehicle.attached_vehicle_ids();
        }
    }

    // Export eines gültigen Dokuments muss wieder parsebar sein
    let written = write_vehicles_xml(&document);
    let reparsed = parse_vehicles_xml(&written).expect("Export nicht parsebar");
    assert_eq!(reparsed.unique_ids(), document.unique_ids());
});
