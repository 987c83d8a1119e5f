/// Integration-Tests für XML-Parsing und -Export
use fs25_vehicle_sorter::xml::{parse_vehicles_xml, write_vehicles_xml};
use fs25_vehicle_sorter::{SorterError, Vehicle};

const FIXTURE: &str = include_str!("fixtures/vehicles.xml");

#[test]
fn test_parse_fixture() {
    let document = parse_vehicles_xml(FIXTURE).expect("Fixture sollte parsen");

    assert_eq!(document.vehicle_count(), 5);
    assert_eq!(
        document.unique_ids(),
        vec![
            "vehicle6a0b1c2d",
            "vehicle11223344",
            "vehicle9f8e7d6c",
            "vehicleaabbccdd",
            "vehicle55667788"
        ]
    );
}

#[test]
fn test_fixture_vehicles_have_derived_fields() {
    let document = parse_vehicles_xml(FIXTURE).expect("Fixture sollte parsen");
    let vehicles: Vec<Vehicle> = document
        .nodes()
        .iter()
        .map(Vehicle::from_node)
        .collect::<Result<_, _>>()
        .expect("Alle Fahrzeuge gültig");

    let names: Vec<&str> = vehicles.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "vario700",
            "bigBud747 (FS25_bigBud)",
            "tkd302",
            "arion600",
            "pickup"
        ]
    );
    let tabbable: Vec<bool> = vehicles.iter().map(|v| v.is_tabbable).collect();
    assert_eq!(tabbable, vec![true, true, false, true, false]);
    assert_eq!(
        vehicles[0].attached_vehicle_ids(),
        vec!["vehicle9f8e7d6c".to_string()]
    );
}

#[test]
fn test_unchanged_document_is_written_byte_for_byte() {
    let document = parse_vehicles_xml(FIXTURE).expect("Fixture sollte parsen");
    assert_eq!(write_vehicles_xml(&document), FIXTURE);
}

#[test]
fn test_reorder_keeps_non_vehicle_content() {
    let mut document = parse_vehicles_xml(FIXTURE).expect("Fixture sollte parsen");
    document.reorder(&[
        "vehicle55667788",
        "vehicleaabbccdd",
        "vehicle9f8e7d6c",
        "vehicle11223344",
        "vehicle6a0b1c2d",
    ]);
    let written = write_vehicles_xml(&document);

    assert!(written.contains("<!-- Anhänger, nicht per TAB anwählbar -->"));
    assert!(written.contains(r#"<attachments rootVehicleId="1">"#));
    assert!(written.contains(r#"fillLevel="12000.5""#));

    let reparsed = parse_vehicles_xml(&written).expect("Export sollte parsen");
    assert_eq!(
        reparsed.unique_ids(),
        vec![
            "vehicle55667788",
            "vehicleaabbccdd",
            "vehicle9f8e7d6c",
            "vehicle11223344",
            "vehicle6a0b1c2d"
        ]
    );
}

#[test]
fn test_malformed_xml_is_parse_error() {
    for xml in [
        "",
        "<vehicles><vehicle uniqueId=\"a\" filename=\"a.xml\" operatingTime=\"0\"></vehicles>",
        "<vehicles/><vehicles/>",
    ] {
        let err = parse_vehicles_xml(xml).expect_err(xml);
        assert!(matches!(err, SorterError::Parse(_)), "{xml}: {err}");
    }
}
