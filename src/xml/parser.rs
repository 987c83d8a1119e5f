//! Parser für FS25 `vehicles.xml`-Dateien.

use super::document::{VehicleNode, VehiclesDocument};
use crate::core::SorterError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashSet;

const VEHICLE_TAG: &[u8] = b"vehicle";
const ATTACHER_JOINTS_TAG: &[u8] = b"attacherJoints";
const ATTACHED_IMPLEMENT_TAG: &[u8] = b"attachedImplement";
const XML_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Rohwerte eines `<vehicle>`-Elements, noch ohne Ableitungen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFields {
    /// `uniqueId`
    pub unique_id: Option<String>,
    /// `filename` (Pfad zur Fahrzeug-XML)
    pub filename: Option<String>,
    /// `modName`, nur bei Mod-Fahrzeugen
    pub mod_name: Option<String>,
    /// `operatingTime` in Sekunden (als Text)
    pub operating_time: Option<String>,
    /// `characters` aus `<licensePlates>`
    pub license_plates: Option<String>,
    /// `isTabbable` aus `<enterable>`
    pub is_tabbable: Option<String>,
}

/// Parsed eine `vehicles.xml` in ein textgetreues Dokument.
///
/// Nur direkte `<vehicle>`-Kinder des Wurzelelements zählen als Fahrzeuge.
pub fn parse_vehicles_xml(xml_content: &str) -> Result<VehiclesDocument, SorterError> {
    let content = xml_content.strip_prefix('\u{feff}').unwrap_or(xml_content);
    let mut reader = Reader::from_str(content);

    let mut declaration: Option<String> = None;
    let mut gaps: Vec<String> = Vec::new();
    let mut nodes: Vec<VehicleNode> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    let mut depth = 0usize;
    let mut root_seen = false;
    let mut gap_start = 0usize;
    let mut open_vehicle: Option<(usize, String)> = None;

    loop {
        let event_start = reader.buffer_position() as usize;
        let event = reader.read_event().map_err(|err| {
            SorterError::parse(format!(
                "XML-Fehler an Position {}: {}",
                reader.error_position(),
                err
            ))
        })?;
        let event_end = reader.buffer_position() as usize;

        match event {
            Event::Decl(_) => {
                // Nur Leerraum darf vor der Deklaration stehen; er entfällt beim Schreiben.
                // Der Zeilenumbruch danach bleibt Teil der ersten Lücke.
                let prolog_is_blank = content[..event_start]
                    .trim_matches(XML_WHITESPACE)
                    .is_empty();
                if declaration.is_some() || root_seen || !prolog_is_blank {
                    return Err(SorterError::parse(format!(
                        "XML-Deklaration an Position {} ist nicht am Dateianfang",
                        event_start
                    )));
                }
                declaration = Some(content[event_start..event_end].to_string());
                gap_start = event_end;
            }
            Event::Start(ref e) => {
                if depth == 0 {
                    if root_seen {
                        return Err(SorterError::parse("Mehrere Wurzelelemente"));
                    }
                    root_seen = true;
                } else if depth == 1 && e.name().as_ref() == VEHICLE_TAG {
                    let unique_id = required_unique_id(e, nodes.len())?;
                    open_vehicle = Some((event_start, unique_id));
                }
                depth += 1;
            }
            Event::Empty(ref e) => {
                if depth == 0 {
                    if root_seen {
                        return Err(SorterError::parse("Mehrere Wurzelelemente"));
                    }
                    root_seen = true;
                } else if depth == 1 && e.name().as_ref() == VEHICLE_TAG {
                    let unique_id = required_unique_id(e, nodes.len())?;
                    push_node(
                        content,
                        (event_start, event_end),
                        unique_id,
                        &mut gap_start,
                        &mut gaps,
                        &mut nodes,
                        &mut seen_ids,
                    )?;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| SorterError::parse("Unerwartetes schliessendes Tag"))?;
                if depth == 1 {
                    if let Some((start, unique_id)) = open_vehicle.take() {
                        push_node(
                            content,
                            (start, event_end),
                            unique_id,
                            &mut gap_start,
                            &mut gaps,
                            &mut nodes,
                            &mut seen_ids,
                        )?;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(SorterError::parse("Kein Wurzelelement gefunden"));
    }
    if depth != 0 {
        return Err(SorterError::parse("XML endet mit offenen Elementen"));
    }

    gaps.push(content[gap_start..].to_string());

    Ok(VehiclesDocument::from_parts(declaration, gaps, nodes))
}

/// Übernimmt einen abgeschlossenen Fahrzeug-Node samt vorangehendem Zwischentext.
fn push_node(
    content: &str,
    (start, end): (usize, usize),
    unique_id: String,
    gap_start: &mut usize,
    gaps: &mut Vec<String>,
    nodes: &mut Vec<VehicleNode>,
    seen_ids: &mut HashSet<String>,
) -> Result<(), SorterError> {
    if !seen_ids.insert(unique_id.clone()) {
        return Err(SorterError::parse(format!(
            "uniqueId '{}' ist mehrfach vergeben",
            unique_id
        )));
    }
    gaps.push(content[*gap_start..start].to_string());
    nodes.push(VehicleNode::new(unique_id, &content[start..end]));
    *gap_start = end;
    Ok(())
}

fn required_unique_id(e: &BytesStart<'_>, index: usize) -> Result<String, SorterError> {
    attribute(e, "uniqueId")?
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            SorterError::parse(format!("Fahrzeug Nr. {} hat keine uniqueId", index + 1))
        })
}

/// Liest die Rohwerte eines einzelnen `<vehicle>`-Nodes.
pub fn read_vehicle_fields(node: &str) -> Result<VehicleFields, SorterError> {
    let mut fields = VehicleFields::default();

    visit_elements(node, |parents, e| {
        match parents {
            [] => {
                fields.unique_id = attribute(e, "uniqueId")?;
                fields.filename = attribute(e, "filename")?;
                fields.mod_name = attribute(e, "modName")?;
                fields.operating_time = attribute(e, "operatingTime")?;
            }
            [_] => match e.name().as_ref() {
                b"licensePlates" => fields.license_plates = attribute(e, "characters")?,
                b"enterable" => fields.is_tabbable = attribute(e, "isTabbable")?,
                _ => {}
            },
            _ => {}
        }
        Ok(())
    })?;

    Ok(fields)
}

/// Liest die `attachedVehicleUniqueId`s aus `attacherJoints/attachedImplement`.
///
/// Leere IDs werden übersprungen, die Reihenfolge entspricht dem Dokument.
pub fn read_attached_vehicle_ids(node: &str) -> Result<Vec<String>, SorterError> {
    let mut ids = Vec::new();

    visit_elements(node, |parents, e| {
        if parents.len() == 2
            && parents[1] == ATTACHER_JOINTS_TAG
            && e.name().as_ref() == ATTACHED_IMPLEMENT_TAG
        {
            if let Some(id) = attribute(e, "attachedVehicleUniqueId")? {
                if !id.is_empty() {
                    ids.push(id);
                }
            }
        }
        Ok(())
    })?;

    Ok(ids)
}

/// Ruft `visit` für jedes Start-/Empty-Element mit dem Pfad der offenen Eltern auf.
fn visit_elements<F>(node: &str, mut visit: F) -> Result<(), SorterError>
where
    F: FnMut(&[Vec<u8>], &BytesStart<'_>) -> Result<(), SorterError>,
{
    let mut reader = Reader::from_str(node);
    let mut parents: Vec<Vec<u8>> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                visit(&parents, e)?;
                parents.push(e.name().as_ref().to_vec());
            }
            Ok(Event::Empty(ref e)) => visit(&parents, e)?,
            Ok(Event::End(_)) => {
                parents.pop();
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(SorterError::parse(format!(
                    "Fehler beim Lesen eines Fahrzeugs: {}",
                    err
                )))
            }
            _ => {}
        }
    }

    Ok(())
}

/// Liest ein Attribut (unescaped). `None`, wenn es fehlt.
fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, SorterError> {
    let Some(attr) = e.try_get_attribute(key).map_err(SorterError::parse)? else {
        return Ok(None);
    };
    let value = attr.unescape_value().map_err(SorterError::parse)?;
    Ok(Some(value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<vehicles>
    <vehicle uniqueId="vehicleA" filename="data/vehicles/fendt/vario700/vario700.xml" operatingTime="7200">
        <enterable isTabbable="true"/>
        <attacherJoints>
            <attachedImplement jointIndex="1" attachedVehicleUniqueId="vehicleB" moveDown="true"/>
        </attacherJoints>
    </vehicle>
    <!-- Anhänger -->
    <vehicle uniqueId="vehicleB" filename="data/vehicles/krampe/bandit750/bandit750.xml" operatingTime="0"/>
    <onCreateObjects/>
</vehicles>
"#;

    #[test]
    fn test_parse_splits_vehicle_nodes_and_gaps() {
        let doc = parse_vehicles_xml(SIMPLE).expect("Parsing fehlgeschlagen");

        assert_eq!(doc.unique_ids(), vec!["vehicleA", "vehicleB"]);
        assert_eq!(doc.gaps().len(), 3);
        assert!(doc.gaps()[0].starts_with("\n<vehicles>"));
        assert!(doc.gaps()[1].contains("<!-- Anhänger -->"));
        assert!(doc.gaps()[2].contains("<onCreateObjects/>"));
        assert!(doc.nodes()[0].source.ends_with("</vehicle>"));
        assert!(doc.nodes()[1].source.starts_with("<vehicle uniqueId=\"vehicleB\""));
        assert_eq!(
            doc.declaration.as_deref(),
            Some(r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>"#)
        );
    }

    #[test]
    fn test_declaration_after_leading_whitespace_is_captured() {
        let xml = "\n  <?xml version=\"1.0\" encoding=\"utf-8\"?>\n<vehicles><vehicle uniqueId=\"a\"/></vehicles>";
        let doc = parse_vehicles_xml(xml).expect("Parsing fehlgeschlagen");

        assert_eq!(
            doc.declaration.as_deref(),
            Some(r#"<?xml version="1.0" encoding="utf-8"?>"#)
        );
        assert_eq!(doc.gaps()[0], "\n<vehicles>");
    }

    #[test]
    fn test_parse_fails_for_misplaced_declaration() {
        let after_comment = "<!-- x --><?xml version=\"1.0\"?><vehicles/>";
        let after_root = "<vehicles/><?xml version=\"1.0\"?>";
        for xml in [after_comment, after_root] {
            let err = parse_vehicles_xml(xml).expect_err("Parser sollte fehlschlagen");
            assert!(err.to_string().contains("XML-Deklaration"), "{}", xml);
        }
    }

    #[test]
    fn test_parse_fails_for_missing_unique_id() {
        let xml = r#"<vehicles><vehicle filename="a.xml" operatingTime="0"/></vehicles>"#;
        let err = parse_vehicles_xml(xml).expect_err("Parser sollte fehlschlagen");
        assert!(err.to_string().contains("keine uniqueId"));
    }

    #[test]
    fn test_parse_fails_for_duplicate_unique_id() {
        let xml = r#"<vehicles>
            <vehicle uniqueId="x" filename="a.xml" operatingTime="0"/>
            <vehicle uniqueId="x" filename="b.xml" operatingTime="0"/>
        </vehicles>"#;
        let err = parse_vehicles_xml(xml).expect_err("Parser sollte fehlschlagen");
        assert!(matches!(err, SorterError::Parse(_)));
    }

    #[test]
    fn test_parse_fails_for_unclosed_root() {
        let xml = r#"<vehicles><vehicle uniqueId="x" filename="a.xml" operatingTime="0"/>"#;
        assert!(parse_vehicles_xml(xml).is_err());
    }

    #[test]
    fn test_parse_fails_for_empty_input() {
        assert!(parse_vehicles_xml("").is_err());
    }

    #[test]
    fn test_empty_vehicle_list_is_valid() {
        let doc = parse_vehicles_xml("<vehicles>\n</vehicles>\n").expect("Parsing fehlgeschlagen");
        assert_eq!(doc.vehicle_count(), 0);
        assert_eq!(doc.gaps().len(), 1);
    }

    #[test]
    fn test_read_vehicle_fields_reads_direct_children_only() {
        let node = r#"<vehicle uniqueId="v1" filename="a/b.xml" modName="FS25_Mod" operatingTime="3600">
            <licensePlates variation="1" characters="AB 123"/>
            <enterable isTabbable="false">
                <licensePlates characters="nested"/>
            </enterable>
        </vehicle>"#;

        let fields = read_vehicle_fields(node).expect("Lesen fehlgeschlagen");
        assert_eq!(fields.unique_id.as_deref(), Some("v1"));
        assert_eq!(fields.mod_name.as_deref(), Some("FS25_Mod"));
        assert_eq!(fields.license_plates.as_deref(), Some("AB 123"));
        assert_eq!(fields.is_tabbable.as_deref(), Some("false"));
    }

    #[test]
    fn test_read_attached_vehicle_ids_skips_empty_and_foreign_elements() {
        let node = r#"<vehicle uniqueId="t">
            <attachedImplement attachedVehicleUniqueId="outside"/>
            <attacherJoints>
                <attachedImplement attachedVehicleUniqueId="first"/>
                <attachedImplement attachedVehicleUniqueId=""/>
                <attachedImplement jointIndex="2"/>
                <attachedImplement attachedVehicleUniqueId="second"/>
            </attacherJoints>
        </vehicle>"#;

        let ids = read_attached_vehicle_ids(node).expect("Lesen fehlgeschlagen");
        assert_eq!(ids, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let node = r#"<vehicle uniqueId="v&amp;1" filename="a.xml" operatingTime="0"/>"#;
        let fields = read_vehicle_fields(node).expect("Lesen fehlgeschlagen");
        assert_eq!(fields.unique_id.as_deref(), Some("v&1"));
    }
}
