//! Writer für FS25 `vehicles.xml`-Dateien.

use super::document::VehiclesDocument;

/// XML-Deklaration, wie FS25 sie selbst schreibt.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>"#;

/// Schreibt das Dokument in seiner aktuellen Node-Reihenfolge als UTF-8-Text.
///
/// Die Original-Deklaration wird durch [`XML_DECLARATION`] ersetzt, alle
/// übrigen Zeichen stammen unverändert aus dem Quelltext. Der Zeilenumbruch
/// nach der Deklaration gehört zur ersten Lücke; fehlte die Deklaration,
/// wird ein Umbruch im Stil der Datei ergänzt.
pub fn write_vehicles_xml(document: &VehiclesDocument) -> String {
    let separator = match document.declaration {
        Some(_) => "",
        None => line_ending(document),
    };
    let capacity = XML_DECLARATION.len()
        + separator.len()
        + document.gaps().iter().map(String::len).sum::<usize>()
        + document
            .nodes()
            .iter()
            .map(|n| n.source.len())
            .sum::<usize>();

    let mut output = String::with_capacity(capacity);
    output.push_str(XML_DECLARATION);
    output.push_str(separator);

    let mut gaps = document.gaps().iter();
    if let Some(first) = gaps.next() {
        output.push_str(first);
    }
    for (node, gap) in document.nodes().iter().zip(gaps) {
        output.push_str(&node.source);
        output.push_str(gap);
    }

    output
}

/// `\r\n`, wenn die Datei Windows-Umbrüche nutzt, sonst `\n`.
fn line_ending(document: &VehiclesDocument) -> &'static str {
    let uses_crlf = document
        .gaps()
        .iter()
        .map(String::as_str)
        .chain(document.nodes().iter().map(|n| &*n.source))
        .any(|text| text.contains("\r\n"));
    if uses_crlf {
        "\r\n"
    } else {
        "\n"
    }
}
