//! Textgetreues Modell einer `vehicles.xml`.
//!
//! Jedes `<vehicle>`-Element bleibt als Originaltext erhalten (Backing-Node).
//! Beim Umsortieren werden nur diese Nodes zwischen festen "Slots" vertauscht,
//! der Text dazwischen (Root-Tag, Whitespace, Kommentare, andere Elemente)
//! bleibt an seiner Stelle. Nicht modellierte Attribute und Kind-Elemente
//! überleben so unverändert.

use std::collections::HashMap;
use std::sync::Arc;

/// Ein `<vehicle>`-Element inklusive aller Kind-Elemente als Originaltext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleNode {
    /// `uniqueId`-Attribut des Elements
    pub unique_id: String,
    /// Exakter Quelltext von `<vehicle` bis zum schließenden Tag
    pub source: Arc<str>,
}

impl VehicleNode {
    /// Erstellt einen Node aus ID und Quelltext.
    pub fn new(unique_id: impl Into<String>, source: impl Into<Arc<str>>) -> Self {
        Self {
            unique_id: unique_id.into(),
            source: source.into(),
        }
    }
}

/// Geparste `vehicles.xml`: Fahrzeug-Nodes in Dokumentreihenfolge plus Zwischentexte.
#[derive(Debug, Clone, Default)]
pub struct VehiclesDocument {
    /// Original-Deklaration (`<?xml ...?>`), falls vorhanden
    pub declaration: Option<String>,
    /// Text vor, zwischen und nach den Fahrzeug-Nodes (`nodes.len() + 1` Einträge)
    pub(crate) gaps: Vec<String>,
    /// Fahrzeug-Nodes in Dokumentreihenfolge
    pub(crate) nodes: Vec<VehicleNode>,
}

impl VehiclesDocument {
    /// Baut ein Dokument aus Zwischentexten und Nodes.
    ///
    /// `gaps` muss genau ein Element mehr enthalten als `nodes`.
    pub(crate) fn from_parts(
        declaration: Option<String>,
        gaps: Vec<String>,
        nodes: Vec<VehicleNode>,
    ) -> Self {
        debug_assert_eq!(gaps.len(), nodes.len() + 1);
        Self {
            declaration,
            gaps,
            nodes,
        }
    }

    /// Fahrzeug-Nodes in aktueller Dokumentreihenfolge.
    pub fn nodes(&self) -> &[VehicleNode] {
        &self.nodes
    }

    /// Anzahl der Fahrzeug-Nodes.
    pub fn vehicle_count(&self) -> usize {
        self.nodes.len()
    }

    /// `uniqueId`s in Dokumentreihenfolge.
    pub fn unique_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.unique_id.as_str()).collect()
    }

    /// Sortiert die Fahrzeug-Nodes gemäß `order` (Liste von `uniqueId`s).
    ///
    /// Nodes, deren ID in `order` fehlt, landen in ihrer bisherigen relativen
    /// Reihenfolge hinter allen gelisteten. Unbekannte IDs in `order` werden ignoriert.
    pub fn reorder<S: AsRef<str>>(&mut self, order: &[S]) {
        let rank: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_ref(), i))
            .collect();

        let mut indexed: Vec<(usize, usize)> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| {
                let key = rank
                    .get(node.unique_id.as_str())
                    .copied()
                    .unwrap_or(usize::MAX);
                (key, pos)
            })
            .collect();
        indexed.sort_by_key(|&(key, pos)| (key, pos));

        let mut old_nodes: Vec<Option<VehicleNode>> = self.nodes.drain(..).map(Some).collect();
        self.nodes = indexed
            .into_iter()
            .filter_map(|(_, pos)| old_nodes[pos].take())
            .collect();
    }

    /// Text vor dem ersten, zwischen den und nach dem letzten Fahrzeug-Node.
    pub fn gaps(&self) -> &[String] {
        &self.gaps
    }
}
