//! Wire types for the BOE daily summary document.
//!
//! Field names follow the Spanish open-data API via serde renames. Every
//! collection in the document may arrive absent, as a single bare object,
//! or as an array — [`OneOrMany`] folds the three shapes into one.

use serde::{Deserialize, Serialize};

/// A collection field with heterogeneous cardinality.
///
/// The summary encoder emits a bare object when a level holds exactly one
/// child and an array otherwise. Pairing this untagged enum with
/// `#[serde(default)]` makes absent, singular, and plural encodings
/// indistinguishable to traversal code.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single bare object (cardinality one).
    One(T),
    /// An array of objects (possibly empty).
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the contents as a uniform slice, whatever the wire shape was.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Top-level envelope returned by the summary endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryEnvelope {
    pub data: SummaryData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryData {
    #[serde(rename = "sumario")]
    pub summary: DailySummary,
}

/// The structured table of contents for one gazette issue date.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySummary {
    #[serde(rename = "metadatos")]
    pub metadata: SummaryMetadata,
    #[serde(rename = "diario", default)]
    pub issues: OneOrMany<Issue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryMetadata {
    /// Publication date as AAAAMMDD text.
    #[serde(rename = "fecha_publicacion")]
    pub publication_date: String,
}

/// One physical gazette issue within a day's summary.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    #[serde(rename = "seccion", default)]
    pub sections: OneOrMany<Section>,
}

/// A named top-level grouping, e.g. "II.B. Oposiciones y concursos".
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "departamento", default)]
    pub departments: OneOrMany<Department>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Department {
    #[serde(rename = "epigrafe", default)]
    pub headings: OneOrMany<Heading>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Heading {
    #[serde(rename = "item", default)]
    pub items: OneOrMany<Item>,
}

/// The smallest addressable publication entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(rename = "titulo", default)]
    pub title: String,
    /// Link to the human-readable full text.
    #[serde(rename = "url_html", default)]
    pub html_url: String,
    /// Link to the XML detail document carrying annotation notes.
    #[serde(rename = "url_xml", default)]
    pub xml_url: Option<String>,
}

/// One matched announcement, ready for presentation or export.
///
/// Created by the summary filter, never mutated afterwards. Records across
/// a whole scan are ordered by ascending date, then by traversal order
/// within a day (section → department → heading → item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// Publication date reformatted as DD/MM/YYYY.
    pub date: String,
    /// Municipality label extracted from the title.
    pub label: String,
    /// Full original title.
    pub title: String,
    /// Annotation note text; empty when no note matched or none was fetched.
    pub notes: String,
    /// HTML link to the announcement.
    pub link: String,
}
