//! Filtering of one day's summary down to matching announcements.

use chrono::NaiveDate;

use crate::annotation::scan_notes;
use crate::client::GazetteClient;
use crate::summary::label::extract_label;
use crate::summary::types::{DailySummary, ResultRecord};

/// Errors from summary processing.
///
/// Absent data is handled with `Option` long before this point; this enum
/// covers genuine data-shape violations worth surfacing.
#[derive(thiserror::Error, Debug)]
pub enum SummaryError {
    /// The summary metadata carried a publication date that does not parse
    /// as AAAAMMDD. The source format contract guarantees this field, so a
    /// bad value means the document is not what we think it is.
    #[error("malformed publication date in summary metadata: {0:?}")]
    MalformedDate(String),
}

/// Reformat a publication date from AAAAMMDD to DD/MM/YYYY.
pub fn format_publication_date(raw: &str) -> Result<String, SummaryError> {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map(|date| date.format("%d/%m/%Y").to_string())
        .map_err(|_| SummaryError::MalformedDate(raw.to_string()))
}

/// Filter one day's summary, producing a record per matching item.
///
/// A section is selected when `target_section` (lowercased) is a substring
/// of its name (lowercased) — deliberately not an exact match, since
/// section names carry numbering prefixes. Within selected sections every
/// item whose title contains `keyword` (case-insensitive) yields a
/// [`ResultRecord`], in traversal order: section → department → heading →
/// item, left to right. Annotation notes are fetched per match through
/// `client`; items without an XML reference get empty notes without any
/// fetch.
pub async fn filter_day(
    client: &GazetteClient,
    summary: &DailySummary,
    target_section: &str,
    keyword: &str,
) -> Result<Vec<ResultRecord>, SummaryError> {
    let date = format_publication_date(&summary.metadata.publication_date)?;
    let section_needle = target_section.to_lowercase();
    let keyword_needle = keyword.to_lowercase();

    let mut records = Vec::new();
    for issue in &summary.issues {
        for section in &issue.sections {
            if !section.name.to_lowercase().contains(&section_needle) {
                continue;
            }
            for department in &section.departments {
                for heading in &department.headings {
                    for item in &heading.items {
                        if !item.title.to_lowercase().contains(&keyword_needle) {
                            continue;
                        }
                        let notes = match item.xml_url.as_deref() {
                            Some(url) => scan_notes(client, url).await,
                            None => String::new(),
                        };
                        records.push(ResultRecord {
                            date: date.clone(),
                            label: extract_label(&item.title),
                            title: item.title.clone(),
                            notes,
                            link: item.html_url.clone(),
                        });
                    }
                }
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::types::SummaryEnvelope;

    fn parse(json: &str) -> DailySummary {
        serde_json::from_str::<SummaryEnvelope>(json)
            .expect("fixture parses")
            .data
            .summary
    }

    /// Client that will never be reached — fixtures carry no XML refs.
    fn offline_client() -> GazetteClient {
        GazetteClient::with_base_url("http://127.0.0.1:9", 100)
    }

    #[test]
    fn test_format_publication_date() {
        assert_eq!(format_publication_date("20260310").unwrap(), "10/03/2026");
        assert_eq!(format_publication_date("20241231").unwrap(), "31/12/2024");
    }

    #[test]
    fn test_malformed_date_is_a_hard_failure() {
        assert!(matches!(
            format_publication_date("not-a-date"),
            Err(SummaryError::MalformedDate(_))
        ));
        assert!(matches!(
            format_publication_date("2026031"),
            Err(SummaryError::MalformedDate(_))
        ));
    }

    #[tokio::test]
    async fn test_filters_by_section_substring_and_keyword_case() {
        let summary = parse(
            r#"{"data": {"sumario": {
                "metadatos": {"fecha_publicacion": "20260310"},
                "diario": {"seccion": [
                    {
                        "nombre": "II.B. Oposiciones y concursos",
                        "departamento": {"epigrafe": {"item": [
                            {"titulo": "Ayuntamiento de Gijón (ASTURIAS): dos plazas", "url_html": "https://boe.test/a"},
                            {"titulo": "Ayuntamiento de Sevilla: una plaza", "url_html": "https://boe.test/b"}
                        ]}}
                    },
                    {
                        "nombre": "I. Disposiciones generales",
                        "departamento": {"epigrafe": {"item":
                            {"titulo": "Asturias: disposición general", "url_html": "https://boe.test/c"}
                        }}
                    }
                ]}
            }}}"#,
        );

        let records = filter_day(
            &offline_client(),
            &summary,
            "b. oposiciones y concursos",
            "Asturias",
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "10/03/2026");
        assert_eq!(records[0].label, "Ayuntamiento de Gijón");
        assert_eq!(records[0].link, "https://boe.test/a");
        assert_eq!(records[0].notes, "");
    }

    #[tokio::test]
    async fn test_singular_and_plural_encodings_are_equivalent() {
        let singular = parse(
            r#"{"data": {"sumario": {
                "metadatos": {"fecha_publicacion": "20260310"},
                "diario": {"seccion": {
                    "nombre": "II.B. Oposiciones y concursos",
                    "departamento": {"epigrafe": {"item":
                        {"titulo": "Ayuntamiento de Llanes (Asturias)", "url_html": "https://boe.test/1"}
                    }}
                }}
            }}}"#,
        );
        let plural = parse(
            r#"{"data": {"sumario": {
                "metadatos": {"fecha_publicacion": "20260310"},
                "diario": [{"seccion": [{
                    "nombre": "II.B. Oposiciones y concursos",
                    "departamento": [{"epigrafe": [{"item": [
                        {"titulo": "Ayuntamiento de Llanes (Asturias)", "url_html": "https://boe.test/1"}
                    ]}]}]
                }]}]
            }}}"#,
        );

        let client = offline_client();
        let from_singular = filter_day(&client, &singular, "oposiciones", "asturias")
            .await
            .unwrap();
        let from_plural = filter_day(&client, &plural, "oposiciones", "asturias")
            .await
            .unwrap();

        assert_eq!(from_singular, from_plural);
        assert_eq!(from_singular.len(), 1);
    }

    #[tokio::test]
    async fn test_traversal_order_is_preserved() {
        let summary = parse(
            r#"{"data": {"sumario": {
                "metadatos": {"fecha_publicacion": "20260310"},
                "diario": {"seccion": {
                    "nombre": "II.B. Oposiciones y concursos",
                    "departamento": [
                        {"epigrafe": {"item": [
                            {"titulo": "Asturias A", "url_html": "https://boe.test/a"},
                            {"titulo": "Asturias B", "url_html": "https://boe.test/b"}
                        ]}},
                        {"epigrafe": {"item":
                            {"titulo": "Asturias C", "url_html": "https://boe.test/c"}
                        }}
                    ]
                }}
            }}}"#,
        );

        let records = filter_day(&offline_client(), &summary, "oposiciones", "asturias")
            .await
            .unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Asturias A", "Asturias B", "Asturias C"]);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let summary = parse(
            r#"{"data": {"sumario": {
                "metadatos": {"fecha_publicacion": "20260310"},
                "diario": {"seccion": {
                    "nombre": "II.B. Oposiciones y concursos",
                    "departamento": {"epigrafe": {"item":
                        {"titulo": "Ayuntamiento de Cuenca", "url_html": "https://boe.test/x"}
                    }}
                }}
            }}}"#,
        );

        let records = filter_day(&offline_client(), &summary, "oposiciones", "asturias")
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_date_propagates() {
        let summary = parse(
            r#"{"data": {"sumario": {
                "metadatos": {"fecha_publicacion": "10-03-2026"},
                "diario": []
            }}}"#,
        );

        let result = filter_day(&offline_client(), &summary, "oposiciones", "asturias").await;
        assert!(matches!(result, Err(SummaryError::MalformedDate(_))));
    }
}
