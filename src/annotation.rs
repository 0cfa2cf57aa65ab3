//! Annotation note scanning over per-item XML detail documents.
//!
//! Each gazette item links an XML document that may carry free-text notes
//! under `notas/nota`. The scanner looks for the note identifying the
//! competition track and returns its full text. Every failure mode —
//! missing reference, dead link, malformed XML — resolves to an empty
//! string; callers never have to handle an error from this module.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::client::GazetteClient;

/// Phrases identifying a competition-track note, matched case-insensitively.
const TRACK_PHRASES: [&str; 2] = ["turno libre", "promoción interna"];

/// Fetch an item's XML detail document and scan its notes.
///
/// An empty `xml_url` skips the fetch entirely. Returns the first
/// track-note text found, or an empty string.
pub async fn scan_notes(client: &GazetteClient, xml_url: &str) -> String {
    if xml_url.is_empty() {
        return String::new();
    }

    match client.fetch_document(xml_url).await {
        Some(body) => find_track_note(&body).unwrap_or_default(),
        None => String::new(),
    }
}

/// Scan an XML document for the first note mentioning a competition track.
///
/// Visits every `notas/nota` element in document order. A note's text is
/// the concatenation of all its embedded text fragments, nested elements
/// included, trimmed of surrounding whitespace. The first note whose text
/// contains one of the track phrases (case-insensitive) wins. Malformed
/// XML is logged and treated as "no note".
pub fn find_track_note(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut in_notas = false;
    let mut note_text: Option<String> = None;
    // Nesting depth of elements inside the current <nota>, so formatting
    // children don't terminate text collection early.
    let mut note_depth = 0u32;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if note_text.is_some() {
                    note_depth += 1;
                } else if name == "notas" {
                    in_notas = true;
                } else if name == "nota" && in_notas {
                    note_text = Some(String::new());
                    note_depth = 0;
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(ref mut text) = note_text {
                    match t.unescape() {
                        Ok(fragment) => text.push_str(&fragment),
                        Err(e) => debug!("unreadable text fragment in note: {e}"),
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if note_text.is_some() {
                    if name == "nota" && note_depth == 0 {
                        let text = note_text.take().unwrap_or_default();
                        let text = text.trim().to_string();
                        if is_track_note(&text) {
                            return Some(text);
                        }
                    } else {
                        note_depth = note_depth.saturating_sub(1);
                    }
                } else if name == "notas" {
                    in_notas = false;
                }
            }
            Ok(Event::Eof) => return None,
            Err(e) => {
                debug!("annotation document did not parse: {e}");
                return None;
            }
            _ => {}
        }
        buf.clear();
    }
}

fn is_track_note(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TRACK_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}
