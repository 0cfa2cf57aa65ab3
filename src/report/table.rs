//! Console table rendering of scan results.

use crate::summary::types::ResultRecord;

/// Default truncation width for the notes column.
pub const DEFAULT_NOTE_WIDTH: usize = 50;

/// Render results as a plain-text table, or a no-results message.
///
/// Columns: date, extracted label, annotation excerpt (truncated to
/// `note_width` characters with a trailing ellipsis), link. Pure string
/// rendering — callers decide where it goes.
pub fn render_table(records: &[ResultRecord], days: u32, note_width: usize) -> String {
    let mut out = String::new();

    out.push_str("RESULTADOS: oposiciones y concursos\n");
    out.push_str(&format!("(últimos {days} días)\n\n"));

    if records.is_empty() {
        out.push_str("No se encontraron convocatorias en el rango indicado.\n");
        return out;
    }

    out.push_str(&format!(
        "{:<12} | {:<30} | {:<width$} | Enlace\n",
        "Fecha",
        "Ayuntamiento",
        "Notas",
        width = note_width
    ));
    out.push_str(&"-".repeat(60 + note_width));
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{:<12} | {:<30} | {:<width$} | {}\n",
            record.date,
            record.label,
            truncate(&record.notes, note_width),
            record.link,
            width = note_width
        ));
    }

    out.push_str(&format!(
        "\nSe encontraron {} convocatorias en el rango indicado.\n",
        records.len()
    ));
    out
}

/// Truncate to `width` characters, ellipsis included when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
