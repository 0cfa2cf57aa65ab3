//! Spreadsheet export of scan results.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatUnderline, Url, Workbook, XlsxError};

use crate::summary::types::ResultRecord;

const SHEET_NAME: &str = "Convocatorias";
const HEADERS: [&str; 5] = ["Fecha", "Ayuntamiento", "Título", "Notas", "Enlace"];
const HEADER_FILL: u32 = 0x4F81BD;
const SHADE_FILL: u32 = 0xD9E1F2;

/// Errors from spreadsheet export. A locked destination is distinct from
/// everything else so the caller can tell the user to close the file.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// The destination exists but cannot be opened for writing — on
    /// Windows this is what a spreadsheet application holding the file
    /// open looks like.
    #[error("destination is locked or not writable: {0}")]
    DestinationLocked(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] XlsxError),
}

/// Default export destination: a fixed filename on the user's desktop.
pub fn default_output_path() -> PathBuf {
    dirs::desktop_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("convocatorias_boe.xlsx")
}

/// Write records to a styled workbook at `path`.
///
/// Header row in bold white on steel blue, one row per record carrying
/// every field, the link cell as an "Abrir BOE" hyperlink whose target is
/// the record's link verbatim, autofit column widths, and alternating row
/// shading.
pub fn export_workbook(records: &[ResultRecord], path: &Path) -> Result<(), ExportError> {
    probe_destination(path)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let shade_format = Format::new().set_background_color(Color::RGB(SHADE_FILL));
    let link_format = Format::new()
        .set_font_color(Color::Blue)
        .set_underline(FormatUnderline::Single);
    let link_shaded_format = link_format
        .clone()
        .set_background_color(Color::RGB(SHADE_FILL));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let shaded = row % 2 == 1;

        let cells = [
            record.date.as_str(),
            record.label.as_str(),
            record.title.as_str(),
            record.notes.as_str(),
        ];
        for (col, value) in cells.iter().enumerate() {
            if shaded {
                worksheet.write_string_with_format(row, col as u16, *value, &shade_format)?;
            } else {
                worksheet.write_string(row, col as u16, *value)?;
            }
        }

        let url = Url::new(record.link.as_str()).set_text("Abrir BOE");
        let format = if shaded {
            &link_shaded_format
        } else {
            &link_format
        };
        worksheet.write_url_with_format(row, 4, url, format)?;
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}

/// Check the destination is writable before building the workbook, so a
/// locked file surfaces as [`ExportError::DestinationLocked`] rather than
/// an opaque save failure.
fn probe_destination(path: &Path) -> Result<(), ExportError> {
    match OpenOptions::new().write(true).create(true).open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(ExportError::DestinationLocked(path.to_path_buf()))
        }
        Err(e) => Err(ExportError::Io(e)),
    }
}
