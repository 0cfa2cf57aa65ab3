//! Presentation and export of scan results.

pub mod excel;
pub mod table;

pub use excel::{default_output_path, export_workbook, ExportError};
pub use table::{render_table, DEFAULT_NOTE_WIDTH};
