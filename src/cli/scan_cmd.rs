//! `boletin scan` — scan the gazette over a date range and report matches.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::broadcast::error::RecvError;

use crate::cli::output;
use crate::client::GazetteClient;
use crate::progress::{self, ScanEventKind, ScanReceiver};
use crate::report::{self, export_workbook, render_table, ExportError};
use crate::scan::{search_range, ScanOptions};

/// Run the scan command.
pub async fn run(
    opts: ScanOptions,
    timeout_ms: u64,
    note_width: usize,
    export: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let client = GazetteClient::new(timeout_ms);
    let today = Local::now().date_naive();

    let (tx, rx) = progress::channel();
    let reporter = (!output::is_quiet() && !output::is_json())
        .then(|| tokio::spawn(report_progress(rx, opts.days)));

    let records = search_range(&client, today, &opts, &Some(tx)).await?;
    // The sender is gone once the scan returns; the reporter drains the
    // buffered tail and exits on the closed channel.
    if let Some(handle) = reporter {
        let _ = handle.await;
    }

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "days": opts.days,
            "section": opts.section,
            "keyword": opts.keyword,
            "results": records,
        }));
        return Ok(());
    }

    println!("{}", render_table(&records, opts.days, note_width));

    if records.is_empty() {
        return Ok(());
    }

    let confirmed = export
        || (!output::is_quiet()
            && Confirm::new()
                .with_prompt("¿Exportar los resultados a una hoja de cálculo?")
                .default(false)
                .interact()?);
    if !confirmed {
        return Ok(());
    }

    let path = output.unwrap_or_else(report::default_output_path);
    match export_workbook(&records, &path) {
        Ok(()) => {
            if !output::is_quiet() {
                println!("Resultados exportados a {}", path.display());
            }
            Ok(())
        }
        Err(e @ ExportError::DestinationLocked(_)) => Err(anyhow::Error::new(e)
            .context("cierra el archivo si está abierto en otra aplicación y vuelve a intentarlo")),
        Err(e) => Err(e.into()),
    }
}

/// Drive a progress bar from the scan event stream.
async fn report_progress(mut rx: ScanReceiver, days: u32) {
    let bar = ProgressBar::new(u64::from(days) + 1);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .expect("progress template is valid"),
    );

    loop {
        match rx.recv().await {
            Ok(event) => match event.event {
                ScanEventKind::DayStarted { date } => {
                    bar.set_message(format!("consultando {date}"));
                }
                ScanEventKind::DayFetched { date, matches } => {
                    bar.inc(1);
                    if matches > 0 {
                        bar.println(format!("  {date}: {matches} coincidencias"));
                    }
                }
                ScanEventKind::DaySkipped { .. } => bar.inc(1),
                ScanEventKind::ItemMatched { .. } => {}
                ScanEventKind::ScanComplete {
                    days_fetched,
                    days_skipped,
                    matches,
                    elapsed_ms,
                } => {
                    bar.finish_and_clear();
                    println!(
                        "{days_fetched} boletines analizados, {days_skipped} fechas sin boletín, \
                         {matches} coincidencias ({elapsed_ms} ms)"
                    );
                }
                ScanEventKind::Warning { message } => {
                    bar.println(format!("  aviso: {message}"));
                }
            },
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => break,
        }
    }
    bar.finish_and_clear();
}
