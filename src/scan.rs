//! Date-range aggregation over daily summaries.

use std::time::Instant;

use chrono::{Duration, NaiveDate};

use crate::client::GazetteClient;
use crate::progress::{emit, ScanEventKind, ScanSender};
use crate::summary::filter::{filter_day, SummaryError};
use crate::summary::types::ResultRecord;

/// What to scan for.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Days back from today; the scan covers `days + 1` dates, today
    /// inclusive.
    pub days: u32,
    /// Section to select, matched as a case-insensitive substring.
    pub section: String,
    /// Keyword that must appear in an item's title, case-insensitive.
    pub keyword: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            days: 15,
            section: "B. Oposiciones y concursos".to_string(),
            keyword: "Asturias".to_string(),
        }
    }
}

/// Scan `opts.days + 1` consecutive dates ending at `today` inclusive.
///
/// Dates are processed in ascending order and each day's records are
/// appended as-is, so the aggregate keeps ascending-date-then-traversal
/// order. Days without a summary (weekends, holidays, fetch failures) are
/// skipped silently apart from a progress event. `today` is injected so
/// the scan is deterministic under test.
///
/// The only error that can surface is a malformed publication date inside
/// a fetched summary — a data-shape violation, not an expected absence.
pub async fn search_range(
    client: &GazetteClient,
    today: NaiveDate,
    opts: &ScanOptions,
    progress: &Option<ScanSender>,
) -> Result<Vec<ResultRecord>, SummaryError> {
    let start = today - Duration::days(i64::from(opts.days));
    let started = Instant::now();

    let mut seq = 0u64;
    let mut records = Vec::new();
    let mut days_fetched = 0u32;
    let mut days_skipped = 0u32;

    for offset in 0..=i64::from(opts.days) {
        let date = start + Duration::days(offset);
        let date_str = date.format("%Y%m%d").to_string();

        emit(
            progress,
            &mut seq,
            ScanEventKind::DayStarted {
                date: date_str.clone(),
            },
        );

        let Some(summary) = client.fetch_summary(&date_str).await else {
            days_skipped += 1;
            emit(
                progress,
                &mut seq,
                ScanEventKind::DaySkipped {
                    date: date_str.clone(),
                },
            );
            continue;
        };

        let day_records = filter_day(client, &summary, &opts.section, &opts.keyword).await?;
        days_fetched += 1;
        for record in &day_records {
            emit(
                progress,
                &mut seq,
                ScanEventKind::ItemMatched {
                    date: date_str.clone(),
                    label: record.label.clone(),
                },
            );
        }
        emit(
            progress,
            &mut seq,
            ScanEventKind::DayFetched {
                date: date_str,
                matches: day_records.len(),
            },
        );
        records.extend(day_records);
    }

    emit(
        progress,
        &mut seq,
        ScanEventKind::ScanComplete {
            days_fetched,
            days_skipped,
            matches: records.len(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        },
    );

    Ok(records)
}
