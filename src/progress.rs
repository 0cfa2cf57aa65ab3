// Copyright 2026 Boletin Contributors
// SPDX-License-Identifier: Apache-2.0

//! Scan event types and broadcast channel for operator-visible progress.
//!
//! The range aggregator emits `ScanEvent`s while it works; they flow
//! through a `tokio::sync::broadcast` channel to any subscriber (the CLI
//! progress bar, a log sink). When no subscriber exists, events are
//! silently dropped — the scan itself never touches the console.

use serde::{Deserialize, Serialize};

/// A progress event emitted during a date-range scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanEvent {
    /// Monotonically increasing sequence number.
    pub seq: u64,
    /// The kind of event.
    pub event: ScanEventKind,
}

/// The specific kind of scan event. Dates are AAAAMMDD text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScanEventKind {
    /// A date's summary fetch is starting.
    DayStarted { date: String },
    /// A date's summary was fetched and filtered.
    DayFetched { date: String, matches: usize },
    /// A date contributed nothing (no issue published, fetch failed).
    DaySkipped { date: String },
    /// A single item matched the filter.
    ItemMatched { date: String, label: String },
    /// The whole range was processed.
    ScanComplete {
        days_fetched: u32,
        days_skipped: u32,
        matches: usize,
        elapsed_ms: u64,
    },
    /// A non-fatal warning occurred.
    Warning { message: String },
}

/// Sender handle for emitting scan events.
pub type ScanSender = tokio::sync::broadcast::Sender<ScanEvent>;

/// Receiver handle for consuming scan events.
pub type ScanReceiver = tokio::sync::broadcast::Receiver<ScanEvent>;

/// Create a new scan event channel with a bounded buffer.
///
/// 256 events covers a month-long scan with per-day and per-item events
/// to spare.
pub fn channel() -> (ScanSender, ScanReceiver) {
    tokio::sync::broadcast::channel(256)
}

/// Emit a scan event, silently ignoring send errors (which occur when no
/// receivers are listening) and doing nothing when no sender was wired up.
pub fn emit(tx: &Option<ScanSender>, seq: &mut u64, event: ScanEventKind) {
    if let Some(ref sender) = tx {
        *seq += 1;
        let _ = sender.send(ScanEvent { seq: *seq, event });
    }
}
