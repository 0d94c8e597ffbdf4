//! Export of the meeting history.
//!
//! ## Formats
//!
//! - **CSV**: one row per meeting with fixed columns
//!   `date, duration_minutes, attendee_count, total_cost_dollars, cost_per_minute_dollars`
//! - **JSON**: the summaries themselves, pretty-printed; [`parse_json`] reads them back
//! - **Excel**: a single "History" worksheet with the CSV columns plus the title
//!
//! Text formats can go to a file, stdout or the clipboard. Excel always
//! goes to a file.
//!
//! ```rust,no_run
//! use meetcost::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::summary::MeetingSummary;
use crate::msg_error_anyhow;
use anyhow::{anyhow, Result};
use arboard::Clipboard;
use chrono::{NaiveDate, Utc};
use rust_xlsxwriter::{Color, Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CSV_HEADERS: [&str; 5] = [
    "date",
    "duration_minutes",
    "attendee_count",
    "total_cost_dollars",
    "cost_per_minute_dollars",
];

const EXCEL_HEADERS: [&str; 6] = [
    "Date",
    "Title",
    "Duration (min)",
    "Attendees",
    "Total Cost ($)",
    "Cost per Minute ($)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per meeting.
    Csv,
    /// Pretty-printed JSON array of meeting summaries.
    Json,
    /// Excel workbook with a single history sheet.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// `meeting-history-YYYY-MM-DD.<ext>`
pub fn default_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!("meeting-history-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Cents as a plain two-decimal dollar amount (`1234.50`), no symbol or grouping.
pub fn dollars(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn export_date(summary: &MeetingSummary) -> String {
    summary.completed_at.date_naive().format("%Y-%m-%d").to_string()
}

pub fn render_csv(summaries: &[MeetingSummary]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADERS)?;

    for summary in summaries {
        wtr.write_record([
            export_date(summary),
            summary.duration_minutes().to_string(),
            summary.attendee_count.to_string(),
            dollars(summary.total_cost),
            dollars(summary.average_cost_per_minute),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_json(summaries: &[MeetingSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

pub fn parse_json(input: &str) -> Result<Vec<MeetingSummary>> {
    Ok(serde_json::from_str(input)?)
}

pub fn render_excel(summaries: &[MeetingSummary]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("History")?;

    let header_format = Format::new().set_bold().set_background_color(Color::Gray);
    for (col, header) in EXCEL_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, summary) in summaries.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, export_date(summary))?;
        if !summary.title.is_empty() {
            worksheet.write_string(row, 1, &summary.title)?;
        }
        worksheet.write_number(row, 2, summary.duration_minutes() as f64)?;
        worksheet.write_number(row, 3, summary.attendee_count as f64)?;
        worksheet.write_number(row, 4, summary.total_cost as f64 / 100.0)?;
        worksheet.write_number(row, 5, summary.average_cost_per_minute as f64 / 100.0)?;
    }

    worksheet.autofit();
    Ok(workbook.save_to_buffer()?)
}

/// Renders a text format; Excel has no text form.
pub fn render_text(format: ExportFormat, summaries: &[MeetingSummary]) -> Result<String> {
    match format {
        ExportFormat::Csv => render_csv(summaries),
        ExportFormat::Json => render_json(summaries),
        ExportFormat::Excel => Err(msg_error_anyhow!(Message::ExcelNeedsFile)),
    }
}

/// Writes history exports to a file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named after today's UTC date in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name(format, Utc::now().date_naive())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, summaries: &[MeetingSummary]) -> Result<PathBuf> {
        let bytes = match self.format {
            ExportFormat::Excel => render_excel(summaries)?,
            format => render_text(format, summaries)?.into_bytes(),
        };

        File::create(&self.output_path)?.write_all(&bytes)?;
        debug!(path = %self.output_path.display(), meetings = summaries.len(), "history exported");
        Ok(self.output_path.clone())
    }
}

/// Puts `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| anyhow!("Failed to initialize clipboard: {}", e))?;
    clipboard.set_text(text).map_err(|e| anyhow!("Failed to copy to clipboard: {}", e))?;
    Ok(())
}
