use super::calculations::{cost_breakdown, standard_projections, total_hourly_rate};
use super::comparisons::{cost_comparison, CostLevel};
use super::formatter::{
    format_clock, format_currency_compact_with, format_currency_with, format_duration_human, format_fractional_cents_with,
};
use super::history::History;
use super::meeting::{Attendee, Meeting, MeetingStatus};
use super::messages::Message;
use super::roles::{RateTable, Role};
use super::timer::{DisplaySink, TimerSnapshot};
use anyhow::Result;
use chrono::{DateTime, Utc};
use prettytable::{row, Table};
use std::io::{self, Write};

/// Terminal tables and panels, in the configured currency.
pub struct View {
    symbol: String,
}

impl View {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    fn money(&self, cents: u64) -> String {
        format_currency_with(&self.symbol, cents)
    }

    fn rate(&self, cents: u64) -> String {
        format!("{}/hr", self.money(cents))
    }

    pub fn roles(&self, rates: &RateTable) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "ROLE", "RATE"]);
        for role in Role::all() {
            let rate = match rates.rate_for(role, None) {
                Some(rate) => self.rate(rate),
                None => "--rate required".to_string(),
            };
            let marker = if role == rates.default_role() { " (default)" } else { "" };
            table.add_row(row![role.as_str(), format!("{}{}", role.label(), marker), rate]);
        }
        table.printstd();

        Ok(())
    }

    pub fn roster(&self, attendees: &[Attendee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME", "ROLE", "RATE", "CUSTOM"]);
        for (i, attendee) in attendees.iter().enumerate() {
            let custom = if attendee.is_custom_rate { "yes" } else { "" };
            table.add_row(row![
                i + 1,
                attendee.label(),
                attendee.role.label(),
                self.rate(attendee.hourly_rate),
                custom
            ]);
        }
        table.add_row(row!["", "TOTAL", attendees.len(), self.rate(total_hourly_rate(attendees)), ""]);
        table.printstd();

        Ok(())
    }

    pub fn history(&self, history: &History) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TITLE", "DURATION", "ATTENDEES", "COST", "PER MIN"]);
        for summary in history.entries() {
            let title = if summary.title.is_empty() {
                Message::UntitledMeeting.to_string()
            } else {
                summary.title.clone()
            };
            table.add_row(row![
                summary.completed_at.format("%Y-%m-%d %H:%M"),
                title,
                format_duration_human(summary.duration_ms),
                summary.attendee_count,
                self.money(summary.total_cost),
                self.money(summary.average_cost_per_minute)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn projections(&self, attendees: &[Attendee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["LENGTH", "COST"]);
        for (label, cost) in standard_projections(attendees) {
            table.add_row(row![label, self.money(cost)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn breakdown(&self, attendees: &[Attendee], elapsed_ms: u64) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "RATE", "COST", "SHARE"]);
        for line in cost_breakdown(attendees, elapsed_ms) {
            table.add_row(row![
                line.label,
                self.rate(line.hourly_rate),
                self.money(line.cost),
                format!("{:.1}%", line.share * 100.0)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Full status panel: live values, burn rate and either projections or the breakdown.
    pub fn status(&self, meeting: &Meeting, now: DateTime<Utc>) -> Result<()> {
        let snapshot = TimerSnapshot::capture(meeting, now);
        let title = if meeting.title().is_empty() {
            Message::UntitledMeeting.to_string()
        } else {
            meeting.title().to_string()
        };

        println!("{}", title);
        println!(
            "{}",
            Message::StatusLine {
                status: snapshot.status.as_str().to_uppercase(),
                elapsed: format_clock(snapshot.elapsed_ms),
                cost: self.money(snapshot.current_cost),
            }
        );

        if meeting.attendees().is_empty() {
            println!("{}", Message::NoAttendees);
            return Ok(());
        }

        let level = CostLevel::for_cost(snapshot.current_cost);
        println!(
            "{}",
            Message::BurnRate {
                per_minute: format_fractional_cents_with(&self.symbol, snapshot.cost_per_minute),
                per_hour: self.money(total_hourly_rate(meeting.attendees())),
                level: format!("{} {}", level.icon(), level),
            }
        );
        if snapshot.current_cost > 0 {
            println!("{}", Message::Comparison(cost_comparison(snapshot.current_cost)));
        }

        if snapshot.elapsed_ms == 0 {
            println!("\n{}", Message::ProjectionsHeader);
            self.projections(meeting.attendees())
        } else {
            println!("\n{}", Message::BreakdownHeader);
            self.breakdown(meeting.attendees(), snapshot.elapsed_ms)
        }
    }
}

/// Single ticker line rewritten in place.
pub struct ConsoleSink {
    symbol: String,
}

impl ConsoleSink {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    pub fn line(&self, snapshot: &TimerSnapshot) -> String {
        format!(
            "[{}] {}  {}  ({}/min)",
            snapshot.status.as_str().to_uppercase(),
            format_clock(snapshot.elapsed_ms),
            format_currency_with(&self.symbol, snapshot.current_cost),
            format_fractional_cents_with(&self.symbol, snapshot.cost_per_minute),
        )
    }
}

impl DisplaySink for ConsoleSink {
    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<()> {
        let mut stdout = io::stdout().lock();
        // Trailing spaces wipe leftovers of a longer previous line.
        write!(stdout, "\r{}    ", self.line(snapshot))?;
        stdout.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!();
        Ok(())
    }
}

/// Full-screen display for sharing on a projector.
pub struct PresentationSink {
    symbol: String,
}

impl PresentationSink {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    pub fn screen(&self, snapshot: &TimerSnapshot) -> Vec<String> {
        let level = CostLevel::for_cost(snapshot.current_cost);
        let title = if snapshot.title.is_empty() {
            Message::UntitledMeeting.to_string()
        } else {
            snapshot.title.clone()
        };

        let mut lines = vec![
            title.to_uppercase(),
            String::new(),
            format!("{}  {}", level.icon(), format_currency_with(&self.symbol, snapshot.current_cost)),
            String::new(),
            format_clock(snapshot.elapsed_ms),
            format!(
                "{} attendees  ·  {}/min  ·  {}/hr",
                snapshot.attendee_count,
                format_fractional_cents_with(&self.symbol, snapshot.cost_per_minute),
                format_currency_compact_with(&self.symbol, (snapshot.cost_per_minute * 60.0).round() as u64),
            ),
        ];
        if snapshot.current_cost > 0 {
            lines.push(String::new());
            lines.push(cost_comparison(snapshot.current_cost));
        }
        if snapshot.status != MeetingStatus::Running {
            lines.push(String::new());
            lines.push(format!("[{}]", snapshot.status.as_str().to_uppercase()));
        }
        lines
    }
}

impl DisplaySink for PresentationSink {
    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<()> {
        let mut stdout = io::stdout().lock();
        // Clear screen and home the cursor.
        write!(stdout, "\x1B[2J\x1B[H")?;
        for line in self.screen(snapshot) {
            writeln!(stdout, "    {}", line)?;
        }
        stdout.flush()?;
        Ok(())
    }
}
