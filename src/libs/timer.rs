//! Throttled polling loop behind the live cost display.
//!
//! The timer holds no cost state of its own. On every tick it re-reads the
//! meeting from a [`MeetingSource`], derives a [`TimerSnapshot`] from scratch
//! and hands it to a [`DisplaySink`]. A late tick therefore shows the right
//! number instead of compounding an error.
//!
//! ```rust,no_run
//! use meetcost::libs::timer::{DisplaySink, MeetingSource, Timer, TimerSnapshot};
//! use meetcost::libs::meeting::Meeting;
//! use std::time::Duration;
//!
//! struct Fixed(Meeting);
//! impl MeetingSource for Fixed {
//!     fn load(&mut self) -> anyhow::Result<Meeting> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! struct Print;
//! impl DisplaySink for Print {
//!     fn render(&mut self, snapshot: &TimerSnapshot) -> anyhow::Result<()> {
//!         println!("{} cents", snapshot.current_cost);
//!         Ok(())
//!     }
//! }
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let timer = Timer::new(Duration::from_millis(100));
//! let last = timer.run(&mut Fixed(Meeting::new(chrono::Utc::now())), &mut Print).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::calculations::{cost_per_minute, cost_per_second, current_cost, elapsed_active_ms};
use crate::libs::meeting::{Meeting, MeetingStatus};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::trace;

/// Values derived from a meeting at a single instant.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSnapshot {
    pub title: String,
    pub status: MeetingStatus,
    pub attendee_count: usize,
    pub elapsed_ms: u64,
    /// Cents.
    pub current_cost: u64,
    /// Cents per second.
    pub cost_per_second: f64,
    /// Cents per minute.
    pub cost_per_minute: f64,
    pub is_active: bool,
}

impl TimerSnapshot {
    pub fn capture(meeting: &Meeting, now: DateTime<Utc>) -> Self {
        let timing = meeting.timing();
        let attendees = meeting.attendees();

        Self {
            title: meeting.title().to_string(),
            status: meeting.status(),
            attendee_count: attendees.len(),
            elapsed_ms: elapsed_active_ms(&timing, now),
            current_cost: current_cost(attendees, &timing, now),
            cost_per_second: cost_per_second(attendees),
            cost_per_minute: cost_per_minute(attendees),
            is_active: meeting.status().is_active(),
        }
    }
}

/// Where the timer reads the meeting from on every tick.
pub trait MeetingSource {
    fn load(&mut self) -> Result<Meeting>;
}

/// Where the timer sends each snapshot.
pub trait DisplaySink {
    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<()>;

    /// Called once after the last snapshot of a run.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Timer {
    interval: Duration,
}

impl Timer {
    /// Creates a timer ticking every `interval`, at least once per millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Renders a snapshot on every tick while the meeting is running.
    ///
    /// Returns the first snapshot whose status is not `running`, after it
    /// has been rendered.
    pub async fn run<S, D>(&self, source: &mut S, sink: &mut D) -> Result<TimerSnapshot>
    where
        S: MeetingSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let meeting = source.load()?;
            let snapshot = TimerSnapshot::capture(&meeting, Utc::now());
            sink.render(&snapshot)?;
            trace!(status = %snapshot.status, cost = snapshot.current_cost, "timer tick");

            if snapshot.status != MeetingStatus::Running {
                sink.finish()?;
                return Ok(snapshot);
            }
        }
    }

    /// Polls at the timer's interval until the meeting is no longer paused.
    pub async fn wait_while_paused<S>(&self, source: &mut S) -> Result<Meeting>
    where
        S: MeetingSource + ?Sized,
    {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let meeting = source.load()?;
            if meeting.status() != MeetingStatus::Paused {
                return Ok(meeting);
            }
        }
    }
}
