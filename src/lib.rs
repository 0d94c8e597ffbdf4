//! # meetcost
//!
//! A command-line meeting cost calculator: build a roster of attendees with
//! hourly rates, run the meeting clock and watch the cost add up live.
//!
//! ## Features
//!
//! - **Roster**: role presets, custom rates, quick-add
//! - **Live cost**: pause-aware timer, burn rate, projections, per-attendee breakdown
//! - **History**: capped list of completed meetings with statistics
//! - **Export**: CSV, JSON and Excel, to a file, stdout or the clipboard
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use meetcost::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::parse().menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
