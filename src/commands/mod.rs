//! Command-line interface.
//!
//! Every command loads the configuration and the persisted state, applies
//! one operation and writes the state back before returning. Operations the
//! meeting refuses (starting an empty meeting, pausing a paused one, ...)
//! are reported as warnings and leave the state untouched.

pub mod attendee;
pub mod export;
pub mod history;
pub mod init;
pub mod meeting;
pub mod roles;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List roles and their hourly rates")]
    Roles,
    #[command(about = "Manage the meeting roster", arg_required_else_help = true)]
    Attendee(attendee::AttendeeArgs),
    #[command(about = "Set the meeting title")]
    Title(meeting::TitleArgs),
    #[command(about = "Start the meeting clock")]
    Start,
    #[command(about = "Pause the meeting clock")]
    Pause,
    #[command(about = "Resume a paused meeting")]
    Resume,
    #[command(about = "Start, pause or resume depending on the current state")]
    Toggle,
    #[command(about = "End the meeting and record it in history")]
    End,
    #[command(about = "Discard the current meeting and start over")]
    Reset(meeting::ResetArgs),
    #[command(about = "Show the current meeting and its cost")]
    Status,
    #[command(about = "Display the running cost live")]
    Watch(watch::WatchArgs),
    #[command(about = "Browse completed meetings")]
    History(history::HistoryArgs),
    #[command(about = "Export meeting history")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Track what your meetings cost, live", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Roles => roles::cmd(),
            Commands::Attendee(args) => attendee::cmd(args),
            Commands::Title(args) => meeting::title(args),
            Commands::Start => meeting::start(),
            Commands::Pause => meeting::pause(),
            Commands::Resume => meeting::resume(),
            Commands::Toggle => meeting::toggle(),
            Commands::End => meeting::end(),
            Commands::Reset(args) => meeting::reset(args),
            Commands::Status => meeting::status(),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::History(args) => history::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
