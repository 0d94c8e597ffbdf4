use crate::{
    libs::{
        config::Config,
        formatter::{format_currency_with, format_duration_human},
        messages::Message,
        store::StateStore,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: Option<HistoryCommand>,
}

#[derive(Debug, Subcommand)]
enum HistoryCommand {
    /// List completed meetings, newest first (default)
    List,
    /// Totals and averages over the whole history
    Stats,
    /// Delete every recorded meeting
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let config = Config::read()?;
    let store = StateStore::new()?;
    let mut history = store.load_history(config.limits().max_history)?;
    let symbol = config.currency().symbol;

    if history.is_empty() {
        msg_info!(Message::HistoryEmpty);
        return Ok(());
    }

    match args.command.unwrap_or(HistoryCommand::List) {
        HistoryCommand::List => {
            msg_print!(Message::HistoryHeader(history.len()));
            View::new(symbol).history(&history)?;
        }
        HistoryCommand::Stats => {
            let stats = history.stats(Utc::now());
            msg_print!(Message::HistoryStats {
                count: stats.count,
                total: format_currency_with(&symbol, stats.total_cost),
                average: format_currency_with(&symbol, stats.average_cost),
                this_week: format_currency_with(&symbol, stats.last_week_cost),
            });
            msg_print!(Message::TimeInMeetings(format_duration_human(stats.total_duration_ms)));
        }
        HistoryCommand::Clear { yes } => {
            if !yes
                && !Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmClearHistory(history.len()).to_string())
                    .default(false)
                    .interact()?
            {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            history.clear();
            store.save_history(&history)?;
            msg_success!(Message::HistoryCleared);
        }
    }

    Ok(())
}
