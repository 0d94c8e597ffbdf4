//! Live cost display.
//!
//! Runs the timer against the persisted meeting, so state changes made from
//! another terminal (`pause`, `end`, ...) show up on the next tick.

use crate::{
    libs::{
        config::Config,
        formatter::format_currency_with,
        meeting::MeetingStatus,
        messages::Message,
        store::StateStore,
        timer::{DisplaySink, MeetingSource, Timer},
        view::{ConsoleSink, PresentationSink},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Full-screen display for a shared screen
    #[arg(short, long)]
    present: bool,

    /// Keep watching through pauses until the meeting ends
    #[arg(short, long)]
    follow: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let symbol = config.currency().symbol;
    let timer = Timer::new(config.timer().interval());
    let mut store = StateStore::new()?;

    let mut sink: Box<dyn DisplaySink> = if args.present {
        Box::new(PresentationSink::new(symbol.clone()))
    } else {
        Box::new(ConsoleSink::new(symbol.clone()))
    };

    tokio::select! {
        result = watch(&timer, &mut store, sink.as_mut(), args.follow, &symbol) => result.map(|_| ()),
        _ = tokio::signal::ctrl_c() => {
            println!();
            msg_info!(Message::WatchStopped);
            Ok(())
        }
    }
}

/// Drives the timer until the meeting stops running, or with `follow` until it ends.
pub async fn watch<S, D>(timer: &Timer, source: &mut S, sink: &mut D, follow: bool, symbol: &str) -> Result<MeetingStatus>
where
    S: MeetingSource + ?Sized,
    D: DisplaySink + ?Sized,
{
    loop {
        let last = timer.run(source, sink).await?;

        match last.status {
            MeetingStatus::Running => continue,
            MeetingStatus::Paused if follow => {
                msg_info!(Message::WatchWaitingForResume);
                timer.wait_while_paused(source).await?;
            }
            MeetingStatus::Paused => {
                msg_info!(Message::WatchPaused);
                return Ok(last.status);
            }
            MeetingStatus::Completed => {
                msg_success!(Message::WatchCompleted(format_currency_with(symbol, last.current_cost)));
                return Ok(last.status);
            }
            MeetingStatus::Setup => {
                msg_info!(Message::WatchNotStarted);
                return Ok(last.status);
            }
        }
    }
}
