//! Meeting lifecycle commands.

use crate::{
    libs::{
        calculations::elapsed_active_ms,
        config::Config,
        error::GuardError,
        formatter::{format_clock, format_currency_with, format_duration_human},
        meeting::{Meeting, MeetingStatus},
        messages::Message,
        store::StateStore,
        view::View,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TitleArgs {
    /// New meeting title
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn title(args: TitleArgs) -> Result<()> {
    let store = StateStore::new()?;
    let mut meeting = store.current_meeting()?;

    let title = args.title.join(" ");
    meeting.set_title(title.trim());
    store.save_meeting(&meeting)?;

    msg_success!(Message::TitleSet(meeting.title().to_string()));
    Ok(())
}

pub fn start() -> Result<()> {
    transition(|meeting| {
        meeting.start(Utc::now())?;
        Ok(Message::MeetingStarted(display_title(meeting)))
    })
}

pub fn pause() -> Result<()> {
    transition(|meeting| {
        let now = Utc::now();
        meeting.pause(now)?;
        Ok(Message::MeetingPaused(format_clock(elapsed_active_ms(&meeting.timing(), now))))
    })
}

pub fn resume() -> Result<()> {
    transition(|meeting| {
        let now = Utc::now();
        meeting.resume(now)?;
        Ok(Message::MeetingResumed(format_clock(elapsed_active_ms(&meeting.timing(), now))))
    })
}

pub fn toggle() -> Result<()> {
    transition(|meeting| {
        let before = meeting.status();
        let now = Utc::now();
        let elapsed = |meeting: &Meeting| format_clock(elapsed_active_ms(&meeting.timing(), now));

        meeting.toggle(now)?;
        Ok(match before {
            MeetingStatus::Setup => Message::MeetingStarted(display_title(meeting)),
            MeetingStatus::Running => Message::MeetingPaused(elapsed(meeting)),
            _ => Message::MeetingResumed(elapsed(meeting)),
        })
    })
}

pub fn end() -> Result<()> {
    let config = Config::read()?;
    let store = StateStore::new()?;
    let mut meeting = store.current_meeting()?;
    let mut history = store.load_history(config.limits().max_history)?;

    match meeting.end(&mut history, Utc::now()) {
        Ok(summary) => {
            store.save_meeting(&meeting)?;
            store.save_history(&history)?;
            msg_success!(Message::MeetingEnded {
                cost: format_currency_with(&config.currency().symbol, summary.total_cost),
                duration: format_duration_human(summary.duration_ms),
            });
        }
        Err(e) => msg_warning!(Message::TransitionIgnored(e.to_string())),
    }

    Ok(())
}

pub fn reset(args: ResetArgs) -> Result<()> {
    let store = StateStore::new()?;
    let mut meeting = store.current_meeting()?;

    if !args.yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReset.to_string())
            .default(false)
            .interact()?
    {
        msg_info!(Message::ResetCancelled);
        return Ok(());
    }

    meeting.reset(Utc::now());
    store.save_meeting(&meeting)?;

    msg_success!(Message::MeetingReset);
    Ok(())
}

pub fn status() -> Result<()> {
    let config = Config::read()?;
    let meeting = StateStore::new()?.current_meeting()?;

    View::new(config.currency().symbol).status(&meeting, Utc::now())
}

/// Applies a lifecycle transition and persists the meeting if it succeeded.
fn transition<F>(apply: F) -> Result<()>
where
    F: FnOnce(&mut Meeting) -> Result<Message, GuardError>,
{
    let store = StateStore::new()?;
    let mut meeting = store.current_meeting()?;

    match apply(&mut meeting) {
        Ok(message) => {
            store.save_meeting(&meeting)?;
            msg_success!(message);
        }
        Err(e) => msg_warning!(Message::TransitionIgnored(e.to_string())),
    }

    Ok(())
}

fn display_title(meeting: &Meeting) -> String {
    if meeting.title().is_empty() {
        Message::UntitledMeeting.to_string()
    } else {
        meeting.title().to_string()
    }
}
