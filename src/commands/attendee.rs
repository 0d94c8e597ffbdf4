//! Roster management: add, remove, update and list attendees.
//!
//! Attendees are addressed by their 1-based position as shown by
//! `attendee list`.

use crate::{
    libs::{
        config::Config,
        formatter::{format_currency_with, parse_dollars},
        meeting::{AttendeeDraft, AttendeeUpdate, Meeting},
        messages::Message,
        roles::Role,
        store::StateStore,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AttendeeArgs {
    #[command(subcommand)]
    command: AttendeeCommand,
}

#[derive(Debug, Subcommand)]
enum AttendeeCommand {
    /// Add an attendee
    Add {
        /// Role of the attendee, the configured default role when omitted
        #[arg(value_enum)]
        role: Option<Role>,
        /// Hourly rate in dollars, required for the custom role
        #[arg(short, long)]
        rate: Option<String>,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Remove the attendee at a position
    Remove { position: usize },
    /// Change the name, role or rate of the attendee at a position
    Update {
        position: usize,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long, value_enum)]
        role: Option<Role>,
        /// Hourly rate in dollars
        #[arg(short, long)]
        rate: Option<String>,
    },
    /// Show the roster
    List,
    /// Remove every attendee
    Clear,
    /// Add one attendee per listed role at preset rates
    Quick {
        #[arg(value_enum, required = true)]
        roles: Vec<Role>,
    },
}

pub fn cmd(args: AttendeeArgs) -> Result<()> {
    let config = Config::read()?;
    let store = StateStore::new()?;
    let mut meeting = store.current_meeting()?;
    let symbol = config.currency().symbol;

    match args.command {
        AttendeeCommand::Add { role, rate, name } => {
            let policy = config.roster_policy();
            let role = role.unwrap_or_else(|| policy.rates.default_role());
            let rate = rate.as_deref().map(parse_rate).transpose()?;

            let mut draft = AttendeeDraft::new(role).with_name(name.unwrap_or_default());
            if role == Role::Custom {
                if let Some(rate) = rate {
                    draft = draft.with_rate(rate);
                }
            }

            let added = match meeting.add_attendee(draft, &policy) {
                Ok(added) => added.clone(),
                Err(e) => {
                    msg_warning!(Message::TransitionIgnored(e.to_string()));
                    return Ok(());
                }
            };

            // An explicit rate on a preset role overrides the preset for this attendee.
            let added = match rate {
                Some(rate) if role != Role::Custom => {
                    let update = AttendeeUpdate {
                        hourly_rate: Some(rate),
                        ..Default::default()
                    };
                    meeting.update_attendee(&added.id, update, &policy.rates)?.clone()
                }
                _ => added,
            };

            store.save_meeting(&meeting)?;
            msg_success!(Message::AttendeeAdded(added.label(), format!("{}/hr", format_currency_with(&symbol, added.hourly_rate))));
        }
        AttendeeCommand::Remove { position } => {
            let id = attendee_id_at(&meeting, position)?;
            let removed = meeting.remove_attendee(&id)?;
            store.save_meeting(&meeting)?;
            msg_success!(Message::AttendeeRemoved(removed.label()));
        }
        AttendeeCommand::Update { position, name, role, rate } => {
            let id = attendee_id_at(&meeting, position)?;
            let update = AttendeeUpdate {
                name,
                role,
                hourly_rate: rate.as_deref().map(parse_rate).transpose()?,
            };
            let updated = match meeting.update_attendee(&id, update, &config.rate_table()) {
                Ok(updated) => updated.label(),
                Err(e) => {
                    msg_warning!(Message::TransitionIgnored(e.to_string()));
                    return Ok(());
                }
            };
            store.save_meeting(&meeting)?;
            msg_success!(Message::AttendeeUpdated(updated));
        }
        AttendeeCommand::List => {
            if meeting.attendees().is_empty() {
                msg_info!(Message::NoAttendees);
                return Ok(());
            }
            View::new(symbol).roster(meeting.attendees())?;
        }
        AttendeeCommand::Clear => {
            meeting.clear_attendees();
            store.save_meeting(&meeting)?;
            msg_success!(Message::AttendeesCleared);
        }
        AttendeeCommand::Quick { roles } => {
            let added = meeting.add_quick_attendees(&roles, &config.roster_policy());
            store.save_meeting(&meeting)?;
            msg_success!(Message::AttendeesAdded(added));
        }
    }

    Ok(())
}

fn parse_rate(input: &str) -> Result<u64> {
    match parse_dollars(input) {
        Some(cents) => Ok(cents),
        None => msg_bail_anyhow!(Message::InvalidRate(input.to_string())),
    }
}

fn attendee_id_at(meeting: &Meeting, position: usize) -> Result<String> {
    match meeting.attendee_at(position) {
        Some(attendee) => Ok(attendee.id.clone()),
        None => msg_bail_anyhow!(Message::AttendeeNotAtPosition(position)),
    }
}
