//! Core library modules for meetcost.
//!
//! - **Domain**: roles and rates, the meeting and its lifecycle, cost calculations, history
//! - **Infrastructure**: configuration, data storage, persisted state, messaging
//! - **Output**: formatting, terminal views, the live timer, export
//!
//! ```rust
//! use chrono::Utc;
//! use meetcost::libs::meeting::{AttendeeDraft, Meeting, RosterPolicy};
//! use meetcost::libs::roles::Role;
//!
//! let mut meeting = Meeting::new(Utc::now());
//! meeting.add_attendee(AttendeeDraft::new(Role::SeniorEngineer), &RosterPolicy::default()).unwrap();
//! meeting.start(Utc::now()).unwrap();
//! ```

pub mod calculations;
pub mod comparisons;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod history;
pub mod meeting;
pub mod messages;
pub mod roles;
pub mod store;
pub mod summary;
pub mod timer;
pub mod view;
