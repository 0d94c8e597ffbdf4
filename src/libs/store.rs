//! Load and save of the current meeting and the history.
//!
//! Both live as JSON documents under fixed keys of the `kv` table. A
//! document that is present but can not be decoded is reported with a
//! warning and treated as absent, so a corrupted store never blocks the
//! app: the user gets a fresh meeting or an empty history instead.

use crate::db::db::Db;
use crate::db::kv::KeyValue;
use crate::libs::error::StoreError;
use crate::libs::history::History;
use crate::libs::meeting::Meeting;
use crate::libs::messages::Message;
use crate::libs::summary::MeetingSummary;
use crate::libs::timer::MeetingSource;
use anyhow::Result;
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::warn;

pub const CURRENT_MEETING_KEY: &str = "current_meeting";
pub const HISTORY_KEY: &str = "meeting_history";

pub struct StateStore {
    kv: KeyValue,
}

impl StateStore {
    /// Opens the store in the application data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { kv: KeyValue::new(db) }
    }

    /// The stored meeting, or `None` if there is none or it is unreadable.
    pub fn load_meeting(&self) -> Result<Option<Meeting>, StoreError> {
        self.load_json(CURRENT_MEETING_KEY)
    }

    /// The stored meeting, or a fresh one created now.
    pub fn current_meeting(&self) -> Result<Meeting, StoreError> {
        Ok(self.load_meeting()?.unwrap_or_else(|| Meeting::new(Utc::now())))
    }

    pub fn save_meeting(&self, meeting: &Meeting) -> Result<(), StoreError> {
        self.kv.set(CURRENT_MEETING_KEY, &serde_json::to_string(meeting)?)
    }

    /// The stored history capped at `capacity`, empty if missing or unreadable.
    pub fn load_history(&self, capacity: usize) -> Result<History, StoreError> {
        let entries: Vec<MeetingSummary> = self.load_json(HISTORY_KEY)?.unwrap_or_default();
        Ok(History::from_entries(entries, capacity))
    }

    pub fn save_history(&self, history: &History) -> Result<(), StoreError> {
        self.kv.set(HISTORY_KEY, &serde_json::to_string(history.entries())?)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.kv.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("{}", Message::StoredStateMalformed(key.to_string(), e.to_string()));
                Ok(None)
            }
        }
    }
}

impl MeetingSource for StateStore {
    fn load(&mut self) -> Result<Meeting> {
        Ok(self.current_meeting()?)
    }
}
