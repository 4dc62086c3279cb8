//! Key-value persistence and the per-user data adapter.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::countdown::Countdown;
use crate::date;
use crate::error::Result;
use crate::identity::Claims;
use crate::vacation::Vacation;

/// Key holding the signed-in user's identity claims
pub const USER_KEY: &str = "user";
/// Key holding the bearer token delivered alongside the ID token
pub const ACCESS_TOKEN_KEY: &str = "google_access_token";
/// Key prefix for per-user countdown data, completed by the subject id
const USER_DATA_PREFIX: &str = "countdownUserData-";

/// String-keyed store of JSON-encoded blobs
pub trait KeyValueStore {
    /// Returns the value stored under a key, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Stores a value under a key, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    /// Removes a key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store: one JSON object per file, written through on every
/// mutation
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens a store file, creating an empty store when the file does not
    /// exist yet
    ///
    /// # Errors
    /// * I/O failure other than the file being absent
    /// * Unreadable JSON; the caller decides whether to fall back to
    ///   [`FileStore::fresh`]
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(FileStore { path, entries })
    }

    /// Creates an empty store at a path, ignoring whatever the file holds
    pub fn fresh(path: impl Into<PathBuf>) -> Self {
        FileStore {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.persist()
    }
}

/// Persisted shape of one user's countdown data
///
/// Fields are raw strings on purpose: restore validates each one
/// independently, so one corrupt field degrades alone instead of poisoning
/// the record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredUserData {
    #[serde(default, rename = "startDate")]
    start_date: String,
    #[serde(default, rename = "endDate")]
    end_date: String,
    #[serde(default)]
    vacations: Vec<StoredVacation>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredVacation {
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

/// Outcome of restoring a user's data: the usable state plus any non-fatal
/// notices worth showing
pub struct Restored {
    pub countdown: Countdown,
    pub notices: Vec<String>,
}

/// Builds the storage key for a user's countdown data
pub fn user_data_key(subject: &str) -> String {
    format!("{USER_DATA_PREFIX}{subject}")
}

/// Saves a user's countdown data under their subject id
pub fn save_user_data(
    store: &mut dyn KeyValueStore,
    subject: &str,
    countdown: &Countdown,
) -> Result<()> {
    let record = StoredUserData {
        start_date: countdown.start().map(date::format_date).unwrap_or_default(),
        end_date: countdown.end().map(date::format_date).unwrap_or_default(),
        vacations: countdown
            .vacations()
            .iter()
            .map(|vacation| StoredVacation {
                start: vacation.start.map(date::format_date).unwrap_or_default(),
                end: vacation.end.map(date::format_date).unwrap_or_default(),
            })
            .collect(),
    };
    store.set(&user_data_key(subject), serde_json::to_string(&record)?)
}

/// Restores a user's countdown data, validating every field independently
///
/// Restore never fails: corrupt record JSON is discarded for defaults, an
/// invalid start date falls back to today, an invalid end date to absent,
/// and an end before the start is coerced to the start. Each substitution
/// except the last adds a notice.
pub fn restore_user_data(
    store: &dyn KeyValueStore,
    subject: &str,
    today: NaiveDate,
) -> Restored {
    let mut notices = Vec::new();

    let record = match store.get(&user_data_key(subject)) {
        None => StoredUserData::default(),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(_) => {
                notices
                    .push("stored countdown data was corrupted; starting from defaults".to_string());
                StoredUserData::default()
            }
        },
    };

    let start = restore_date_field("start date", &record.start_date, &mut notices)
        .unwrap_or(today);
    let mut end = restore_date_field("end date", &record.end_date, &mut notices);
    if let Some(end_date) = end {
        if end_date < start {
            end = Some(start);
        }
    }

    let vacations = record
        .vacations
        .iter()
        .map(|stored| {
            Vacation::new(
                restore_date_field("vacation start", &stored.start, &mut notices),
                restore_date_field("vacation end", &stored.end, &mut notices),
            )
        })
        .collect();

    Restored {
        countdown: Countdown::with_parts(Some(start), end, vacations),
        notices,
    }
}

/// Validates one stored date field; empty means absent, invalid means
/// absent plus a notice
fn restore_date_field(
    label: &str,
    raw: &str,
    notices: &mut Vec<String>,
) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    match date::parse_date(raw) {
        Ok(date) => Some(date),
        Err(_) => {
            notices.push(format!("ignoring stored {label} '{raw}': not a valid date"));
            None
        }
    }
}

/// Loads the signed-in user's claims, if a valid session record exists
pub fn load_session(store: &dyn KeyValueStore) -> Option<Claims> {
    let raw = store.get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Stores the signed-in user's claims
pub fn save_session(store: &mut dyn KeyValueStore, claims: &Claims) -> Result<()> {
    store.set(USER_KEY, serde_json::to_string(claims)?)
}

/// Drops the session and its bearer token; per-user data stays for the
/// next sign-in
pub fn clear_session(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(ACCESS_TOKEN_KEY)?;
    store.remove(USER_KEY)
}
