//! Mastery Store
//!
//! Per-word attempt/correct counters and their persistence blob.
//!
//! Core principles:
//! - Records are created lazily on the first attempt and never deleted
//!   within a session
//! - A word needs review while it carries an unresolved mistake deficit:
//!   review clears once the correct total reaches two past the mistake
//!   count, and every additional mistake raises the bar
//! - The full store state round-trips through [`ProgressState`]; a missing
//!   or unreadable blob always restores as the empty store

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{MasteryRecord, MASTERY_CLEAR_MARGIN};

// ==================== Mastery Store ====================

/// Mapping from word identifier to attempt counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasteryStore {
    records: HashMap<String, MasteryRecord>,
}

impl MasteryStore {
    /// Create an empty store; every word starts as new
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted records.
    ///
    /// Restored blobs may carry inconsistent counters; `correct` is
    /// clamped to `attempts` so the store invariant holds.
    pub fn from_records(records: HashMap<String, MasteryRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|(word, mut record)| {
                record.correct = record.correct.min(record.attempts);
                (word, record)
            })
            .collect();
        Self { records }
    }

    /// Record one answered question for a word.
    ///
    /// Creates a zeroed record on first contact, then increments
    /// `attempts` and, iff the answer was correct, `correct`. Call exactly
    /// once per answered question, before the next selection.
    pub fn record_attempt(&mut self, word: &str, was_correct: bool) {
        let record = self.records.entry(word.to_string()).or_default();
        record.attempts += 1;
        if was_correct {
            record.correct += 1;
        }
    }

    /// Whether a word still carries an unresolved mistake deficit.
    ///
    /// True iff the word has been attempted, has at least one mistake,
    /// and has not yet accumulated [`MASTERY_CLEAR_MARGIN`] more correct
    /// answers than mistakes.
    pub fn needs_review(&self, word: &str) -> bool {
        match self.records.get(word) {
            Some(record) if record.attempts > 0 => {
                let mistakes = record.mistakes();
                mistakes > 0 && record.correct < mistakes + MASTERY_CLEAR_MARGIN
            }
            _ => false,
        }
    }

    /// Whether a word has never been attempted
    pub fn is_new(&self, word: &str) -> bool {
        !self.records.contains_key(word)
    }

    /// Counters for a word, if it has been attempted
    pub fn record(&self, word: &str) -> Option<&MasteryRecord> {
        self.records.get(word)
    }

    /// Number of words with at least one recorded attempt
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no word has been attempted yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all recorded attempts
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Copy of the full record map, for persistence
    pub fn snapshot(&self) -> HashMap<String, MasteryRecord> {
        self.records.clone()
    }

    /// Iterate over all (word, record) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MasteryRecord)> {
        self.records.iter()
    }
}

// ==================== Persistence ====================

/// Serializable progress blob.
///
/// Carries the mastery record map plus the caller-owned XP/streak
/// scalars persisted alongside it. `last_practice_date` is round-tripped
/// opaquely; the engine never does date arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    /// Accumulated experience points
    pub xp: u64,
    /// Consecutive practice days, maintained by the caller
    pub streak: u32,
    /// Caller-owned date marker, passed through untouched
    pub last_practice_date: Option<String>,
    /// Per-word attempt counters
    pub word_progress: HashMap<String, MasteryRecord>,
}

impl ProgressState {
    /// Capture the current progress for persistence
    pub fn capture(
        xp: u64,
        streak: u32,
        last_practice_date: Option<String>,
        store: &MasteryStore,
    ) -> Self {
        Self {
            xp,
            streak,
            last_practice_date,
            word_progress: store.snapshot(),
        }
    }

    /// Split the blob back into caller scalars and a mastery store
    pub fn into_parts(self) -> (u64, u32, Option<String>, MasteryStore) {
        (
            self.xp,
            self.streak,
            self.last_practice_date,
            MasteryStore::from_records(self.word_progress),
        )
    }

    /// Serialize to a JSON blob
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Restore from a JSON blob.
    ///
    /// An unreadable blob is treated as "start empty", never as an error.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("unreadable progress blob, starting empty: {err}");
                Self::default()
            }
        }
    }
}

// ==================== Tests ====================
