//! Common Types and Constants
//!
//! Shared data structures used across the engine modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Number of recently shown words excluded from selection
pub const RECENT_WORD_BUFFER: usize = 15;

/// Minimum number of selectable words before the recency buffer is reset
pub const MIN_AVAILABLE_WORDS: usize = 50;

/// Upper cutoff of the random range that routes to the review pool
pub const REVIEW_POOL_CUTOFF: f64 = 0.2;

/// Upper cutoff of the random range that routes to the new-word pool
pub const NEW_POOL_CUTOFF: f64 = 0.8;

/// Correct answers beyond mistakes required to clear review status
pub const MASTERY_CLEAR_MARGIN: u32 = 2;

/// XP awarded per correct answer
pub const XP_PER_CORRECT: u64 = 10;

/// Default number of questions per session
pub const DEFAULT_SESSION_GOAL: u32 = 20;

// ==================== Catalog Types ====================

/// A single word entry as loaded from the catalog.
///
/// The engine reads `word` as the unique identifier and `options` /
/// `correct_answer` for presentation and grading; the remaining fields
/// are explanatory content passed through to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// The word itself; unique within a catalog
    pub word: String,
    /// Part-of-speech label (substantiv, adjektiv, verb, ...)
    pub part_of_speech: String,
    /// The option string that counts as correct
    pub correct_answer: String,
    /// Choices shown to the learner; includes the correct answer
    pub options: Vec<String>,
    /// Short definition shown after answering
    #[serde(default)]
    pub definition: String,
    /// Origin note shown after answering
    #[serde(default)]
    pub etymology: String,
    /// Difficulty rating 1-5; part of the content contract, unused by selection
    #[serde(default)]
    pub difficulty: u8,
    /// Usage example shown after answering
    #[serde(default)]
    pub example_sentence: String,
}

// ==================== Mastery Types ====================

/// Per-word attempt counters.
///
/// Invariant: `correct <= attempts` after every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryRecord {
    /// Total answered questions for this word
    pub attempts: u32,
    /// Correctly answered questions for this word
    pub correct: u32,
}

impl MasteryRecord {
    /// Number of incorrect answers recorded so far
    pub fn mistakes(&self) -> u32 {
        self.attempts.saturating_sub(self.correct)
    }

    /// Fraction of attempts answered correctly, 0.0 when unattempted
    pub fn accuracy(&self) -> f64 {
        if self.attempts > 0 {
            f64::from(self.correct) / f64::from(self.attempts)
        } else {
            0.0
        }
    }
}

// ==================== Tests ====================
