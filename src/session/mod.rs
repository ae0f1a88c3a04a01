//! Session layer
//!
//! Answer evaluation, session counters, XP bookkeeping, and the
//! [`DrillSession`] facade that wires catalog, mastery store, recency
//! buffer, and selector into the per-question pipeline: select a word,
//! grade the answer, record the attempt, repeat.

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use serde::Serialize;

use crate::mastery::{MasteryStore, ProgressState};
use crate::selector::{clock_seed, RecencyBuffer, WordSelector};
use crate::types::{WordEntry, DEFAULT_SESSION_GOAL, XP_PER_CORRECT};

// ==================== Answer Evaluation ====================

/// Whether a submitted option matches the entry's correct answer.
///
/// Grading is exact string equality; the caller presents options
/// verbatim, so no normalization is applied.
pub fn is_correct(entry: &WordEntry, selected: &str) -> bool {
    entry.correct_answer == selected
}

/// The entry's option strings in uniformly shuffled presentation order
pub fn shuffled_options<R: Rng>(entry: &WordEntry, rng: &mut R) -> Vec<String> {
    let mut options = entry.options.clone();
    options.shuffle(rng);
    options
}

// ==================== XP and Levels ====================

/// Level title for an XP total
pub fn level_name(xp: u64) -> &'static str {
    if xp < 100 {
        "Nybörjare"
    } else if xp < 500 {
        "Lärling"
    } else if xp < 1000 {
        "Elev"
    } else if xp < 2500 {
        "Student"
    } else if xp < 5000 {
        "Kandidat"
    } else if xp < 10000 {
        "Magister"
    } else if xp < 25000 {
        "Doktor"
    } else {
        "Professor"
    }
}

// ==================== Session Counters ====================

/// Counters for one bounded run of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Questions that make up a full session
    pub goal: u32,
    /// Questions answered this session
    pub total: u32,
    /// Questions answered correctly this session
    pub correct: u32,
}

impl SessionStats {
    pub fn new(goal: u32) -> Self {
        Self {
            goal,
            total: 0,
            correct: 0,
        }
    }

    /// Count one answered question
    pub fn record(&mut self, was_correct: bool) {
        self.total += 1;
        if was_correct {
            self.correct += 1;
        }
    }

    /// Whether the session goal has been met
    pub fn goal_reached(&self) -> bool {
        self.total >= self.goal && self.total > 0
    }

    /// Start a fresh run, keeping the goal
    pub fn reset(&mut self) {
        self.total = 0;
        self.correct = 0;
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_GOAL)
    }
}

// ==================== Drill Session ====================

/// A question as presented to the learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub word: String,
    pub part_of_speech: String,
    /// Options in shuffled presentation order
    pub options: Vec<String>,
}

/// Everything shown on the result view after an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer: String,
    pub definition: String,
    pub etymology: String,
    pub example_sentence: String,
    pub xp_awarded: u64,
}

/// One learner's drill pipeline.
///
/// Owns the catalog, the mastery store, the recency buffer, and the
/// selector as one unit with single-session exclusive access. Each
/// question flows `next_question` → `submit_answer`; submitting records
/// the attempt before the next selection, as the store contract requires.
#[derive(Debug, Clone)]
pub struct DrillSession {
    catalog: Vec<WordEntry>,
    mastery: MasteryStore,
    recent: RecencyBuffer,
    selector: WordSelector,
    stats: SessionStats,
    xp: u64,
    streak: u32,
    last_practice_date: Option<String>,
    current: Option<usize>,
    shuffle_rng: ChaCha8Rng,
}

impl DrillSession {
    /// Session over a catalog, starting with empty progress
    pub fn new(catalog: Vec<WordEntry>) -> Self {
        Self::build(
            catalog,
            WordSelector::new(),
            ChaCha8Rng::seed_from_u64(clock_seed()),
        )
    }

    /// Session with a specific seed (for testing)
    pub fn with_seed(catalog: Vec<WordEntry>, seed: u64) -> Self {
        Self::build(
            catalog,
            WordSelector::with_seed(seed),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    fn build(catalog: Vec<WordEntry>, selector: WordSelector, shuffle_rng: ChaCha8Rng) -> Self {
        Self {
            catalog,
            mastery: MasteryStore::new(),
            recent: RecencyBuffer::new(),
            selector,
            stats: SessionStats::default(),
            xp: 0,
            streak: 0,
            last_practice_date: None,
            current: None,
            shuffle_rng,
        }
    }

    /// Select the next word and present it with shuffled options.
    ///
    /// Returns `None` only when the catalog is empty; reaching the
    /// session goal does not block further questions, the caller decides
    /// when to stop via [`session_complete`](Self::session_complete).
    pub fn next_question(&mut self) -> Option<Question> {
        let entry = self
            .selector
            .select_next(&self.catalog, &self.mastery, &mut self.recent)?;
        let question = Question {
            word: entry.word.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            options: shuffled_options(entry, &mut self.shuffle_rng),
        };
        self.current = self.catalog.iter().position(|w| w.word == question.word);
        Some(question)
    }

    /// Grade the submitted option for the current question.
    ///
    /// Records the attempt, updates session counters and XP, and clears
    /// the current question. Returns `None` when no question is pending
    /// (including a second submit for the same question).
    pub fn submit_answer(&mut self, selected: &str) -> Option<AnswerFeedback> {
        let index = self.current.take()?;
        let entry = &self.catalog[index];
        let correct = is_correct(entry, selected);

        let feedback = AnswerFeedback {
            correct,
            correct_answer: entry.correct_answer.clone(),
            definition: entry.definition.clone(),
            etymology: entry.etymology.clone(),
            example_sentence: entry.example_sentence.clone(),
            xp_awarded: if correct { XP_PER_CORRECT } else { 0 },
        };

        self.mastery.record_attempt(&self.catalog[index].word, correct);
        self.stats.record(correct);
        self.xp += feedback.xp_awarded;

        Some(feedback)
    }

    /// The full entry for the pending question, if one is pending
    pub fn current_word(&self) -> Option<&WordEntry> {
        self.current.map(|index| &self.catalog[index])
    }

    /// Whether the session goal has been met
    pub fn session_complete(&self) -> bool {
        self.stats.goal_reached()
    }

    /// Reset the session counters for another run; progress and mastery
    /// carry over
    pub fn start_new_session(&mut self) {
        self.stats.reset();
    }

    /// Serialize progress (mastery + XP/streak scalars) to a JSON blob
    pub fn progress_blob(&self) -> String {
        ProgressState::capture(
            self.xp,
            self.streak,
            self.last_practice_date.clone(),
            &self.mastery,
        )
        .to_json()
    }

    /// Restore progress from a JSON blob; an unreadable blob restores as
    /// empty progress
    pub fn restore_progress(&mut self, blob: &str) {
        let (xp, streak, last_practice_date, mastery) = ProgressState::from_json(blob).into_parts();
        self.xp = xp;
        self.streak = streak;
        self.last_practice_date = last_practice_date;
        self.mastery = mastery;
    }

    // ==================== Accessors ====================

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn mastery(&self) -> &MasteryStore {
        &self.mastery
    }

    pub fn catalog(&self) -> &[WordEntry] {
        &self.catalog
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// Current level title for the accumulated XP
    pub fn level(&self) -> &'static str {
        level_name(self.xp)
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Streak is caller-maintained; the engine only persists it
    pub fn set_streak(&mut self, streak: u32) {
        self.streak = streak;
    }

    pub fn last_practice_date(&self) -> Option<&str> {
        self.last_practice_date.as_deref()
    }

    pub fn set_last_practice_date(&mut self, date: Option<String>) {
        self.last_practice_date = date;
    }
}

// ==================== Tests ====================
