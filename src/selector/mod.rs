//! Word Selector
//!
//! Priority-weighted random selection of the next word to present.
//!
//! Core principles:
//! - Words shown within the last [`RECENT_WORD_BUFFER`] questions are
//!   excluded, unless that would shrink the candidate list below
//!   [`MIN_AVAILABLE_WORDS`] (then the buffer is cleared instead)
//! - A single uniform draw routes selection to the review pool
//!   (`r < 0.2`), the new-word pool (`r < 0.8`), or the full candidate
//!   list, with each arm skipped when its pool is empty
//! - The final pick is uniform within the chosen pool
//!
//! The RNG is a seeded `ChaCha8Rng` by default and injectable through
//! the `R: Rng` parameter for deterministic tests.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::mastery::MasteryStore;
use crate::types::{
    WordEntry, MIN_AVAILABLE_WORDS, NEW_POOL_CUTOFF, RECENT_WORD_BUFFER, REVIEW_POOL_CUTOFF,
};

// ==================== Recency Buffer ====================

/// FIFO list of the identifiers shown most recently.
///
/// Purely transient anti-repetition state; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyBuffer {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecencyBuffer {
    /// Buffer with the standard capacity of [`RECENT_WORD_BUFFER`] entries
    pub fn new() -> Self {
        Self::with_capacity(RECENT_WORD_BUFFER)
    }

    /// Buffer with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    /// Whether an identifier is currently excluded from selection
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry == word)
    }

    /// Append an identifier, evicting the oldest entry beyond capacity
    pub fn push(&mut self, word: impl Into<String>) {
        self.entries.push_back(word.into());
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Number of identifiers currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer holds no identifiers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all held identifiers
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate oldest-first over the held identifiers
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for RecencyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed drawn from the system clock, used when no seed is supplied
pub(crate) fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

// ==================== Selector Options ====================

/// Word selector configuration
#[derive(Clone, Debug)]
pub struct SelectorOptions {
    /// Review-pool cutoff (default: 0.2)
    pub review_cutoff: Option<f64>,
    /// New-pool cutoff (default: 0.8)
    pub new_cutoff: Option<f64>,
    /// Candidate-count floor that triggers a buffer reset (default: 50)
    pub min_available: Option<usize>,
    /// Random seed for reproducibility (optional)
    pub seed: Option<u64>,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            review_cutoff: Some(REVIEW_POOL_CUTOFF),
            new_cutoff: Some(NEW_POOL_CUTOFF),
            min_available: Some(MIN_AVAILABLE_WORDS),
            seed: None,
        }
    }
}

// ==================== Word Selector ====================

/// Picks the next word to present from a catalog.
///
/// Owns the RNG; consults the [`MasteryStore`] for word classification
/// and the [`RecencyBuffer`] for short-term exclusion. Reads the catalog,
/// never mutates it.
#[derive(Debug, Clone)]
pub struct WordSelector<R: Rng = ChaCha8Rng> {
    rng: R,
    review_cutoff: f64,
    new_cutoff: f64,
    min_available: usize,
}

impl WordSelector<ChaCha8Rng> {
    /// Selector with default options and an entropy-derived seed
    pub fn new() -> Self {
        Self::with_options(SelectorOptions::default())
    }

    /// Selector with custom options
    pub fn with_options(options: SelectorOptions) -> Self {
        let seed = options.seed.unwrap_or_else(clock_seed);

        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            review_cutoff: options.review_cutoff.unwrap_or(REVIEW_POOL_CUTOFF),
            new_cutoff: options.new_cutoff.unwrap_or(NEW_POOL_CUTOFF),
            min_available: options.min_available.unwrap_or(MIN_AVAILABLE_WORDS),
        }
    }

    /// Selector with a specific seed (for testing)
    pub fn with_seed(seed: u64) -> Self {
        Self::with_options(SelectorOptions {
            seed: Some(seed),
            ..SelectorOptions::default()
        })
    }
}

impl Default for WordSelector<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WordSelector<R> {
    /// Selector driven by an injected random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            review_cutoff: REVIEW_POOL_CUTOFF,
            new_cutoff: NEW_POOL_CUTOFF,
            min_available: MIN_AVAILABLE_WORDS,
        }
    }

    /// Pick the next word to present and record it as recently shown.
    ///
    /// Returns `None` only for an empty catalog; the buffer is left
    /// untouched in that case.
    pub fn select_next<'a>(
        &mut self,
        catalog: &'a [WordEntry],
        mastery: &MasteryStore,
        recent: &mut RecencyBuffer,
    ) -> Option<&'a WordEntry> {
        if catalog.is_empty() {
            return None;
        }

        let mut available: Vec<&WordEntry> = catalog
            .iter()
            .filter(|entry| !recent.contains(&entry.word))
            .collect();

        // The buffer would exclude too much of a small catalog; clearing
        // it restores the full candidate list in one step.
        if available.len() < self.min_available {
            tracing::debug!(
                "recency buffer reset: {} of {} words available",
                available.len(),
                catalog.len()
            );
            recent.clear();
            available = catalog.iter().collect();
        }

        let review_pool: Vec<&WordEntry> = available
            .iter()
            .copied()
            .filter(|entry| mastery.needs_review(&entry.word))
            .collect();
        let new_pool: Vec<&WordEntry> = available
            .iter()
            .copied()
            .filter(|entry| mastery.is_new(&entry.word))
            .collect();

        // One draw, checked against both cutoffs in order; an empty pool
        // drops its arm entirely instead of narrowing the range.
        let roll: f64 = self.rng.gen();
        let mut pool: &[&WordEntry] = if !review_pool.is_empty() && roll < self.review_cutoff {
            &review_pool
        } else if !new_pool.is_empty() && roll < self.new_cutoff {
            &new_pool
        } else {
            &available
        };
        if pool.is_empty() {
            pool = &available;
        }

        let entry = *pool.choose(&mut self.rng)?;
        recent.push(entry.word.clone());
        Some(entry)
    }
}

// ==================== Tests ====================
