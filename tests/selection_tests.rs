//! Selection behavior against full catalogs: anti-repetition window,
//! starvation safeguards, pool routing, and long-run mix.

mod common;

use std::collections::HashSet;

use glosa_engine::{MasteryStore, RecencyBuffer, WordSelector, RECENT_WORD_BUFFER};

#[test]
fn no_repeats_within_the_recency_window() {
    // 80 words keep the candidate count above the reset floor for a full
    // window of selections, so the buffer is never cleared mid-run.
    let catalog = common::catalog(80);
    let mut selector = WordSelector::with_seed(42);
    let mastery = MasteryStore::new();
    let mut recent = RecencyBuffer::new();

    let mut seen = HashSet::new();
    for _ in 0..RECENT_WORD_BUFFER {
        let picked = selector.select_next(&catalog, &mastery, &mut recent).unwrap();
        assert!(
            seen.insert(picked.word.clone()),
            "{} repeated within the window",
            picked.word
        );
    }
}

#[test]
fn ten_word_catalog_never_starves() {
    let catalog = common::catalog(10);
    let mut selector = WordSelector::with_seed(7);
    let mastery = MasteryStore::new();
    let mut recent = RecencyBuffer::new();

    for _ in 0..200 {
        assert!(selector.select_next(&catalog, &mastery, &mut recent).is_some());
    }
}

#[test]
fn saturated_catalog_always_selects_from_available() {
    // Every word mastered well past the review margin: both special
    // pools are empty, yet selection must never come up empty.
    let catalog = common::catalog(60);
    let mut mastery = MasteryStore::new();
    for entry in &catalog {
        for _ in 0..3 {
            mastery.record_attempt(&entry.word, true);
        }
    }

    let mut selector = WordSelector::with_seed(13);
    let mut recent = RecencyBuffer::new();
    for _ in 0..1000 {
        let picked = selector.select_next(&catalog, &mastery, &mut recent).unwrap();
        assert!(!mastery.needs_review(&picked.word));
        assert!(!mastery.is_new(&picked.word));
    }
}

#[test]
fn empty_catalog_signals_no_word_available() {
    let mut selector = WordSelector::with_seed(1);
    let mastery = MasteryStore::new();
    let mut recent = RecencyBuffer::new();
    recent.push("kvarleva");

    assert!(selector.select_next(&[], &mastery, &mut recent).is_none());
    assert_eq!(recent.len(), 1, "empty catalog must not touch the buffer");
}

#[test]
fn review_words_surface_at_roughly_the_configured_rate() {
    // One review word among 100, everything else mastered; a fresh
    // buffer per draw isolates the pool routing from recency effects.
    // Expected pick rate: 0.2 + 0.8 / 100.
    let catalog = common::catalog(100);
    let mut mastery = MasteryStore::new();
    mastery.record_attempt("ord-0", false);
    for entry in catalog.iter().filter(|w| w.word != "ord-0") {
        for _ in 0..2 {
            mastery.record_attempt(&entry.word, true);
        }
    }

    let mut selector = WordSelector::with_seed(42);
    let mut review_picks = 0;
    for _ in 0..1000 {
        let mut recent = RecencyBuffer::new();
        let picked = selector.select_next(&catalog, &mastery, &mut recent).unwrap();
        if picked.word == "ord-0" {
            review_picks += 1;
        }
    }

    assert!(
        (120..=300).contains(&review_picks),
        "review word picked {review_picks} times out of 1000"
    );
}

#[test]
fn new_words_dominate_a_half_learned_catalog() {
    // 50 mastered words, 50 new words, no review words. The new pool
    // should absorb both its own range and half of the unrestricted
    // range: roughly 0.8 + 0.2 * 0.5 of all picks.
    let catalog = common::catalog(100);
    let mut mastery = MasteryStore::new();
    for entry in catalog.iter().take(50) {
        for _ in 0..2 {
            mastery.record_attempt(&entry.word, true);
        }
    }

    let mut selector = WordSelector::with_seed(99);
    let mut new_picks = 0;
    for _ in 0..1000 {
        let mut recent = RecencyBuffer::new();
        let picked = selector.select_next(&catalog, &mastery, &mut recent).unwrap();
        if mastery.is_new(&picked.word) {
            new_picks += 1;
        }
    }

    assert!(
        new_picks > 800,
        "new words picked only {new_picks} times out of 1000"
    );
}
