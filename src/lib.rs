//! # glosa-engine - Adaptive Vocabulary Drill Engine
//!
//! Core logic for a multiple-choice vocabulary drill: given a word
//! catalog and a learner's answer history, decide which word to present
//! next and keep the per-word mastery state that drives that decision.
//!
//! ## Module structure
//!
//! - [`types`] - shared data types and tuning constants
//! - [`mastery`] - per-word attempt counters and the progress blob
//! - [`selector`] - recency buffer and priority-weighted word selection
//! - [`catalog`] - catalog loading with a built-in fallback word list
//! - [`session`] - answer grading, session counters, XP, and the
//!   [`DrillSession`] pipeline facade
//!
//! ## Usage example
//!
//! ```rust
//! use glosa_engine::{catalog, DrillSession};
//!
//! let mut session = DrillSession::new(catalog::fallback_words());
//! while !session.session_complete() {
//!     let question = match session.next_question() {
//!         Some(question) => question,
//!         None => break,
//!     };
//!     // Present `question.options`, collect the learner's pick...
//!     let feedback = session.submit_answer(&question.options[0]).unwrap();
//!     let _ = feedback.correct;
//! }
//! let blob = session.progress_blob();
//! # let _ = blob;
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod mastery;
pub mod selector;
pub mod session;
pub mod types;

pub use catalog::{fallback_words, from_json_str, from_path, from_reader, load_or_fallback, CatalogError};
pub use mastery::{MasteryStore, ProgressState};
pub use selector::{RecencyBuffer, SelectorOptions, WordSelector};
pub use session::{
    is_correct, level_name, shuffled_options, AnswerFeedback, DrillSession, Question, SessionStats,
};
pub use types::*;
