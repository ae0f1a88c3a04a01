//! Catalog loading
//!
//! Reads the word catalog from a JSON array and falls back to a small
//! built-in word list when loading fails, so the selection logic always
//! has something to work with.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::types::WordEntry;

/// Errors from reading a word catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog from a JSON array string
pub fn from_json_str(raw: &str) -> Result<Vec<WordEntry>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// Parse a catalog from a reader
pub fn from_reader(reader: impl Read) -> Result<Vec<WordEntry>, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a catalog from a JSON file
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<WordEntry>, CatalogError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Load a catalog from a JSON file, substituting the built-in fallback
/// list on any failure. The failure is logged, never surfaced.
pub fn load_or_fallback(path: impl AsRef<Path>) -> Vec<WordEntry> {
    match from_path(path.as_ref()) {
        Ok(words) => {
            tracing::info!("loaded {} words from {}", words.len(), path.as_ref().display());
            words
        }
        Err(err) => {
            tracing::warn!(
                "failed to load catalog from {}, using fallback words: {err}",
                path.as_ref().display()
            );
            fallback_words()
        }
    }
}

/// Built-in sample words used when no catalog can be loaded
pub fn fallback_words() -> Vec<WordEntry> {
    vec![
        WordEntry {
            word: "maskopi".to_string(),
            part_of_speech: "substantiv".to_string(),
            correct_answer: "hemligt samförstånd".to_string(),
            options: vec![
                "hemligt samförstånd".to_string(),
                "oväntat bakslag".to_string(),
                "pinsamt misslyckande".to_string(),
                "falsk identitet".to_string(),
                "underjordisk rörelse".to_string(),
            ],
            definition: "Ett hemligt samarbete eller samförstånd mellan parter, ofta i syfte \
                         att lura eller bedra andra."
                .to_string(),
            etymology: "Från italienska 'macchinazione' via franska. Relaterat till 'maskin' \
                        - ursprungligen syftande på hemliga manövrer."
                .to_string(),
            difficulty: 3,
            example_sentence: "De misstänktes för maskopi med konkurrenten.".to_string(),
        },
        WordEntry {
            word: "eterisk".to_string(),
            part_of_speech: "adjektiv".to_string(),
            correct_answer: "flyktig".to_string(),
            options: vec![
                "giftig".to_string(),
                "flyktig".to_string(),
                "explosiv".to_string(),
                "frätande".to_string(),
                "trögflytande".to_string(),
            ],
            definition: "Som har att göra med eter; lätt och luftig; himmelsk eller andlig \
                         till sin natur."
                .to_string(),
            etymology: "Från grekiska 'aither' (den rena övre luften) via latin 'aether'."
                .to_string(),
            difficulty: 3,
            example_sentence: "Hennes eteriska skönhet fängslade alla närvarande.".to_string(),
        },
        WordEntry {
            word: "perforera".to_string(),
            part_of_speech: "verb".to_string(),
            correct_answer: "göra hål i".to_string(),
            options: vec![
                "snygga till".to_string(),
                "visa upp".to_string(),
                "sätta fast".to_string(),
                "vika ihop".to_string(),
                "göra hål i".to_string(),
            ],
            definition: "Att göra hål eller en serie hål i något.".to_string(),
            etymology: "Från latin 'perforare' (per = genom + forare = borra).".to_string(),
            difficulty: 2,
            example_sentence: "Maskinen perforerar pappret längs kanten.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_json_array() {
        let raw = r#"[
            {
                "word": "maskopi",
                "partOfSpeech": "substantiv",
                "correctAnswer": "hemligt samförstånd",
                "options": ["hemligt samförstånd", "oväntat bakslag"],
                "definition": "Ett hemligt samarbete.",
                "etymology": "Från italienska.",
                "difficulty": 3,
                "exampleSentence": "De misstänktes för maskopi."
            }
        ]"#;
        let words = from_json_str(raw).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "maskopi");
        assert_eq!(words[0].part_of_speech, "substantiv");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            from_json_str("{not a catalog"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let raw = serde_json::to_string(&fallback_words()).unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        let words = from_path(file.path()).unwrap();
        assert_eq!(words, fallback_words());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            from_path("/no/such/catalog.json"),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn load_or_fallback_substitutes_sample_words() {
        let words = load_or_fallback("/no/such/catalog.json");
        assert_eq!(words, fallback_words());
    }

    #[test]
    fn fallback_words_are_well_formed() {
        let words = fallback_words();
        assert!(words.len() >= 3);
        for entry in &words {
            assert!(
                entry.options.contains(&entry.correct_answer),
                "{} lacks its correct answer among the options",
                entry.word
            );
            assert!((4..=5).contains(&entry.options.len()));
        }
    }
}
