use glosa_engine::types::WordEntry;

pub fn word(id: &str) -> WordEntry {
    WordEntry {
        word: id.to_string(),
        part_of_speech: "substantiv".to_string(),
        correct_answer: format!("def-{id}"),
        options: vec![
            format!("def-{id}"),
            "fel ett".to_string(),
            "fel två".to_string(),
            "fel tre".to_string(),
        ],
        definition: format!("definition av {id}"),
        etymology: format!("ursprung för {id}"),
        difficulty: 3,
        example_sentence: format!("exempel med {id}"),
    }
}

pub fn catalog(n: usize) -> Vec<WordEntry> {
    (0..n).map(|i| word(&format!("ord-{i}"))).collect()
}
