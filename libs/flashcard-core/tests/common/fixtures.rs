//! Sample flashcard documents.

use serde_json::json;

/// JSON array of `num_cards` complete question/answer objects.
pub fn sample_json(num_cards: usize) -> String {
    let cards: Vec<_> = (0..num_cards)
        .map(|i| {
            json!({
                "question": format!("Question {}?", i + 1),
                "answer": format!("Answer {}.", i + 1),
            })
        })
        .collect();
    serde_json::to_string_pretty(&cards).unwrap()
}

/// Deck exercising quoting, missing fields and list answers.
pub fn tricky_json() -> String {
    json!([
        { "question": "Q1", "answer": "A1" },
        { "question": "Q2" },
        { "question": "a,b", "answer": "c" },
        { "question": "He said \"hi\"", "answer": "line 1\nline 2" },
        { "question": "Steps?", "answer": ["Read", "Write"] },
    ])
    .to_string()
}
