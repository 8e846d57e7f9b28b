//! Player-facing word data.

use serde::{Deserialize, Serialize};

/// Everything the quiz needs to present and explain one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordData {
    pub word: String,
    /// Full language name of the correct answer (e.g. `"Old English"`).
    pub correct_language: String,
    pub etymology_text: String,
    pub origin_languages: Vec<String>,
}

impl WordData {
    /// Create word data with no origin languages.
    pub fn new(
        word: impl Into<String>,
        correct_language: impl Into<String>,
        etymology_text: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            correct_language: correct_language.into(),
            etymology_text: etymology_text.into(),
            origin_languages: Vec::new(),
        }
    }

    /// Set the origin languages mentioned in the etymology.
    pub fn with_origin_languages(mut self, languages: Vec<String>) -> Self {
        self.origin_languages = languages;
        self
    }
}
