//! Plain-text and JSON summaries of a finished session.

use std::fmt::Write as _;

use serde::Serialize;

use crate::content::ContentState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub count: usize,
}

/// What a one-shot run prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub url: String,
    pub content_chars: usize,
    pub fifteenth_char: Option<char>,
    pub every_fifteenth_chars: Vec<char>,
    pub unique_words: usize,
    pub top_words: Vec<WordEntry>,
    pub error: Option<String>,
}

impl Report {
    pub fn from_state(url: &str, state: &ContentState, top: usize) -> Self {
        Self {
            url: url.to_string(),
            content_chars: state.content.as_deref().map_or(0, |c| c.chars().count()),
            fifteenth_char: state.fifteenth_char,
            every_fifteenth_chars: state.every_fifteenth_chars.clone(),
            unique_words: state.word_counts.len(),
            top_words: state
                .top_words(top)
                .into_iter()
                .map(|(word, count)| WordEntry {
                    word: word.to_string(),
                    count,
                })
                .collect(),
            error: state.error.clone(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "URL:                  {}", self.url);
        let _ = writeln!(out, "Content length:       {} chars", self.content_chars);
        let _ = writeln!(
            out,
            "15th character:       {}",
            self.fifteenth_char
                .map_or_else(|| "-".to_string(), |c| format!("{:?}", c))
        );
        let _ = writeln!(
            out,
            "Every 15th character: {} found",
            self.every_fifteenth_chars.len()
        );
        if !self.every_fifteenth_chars.is_empty() {
            let _ = writeln!(out, "  {}", join_chars(&self.every_fifteenth_chars));
        }
        let _ = writeln!(out, "Unique words:         {}", self.unique_words);
        for entry in &self.top_words {
            let _ = writeln!(out, "  {:>6}  {}", entry.count, entry.word);
        }
        if let Some(error) = &self.error {
            let _ = writeln!(out, "Error:                {}", error);
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `a, b, c` with whitespace made visible.
pub fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| match c {
            ' ' => "␠".to_string(),
            '\n' => "\\n".to_string(),
            '\t' => "\\t".to_string(),
            '\r' => "\\r".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
