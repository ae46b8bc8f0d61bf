use std::sync::{Arc, Mutex};

use reedline::{Completer, Span, Suggestion};

use interir_core::render::SYMBOLS;

/// All command names.
const ALL_COMMANDS: &[&str] = &[
    "add-room",
    "list-rooms",
    "select-room",
    "add-furniture",
    "list-furniture",
    "visualize",
    "help",
    "exit",
];

/// Dynamic completion data refreshed after each command execution.
#[derive(Default)]
pub struct CompletionContext {
    /// Indices of the rooms currently in the registry, as typed-in text.
    pub room_indices: Vec<String>,
}

/// Context-aware tab completer for the interactive session.
pub struct InterirCompleter {
    ctx: Arc<Mutex<CompletionContext>>,
}

impl InterirCompleter {
    pub fn new(ctx: Arc<Mutex<CompletionContext>>) -> Self {
        Self { ctx }
    }
}

/// Build a Suggestion value.
fn suggestion(value: String, span: Span, append_whitespace: bool) -> Suggestion {
    Suggestion {
        value,
        description: None,
        style: None,
        extra: None,
        span,
        append_whitespace,
    }
}

impl Completer for InterirCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_cursor = &line[..pos];
        let trimmed = line_to_cursor.trim_start();

        if trimmed.is_empty() {
            // No input yet — suggest all commands
            return ALL_COMMANDS
                .iter()
                .map(|cmd| suggestion(cmd.to_string(), Span::new(pos, pos), true))
                .collect();
        }

        // Find the first word and the rest
        let (first_word, after_first) = split_first_word(trimmed);

        if after_first.is_none() {
            // Still typing the first word — prefix-match commands
            let offset = line_to_cursor.len() - trimmed.len();
            return prefix_matches(ALL_COMMANDS, first_word)
                .into_iter()
                .map(|cmd| suggestion(cmd.to_string(), Span::new(offset, pos), true))
                .collect();
        }

        let rest = after_first.unwrap();

        match first_word {
            "select-room" => {
                // After select-room: complete current room indices
                let ctx = self.ctx.lock().unwrap();
                let (current, _) = split_first_word(rest);
                let word_start = pos - current.len();
                prefix_matches_owned(&ctx.room_indices, current)
                    .into_iter()
                    .map(|s| suggestion(s, Span::new(word_start, pos), true))
                    .collect()
            }
            "add-furniture" => {
                // After add-furniture: complete known furniture kinds
                let (current, _) = split_first_word(rest);
                let word_start = pos - current.len();
                SYMBOLS
                    .iter()
                    .map(|&(kind, _)| kind)
                    .filter(|kind| current.is_empty() || kind.starts_with(current))
                    .map(|kind| suggestion(kind.to_string(), Span::new(word_start, pos), true))
                    .collect()
            }
            "help" => {
                // After help: complete command names
                let (current, _) = split_first_word(rest);
                let word_start = pos - current.len();
                prefix_matches(ALL_COMMANDS, current)
                    .into_iter()
                    .map(|cmd| suggestion(cmd.to_string(), Span::new(word_start, pos), false))
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Split into first whitespace-delimited word and the rest (if any).
fn split_first_word(s: &str) -> (&str, Option<&str>) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], Some(s[pos..].trim_start())),
        None => (s, None),
    }
}

/// Prefix-match against a list of static strings.
fn prefix_matches<'a>(candidates: &[&'a str], prefix: &str) -> Vec<&'a str> {
    if prefix.is_empty() {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .filter(|c| c.starts_with(prefix))
        .copied()
        .collect()
}

/// Prefix-match against a list of owned strings.
fn prefix_matches_owned(candidates: &[String], prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .filter(|c| c.starts_with(prefix))
        .cloned()
        .collect()
}
