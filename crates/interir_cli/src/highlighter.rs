use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

/// Command names that get special highlighting.
const COMMANDS: &[&str] = &[
    "add-room",
    "list-rooms",
    "select-room",
    "add-furniture",
    "list-furniture",
    "visualize",
    "help",
    "exit",
];

/// Syntax highlighter for the interactive session.
///
/// The command language has no lexer, so a whitespace scan is the whole
/// tokenizer: the first word is checked against the command names,
/// integer arguments get their own color, and `#` starts a comment.
pub struct InterirHighlighter;

impl Highlighter for InterirHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if line.is_empty() {
            return styled;
        }

        // Split off a trailing comment first
        let (code, comment) = match line.find('#') {
            Some(i) => (&line[..i], Some(&line[i..])),
            None => (line, None),
        };

        let mut last_end = 0;
        let mut is_first_token = true;

        for (start, token) in tokens_with_offsets(code) {
            if start > last_end {
                styled.push((Style::default(), code[last_end..start].to_string()));
            }

            let style = token_style(token, is_first_token);
            is_first_token = false;

            styled.push((style, token.to_string()));
            last_end = start + token.len();
        }

        if last_end < code.len() {
            styled.push((Style::default(), code[last_end..].to_string()));
        }

        if let Some(comment) = comment {
            styled.push((Color::DarkGray.normal(), comment.to_string()));
        }

        styled
    }
}

/// Map a token to its display style.
fn token_style(token: &str, is_first_token: bool) -> Style {
    if is_first_token && COMMANDS.contains(&token) {
        Color::Cyan.bold()
    } else if token.parse::<i64>().is_ok() {
        Color::Magenta.normal()
    } else {
        Style::default()
    }
}

/// Whitespace-delimited tokens with their byte offsets.
fn tokens_with_offsets(s: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, ch) in s.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push((begin, &s[begin..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(begin) = start {
        tokens.push((begin, &s[begin..]));
    }
    tokens
}
