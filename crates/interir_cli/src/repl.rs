use std::sync::{Arc, Mutex};

use nu_ansi_term::{Color, Style};
use reedline::{
    default_emacs_keybindings, default_vi_insert_keybindings, default_vi_normal_keybindings,
    ColumnarMenu, DefaultHinter, EditMode, Emacs, FileBackedHistory, KeyCode, KeyModifiers,
    Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal, Vi,
};

use interir_core::Session;

use crate::completer::{CompletionContext, InterirCompleter};
use crate::highlighter::InterirHighlighter;

/// Custom prompt for the interactive session.
struct InterirPrompt;

impl Prompt for InterirPrompt {
    fn render_prompt_left(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Owned(Color::Green.bold().paint("interir").to_string())
    }

    fn render_prompt_right(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> std::borrow::Cow<'_, str> {
        match edit_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => std::borrow::Cow::Borrowed("> "),
            PromptEditMode::Vi(vi_mode) => match vi_mode {
                reedline::PromptViMode::Normal => std::borrow::Cow::Borrowed(": "),
                reedline::PromptViMode::Insert => std::borrow::Cow::Borrowed("> "),
            },
            PromptEditMode::Custom(_) => std::borrow::Cow::Borrowed("> "),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Borrowed("... > ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> std::borrow::Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "(failed) ",
        };
        std::borrow::Cow::Owned(format!("{}search: ", prefix))
    }
}

/// Refresh the completion context from the current session state.
fn refresh_completions(session: &Session, ctx: &Arc<Mutex<CompletionContext>>) {
    let Ok(mut c) = ctx.lock() else {
        return;
    };
    c.room_indices = session
        .rooms()
        .iter()
        .map(|room| room.id.to_string())
        .collect();
}

/// Build the history file path, creating parent directories if needed.
fn history_path() -> Option<std::path::PathBuf> {
    let data_dir = data_dir()?.join("interir");
    std::fs::create_dir_all(&data_dir).ok()?;
    Some(data_dir.join("history.txt"))
}

/// Get the XDG data directory or fall back to ~/.local/share.
fn data_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("XDG_DATA_HOME")
        .map(std::path::PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|h| std::path::PathBuf::from(h).join(".local/share"))
        })
}

/// Run the interactive session with reedline.
pub fn run_repl(mut session: Session, vi_mode: bool) {
    let completion_ctx = Arc::new(Mutex::new(CompletionContext::default()));

    let completer = InterirCompleter::new(Arc::clone(&completion_ctx));
    let highlighter = InterirHighlighter;
    let hinter = DefaultHinter::default().with_style(Style::new().fg(Color::DarkGray));

    // Build completion menu
    let completion_menu = ColumnarMenu::default().with_name("completion_menu");

    // Build keybindings with Tab → completion menu
    let edit_mode: Box<dyn EditMode> = if vi_mode {
        let mut normal_kb = default_vi_normal_keybindings();
        let mut insert_kb = default_vi_insert_keybindings();
        bind_tab_completion(&mut insert_kb);
        bind_tab_completion(&mut normal_kb);
        Box::new(Vi::new(insert_kb, normal_kb))
    } else {
        let mut kb = default_emacs_keybindings();
        bind_tab_completion(&mut kb);
        Box::new(Emacs::new(kb))
    };

    // Build reedline editor
    let mut editor = Reedline::create()
        .with_completer(Box::new(completer))
        .with_highlighter(Box::new(highlighter))
        .with_hinter(Box::new(hinter))
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(completion_menu)))
        .with_edit_mode(edit_mode);

    // Add file-backed history if possible
    if let Some(path) = history_path() {
        if let Ok(history) = FileBackedHistory::with_file(1000, path) {
            editor = editor.with_history(Box::new(history));
        }
    }

    let prompt = InterirPrompt;

    // Initialize completions before first prompt
    refresh_completions(&session, &completion_ctx);

    loop {
        match editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => {
                let result = session.exec(&buffer);

                for out in session.take_output() {
                    println!("{}", out);
                }

                if let Err(e) = result {
                    eprintln!("error: {}", e);
                }

                if !session.is_running() {
                    break;
                }

                // Refresh completion context after each command
                refresh_completions(&session, &completion_ctx);
            }
            Ok(Signal::CtrlC) => {
                // Clear current line, continue
            }
            Ok(Signal::CtrlD) => {
                break;
            }
            Err(err) => {
                eprintln!("I/O error: {}", err);
                break;
            }
        }
    }

    println!("goodbye");
}

/// Bind Tab to open/cycle the completion menu.
fn bind_tab_completion(kb: &mut Keybindings) {
    kb.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    kb.add_binding(
        KeyModifiers::SHIFT,
        KeyCode::BackTab,
        ReedlineEvent::MenuPrevious,
    );
}
