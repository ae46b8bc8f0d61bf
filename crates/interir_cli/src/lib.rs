//! Front end for the Interir interpreter: the interactive session, pipe
//! mode, and command scripts. Everything here is presentation — the
//! command semantics live in `interir_core`.

pub mod completer;
pub mod highlighter;
pub mod repl;
