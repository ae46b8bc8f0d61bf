use std::fmt;

/// Errors produced by session operations.
///
/// Every variant is recovered at the dispatch boundary: a failed command
/// reports its message and leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Missing or unparseable command arguments.
    InvalidArguments(String),
    /// A room index outside the registry bounds.
    OutOfRange { index: i64, len: usize },
    /// A furniture position outside the selected room.
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// A command that needs a selected room ran with none.
    NoSelection,
    /// The first word of the line is not a known command.
    UnknownCommand(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            SessionError::OutOfRange { index, len } => write!(
                f,
                "invalid room index {} (have {} room{})",
                index,
                len,
                if *len == 1 { "" } else { "s" },
            ),
            SessionError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "position ({}, {}) is outside the room bounds ({}x{})",
                x, y, width, height,
            ),
            SessionError::NoSelection => {
                write!(f, "no room selected (use 'select-room <index>' first)")
            }
            SessionError::UnknownCommand(kw) => {
                write!(f, "unknown command: {} (type 'help' for a list)", kw)
            }
        }
    }
}

impl std::error::Error for SessionError {}
