use crate::error::SessionError;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddRoom {
        name: String,
        width: i32,
        height: i32,
    },
    ListRooms,
    SelectRoom {
        index: i64,
    },
    AddFurniture {
        kind: String,
        x: i32,
        y: i32,
    },
    ListFurniture,
    Visualize,
    Help {
        topic: Option<String>,
    },
    Exit,
}

const ADD_ROOM_USAGE: &str = "usage: add-room <name> <width> <height>";
const SELECT_ROOM_USAGE: &str = "usage: select-room <index>";
const ADD_FURNITURE_USAGE: &str = "usage: add-furniture <kind> <x> <y>";

/// Parse a line of input into a command.
///
/// Returns `None` for blank lines and `#` comment lines. Argument shapes
/// are validated here, once: a recognized keyword with missing or
/// unparseable arguments is `InvalidArguments` (carrying the usage
/// string), an unrecognized keyword is `UnknownCommand`. Tokens beyond a
/// command's arity are ignored.
///
/// The `select-room` index is parsed as a signed integer so that a
/// negative index reaches the registry lookup and fails there as
/// out-of-range rather than here as a parse error.
pub fn parse_command(line: &str) -> Option<Result<Command, SessionError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut tokens = trimmed.split_whitespace();
    let keyword = tokens.next()?;

    Some(match keyword {
        "add-room" => parse_add_room(tokens.next(), tokens.next(), tokens.next()),
        "list-rooms" => Ok(Command::ListRooms),
        "select-room" => parse_select_room(tokens.next()),
        "add-furniture" => parse_add_furniture(tokens.next(), tokens.next(), tokens.next()),
        "list-furniture" => Ok(Command::ListFurniture),
        "visualize" => Ok(Command::Visualize),
        "help" => Ok(Command::Help {
            topic: tokens.next().map(str::to_string),
        }),
        "exit" => Ok(Command::Exit),
        other => Err(SessionError::UnknownCommand(other.to_string())),
    })
}

fn parse_add_room(
    name: Option<&str>,
    width: Option<&str>,
    height: Option<&str>,
) -> Result<Command, SessionError> {
    let (Some(name), Some(width), Some(height)) = (name, width, height) else {
        return Err(SessionError::InvalidArguments(ADD_ROOM_USAGE.into()));
    };
    Ok(Command::AddRoom {
        name: name.to_string(),
        width: parse_int(width, ADD_ROOM_USAGE)?,
        height: parse_int(height, ADD_ROOM_USAGE)?,
    })
}

fn parse_select_room(index: Option<&str>) -> Result<Command, SessionError> {
    let Some(index) = index else {
        return Err(SessionError::InvalidArguments(SELECT_ROOM_USAGE.into()));
    };
    let index = index.parse().map_err(|_| {
        SessionError::InvalidArguments(format!(
            "'{}' is not an integer ({})",
            index, SELECT_ROOM_USAGE,
        ))
    })?;
    Ok(Command::SelectRoom { index })
}

fn parse_add_furniture(
    kind: Option<&str>,
    x: Option<&str>,
    y: Option<&str>,
) -> Result<Command, SessionError> {
    let (Some(kind), Some(x), Some(y)) = (kind, x, y) else {
        return Err(SessionError::InvalidArguments(ADD_FURNITURE_USAGE.into()));
    };
    Ok(Command::AddFurniture {
        kind: kind.to_string(),
        x: parse_int(x, ADD_FURNITURE_USAGE)?,
        y: parse_int(y, ADD_FURNITURE_USAGE)?,
    })
}

fn parse_int(token: &str, usage: &str) -> Result<i32, SessionError> {
    token.parse().map_err(|_| {
        SessionError::InvalidArguments(format!("'{}' is not an integer ({})", token, usage))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_room() {
        assert_eq!(
            parse_command("add-room Study 10 8"),
            Some(Ok(Command::AddRoom {
                name: "Study".into(),
                width: 10,
                height: 8,
            }))
        );
    }

    #[test]
    fn parse_list_rooms() {
        assert_eq!(parse_command("list-rooms"), Some(Ok(Command::ListRooms)));
    }

    #[test]
    fn parse_select_room() {
        assert_eq!(
            parse_command("select-room 2"),
            Some(Ok(Command::SelectRoom { index: 2 }))
        );
    }

    #[test]
    fn parse_select_room_negative_index() {
        // Negative indices parse fine; the registry rejects them later.
        assert_eq!(
            parse_command("select-room -1"),
            Some(Ok(Command::SelectRoom { index: -1 }))
        );
    }

    #[test]
    fn parse_add_furniture() {
        assert_eq!(
            parse_command("add-furniture sofa 5 5"),
            Some(Ok(Command::AddFurniture {
                kind: "sofa".into(),
                x: 5,
                y: 5,
            }))
        );
    }

    #[test]
    fn parse_visualize() {
        assert_eq!(parse_command("visualize"), Some(Ok(Command::Visualize)));
    }

    #[test]
    fn parse_help_bare() {
        assert_eq!(
            parse_command("help"),
            Some(Ok(Command::Help { topic: None }))
        );
    }

    #[test]
    fn parse_help_topic() {
        assert_eq!(
            parse_command("help add-room"),
            Some(Ok(Command::Help {
                topic: Some("add-room".into()),
            }))
        );
    }

    #[test]
    fn parse_exit() {
        assert_eq!(parse_command("exit"), Some(Ok(Command::Exit)));
    }

    #[test]
    fn blank_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn comment_only_returns_none() {
        assert_eq!(parse_command("# a comment"), None);
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_command("fly-to-moon"),
            Some(Err(SessionError::UnknownCommand("fly-to-moon".into())))
        );
    }

    #[test]
    fn add_room_missing_args() {
        assert!(matches!(
            parse_command("add-room Study 10"),
            Some(Err(SessionError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn add_room_unparseable_dimension() {
        assert!(matches!(
            parse_command("add-room Study ten 8"),
            Some(Err(SessionError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn select_room_missing_index() {
        assert!(matches!(
            parse_command("select-room"),
            Some(Err(SessionError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn add_furniture_unparseable_coordinate() {
        assert!(matches!(
            parse_command("add-furniture sofa five 5"),
            Some(Err(SessionError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn extra_tokens_ignored() {
        assert_eq!(
            parse_command("add-room Study 10 8 ignored"),
            Some(Ok(Command::AddRoom {
                name: "Study".into(),
                width: 10,
                height: 8,
            }))
        );
        assert_eq!(
            parse_command("list-rooms now please"),
            Some(Ok(Command::ListRooms))
        );
    }

    #[test]
    fn leading_whitespace_accepted() {
        assert_eq!(parse_command("   exit"), Some(Ok(Command::Exit)));
    }
}
