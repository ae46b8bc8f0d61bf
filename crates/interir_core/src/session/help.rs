use super::Session;
use crate::error::SessionError;

struct CommandInfo {
    name: &'static str,
    syntax: &'static str,
    description: &'static str,
    detail: &'static str,
    examples: &'static [&'static str],
    category: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    // Rooms
    CommandInfo {
        name: "add-room",
        syntax: "add-room <name> <width> <height>",
        description: "Add a new room",
        detail: "Append a room with the given interior dimensions.\n  The name is a single word on the command line; the new room's\n  index is printed and is what select-room takes.",
        examples: &["add-room Study 10 8"],
        category: "Rooms",
    },
    CommandInfo {
        name: "list-rooms",
        syntax: "list-rooms",
        description: "List all rooms with their indices",
        detail: "Show every room as '<index>: <name> (<width>x<height>)'.",
        examples: &["list-rooms"],
        category: "Rooms",
    },
    CommandInfo {
        name: "select-room",
        syntax: "select-room <index>",
        description: "Choose the room to work in",
        detail: "Make the room at <index> current. Furniture and visualization\n  commands operate on the current room.",
        examples: &["select-room 0"],
        category: "Rooms",
    },
    // Furniture
    CommandInfo {
        name: "add-furniture",
        syntax: "add-furniture <kind> <x> <y>",
        description: "Place furniture in the current room",
        detail: "Append a furniture item at (x, y) in the current room.\n  Coordinates may lie anywhere from 0 to the room's width/height\n  inclusive.",
        examples: &["add-furniture sofa 5 5", "add-furniture lamp 0 0"],
        category: "Furniture",
    },
    CommandInfo {
        name: "list-furniture",
        syntax: "list-furniture",
        description: "List furniture in the current room",
        detail: "Show every item in the current room as\n  '<index>: <kind> at (<x>, <y>)'.",
        examples: &["list-furniture"],
        category: "Furniture",
    },
    // Visualization
    CommandInfo {
        name: "visualize",
        syntax: "visualize",
        description: "Draw the current room as an ASCII grid",
        detail: "Render the current room: a border around one character per\n  interior cell, furniture shown by its symbol (sofa S, table T,\n  chair C, bed B, desk D, shelf H, plant P, lamp L, anything\n  else ?).",
        examples: &["visualize"],
        category: "Visualization",
    },
    // Session
    CommandInfo {
        name: "help",
        syntax: "help [<command>]",
        description: "Show this help",
        detail: "Show a summary of all commands, or detailed help for a specific\n  command.",
        examples: &["help", "help add-room"],
        category: "Session",
    },
    CommandInfo {
        name: "exit",
        syntax: "exit",
        description: "End the session",
        detail: "Stop reading further commands.",
        examples: &["exit"],
        category: "Session",
    },
];

/// Category display order.
const CATEGORIES: &[&str] = &["Rooms", "Furniture", "Visualization", "Session"];

impl Session {
    pub(super) fn cmd_help(&mut self, topic: Option<&str>) -> Result<(), SessionError> {
        match topic {
            None => self.help_overview(),
            Some(name) => self.help_command(name),
        }
    }

    fn help_overview(&mut self) -> Result<(), SessionError> {
        // Find the longest syntax string for alignment
        let max_syntax = COMMANDS.iter().map(|c| c.syntax.len()).max().unwrap_or(0);

        for (i, &cat) in CATEGORIES.iter().enumerate() {
            if i > 0 {
                self.output.push(String::new());
            }
            self.output.push(format!("{}:", cat));
            for cmd in COMMANDS.iter().filter(|c| c.category == cat) {
                self.output.push(format!(
                    "  {:<width$}  {}",
                    cmd.syntax,
                    cmd.description,
                    width = max_syntax,
                ));
            }
        }
        Ok(())
    }

    fn help_command(&mut self, name: &str) -> Result<(), SessionError> {
        let cmd = COMMANDS.iter().find(|c| c.name == name);
        match cmd {
            Some(info) => {
                self.output.push(info.syntax.to_string());
                self.output.push(String::new());
                for line in info.detail.split('\n') {
                    self.output.push(format!("  {}", line.trim_start()));
                }
                if !info.examples.is_empty() {
                    self.output.push(String::new());
                    self.output.push("  Examples:".to_string());
                    for ex in info.examples {
                        self.output.push(format!("    {}", ex));
                    }
                }
                Ok(())
            }
            None => Err(SessionError::UnknownCommand(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{parse_command, Command};

    #[test]
    fn overview_mentions_every_command() {
        let mut session = Session::new();
        session.cmd_help(None).unwrap();
        let output = session.take_output().join("\n");
        for cmd in COMMANDS {
            assert!(output.contains(cmd.syntax), "missing: {}", cmd.syntax);
        }
    }

    #[test]
    fn every_help_entry_parses_as_a_command() {
        // The table and the parser must not drift apart.
        for cmd in COMMANDS {
            for example in cmd.examples {
                assert!(
                    matches!(parse_command(example), Some(Ok(_))),
                    "help example does not parse: {}",
                    example,
                );
            }
        }
    }

    #[test]
    fn help_topic_shows_detail_and_examples() {
        let mut session = Session::new();
        session.cmd_help(Some("add-room")).unwrap();
        let output = session.take_output().join("\n");
        assert!(output.contains("add-room <name> <width> <height>"));
        assert!(output.contains("Examples:"));
        assert!(output.contains("add-room Study 10 8"));
    }

    #[test]
    fn help_unknown_topic_errors() {
        let mut session = Session::new();
        let err = session.cmd_help(Some("teleport")).unwrap_err();
        assert_eq!(err, SessionError::UnknownCommand("teleport".into()));
    }

    #[test]
    fn help_dispatches_through_exec() {
        let mut session = Session::new();
        assert!(matches!(
            parse_command("help visualize"),
            Some(Ok(Command::Help { .. }))
        ));
        session.exec("help visualize").unwrap();
        let output = session.take_output().join("\n");
        assert!(output.contains("ASCII grid") || output.contains("interior cell"));
    }
}
