use crate::command::{self, Command};
use crate::error::SessionError;
use crate::render;
use crate::room::{Furniture, Room};

mod help;

/// An interpreter session: the room registry, the current selection, and
/// the status text collected while dispatching commands.
///
/// All mutable state lives here — hosts construct one `Session`, feed it
/// lines through [`exec`](Session::exec), and drain responses with
/// [`take_output`](Session::take_output). A failed command never changes
/// state, so the caller can keep reading lines regardless of the result.
#[derive(Debug)]
pub struct Session {
    rooms: Vec<Room>,
    selected: Option<usize>,
    output: Vec<String>,
    running: bool,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Session {
            rooms: Vec::new(),
            selected: None,
            output: Vec::new(),
            running: true,
        }
    }

    /// Create a session populated with the sample layout: Living Room,
    /// Bedroom, and Kitchen, with the Living Room selected and furnished.
    pub fn with_sample_layout() -> Self {
        let mut session = Session::new();
        let seeded = session.populate_sample_layout();
        debug_assert!(seeded.is_ok(), "sample layout violates a session contract");
        session
    }

    /// Seed the demo state through the same operations the commands use,
    /// so this doubles as a working example of the public contracts.
    fn populate_sample_layout(&mut self) -> Result<(), SessionError> {
        self.add_room("Living Room", 20, 15)?;
        self.add_room("Bedroom", 15, 12)?;
        self.add_room("Kitchen", 12, 10)?;
        self.select_room(0)?;
        self.add_furniture("sofa", 5, 5)?;
        self.add_furniture("table", 10, 8)?;
        self.add_furniture("chair", 8, 8)?;
        Ok(())
    }

    /// Execute a single line of input. Status text is collected internally.
    ///
    /// Blank lines and `#` comment lines are skipped. Errors are reported
    /// to the caller and never terminate the session: after any `Err` the
    /// state is exactly what it was before the call.
    pub fn exec(&mut self, line: &str) -> Result<(), SessionError> {
        let Some(parsed) = command::parse_command(line) else {
            return Ok(()); // blank or comment-only line
        };

        match parsed? {
            Command::AddRoom {
                name,
                width,
                height,
            } => self.cmd_add_room(&name, width, height),
            Command::ListRooms => self.cmd_list_rooms(),
            Command::SelectRoom { index } => self.cmd_select_room(index),
            Command::AddFurniture { kind, x, y } => self.cmd_add_furniture(&kind, x, y),
            Command::ListFurniture => self.cmd_list_furniture(),
            Command::Visualize => self.cmd_visualize(),
            Command::Help { topic } => self.cmd_help(topic.as_deref()),
            Command::Exit => {
                self.running = false;
                Ok(())
            }
        }
    }

    /// Drain and return collected output lines.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// False once `exit` has been dispatched.
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Room registry ──────────────────────────────────────────

    /// Append a room and return it. The assigned id equals the room's
    /// index in the registry and never changes.
    pub fn add_room(&mut self, name: &str, width: i32, height: i32) -> Result<&Room, SessionError> {
        if name.is_empty() {
            return Err(SessionError::InvalidArguments(
                "room name must not be empty".into(),
            ));
        }
        if width < 1 || height < 1 {
            return Err(SessionError::InvalidArguments(format!(
                "room dimensions must be positive, got {}x{}",
                width, height,
            )));
        }
        let id = self.rooms.len();
        self.rooms.push(Room {
            id,
            name: name.to_string(),
            width,
            height,
            furniture: Vec::new(),
        });
        Ok(&self.rooms[id])
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by registry index.
    pub fn get_room(&self, index: i64) -> Result<&Room, SessionError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.rooms.get(i))
            .ok_or(SessionError::OutOfRange {
                index,
                len: self.rooms.len(),
            })
    }

    // ── Selection ──────────────────────────────────────────────

    /// Select the room at `index`. On failure the previous selection
    /// (or the absence of one) is kept.
    pub fn select_room(&mut self, index: i64) -> Result<(), SessionError> {
        let id = self.get_room(index)?.id;
        self.selected = Some(id);
        Ok(())
    }

    /// The currently selected room, if any.
    pub fn current_room(&self) -> Option<&Room> {
        self.selected.and_then(|i| self.rooms.get(i))
    }

    // ── Furniture ──────────────────────────────────────────────

    /// Append a furniture item to the selected room and return it.
    ///
    /// The bounds check is inclusive on the upper edge: `x == width` is
    /// accepted even though the visualizer's interior stops at
    /// `width - 1`. That is the observed behavior of the command
    /// protocol, so it is kept.
    pub fn add_furniture(&mut self, kind: &str, x: i32, y: i32) -> Result<&Furniture, SessionError> {
        let Some(room_index) = self.selected else {
            return Err(SessionError::NoSelection);
        };
        if kind.is_empty() {
            return Err(SessionError::InvalidArguments(
                "furniture kind must not be empty".into(),
            ));
        }
        let room = &mut self.rooms[room_index];
        if x < 0 || x > room.width || y < 0 || y > room.height {
            return Err(SessionError::OutOfBounds {
                x,
                y,
                width: room.width,
                height: room.height,
            });
        }
        let id = room.furniture.len();
        room.furniture.push(Furniture {
            id,
            kind: kind.to_string(),
            x,
            y,
        });
        Ok(&room.furniture[id])
    }

    // ── Command handlers ───────────────────────────────────────

    fn cmd_add_room(&mut self, name: &str, width: i32, height: i32) -> Result<(), SessionError> {
        let room = self.add_room(name, width, height)?;
        let line = format!(
            "added room {}: {} ({}x{})",
            room.id, room.name, room.width, room.height,
        );
        self.output.push(line);
        Ok(())
    }

    fn cmd_list_rooms(&mut self) -> Result<(), SessionError> {
        if self.rooms.is_empty() {
            self.output.push("no rooms yet".to_string());
            return Ok(());
        }
        for room in &self.rooms {
            self.output.push(format!(
                "{}: {} ({}x{})",
                room.id, room.name, room.width, room.height,
            ));
        }
        Ok(())
    }

    fn cmd_select_room(&mut self, index: i64) -> Result<(), SessionError> {
        self.select_room(index)?;
        let line = self
            .current_room()
            .map(|room| format!("selected room: {}", room.name));
        if let Some(line) = line {
            self.output.push(line);
        }
        Ok(())
    }

    fn cmd_add_furniture(&mut self, kind: &str, x: i32, y: i32) -> Result<(), SessionError> {
        let item = self.add_furniture(kind, x, y)?;
        let line = format!("added {} at ({}, {})", item.kind, item.x, item.y);
        self.output.push(line);
        Ok(())
    }

    fn cmd_list_furniture(&mut self) -> Result<(), SessionError> {
        let room = self.current_room().ok_or(SessionError::NoSelection)?;
        let mut lines = Vec::new();
        if room.furniture.is_empty() {
            lines.push("no furniture in this room".to_string());
        } else {
            lines.push(format!("furniture in {}:", room.name));
            for item in &room.furniture {
                lines.push(format!(
                    "{}: {} at ({}, {})",
                    item.id, item.kind, item.x, item.y,
                ));
            }
        }
        self.output.extend(lines);
        Ok(())
    }

    fn cmd_visualize(&mut self) -> Result<(), SessionError> {
        let room = self.current_room().ok_or(SessionError::NoSelection)?;
        let header = format!("visualization of {}:", room.name);
        let grid = render::render(room);
        self.output.push(header);
        self.output.extend(grid.lines().map(str::to_string));
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
