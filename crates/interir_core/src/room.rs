/// A named rectangular area with fixed interior dimensions and an owned
/// list of furniture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Insertion index into the room registry. Never reused or renumbered.
    pub id: usize,
    pub name: String,
    pub width: i32,
    pub height: i32,
    /// Furniture in insertion order. Grows by append only.
    pub furniture: Vec<Furniture>,
}

/// A typed, positioned item belonging to exactly one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Furniture {
    /// Insertion index within the owning room's furniture list.
    pub id: usize,
    pub kind: String,
    pub x: i32,
    pub y: i32,
}
