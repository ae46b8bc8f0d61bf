use crate::room::Room;

/// Furniture kind → grid symbol. Lookup is case-insensitive; kinds not
/// listed here render as `?`.
pub const SYMBOLS: &[(&str, char)] = &[
    ("sofa", 'S'),
    ("table", 'T'),
    ("chair", 'C'),
    ("bed", 'B'),
    ("desk", 'D'),
    ("shelf", 'H'),
    ("plant", 'P'),
    ("lamp", 'L'),
];

/// Grid symbol for a furniture kind.
pub fn furniture_symbol(kind: &str) -> char {
    SYMBOLS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(kind))
        .map(|&(_, symbol)| symbol)
        .unwrap_or('?')
}

/// Render a room as a bordered ASCII grid.
///
/// Interior cells run over `0..width` × `0..height`; the first furniture
/// item at a cell (insertion order) provides its symbol. Furniture placed
/// on the inclusive boundary (`x == width` or `y == height`) is legal but
/// falls outside the rendered interior.
pub fn render(room: &Room) -> String {
    let width = room.width as usize;
    let border = format!("+{}+", "-".repeat(width));

    let mut out = String::with_capacity((width + 3) * (room.height as usize + 2));
    out.push_str(&border);
    out.push('\n');
    for y in 0..room.height {
        out.push('|');
        for x in 0..room.width {
            let cell = room
                .furniture
                .iter()
                .find(|f| f.x == x && f.y == y)
                .map(|f| furniture_symbol(&f.kind));
            out.push(cell.unwrap_or(' '));
        }
        out.push('|');
        out.push('\n');
    }
    out.push_str(&border);
    out
}
