//! The seven piece kinds, their default layouts and display keys.

/// Rectangular occupancy matrix, row-major, `true` = occupied.
pub type Shape = Vec<Vec<bool>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// Presentation color for a kind. Renderers decide what each key looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
    Gray,
}

const I_LAYOUT: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_LAYOUT: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_LAYOUT: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const S_LAYOUT: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_LAYOUT: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_LAYOUT: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_LAYOUT: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

impl PieceKind {
    /// All kinds in identifier order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Value written into locked board cells. Never 0, which marks an empty cell.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    pub fn color(self) -> ColorKey {
        match self {
            PieceKind::I => ColorKey::Cyan,
            PieceKind::O => ColorKey::Yellow,
            PieceKind::T => ColorKey::Purple,
            PieceKind::S => ColorKey::Green,
            PieceKind::Z => ColorKey::Red,
            PieceKind::J => ColorKey::Blue,
            PieceKind::L => ColorKey::Orange,
        }
    }

    fn layout(self) -> &'static [&'static [u8]] {
        match self {
            PieceKind::I => I_LAYOUT,
            PieceKind::O => O_LAYOUT,
            PieceKind::T => T_LAYOUT,
            PieceKind::S => S_LAYOUT,
            PieceKind::Z => Z_LAYOUT,
            PieceKind::J => J_LAYOUT,
            PieceKind::L => L_LAYOUT,
        }
    }

    /// Fresh copy of the spawn orientation.
    pub fn default_shape(self) -> Shape {
        self.layout()
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Color key for a raw cell value. Unknown values (including empty) map to gray.
pub fn color_for_id(id: u8) -> ColorKey {
    PieceKind::from_id(id).map_or(ColorKey::Gray, PieceKind::color)
}
