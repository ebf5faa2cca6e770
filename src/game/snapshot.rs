use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::board::EMPTY_ID;
use crate::game::piece::Piece;
use crate::game::shapes::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Absolute `(row, col)` of each occupied cell.
    pub cells: Vec<(i32, i32)>,
}

impl From<&Piece> for ActivePiece {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            cells: piece.cells(),
        }
    }
}

/// Owned, read-only view of a session for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Locked cells only: 0 for empty, otherwise the kind id.
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: ActivePiece,
    pub score: u32,
    pub over: bool,
}

impl Snapshot {
    /// Cell value with the active piece drawn over the locked cells.
    pub fn cell_id(&self, row: usize, col: usize) -> u8 {
        let on_active = self
            .active
            .cells
            .iter()
            .any(|&(r, c)| r == row as i32 && c == col as i32);
        if on_active {
            return self.active.kind.id();
        }
        self.board
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(EMPTY_ID)
    }
}
