use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::piece::Piece;
use crate::game::shapes::{PieceKind, Shape};

/// Numeric value of an empty cell in id grids.
pub const EMPTY_ID: u8 = 0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn id(self) -> u8 {
        match self {
            Cell::Empty => EMPTY_ID,
            Cell::Filled(kind) => kind.id(),
        }
    }
}

pub type Row = [Cell; BOARD_WIDTH];

/// Locked cells, row 0 at the top.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

fn empty_row() -> Row {
    [Cell::Empty; BOARD_WIDTH]
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [empty_row(); BOARD_HEIGHT],
        }
    }

    /// Board with the given locked cells, for scripted positions.
    pub fn from_rows(rows: [Row; BOARD_HEIGHT]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row; BOARD_HEIGHT] {
        &self.rows
    }

    /// `None` when `(row, col)` is off the board.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if !in_bounds(row, col) {
            return None;
        }
        Some(self.rows[row as usize][col as usize])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_empty())
    }

    /// Whether `shape` with its top-left corner at `(row, col)` sits entirely
    /// inside the board on empty cells.
    pub fn is_valid_placement(&self, shape: &Shape, row: i32, col: i32) -> bool {
        for (r, shape_row) in shape.iter().enumerate() {
            for (c, &filled) in shape_row.iter().enumerate() {
                if !filled {
                    continue;
                }
                match self.cell(row + r as i32, col + c as i32) {
                    Some(Cell::Empty) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    pub fn fits(&self, piece: &Piece) -> bool {
        self.is_valid_placement(&piece.shape, piece.row, piece.col)
    }

    /// Writes the piece's kind into each occupied cell it covers.
    /// Cells outside the board are skipped.
    pub fn lock(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            if in_bounds(row, col) {
                self.rows[row as usize][col as usize] = Cell::Filled(piece.kind);
            }
        }
    }

    /// Drops every full row, pads the top with empty rows and returns how many
    /// rows went away. Surviving rows keep their order.
    pub fn clear_lines(&mut self) -> u32 {
        let kept: Vec<Row> = self
            .rows
            .iter()
            .copied()
            .filter(|row| row.iter().any(|cell| cell.is_empty()))
            .collect();
        let cleared = BOARD_HEIGHT - kept.len();

        let mut rows = [empty_row(); BOARD_HEIGHT];
        rows[cleared..].copy_from_slice(&kept);
        self.rows = rows;

        cleared as u32
    }

    /// Grid of raw cell values: 0 for empty, otherwise the kind id.
    pub fn ids(&self) -> [[u8; BOARD_WIDTH]; BOARD_HEIGHT] {
        let mut ids = [[EMPTY_ID; BOARD_WIDTH]; BOARD_HEIGHT];
        for (dst, src) in ids.iter_mut().zip(self.rows.iter()) {
            for (id, cell) in dst.iter_mut().zip(src.iter()) {
                *id = cell.id();
            }
        }
        ids
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_HEIGHT as i32 && col >= 0 && col < BOARD_WIDTH as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(kind: PieceKind) -> Row {
        [Cell::Filled(kind); BOARD_WIDTH]
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.ids(), [[0; BOARD_WIDTH]; BOARD_HEIGHT]);
    }

    #[test]
    fn cell_outside_board_is_none() {
        let board = Board::new();
        assert_eq!(board.cell(-1, 0), None);
        assert_eq!(board.cell(0, -1), None);
        assert_eq!(board.cell(BOARD_HEIGHT as i32, 0), None);
        assert_eq!(board.cell(0, BOARD_WIDTH as i32), None);
        assert_eq!(board.cell(19, 9), Some(Cell::Empty));
    }

    #[test]
    fn placement_rejects_every_edge() {
        let board = Board::new();
        let shape = PieceKind::O.default_shape();
        assert!(board.is_valid_placement(&shape, 0, 0));
        assert!(board.is_valid_placement(&shape, 18, 8));
        assert!(!board.is_valid_placement(&shape, -1, 0));
        assert!(!board.is_valid_placement(&shape, 0, -1));
        assert!(!board.is_valid_placement(&shape, 19, 0));
        assert!(!board.is_valid_placement(&shape, 0, 9));
    }

    #[test]
    fn placement_rejects_collisions() {
        let mut rows = [empty_row(); BOARD_HEIGHT];
        rows[10][5] = Cell::Filled(PieceKind::Z);
        let board = Board::from_rows(rows);
        let shape = PieceKind::O.default_shape();
        assert!(!board.is_valid_placement(&shape, 9, 4));
        assert!(!board.is_valid_placement(&shape, 10, 5));
        assert!(board.is_valid_placement(&shape, 8, 4));
        assert!(board.is_valid_placement(&shape, 10, 6));
    }

    #[test]
    fn lock_writes_kind_ids() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::T);
        piece.row = 18;
        board.lock(&piece);

        let ids = board.ids();
        assert_eq!(ids[18][5], PieceKind::T.id());
        assert_eq!(ids[19][4..7], [PieceKind::T.id(); 3]);
        assert_eq!(ids[18][4], 0);
        assert_eq!(ids[18][6], 0);
    }

    #[test]
    fn lock_skips_cells_off_the_board() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::I);
        piece.col = 8;
        board.lock(&piece);

        let ids = board.ids();
        assert_eq!(ids[0][8], PieceKind::I.id());
        assert_eq!(ids[0][9], PieceKind::I.id());
        assert_eq!(ids.iter().flatten().filter(|&&id| id != 0).count(), 2);
    }

    #[test]
    fn clear_lines_removes_full_rows_and_keeps_order() {
        let mut rows = [empty_row(); BOARD_HEIGHT];
        rows[2] = full_row(PieceKind::I);
        rows[5] = full_row(PieceKind::O);
        rows[3][0] = Cell::Filled(PieceKind::S);
        rows[4][1] = Cell::Filled(PieceKind::Z);
        rows[19][9] = Cell::Filled(PieceKind::J);
        let mut board = Board::from_rows(rows);

        assert_eq!(board.clear_lines(), 2);

        let after = board.rows();
        assert_eq!(after.len(), BOARD_HEIGHT);
        assert!(after[0].iter().all(|c| c.is_empty()));
        assert!(after[1].iter().all(|c| c.is_empty()));
        // rows 3 and 4 only had the row 5 clear below them
        assert_eq!(after[4][0], Cell::Filled(PieceKind::S));
        assert_eq!(after[5][1], Cell::Filled(PieceKind::Z));
        assert_eq!(after[19][9], Cell::Filled(PieceKind::J));
    }

    #[test]
    fn clear_lines_without_full_rows_is_a_no_op() {
        let mut rows = [empty_row(); BOARD_HEIGHT];
        rows[19] = full_row(PieceKind::L);
        rows[19][3] = Cell::Empty;
        let mut board = Board::from_rows(rows);
        let before = board.clone();

        assert_eq!(board.clear_lines(), 0);
        assert_eq!(board, before);
    }
}
