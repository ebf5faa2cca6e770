use crate::constants::{SPAWN_COL, SPAWN_ROW};
use crate::game::shapes::{PieceKind, Shape};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.default_shape(),
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Rotates the shape a quarter turn clockwise in place.
    ///
    /// Row `c` of the result is column `c` of the old shape read bottom to top,
    /// so an `h x w` shape becomes `w x h`. No board checks happen here.
    pub fn rotate(&mut self) {
        self.shape = rotate_clockwise(&self.shape);
    }

    /// Candidate copy rotated clockwise, same position.
    pub fn rotated(&self) -> Self {
        let mut rotated = self.clone();
        rotated.rotate();
        rotated
    }

    /// Candidate copy offset by `(d_row, d_col)`.
    pub fn moved(&self, d_row: i32, d_col: i32) -> Self {
        let mut moved = self.clone();
        moved.row += d_row;
        moved.col += d_col;
        moved
    }

    /// Absolute `(row, col)` of every occupied cell.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        for (r, shape_row) in self.shape.iter().enumerate() {
            for (c, &filled) in shape_row.iter().enumerate() {
                if filled {
                    cells.push((self.row + r as i32, self.col + c as i32));
                }
            }
        }
        cells
    }
}

pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let width = shape.first().map_or(0, Vec::len);
    (0..width)
        .map(|c| shape.iter().rev().map(|row| row[c]).collect())
        .collect()
}
