pub mod board;
pub mod command;
pub mod piece;
pub mod shapes;
pub mod snapshot;
pub mod state;

pub use board::{Board, Cell};
pub use command::{Command, CommandOutcome, Direction};
pub use piece::Piece;
pub use shapes::{color_for_id, ColorKey, PieceKind, Shape};
pub use snapshot::{ActivePiece, Snapshot};
pub use state::{Game, GameState};
