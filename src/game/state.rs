use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::POINTS_PER_LINE;
use crate::game::board::Board;
use crate::game::command::{Command, CommandOutcome, Direction};
use crate::game::piece::Piece;
use crate::game::shapes::PieceKind;
use crate::game::snapshot::{ActivePiece, Snapshot};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Playing,
    /// Terminal until restart. Moves, rotations and ticks are ignored.
    Over,
}

/// One game: the board, the falling piece, score and play state.
///
/// Every command runs to completion before returning and either commits its
/// whole effect or changes nothing.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_piece: Piece,
    score: u32,
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// Starts a game with an entropy-seeded spawn sequence.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Starts a game whose spawn sequence is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            current_piece: Piece::new(PieceKind::I),
            score: 0,
            state: GameState::Playing,
            rng,
        };
        game.start_game();
        game
    }

    /// A playing game resumed from an explicit position. Nothing is spawned
    /// and `piece` is taken as-is.
    pub fn from_parts(board: Board, piece: Piece, seed: u64) -> Self {
        Self {
            board,
            current_piece: piece,
            score: 0,
            state: GameState::Playing,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Start => self.start_game(),
            Command::Restart => self.restart_game(),
            Command::Move(direction) => self.move_piece(direction),
            Command::Rotate => self.rotate_piece(),
            Command::Tick => self.tick(),
        }
    }

    /// Parses and applies a textual command. Unknown tokens change nothing.
    pub fn apply_token(&mut self, token: &str) -> CommandOutcome {
        match Command::from_token(token) {
            Some(command) => self.apply(command),
            None => {
                debug!("ignoring unknown command {:?}", token);
                CommandOutcome::Ignored
            }
        }
    }

    pub fn start_game(&mut self) -> CommandOutcome {
        self.board = Board::new();
        self.score = 0;
        self.state = GameState::Playing;
        info!("game started");
        self.spawn_piece();
        CommandOutcome::Restarted
    }

    pub fn restart_game(&mut self) -> CommandOutcome {
        self.start_game()
    }

    pub fn move_piece(&mut self, direction: Direction) -> CommandOutcome {
        if self.state == GameState::Over {
            return CommandOutcome::Ignored;
        }

        let (d_row, d_col) = direction.offset();
        let candidate = self.current_piece.moved(d_row, d_col);
        if self.board.fits(&candidate) {
            self.current_piece = candidate;
            return CommandOutcome::Moved;
        }

        match direction {
            Direction::Down => self.lock_and_advance(),
            Direction::Left | Direction::Right => CommandOutcome::Rejected,
        }
    }

    /// Rotates clockwise in place. Blocked rotations are dropped, never nudged.
    pub fn rotate_piece(&mut self) -> CommandOutcome {
        if self.state == GameState::Over {
            return CommandOutcome::Ignored;
        }

        let candidate = self.current_piece.rotated();
        if self.board.fits(&candidate) {
            self.current_piece = candidate;
            CommandOutcome::Rotated
        } else {
            CommandOutcome::Rejected
        }
    }

    pub fn tick(&mut self) -> CommandOutcome {
        self.move_piece(Direction::Down)
    }

    fn lock_and_advance(&mut self) -> CommandOutcome {
        self.board.lock(&self.current_piece);
        let lines_cleared = self.board.clear_lines();
        self.score = self
            .score
            .saturating_add(lines_cleared * POINTS_PER_LINE);
        debug!(
            "locked {} at ({}, {}), cleared {} line(s), score {}",
            self.current_piece.kind.as_str(),
            self.current_piece.row,
            self.current_piece.col,
            lines_cleared,
            self.score
        );

        if self.spawn_piece() {
            CommandOutcome::Locked { lines_cleared }
        } else {
            CommandOutcome::GameOver { lines_cleared }
        }
    }

    /// Replaces the active piece with a random kind at the spawn coordinate.
    /// Returns false, and ends the game, when it has no room.
    fn spawn_piece(&mut self) -> bool {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        self.current_piece = Piece::new(kind);
        debug!("spawned {}", kind.as_str());

        if !self.board.fits(&self.current_piece) {
            self.state = GameState::Over;
            info!("game over with score {}", self.score);
            return false;
        }
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current_piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Over
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.ids(),
            active: ActivePiece::from(&self.current_piece),
            score: self.score,
            over: self.is_over(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
