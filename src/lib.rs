//! Falling-block puzzle engine.
//!
//! [`game::Game`] is a command-driven state machine with no rendering or
//! timing of its own. Front ends feed it [`game::Command`]s (player input and
//! periodic gravity ticks) and draw the [`game::Snapshot`] it hands back.
//!
//! ```
//! use blockfall::game::{Command, Direction, Game};
//!
//! let mut game = Game::with_seed(7);
//! game.apply(Command::Move(Direction::Left));
//! game.apply(Command::Rotate);
//! game.apply(Command::Tick);
//!
//! let snapshot = game.snapshot();
//! assert!(!snapshot.over);
//! assert_eq!(snapshot.score, 0);
//! ```

pub mod constants;
pub mod game;
