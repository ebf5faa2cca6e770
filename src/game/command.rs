//! Discrete commands accepted by a [`Game`](crate::game::Game).
//!
//! Input and timer collaborators never touch game state directly: they build a
//! [`Command`] and hand it to [`Game::apply`](crate::game::Game::apply).
//! Textual tokens are matched case-insensitively; anything unrecognized parses
//! to `None` and is dropped by the caller.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(d_row, d_col)` for one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
    Move(Direction),
    Rotate,
    /// Gravity step issued by the external clock. Same rules as `Move(Down)`.
    Tick,
}

impl Command {
    /// Parses `"left"`, `"right"`, `"down"`, `"rotate"`, `"tick"`, `"start"`
    /// and `"restart"`.
    pub fn from_token(token: &str) -> Option<Self> {
        if let Some(direction) = Direction::from_token(token) {
            return Some(Command::Move(direction));
        }
        match token.trim().to_lowercase().as_str() {
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            "start" => Some(Command::Start),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }
}

/// What a command did. Purely informational: rejected moves are normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The session is over, or the command was not understood.
    Ignored,
    /// The candidate position or rotation was blocked.
    Rejected,
    Moved,
    Rotated,
    /// The piece landed; a fresh piece has been spawned.
    Locked { lines_cleared: u32 },
    /// The piece landed and the next one had no room.
    GameOver { lines_cleared: u32 },
    Restarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_tokens() {
        assert_eq!(Direction::from_token("left"), Some(Direction::Left));
        assert_eq!(Direction::from_token(" RIGHT "), Some(Direction::Right));
        assert_eq!(Direction::from_token("Down"), Some(Direction::Down));
        assert_eq!(Direction::from_token("up"), None);
        assert_eq!(Direction::from_token(""), None);
    }

    #[test]
    fn direction_tokens_roundtrip_through_as_str() {
        for direction in [Direction::Left, Direction::Right, Direction::Down] {
            assert_eq!(Direction::from_token(direction.as_str()), Some(direction));
        }
    }

    #[test]
    fn command_tokens() {
        assert_eq!(Command::from_token("down"), Some(Command::Move(Direction::Down)));
        assert_eq!(Command::from_token("rotate"), Some(Command::Rotate));
        assert_eq!(Command::from_token("tick"), Some(Command::Tick));
        assert_eq!(Command::from_token("Start"), Some(Command::Start));
        assert_eq!(Command::from_token("restart"), Some(Command::Restart));
        assert_eq!(Command::from_token("hardDrop"), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(Direction::Left.offset(), (0, -1));
        assert_eq!(Direction::Right.offset(), (0, 1));
        assert_eq!(Direction::Down.offset(), (1, 0));
    }
}
