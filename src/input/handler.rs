use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use blockfall::game::{Command, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(Command),
    Quit,
}

/// Translates one key event into a front-end action. Releases and unbound
/// keys yield `None`.
pub fn handle_input(event: KeyEvent) -> Option<InputAction> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let command = match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            return Some(InputAction::Quit);
        }
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Up | KeyCode::Char(' ') => Command::Rotate,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        _ => return None,
    };
    Some(InputAction::Command(command))
}
