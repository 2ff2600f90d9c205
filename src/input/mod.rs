use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::traits::PlayerId;
use crate::games::paperio::Direction;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Point a player in a new direction
    Steer(PlayerId, Direction),
    /// Close the board
    Quit,
}

/// Blue steers with the arrow keys, Red with WASD.
///
/// Unmapped keys and key releases return `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Up => Command::Steer(PlayerId::One, Direction::Up),
        KeyCode::Down => Command::Steer(PlayerId::One, Direction::Down),
        KeyCode::Left => Command::Steer(PlayerId::One, Direction::Left),
        KeyCode::Right => Command::Steer(PlayerId::One, Direction::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Command::Steer(PlayerId::Two, Direction::Up),
            's' => Command::Steer(PlayerId::Two, Direction::Down),
            'a' => Command::Steer(PlayerId::Two, Direction::Left),
            'd' => Command::Steer(PlayerId::Two, Direction::Right),
            'q' => Command::Quit,
            _ => return None,
        },
        KeyCode::Esc => Command::Quit,
        _ => return None,
    };

    Some(command)
}

pub fn map_event(event: Event) -> Option<Command> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}
