use console::Key;
use tetris_duel::{BoardId, Command, GameMode};

/// What a key press asks for
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyAction {
    Board(BoardId, Command),
    Quit,
}

/// Translate a key press into an action for the given mode
///
/// Single mode plays the left board with the arrows and space. A duel splits
/// the keyboard: A/D/S/W/Tab drive the left board, arrows and Enter the right.
pub fn map_key(mode: GameMode, key: &Key) -> Option<KeyAction> {
    if matches!(key, Key::Escape | Key::Char('q') | Key::Char('Q')) {
        return Some(KeyAction::Quit);
    }
    let (board, command) = match mode {
        GameMode::Single => match key {
            Key::ArrowLeft => (BoardId::Left, Command::MoveLeft),
            Key::ArrowRight => (BoardId::Left, Command::MoveRight),
            Key::ArrowDown => (BoardId::Left, Command::SoftDrop),
            Key::ArrowUp => (BoardId::Left, Command::Rotate),
            Key::Char(' ') => (BoardId::Left, Command::HardDrop),
            _ => return None,
        },
        GameMode::Duel => match key {
            Key::Char('a') | Key::Char('A') => (BoardId::Left, Command::MoveLeft),
            Key::Char('d') | Key::Char('D') => (BoardId::Left, Command::MoveRight),
            Key::Char('s') | Key::Char('S') => (BoardId::Left, Command::SoftDrop),
            Key::Char('w') | Key::Char('W') => (BoardId::Left, Command::Rotate),
            Key::Tab => (BoardId::Left, Command::HardDrop),
            Key::ArrowLeft => (BoardId::Right, Command::MoveLeft),
            Key::ArrowRight => (BoardId::Right, Command::MoveRight),
            Key::ArrowDown => (BoardId::Right, Command::SoftDrop),
            Key::ArrowUp => (BoardId::Right, Command::Rotate),
            Key::Enter => (BoardId::Right, Command::HardDrop),
            _ => return None,
        },
    };
    Some(KeyAction::Board(board, command))
}

/// Help lines shown under the first panel
pub fn help_lines(mode: GameMode) -> Vec<String> {
    match mode {
        GameMode::Single => vec![
            "<- -> move".to_string(),
            "Up rotate".to_string(),
            "Down soft drop".to_string(),
            "Space hard drop".to_string(),
            "q quit".to_string(),
        ],
        GameMode::Duel => vec![
            "Left: A D S W Tab".to_string(),
            "Right: arrows Enter".to_string(),
            "q quit".to_string(),
        ],
    }
}
