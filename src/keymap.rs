use crate::calculator::Operation;
use crate::reducer::{Action, Digit};

/// Keyboard input the calculator window reacts to, independent of GDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Escape,
}

pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Enter => Some(Action::Evaluate),
        Key::Backspace => Some(Action::DeleteDigit),
        Key::Delete | Key::Escape => Some(Action::Clear),
        Key::Char(c) => action_for_char(c),
    }
}

pub fn button_action(label: &str) -> Option<Action> {
    match label {
        "AC" => Some(Action::Clear),
        "DEL" => Some(Action::DeleteDigit),
        _ => {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => action_for_char(c),
                _ => None,
            }
        }
    }
}

fn action_for_char(c: char) -> Option<Action> {
    let op = match c {
        '+' => Operation::Add,
        '-' => Operation::Subtract,
        '*' | 'x' | 'X' | '×' => Operation::Multiply,
        '/' | '÷' => Operation::Divide,
        '=' => return Some(Action::Evaluate),
        ',' => return Some(Action::AddDigit(Digit::POINT)),
        _ => return Digit::new(c).map(Action::AddDigit),
    };
    Some(Action::ChooseOperation(op))
}
