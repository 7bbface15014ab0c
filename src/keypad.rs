//! Keypad input for the terminal front end.
//!
//! Turns a typed line of button labels into calculator commands.

use crate::calculator::Command;

/// Parse a line of keypad input into commands.
///
/// Whitespace separates words. The words `clear`, `del` and `eval` map to
/// their commands; anything else is read key by key:
/// - `=` evaluates
/// - `C` or `c` clears
/// - `<` deletes the last character
/// - every other character is appended
pub fn parse_line(line: &str) -> Vec<Command> {
    let mut commands = Vec::new();

    for word in line.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "clear" => commands.push(Command::Clear),
            "del" => commands.push(Command::DeleteLast),
            "eval" => commands.push(Command::Evaluate),
            _ => commands.extend(word.chars().map(parse_key)),
        }
    }

    commands
}

/// Map a single key to its command.
pub fn parse_key(key: char) -> Command {
    match key {
        '=' => Command::Evaluate,
        'C' | 'c' => Command::Clear,
        '<' => Command::DeleteLast,
        other => Command::Append(other),
    }
}
