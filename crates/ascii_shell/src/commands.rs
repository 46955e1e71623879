//! Line-command grammar for the interactive shell.
//!
//! Parsing is pure: a line either maps to a [`Command`] or to a
//! [`ParseError`] carrying the diagnostic to print. Invalid input never
//! reaches the matcher.

/// First and last addressable characters (printable ASCII).
pub const FIRST_CHAR: char = ' ';
pub const LAST_CHAR: char = '~';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListChars,
    Add(CharSelection),
    Remove(CharSelection),
    ResUp,
    ResDown,
    Render,
    Console,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSelection {
    Single(char),
    All,
    Space,
    /// Inclusive range, applied in the written direction.
    Range(char, char),
}

impl CharSelection {
    /// Characters selected, in application order.
    pub fn chars(self) -> Vec<char> {
        match self {
            CharSelection::Single(ch) => vec![ch],
            CharSelection::Space => vec![' '],
            CharSelection::All => (FIRST_CHAR..=LAST_CHAR).collect(),
            CharSelection::Range(from, to) => {
                if from <= to {
                    (from..=to).collect()
                } else {
                    (to..=from).rev().collect()
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    AddFormat,
    RemoveFormat,
    Command,
}

impl ParseError {
    pub fn message(self) -> &'static str {
        match self {
            ParseError::AddFormat => "Did not add due to incorrect format",
            ParseError::RemoveFormat => "Did not remove due to incorrect format",
            ParseError::Command => "Did not change due to incorrect command",
        }
    }
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    match trimmed {
        "chars" => return Ok(Command::ListChars),
        "render" => return Ok(Command::Render),
        "console" => return Ok(Command::Console),
        "exit" => return Ok(Command::Exit),
        _ => {}
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    match words.as_slice() {
        ["add", ..] => selection(&words[1..]).map(Command::Add).ok_or(ParseError::AddFormat),
        ["remove", ..] => {
            selection(&words[1..]).map(Command::Remove).ok_or(ParseError::RemoveFormat)
        }
        ["res", "up"] => Ok(Command::ResUp),
        ["res", "down"] => Ok(Command::ResDown),
        _ => Err(ParseError::Command),
    }
}

fn selection(args: &[&str]) -> Option<CharSelection> {
    let [arg] = args else { return None };
    if *arg == "all" {
        return Some(CharSelection::All);
    }
    if *arg == "space" {
        return Some(CharSelection::Space);
    }
    let chars: Vec<char> = arg.chars().collect();
    match chars.as_slice() {
        [single] => Some(CharSelection::Single(*single)),
        [from, '-', to] if printable(*from) && printable(*to) => {
            Some(CharSelection::Range(*from, *to))
        }
        _ => None,
    }
}

fn printable(ch: char) -> bool {
    (FIRST_CHAR..=LAST_CHAR).contains(&ch)
}
