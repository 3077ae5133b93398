//! Parsing of the commands typed at the prompt.

use chess_core::{Move, Square};
use thiserror::Error;

use crate::storage::is_valid_save_name;

/// Errors that can occur when parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("expected two squares, got '{0}'")]
    InvalidMove(String),
    #[error("illegal filename '{0}': it can contain only letters, numbers and underscore")]
    InvalidName(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// A command typed by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the program.
    Quit,
    /// Give up; the opponent wins.
    Resign,
    /// Save the game, optionally under a new name.
    Save(Option<String>),
    /// Load a saved game, optionally by name.
    Load(Option<String>),
    /// Show the board again.
    Display,
    /// Show the command list.
    Help,
    /// Move a piece.
    Move(Move),
}

const KEYWORDS: [&str; 8] = [
    "quit", "resign", "save", "load", "display", "board", "help", "move",
];

impl Command {
    /// Parse a command line. Keywords and squares are case-insensitive;
    /// save names keep their case. A line that does not start with a
    /// keyword is read as a move.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Err(CommandError::Empty);
        };
        let keyword = first.to_lowercase();
        if !KEYWORDS.contains(&keyword.as_str()) {
            return Self::parse_move(&parts);
        }

        let args = &parts[1..];
        match keyword.as_str() {
            "quit" => Self::no_args(Command::Quit, args),
            "resign" => Self::no_args(Command::Resign, args),
            "display" | "board" => Self::no_args(Command::Display, args),
            "help" => Self::no_args(Command::Help, args),
            "save" => Self::parse_name(args).map(Command::Save),
            "load" => Self::parse_name(args).map(Command::Load),
            _ => Self::parse_move(args),
        }
    }

    fn no_args(command: Command, args: &[&str]) -> Result<Self, CommandError> {
        match args.first() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }

    fn parse_name(args: &[&str]) -> Result<Option<String>, CommandError> {
        match args {
            [] => Ok(None),
            [name] if is_valid_save_name(name) => Ok(Some(name.to_string())),
            [name] => Err(CommandError::InvalidName(name.to_string())),
            [_, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
        }
    }

    fn parse_move(args: &[&str]) -> Result<Self, CommandError> {
        let squares: Vec<Option<Square>> = args
            .iter()
            .map(|s| Square::from_algebraic(&s.to_lowercase()))
            .collect();
        match squares.as_slice() {
            [Some(from), Some(to)] => Ok(Command::Move(Move::new(*from, *to))),
            _ => Err(CommandError::InvalidMove(args.join(" "))),
        }
    }
}

/// Text shown for the `help` command.
pub const HELP: &str = "
    Commands:
      quit                        Quit game
      resign                      Resign from the game
      save [name]                 Save game
      load [name]                 Load game
      display | board             Display board
      move <from> <to>            Move piece eg. \"move a2 a4\"
      <from> <to>                 Move piece eg. \"a2 a4\"

      Castling: move two tiles with king eg. \"move e1 g1\" or \"e1 c1\"
";

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: &str, to: &str) -> Command {
        Command::Move(Move::new(
            Square::from_algebraic(from).unwrap(),
            Square::from_algebraic(to).unwrap(),
        ))
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("resign"), Ok(Command::Resign));
        assert_eq!(Command::parse("display"), Ok(Command::Display));
        assert_eq!(Command::parse("board"), Ok(Command::Display));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("save"), Ok(Command::Save(None)));
        assert_eq!(Command::parse("load"), Ok(Command::Load(None)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("  QUIT "), Ok(Command::Quit));
        assert_eq!(Command::parse("Move E2 E4"), Ok(mv("e2", "e4")));
        assert_eq!(Command::parse("B1 c3"), Ok(mv("b1", "c3")));
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(Command::parse("a2 a4"), Ok(mv("a2", "a4")));
        assert_eq!(Command::parse("move a2 a4"), Ok(mv("a2", "a4")));
        assert_eq!(Command::parse("e1 g1"), Ok(mv("e1", "g1")));
    }

    #[test]
    fn test_parse_invalid_moves() {
        for input in [
            "move aa",
            "move a2 a9",
            "move a2 r1",
            "move 11",
            "move",
            "move 11 22",
            "11 22",
            "a3 r3",
            "sdlfj sjdb ldsfb",
            "a2 a4 a5",
        ] {
            assert!(
                matches!(Command::parse(input), Err(CommandError::InvalidMove(_))),
                "{input}"
            );
        }
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
    }

    #[test]
    fn test_parse_save_names() {
        assert_eq!(
            Command::parse("save my_game1"),
            Ok(Command::Save(Some("my_game1".to_string())))
        );
        assert_eq!(
            Command::parse("LOAD Backup"),
            Ok(Command::Load(Some("Backup".to_string())))
        );
        assert_eq!(
            Command::parse("Save MyGame"),
            Ok(Command::Save(Some("MyGame".to_string())))
        );
        assert!(matches!(
            Command::parse("save ../etc"),
            Err(CommandError::InvalidName(_))
        ));
        assert!(matches!(
            Command::parse("save a b"),
            Err(CommandError::UnexpectedArgument(_))
        ));
    }

    #[test]
    fn test_parse_extra_arguments() {
        assert_eq!(
            Command::parse("quit now"),
            Err(CommandError::UnexpectedArgument("now".to_string()))
        );
    }
}
