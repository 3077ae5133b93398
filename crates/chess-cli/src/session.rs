//! The interactive game loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chess_core::{Color, Move, PieceKind, Square};
use chess_engine::{Game, GameError};
use thiserror::Error;
use tracing::{info, warn};

use crate::command::{Command, CommandError, HELP};
use crate::config::Config;
use crate::render::render;
use crate::storage::{SaveStore, StorageError};

const CHECK_BANNER: &str = "   *****************\n   ****  CHECK  ****\n   *****************";

/// Errors from saving or loading during a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// A game played over a line-based input and a text output.
pub struct Session<R, W> {
    game: Game,
    store: SaveStore,
    save_name: String,
    ascii: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session for `game` using the save directory and display
    /// settings from `config`.
    pub fn new(game: Game, config: &Config, input: R, output: W) -> Self {
        Session {
            game,
            store: SaveStore::new(config.save_dir.clone()),
            save_name: config.default_save_name.clone(),
            ascii: config.ascii,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the output written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays until the game ends, the player quits or input runs out.
    ///
    /// Only I/O failures on the session's own streams are errors; bad
    /// commands, illegal moves and failed saves are reported to the player.
    pub fn run(&mut self) -> io::Result<()> {
        self.show_board()?;
        while !self.game.is_game_over() {
            let prompt = format!("\n[{}] ~~> ", self.game.current_player());
            let Some(line) = read_line(&mut self.input, &mut self.output, &prompt)? else {
                return Ok(());
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    writeln!(self.output, "Unknown or illegal command ({e}). Type 'help' for help.")?;
                    continue;
                }
            };

            match command {
                Command::Quit => return Ok(()),
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::Display => self.show_board()?,
                Command::Resign => {
                    if let Err(e) = self.game.resign() {
                        writeln!(self.output, "{e}")?;
                    }
                }
                Command::Save(name) => match self.save_game(name) {
                    Ok(path) => writeln!(self.output, "Game saved to {}", path.display())?,
                    Err(e) => writeln!(self.output, "Save error: {e}")?,
                },
                Command::Load(name) => match self.load_game(name) {
                    Ok(()) => self.show_board()?,
                    Err(e) => writeln!(self.output, "Load error: {e}")?,
                },
                Command::Move(m) => self.play(m)?,
            }
        }

        if let Some(result) = self.game.result() {
            writeln!(self.output, "{result}")?;
        }
        Ok(())
    }

    /// Saves the game under `name`, or under the current save name.
    /// A successful save makes `name` the current save name.
    pub fn save_game(&mut self, name: Option<String>) -> Result<PathBuf, SessionError> {
        let name = name.unwrap_or_else(|| self.save_name.clone());
        let state = self.game.save_state()?;
        let path = self.store.save(&name, &state)?;
        self.save_name = name;
        Ok(path)
    }

    /// Replaces the game with the one saved under `name`, or under the
    /// current save name. On error the game is unchanged.
    pub fn load_game(&mut self, name: Option<String>) -> Result<(), SessionError> {
        let name = name.unwrap_or_else(|| self.save_name.clone());
        let state = self.store.load(&name)?;
        self.game.load_state(&state)?;
        info!(%name, "saved game loaded");
        self.save_name = name;
        Ok(())
    }

    fn play(&mut self, m: Move) -> io::Result<()> {
        let Session {
            game,
            input,
            output,
            ..
        } = self;
        let result = game.make_move_with(m, |square, color| ask_promotion(input, output, square, color));

        match result {
            Ok(outcome) => {
                if outcome.gives_check {
                    writeln!(self.output, "{CHECK_BANNER}")?;
                }
                self.show_board()
            }
            Err(GameError::Move(e)) => writeln!(self.output, "\n\n{e}\n"),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render(self.game.board(), self.ascii))
    }
}

/// Prints `prompt` and reads one line. `None` means end of input.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Asks which piece a pawn becomes. An empty answer, an unknown name or an
/// I/O failure all leave the choice to the engine's default.
fn ask_promotion<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    square: Square,
    color: Color,
) -> Option<PieceKind> {
    let prompt = format!("Promote the {color} pawn on {square} to? [queen, rook, bishop, knight] (queen) >> ");
    match read_line(input, output, &prompt) {
        Ok(Some(answer)) => {
            let answer = answer.trim();
            let kind = PieceKind::from_name(answer).filter(|k| k.is_promotion_target());
            if kind.is_none() && !answer.is_empty() {
                warn!(%answer, "unknown promotion choice");
            }
            kind
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "could not read promotion choice");
            None
        }
    }
}
