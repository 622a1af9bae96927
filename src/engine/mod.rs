//! The engine puts the rules and the search together behind a line-based text
//! protocol, so that any driver (a game loop, a GUI or a test harness) can play
//! against it over stdin/stdout.
//!
//! [`Engine::run`] is the "main loop" of the engine which communicates with the
//! environment and executes commands from the input stream.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use crate::engine::protocol::Command;
use crate::game::board::Board;
use crate::game::core::Action;
use crate::search;

mod protocol;
mod self_play;

pub use self_play::selfplay;

/// The Engine connects everything together and handles commands sent by the
/// driver, including I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    board: Board,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new instance of the engine with the initial board and
    /// provided I/O.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            board: Board::initial(),
            input,
            output,
        }
    }

    /// Continuously reads the input stream and executes commands until "quit"
    /// is sent or the input is closed.
    ///
    /// Malformed boards, unparsable actions and illegal moves are reported
    /// back as `info string error: ...` and leave the current board untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing the output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .context("reading from input")?
                == 0
            {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Command::Id => self.handle_id()?,
                Command::IsReady => writeln!(self.output, "readyok")?,
                Command::NewGame => self.board = Board::initial(),
                Command::SetPosition { board, moves } => {
                    self.handle_position(board.as_deref(), &moves)?;
                },
                Command::Play { action } => self.handle_play(&action)?,
                Command::Go => self.handle_go()?,
                Command::Show => self.handle_show()?,
                Command::Quit => break,
                Command::Unknown(command) => {
                    debug!(command = %command, "unsupported command");
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
            self.output.flush()?;
        }
        Ok(())
    }

    /// Identifies the engine.
    fn handle_id(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "id name {} {}",
            env!("CARGO_PKG_NAME"),
            crate::engine_version()
        )?;
        writeln!(self.output, "id author {}", env!("CARGO_PKG_AUTHORS"))?;
        writeln!(self.output, "idok")?;
        Ok(())
    }

    /// Replaces the board with the one specified in the command and plays the
    /// listed moves on top of it.
    fn handle_position(&mut self, board: Option<&str>, moves: &[String]) -> anyhow::Result<()> {
        match setup(board, moves) {
            Ok(board) => self.board = board,
            Err(e) => writeln!(self.output, "info string error: {e:#}")?,
        }
        Ok(())
    }

    fn handle_play(&mut self, action: &str) -> anyhow::Result<()> {
        match play(&self.board, action) {
            Ok(board) => self.board = board,
            Err(e) => writeln!(self.output, "info string error: {e:#}")?,
        }
        Ok(())
    }

    /// Searches the current board and reports the best action. Finished games
    /// get `bestmove none`.
    fn handle_go(&mut self) -> anyhow::Result<()> {
        match search::search(&self.board) {
            Some(result) => {
                writeln!(
                    self.output,
                    "info value {} nodes {}",
                    result.value, result.nodes
                )?;
                writeln!(self.output, "bestmove {}", result.best_action)?;
            },
            None => writeln!(self.output, "bestmove none")?,
        }
        Ok(())
    }

    fn handle_show(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{:?}", self.board)?;
        writeln!(self.output, "Status: {}", status(&self.board))?;
        Ok(())
    }
}

fn play(board: &Board, action: &str) -> anyhow::Result<Board> {
    let action = Action::try_from(action)?;
    Ok(board.result(action)?)
}

fn setup(board: Option<&str>, moves: &[String]) -> anyhow::Result<Board> {
    let mut result = match board {
        Some(notation) => Board::try_from(notation)?,
        None => Board::initial(),
    };
    for action in moves {
        result = play(&result, action).with_context(|| format!("applying move {action}"))?;
    }
    Ok(result)
}

/// Human-readable summary of the game outcome so far.
pub(crate) fn status(board: &Board) -> String {
    match board.winner() {
        Some(player) => format!("{player} wins"),
        None if board.is_terminal() => "tie".to_string(),
        None => "in progress".to_string(),
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(input: &str) -> String {
        let mut input = input.as_bytes();
        let mut output = Vec::new();
        Engine::new(&mut input, &mut output)
            .run()
            .expect("engine loop should not fail on in-memory I/O");
        String::from_utf8(output).expect("engine output is UTF-8")
    }

    #[test]
    fn handshake() {
        let output = run("id\nisready\nquit\n");
        assert!(output.starts_with("id name noughts "));
        assert!(output.contains("\nid author "));
        assert!(output.ends_with("idok\nreadyok\n"));
    }

    #[test]
    fn search_position() {
        assert_eq!(
            run("position XX./OO./...\ngo\n"),
            "info value 1 nodes 156\nbestmove 02\n"
        );
        assert_eq!(
            run("position startpos moves 00 01 10 11 20\ngo\n"),
            "bestmove none\n"
        );
    }

    #[test]
    fn play_moves() {
        assert_eq!(
            run("play 1 1\nplay 00\nshow\n"),
            "O . .\n. X .\n. . .\nPlayer to move: X\nNotation: O../.X./...\nStatus: in progress\n"
        );
        assert_eq!(
            run("position startpos moves 00 10 01 11 02\nshow\n"),
            "X X X\nO O .\n. . .\nPlayer to move: O\nNotation: XXX/OO./...\nStatus: X wins\n"
        );
    }

    #[test]
    fn errors_keep_board() {
        assert_eq!(
            run("play 11\nplay 11\nplay 30\nplay x\nshow\n"),
            "info string error: cell (1, 1) is already occupied\n\
             info string error: action (3, 0) is out of bounds\n\
             info string error: action should consist of row and column digits, got 'x'\n\
             . . .\n. X .\n. . .\nPlayer to move: O\nNotation: .../.X./...\nStatus: in progress\n"
        );
        assert_eq!(
            run("position XX./.../...\nplay 22\n"),
            "info string error: no player to move\n"
        );
        let output = run("position startpos moves 00 00\nshow\n");
        assert!(output.starts_with(
            "info string error: applying move 00: cell (0, 0) is already occupied\n"
        ));
        assert!(output.ends_with("Notation: .../.../...\nStatus: in progress\n"));
        assert!(run("position XX/OO./...\n").starts_with("info string error: incorrect board"));
    }

    #[test]
    fn new_game() {
        assert_eq!(
            run("play 11\nnew\nshow\n"),
            ". . .\n. . .\n. . .\nPlayer to move: X\nNotation: .../.../...\nStatus: in progress\n"
        );
    }

    #[test]
    fn unsupported() {
        assert_eq!(
            run("\nuci\nquit\ngo\n"),
            "info string Unsupported command: uci\n"
        );
    }

    #[test]
    fn outcome() {
        assert_eq!(status(&Board::initial()), "in progress");
        assert_eq!(
            status(&Board::try_from("XOX/XOO/OXX").unwrap()),
            "tie"
        );
        assert_eq!(
            status(&Board::try_from("XX./OOO/X..").unwrap()),
            "O wins"
        );
    }
}
