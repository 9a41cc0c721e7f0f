//! Line-oriented terminal front end.
//!
//! The human plays White with coordinate moves (`e2e4`, `e7e8q`); the engine
//! answers for Black unless the `Mode` option is `human`, in which case both
//! sides are typed in. Commands:
//!
//! - `board`, `moves`, `new`, `resign`, `quit`
//! - `undo` (against the engine, takes back its reply and the human move)
//! - `promote <q|r|b|n>`
//! - `code`, `load <code>`
//! - `history <i>`, `present`
//! - `setoption name <Depth|Chess960|Handicap|Mode> value <v>`

use std::io::{self, BufRead, Write};

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_config::{GameConfig, GameMode};
use crate::session::game_session::{Game, GameStatus, MoveReport};
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::{render_captured, render_position};

const HUMAN: Color = Color::Light;

pub fn run_stdio_loop(config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TerminalSession::new(Game::new(config));

    session.print_board(&mut stdout)?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalSession {
    game: Game,
}

impl TerminalSession {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn engine_plays(&self) -> bool {
        self.game.config().mode == GameMode::Ai
    }

    /// Handle one input line; `Ok(true)` asks the caller to stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "board" => self.print_board(out)?,
            "moves" => {
                let notations: Vec<&str> = self.game.log().notations().collect();
                writeln!(out, "{}", notations.join(" "))?;
            }
            "new" => {
                self.game.reset();
                self.print_board(out)?;
            }
            "undo" => self.handle_undo(out)?,
            "resign" => match self.game.resign() {
                Ok(_) => self.print_board(out)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "promote" => {
                let kind = parts
                    .next()
                    .and_then(|t| t.chars().next())
                    .and_then(PieceKind::from_letter);
                match kind.map(|k| self.game.choose_promotion(k)) {
                    Some(Ok(report)) => {
                        self.print_report(&report, out)?;
                        self.engine_turn(out)?;
                    }
                    Some(Err(err)) => writeln!(out, "error: {err}")?,
                    None => writeln!(out, "usage: promote <q|r|b|n>")?,
                }
            }
            "code" => writeln!(out, "{}", self.game.game_code())?,
            "load" => match parts.next() {
                Some(code) => match self.game.load_game_code(code) {
                    Ok(()) => {
                        self.print_board(out)?;
                        self.engine_turn(out)?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                None => writeln!(out, "usage: load <code>")?,
            },
            "history" => {
                let index = parts.next().and_then(|t| t.parse::<isize>().ok());
                match index.map(|i| self.game.jump_to(i).map(|s| s.position.clone())) {
                    Some(Ok(position)) => {
                        writeln!(out, "{}", render_position(&position))?;
                        writeln!(out, "(viewing history; type 'present' to resume)")?;
                    }
                    Some(Err(err)) => writeln!(out, "error: {err}")?,
                    None => writeln!(out, "usage: history <index>")?,
                }
            }
            "present" => {
                self.game.return_to_present();
                self.print_board(out)?;
            }
            "setoption" => {
                let (name, value) = parse_setoption(trimmed);
                match self.game.set_option(&name, &value) {
                    Ok(()) => writeln!(out, "{name} set; 'new' applies setup changes")?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            _ => self.handle_move_text(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_move_text(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.engine_plays() && self.game.position().side_to_move != HUMAN {
            writeln!(out, "error: not your turn")?;
            return Ok(());
        }
        let applied = long_algebraic_to_move(text, self.game.position())
            .and_then(|mv| self.game.apply_move(mv));
        match applied {
            Ok(report) => {
                self.print_report(&report, out)?;
                if report.promotion_pending {
                    writeln!(out, "choose with: promote <q|r|b|n>")?;
                } else {
                    self.engine_turn(out)?;
                }
            }
            Err(err) => writeln!(out, "error: {err}")?,
        }
        Ok(())
    }

    fn handle_undo(&mut self, out: &mut impl Write) -> io::Result<()> {
        if let Err(err) = self.game.undo_last() {
            writeln!(out, "error: {err}")?;
            return Ok(());
        }
        // Step back to the human's turn.
        if self.engine_plays() && self.game.position().side_to_move != HUMAN {
            if let Err(err) = self.game.undo_last() {
                writeln!(out, "error: {err}")?;
            }
        }
        self.print_board(out)
    }

    fn engine_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.engine_plays()
            || self.game.status().is_over()
            || self.game.position().side_to_move == HUMAN
        {
            return Ok(());
        }
        match self.game.request_ai_move(None) {
            Ok(Some((report, output))) => {
                for line in &output.info_lines {
                    writeln!(out, "{line}")?;
                }
                writeln!(out, "engine plays {}", move_to_long_algebraic(report.mv))?;
                self.print_report(&report, out)?;
            }
            Ok(None) => {}
            Err(err) => writeln!(out, "error: {err}")?,
        }
        Ok(())
    }

    fn print_report(&self, report: &MoveReport, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}. {}", self.game.log().len(), report.notation)?;
        if report.promotion_pending {
            return Ok(());
        }
        self.print_board(out)
    }

    pub fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        let position = self.game.position();
        writeln!(out, "{}", render_position(position))?;
        writeln!(
            out,
            "captured: white [{}] black [{}]",
            render_captured(position, Color::Light),
            render_captured(position, Color::Dark)
        )?;
        let status = match self.game.status() {
            GameStatus::InProgress => format!("{} to move", position.side_to_move.name()),
            GameStatus::Check { side } => format!("{} is in check", side.name()),
            GameStatus::Checkmate { winner } => format!("checkmate, {} wins", winner.name()),
            GameStatus::Stalemate => "stalemate".to_owned(),
            GameStatus::Resigned { winner } => {
                format!("{} resigns, {} wins", winner.opposite().name(), winner.name())
            }
        };
        writeln!(out, "{status}")
    }
}

fn parse_setoption(line: &str) -> (String, String) {
    let mut name_tokens = Vec::new();
    let mut value_tokens = Vec::new();
    let mut mode = "";

    for tok in line.split_whitespace().skip(1) {
        match tok {
            "name" => mode = "name",
            "value" => mode = "value",
            _ if mode == "name" => name_tokens.push(tok),
            _ if mode == "value" => value_tokens.push(tok),
            _ => {}
        }
    }

    (name_tokens.join(" "), value_tokens.join(" "))
}

#[cfg(test)]
mod tests {
    use super::{parse_setoption, TerminalSession};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_config::GameConfig;
    use crate::session::game_session::Game;

    fn run(session: &mut TerminalSession, line: &str) -> String {
        let mut out = Vec::new();
        session
            .handle_command(line, &mut out)
            .expect("writing to a Vec never fails");
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn human_move_gets_an_engine_reply() {
        let mut session = TerminalSession::new(Game::seeded(GameConfig::default(), 4));
        let text = run(&mut session, "e2e4");
        assert!(text.contains("1. e4"));
        assert!(text.contains("engine plays"));
        assert_eq!(session.game().position().side_to_move, Color::Light);
        assert_eq!(session.game().log().len(), 2);

        run(&mut session, "undo");
        assert_eq!(session.game().log().len(), 0);
    }

    #[test]
    fn bad_input_is_reported_not_fatal() {
        let mut session = TerminalSession::new(Game::seeded(GameConfig::default(), 4));
        assert!(run(&mut session, "e2e5").starts_with("error:"));
        assert!(run(&mut session, "load ###").starts_with("error:"));
        assert!(run(&mut session, "history 9").starts_with("error:"));
        assert!(run(&mut session, "undo").starts_with("error:"));

        let mut out = Vec::new();
        assert!(session
            .handle_command("quit", &mut out)
            .expect("quit writes nothing"));
    }

    #[test]
    fn code_command_round_trips_through_load() {
        let mut session = TerminalSession::new(Game::seeded(GameConfig::default(), 8));
        run(&mut session, "d2d4");
        let code = run(&mut session, "code");
        let live = session.game().position().clone();

        let mut other = TerminalSession::new(Game::seeded(GameConfig::default(), 8));
        run(&mut other, &format!("load {}", code.trim()));
        assert_eq!(other.game().position(), &live);
    }

    #[test]
    fn two_player_mode_never_calls_the_engine() {
        let mut session = TerminalSession::new(Game::seeded(GameConfig::default(), 4));
        run(&mut session, "setoption name Mode value human");

        let text = run(&mut session, "e2e4");
        assert!(!text.contains("engine plays"));
        assert_eq!(session.game().position().side_to_move, Color::Dark);

        run(&mut session, "e7e5");
        assert_eq!(session.game().log().len(), 2);

        run(&mut session, "undo");
        assert_eq!(session.game().log().len(), 1);
        assert_eq!(session.game().position().side_to_move, Color::Dark);
    }

    #[test]
    fn resign_command_ends_the_game() {
        let mut session = TerminalSession::new(Game::seeded(GameConfig::default(), 4));
        let text = run(&mut session, "resign");
        assert!(text.contains("White resigns, Black wins"));
        assert!(session.game().status().is_over());
        assert!(run(&mut session, "e2e4").starts_with("error:"));
        assert!(run(&mut session, "resign").starts_with("error:"));
    }

    #[test]
    fn setoption_splits_name_and_value() {
        assert_eq!(
            parse_setoption("setoption name Handicap value black:QR"),
            ("Handicap".to_owned(), "black:QR".to_owned())
        );
    }
}
