//! Game configuration consumed by the session and the engine.
//!
//! Serializable so a settings front end can persist it; `set_option` accepts
//! the same name/value text pairs a `setoption` command would carry.

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Color, PieceKind};

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub search_depth: u8,
    pub chess960: bool,
    pub handicap: Option<Handicap>,
    pub mode: GameMode,
}

/// Who plays Black: the engine, or a second person at the same terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Ai,
    Human,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            chess960: false,
            handicap: None,
            mode: GameMode::Ai,
        }
    }
}

/// Pieces stripped from one side before the first move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handicap {
    pub side: Color,
    pub pieces: Vec<PieceKind>,
}

impl Handicap {
    /// Parse `"black:QR"` style text. Kings cannot be handicapped.
    pub fn parse(value: &str) -> Option<Self> {
        let (side, letters) = value.trim().split_once(':')?;
        let side = match side.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Color::Light,
            "black" | "b" => Color::Dark,
            _ => return None,
        };

        let mut pieces = Vec::new();
        for ch in letters.trim().chars() {
            let kind = PieceKind::from_letter(ch)?;
            if kind == PieceKind::King {
                return None;
            }
            if !pieces.contains(&kind) {
                pieces.push(kind);
            }
        }
        Some(Self { side, pieces })
    }
}

impl GameConfig {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value.trim().parse::<u8>().map_err(|_| invalid())?;
            if parsed == 0 {
                return Err(invalid());
            }
            self.search_depth = parsed;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Chess960") {
            let v = value.trim().to_ascii_lowercase();
            self.chess960 = match v.as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => return Err(invalid()),
            };
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Handicap") {
            let v = value.trim();
            self.handicap = if v.is_empty() || v.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(Handicap::parse(v).ok_or_else(invalid)?)
            };
            return Ok(());
        }

        if name.eq_ignore_ascii_case("Mode") {
            self.mode = match value.trim().to_ascii_lowercase().as_str() {
                "ai" | "engine" => GameMode::Ai,
                "human" | "two-player" => GameMode::Human,
                _ => return Err(invalid()),
            };
            return Ok(());
        }

        Err(invalid())
    }
}
