//! Move log and position snapshots.
//!
//! The log holds one entry per completed move with the undo record needed to
//! reverse it. Snapshots are full copies of the position: snapshot `0` is the
//! start (after reset or load) and snapshot `i` is the position after `i`
//! moves, which is the position right before move `i + 1`. There is always
//! exactly one more snapshot than there are entries.

use crate::game_state::{chess_types::*, position::Position, undo_state::UndoState};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub undo: UndoState,
    pub notation: String,
}

/// Frozen copy of a position for history viewing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub game_over: bool,
}

impl Snapshot {
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn captured_of(&self, color: Color) -> &[PieceKind] {
        self.position.captured_of(color)
    }
}

#[derive(Debug, Clone)]
pub struct GameLog {
    entries: Vec<LogEntry>,
    snapshots: Vec<Snapshot>,
}

impl GameLog {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: Vec::new(),
            snapshots: vec![initial],
        }
    }

    /// Discard everything and start over from `initial`.
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.snapshots.clear();
        self.snapshots.push(initial);
    }

    /// Record a completed move and the position it produced.
    pub fn push(&mut self, entry: LogEntry, after: Snapshot) {
        self.entries.push(entry);
        self.snapshots.push(after);
    }

    /// Remove the last move and its snapshot.
    pub fn pop(&mut self) -> Option<LogEntry> {
        let entry = self.entries.pop()?;
        self.snapshots.pop();
        Some(entry)
    }

    /// Flag the current position as finished, for endings no move produced.
    pub fn mark_latest_game_over(&mut self) {
        if let Some(latest) = self.snapshots.last_mut() {
            latest.game_over = true;
        }
    }

    #[inline]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[inline]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[inline]
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn latest_snapshot(&self) -> &Snapshot {
        match self.snapshots.last() {
            Some(snapshot) => snapshot,
            None => panic!("game log lost its initial snapshot"),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notations(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.notation.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{GameLog, LogEntry, Snapshot};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn snapshot(position: &Position) -> Snapshot {
        Snapshot {
            position: position.clone(),
            game_over: false,
        }
    }

    #[test]
    fn snapshots_track_entries_one_ahead() {
        let mut position = Position::new_game();
        let mut log = GameLog::new(snapshot(&position));
        assert_eq!(log.snapshots().len(), 1);

        let mv = long_algebraic_to_move("e2e4", &position).expect("legal");
        let undo = make_move(&mut position, mv);
        log.push(
            LogEntry {
                mv,
                piece: Piece::new(PieceKind::Pawn, Color::Light),
                captured: None,
                undo,
                notation: "e4".to_owned(),
            },
            snapshot(&position),
        );

        assert_eq!(log.len(), 1);
        assert_eq!(log.snapshots().len(), 2);
        assert_eq!(log.snapshot(0).map(Snapshot::side_to_move), Some(Color::Light));
        assert_eq!(log.latest_snapshot().side_to_move(), Color::Dark);
        assert_eq!(log.notations().collect::<Vec<_>>(), ["e4"]);

        log.mark_latest_game_over();
        assert!(log.latest_snapshot().game_over);
        assert!(log.snapshot(0).is_some_and(|first| !first.game_over));

        assert!(log.pop().is_some());
        assert!(log.pop().is_none());
        assert_eq!(log.snapshots().len(), 1);
    }

    #[test]
    fn reset_keeps_only_the_new_start() {
        let mut log = GameLog::new(snapshot(&Position::new_game()));
        let empty_kings =
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        log.reset(snapshot(&empty_kings));
        assert!(log.is_empty());
        assert_eq!(log.latest_snapshot().position, empty_kings);
    }
}
