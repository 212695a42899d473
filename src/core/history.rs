//! Move log tracking.
//!
//! Provides an append-only, timestamped record of the moves applied during
//! a single run.

use super::moves::Move;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A move together with when it was applied.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{LoggedMove, Move, Peg};
/// use chrono::Utc;
///
/// let entry = LoggedMove {
///     seq: 1,
///     mv: Move::new(1, Peg::A, Peg::C),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.seq, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggedMove {
    /// 1-based position of the move in its run
    pub seq: u64,
    /// The move that was applied
    pub mv: Move,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of the moves of one run.
///
/// Entries are only ever appended; each run owns its own log.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, MoveLog, Peg};
///
/// let mut log = MoveLog::new();
/// log.record(Move::new(1, Peg::A, Peg::B));
/// log.record(Move::new(2, Peg::A, Peg::C));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.entries()[1].seq, 2);
/// assert_eq!(log.lines().next().unwrap(), "Move disk 1 from A to B");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveLog {
    entries: Vec<LoggedMove>,
}

impl MoveLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a move stamped with the current time.
    pub fn record(&mut self, mv: Move) {
        self.record_at(mv, Utc::now());
    }

    /// Append a move with an explicit timestamp.
    pub fn record_at(&mut self, mv: Move, timestamp: DateTime<Utc>) {
        let seq = self.entries.len() as u64 + 1;
        self.entries.push(LoggedMove { seq, mv, timestamp });
    }

    /// Get all entries in the order they were recorded.
    pub fn entries(&self) -> &[LoggedMove] {
        &self.entries
    }

    /// Moves without their timestamps.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries.iter().map(|entry| entry.mv)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display lines, one per move.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.mv.to_string())
    }

    /// Calculate total duration from first to last move.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Peg;

    #[test]
    fn new_log_is_empty() {
        let log = MoveLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_assigns_sequence_numbers() {
        let mut log = MoveLog::new();
        log.record(Move::new(1, Peg::A, Peg::B));
        log.record(Move::new(2, Peg::A, Peg::C));
        log.record(Move::new(1, Peg::B, Peg::C));

        let seqs: Vec<u64> = log.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn moves_preserve_order() {
        let mut log = MoveLog::new();
        let first = Move::new(1, Peg::A, Peg::B);
        let second = Move::new(2, Peg::A, Peg::C);
        log.record(first);
        log.record(second);

        assert_eq!(log.moves().collect::<Vec<_>>(), vec![first, second]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut log = MoveLog::new();
        let start = Utc::now();
        log.record_at(Move::new(1, Peg::A, Peg::B), start);
        log.record_at(
            Move::new(2, Peg::A, Peg::C),
            start + chrono::Duration::milliseconds(25),
        );

        assert_eq!(log.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_move_has_duration_zero() {
        let mut log = MoveLog::new();
        log.record(Move::new(1, Peg::A, Peg::C));
        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = MoveLog::new();
        log.record(Move::new(1, Peg::A, Peg::C));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: MoveLog = serde_json::from_str(&json).unwrap();

        assert_eq!(log, deserialized);
    }
}
