//! Penalty rows exchanged between the two boards of a duel

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

/// Which side of a duel a board plays on
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum BoardId {
    Left,
    Right,
}

impl BoardId {
    pub fn opponent(self) -> BoardId {
        match self {
            BoardId::Left => BoardId::Right,
            BoardId::Right => BoardId::Left,
        }
    }

    fn slot(self) -> usize {
        match self {
            BoardId::Left => 0,
            BoardId::Right => 1,
        }
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardId::Left => write!(f, "left"),
            BoardId::Right => write!(f, "right"),
        }
    }
}

/// Pending penalty rows owed to each board
///
/// Uses atomic operations so both boards may credit and drain from
/// different threads without a lock; a drain takes every credit that
/// happened before it.
#[derive(Debug, Default)]
pub struct PenaltyExchange {
    pending: [AtomicU32; 2],
}

impl PenaltyExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `lines` penalty rows to the inbox of `board`
    pub fn credit(&self, board: BoardId, lines: u32) {
        if lines == 0 {
            return;
        }
        self.pending[board.slot()].fetch_add(lines, Ordering::AcqRel);
    }

    /// Take all rows pending for `board`, leaving its inbox empty
    pub fn drain(&self, board: BoardId) -> u32 {
        self.pending[board.slot()].swap(0, Ordering::AcqRel)
    }

    /// Rows currently waiting for `board`
    pub fn pending(&self, board: BoardId) -> u32 {
        self.pending[board.slot()].load(Ordering::Acquire)
    }
}

/// A board's connection to the shared exchange
#[derive(Debug, Clone)]
pub struct PenaltyLink {
    exchange: Arc<PenaltyExchange>,
    board: BoardId,
}

impl PenaltyLink {
    pub fn new(exchange: Arc<PenaltyExchange>, board: BoardId) -> Self {
        Self { exchange, board }
    }

    pub fn board(&self) -> BoardId {
        self.board
    }

    /// Send penalty rows to the opponent
    pub fn send(&self, lines: u32) {
        self.exchange.credit(self.board.opponent(), lines);
    }

    /// Collect rows sent by the opponent
    pub fn receive(&self) -> u32 {
        self.exchange.drain(self.board)
    }

    pub fn exchange(&self) -> &Arc<PenaltyExchange> {
        &self.exchange
    }
}
