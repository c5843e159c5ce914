//! # tetris-duel
//!
//! A falling-block puzzle engine for one board, or two boards playing against
//! each other in the same process.
//!
//! ## Overview
//!
//! Each [`Board`] owns its grid, the falling and the next piece, its score and
//! a gravity timer. Player commands and gravity ticks are delivered to the
//! board one at a time; the board answers by moving, rotating, locking pieces
//! and clearing lines. In a duel the two boards share a [`PenaltyExchange`]:
//! multi-line clears send penalty rows to the opponent, which receives them
//! when its next piece spawns.
//!
//! ## Key Features
//!
//! - 7-bag piece randomizer
//! - Rotation with horizontal wall kicks
//! - Line clear scoring and level based gravity speed
//! - Penalty rows with a single hole, delivered at spawn time
//! - Ghost piece and next-piece preview through the [`Surface`] drawing contract
//! - Gravity driven by a tokio task, or by hand in headless use
//!
//! ## Example
//!
//! ```rust
//! use tetris_duel::{BoardId, Command, Game, GameConfig, GameMode, GravityTimer, ManualGravity};
//!
//! let config = GameConfig::new().with_seed(Some(7));
//! let mut game = Game::new(GameMode::Duel, &config, |id: BoardId| -> tetris_duel::Result<Box<dyn GravityTimer>> {
//!     Ok(Box::new(ManualGravity::new(id)))
//! })
//! .unwrap();
//!
//! game.apply(BoardId::Left, Command::HardDrop);
//! game.update();
//! assert!(game.board(BoardId::Left).unwrap().score() > 0);
//! ```

// Module declarations
pub mod bag;
pub mod board;
pub mod config;
pub mod error;
pub mod field;
pub mod game;
pub mod gravity;
pub mod kick;
pub mod penalty;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod state;
pub mod surface;

// Re-exports for convenience
pub use bag::BagRandomizer;
pub use board::{Board, Command, DropOutcome};
pub use config::{BOARD_HEIGHT, BOARD_WIDTH, GameConfig};
pub use error::{Result, TetrisError};
pub use field::{CellType, Field};
pub use game::{Game, GameMode};
pub use gravity::{GravityClock, GravityFactory, GravityTick, GravityTimer, ManualGravity};
pub use penalty::{BoardId, PenaltyExchange, PenaltyLink};
pub use piece::Piece;
pub use shapes::{CATALOG, Mask, Shape, ShapeKind};
pub use state::{BoardState, GameState};
pub use surface::{BoardStatus, PieceLayer, Surface};
