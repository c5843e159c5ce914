use std::sync::Arc;

use crate::board::{Board, Command, DropOutcome};
use crate::config::GameConfig;
use crate::error::Result;
use crate::gravity::{GravityFactory, GravityTick};
use crate::penalty::{BoardId, PenaltyExchange, PenaltyLink};
use crate::state::GameState;

/// Number of boards in play
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum GameMode {
    /// One board, no penalty exchange
    Single,
    /// Two boards sending penalty lines to each other
    Duel,
}

impl GameMode {
    pub fn boards(self) -> &'static [BoardId] {
        match self {
            GameMode::Single => &[BoardId::Left],
            GameMode::Duel => &[BoardId::Left, BoardId::Right],
        }
    }
}

/// A running game: one board, or two boards sharing a penalty exchange
///
/// Commands and gravity ticks are routed to the board they name; both arrive
/// on the same control thread, so each is handled to completion before the
/// next one starts.
pub struct Game {
    mode: GameMode,
    boards: Vec<Board>,
    exchange: Option<Arc<PenaltyExchange>>,
}

impl Game {
    /// Create a game, asking `gravity` for one timer per board
    pub fn new(mode: GameMode, config: &GameConfig, mut gravity: impl GravityFactory) -> Result<Game> {
        config.validate()?;

        let exchange = match mode {
            GameMode::Single => None,
            GameMode::Duel => Some(Arc::new(PenaltyExchange::new())),
        };

        let mut boards = Vec::with_capacity(mode.boards().len());
        for &id in mode.boards() {
            let link = exchange
                .as_ref()
                .map(|exchange| PenaltyLink::new(exchange.clone(), id));
            boards.push(Board::new(id, config, gravity(id)?, link));
        }
        tracing::info!("Started {:?} game with {} board(s)", mode, boards.len());

        Ok(Game {
            mode,
            boards,
            exchange,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id() == id)
    }

    pub fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| board.id() == id)
    }

    pub fn exchange(&self) -> Option<&Arc<PenaltyExchange>> {
        self.exchange.as_ref()
    }

    /// Route a player command; commands for a board not in play are dropped
    pub fn apply(&mut self, id: BoardId, command: Command) -> bool {
        match self.board_mut(id) {
            Some(board) => board.apply(command),
            None => false,
        }
    }

    pub fn gravity_tick(&mut self, tick: GravityTick) -> DropOutcome {
        match self.board_mut(tick.board) {
            Some(board) => board.on_gravity_tick(tick),
            None => DropOutcome::Ignored,
        }
    }

    /// Run game-over detection on every board, returns true when the game has ended
    pub fn update(&mut self) -> bool {
        for board in self.boards.iter_mut() {
            board.update();
        }
        self.is_game_over()
    }

    /// A duel ends as soon as either side tops out
    pub fn is_game_over(&self) -> bool {
        self.boards.iter().any(|board| board.is_game_over())
    }

    /// The board still standing after the other topped out
    pub fn winner(&self) -> Option<BoardId> {
        if self.mode != GameMode::Duel {
            return None;
        }
        let mut standing = self.boards.iter().filter(|board| !board.is_game_over());
        match (standing.next(), standing.next()) {
            (Some(board), None) => Some(board.id()),
            _ => None,
        }
    }

    pub fn get_state(&self) -> GameState {
        GameState {
            boards: self.boards.iter().map(|board| board.get_state()).collect(),
            winner: self.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TetrisError;
    use crate::field::CellType;
    use crate::gravity::{GravityTimer, ManualGravity};

    fn manual(id: BoardId) -> Result<Box<dyn GravityTimer>> {
        Ok(Box::new(ManualGravity::new(id)))
    }

    fn duel() -> Game {
        Game::new(GameMode::Duel, &GameConfig::new().with_seed(Some(5)), manual).unwrap()
    }

    #[test]
    fn test_single_game_has_no_exchange() {
        let game = Game::new(GameMode::Single, &GameConfig::new(), manual).unwrap();
        assert_eq!(game.boards().len(), 1);
        assert!(game.exchange().is_none());
        assert!(game.board(BoardId::Right).is_none());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig::new().with_gravity_min_ms(0);
        let result = Game::new(GameMode::Duel, &config, manual);
        assert!(matches!(result, Err(TetrisError::InvalidConfig(_))));
    }

    #[test]
    fn test_gravity_factory_error_propagates() {
        let result = Game::new(GameMode::Single, &GameConfig::new(), |_id: BoardId| -> Result<Box<dyn GravityTimer>> {
            Err(TetrisError::RuntimeUnavailable("no runtime".to_string()))
        });
        assert!(matches!(result, Err(TetrisError::RuntimeUnavailable(_))));
    }

    #[test]
    fn test_commands_are_routed_per_board() {
        let mut game = duel();
        let left_x = game.board(BoardId::Left).unwrap().current().x();
        let right_x = game.board(BoardId::Right).unwrap().current().x();

        assert!(game.apply(BoardId::Left, Command::MoveLeft));
        assert_eq!(game.board(BoardId::Left).unwrap().current().x(), left_x - 1);
        assert_eq!(game.board(BoardId::Right).unwrap().current().x(), right_x);
    }

    #[test]
    fn test_same_seed_gives_both_players_the_same_pieces() {
        let mut game = duel();
        for _ in 0..5 {
            let left = game.board(BoardId::Left).unwrap().current().kind();
            let right = game.board(BoardId::Right).unwrap().current().kind();
            assert_eq!(left, right);
            game.apply(BoardId::Left, Command::HardDrop);
            game.apply(BoardId::Right, Command::HardDrop);
        }
    }

    #[test]
    fn test_gravity_tick_routing() {
        let mut game = duel();
        let generation = game.board(BoardId::Right).unwrap().gravity().generation();
        let tick = GravityTick {
            board: BoardId::Right,
            generation,
        };
        assert_eq!(game.gravity_tick(tick), DropOutcome::Moved);
        assert_eq!(game.board(BoardId::Right).unwrap().current().y(), 1);
        assert_eq!(game.board(BoardId::Left).unwrap().current().y(), 0);
    }

    #[test]
    fn test_winner_after_top_out() {
        let mut game = duel();
        {
            let board = game.board_mut(BoardId::Left).unwrap();
            // Bury the left board until its falling piece overlaps the stack
            for _ in 0..20 {
                board.add_penalty_line();
            }
        }
        assert!(game.update());
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(BoardId::Right));

        let state = game.get_state();
        assert!(state.board(BoardId::Left).unwrap().game_over);
        assert!(!state.board(BoardId::Right).unwrap().game_over);
        assert_eq!(state.winner, Some(BoardId::Right));
    }

    #[test]
    fn test_pending_penalty_lands_on_next_spawn() {
        let mut game = duel();
        let exchange = game.exchange().unwrap().clone();
        exchange.credit(BoardId::Right, 4);
        game.apply(BoardId::Right, Command::HardDrop);
        let right = game.board(BoardId::Right).unwrap();
        let penalty_rows = (16..20)
            .filter(|&y| {
                right
                    .field()
                    .row(y)
                    .iter()
                    .filter(|cell| **cell == CellType::Empty)
                    .count()
                    == 1
            })
            .count();
        assert_eq!(penalty_rows, 4);
        assert_eq!(exchange.pending(BoardId::Right), 0);
    }
}
