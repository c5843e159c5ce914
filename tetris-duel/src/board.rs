use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bag::BagRandomizer;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, GameConfig};
use crate::field::{CellType, Field};
use crate::gravity::{GravityTick, GravityTimer};
use crate::kick::try_rotate;
use crate::penalty::{BoardId, PenaltyLink};
use crate::piece::Piece;
use crate::scoring::{level_for_lines, line_clear_score, penalty_lines};
use crate::state::BoardState;
use crate::surface::{BoardStatus, PieceLayer, Surface};

// Enum with all player commands
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
}

/// What a drop did to the board
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DropOutcome {
    // Board is finished, nothing happened
    Ignored,
    // Piece went down one row
    Moved,
    // Piece locked, `lines` rows were cleared and a new piece spawned
    Locked { lines: usize },
}

/// One player's well
///
/// Owns the placed cells, the falling and the next piece, the score and the
/// gravity timer. Once the game is over every command is a no-op.
pub struct Board {
    id: BoardId,
    config: GameConfig,
    field: Field,
    current: Piece,
    next: Piece,
    score: u64,
    lines_cleared: u32,
    game_over: bool,
    bag: BagRandomizer,
    // Piece colors and penalty holes
    rng: StdRng,
    next_piece_id: u64,
    penalty: Option<PenaltyLink>,
    gravity: Box<dyn GravityTimer>,
}

impl Board {
    /// Create a board and arm its gravity
    ///
    /// `penalty` is `None` for a single-board game.
    pub fn new(
        id: BoardId,
        config: &GameConfig,
        gravity: Box<dyn GravityTimer>,
        penalty: Option<PenaltyLink>,
    ) -> Self {
        let mut bag = BagRandomizer::new(config.seed);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        };
        let current = new_piece(0, config.spawn_column, &mut bag, &mut rng);
        let next = new_piece(1, config.spawn_column, &mut bag, &mut rng);
        let mut board = Board {
            id,
            config: config.clone(),
            field: Field::new(BOARD_WIDTH, BOARD_HEIGHT),
            current,
            next,
            score: 0,
            lines_cleared: 0,
            game_over: false,
            bag,
            rng,
            next_piece_id: 2,
            penalty,
            gravity,
        };
        board.restart_gravity();
        tracing::debug!(
            "Board {} ready, first piece {:?}, next {:?}",
            id,
            board.current.kind(),
            board.next.kind()
        );
        board
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn level(&self) -> u32 {
        level_for_lines(self.lines_cleared)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> BoardStatus {
        BoardStatus {
            score: self.score,
            level: self.level(),
            lines: self.lines_cleared,
        }
    }

    pub fn gravity(&self) -> &dyn GravityTimer {
        self.gravity.as_ref()
    }

    /// Penalty rows waiting to be injected at the next spawn
    pub fn pending_penalty(&self) -> u32 {
        self.penalty
            .as_ref()
            .map_or(0, |link| link.exchange().pending(self.id))
    }

    /// Run a player command, returns true if the board changed
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop(false) != DropOutcome::Ignored,
            Command::HardDrop => self.hard_drop() != DropOutcome::Ignored,
        }
    }

    pub fn move_left(&mut self) -> bool {
        if self.update() || self.current.x() <= 0 {
            return false;
        }
        self.current.move_left();
        if self.collides() {
            self.current.move_right();
            return false;
        }
        true
    }

    pub fn move_right(&mut self) -> bool {
        // Bound is the board width, not width minus piece width: collides() does the real check
        if self.update() || self.current.x() >= self.field.cols() as i32 {
            return false;
        }
        self.current.move_right();
        if self.collides() {
            self.current.move_left();
            return false;
        }
        true
    }

    /// Rotate clockwise with wall kicks; the piece is untouched if no placement fits
    pub fn rotate(&mut self) -> bool {
        if self.update() {
            return false;
        }
        match try_rotate(&self.field, &self.current) {
            Some(rotated) => {
                self.current = rotated;
                true
            }
            None => false,
        }
    }

    /// Move the piece down one row, locking it if it cannot go further
    ///
    /// Manual drops (`by_gravity == false`) restart the gravity cadence.
    pub fn soft_drop(&mut self, by_gravity: bool) -> DropOutcome {
        if self.update() {
            return DropOutcome::Ignored;
        }
        if !by_gravity {
            self.restart_gravity();
        }
        self.drop_one_row()
    }

    /// Drop the piece until it locks and the next one spawns
    pub fn hard_drop(&mut self) -> DropOutcome {
        if self.update() {
            return DropOutcome::Ignored;
        }
        self.restart_gravity();
        let dropping = self.current.id();
        let mut outcome = DropOutcome::Ignored;
        while !self.game_over && self.current.id() == dropping {
            outcome = self.drop_one_row();
            if outcome == DropOutcome::Moved && self.config.hard_drop_scoring {
                self.score += 1;
            }
        }
        outcome
    }

    /// Handle a tick from this board's gravity timer
    ///
    /// Ticks scheduled before the latest re-arm are ignored.
    pub fn on_gravity_tick(&mut self, tick: GravityTick) -> DropOutcome {
        if tick.board != self.id || !self.gravity.is_current(tick.generation) {
            tracing::trace!(
                "Board {} ignoring stale gravity tick (generation {})",
                self.id,
                tick.generation
            );
            return DropOutcome::Ignored;
        }
        tracing::trace!("Board {} gravity tick", self.id);
        self.soft_drop(true)
    }

    /// Whether the falling piece overlaps the walls, the floor or placed cells
    pub fn collides(&self) -> bool {
        self.field.collides(&self.current)
    }

    /// Detect game over: a freshly spawned piece that already collides ends the game
    ///
    /// Returns the game-over flag.
    pub fn update(&mut self) -> bool {
        if !self.game_over && self.collides() {
            self.game_over = true;
            self.gravity.cancel();
            tracing::info!(
                "Board {} game over: score {}, lines {}",
                self.id,
                self.score,
                self.lines_cleared
            );
        }
        self.game_over
    }

    /// Write the falling piece into the grid and clear completed rows
    ///
    /// Must only be called with the piece in a non-colliding position.
    pub fn place_piece(&mut self) -> usize {
        self.field.lock(&self.current);
        self.clear_full_lines()
    }

    /// Remove full rows, score them and send penalties to the opponent
    pub fn clear_full_lines(&mut self) -> usize {
        let lines = self.field.clear_full_lines();
        if lines == 0 {
            return 0;
        }
        self.score += line_clear_score(lines);
        self.lines_cleared += lines as u32;

        let penalty = penalty_lines(lines);
        if let Some(link) = &self.penalty {
            if penalty > 0 {
                link.send(penalty);
                tracing::info!(
                    "Board {} cleared {} lines, sending {} penalty lines to {}",
                    self.id,
                    lines,
                    penalty,
                    self.id.opponent()
                );
            }
        }
        tracing::debug!(
            "Board {} cleared {} lines, score {}, level {}",
            self.id,
            lines,
            self.score,
            self.level()
        );
        // Level may have changed
        self.restart_gravity();
        lines
    }

    /// Inject owed penalty rows, then promote the next piece and draw a new one
    pub fn spawn_new_piece(&mut self) {
        let owed = self.penalty.as_ref().map_or(0, |link| link.receive());
        if owed > 0 {
            tracing::debug!("Board {} receiving {} penalty lines", self.id, owed);
        }
        for _ in 0..owed {
            self.add_penalty_line();
        }
        let fresh = self.create_piece();
        self.current = std::mem::replace(&mut self.next, fresh);
    }

    /// Scroll the stack up one row and add a bottom row with a single hole
    pub fn add_penalty_line(&mut self) {
        let hole = self.rng.random_range(0..self.field.cols());
        self.field.push_penalty_row(hole, &mut self.rng);
    }

    /// Re-arm the gravity timer at the interval for the current level
    pub fn restart_gravity(&mut self) {
        if self.game_over {
            return;
        }
        let interval = self.config.gravity_interval(self.level());
        self.gravity.rearm(interval);
    }

    /// Where the falling piece would land if hard dropped now
    pub fn ghost_piece(&self) -> Piece {
        self.field.landing_position(&self.current)
    }

    /// Paint the board onto `surface` without changing it
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.paint_field(&self.field);
        if !self.game_over {
            surface.paint_piece(&self.ghost_piece(), PieceLayer::Ghost);
        }
        surface.paint_piece(&self.current, PieceLayer::Active);
        surface.paint_preview(&self.next);
        surface.paint_status(&self.status());
        if self.game_over {
            surface.paint_game_over();
        }
    }

    // get board state for rendering and serialization
    pub fn get_state(&self) -> BoardState {
        let mut state = BoardState::blank(self.id, self.field.cols(), self.field.rows());
        self.draw(&mut state);
        state
    }

    fn drop_one_row(&mut self) -> DropOutcome {
        self.current.move_down();
        if !self.collides() {
            return DropOutcome::Moved;
        }
        self.current.move_up();
        let lines = self.place_piece();
        self.spawn_new_piece();
        DropOutcome::Locked { lines }
    }

    fn create_piece(&mut self) -> Piece {
        let id = self.next_piece_id;
        self.next_piece_id += 1;
        new_piece(id, self.config.spawn_column, &mut self.bag, &mut self.rng)
    }
}

// Piece at the spawn point with the next kind from the bag and a random color
fn new_piece(id: u64, spawn_column: usize, bag: &mut BagRandomizer, rng: &mut StdRng) -> Piece {
    let kind = bag.draw();
    let color = CellType::random_color(rng);
    Piece::new(id, kind, spawn_column as i32, 0, color)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::gravity::ManualGravity;
    use crate::penalty::PenaltyExchange;
    use crate::shapes::ShapeKind;

    fn config() -> GameConfig {
        GameConfig::new().with_seed(Some(11))
    }

    fn single_board(config: &GameConfig) -> Board {
        Board::new(
            BoardId::Left,
            config,
            Box::new(ManualGravity::new(BoardId::Left)),
            None,
        )
    }

    fn duel_boards() -> (Board, Board, Arc<PenaltyExchange>) {
        let exchange = Arc::new(PenaltyExchange::new());
        let left = Board::new(
            BoardId::Left,
            &config(),
            Box::new(ManualGravity::new(BoardId::Left)),
            Some(PenaltyLink::new(exchange.clone(), BoardId::Left)),
        );
        let right = Board::new(
            BoardId::Right,
            &config(),
            Box::new(ManualGravity::new(BoardId::Right)),
            Some(PenaltyLink::new(exchange.clone(), BoardId::Right)),
        );
        (left, right, exchange)
    }

    // Replace the falling piece, keeping its identity
    fn set_current(board: &mut Board, kind: ShapeKind, rotation: usize, x: i32, y: i32) {
        let mut piece = Piece::new(board.current.id(), kind, x, y, CellType::Red);
        for _ in 0..rotation {
            piece.rotate(true);
        }
        board.current = piece;
    }

    fn fill_row_except(board: &mut Board, y: usize, hole: usize) {
        for x in 0..board.field.cols() {
            if x != hole {
                board.field.set_cell(x, y, CellType::Blue);
            }
        }
    }

    fn assert_dimensions(board: &Board) {
        assert_eq!(board.field.rows(), BOARD_HEIGHT);
        assert_eq!(board.field.iter_rows().count(), BOARD_HEIGHT);
        for row in board.field.iter_rows() {
            assert_eq!(row.len(), BOARD_WIDTH);
        }
    }

    #[test]
    fn test_new_board() {
        let board = single_board(&config());
        assert_dimensions(&board);
        assert_eq!(board.field.filled_cells(), 0);
        assert_eq!((board.current.x(), board.current.y()), (4, 0));
        assert_eq!(board.current.rotation(), 0);
        assert_eq!((board.next.x(), board.next.y()), (4, 0));
        assert_ne!(board.current.id(), board.next.id());
        assert!(CellType::PALETTE.contains(&board.current.color()));
        assert_eq!(board.score(), 0);
        assert!(!board.is_game_over());
        assert_eq!(board.gravity().interval(), Some(Duration::from_millis(1000)));
        assert_eq!(board.gravity().generation(), 1);
    }

    #[test]
    fn test_move_left_at_wall_is_noop() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::T, 0, 0, 5);
        assert!(!board.move_left());
        assert_eq!((board.current.x(), board.current.y()), (0, 5));
    }

    #[test]
    fn test_move_right_stops_at_wall_through_collision() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::O, 0, 7, 5);
        assert!(board.move_right());
        assert_eq!(board.current.x(), 8);
        // Pre-check passes (8 < 10) but the move collides and is reverted
        assert!(!board.move_right());
        assert_eq!(board.current.x(), 8);
    }

    #[test]
    fn test_move_blocked_by_placed_cells() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::O, 0, 4, 5);
        board.field.set_cell(3, 6, CellType::Green);
        assert!(!board.move_left());
        assert_eq!(board.current.x(), 4);
        assert!(board.apply(Command::MoveRight));
        assert_eq!(board.current.x(), 5);
    }

    #[test]
    fn test_soft_drop_square_locks_on_floor() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::O, 0, 4, 0);
        let first = board.current.id();
        let upcoming = board.next.id();

        for _ in 0..18 {
            assert_eq!(board.soft_drop(false), DropOutcome::Moved);
        }
        assert_eq!(board.current.y(), 18);
        assert_eq!(board.soft_drop(false), DropOutcome::Locked { lines: 0 });

        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert!(!board.field.get_cell(x, y).is_empty());
        }
        assert_eq!(board.field.filled_cells(), 4);
        assert_eq!(board.score(), 0);
        assert_ne!(board.current.id(), first);
        assert_eq!(board.current.id(), upcoming);
        assert_eq!((board.current.x(), board.current.y()), (4, 0));
        assert_dimensions(&board);
    }

    #[test]
    fn test_single_line_clear() {
        let mut board = single_board(&config());
        fill_row_except(&mut board, 19, 5);
        // Vertical I above the hole
        set_current(&mut board, ShapeKind::I, 1, 5, 0);
        let generation = board.gravity().generation();

        let mut outcome = board.soft_drop(false);
        while outcome == DropOutcome::Moved {
            outcome = board.soft_drop(false);
        }
        assert_eq!(outcome, DropOutcome::Locked { lines: 1 });
        assert_eq!(board.lines_cleared(), 1);
        assert_eq!(board.score(), 40);
        assert!(board.field.row(0).iter().all(|c| c.is_empty()));
        // Remaining three cells of the I shifted down by one
        for y in 17..20 {
            assert!(!board.field.get_cell(5, y).is_empty());
        }
        assert_eq!(board.field.filled_cells(), 3);
        assert!(board.gravity().generation() > generation);
        assert_dimensions(&board);
    }

    #[test]
    fn test_clear_full_lines_without_full_rows() {
        let mut board = single_board(&config());
        fill_row_except(&mut board, 19, 0);
        let before = board.field.clone();
        let generation = board.gravity().generation();
        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board.field, before);
        assert_eq!(board.score(), 0);
        assert_eq!(board.gravity().generation(), generation);
    }

    #[test]
    fn test_hard_drop_scores_distance_and_spawns() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::O, 0, 4, 0);
        let first = board.current.id();
        assert_eq!(board.hard_drop(), DropOutcome::Locked { lines: 0 });
        assert_ne!(board.current.id(), first);
        assert_eq!(board.score(), 18);
        assert!(!board.field.get_cell(4, 19).is_empty());
    }

    #[test]
    fn test_hard_drop_without_distance_scoring() {
        let mut board = single_board(&config().with_hard_drop_scoring(false));
        set_current(&mut board, ShapeKind::O, 0, 4, 0);
        board.hard_drop();
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_hard_drop_always_changes_piece() {
        let mut board = single_board(&config());
        for _ in 0..6 {
            let before = board.current.id();
            board.hard_drop();
            if board.update() {
                break;
            }
            assert_ne!(board.current.id(), before);
        }
    }

    #[test]
    fn test_rotate_is_all_or_nothing() {
        let mut board = single_board(&config());
        for y in 10..20 {
            fill_row_except(&mut board, y, 5);
        }
        set_current(&mut board, ShapeKind::I, 1, 5, 16);
        let before = board.current;
        assert!(!board.rotate());
        assert_eq!(board.current, before);
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::I, 1, 9, 5);
        assert!(board.apply(Command::Rotate));
        assert_eq!(board.current.rotation(), 2);
        assert_eq!(board.current.x(), 6);
        assert!(!board.collides());
    }

    #[test]
    fn test_four_line_clear_sends_four_penalty_lines() {
        let (mut left, mut right, exchange) = duel_boards();
        for y in 16..20 {
            fill_row_except(&mut left, y, 9);
        }
        set_current(&mut left, ShapeKind::I, 1, 9, 0);
        assert_eq!(left.hard_drop(), DropOutcome::Locked { lines: 4 });
        assert_eq!(left.lines_cleared(), 4);
        assert_eq!(left.score(), 1200 + 16);
        assert_eq!(left.field.filled_cells(), 0);
        assert_eq!(exchange.pending(BoardId::Right), 4);
        assert_eq!(right.pending_penalty(), 4);
        assert_eq!(exchange.pending(BoardId::Left), 0);

        // Marker in row 4 ends up at the top once four rows scroll off
        right.field.set_cell(2, 4, CellType::Yellow);
        right.field.set_cell(7, 2, CellType::Yellow);
        right.spawn_new_piece();

        assert_eq!(right.pending_penalty(), 0);
        assert_eq!(right.field.get_cell(2, 0), CellType::Yellow);
        assert_eq!(right.field.get_cell(7, 0), CellType::Empty);
        for y in 16..20 {
            let holes = right.field.row(y).iter().filter(|c| c.is_empty()).count();
            assert_eq!(holes, 1, "row {}", y);
        }
        assert_dimensions(&right);
    }

    #[test]
    fn test_single_clear_sends_no_penalty() {
        let (mut left, _right, exchange) = duel_boards();
        fill_row_except(&mut left, 19, 5);
        set_current(&mut left, ShapeKind::I, 1, 5, 0);
        left.hard_drop();
        assert_eq!(left.lines_cleared(), 1);
        assert_eq!(exchange.pending(BoardId::Right), 0);
    }

    #[test]
    fn test_penalty_applied_only_on_spawn() {
        let (mut left, mut right, exchange) = duel_boards();
        exchange.credit(BoardId::Left, 2);
        set_current(&mut left, ShapeKind::O, 0, 4, 0);
        // Moving around does not inject anything
        left.move_left();
        left.soft_drop(false);
        assert_eq!(left.field.filled_cells(), 0);
        assert_eq!(left.pending_penalty(), 2);

        left.hard_drop();
        assert_eq!(left.pending_penalty(), 0);
        // Locked O plus two penalty rows of nine cells
        assert_eq!(left.field.filled_cells(), 4 + 18);
        // Opponent untouched
        assert_eq!(right.field.filled_cells(), 0);
        right.spawn_new_piece();
        assert_eq!(right.field.filled_cells(), 0);
    }

    #[test]
    fn test_game_over_when_spawn_collides() {
        let mut board = single_board(&config());
        for x in 0..BOARD_WIDTH {
            board.field.set_cell(x, 0, CellType::Green);
            board.field.set_cell(x, 1, CellType::Green);
        }
        // Knock out one cell so the rows stay uncleared
        board.field.set_cell(0, 1, CellType::Empty);
        board.field.set_cell(0, 0, CellType::Empty);
        board.spawn_new_piece();

        // One frame still shows the overlapping piece
        let state = board.get_state();
        assert!(!state.game_over);
        assert!(!board.is_game_over());

        assert!(board.update());
        assert!(board.is_game_over());
        assert_eq!(board.gravity().interval(), None);

        let before = board.current;
        let score = board.score();
        assert!(!board.apply(Command::MoveLeft));
        assert!(!board.apply(Command::Rotate));
        assert_eq!(board.soft_drop(false), DropOutcome::Ignored);
        assert_eq!(board.hard_drop(), DropOutcome::Ignored);
        assert_eq!(board.current, before);
        assert_eq!(board.score(), score);
        assert!(board.get_state().game_over);
    }

    #[test]
    fn test_gravity_tick_generations() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::T, 0, 4, 0);
        let stale = GravityTick {
            board: BoardId::Left,
            generation: board.gravity().generation(),
        };
        // Manual soft drop re-arms the timer
        assert_eq!(board.soft_drop(false), DropOutcome::Moved);
        assert_eq!(board.on_gravity_tick(stale), DropOutcome::Ignored);
        assert_eq!(board.current.y(), 1);

        let fresh = GravityTick {
            board: BoardId::Left,
            generation: board.gravity().generation(),
        };
        assert_eq!(board.on_gravity_tick(fresh), DropOutcome::Moved);
        assert_eq!(board.current.y(), 2);
        // Gravity drops do not re-arm
        assert!(board.gravity().is_current(fresh.generation));

        let wrong_board = GravityTick {
            board: BoardId::Right,
            generation: fresh.generation,
        };
        assert_eq!(board.on_gravity_tick(wrong_board), DropOutcome::Ignored);
    }

    #[test]
    fn test_level_up_speeds_gravity() {
        let mut board = single_board(&config());
        board.lines_cleared = 9;
        fill_row_except(&mut board, 19, 5);
        set_current(&mut board, ShapeKind::I, 1, 5, 0);
        board.hard_drop();
        assert_eq!(board.lines_cleared(), 10);
        assert_eq!(board.level(), 1);
        assert_eq!(board.gravity().interval(), Some(Duration::from_millis(900)));
    }

    #[test]
    fn test_ghost_piece_and_snapshot() {
        let mut board = single_board(&config());
        set_current(&mut board, ShapeKind::O, 0, 4, 0);
        let ghost = board.ghost_piece();
        assert_eq!((ghost.x(), ghost.y()), (4, 18));

        let state = board.get_state();
        assert_eq!(state.well.get_cell(4, 0), CellType::Red);
        assert_eq!(state.well.get_cell(5, 19), CellType::Ghost);
        assert_eq!(state.preview.filled_cells(), 4);
        assert_eq!(state.status, board.status());
        // Drawing does not touch the board
        assert_eq!(board.field.filled_cells(), 0);

        let json = serde_json::to_string(&state).unwrap();
        let restored: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_invariants_hold_under_random_play() {
        use rand::seq::IndexedRandom;

        let mut board = single_board(&config());
        let mut rng = StdRng::seed_from_u64(99);
        let commands = [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::HardDrop,
        ];
        let mut last_score = 0;
        let mut last_lines = 0;
        for _ in 0..2000 {
            let command = *commands.choose(&mut rng).unwrap();
            board.apply(command);
            board.update();
            assert_dimensions(&board);
            assert!(board.score() >= last_score);
            assert!(board.lines_cleared() >= last_lines);
            assert!(board.current.x() >= 0);
            last_score = board.score();
            last_lines = board.lines_cleared();
            if board.is_game_over() {
                break;
            }
            assert!(!board.collides());
        }
    }
}
