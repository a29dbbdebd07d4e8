//! Turn management for a single human-vs-computer game.
//!
//! Every operation is guarded: invalid moves, moves outside an active game
//! and stale computer tickets are ignored rather than reported.

use derive_more::Display;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{Board, CELL_COUNT, Mark};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Text for the status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum StatusMessage {
    #[default]
    #[display("Press Reset to start a new game")]
    Idle,
    #[display("You are playing first, click on the field to start")]
    HumanFirst,
    #[display("Your opponent is playing first")]
    ComputerFirst,
    #[display("Player {_0} wins!")]
    Won(Mark),
    #[display("It's a draw!")]
    Draw,
}

/// Identifies one scheduled computer move. A ticket only matches the game
/// generation and move count it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComputerTicket {
    pub generation: u64,
    pub move_number: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Option<Mark>,
    status: GameStatus,
    cursor: usize,
    /// Bumped by every `start_game`; stale tickets carry an older value.
    generation: u64,
    moves_played: u8,
    pending: Option<ComputerTicket>,
    message: StatusMessage,
}

impl Game {
    /// A game that has not been started yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// An in-progress game on an arbitrary board.
    pub fn with_board(board: Board, current_player: Mark) -> Self {
        Self {
            board,
            current_player: Some(current_player),
            status: GameStatus::InProgress,
            moves_played: (CELL_COUNT - board.empty_cells().len()) as u8,
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next; `None` before the first `start_game`.
    pub fn current_player(&self) -> Option<Mark> {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn message(&self) -> StatusMessage {
        self.message
    }

    pub fn pending_computer_move(&self) -> Option<ComputerTicket> {
        self.pending
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// True while the computer is due to move.
    pub fn awaiting_computer(&self) -> bool {
        self.is_in_progress() && self.current_player.is_some_and(Mark::is_computer)
    }

    pub fn start_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let first = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
        self.board = Board::new();
        self.current_player = Some(first);
        self.status = GameStatus::InProgress;
        self.cursor = 0;
        self.generation = self.generation.wrapping_add(1);
        self.moves_played = 0;
        self.pending = None;
        if first.is_computer() {
            self.schedule_computer_move();
            self.message = StatusMessage::ComputerFirst;
        } else {
            self.message = StatusMessage::HumanFirst;
        }
        info!(generation = self.generation, %first, "game started");
    }

    /// Places `mark` at `index`. Returns whether the board changed.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_in_progress() || !self.board.place(index, mark) {
            return false;
        }
        self.moves_played += 1;
        self.pending = None;
        debug!(index, %mark, moves = self.moves_played, "move applied");
        self.evaluate_result();
        if self.is_in_progress() {
            let next = self.current_player.map_or(mark.other(), Mark::other);
            self.current_player = Some(next);
            if next.is_computer() {
                self.schedule_computer_move();
            }
        }
        true
    }

    /// Plays a uniformly random empty cell for the computer if `ticket` is
    /// still the pending one.
    pub fn computer_move<R: Rng + ?Sized>(&mut self, ticket: ComputerTicket, rng: &mut R) -> bool {
        if !self.awaiting_computer() || self.pending != Some(ticket) {
            debug!(?ticket, "stale computer move ignored");
            return false;
        }
        let empty = self.board.empty_cells();
        let Some(&index) = empty.choose(rng) else {
            return false;
        };
        self.apply_move(index, Mark::COMPUTER)
    }

    /// First completed line wins; otherwise a full board is a draw.
    pub fn evaluate_result(&mut self) -> GameStatus {
        if !self.is_in_progress() {
            return self.status;
        }
        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
            self.message = StatusMessage::Won(winner);
            self.pending = None;
            info!(%winner, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            self.message = StatusMessage::Draw;
            self.pending = None;
            info!("game drawn");
        }
        self.status
    }

    /// Returns whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        let i = self.cursor;
        self.cursor = match direction {
            Direction::Up => (i + CELL_COUNT - 3) % CELL_COUNT,
            Direction::Down => (i + 3) % CELL_COUNT,
            Direction::Left => (i + CELL_COUNT - 1) % CELL_COUNT,
            Direction::Right => (i + 1) % CELL_COUNT,
        };
        true
    }

    pub fn confirm_cursor_move(&mut self) -> bool {
        match self.current_player {
            Some(mark) if self.board.is_empty_cell(self.cursor) => {
                self.apply_move(self.cursor, mark)
            }
            _ => false,
        }
    }

    fn schedule_computer_move(&mut self) {
        let ticket = ComputerTicket {
            generation: self.generation,
            move_number: self.moves_played,
        };
        debug!(?ticket, "computer move scheduled");
        self.pending = Some(ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);

    fn human_first_game() -> Game {
        Game::with_board(Board::new(), Mark::X)
    }

    #[test]
    fn new_game_is_idle() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.current_player(), None);
        assert_eq!(game.message(), StatusMessage::Idle);
        assert!(!game.is_over());
    }

    #[test]
    fn moves_ignored_before_start() {
        let mut game = Game::new();
        assert!(!game.apply_move(0, Mark::X));
        assert!(!game.move_cursor(Direction::Right));
        assert!(!game.confirm_cursor_move());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn start_game_resets_everything() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut game = human_first_game();
        game.apply_move(4, Mark::X);
        game.move_cursor(Direction::Down);
        game.start_game(&mut rng);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.generation(), 1);
        let first = game.current_player().unwrap();
        if first.is_computer() {
            assert_eq!(game.message(), StatusMessage::ComputerFirst);
            assert_eq!(
                game.pending_computer_move(),
                Some(ComputerTicket { generation: 1, move_number: 0 })
            );
        } else {
            assert_eq!(game.message(), StatusMessage::HumanFirst);
            assert_eq!(game.pending_computer_move(), None);
        }
    }

    #[test]
    fn occupied_cell_is_not_overwritten() {
        let mut game = human_first_game();
        assert!(game.apply_move(0, Mark::X));
        assert!(!game.apply_move(0, Mark::O));
        assert_eq!(game.board().get(0), Some(Mark::X));
    }

    #[test]
    fn out_of_range_move_is_ignored() {
        let mut game = human_first_game();
        assert!(!game.apply_move(9, Mark::X));
        assert_eq!(game.current_player(), Some(Mark::X));
    }

    #[test]
    fn human_move_hands_turn_to_computer() {
        let mut game = human_first_game();
        game.apply_move(4, Mark::X);
        assert_eq!(game.current_player(), Some(Mark::O));
        assert!(game.awaiting_computer());
        assert_eq!(
            game.pending_computer_move(),
            Some(ComputerTicket { generation: 0, move_number: 1 })
        );
    }

    #[test]
    fn computer_move_fills_an_empty_cell() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut game = human_first_game();
        game.apply_move(4, Mark::X);
        let ticket = game.pending_computer_move().unwrap();
        assert!(game.computer_move(ticket, &mut rng));
        assert_eq!(game.board().empty_cells().len(), 7);
        assert_eq!(game.board().get(4), Some(Mark::X));
        assert_eq!(game.current_player(), Some(Mark::X));
        assert_eq!(game.pending_computer_move(), None);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut game = human_first_game();
        game.apply_move(4, Mark::X);
        let ticket = game.pending_computer_move().unwrap();
        assert!(game.computer_move(ticket, &mut rng));
        // Replaying the same ticket must not move again.
        assert!(!game.computer_move(ticket, &mut rng));
        assert_eq!(game.board().empty_cells().len(), 7);
    }

    #[test]
    fn ticket_from_previous_generation_is_ignored() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut game = human_first_game();
        game.apply_move(0, Mark::X);
        let old = game.pending_computer_move().unwrap();
        // Restart until the computer opens, so a ticket is pending again.
        loop {
            game.start_game(&mut rng);
            if game.awaiting_computer() {
                break;
            }
        }
        assert!(!game.computer_move(old, &mut rng));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn computer_move_ignored_on_human_turn() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut game = human_first_game();
        let ticket = ComputerTicket { generation: 0, move_number: 0 };
        assert!(!game.computer_move(ticket, &mut rng));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn top_row_wins_for_x() {
        let board = Board::from_cells([X, X, X, None, None, None, None, None, None]);
        let mut game = Game::with_board(board, Mark::O);
        assert_eq!(game.evaluate_result(), GameStatus::Won(Mark::X));
        assert_eq!(game.message().to_string(), "Player X wins!");
        assert!(game.is_over());
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        let mut game = Game::with_board(board, Mark::X);
        assert_eq!(game.evaluate_result(), GameStatus::Draw);
        assert_eq!(game.message().to_string(), "It's a draw!");
    }

    #[test]
    fn open_board_stays_in_progress() {
        let board = Board::from_cells([X, O, None, None, None, None, None, None, None]);
        let mut game = Game::with_board(board, Mark::X);
        assert_eq!(game.evaluate_result(), GameStatus::InProgress);
    }

    #[test]
    fn winning_move_ends_game_without_switching() {
        let board = Board::from_cells([X, X, None, O, O, None, None, None, None]);
        let mut game = Game::with_board(board, Mark::X);
        assert!(game.apply_move(2, Mark::X));
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert_eq!(game.current_player(), Some(Mark::X));
        assert_eq!(game.pending_computer_move(), None);
        assert!(!game.apply_move(5, Mark::O));
    }

    #[test]
    fn cursor_wraps() {
        let mut game = human_first_game();
        game.move_cursor(Direction::Up);
        assert_eq!(game.cursor(), 6);
        game.move_cursor(Direction::Left);
        assert_eq!(game.cursor(), 5);
        game.move_cursor(Direction::Right);
        game.move_cursor(Direction::Right);
        assert_eq!(game.cursor(), 7);
        game.move_cursor(Direction::Down);
        assert_eq!(game.cursor(), 1);
    }

    #[test]
    fn cursor_frozen_after_game_over() {
        let board = Board::from_cells([X, X, X, None, None, None, None, None, None]);
        let mut game = Game::with_board(board, Mark::X);
        game.evaluate_result();
        assert!(!game.move_cursor(Direction::Down));
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn confirm_places_current_player_at_cursor() {
        let mut game = human_first_game();
        game.move_cursor(Direction::Right);
        assert!(game.confirm_cursor_move());
        assert_eq!(game.board().get(1), Some(Mark::X));
        // Cursor cell is now occupied.
        assert!(!game.confirm_cursor_move());
    }
}
