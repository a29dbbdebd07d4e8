//! Core data model: board, game state machine and the yew reducer that
//! drives it from UI events.

mod board;
mod game;

use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::Reducible;

pub use board::{Board, CELL_COUNT, Mark, WINNING_LINES};
pub use game::{ComputerTicket, Direction, Game, GameStatus, StatusMessage};

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    /// Start or restart; `seed` decides who opens.
    Start { seed: u64 },
    /// Pointer click resolved to a cell.
    Click { index: usize },
    MoveCursor(Direction),
    /// Activation key on the cursor cell.
    Confirm,
    /// A scheduled computer move came due.
    ComputerMove { ticket: ComputerTicket, seed: u64 },
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        let changed = match action {
            Start { seed } => {
                new.start_game(&mut SmallRng::seed_from_u64(seed));
                true
            }
            // Human input is ignored while the computer is thinking.
            Click { index } => match new.current_player() {
                Some(mark) if !new.awaiting_computer() => new.apply_move(index, mark),
                _ => false,
            },
            MoveCursor(direction) => new.move_cursor(direction),
            Confirm => !new.awaiting_computer() && new.confirm_cursor_move(),
            ComputerMove { ticket, seed } => {
                new.computer_move(ticket, &mut SmallRng::seed_from_u64(seed))
            }
        };
        if changed { Rc::new(new) } else { self }
    }
}
