//! Pointer and keyboard mapping onto board cells and game commands.

use crate::model::Direction;

/// Maps canvas-local pointer coordinates to a cell index:
/// `floor(x / size) + floor(y / size) * 3`. Points outside the grid map
/// to `None`.
pub fn cell_index(local_x: f64, local_y: f64, cell_size: f64) -> Option<usize> {
    if !(cell_size > 0.0) || local_x < 0.0 || local_y < 0.0 {
        return None;
    }
    let col = (local_x / cell_size).floor();
    let row = (local_y / cell_size).floor();
    if col >= 3.0 || row >= 3.0 {
        return None;
    }
    Some(col as usize + row as usize * 3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Move(Direction),
    Confirm,
}

impl KeyCommand {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(KeyCommand::Move(Direction::Up)),
            "ArrowDown" => Some(KeyCommand::Move(Direction::Down)),
            "ArrowLeft" => Some(KeyCommand::Move(Direction::Left)),
            "ArrowRight" => Some(KeyCommand::Move(Direction::Right)),
            "Enter" => Some(KeyCommand::Confirm),
            _ => None,
        }
    }
}
