//! Tic-tac-toe against a random computer opponent, rendered with yew on a
//! canvas.

pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod render;
pub mod util;
