//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the
//! turn-keeping in [`Game`](crate::Game) so the computer opponent can
//! evaluate hypothetical boards with the same rules.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
