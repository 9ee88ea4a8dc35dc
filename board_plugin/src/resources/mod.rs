pub mod board_layout;
pub mod tile;
pub(crate) use board::*;
pub use board_options::*;

mod board_options;
mod board;
