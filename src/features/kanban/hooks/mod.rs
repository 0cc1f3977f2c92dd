pub mod use_board;

pub use use_board::{use_board, BoardHook, DragSource};
