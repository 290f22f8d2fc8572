//! Application services coordinating the board.

mod board;

pub use board::{
    BoardService, BoardServiceError, BoardServiceResult, CreateCardRequest, DropOutcome,
    EventOutcome,
};
