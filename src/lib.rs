pub mod board;
pub mod console;
pub mod game;
pub mod location;
pub mod piece;
