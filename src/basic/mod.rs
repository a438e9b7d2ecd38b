pub use cell::{BoardDim, Cell};
pub use dir::Dir;

pub mod board;
mod cell;
mod dir;
