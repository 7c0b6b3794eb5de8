mod access;
mod just;
mod ordering;
mod pack_core;
mod piece;
mod search;
mod structural;

pub use just::Just;
pub use pack_core::TypePack;
pub use piece::{concat, concatenate, is_equal, is_not_equal, Piece};
pub use structural::MAXIMUM_GENERATE_SIZE;
