pub mod basic;
pub mod hands;


pub use basic::{Card, CardError, Rank, Suit};
pub use hands::{Category, Evaluation, Hand, HandError, TieBreaker, HAND_SIZE};
