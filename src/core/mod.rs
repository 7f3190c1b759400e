//! Core types: players, boards, and the playout RNG.
//!
//! These are shared by the rule sets, the game tree, and the playout
//! policies. Nothing here knows about winning lines or tree structure.

pub mod board;
pub mod player;
pub mod rng;

pub use board::Board;
pub use player::Player;
pub use rng::PlayoutRng;
