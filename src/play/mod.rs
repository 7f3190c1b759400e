//! Playing games on a finished tree.
//!
//! - `MovePolicy`: who picks the next position (optimal or uniform random)
//! - `play_game` / `optimal_game`: walk one game to a terminal position
//! - `run_trials`: tabulate many optimal-vs-random games
//!
//! Nothing here writes to the tree; any number of playouts can read the
//! same store.

pub mod playout;
pub mod policy;
pub mod trials;

pub use playout::{optimal_game, play_game, GameTrace};
pub use policy::{MovePolicy, OptimalPolicy, UniformPolicy};
pub use trials::{run_trials, TrialConfig, TrialReport};
