//! Conway's Game of Life with cell aging.
//!
//! Each live cell remembers how many consecutive generations it has been
//! alive (capped at [`MAX_AGE`]) so a renderer can fade older cells. The
//! board is finite and does not wrap; cells past the edge are always dead.
//!
//! ```
//! use conway_aging::{Board, advance};
//!
//! let blinker = Board::new(5, 5)?.with_live_cells([(2, 1), (2, 2), (2, 3)]);
//! let next = advance(&blinker);
//! assert!(next.is_alive(1, 2) && next.is_alive(3, 2));
//! assert_eq!(next.get(2, 2), Some(2));
//! # Ok::<(), conway_aging::LifeError>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod generation;
pub mod neighbors;
pub mod patterns;
pub mod runner;
pub mod simulation;

pub use board::{Board, MAX_AGE};
pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use generation::{advance, advance_with_cap};
pub use neighbors::{count_live_neighbors, in_bounds};
pub use patterns::{Pattern, PATTERNS};
pub use runner::Runner;
pub use simulation::{LifeControls, Simulation, Snapshot, TickOutcome};
