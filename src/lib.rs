//! Evolutionary N-Queens solver.
//!
//! A generational genetic algorithm over permutation-encoded boards:
//! index = column, value = row, so row and column attacks are impossible by
//! construction and fitness only counts diagonal conflicts.
//!
//! # Components
//!
//! - [`Board`]: permutation individual with the conflict/fitness model
//! - [`SolverConfig`]: clamping builder for run parameters
//! - [`operators`]: order crossover (OX) and swap mutation
//! - [`selection`]: tournament parent selection
//! - [`Solver`]: population, elitist generation loop, and the
//!   run/step/stop state machine
//! - [`SolverEvent`]/[`EventSink`]: the snapshot stream a host renders from
//!
//! # Example
//!
//! ```
//! use queens_ga::{Solver, SolverConfig, SolverEvent};
//!
//! let config = SolverConfig::default()
//!     .with_board_size(8)
//!     .with_max_generations(500)
//!     .with_seed(42);
//!
//! let mut solver = Solver::new(config.clone(), Vec::<SolverEvent>::new());
//! solver.initialize(config);
//! solver.solve();
//!
//! // The run always terminates: solved, or out of budget.
//! assert!(!solver.is_running());
//! assert!(solver.generation() <= 500);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod board;
mod config;
mod engine;
mod events;
pub mod operators;
pub mod selection;

pub use board::{max_fitness, Board, FitnessRecord};
pub use config::{SolverConfig, MAX_POPULATION, MIN_POPULATION};
pub use engine::{PerformanceStats, RunMode, Solver, StopHandle};
pub use events::{EventSink, NullSink, Snapshot, SolverEvent};
