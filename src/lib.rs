//! Gomoku engine built on a cached minimax game tree
//!
//! A five-in-a-row playing engine whose move selection runs a depth-limited
//! minimax search over a lazily-expanded game tree. The tree is not rebuilt
//! between turns: real moves advance a cursor into the cached structure, so
//! subtrees explored while answering one turn are reused verbatim on the
//! next.
//!
//! # Architecture
//!
//! - [`board`]: 15x15 board over per-color bitboards
//! - [`rules`]: five-in-a-row detection and winner query
//! - [`eval`]: static position evaluation behind the [`Evaluate`] trait
//! - [`tree`]: the cached game tree, search and pruning
//! - [`engine`]: per-turn orchestration for one playing side
//!
//! # Search
//!
//! Scores fold with max on Black's plies and min on White's. While a node
//! is being searched, its running score is compared against its direct
//! parent's score after every fold; once the parent's score dominates, the
//! node is cut off and its remaining siblings are skipped. The cutoff is
//! single-sided (no alpha/beta window is threaded through the ancestor
//! chain), so it cuts less than classical alpha-beta but never changes
//! which move the root selects.
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Engine, Stone};
//!
//! let mut engine = Engine::new(2);
//!
//! // The engine opens as Black.
//! let opening = engine.respond(None).unwrap();
//! assert_eq!(engine.board().get(opening), Stone::Black);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod tree;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{Engine, DEFAULT_DEPTH_LIMIT};
pub use error::{Error, Result};
pub use eval::{Evaluate, Heuristic, FIRST_WIN, SECOND_WIN};
pub use rules::check_winner;
pub use tree::GameTree;
