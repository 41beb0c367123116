//! Cached game tree with incremental subtree reuse
//!
//! [`GameTree`] owns the root of a lazily-expanded game tree, tracks the
//! node matching real game progress, and keeps a board mirror in lockstep
//! with the moves committed so far. The mirror doubles as scratch space
//! during search: hypothetical moves are applied and reverted around each
//! descent, so the mirror always equals real play whenever control returns
//! to the caller.
//!
//! The tree survives across turns: a `decide` result committed through
//! `update` advances the current node into the subtree that was just
//! searched, and the cached children (including already-proven Terminal
//! outcomes and cut-off Pruned branches) are reused verbatim by the next
//! search. One consequence worth knowing: calling `decide` again at the
//! same node with a *different* depth limit reuses the stored scores of
//! Terminal/Pruned children without recomputation. That is by design, not
//! a fault.

mod node;

use node::{Arena, NodeId, Status};

use crate::board::{Board, Pos, Stone};
use crate::error::{Error, Result};
use crate::eval::Evaluate;

/// Move-selection engine state for one ongoing game.
///
/// Not designed for concurrent access; one instance serves one game.
///
/// # Example
///
/// ```
/// use gomoku::{GameTree, Heuristic, Pos};
///
/// let mut tree = GameTree::new(Heuristic);
/// let first = tree.decide(2).unwrap();
/// tree.update(first).unwrap();       // commit our own move
/// tree.update(Pos::new(0, 0)).unwrap(); // commit the opponent's reply
/// ```
pub struct GameTree<E> {
    arena: Arena,
    current: NodeId,
    board: Board,
    evaluator: E,
}

impl<E: Evaluate> GameTree<E> {
    /// Empty-board tree; Black is to move.
    pub fn new(evaluator: E) -> Self {
        let arena = Arena::new();
        let current = arena.root();
        Self {
            arena,
            current,
            board: Board::new(),
            evaluator,
        }
    }

    /// Stone that the next `update` will place.
    #[inline]
    pub fn to_play(&self) -> Stone {
        self.arena.node(self.current).stone_to_play()
    }

    /// Number of real moves committed so far.
    #[inline]
    pub fn ply(&self) -> u16 {
        self.arena.node(self.current).depth
    }

    /// Board mirror of real play. Identical to replaying the committed
    /// move sequence from an empty board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Record a real move: place the mover's stone (depth parity decides
    /// the color) in the mirror and advance the current node, expanding
    /// lazily. Must be called for both sides' moves, strictly alternating.
    pub fn update(&mut self, pos: Pos) -> Result<()> {
        let stone = self.arena.node(self.current).stone_to_play();
        // Child lookup runs against the pre-move board so that the node's
        // expansion matches the cells that were empty at this position.
        let child = self.arena.get_child(self.current, pos, &self.board)?;
        self.board.set(pos, stone);
        self.current = child;
        Ok(())
    }

    /// Search from the current node and return the chosen move without
    /// committing it; follow with [`GameTree::update`] to advance.
    ///
    /// The conventional horizon is 2 plies, but any positive depth is
    /// accepted. Fails with [`Error::GameOver`] when the current position
    /// is a proven forced outcome or the board is full.
    pub fn decide(&mut self, depth_limit: u32) -> Result<Pos> {
        assert!(depth_limit > 0, "depth limit must be positive");
        if self.arena.node(self.current).status == Status::Terminal {
            return Err(Error::GameOver);
        }

        let Self {
            arena,
            board,
            evaluator,
            current,
        } = self;
        arena
            .find_best_step(*current, board, depth_limit, evaluator)
            .ok_or(Error::GameOver)
    }

    /// Discard every branch of the previous node except the one leading to
    /// the current position, returning their memory to the arena.
    ///
    /// Sibling branches of a committed move can no longer occur, so this
    /// is safe to call after any `update`; the search protocol itself
    /// never calls it.
    pub fn discard_siblings(&mut self) {
        let Some(parent) = self.arena.node(self.current).parent else {
            return;
        };
        let keep = self.arena.node(parent).edge_pos(self.current);
        self.arena.discard_subtree(parent, keep);
    }
}
