//! Constraint-propagation search for the graph coloring problem.

/// candidate colors of the uncolored vertices and their filtering
pub mod domain;

/// forward checking of the "not equal" constraints
pub mod propagation;

/// search problem, search nodes and shared search data
pub mod state;

/// stopping criteria (time budget)
pub mod stopping;

/// branch-and-bound search driven by an explicit stack
pub mod cp_backtrack;
