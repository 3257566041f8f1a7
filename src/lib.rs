//! Exact graph coloring by constraint propagation and branch-and-bound

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance base trait, solutions and checker
pub mod color;

/// error type of the crate
pub mod error;

/// search parameters
pub mod config;

/// compact instance (adjacency lists, optional adjacency matrix)
pub mod compact_instance;

/// read DIMACS instances
pub mod dimacs;

/// read edge-list instances, write results
pub mod edge_list;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the graph coloring problem
pub mod search;

pub use search::cp_backtrack::{solve, ColoringResult};
