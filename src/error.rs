use thiserror::Error;

use crate::color::VertexId;

/// Errors raised while building instances, reading files or loading a configuration.
/// Dead branches and timeouts of the search are not errors.
#[derive(Debug, Error)]
pub enum ColorError {
    /// file could not be read or written
    #[error("unable to access {path}: {source}")]
    Io {
        /// file concerned
        path: String,
        /// underlying error
        #[source]
        source: std::io::Error,
    },

    /// malformed instance file
    #[error("unable to parse {format} input: {msg}")]
    Parse {
        /// format being read ("edge list", "DIMACS")
        format: &'static str,
        /// parser diagnostic
        msg: String,
    },

    /// the edge count announced in a header does not match the edges read
    #[error("header announces {expected} edges, {found} read")]
    EdgeCountMismatch {
        /// declared number of edges
        expected: usize,
        /// number of edges actually read
        found: usize,
    },

    /// an edge refers to a vertex outside [0,n)
    #[error("vertex {vertex} out of range (the graph has {n} vertices)")]
    VertexOutOfRange {
        /// offending vertex
        vertex: VertexId,
        /// number of vertices
        n: usize,
    },

    /// a vertex is adjacent to itself (no coloring exists)
    #[error("self loop on vertex {0}")]
    SelfLoop(VertexId),

    /// u lists v as a neighbor but v does not list u
    #[error("asymmetric adjacency: {0} lists {1} but not the reverse")]
    AsymmetricAdjacency(VertexId, VertexId),

    /// command-line value that cannot be interpreted
    #[error("invalid value for {name}: {value}")]
    InvalidArgument {
        /// argument name
        name: &'static str,
        /// value given
        value: String,
    },

    /// search configuration file is invalid
    #[error("invalid search configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type used by the fallible operations of the crate
pub type Result<T> = std::result::Result<T, ColorError>;
