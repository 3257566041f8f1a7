use bit_set::BitSet;

/** Vertex Id */
pub type VertexId = usize;

/** Color (0-based) */
pub type Color = usize;

/** Solution of a graph coloring problem
(represented as a partition, solution[c]: vertices colored with c).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** models a graph coloring instance (undirected, adjacency is symmetric) */
pub trait ColoringInstance: std::fmt::Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// number of vertices adjacent to u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v are adjacent. O(Δ(G)) unless the implementation knows better
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.neighbors(u).iter().any(|w| *w == v)
    }

    /// iterates over the vertex ids
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// number of edges (m = (∑ d(v)) / 2)
    fn nb_edges(&self) -> usize {
        self.vertices().map(|u| self.degree(u)).sum::<usize>() / 2
    }

    /// maximum degree Δ(G) (0 for an empty graph)
    fn max_degree(&self) -> usize {
        self.vertices().map(|u| self.degree(u)).max().unwrap_or(0)
    }

    /// logs some statistics of the instance
    fn display_statistics(&self) {
        let min_degree = self.vertices().map(|u| self.degree(u)).min().unwrap_or(0);
        tracing::info!(
            nb_vertices = self.nb_vertices(),
            nb_edges = self.nb_edges(),
            min_degree,
            max_degree = self.max_degree(),
            "instance statistics"
        );
    }
}

/// outcome of the solution checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid coloring, contains the number of distinct colors used
    Ok(usize),
    /// the coloring does not give exactly one color per vertex
    WrongLength {
        /// number of vertices of the instance
        expected: usize,
        /// number of colors given
        found: usize,
    },
    /// two adjacent vertices share a color
    Conflict(VertexId, VertexId),
}

/**
checks a coloring given as colors[v] for every vertex v.
returns the number of distinct colors if the coloring is feasible.
*/
pub fn checker(inst:&dyn ColoringInstance, colors:&[Color]) -> CheckerResult {
    if colors.len() != inst.nb_vertices() {
        return CheckerResult::WrongLength { expected: inst.nb_vertices(), found: colors.len() };
    }
    let mut used = BitSet::new();
    for u in inst.vertices() {
        used.insert(colors[u]);
        for v in inst.neighbors(u) {
            if colors[u] == colors[*v] { return CheckerResult::Conflict(u, *v); }
        }
    }
    CheckerResult::Ok(used.len())
}

/// converts colors[v] to a partition of the vertices (res[c]: vertices colored with c)
pub fn color_classes(colors:&[Color]) -> Solution {
    let nb_colors = colors.iter().max().map_or(0, |c| c+1);
    let mut res = vec![vec![] ; nb_colors];
    for (v,c) in colors.iter().enumerate() {
        res[*c].push(v);
    }
    res
}

/** writes a string encoding a partition (one line per color, listing its vertices) */
pub fn classes_to_string(solution:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for e in solution {
        for v in e {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}
