use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};
use crate::error::{ColorError, Result};

/** models a Graph Coloring instance (use this for small-medium sized instances).  */
#[derive(Debug)]
pub struct CompactInstance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl ColoringInstance for CompactInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        match &self.adj_matrix { // if the matrix representation does not exist, iterate over
            None => { self.adj_list[u].iter().any(|c| &v==c) },
            Some(matrix) => { matrix[u].contains(v) } // otherwise, use it
        }
    }

    fn nb_edges(&self) -> usize { self.m }
}


impl CompactInstance {

    /** constructor using an adjacency list.
    fails if a vertex is out of range, adjacent to itself, or if the adjacency is not symmetric.
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Result<Self> {
        let n = adj_list.len();
        let mut matrix = vec![BitSet::default(); n];
        for (u,l) in adj_list.iter().enumerate() {
            for v in l {
                if *v >= n { return Err(ColorError::VertexOutOfRange { vertex:*v, n }); }
                if *v == u { return Err(ColorError::SelfLoop(u)); }
                matrix[u].insert(*v);
            }
        }
        for (u,l) in adj_list.iter().enumerate() {
            for v in l {
                if !matrix[*v].contains(u) {
                    return Err(ColorError::AsymmetricAdjacency(u, *v));
                }
            }
        }
        // compute nb edges
        let m = matrix.iter().map(|row| row.len()).sum::<usize>() / 2; // m = (∑ d(v)) / 2
        Ok(Self { n, m, adj_list, adj_matrix:Some(matrix) })
    }

    /** builds an instance with n vertices from an edge list.
    each edge is inserted in both directions, duplicated edges are ignored.
    */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self> {
        let mut adj_list = vec![Vec::new(); n];
        let mut matrix = vec![BitSet::default(); n];
        for (u,v) in edges {
            for w in &[*u,*v] {
                if *w >= n { return Err(ColorError::VertexOutOfRange { vertex:*w, n }); }
            }
            if u == v { return Err(ColorError::SelfLoop(*u)); }
            if matrix[*u].insert(*v) {
                matrix[*v].insert(*u);
                adj_list[*u].push(*v);
                adj_list[*v].push(*u);
            }
        }
        let m = adj_list.iter().map(|l| l.len()).sum::<usize>() / 2;
        Ok(Self { n, m, adj_list, adj_matrix:Some(matrix) })
    }

    /// drops the adjacency matrix (saves memory on large sparse instances)
    pub fn drop_adj_matrix(&mut self) {
        self.adj_matrix = None;
    }

    /// adjacency lists of the instance
    pub fn adj_list(&self) -> &[Vec<VertexId>] { &self.adj_list }
}
