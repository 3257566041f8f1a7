use std::time::{Duration, Instant};

use crate::color::{Color, ColoringInstance, VertexId};
use crate::search::domain::SharedDomain;

/// vertex of the search problem
#[derive(Debug, Clone)]
pub struct ProblemVertex {
    /// id of the vertex in the instance given by the caller
    pub original_id: VertexId,
    /// position of the vertex in the search order
    pub search_id: VertexId,
    /// neighbors (search ids)
    pub neighbors: Vec<VertexId>,
}

/**
read-only search problem: the instance vertices relabelled by decreasing degree
(vertex 0 is the most constrained one). Ties keep the original order.
*/
#[derive(Debug, Clone)]
pub struct Problem {
    /// vertices[i]: vertex with search id i
    vertices: Vec<ProblemVertex>,
}

impl Problem {
    /// builds the search order of an instance
    pub fn new(inst:&dyn ColoringInstance) -> Self {
        let mut order:Vec<VertexId> = inst.vertices().collect();
        order.sort_by(|a,b| inst.degree(*b).cmp(&inst.degree(*a))); // stable
        let mut search_id = vec![0 ; inst.nb_vertices()];
        for (i,v) in order.iter().enumerate() {
            search_id[*v] = i;
        }
        let vertices = order.iter().enumerate().map(|(i,v)| {
            ProblemVertex {
                original_id: *v,
                search_id: i,
                neighbors: inst.neighbors(*v).iter().map(|u| search_id[*u]).collect(),
            }
        }).collect();
        Self { vertices }
    }

    /// vertex with search id i
    pub fn vertex(&self, i:VertexId) -> &ProblemVertex { &self.vertices[i] }

    /// vertices in search order
    pub fn vertices_in_order(&self) -> &[ProblemVertex] { &self.vertices }

    /** permutes a coloring given in search order to the original vertex order */
    pub fn to_original_order(&self, colors:&[Color]) -> Vec<Color> {
        let mut res = vec![0 ; colors.len()];
        for v in &self.vertices {
            res[v.original_id] = colors[v.search_id];
        }
        res
    }
}

impl ColoringInstance for Problem {
    fn nb_vertices(&self) -> usize { self.vertices.len() }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.vertices[u].neighbors }
}


/**
node of the search tree.
vertices 0..colors.len() are colored, domains[i] holds the candidates of vertex colors.len()+i.
Domains are shared with the parent node and copied when first modified.
*/
#[derive(Debug, Clone)]
pub struct SearchState {
    /// depth of the node
    pub level: usize,
    /// colors[v]: color of vertex v (search order)
    pub colors: Vec<Color>,
    /// largest color in colors
    pub max_color_used: Color,
    /// candidate colors of the vertices not colored yet
    pub domains: Vec<SharedDomain>,
}

impl SearchState {
    /// search id of the first uncolored vertex
    pub fn nb_colored(&self) -> usize { self.colors.len() }

    /** child node obtained by coloring the next vertex with c.
    Assumes domains is not empty. */
    pub fn child(&self, c:Color) -> Self {
        let mut colors = Vec::with_capacity(self.colors.len()+1);
        colors.extend_from_slice(&self.colors);
        colors.push(c);
        Self {
            level: self.level+1,
            colors,
            max_color_used: self.max_color_used.max(c),
            domains: self.domains[1..].to_vec(),
        }
    }
}


/// complete coloring found by the search (search order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent {
    /// colors[v]: color of vertex v (search order)
    pub colors: Vec<Color>,
    /// number of colors used (max color + 1)
    pub nb_colors: usize,
}

/// data shared by the whole search (lives for one solve call)
#[derive(Debug)]
pub struct SearchData {
    /// best solution found so far
    pub incumbent: Option<Incumbent>,
    /// number of nodes expanded
    pub nb_nodes: u64,
    /// beginning of the search
    pub start: Instant,
    /// last time a progress message was emitted
    pub last_progress: Instant,
    /// time between two progress messages
    pub progress_interval: Duration,
    /// false once the search stopped before exhausting the search space
    pub optimal: bool,
    /// number of colors of each incumbent, in the order they were found
    pub primal_list: Vec<usize>,
}

impl SearchData {
    /// fresh data, the clock starts now
    pub fn new(progress_interval:Duration) -> Self {
        let now = Instant::now();
        Self {
            incumbent: None,
            nb_nodes: 0,
            start: now,
            last_progress: now,
            progress_interval,
            optimal: true,
            primal_list: Vec::new(),
        }
    }

    /// number of colors of the incumbent (if any)
    pub fn best_nb_colors(&self) -> Option<usize> {
        self.incumbent.as_ref().map(|s| s.nb_colors)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::rc::Rc;

    use crate::search::domain::Domain;

    use crate::compact_instance::CompactInstance;

    #[test]
    fn test_problem_order_by_degree() {
        // star centered on 2, plus the edge (0,1)
        let inst = CompactInstance::from_edges(4, &[(2,0),(2,1),(2,3),(0,1)]).unwrap();
        let problem = Problem::new(&inst);
        let order:Vec<VertexId> = problem.vertices_in_order().iter().map(|v| v.original_id).collect();
        assert_eq!(order, vec![2,0,1,3]);
        for (i,v) in problem.vertices_in_order().iter().enumerate() {
            assert_eq!(v.search_id, i);
        }
        assert_eq!(problem.vertex(0).neighbors, vec![1,2,3]);
        assert_eq!(problem.vertex(3).neighbors, vec![0]);
    }

    #[test]
    fn test_problem_symmetric() {
        let inst = CompactInstance::from_edges(5, &[(0,1),(1,2),(2,3),(3,4),(4,0),(0,2)]).unwrap();
        let problem = Problem::new(&inst);
        for u in problem.vertices() {
            for v in problem.neighbors(u) {
                assert!(problem.are_adjacent(*v, u));
            }
        }
        assert_eq!(problem.nb_edges(), inst.nb_edges());
    }

    #[test]
    fn test_to_original_order() {
        let inst = CompactInstance::from_edges(3, &[(2,0),(2,1)]).unwrap();
        let problem = Problem::new(&inst);
        // search order: 2,0,1
        assert_eq!(problem.to_original_order(&[0,1,1]), vec![1,1,0]);
    }

    #[test]
    fn test_child() {
        let state = SearchState {
            level: 0,
            colors: vec![0],
            max_color_used: 0,
            domains: vec![
                Rc::new(Domain::full(2)), Rc::new(Domain::full(2)), Rc::new(Domain::singleton(1))
            ],
        };
        let child = state.child(1);
        assert_eq!(child.level, 1);
        assert_eq!(child.colors, vec![0,1]);
        assert_eq!(child.max_color_used, 1);
        assert_eq!(child.domains.len(), 2);
        assert_eq!(*child.domains[1], Domain::singleton(1));
        // the child points to the domains of its parent, nothing is copied
        assert!(Rc::ptr_eq(&child.domains[0], &state.domains[1]));
        assert!(Rc::ptr_eq(&child.domains[1], &state.domains[2]));
        assert_eq!(state.child(0).max_color_used, 0);
    }
}
