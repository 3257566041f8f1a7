use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::color::{checker, CheckerResult, Color, ColoringInstance};
use crate::config::SearchConfig;
use crate::search::domain::{filter_domains, Domain};
use crate::search::propagation::{propagate_not_equal, PropagationResult};
use crate::search::state::{Incumbent, Problem, SearchData, SearchState};
use crate::search::stopping::{StoppingCriterion, TimeStoppingCriterion};


/// outcome of the expansion of a search node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// the node was expanded, contains the number of children pushed
    Branched(usize),
    /// every vertex is colored
    Solution(Incumbent),
    /// infeasible node, or node that cannot improve the incumbent
    Dead,
    /// the time budget is exceeded, the whole search stops
    Halted,
}

/**
Constraint-propagation branch-and-bound for the graph coloring.

Vertices are colored in the order of the problem (decreasing degree). Each node:
 1. filters the domains (symmetry breaking on new colors, bound given by the incumbent)
 2. propagates the color of the last colored vertex and every singleton domain
 3. branches on the candidate colors of the next vertex

Pending nodes are stored in an explicit stack so the depth of the search is not limited by
the call stack.
*/
#[derive(Debug)]
pub struct CpColoringSearch<'a> {
    /// problem (read-only)
    problem: &'a Problem,
    /// data shared by the search nodes
    data: SearchData,
    /// nodes waiting to be expanded
    stack: Vec<SearchState>,
}

impl<'a> CpColoringSearch<'a> {
    /// creates a search, the clock starts now
    pub fn new(problem:&'a Problem, progress_interval:Duration) -> Self {
        Self {
            problem,
            data: SearchData::new(progress_interval),
            stack: Vec::new(),
        }
    }

    /** root node: the first vertex takes color 0 (any coloring can be renamed so that it does),
    the other vertices can take any color in [0,Δ(G)] (one domain shared by all of them).
    None if the problem has no vertex.
    */
    pub fn initial_state(&self) -> Option<SearchState> {
        let n = self.problem.nb_vertices();
        if n == 0 { return None; }
        let max_degree = self.problem.max_degree();
        Some(SearchState {
            level: 0,
            colors: vec![0],
            max_color_used: 0,
            domains: vec![Rc::new(Domain::full(max_degree)) ; n-1],
        })
    }

    /// expands a node, its children are pushed on the stack (smallest color on top)
    pub fn expand<Stop:StoppingCriterion>(&mut self, mut state:SearchState, stop:&Stop) -> Expansion {
        self.data.nb_nodes += 1;
        let now = Instant::now();
        if now.duration_since(self.data.last_progress) > self.data.progress_interval {
            info!(nb_nodes = self.data.nb_nodes, "progress...");
            self.data.last_progress = now;
        }
        // out of time: the incumbent is not proven optimal.
        // the search only stops once a first coloring exists
        if stop.is_finished() {
            self.data.optimal = false;
            if self.data.incumbent.is_some() { return Expansion::Halted; }
        }
        let best = self.data.best_nb_colors();
        if let Some(best_nb_colors) = best {
            if state.max_color_used + 1 >= best_nb_colors { return Expansion::Dead; }
        }
        if state.domains.is_empty() {
            let nb_colors = self.validate(&state.colors, state.max_color_used);
            return Expansion::Solution(Incumbent { colors: state.colors, nb_colors });
        }
        if !filter_domains(state.max_color_used, &mut state.domains, best) {
            return Expansion::Dead;
        }
        let nb_colored = state.nb_colored();
        let last = nb_colored - 1;
        if propagate_not_equal(
            self.problem, &state.colors, &mut state.domains, last, Some(state.colors[last])
        ) == PropagationResult::Violation {
            return Expansion::Dead;
        }
        // filtering may have created new singletons
        for i in 0..state.domains.len() {
            let forced = state.domains[i].forced_value();
            if propagate_not_equal(
                self.problem, &state.colors, &mut state.domains, nb_colored+i, forced
            ) == PropagationResult::Violation {
                return Expansion::Dead;
            }
        }
        let candidates:Vec<Color> = state.domains[0].iter().collect();
        for c in candidates.iter().rev() {
            self.stack.push(state.child(*c));
        }
        Expansion::Branched(candidates.len())
    }

    /// checks a complete coloring (search order) and returns its number of colors.
    ///
    /// # Panics
    /// if two adjacent vertices share a color, or if the colors used are not exactly
    /// 0..=max_color_used. The propagation makes this unreachable.
    fn validate(&self, colors:&[Color], max_color_used:Color) -> usize {
        match checker(self.problem, colors) {
            CheckerResult::Ok(nb_colors) if nb_colors == max_color_used + 1 => {
                debug!(nb_nodes = self.data.nb_nodes, nb_colors, "solution found");
                nb_colors
            },
            res => panic!(
                "invalid solution reached by the search (reason: {:?}, expected {} colors)",
                res, max_color_used + 1
            ),
        }
    }

    /// records a solution if it uses strictly less colors than the incumbent
    fn record(&mut self, solution:Incumbent) {
        if self.data.best_nb_colors().map_or(true, |best| solution.nb_colors < best) {
            info!(nb_nodes = self.data.nb_nodes, nb_colors = solution.nb_colors, "new best solution");
            self.data.primal_list.push(solution.nb_colors);
            self.data.incumbent = Some(solution);
        }
    }

    /// backtracking search
    ///
    /// pops each node of the stack and expands it, recording improving solutions,
    /// until the stack is empty or the stopping criterion is met
    pub fn dfs_search<Stop:StoppingCriterion>(&mut self, stopping_criterion:Stop) {
        if let Some(root) = self.initial_state() {
            self.stack.push(root);
        }
        while let Some(state) = self.stack.pop() {
            match self.expand(state, &stopping_criterion) {
                Expansion::Solution(solution) => self.record(solution),
                Expansion::Halted => self.stack.clear(),
                Expansion::Branched(_) | Expansion::Dead => {},
            }
        }
        info!(
            nb_nodes = self.data.nb_nodes,
            nb_colors = self.data.best_nb_colors().unwrap_or(0),
            optimal = self.data.optimal,
            "search finished"
        );
    }

    /// data of the search (incumbent, counters)
    pub fn data(&self) -> &SearchData { &self.data }

    /// number of nodes waiting on the stack
    pub fn nb_pending(&self) -> usize { self.stack.len() }

    /// consumes the search and returns its data
    pub fn into_data(self) -> SearchData { self.data }
}


/// statistics of a search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStats {
    /// number of nodes expanded
    pub nb_nodes: u64,
    /// time spent searching (seconds)
    pub time_searched: f64,
    /// number of colors of each solution found, in order
    pub primal_list: Vec<usize>,
}

/// coloring returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoringResult {
    /// colors[v]: color of vertex v (caller's vertex ids)
    pub colors: Vec<Color>,
    /// number of colors used. 0 means no coloring was produced
    pub nb_colors: usize,
    /// true if the search space was exhausted (the coloring is optimal)
    pub optimal: bool,
    /// statistics of the search
    pub stats: SearchStats,
}

/** colors an instance with the constraint-propagation search.
Stops after config.time_limit_secs seconds (once a first coloring is known).
*/
pub fn solve(inst:&dyn ColoringInstance, config:&SearchConfig) -> ColoringResult {
    solve_with(inst, config.progress_interval(), TimeStoppingCriterion::new(config.time_limit_secs))
}

/// same as solve, with any stopping criterion
pub fn solve_with<Stop:StoppingCriterion>(
    inst:&dyn ColoringInstance,
    progress_interval:Duration,
    stopping_criterion:Stop,
) -> ColoringResult {
    let problem = Problem::new(inst);
    let mut search = CpColoringSearch::new(&problem, progress_interval);
    search.dfs_search(stopping_criterion);
    let data = search.into_data();
    let stats = SearchStats {
        nb_nodes: data.nb_nodes,
        time_searched: data.start.elapsed().as_secs_f64(),
        primal_list: data.primal_list,
    };
    match data.incumbent {
        Some(best) => ColoringResult {
            colors: problem.to_original_order(&best.colors),
            nb_colors: best.nb_colors,
            optimal: data.optimal,
            stats,
        },
        None => ColoringResult { // no vertex to color
            colors: vec![0 ; inst.nb_vertices()],
            nb_colors: 0,
            optimal: false,
            stats,
        },
    }
}
