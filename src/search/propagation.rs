use std::rc::Rc;

use crate::color::{Color, VertexId};
use crate::search::domain::SharedDomain;
use crate::search::state::Problem;

/// outcome of a forward-checking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationResult {
    /// no domain changed (the source has more than one candidate, or no neighbor had its color)
    NotPropagated,
    /// at least one candidate was removed from a neighbor domain
    Propagated,
    /// a vertex lost all its candidates, or two adjacent vertices are forced to the same color
    Violation,
}

/**
propagates the "not equal" constraints of a vertex whose color is forced.
 - source: search id of the vertex (colored, or uncolored with a singleton domain)
 - forced_color: its only possible color. None means the domain is not a singleton (no-op)

The forced color is removed from the domains of the uncolored neighbors. A neighbor left
with a single candidate is propagated in turn (forward checking chained on singletons).
domains[i] is the domain of vertex colors.len()+i. A shared domain is copied before its
first modification.
*/
pub fn propagate_not_equal(
    problem:&Problem,
    colors:&[Color],
    domains:&mut [SharedDomain],
    source:VertexId,
    forced_color:Option<Color>,
) -> PropagationResult {
    let c0 = match forced_color {
        None => return PropagationResult::NotPropagated,
        Some(c) => c,
    };
    let nb_colored = colors.len();
    let mut changed = false;
    let mut to_propagate:Vec<(VertexId,Color)> = vec![(source, c0)];
    while let Some((v,c)) = to_propagate.pop() {
        for u in &problem.vertex(v).neighbors {
            if *u >= nb_colored { // uncolored neighbor: remove c from its candidates
                let shared = &mut domains[*u - nb_colored];
                if shared.contains(c) {
                    let domain = Rc::make_mut(shared);
                    domain.remove(c);
                    changed = true;
                    if domain.is_empty() { return PropagationResult::Violation; }
                    if let Some(forced) = domain.forced_value() {
                        to_propagate.push((*u, forced));
                    }
                }
            } else if colors[*u] == c {
                return PropagationResult::Violation;
            }
        }
    }
    if changed { PropagationResult::Propagated } else { PropagationResult::NotPropagated }
}
