//! Topological sort with full cycle enumeration
//!
//! An explicit-stack state machine over the node arena. The stack is
//! seeded with leaf nodes and doubles as the active dependency path:
//! nodes are not popped when visited, so when a dependent turns out to be
//! settled already, walking the stack back to it yields the cycle.

use odr_domain::{Cycle, NotADagError};

use crate::resolver::node::Node;

/// Orders the arena for construction, or reports every cycle found.
///
/// On success the returned indices list every node exactly once, with each
/// node strictly after all providers it depends on.
pub(crate) fn topological_sort(nodes: &[Node]) -> Result<Vec<usize>, NotADagError> {
    let mut stack: Vec<usize> = (0..nodes.len()).filter(|&i| nodes[i].is_leaf()).collect();
    let mut sequence: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut next_sequence = 0;
    let mut assigned = 0;
    let mut cycles: Vec<Cycle> = Vec::new();

    while assigned != nodes.len() {
        // No leaf can reach the remaining nodes, so they sit on cycles.
        // Seed one arbitrarily and pretend it is a leaf: the cycles
        // recorded below prevent the walk from ever counting as a valid
        // sort, but they all get enumerated.
        if stack.is_empty() {
            if let Some(seed) = (0..nodes.len()).find(|&i| sequence[i].is_none()) {
                stack.push(seed);
            }
        }
        while let Some(&top) = stack.last() {
            // Nodes stay on the stack after being numbered to preserve
            // the active path; finding one again means we are
            // backtracking and can drop it.
            if sequence[top].is_some() {
                stack.pop();
                continue;
            }
            sequence[top] = Some(next_sequence);
            next_sequence += 1;
            assigned += 1;
            for &dependent in &nodes[top].dependents {
                if sequence[dependent].is_some() {
                    // The dependent was settled while still on the active
                    // path: everything from the top of the stack back to
                    // it forms one cycle.
                    let mut offers = Vec::new();
                    for &traced in stack.iter().rev() {
                        offers.push(nodes[traced].summary());
                        if traced == dependent {
                            break;
                        }
                    }
                    cycles.push(Cycle { offers });
                    continue;
                }
                if !ready(nodes, dependent, &sequence) {
                    continue;
                }
                stack.push(dependent);
            }
        }
    }

    if !cycles.is_empty() {
        return Err(NotADagError::new(cycles));
    }
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by_key(|&i| sequence[i]);
    Ok(order)
}

/// Whether every dependency of `node` already carries a sequence number.
fn ready(nodes: &[Node], node: usize, sequence: &[Option<usize>]) -> bool {
    nodes[node]
        .depends_on
        .iter()
        .flatten()
        .all(|&dependency| sequence[dependency].is_some())
}
