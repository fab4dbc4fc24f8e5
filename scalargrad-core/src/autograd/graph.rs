use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::value::Value;
use log::trace;

/// Builds a topological ordering of every node reachable from `root`
/// through parent edges.
///
/// The result is in postorder: each node appears exactly once and after all
/// of its parents, so `root` is last. Reversing it gives the order in which
/// `backward()` applies the local gradient rules.
///
/// Visited nodes are tracked by [`NodeId`], never by value, so a node shared by
/// several consumers (a diamond) is emitted once. Parents are explored in
/// operand order, which makes the ordering deterministic for a given graph.
///
/// A `root` that lives in a different arena than `graph` yields an empty
/// ordering.
pub fn topological_sort(graph: &Graph, root: Value<'_>) -> Vec<NodeId> {
    if !std::ptr::eq(root.graph(), graph) {
        return Vec::new();
    }
    sort_nodes(&graph.nodes(), root.id())
}

/// Iterative depth-first postorder over `nodes`.
///
/// An explicit stack replaces recursion so long chains (for example a loss
/// summed over thousands of terms) cannot overflow the call stack. Each entry
/// carries a flag telling whether the node's parents have already been pushed;
/// the node is emitted when it is popped the second time.
pub(crate) fn sort_nodes(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted.push(id);
            continue;
        }
        if visited[id.0] {
            continue;
        }
        visited[id.0] = true;
        stack.push((id, true));
        // Reverse so the first operand is explored first.
        for parent in nodes[id.0].op.parents().iter().rev() {
            if !visited[parent.0] {
                stack.push((*parent, false));
            }
        }
    }

    trace!(
        "topological_sort: {} of {} nodes reachable from {}",
        sorted.len(),
        nodes.len(),
        root
    );
    sorted
}
