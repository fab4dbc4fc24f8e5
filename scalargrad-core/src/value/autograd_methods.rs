use crate::autograd::graph::sort_nodes;
use crate::value::Value;
use log::{debug, trace};

impl<'g> Value<'g> {
    /// Performs the backward pass starting from this node.
    ///
    /// Computes \( \frac{\partial\, \text{self}}{\partial n} \) for every node
    /// \( n \) reachable from `self` and adds it into `n.grad`:
    /// 1. orders the reachable nodes topologically (parents first),
    /// 2. sets `self.grad` to 1.0,
    /// 3. applies each node's local rule in reverse order, consumers before
    ///    producers, so a node's grad is complete before it is propagated.
    ///
    /// Other nodes keep whatever grad they already hold, so running two passes
    /// over overlapping graphs sums their results. Call
    /// [`Graph::zero_grad`](crate::graph::Graph::zero_grad) in between to
    /// start fresh. Backward on a leaf just sets its grad to 1.0.
    pub fn backward(&self) {
        let mut nodes = self.graph.nodes_mut();
        let order = sort_nodes(&nodes, self.id);
        debug!(
            "backward: terminal node {} reaches {} nodes",
            self.id,
            order.len()
        );

        nodes[self.id.0].grad = 1.0;
        for &id in order.iter().rev() {
            let op = nodes[id.0].op;
            trace!("backward: {} op={} grad={}", id, op, nodes[id.0].grad);
            op.backward(&mut nodes, id);
        }
    }

    /// Resets this node's gradient to 0.0.
    pub fn zero_grad(&self) {
        self.graph.node_mut(self.id).grad = 0.0;
    }

    /// Every node reachable from this one, each after all of its parents.
    /// This node comes last.
    pub fn topological_order(&self) -> Vec<Value<'g>> {
        let nodes = self.graph.nodes();
        sort_nodes(&nodes, self.id)
            .into_iter()
            .map(|id| Value::from_parts(self.graph, id))
            .collect()
    }
}
