use crate::node::{Node, NodeId, Op};

impl Op {
    /// Applies this operation's local gradient rule for the node `out`.
    ///
    /// Reads `out`'s current `grad` (\( \frac{dL}{d\text{out}} \)) and adds
    /// \( \frac{dL}{d\text{out}} \cdot \frac{d\text{out}}{d\text{parent}_i} \)
    /// into the `grad` of each parent. Every parent listed by
    /// [`Op::parents`] receives exactly one contribution per occurrence, and no
    /// other node is touched. Contributions are summed, never assigned, so a
    /// node that feeds several consumers (or the same consumer twice) ends up
    /// with the total over all paths.
    ///
    /// Leaves have nothing to propagate.
    pub(crate) fn backward(&self, nodes: &mut [Node], out: NodeId) {
        let (out_data, out_grad) = {
            let node = &nodes[out.0];
            (node.data, node.grad)
        };

        match *self {
            Op::Leaf => {}
            Op::Add([a, b]) => {
                nodes[a.0].grad += out_grad;
                nodes[b.0].grad += out_grad;
            }
            Op::Mul([a, b]) => {
                let (a_data, b_data) = (nodes[a.0].data, nodes[b.0].data);
                nodes[a.0].grad += b_data * out_grad;
                nodes[b.0].grad += a_data * out_grad;
            }
            Op::Pow {
                base: [a],
                exponent,
            } => {
                let a_data = nodes[a.0].data;
                nodes[a.0].grad += exponent * a_data.powf(exponent - 1.0) * out_grad;
            }
            Op::Exp([a]) => {
                nodes[a.0].grad += out_data * out_grad;
            }
            Op::Tanh([a]) => {
                nodes[a.0].grad += (1.0 - out_data * out_data) * out_grad;
            }
            Op::Relu([a]) => {
                if out_data > 0.0 {
                    nodes[a.0].grad += out_grad;
                }
            }
        }
    }
}
