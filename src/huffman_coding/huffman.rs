use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::tools::freq_count::FrequencyTable;

/// A node of the prefix-code tree.
///
/// Internal nodes carry the smallest symbol found among their leaves. That symbol
/// is never decoded; it only breaks ties between equal weights so that the
/// encoder and the decoder merge nodes in exactly the same order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        symbol: u8,
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node::Leaf { symbol, weight }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// The leaf symbol, or the tie-break key of an internal node.
    pub fn symbol(&self) -> u8 {
        match self {
            Node::Leaf { symbol, .. } | Node::Internal { symbol, .. } => *symbol,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// (left, right) for an internal node, None for a leaf.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }
}

/// Returns true if `a` sorts before `b`: lower weight first, then lower symbol.
pub fn comes_before(a: &Node, b: &Node) -> bool {
    a.weight() < b.weight() || (a.weight() == b.weight() && a.symbol() < b.symbol())
}

/// Merge two nodes under a new parent. The lesser node (per `comes_before`) goes
/// on the left whatever order the arguments arrive in.
pub fn combine(a: Node, b: Node) -> Node {
    let weight = a.weight() + b.weight();
    let symbol = a.symbol().min(b.symbol());
    let (left, right) = if comes_before(&a, &b) { (a, b) } else { (b, a) };
    Node::Internal {
        symbol,
        weight,
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// Heap entry. BinaryHeap pops the greatest item, so the order is reversed:
/// the node that comes before every other one is the "greatest".
struct Pending(Node);

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    /// Sort by decreasing weight and decreasing symbol value
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .weight()
            .cmp(&self.0.weight())
            .then_with(|| other.0.symbol().cmp(&self.0.symbol()))
    }
}

/// A complete prefix-code tree, rebuilt identically from identical frequencies.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for every symbol with a non-zero count. Returns None when
    /// there are no symbols at all.
    ///
    /// The two least nodes are merged until one remains. Nodes in the working set
    /// cover disjoint sets of leaves, so their (weight, symbol) keys never tie and
    /// the merge order is fully determined.
    pub fn build(freqs: &FrequencyTable) -> Option<HuffmanTree> {
        let mut heap = freqs
            .present()
            .map(|(sym, count)| Pending(Node::leaf(sym, count)))
            .collect::<BinaryHeap<Pending>>();

        // ...then pare it down to one single node with child nodes.
        while heap.len() > 1 {
            let (Some(Pending(first)), Some(Pending(second))) = (heap.pop(), heap.pop()) else {
                break;
            };
            trace!(
                "Merging ({}, {}) with ({}, {})",
                first.symbol(),
                first.weight(),
                second.symbol(),
                second.weight()
            );
            heap.push(Pending(combine(first, second)));
        }

        let root = heap.pop()?.0;
        let tree = HuffmanTree { root };
        debug!(
            "Built tree: weight {}, {} leaves, depth {}",
            tree.root.weight(),
            tree.leaf_count(),
            tree.depth()
        );
        Some(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the whole tree is one leaf, i.e. the input used one symbol.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push(left);
                    stack.push(right);
                }
                None => count += 1,
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A single leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                None => deepest = deepest.max(depth),
            }
        }
        deepest
    }
}
