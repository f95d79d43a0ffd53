use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

/// Prefix tree built from a [`FrequencyTable`].
///
/// Rebuilding from an equal table always yields a structurally identical
/// tree, which is what lets the decoder mirror the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<HuffNode>,
}

/// The three shapes a tree can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeShape<'a> {
    /// No symbols were counted.
    Empty,
    /// Exactly one distinct symbol; the root is that leaf.
    Single(u8),
    /// Two or more distinct symbols; the root is internal.
    General(&'a HuffNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        byte: u8,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

/// A node waiting in the merge queue.
///
/// Ordered by weight, then by the order it entered the queue: leaves enter in
/// ascending symbol order, merged nodes get the next sequence number.
struct Queued {
    seq: usize,
    node: HuffNode,
}

impl Queued {
    fn key(&self) -> (u64, usize) {
        (self.node.weight(), self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(bytes))
    }

    pub fn from_frequencies(frequencies: &FrequencyTable) -> Self {
        let leaves: Vec<Queued> = frequencies
            .entries()
            .enumerate()
            .map(|(seq, (byte, count))| Queued {
                seq,
                node: HuffNode::new(byte, count),
            })
            .collect();
        let mut next_seq = leaves.len();

        // leaves are already sorted by sequence, but not by weight
        let mut heap = MinHeap::build(leaves);

        while heap.heap_size() > 1 {
            let (Ok(x), Ok(y)) = (heap.extract_min(), heap.extract_min()) else {
                break;
            };
            let merged = HuffNode::merge(x.node, y.node);
            trace!(weight = merged.weight(), seq = next_seq, "merged nodes");
            heap.insert(Queued {
                seq: next_seq,
                node: merged,
            });
            next_seq += 1;
        }

        let root = heap.into_single().ok().map(|queued| queued.node);
        let tree = HuffmanTree { root };
        debug!(
            symbols = frequencies.distinct(),
            depth = tree.depth(),
            "built huffman tree"
        );
        tree
    }

    pub fn root(&self) -> Option<&HuffNode> {
        self.root.as_ref()
    }

    pub fn shape(&self) -> TreeShape<'_> {
        match &self.root {
            None => TreeShape::Empty,
            Some(HuffNode::Leaf { byte, .. }) => TreeShape::Single(*byte),
            Some(node @ HuffNode::Internal { .. }) => TreeShape::General(node),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total weight, i.e. the number of symbols the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, HuffNode::weight)
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::depth)
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::leaf_count)
    }
}

impl From<&FrequencyTable> for HuffmanTree {
    fn from(frequencies: &FrequencyTable) -> Self {
        HuffmanTree::from_frequencies(frequencies)
    }
}

impl HuffNode {
    pub fn new(b: u8, f: u64) -> Self {
        HuffNode::Leaf { weight: f, byte: b }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Joins two nodes; `a` becomes the left (0) child.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    /// Child reached by following `bit` (false = left, true = right).
    /// Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            HuffNode::Leaf { byte, weight } => {
                writeln!(
                    f,
                    "{}{}-> Leaf: {:?} ({}) [weight: {}]",
                    indent, label, *byte as char, byte, weight
                )
            }
            HuffNode::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{}{}-> Internal [weight: {}]", indent, label, weight)?;
                left.fmt_node(f, depth + 1, "L")?;
                right.fmt_node(f, depth + 1, "R")
            }
        }
    }
}

/// Indented dump of the tree structure, one node per line.
impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman Tree Structure:")?;
        match &self.root {
            None => writeln!(f, "(empty)"),
            Some(root) => root.fmt_node(f, 0, "root"),
        }
    }
}
