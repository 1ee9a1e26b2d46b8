//! Shared-prefix character graph (a DAG, not a tree): every inserted word is
//! a path of single-character edges from the root, and synonym sharing is
//! realized by pointing two distinct branches at the same terminal node.
//!
//! Ported from `fast_autocomplete.dwg._DawgNode`, generalized to an
//! arena (`Vec<Node>` addressed by `NodeId`) since Rust has no ergonomic
//! equivalent of Python's freely aliased object references for a mutable,
//! cyclic-looking (but acyclic) graph.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Index into the graph's node arena. Shared leaves are simply the same
/// `NodeId` appearing as a child of more than one parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

pub struct Node {
    /// The canonical string of tokens terminating here, if any.
    pub word: Option<String>,
    /// Back-pointer to the word key whose attributes should be used when
    /// this node is rendered as a result (set when reached via a partial
    /// synonym expansion, or a clean-synonym leaf merge).
    pub original_key: Option<String>,
    pub children: FxHashMap<char, NodeId>,
}

impl Node {
    fn empty() -> Self {
        Node { word: None, original_key: None, children: FxHashMap::default() }
    }

    /// The node's value for result purposes: `original_key` if set, else
    /// `word`.
    pub fn value(&self) -> Option<&str> {
        self.original_key.as_deref().or(self.word.as_deref())
    }
}

pub struct PrefixGraph {
    nodes: Vec<Node>,
}

pub const ROOT: NodeId = NodeId(0);

impl PrefixGraph {
    pub fn new() -> Self {
        PrefixGraph { nodes: vec![Node::empty()] }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn alloc(&mut self) -> NodeId {
        self.nodes.push(Node::empty());
        NodeId((self.nodes.len() - 1) as u32)
    }

    fn child_or_create(&mut self, from: NodeId, c: char) -> NodeId {
        if let Some(&child) = self.nodes[from.0 as usize].children.get(&c) {
            return child;
        }
        let child = self.alloc();
        self.nodes[from.0 as usize].children.insert(c, child);
        child
    }

    /// Walk/extend from root along each character of `word`, creating
    /// missing children, and mark the terminal node. Returns the terminal
    /// node id.
    pub fn insert(&mut self, word: &str, original_key: Option<&str>) -> NodeId {
        self.insert_branch(word, None, true, original_key)
    }

    /// The synonym-sharing primitive. When `leaf_node` is `Some`, all but
    /// the last character of `word` is inserted normally, then the
    /// last-character edge of the penultimate node is bound directly to
    /// `leaf_node` -- no new node is allocated for the final character.
    /// When `add_word` is `false`, `leaf_node` is not re-marked as a
    /// terminal (it already holds the canonical word it was built for).
    pub fn insert_branch(
        &mut self,
        word: &str,
        leaf_node: Option<NodeId>,
        add_word: bool,
        original_key: Option<&str>,
    ) -> NodeId {
        let chars: Vec<char> = word.chars().collect();
        match leaf_node {
            Some(leaf) => {
                debug_assert!(!chars.is_empty(), "synonym branch must have at least one character");
                let mut node = ROOT;
                for &c in &chars[..chars.len() - 1] {
                    node = self.child_or_create(node, c);
                }
                if add_word {
                    let n = &mut self.nodes[node.0 as usize];
                    n.word = Some(word.to_string());
                    n.original_key = original_key.map(|s| s.to_string());
                }
                let last = chars[chars.len() - 1];
                self.nodes[node.0 as usize].children.insert(last, leaf);
                leaf
            }
            None => {
                let mut node = ROOT;
                for &c in &chars {
                    node = self.child_or_create(node, c);
                }
                if add_word {
                    let n = &mut self.nodes[node.0 as usize];
                    n.word = Some(word.to_string());
                    n.original_key = original_key.map(|s| s.to_string());
                }
                node
            }
        }
    }

    /// Breadth-first traversal of the subtree rooted at `node`, yielding
    /// each distinct *value* at most once (de-duplicated by value, matching
    /// the reference: shared leaves make this a DAG, so de-duping only by
    /// node id would still double-count a node reachable via two paths
    /// with different decorations -- but the reference de-dupes by node
    /// identity and by value together, so we track both).
    pub fn descendants(&self, start: NodeId, size: usize) -> Vec<String> {
        self.descendant_nodes(start, size)
            .into_iter()
            .filter_map(|id| self.node(id).value().map(|v| v.to_string()))
            .collect()
    }

    /// Same breadth-first, dedup-by-value traversal as `descendants`, but
    /// yields node ids rather than their string values -- used by callers
    /// that need to inspect each descendant's own word record (the
    /// full-stop-word condition check).
    pub fn descendant_nodes(&self, start: NodeId, size: usize) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut seen_nodes: std::collections::HashSet<NodeId> = std::collections::HashSet::new();
        let mut seen_values: std::collections::HashSet<String> = std::collections::HashSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        seen_nodes.insert(start);
        for (_c, &child) in self.node(start).children.iter() {
            if seen_nodes.insert(child) {
                queue.push_back(child);
            }
        }

        while let Some(current) = queue.pop_front() {
            let node = self.node(current);
            if let Some(value) = node.value() {
                if seen_values.insert(value.to_string()) {
                    out.push(current);
                    if out.len() > size {
                        break;
                    }
                }
            }
            for (_c, &child) in node.children.iter() {
                if seen_nodes.insert(child) {
                    queue.push_back(child);
                }
            }
        }
        out
    }
}

impl Default for PrefixGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_walk_reaches_terminal_with_matching_word() {
        let mut g = PrefixGraph::new();
        g.insert("bmw", None);
        let mut node = ROOT;
        for c in "bmw".chars() {
            node = *g.node(node).children.get(&c).unwrap();
        }
        assert_eq!(g.node(node).word.as_deref(), Some("bmw"));
    }

    #[test]
    fn clean_synonym_shares_terminal_node_identity() {
        let mut g = PrefixGraph::new();
        let leaf = g.insert("bmw", None);
        g.insert_branch("beemer", Some(leaf), false, None);

        let walk = |g: &PrefixGraph, word: &str| -> NodeId {
            let mut node = ROOT;
            for c in word.chars() {
                node = *g.node(node).children.get(&c).unwrap();
            }
            node
        };
        assert_eq!(walk(&g, "bmw"), walk(&g, "beemer"));
    }

    #[test]
    fn descendants_deduplicates_shared_leaves() {
        let mut g = PrefixGraph::new();
        let leaf = g.insert("bmw e28", None);
        g.insert_branch("x e28", Some(leaf), false, None);
        let values = g.descendants(ROOT, 10);
        let count = values.iter().filter(|v| *v == "bmw e28").count();
        assert_eq!(count, 1);
    }
}
