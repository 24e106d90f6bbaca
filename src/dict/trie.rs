//! Arena-backed frequency trie
//!
//! Every node lives in one growable table owned by [`TrieStore`]; children and
//! parent links are indices into that table. Words are stored exactly as
//! inserted: normalization only happens at query time.

use crate::dict::types::{Node, NodeId};
use anyhow::{Result, bail};

/// Owner of every node of one dictionary
#[derive(Debug, Clone, Default)]
pub struct TrieStore {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    word_count: usize,
}

impl TrieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`, or raise its frequency if it is already present.
    ///
    /// The stored frequency becomes `min(255, max(existing, frequency))`.
    pub fn insert_word(&mut self, word: &str, frequency: u32) -> Result<()> {
        if word.is_empty() {
            bail!("cannot insert an empty word");
        }
        let node = self.resolve_or_create(word);
        self.mark_terminal(node);
        self.nodes[node as usize].merge_frequency(frequency);
        Ok(())
    }

    /// Walk `word`, creating missing nodes, and return its terminal node.
    /// Returns `None` for an empty word.
    pub(crate) fn resolve_word(&mut self, word: &str) -> Option<NodeId> {
        if word.is_empty() {
            return None;
        }
        let node = self.resolve_or_create(word);
        self.mark_terminal(node);
        Some(node)
    }

    fn resolve_or_create(&mut self, word: &str) -> NodeId {
        let mut parent: Option<NodeId> = None;
        let mut current = 0;
        for c in word.chars() {
            current = match self.find_child(parent, c) {
                Some(id) => id,
                None => self.push_child(parent, c),
            };
            parent = Some(current);
        }
        current
    }

    fn mark_terminal(&mut self, id: NodeId) {
        let node = &mut self.nodes[id as usize];
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
    }

    fn push_child(&mut self, parent: Option<NodeId>, c: char) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(c, parent));
        match parent {
            Some(p) => self.nodes[p as usize].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    fn find_child(&self, parent: Option<NodeId>, c: char) -> Option<NodeId> {
        self.children_of(parent)
            .iter()
            .copied()
            .find(|&id| self.nodes[id as usize].code == c)
    }

    /// Children of `parent`, or the roots when `parent` is `None`
    #[inline]
    pub fn children_of(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(p) => &self.nodes[p as usize].children,
            None => &self.roots,
        }
    }

    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    /// Exact lookup of a stored word's terminal node
    pub fn find_terminal(&self, word: &str) -> Option<NodeId> {
        if word.is_empty() {
            return None;
        }
        let mut parent: Option<NodeId> = None;
        for c in word.chars() {
            parent = Some(self.find_child(parent, c)?);
        }
        parent.filter(|&id| self.nodes[id as usize].terminal)
    }

    /// Frequency of a stored word, `None` if it was never inserted
    pub fn word_frequency(&self, word: &str) -> Option<u32> {
        self.find_terminal(word)
            .map(|id| self.nodes[id as usize].frequency)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_terminal(word).is_some()
    }

    /// Rebuild the word ending at `id` by walking parent links
    pub fn word_at(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id as usize];
            chars.push(node.code);
            current = node.parent;
        }
        chars.iter().rev().collect()
    }

    /// Number of distinct terminal words
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.word_count = 0;
    }
}
