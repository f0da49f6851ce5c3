use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const ROOT: usize = 0;

/// Prefix tree node. Nodes live in the arena owned by [`Trie`] and refer to
/// each other by index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TrieNode {
    next: HashMap<char, usize>,
    terminal: bool,
    parent: Option<usize>,
}

/// Prefix dictionary used to walk a board one letter at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for w in words {
            trie.insert(w.as_ref());
        }
        trie
    }

    /// Adds a word to the trie. Inserting the empty string does nothing, so the
    /// root is never terminal. Re-inserting a word leaves the trie unchanged
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut curr = ROOT;
        for c in word.chars() {
            curr = match self.nodes[curr].next.get(&c) {
                Some(&idx) => idx,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(TrieNode {
                        next: HashMap::new(),
                        terminal: false,
                        parent: Some(curr),
                    });
                    self.nodes[curr].next.insert(c, idx);
                    idx
                }
            };
        }
        if !self.nodes[curr].terminal {
            self.nodes[curr].terminal = true;
            self.words += 1;
        }
    }

    pub fn root(&self) -> TrieCursor<'_> {
        TrieCursor {
            trie: self,
            idx: ROOT,
        }
    }

    /// Walks the whole prefix and returns the cursor at its last letter
    pub fn find(&self, prefix: &str) -> Option<TrieCursor<'_>> {
        prefix
            .chars()
            .try_fold(self.root(), |cursor, c| cursor.next(c))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, |c| c.is_terminal())
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks the arena links of a trie that came from outside, such as a cache
    /// file. Every edge must point at a node whose parent is the edge's source,
    /// and the word count must match the terminal nodes
    pub fn validate(&self) -> Result<()> {
        let corrupt = |msg: String| Err(Error::CorruptTrie(msg));
        match self.nodes.get(ROOT) {
            None => return corrupt("no root node".to_string()),
            Some(root) if root.parent.is_some() || root.terminal => {
                return corrupt("root node has a parent or ends a word".to_string())
            }
            Some(_) => {}
        }

        let mut terminals = 0;
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx != ROOT && node.parent.map_or(true, |p| p >= self.nodes.len()) {
                return corrupt(format!("node {} has no valid parent", idx));
            }
            for (&c, &child) in &node.next {
                match self.nodes.get(child) {
                    Some(n) if child != ROOT && n.parent == Some(idx) => {}
                    _ => return corrupt(format!("edge {:?} of node {} points at {}", c, idx, child)),
                }
            }
            if node.terminal {
                terminals += 1;
            }
        }
        if terminals != self.words {
            return corrupt(format!(
                "{} terminal nodes but {} words recorded",
                terminals, self.words
            ));
        }
        Ok(())
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}

/// Read-only position inside a [`Trie`]
#[derive(Debug, Clone, Copy)]
pub struct TrieCursor<'a> {
    trie: &'a Trie,
    idx: usize,
}

impl<'a> TrieCursor<'a> {
    fn node(&self) -> &'a TrieNode {
        &self.trie.nodes[self.idx]
    }

    pub fn has_child(&self, letter: char) -> bool {
        self.node().next.contains_key(&letter)
    }

    /// Descends along `letter`. Callers are expected to check [`has_child`]
    /// first; a missing edge is reported as [`Error::NotFound`]
    ///
    /// [`has_child`]: TrieCursor::has_child
    pub fn child(&self, letter: char) -> Result<TrieCursor<'a>> {
        self.next(letter).ok_or(Error::NotFound(letter))
    }

    pub fn next(&self, letter: char) -> Option<TrieCursor<'a>> {
        self.node().next.get(&letter).map(|&idx| TrieCursor {
            trie: self.trie,
            idx,
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.node().terminal
    }

    /// Steps back one letter. The root has no parent
    pub fn parent(&self) -> Option<TrieCursor<'a>> {
        self.node().parent.map(|idx| TrieCursor {
            trie: self.trie,
            idx,
        })
    }

    pub fn is_root(&self) -> bool {
        self.idx == ROOT
    }
}

impl PartialEq for TrieCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.idx == other.idx
    }
}

impl Eq for TrieCursor<'_> {}
