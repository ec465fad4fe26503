//! Building and compacting the glyph name trie.
//!
//! Names are first inserted one byte per edge. Compaction then merges every
//! chain of value-less, single-child nodes into one node whose letter is the
//! concatenation of the chain, so that only branch points and nodes that
//! carry a value remain. For example, the mapping
//!
//! ```text
//! A        => 1
//! Aacute   => 6
//! Abalon   => 2
//! Abstract => 4
//! ```
//!
//! compacts to
//!
//! ```text
//! A => 1
//! |
//! +-acute => 6
//! |
//! +-b
//!   |
//!   +-alon => 2
//!   |
//!   +-stract => 4
//! ```

use crate::error::Error;

/// A handle to a node in a [`Trie`]'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(u32);

impl NodeId {
    fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single node of the trie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Node {
    /// The label of the edge leading to this node; empty only for the root.
    pub(crate) letter: Vec<u8>,
    pub(crate) value: Option<u16>,
    /// Children keyed by the first byte of their letter, sorted by that byte.
    pub(crate) children: Vec<(u8, NodeId)>,
}

/// Collects `(name, value)` pairs before they are compiled.
///
/// # Examples
///
/// ```
/// use write_psnames::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.insert("cent", 0x00A2).unwrap();
/// builder.insert("centigrade", 0x2103).unwrap();
/// let bytes = builder.build().encode().unwrap();
/// assert_eq!(read_psnames::lookup(&bytes, b"cent"), Some(0x00A2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrieBuilder {
    trie: Trie,
}

/// A trie of glyph names, ready to be encoded.
///
/// Nodes live in an arena and refer to each other by index; the root is
/// always the first node.
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<Node>,
    /// The number of names with a value.
    len: usize,
}

impl TrieBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping from `name` to `value`.
    ///
    /// Inserting the same pair more than once is allowed, but inserting a
    /// name that is already mapped to a different value is an error. Names
    /// must be non-empty 7-bit ASCII, and `value` must not be zero.
    pub fn insert(&mut self, name: &str, value: u16) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if let Some((position, byte)) = name.bytes().enumerate().find(|(_, b)| !b.is_ascii()) {
            return Err(Error::InvalidByte {
                name: name.to_owned(),
                byte,
                position,
            });
        }
        if value == 0 {
            return Err(Error::ZeroValue {
                name: name.to_owned(),
            });
        }

        let node = name
            .bytes()
            .fold(Trie::ROOT, |node, byte| self.trie.child_or_insert(node, byte));
        match self.trie.node(node).value {
            Some(existing) if existing != value => Err(Error::ConflictingValue {
                name: name.to_owned(),
                existing,
                new: value,
            }),
            Some(_) => Ok(()),
            None => {
                self.trie.node_mut(node).value = Some(value);
                self.trie.len += 1;
                Ok(())
            }
        }
    }

    /// Insert each pair in order, stopping at the first error.
    pub fn extend_from<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a str, u16)>,
    ) -> Result<(), Error> {
        pairs
            .into_iter()
            .try_for_each(|(name, value)| self.insert(name, value))
    }

    /// The number of distinct names inserted so far.
    pub fn len(&self) -> usize {
        self.trie.len
    }

    /// `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.trie.len == 0
    }

    /// Compact the trie, finishing the build.
    pub fn build(mut self) -> Trie {
        let before = self.trie.node_count();
        self.trie.compact();
        log::debug!(
            "compacted {} names from {before} to {} nodes",
            self.trie.len,
            self.trie.node_count()
        );
        self.trie
    }

    /// Finish the build without compacting, leaving one node per byte.
    ///
    /// The result encodes to a larger table that answers every lookup the
    /// same way as the compacted one.
    pub fn build_uncompacted(self) -> Trie {
        self.trie
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie {
            nodes: vec![Node::default()],
            len: 0,
        }
    }
}

impl Trie {
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// The number of names stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the trie stores no names.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes reachable from the root, including the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend(self.node(id).children.iter().map(|(_, child)| *child));
        }
        count
    }

    /// Every stored `(name, value)` pair, in ascending byte order of name.
    pub fn entries(&self) -> Vec<(String, u16)> {
        let mut result = Vec::with_capacity(self.len);
        let mut prefix = Vec::new();
        self.collect_entries(Self::ROOT, &mut prefix, &mut result);
        result
    }

    fn collect_entries(&self, id: NodeId, prefix: &mut Vec<u8>, out: &mut Vec<(String, u16)>) {
        let node = self.node(id);
        let len = prefix.len();
        prefix.extend_from_slice(&node.letter);
        if let Some(value) = node.value {
            // names are validated as ASCII on insertion
            out.push((String::from_utf8_lossy(prefix).into_owned(), value));
        }
        for (_, child) in &node.children {
            self.collect_entries(*child, prefix, out);
        }
        prefix.truncate(len);
    }

    /// Render the tree as indented text, one node per line.
    ///
    /// This is intended for debugging.
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        self.write_debug(Self::ROOT, &mut String::new(), &mut out);
        out
    }

    fn write_debug(&self, id: NodeId, margin: &mut String, out: &mut String) {
        use std::fmt::Write;

        let node = self.node(id);
        out.push_str(margin);
        out.push_str("+-");
        if node.letter.is_empty() {
            out.push_str("<NOLETTER>");
        } else {
            out.extend(node.letter.iter().map(|b| *b as char));
        }
        if let Some(value) = node.value {
            // writing to a String can't fail
            let _ = write!(out, " => 0x{value:04X}");
        }
        out.push('\n');

        let len = margin.len();
        margin.push_str("| ");
        for (_, child) in &node.children {
            self.write_debug(*child, margin, out);
        }
        margin.truncate(len);
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.idx()]
    }

    /// Return the child of `parent` keyed by `byte`, creating it if needed.
    fn child_or_insert(&mut self, parent: NodeId, byte: u8) -> NodeId {
        match self
            .node(parent)
            .children
            .binary_search_by_key(&byte, |(key, _)| *key)
        {
            Ok(idx) => self.node(parent).children[idx].1,
            Err(idx) => {
                let id = NodeId(self.nodes.len() as u32);
                self.nodes.push(Node {
                    letter: vec![byte],
                    ..Default::default()
                });
                self.node_mut(parent).children.insert(idx, (byte, id));
                id
            }
        }
    }

    fn compact(&mut self) {
        self.compact_node(Self::ROOT);
        // merged children are left behind as empty nodes; drop them
        let mut old = std::mem::take(&mut self.nodes);
        self.nodes = Vec::with_capacity(old.len());
        Self::move_subtree(&mut old, Self::ROOT, &mut self.nodes);
    }

    /// Move the subtree at `id` from `old` to the end of `new`, in pre-order.
    fn move_subtree(old: &mut [Node], id: NodeId, new: &mut Vec<Node>) -> NodeId {
        let new_id = NodeId(new.len() as u32);
        let mut node = std::mem::take(&mut old[id.idx()]);
        let children = std::mem::take(&mut node.children);
        new.push(node);
        let children = children
            .into_iter()
            .map(|(byte, child)| (byte, Self::move_subtree(old, child, new)))
            .collect();
        new[new_id.idx()].children = children;
        new_id
    }

    /// Merge single-child chains below (and including) `id`.
    ///
    /// The root is never merged: its empty letter is what the decoder
    /// expects to find at the start of the table.
    fn compact_node(&mut self, id: NodeId) {
        let children = self
            .node(id)
            .children
            .iter()
            .map(|(_, child)| *child)
            .collect::<Vec<_>>();
        for child in children {
            self.compact_node(child);
        }

        let node = self.node(id);
        if id == Self::ROOT || node.value.is_some() || node.children.len() != 1 {
            return;
        }
        // the child is already compact, so a single merge is enough
        let child = node.children[0].1;
        let child = std::mem::take(self.node_mut(child));
        let node = self.node_mut(id);
        node.letter.extend_from_slice(&child.letter);
        node.value = child.value;
        node.children = child.children;
    }

    pub(crate) fn prefix_of(&self, path: &[NodeId]) -> String {
        path.iter()
            .flat_map(|id| self.node(*id).letter.iter().map(|b| *b as char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_builder(pairs: &[(&str, u16)]) -> TrieBuilder {
        let mut builder = TrieBuilder::new();
        builder.extend_from(pairs.iter().copied()).unwrap();
        builder
    }

    #[test]
    fn compact_example() {
        let trie = make_builder(&[("A", 1), ("Aacute", 6), ("Abalon", 2), ("Abstract", 4)]).build();
        let expected = "\
+-<NOLETTER>
| +-A => 0x0001
| | +-acute => 0x0006
| | +-b
| | | +-alon => 0x0002
| | | +-stract => 0x0004
";
        assert_eq!(trie.debug_tree(), expected);
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn shared_prefix_branches_after_value() {
        let trie = make_builder(&[("cent", 0x00A2), ("centigrade", 0x2103), ("cents", 0x2026)])
            .build();
        let expected = "\
+-<NOLETTER>
| +-cent => 0x00A2
| | +-igrade => 0x2103
| | +-s => 0x2026
";
        assert_eq!(trie.debug_tree(), expected);
    }

    #[test]
    fn root_is_never_merged() {
        let trie = make_builder(&[("abc", 3)]).build();
        assert_eq!(trie.debug_tree(), "+-<NOLETTER>\n| +-abc => 0x0003\n");
        assert!(trie.node(Trie::ROOT).letter.is_empty());
    }

    #[test]
    fn uncompacted_has_one_node_per_byte() {
        let builder = make_builder(&[("cent", 1), ("cents", 2)]);
        assert_eq!(builder.clone().build_uncompacted().node_count(), 6);
        assert_eq!(builder.build().node_count(), 3);
    }

    #[test]
    fn compaction_drops_merged_nodes() {
        let builder = make_builder(&[("A", 1), ("Aacute", 6), ("Abalon", 2), ("Abstract", 4)]);
        assert_eq!(builder.clone().build_uncompacted().nodes.len(), 18);
        let trie = builder.build();
        assert_eq!(trie.nodes.len(), trie.node_count());
        assert_eq!(trie.nodes.len(), 6);
        assert_eq!(
            trie.entries(),
            vec![
                ("A".to_string(), 1),
                ("Aacute".to_string(), 6),
                ("Abalon".to_string(), 2),
                ("Abstract".to_string(), 4),
            ]
        );
    }

    #[test]
    fn compaction_preserves_entries() {
        let pairs = [
            ("a", 1),
            ("ab", 2),
            ("abcdef", 3),
            ("abcxyz", 4),
            ("b", 5),
            ("bzzz", 6),
        ];
        let builder = make_builder(&pairs);
        let expected = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect::<Vec<_>>();
        assert_eq!(builder.clone().build_uncompacted().entries(), expected);
        assert_eq!(builder.build().entries(), expected);
    }

    #[test]
    fn children_are_sorted() {
        let trie = make_builder(&[("z", 1), ("a", 2), ("m", 3), ("B", 4)]).build();
        let keys = trie
            .node(Trie::ROOT)
            .children
            .iter()
            .map(|(key, _)| *key)
            .collect::<Vec<_>>();
        assert_eq!(keys, b"Bamz".to_vec());
    }

    #[test]
    fn duplicate_insert() {
        let mut builder = TrieBuilder::new();
        builder.insert("space", 0x20).unwrap();
        builder.insert("space", 0x20).unwrap();
        assert_eq!(builder.len(), 1);
        assert_eq!(
            builder.insert("space", 0x21),
            Err(Error::ConflictingValue {
                name: "space".into(),
                existing: 0x20,
                new: 0x21
            })
        );
    }

    #[test]
    fn invalid_inserts() {
        let mut builder = TrieBuilder::new();
        assert_eq!(builder.insert("", 1), Err(Error::EmptyName));
        assert_eq!(
            builder.insert("caf\u{e9}", 1),
            Err(Error::InvalidByte {
                name: "caf\u{e9}".into(),
                byte: 0xC3,
                position: 3,
            })
        );
        assert_eq!(
            builder.insert("null", 0),
            Err(Error::ZeroValue {
                name: "null".into()
            })
        );
        assert!(builder.is_empty());
        // rejected names leave no trace in the tree
        assert_eq!(builder.build_uncompacted().node_count(), 1);
    }
}
