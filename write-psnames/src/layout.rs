//! Assigning offsets to trie nodes, and serializing them.
//!
//! Encoding happens in two passes. [`Layout::compute`] walks the trie in
//! pre-order and records where every node will start; [`serialize`] then
//! writes the nodes in that same order, using the recorded offsets to fill
//! in each node's pointer table.

use std::collections::HashMap;

use read_psnames::format::{HAS_VALUE, LETTER_CONTINUES};

use crate::error::{Error, MAX_CHILDREN, MAX_TABLE_SIZE};
use crate::trie::{Node, NodeId, Trie};

/// The position of every node in the encoded table.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    /// Nodes in the order they are written, with their offsets.
    order: Vec<(NodeId, u16)>,
    offsets: HashMap<NodeId, u16>,
    size: usize,
}

impl Layout {
    /// Assign an offset to every node reachable from the root.
    ///
    /// This fails if any node has more children than can be recorded, or
    /// if the encoded table would not be addressable with 16-bit offsets.
    pub fn compute(trie: &Trie) -> Result<Layout, Error> {
        let mut order = Vec::new();
        let mut path = Vec::new();
        let size = locate(trie, Trie::ROOT, 0, &mut path, &mut order)?;
        if size > MAX_TABLE_SIZE {
            return Err(Error::TableTooLarge { size });
        }

        let order = order
            .into_iter()
            .map(|(id, offset)| {
                u16::try_from(offset)
                    .map(|offset| (id, offset))
                    .map_err(|_| Error::TableTooLarge { size })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let offsets = order.iter().copied().collect();
        log::debug!("laid out {} nodes in {size} bytes", order.len());
        Ok(Layout {
            order,
            offsets,
            size,
        })
    }

    /// The total size of the encoded table, in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of nodes that will be written.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// The offsets of all nodes, in the order they are written.
    pub fn offsets(&self) -> impl Iterator<Item = u16> + '_ {
        self.order.iter().map(|(_, offset)| *offset)
    }

    fn offset(&self, id: NodeId) -> u16 {
        self.offsets[&id]
    }
}

/// The number of bytes a node occupies, excluding its children.
fn node_size(node: &Node) -> usize {
    node.letter.len().max(1)
        + 1
        + if node.value.is_some() { 2 } else { 0 }
        + 2 * node.children.len()
}

/// Assign offsets to `id` and its descendants, returning the next free offset.
fn locate(
    trie: &Trie,
    id: NodeId,
    cursor: usize,
    path: &mut Vec<NodeId>,
    order: &mut Vec<(NodeId, usize)>,
) -> Result<usize, Error> {
    let node = trie.node(id);
    path.push(id);
    if node.children.len() > MAX_CHILDREN {
        return Err(Error::TooManyChildren {
            prefix: trie.prefix_of(path),
            count: node.children.len(),
        });
    }
    // no need to keep going once we're out of range
    if cursor > MAX_TABLE_SIZE {
        return Err(Error::TableTooLarge { size: cursor });
    }

    order.push((id, cursor));
    let mut cursor = cursor + node_size(node);
    for (_, child) in &node.children {
        cursor = locate(trie, *child, cursor, path, order)?;
    }
    path.pop();
    Ok(cursor)
}

/// Write the nodes of `trie` at the positions assigned in `layout`.
pub fn serialize(trie: &Trie, layout: &Layout) -> Vec<u8> {
    let mut out = Vec::with_capacity(layout.size);
    for (id, offset) in &layout.order {
        debug_assert_eq!(*offset as usize, out.len());
        let node = trie.node(*id);
        write_letter(&mut out, &node.letter);

        // child count was checked when computing the layout
        let count = node.children.len() as u8;
        match node.value {
            Some(value) => {
                out.push(HAS_VALUE | count);
                out.extend_from_slice(&value.to_be_bytes());
            }
            None => out.push(count),
        }
        for (_, child) in &node.children {
            out.extend_from_slice(&layout.offset(*child).to_be_bytes());
        }
    }
    log::trace!("serialized {} bytes", out.len());
    out
}

fn write_letter(out: &mut Vec<u8>, letter: &[u8]) {
    match letter.split_last() {
        None => out.push(0),
        Some((last, init)) => {
            out.extend(init.iter().map(|b| b | LETTER_CONTINUES));
            out.push(*last);
        }
    }
}

impl Trie {
    /// Compute the [`Layout`] of this trie.
    pub fn layout(&self) -> Result<Layout, Error> {
        Layout::compute(self)
    }

    /// Encode this trie into the packed format read by [`read_psnames::lookup`].
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let layout = self.layout()?;
        Ok(serialize(self, &layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrieBuilder;
    use pretty_assertions::assert_eq;

    fn encode(pairs: &[(&str, u16)]) -> Vec<u8> {
        let mut builder = TrieBuilder::new();
        builder.extend_from(pairs.iter().copied()).unwrap();
        builder.build().encode().unwrap()
    }

    #[test]
    fn single_letter() {
        assert_eq!(
            encode(&[("a", 1)]),
            [0x00, 0x01, 0x00, 0x04, b'a', 0x80, 0x00, 0x01]
        );
    }

    #[test]
    fn multi_letter() {
        assert_eq!(
            encode(&[("abc", 5)]),
            [0x00, 0x01, 0x00, 0x04, b'a' | 0x80, b'b' | 0x80, b'c', 0x80, 0x00, 0x05]
        );
    }

    #[test]
    fn branch_without_value() {
        #[rustfmt::skip]
        let expected = [
            0x00, 0x01, 0x00, 0x04,
            b'a', 0x02, 0x00, 0x0A, 0x00, 0x0E,
            b'b', 0x80, 0x00, 0x01,
            b'c', 0x80, 0x00, 0x02,
        ];
        assert_eq!(encode(&[("ac", 2), ("ab", 1)]), expected);
    }

    #[test]
    fn shared_prefix_with_value() {
        #[rustfmt::skip]
        let expected = [
            0x00, 0x01, 0x00, 0x04,
            b'c' | 0x80, b'e' | 0x80, b'n' | 0x80, b't', 0x82, 0x00, 0xA2, 0x00, 0x0F, 0x00, 0x18,
            b'i' | 0x80, b'g' | 0x80, b'r' | 0x80, b'a' | 0x80, b'd' | 0x80, b'e', 0x80, 0x21, 0x03,
            b's', 0x80, 0x20, 0x26,
        ];
        assert_eq!(
            encode(&[("cent", 0x00A2), ("centigrade", 0x2103), ("cents", 0x2026)]),
            expected
        );
    }

    #[test]
    fn empty_trie() {
        assert_eq!(TrieBuilder::new().build().encode().unwrap(), [0x00, 0x00]);
    }

    #[test]
    fn layout_is_preorder() {
        let mut builder = TrieBuilder::new();
        builder
            .extend_from([("b", 2), ("a", 1), ("ab", 3)])
            .unwrap();
        let layout = builder.build().layout().unwrap();
        // root, "a", "b" (child of "a"), "b"
        assert_eq!(layout.offsets().collect::<Vec<_>>(), [0, 6, 12, 16]);
        assert_eq!(layout.node_count(), 4);
        assert_eq!(layout.size(), 20);
    }

    #[test]
    fn too_many_children() {
        let names = (0u8..=0x7F).map(|b| (b as char).to_string()).collect::<Vec<_>>();
        let mut builder = TrieBuilder::new();
        builder
            .extend_from(names.iter().map(|name| (name.as_str(), 1)))
            .unwrap();
        let trie = builder.build();
        assert_eq!(
            trie.encode(),
            Err(Error::TooManyChildren {
                prefix: String::new(),
                count: 128
            })
        );
    }

    #[test]
    fn max_children() {
        let names = (1u8..=0x7F).map(|b| (b as char).to_string()).collect::<Vec<_>>();
        let mut builder = TrieBuilder::new();
        builder
            .extend_from(names.iter().map(|name| (name.as_str(), 1)))
            .unwrap();
        let bytes = builder.build().encode().unwrap();
        assert_eq!(bytes[1], 0x7F);
    }

    #[test]
    fn too_large() {
        let _ = env_logger::builder().is_test(true).try_init();
        // ~100k of unique, incompressible names
        let names = (0..10_000u32)
            .map(|i| format!("glyph{i:05}suffix"))
            .collect::<Vec<_>>();
        let mut builder = TrieBuilder::new();
        builder
            .extend_from(names.iter().map(|name| (name.as_str(), 1)))
            .unwrap();
        assert!(matches!(
            builder.build().encode(),
            Err(Error::TableTooLarge { .. })
        ));
    }
}
