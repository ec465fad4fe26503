//! Searching a packed glyph name trie.

use crate::format::{
    CHILD_COUNT_MASK, HAS_VALUE, LETTER_CONTINUES, LETTER_MASK, NOT_FOUND, ROOT_CHILDREN_OFFSET,
};

/// A reference to a packed glyph name trie.
///
/// This is a thin wrapper around the encoded bytes; see the
/// [format](crate::format) module for a description of the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphNameTrie<'a> {
    data: &'a [u8],
}

impl<'a> GlyphNameTrie<'a> {
    /// Create a new trie from encoded bytes.
    ///
    /// The data is not validated; lookups in malformed data fail by
    /// returning `None`.
    pub const fn new(data: &'a [u8]) -> Self {
        GlyphNameTrie { data }
    }

    /// The encoded bytes.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Return the value associated with `name`, if any.
    pub fn get(&self, name: &str) -> Option<u16> {
        lookup(self.data, name.as_bytes())
    }

    /// Return the value associated with the raw bytes of a name, if any.
    pub fn get_bytes(&self, name: &[u8]) -> Option<u16> {
        lookup(self.data, name)
    }

    /// `true` if `name` has a value in this trie.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Search the encoded trie in `data` for `name`.
///
/// The children of the root are found with a binary search; every other
/// node is expected to have few children and is scanned linearly.
///
/// Returns `None` if the name has no value, including when `name` is empty
/// or is only a prefix of stored names.
pub fn lookup(data: &[u8], name: &[u8]) -> Option<u16> {
    let (&first, mut rest) = name.split_first()?;
    let root_count = (*data.get(1)? & CHILD_COUNT_MASK) as usize;
    // `node` is always the position of a letter byte already matched
    let mut node = find_root_child(data, root_count, first)?;

    loop {
        if data.get(node)? & LETTER_CONTINUES != 0 {
            let (&next, tail) = rest.split_first()?;
            node += 1;
            if next != data.get(node)? & LETTER_MASK {
                return None;
            }
            rest = tail;
            continue;
        }

        let header = *data.get(node + 1)?;
        let has_value = header & HAS_VALUE != 0;
        let Some((&next, tail)) = rest.split_first() else {
            return has_value
                .then(|| read_u16(data, node + 2))
                .flatten()
                .filter(|value| *value != NOT_FOUND);
        };
        rest = tail;

        let count = (header & CHILD_COUNT_MASK) as usize;
        let table = node + 2 + if has_value { 2 } else { 0 };
        node = find_child(data, table, count, next)?;
    }
}

fn find_root_child(data: &[u8], count: usize, letter: u8) -> Option<usize> {
    let mut lo = 0;
    let mut hi = count;
    while lo < hi {
        let mid = (lo + hi) / 2;
        let offset = read_u16(data, ROOT_CHILDREN_OFFSET + mid * 2)? as usize;
        let child_letter = *data.get(offset)? & LETTER_MASK;
        match child_letter.cmp(&letter) {
            std::cmp::Ordering::Equal => return Some(offset),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }
    None
}

fn find_child(data: &[u8], table: usize, count: usize, letter: u8) -> Option<usize> {
    for i in 0..count {
        let offset = read_u16(data, table + i * 2)? as usize;
        if *data.get(offset)? & LETTER_MASK == letter {
            return Some(offset);
        }
    }
    None
}

fn read_u16(data: &[u8], pos: usize) -> Option<u16> {
    data.get(pos..pos + 2)?
        .try_into()
        .ok()
        .map(u16::from_be_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// {"cent": 0x00A2, "centigrade": 0x2103, "cents": 0x2026}
    #[rustfmt::skip]
    static CENT: &[u8] = &[
        // root: no letter, one child at 4
        0x00, 0x01, 0x00, 0x04,
        // "cent" => 0x00A2, two children at 15 and 24
        b'c' | 0x80, b'e' | 0x80, b'n' | 0x80, b't', 0x82, 0x00, 0xA2, 0x00, 0x0F, 0x00, 0x18,
        // "igrade" => 0x2103
        b'i' | 0x80, b'g' | 0x80, b'r' | 0x80, b'a' | 0x80, b'd' | 0x80, b'e', 0x80, 0x21, 0x03,
        // "s" => 0x2026
        b's', 0x80, 0x20, 0x26,
    ];

    /// {"a": 1, "b": 2, "c": 3}
    #[rustfmt::skip]
    static ABC: &[u8] = &[
        0x00, 0x03, 0x00, 0x08, 0x00, 0x0C, 0x00, 0x10,
        b'a', 0x80, 0x00, 0x01,
        b'b', 0x80, 0x00, 0x02,
        b'c', 0x80, 0x00, 0x03,
    ];

    #[test]
    fn shared_prefix() {
        let trie = GlyphNameTrie::new(CENT);
        assert_eq!(trie.get("cent"), Some(0x00A2));
        assert_eq!(trie.get("centigrade"), Some(0x2103));
        assert_eq!(trie.get("cents"), Some(0x2026));
    }

    #[test]
    fn absent_names() {
        let trie = GlyphNameTrie::new(CENT);
        for name in ["", "c", "cen", "centx", "centi", "centigrad", "centigrades", "x"] {
            assert_eq!(trie.get(name), None, "{name}");
        }
    }

    #[test]
    fn root_binary_search() {
        let trie = GlyphNameTrie::new(ABC);
        assert_eq!(trie.get("a"), Some(1));
        assert_eq!(trie.get("b"), Some(2));
        assert_eq!(trie.get("c"), Some(3));
        assert_eq!(trie.get("d"), None);
        assert_eq!(trie.get("A"), None);
        assert_eq!(trie.get("ab"), None);
        assert!(trie.contains("b"));
    }

    #[test]
    fn high_bit_input_never_matches() {
        let trie = GlyphNameTrie::new(ABC);
        assert_eq!(trie.get_bytes(&[b'a' | 0x80]), None);
        assert_eq!(GlyphNameTrie::new(CENT).get_bytes(b"ce\xeet"), None);
    }

    #[test]
    fn malformed_data() {
        for len in 0..CENT.len() {
            let trie = GlyphNameTrie::new(&CENT[..len]);
            for name in ["cent", "centigrade", "cents", "centx"] {
                // must not panic; truncated tables can only lose entries
                let result = trie.get(name);
                assert!(result.is_none() || result == GlyphNameTrie::new(CENT).get(name));
            }
        }
        // a child pointer past the end of the data
        let bogus = [0x00, 0x01, 0xFF, 0xFF];
        assert_eq!(lookup(&bogus, b"a"), None);
    }

    #[test]
    fn empty_table() {
        assert_eq!(lookup(&[0, 0], b"a"), None);
        assert_eq!(lookup(&[], b"a"), None);
    }

    #[test]
    fn stored_zero_is_not_found() {
        let data = [0x00, 0x01, 0x00, 0x04, b'a', 0x80, 0x00, 0x00];
        assert_eq!(lookup(&data, b"a"), None);
    }
}
