//! The packed trie format.
//!
//! A table is a flat sequence of nodes. Each node is stored as:
//!
//! - `letter`: one byte per character of the edge label, 7-bit ASCII. The
//!   high bit is set on every byte except the last. The root stores a
//!   single `0`.
//! - `header`: one byte. The high bit is set if a value follows, the low
//!   7 bits are the number of children.
//! - `value`: two bytes, present only if flagged in the header.
//! - `children`: two bytes per child, the absolute offset of each child
//!   node, sorted by the first letter of the child.
//!
//! All 16-bit quantities are big-endian. The root is always at offset zero
//! and never has a value; each child's subtree immediately follows its own
//! pointer table, in sibling order.

/// Set on every letter byte except the last one of a node.
pub const LETTER_CONTINUES: u8 = 0x80;

/// Masks off the continuation flag of a letter byte.
pub const LETTER_MASK: u8 = 0x7F;

/// Set in a node header when a 16-bit value follows.
pub const HAS_VALUE: u8 = 0x80;

/// Masks the child count out of a node header.
pub const CHILD_COUNT_MASK: u8 = 0x7F;

/// The offset of the root's pointer table.
pub const ROOT_CHILDREN_OFFSET: usize = 2;

/// The value reserved to mean "no mapping".
pub const NOT_FOUND: u16 = 0;
