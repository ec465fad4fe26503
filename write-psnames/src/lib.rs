//! Compiling PostScript glyph name tables
//!
//! This crate builds the tables read by [`read_psnames`]. The main entry
//! point is [`TrieBuilder`], which collects `(name, value)` pairs and
//! compiles them into a compressed trie that can be searched in place:
//!
//! ```
//! use write_psnames::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.insert("A", 0x41).unwrap();
//! builder.insert("Aacute", 0xC1).unwrap();
//! let trie = builder.build();
//! let bytes = trie.encode().unwrap();
//!
//! let reader = read_psnames::GlyphNameTrie::new(&bytes);
//! assert_eq!(reader.get("Aacute"), Some(0xC1));
//! assert_eq!(reader.get("Aac"), None);
//! ```
//!
//! The standard Macintosh and SID name sets are packed with
//! [`compile_standard_names`].

mod error;
mod layout;
mod string_table;
mod trie;

pub use error::{Error, MAX_CHILDREN, MAX_TABLE_SIZE};
pub use layout::{serialize, Layout};
pub use string_table::{compile_standard_names, StandardNames, StringTable};
pub use trie::{Trie, TrieBuilder};

/// Compile a list of `(name, value)` pairs into an encoded trie.
///
/// This is shorthand for inserting every pair into a [`TrieBuilder`],
/// then building and encoding the result.
pub fn compile_glyph_list<'a>(
    pairs: impl IntoIterator<Item = (&'a str, u16)>,
) -> Result<Vec<u8>, Error> {
    let mut builder = TrieBuilder::new();
    builder.extend_from(pairs)?;
    builder.build().encode()
}
