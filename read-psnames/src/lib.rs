//! Reading PostScript glyph name tables
//!
//! This crate provides zero-allocation access to the glyph name tables
//! used when mapping between glyph names, Unicode values and the standard
//! PostScript encodings. It is the runtime half of a pair: the tables are
//! compiled by [`write-psnames`] and emitted as Rust source by the
//! `psnames-codegen` tool.
//!
//! The largest of these tables is a compressed copy of the Adobe Glyph
//! List, stored as a packed trie that can be searched in place; see the
//! [`format`] module for a description of the layout, and [`lookup`] for
//! the search itself.
//!
//! # Example
//!
//! ```
//! use read_psnames::{mac_glyph_name, unicode_for_glyph_name};
//!
//! assert_eq!(unicode_for_glyph_name("Aacute"), Some('\u{C1}'));
//! assert_eq!(unicode_for_glyph_name("not-a-glyph"), None);
//! assert_eq!(mac_glyph_name(3), Some("space"));
//! ```
//!
//! [`write-psnames`]: https://docs.rs/write-psnames/

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod agl;
pub mod format;
mod standard;
pub mod tables;
mod trie;

pub use agl::{unicode_for_glyph_name, ADOBE_GLYPHS};
pub use standard::{
    expert_encoding, mac_glyph_name, num_mac_glyph_names, num_sid_glyph_names, sid_glyph_name,
    standard_encoding,
};
pub use trie::{lookup, GlyphNameTrie};
