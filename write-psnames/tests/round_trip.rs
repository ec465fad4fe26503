//! Compile tables and read them back with read-psnames.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rand::{seq::SliceRandom, SeedableRng};
use read_psnames::{lookup, GlyphNameTrie};
use rstest::rstest;
use write_psnames::{compile_glyph_list, TrieBuilder};

static GLYPH_LIST: &str = include_str!("../../resources/psnames/glyphlist.txt");

/// The single code point entries of the glyph list resource.
fn glyph_list() -> Vec<(&'static str, u16)> {
    GLYPH_LIST
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (name, value) = line.split_once(';')?;
            let value = u16::from_str_radix(value, 16).ok()?;
            Some((name, value))
        })
        .collect()
}

fn build(pairs: &[(&str, u16)]) -> TrieBuilder {
    let mut builder = TrieBuilder::new();
    builder.extend_from(pairs.iter().copied()).unwrap();
    builder
}

#[rstest]
#[case::cent(&[("cent", 0x00A2), ("centigrade", 0x2103), ("cents", 0x2026)])]
#[case::nested(&[("a", 1), ("ab", 2), ("abc", 3), ("abcd", 4)])]
#[case::siblings(&[("zeta", 1), ("alpha", 2), ("beta", 3), ("Alpha", 4), ("ALPHA", 5)])]
#[case::long_chain(&[("thisisaverylongglyphnamewithnobranches", 0xFFFF)])]
#[case::punctuation(&[(".notdef", 1), (".null", 2), ("a.sc", 3), ("a_b", 4), ("a-b", 5)])]
fn round_trip(#[case] pairs: &[(&str, u16)]) {
    let builder = build(pairs);
    let compacted = builder.clone().build().encode().unwrap();
    let uncompacted = builder.build_uncompacted().encode().unwrap();
    assert!(compacted.len() <= uncompacted.len());
    for (name, value) in pairs {
        assert_eq!(lookup(&compacted, name.as_bytes()), Some(*value), "{name}");
        assert_eq!(lookup(&uncompacted, name.as_bytes()), Some(*value), "{name}");
    }
}

#[rstest]
#[case::empty("")]
#[case::strict_prefix("cen")]
#[case::branch_point("centi")]
#[case::extension("centx")]
#[case::past_leaf("centigrades")]
#[case::unknown_first_letter("x")]
#[case::case_sensitive("Cent")]
fn negative_lookups(#[case] name: &str) {
    let builder = build(&[("cent", 0x00A2), ("centigrade", 0x2103), ("cents", 0x2026)]);
    let compacted = builder.clone().build().encode().unwrap();
    let uncompacted = builder.build_uncompacted().encode().unwrap();
    assert_eq!(lookup(&compacted, name.as_bytes()), None);
    assert_eq!(lookup(&uncompacted, name.as_bytes()), None);
}

#[test]
fn value_on_internal_node() {
    let bytes = compile_glyph_list([("f", 0x66), ("fi", 0xFB01), ("ffi", 0xFB03)]).unwrap();
    let trie = GlyphNameTrie::new(&bytes);
    assert_eq!(trie.get("f"), Some(0x66));
    assert_eq!(trie.get("fi"), Some(0xFB01));
    assert_eq!(trie.get("ffi"), Some(0xFB03));
    assert_eq!(trie.get("ff"), None);
}

#[test]
fn insertion_order_does_not_matter() {
    let mut pairs = glyph_list();
    let expected = compile_glyph_list(pairs.iter().copied()).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED);
    for _ in 0..3 {
        pairs.shuffle(&mut rng);
        assert_eq!(compile_glyph_list(pairs.iter().copied()).unwrap(), expected);
    }
}

#[test]
fn full_glyph_list() {
    let _ = env_logger::builder().is_test(true).try_init();
    let pairs = glyph_list();
    assert!(pairs.len() > 4000);
    let names = pairs.iter().map(|(name, _)| *name).collect::<HashSet<_>>();
    let builder = build(&pairs);
    let trie = builder.clone().build();
    assert_eq!(trie.len(), pairs.len());
    let compacted = trie.encode().unwrap();
    let uncompacted = builder.build_uncompacted().encode();

    for (name, value) in &pairs {
        assert_eq!(lookup(&compacted, name.as_bytes()), Some(*value), "{name}");
        // every strict prefix that isn't itself a glyph name is absent
        for end in 1..name.len() {
            let prefix = &name[..end];
            if !names.contains(prefix) {
                assert_eq!(lookup(&compacted, prefix.as_bytes()), None, "{prefix}");
            }
        }
    }
    // one byte per letter doesn't fit in 16 bits for the full list
    assert!(uncompacted.is_err());
}

#[test]
fn matches_generated_table() {
    let bytes = compile_glyph_list(glyph_list()).unwrap();
    assert_eq!(bytes.as_slice(), read_psnames::tables::ADOBE_GLYPH_LIST.as_slice());
}
