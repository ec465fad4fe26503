//! Mapping glyph names to Unicode with the Adobe Glyph List.

use crate::{tables::ADOBE_GLYPH_LIST, GlyphNameTrie};

/// The compressed Adobe Glyph List.
///
/// Only names that map to a single code point in the Basic Multilingual
/// Plane are included.
pub static ADOBE_GLYPHS: GlyphNameTrie<'static> = GlyphNameTrie::new(&ADOBE_GLYPH_LIST);

/// Return the Unicode character for a glyph name in the Adobe Glyph List.
pub fn unicode_for_glyph_name(name: &str) -> Option<char> {
    ADOBE_GLYPHS
        .get(name)
        .and_then(|value| char::from_u32(value as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::{mac_glyph_name, num_mac_glyph_names};

    #[test]
    fn common_names() {
        assert_eq!(unicode_for_glyph_name("A"), Some('A'));
        assert_eq!(unicode_for_glyph_name("space"), Some(' '));
        assert_eq!(unicode_for_glyph_name("Aacute"), Some('\u{C1}'));
        assert_eq!(unicode_for_glyph_name("endash"), Some('\u{2013}'));
        assert_eq!(unicode_for_glyph_name("ellipsis"), Some('\u{2026}'));
        assert_eq!(unicode_for_glyph_name("Euro"), Some('\u{20AC}'));
        assert_eq!(unicode_for_glyph_name("alpha"), Some('\u{3B1}'));
        assert_eq!(unicode_for_glyph_name("fi"), Some('\u{FB01}'));
    }

    #[test]
    fn names_with_decimal_looking_values() {
        assert_eq!(unicode_for_glyph_name("Alpha"), Some('\u{391}'));
        assert_eq!(unicode_for_glyph_name("Delta"), Some('\u{2206}'));
        assert_eq!(unicode_for_glyph_name("Omega"), Some('\u{2126}'));
        assert_eq!(unicode_for_glyph_name("afii10017"), Some('\u{410}'));
        assert_eq!(unicode_for_glyph_name("Icyrillic"), Some('\u{406}'));
        assert_eq!(unicode_for_glyph_name("Oneroman"), Some('\u{2160}'));
        assert_eq!(unicode_for_glyph_name("oneroman"), Some('\u{2170}'));
        assert_eq!(unicode_for_glyph_name("a1"), Some('\u{2701}'));
        assert_eq!(unicode_for_glyph_name("a120"), Some('\u{2460}'));
        assert_eq!(unicode_for_glyph_name("controlBEL"), Some('\u{7}'));
    }

    #[test]
    fn missing_names() {
        assert_eq!(unicode_for_glyph_name(""), None);
        assert_eq!(unicode_for_glyph_name("Aacut"), None);
        assert_eq!(unicode_for_glyph_name("Aacutex"), None);
        assert_eq!(unicode_for_glyph_name("uni0041"), None);
        // multi code point entries are not stored
        assert_eq!(unicode_for_glyph_name("dalethatafpatah"), None);
    }

    #[test]
    fn ascii_mac_names() {
        // "space" through "asciitilde" are ASCII, in order
        for index in 3..98u16 {
            let name = mac_glyph_name(index).unwrap();
            let expected = char::from(0x20 + (index - 3) as u8);
            assert_eq!(unicode_for_glyph_name(name), Some(expected), "{name}");
        }
        assert!(num_mac_glyph_names() > 98);
    }
}
