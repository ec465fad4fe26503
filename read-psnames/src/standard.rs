//! The standard Macintosh and CFF glyph name sets, and the Type 1 encodings.

use crate::tables::{
    EXPERT_ENCODING, MAC_GLYPH_NAMES, SID_GLYPH_NAMES, STANDARD_ENCODING, STANDARD_GLYPH_NAMES,
};

const NOTDEF: &str = ".notdef";

/// The number of glyph names in the standard Macintosh character set.
pub fn num_mac_glyph_names() -> usize {
    MAC_GLYPH_NAMES.len()
}

/// The number of standard strings (SIDs) that are glyph names.
pub fn num_sid_glyph_names() -> usize {
    SID_GLYPH_NAMES.len()
}

/// The name of the glyph at `index` in the standard Macintosh ordering.
///
/// These are the 258 names used by version 1.0 `post` tables.
pub fn mac_glyph_name(index: u16) -> Option<&'static str> {
    MAC_GLYPH_NAMES
        .get(index as usize)
        .and_then(|offset| name_at(*offset))
}

/// The glyph name for a standard string identifier.
pub fn sid_glyph_name(sid: u16) -> Option<&'static str> {
    SID_GLYPH_NAMES
        .get(sid as usize)
        .and_then(|offset| name_at(*offset))
}

/// The glyph name assigned to `code` by the Adobe standard encoding.
///
/// Unassigned codes map to `.notdef`.
pub fn standard_encoding(code: u8) -> &'static str {
    sid_glyph_name(STANDARD_ENCODING[code as usize]).unwrap_or(NOTDEF)
}

/// The glyph name assigned to `code` by the Adobe expert encoding.
///
/// Unassigned codes map to `.notdef`.
pub fn expert_encoding(code: u8) -> &'static str {
    sid_glyph_name(EXPERT_ENCODING[code as usize]).unwrap_or(NOTDEF)
}

// names are stored NUL-terminated
fn name_at(offset: u16) -> Option<&'static str> {
    let bytes = STANDARD_GLYPH_NAMES.get(offset as usize..)?;
    let len = bytes.iter().position(|b| *b == 0)?;
    std::str::from_utf8(&bytes[..len]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mac_names() {
        assert_eq!(num_mac_glyph_names(), 258);
        assert_eq!(mac_glyph_name(0), Some(".notdef"));
        assert_eq!(mac_glyph_name(3), Some("space"));
        assert_eq!(mac_glyph_name(36), Some("A"));
        assert_eq!(mac_glyph_name(257), Some("dcroat"));
        assert_eq!(mac_glyph_name(258), None);
    }

    #[test]
    fn sid_names() {
        assert_eq!(num_sid_glyph_names(), 391);
        assert_eq!(sid_glyph_name(0), Some(".notdef"));
        assert_eq!(sid_glyph_name(1), Some("space"));
        assert_eq!(sid_glyph_name(34), Some("A"));
        assert_eq!(sid_glyph_name(390), Some("Semibold"));
        assert_eq!(sid_glyph_name(391), None);
    }

    #[test]
    fn shared_names_share_storage() {
        // "space" is in both sets, and stored only once
        let mac = MAC_GLYPH_NAMES[3];
        let sid = SID_GLYPH_NAMES[1];
        assert_eq!(mac, sid);
    }

    #[test]
    fn encodings() {
        assert_eq!(standard_encoding(0), ".notdef");
        assert_eq!(standard_encoding(b' '), "space");
        assert_eq!(standard_encoding(b'A'), "A");
        assert_eq!(standard_encoding(0xA1), "exclamdown");
        assert_eq!(standard_encoding(0xFF), ".notdef");
        assert_eq!(expert_encoding(b' '), "space");
        assert_eq!(expert_encoding(0x21), "exclamsmall");
        assert_eq!(expert_encoding(b'A'), "asuperior");
        assert_eq!(expert_encoding(0), ".notdef");
    }

    #[test]
    fn all_names_are_valid() {
        for i in 0..num_mac_glyph_names() {
            assert!(mac_glyph_name(i as u16).is_some(), "mac {i}");
        }
        for i in 0..num_sid_glyph_names() {
            assert!(sid_glyph_name(i as u16).is_some(), "sid {i}");
        }
    }
}
