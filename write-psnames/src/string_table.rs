//! Packed tables of NUL-terminated names.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::Error;

/// A deduplicated list of names, stored back to back with a NUL after each.
///
/// Names are referred to by the offset of their first byte.
#[derive(Clone, Debug, Default)]
pub struct StringTable {
    offsets: IndexMap<String, u16>,
    size: usize,
}

/// The standard Macintosh and SID glyph names, packed into one string table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StandardNames {
    /// The packed names.
    pub names: Vec<u8>,
    /// For each Macintosh glyph index, the offset of its name in `names`.
    pub mac: Vec<u16>,
    /// For each standard string identifier, the offset of its name in `names`.
    pub sid: Vec<u16>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, returning its offset.
    ///
    /// If the name is already present its existing offset is returned.
    pub fn add(&mut self, name: &str) -> Result<u16, Error> {
        if let Some(offset) = self.offsets.get(name) {
            return Ok(*offset);
        }
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if let Some((position, byte)) = name
            .bytes()
            .enumerate()
            .find(|(_, b)| !b.is_ascii() || *b == 0)
        {
            return Err(Error::InvalidByte {
                name: name.to_owned(),
                byte,
                position,
            });
        }
        let offset = u16::try_from(self.size)
            .map_err(|_| Error::StringTableTooLarge { size: self.size })?;
        self.offsets.insert(name.to_owned(), offset);
        self.size += name.len() + 1;
        Ok(offset)
    }

    /// The offset of a previously added name.
    pub fn offset(&self, name: &str) -> Option<u16> {
        self.offsets.get(name).copied()
    }

    /// The number of distinct names.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The size of the packed table, in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The packed names, in insertion order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size);
        for name in self.offsets.keys() {
            out.extend_from_slice(name.as_bytes());
            out.push(0);
        }
        out
    }
}

/// Pack the Macintosh and SID standard glyph names into one table.
///
/// Macintosh names that are not also SID names come first, followed by
/// all of the SID names in order; names in both sets are stored once.
pub fn compile_standard_names(mac: &[&str], sid: &[&str]) -> Result<StandardNames, Error> {
    let sid_set = sid.iter().copied().collect::<HashSet<_>>();
    let mut table = StringTable::new();
    for name in mac.iter().filter(|name| !sid_set.contains(*name)) {
        table.add(name)?;
    }
    let extras = table.len();
    let sid = sid
        .iter()
        .map(|name| table.add(name))
        .collect::<Result<Vec<_>, _>>()?;
    let mac = mac
        .iter()
        .map(|name| table.add(name))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "packed {} standard names ({extras} mac only) into {} bytes",
        table.len(),
        table.size()
    );

    Ok(StandardNames {
        names: table.to_bytes(),
        mac,
        sid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dedup() {
        let mut table = StringTable::new();
        assert_eq!(table.add("a"), Ok(0));
        assert_eq!(table.add("bc"), Ok(2));
        assert_eq!(table.add("a"), Ok(0));
        assert_eq!(table.add("d"), Ok(5));
        assert_eq!(table.len(), 3);
        assert_eq!(table.size(), 7);
        assert_eq!(table.offset("bc"), Some(2));
        assert_eq!(table.offset("x"), None);
        assert_eq!(table.to_bytes(), b"a\0bc\0d\0");
    }

    #[test]
    fn rejects_bad_names() {
        let mut table = StringTable::new();
        assert_eq!(table.add(""), Err(Error::EmptyName));
        assert!(matches!(
            table.add("a\0b"),
            Err(Error::InvalidByte { byte: 0, position: 1, .. })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn too_large() {
        let mut table = StringTable::new();
        let long = "x".repeat(1000);
        let result = (0..100)
            .map(|i| table.add(&format!("{long}{i}")))
            .collect::<Result<Vec<_>, _>>();
        assert!(matches!(result, Err(Error::StringTableTooLarge { .. })));
    }

    #[test]
    fn standard_names() {
        let mac = [".notdef", ".null", "space", "Delta"];
        let sid = [".notdef", "space", "exclam"];
        let names = compile_standard_names(&mac, &sid).unwrap();
        assert_eq!(
            names.names,
            b".null\0Delta\0.notdef\0space\0exclam\0".to_vec()
        );
        assert_eq!(names.sid, [12, 20, 26]);
        assert_eq!(names.mac, [12, 0, 20, 6]);
    }
}
