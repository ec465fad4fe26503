//! Errors that occur while compiling glyph name tables

/// The largest offset (and table size) expressible in the packed format.
pub const MAX_TABLE_SIZE: usize = u16::MAX as usize;

/// The largest number of children a single trie node can record.
pub const MAX_CHILDREN: usize = 0x7F;

/// An error occured while building or encoding a table
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Glyph names must contain at least one byte.
    EmptyName,
    /// A glyph name contained a byte outside of 7-bit ASCII.
    InvalidByte { name: String, byte: u8, position: usize },
    /// Zero is reserved to mean "not found" and cannot be stored.
    ZeroValue { name: String },
    /// The same name was inserted twice with different values.
    ConflictingValue {
        name: String,
        existing: u16,
        new: u16,
    },
    /// A trie node has more children than the header can count.
    TooManyChildren { prefix: String, count: usize },
    /// The encoded trie does not fit in a 16-bit address space.
    TableTooLarge { size: usize },
    /// The packed name strings do not fit in a 16-bit address space.
    StringTableTooLarge { size: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyName => f.write_str("glyph names must not be empty"),
            Error::InvalidByte {
                name,
                byte,
                position,
            } => write!(
                f,
                "glyph name '{}' contains non-ASCII byte 0x{byte:02X} at position {position}",
                name.escape_debug()
            ),
            Error::ZeroValue { name } => {
                write!(f, "glyph name '{name}' maps to 0, which is reserved")
            }
            Error::ConflictingValue {
                name,
                existing,
                new,
            } => write!(
                f,
                "glyph name '{name}' mapped to both 0x{existing:04X} and 0x{new:04X}"
            ),
            Error::TooManyChildren { prefix, count } => write!(
                f,
                "trie node '{}' has {count} children (max is {MAX_CHILDREN})",
                prefix.escape_debug()
            ),
            Error::TableTooLarge { size } => write!(
                f,
                "encoded table is {size} bytes, larger than the maximum {MAX_TABLE_SIZE}"
            ),
            Error::StringTableTooLarge { size } => write!(
                f,
                "string table is {size} bytes, offsets must fit in 16 bits"
            ),
        }
    }
}

impl std::error::Error for Error {}
