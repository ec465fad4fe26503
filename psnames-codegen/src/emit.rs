//! Writing tables as Rust source.

use std::fmt::Write;

const HEADER: &str = "\
// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// For more information about how codegen works, see psnames-codegen/README.md
";

const BYTES_PER_LINE: usize = 16;
const WORDS_PER_LINE: usize = 12;

/// Accumulates the generated module.
#[derive(Debug)]
pub(crate) struct Emitter {
    out: String,
}

impl Emitter {
    pub(crate) fn new() -> Self {
        Emitter {
            out: HEADER.to_owned(),
        }
    }

    /// Write a `static` byte array, in hex.
    pub(crate) fn byte_array(&mut self, docs: &str, name: &str, values: &[u8]) {
        self.array(docs, name, "u8", values, BYTES_PER_LINE, |v| {
            format!("0x{v:02X}")
        });
    }

    /// Write a `static` array of 16-bit values, in decimal.
    pub(crate) fn u16_array(&mut self, docs: &str, name: &str, values: &[u16]) {
        self.array(docs, name, "u16", values, WORDS_PER_LINE, |v| v.to_string());
    }

    fn array<T>(
        &mut self,
        docs: &str,
        name: &str,
        ty: &str,
        values: &[T],
        per_line: usize,
        format: impl Fn(&T) -> String,
    ) {
        // writing to a String can't fail
        let _ = self.write_array(docs, name, ty, values, per_line, format);
    }

    fn write_array<T>(
        &mut self,
        docs: &str,
        name: &str,
        ty: &str,
        values: &[T],
        per_line: usize,
        format: impl Fn(&T) -> String,
    ) -> std::fmt::Result {
        let out = &mut self.out;
        writeln!(out)?;
        for line in docs.lines() {
            if line.is_empty() {
                writeln!(out, "///")?;
            } else {
                writeln!(out, "/// {line}")?;
            }
        }
        writeln!(out, "#[rustfmt::skip]")?;
        writeln!(out, "pub static {name}: [{ty}; {}] = [", values.len())?;
        for chunk in values.chunks(per_line) {
            let items = chunk
                .iter()
                .map(|v| format!("{},", format(v)))
                .collect::<Vec<_>>();
            writeln!(out, "    {}", items.join(" "))?;
        }
        writeln!(out, "];")
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn byte_array() {
        let mut emitter = Emitter::new();
        let values = (0u8..20).collect::<Vec<_>>();
        emitter.byte_array("Some bytes.\n\nMore docs.", "BYTES", &values);
        let expected = format!(
            "{HEADER}
/// Some bytes.
///
/// More docs.
#[rustfmt::skip]
pub static BYTES: [u8; 20] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x10, 0x11, 0x12, 0x13,
];
"
        );
        assert_eq!(emitter.finish(), expected);
    }

    #[test]
    fn u16_array() {
        let mut emitter = Emitter::new();
        emitter.u16_array("Words.", "WORDS", &[1, 20, 300, 65535]);
        let expected = format!(
            "{HEADER}
/// Words.
#[rustfmt::skip]
pub static WORDS: [u16; 4] = [
    1, 20, 300, 65535,
];
"
        );
        assert_eq!(emitter.finish(), expected);
    }

    #[test]
    fn empty_array() {
        let mut emitter = Emitter::new();
        emitter.u16_array("Nothing.", "EMPTY", &[]);
        assert!(emitter
            .finish()
            .ends_with("pub static EMPTY: [u16; 0] = [\n];\n"));
    }
}
