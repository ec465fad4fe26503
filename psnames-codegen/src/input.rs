//! Parsing the text resources the tables are generated from.

use std::ops::Range;

/// An error in an input file, with the byte range it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Range<usize>,
}

/// A value along with the position it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

/// A single entry of the Adobe Glyph List.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphListEntry<'a> {
    pub name: &'a str,
    pub value: u16,
    /// The range of the entire line.
    pub span: Range<usize>,
}

impl ParseError {
    fn new(message: impl Into<String>, span: Range<usize>) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }
}

/// Iterate the non-empty, non-comment lines of `text`, with their ranges.
fn lines(text: &str) -> impl Iterator<Item = (&str, Range<usize>)> {
    let mut start = 0;
    text.split_inclusive('\n').filter_map(move |raw| {
        let line_start = start;
        start += raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let offset = line_start + (line.len() - trimmed.len());
        let line = trimmed.trim_end();
        Some((line, offset..offset + line.len()))
    })
}

/// Parse the Adobe Glyph List format.
///
/// Each entry is a line of the form `name;XXXX`, where `XXXX` is a
/// hexadecimal code point. Entries that map a name to a sequence of more
/// than one code point are skipped.
pub fn parse_glyph_list(text: &str) -> Result<Vec<GlyphListEntry<'_>>, ParseError> {
    let mut result = Vec::new();
    let mut skipped = 0;
    for (line, span) in lines(text) {
        let (name, codepoints) = line
            .split_once(';')
            .ok_or_else(|| ParseError::new("expected 'name;codepoint'", span.clone()))?;
        if name.is_empty() {
            return Err(ParseError::new("missing glyph name", span));
        }
        let value_start = span.start + name.len() + 1;
        let mut codepoints = codepoints.split_whitespace();
        let Some(first) = codepoints.next() else {
            return Err(ParseError::new("missing code point", span));
        };
        if codepoints.next().is_some() {
            skipped += 1;
            continue;
        }

        let value_span = value_start..span.end;
        let value = u32::from_str_radix(first, 16)
            .map_err(|_| ParseError::new(format!("invalid code point '{first}'"), value_span.clone()))?;
        let value = u16::try_from(value).map_err(|_| {
            ParseError::new(
                format!("code point U+{value:04X} does not fit in 16 bits"),
                value_span,
            )
        })?;
        result.push(GlyphListEntry { name, value, span });
    }
    log::debug!(
        "read {} glyph list entries, skipped {skipped} with multiple code points",
        result.len()
    );
    Ok(result)
}

/// Parse a list of glyph names, one per line.
pub fn parse_name_list(text: &str) -> Result<Vec<&str>, ParseError> {
    lines(text)
        .map(|(line, span)| {
            if line.contains(char::is_whitespace) {
                Err(ParseError::new("glyph names cannot contain spaces", span))
            } else {
                Ok(line)
            }
        })
        .collect()
}

/// Parse a list of exactly `len` decimal indices, one per line.
pub fn parse_index_list(text: &str, len: usize) -> Result<Vec<Spanned<u16>>, ParseError> {
    let result = lines(text)
        .map(|(line, span)| {
            line.parse::<u16>()
                .map(|value| Spanned {
                    value,
                    span: span.clone(),
                })
                .map_err(|_| ParseError::new(format!("invalid index '{line}'"), span))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if result.len() != len {
        let end = text.trim_end().len();
        return Err(ParseError::new(
            format!("expected {len} entries, found {}", result.len()),
            end..end,
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn glyph_list() {
        let text = "# comment\nA;0041\n\nAE;00C6\r\ndalethatafpatah;05D3 05B2\n  cent;00A2  \n";
        let entries = parse_glyph_list(text).unwrap();
        let pairs = entries
            .iter()
            .map(|entry| (entry.name, entry.value))
            .collect::<Vec<_>>();
        assert_eq!(pairs, [("A", 0x41), ("AE", 0xC6), ("cent", 0xA2)]);
        assert_eq!(&text[entries[0].span.clone()], "A;0041");
        assert_eq!(&text[entries[1].span.clone()], "AE;00C6");
        assert_eq!(&text[entries[2].span.clone()], "cent;00A2");
    }

    #[test]
    fn glyph_list_errors() {
        let err = parse_glyph_list("A;0041\nB 0042\n").unwrap_err();
        assert_eq!(err.span, 7..13);
        assert_eq!(err.message, "expected 'name;codepoint'");

        let err = parse_glyph_list("A;00G1\n").unwrap_err();
        assert_eq!(err.span, 2..6);

        let err = parse_glyph_list("smile;1F600\n").unwrap_err();
        assert_eq!(err.message, "code point U+1F600 does not fit in 16 bits");

        assert!(parse_glyph_list(";0041\n").is_err());
        assert!(parse_glyph_list("A;\n").is_err());
    }

    #[test]
    fn name_list() {
        let names = parse_name_list(".notdef\n.null\nspace\n").unwrap();
        assert_eq!(names, [".notdef", ".null", "space"]);
        let err = parse_name_list("a\nb c\n").unwrap_err();
        assert_eq!(err.span, 2..5);
    }

    #[test]
    fn index_list() {
        let indices = parse_index_list("0\n1\n390\n", 3).unwrap();
        let values = indices.iter().map(|i| i.value).collect::<Vec<_>>();
        assert_eq!(values, [0, 1, 390]);
        assert_eq!(indices[2].span, 4..7);

        let err = parse_index_list("0\n1\n", 3).unwrap_err();
        assert_eq!(err.message, "expected 3 entries, found 2");
        assert!(parse_index_list("0\nx\n1\n", 3).is_err());
    }
}
