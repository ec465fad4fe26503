//! Generating the glyph name tables used by read-psnames.
//!
//! The tables are compiled from the text files in `resources/psnames` with
//! [`write_psnames`], then written out as a Rust module.

mod emit;
mod error;
mod input;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use write_psnames::{compile_standard_names, TrieBuilder};

use emit::Emitter;
pub use error::ErrorReport;
pub use input::{
    parse_glyph_list, parse_index_list, parse_name_list, GlyphListEntry, ParseError, Spanned,
};

/// The default location of the input files, relative to the workspace root.
pub const DEFAULT_RESOURCE_DIR: &str = "resources/psnames";

/// The number of entries in a Type 1 encoding.
const ENCODING_LEN: usize = 256;

/// The paths of the files the tables are generated from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Sources {
    /// The Adobe Glyph List.
    pub glyph_list: PathBuf,
    /// The 258 standard Macintosh glyph names.
    pub mac_standard_names: PathBuf,
    /// The CFF standard strings that are glyph names.
    pub sid_standard_names: PathBuf,
    /// SIDs of the Adobe standard encoding.
    pub standard_encoding: PathBuf,
    /// SIDs of the Adobe expert encoding.
    pub expert_encoding: PathBuf,
}

impl Default for Sources {
    fn default() -> Self {
        Sources::in_dir(DEFAULT_RESOURCE_DIR)
    }
}

impl Sources {
    /// The standard file names, in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Sources {
            glyph_list: dir.join("glyphlist.txt"),
            mac_standard_names: dir.join("mac_standard_names.txt"),
            sid_standard_names: dir.join("sid_standard_names.txt"),
            standard_encoding: dir.join("standard_encoding.txt"),
            expert_encoding: dir.join("expert_encoding.txt"),
        }
    }
}

pub fn read_contents(path: &Path) -> Result<String, ErrorReport> {
    std::fs::read_to_string(path)
        .map_err(|e| ErrorReport::message(format!("error reading '{}': {}", path.display(), e)))
}

/// Generate the Rust source for all tables.
pub fn generate_code(sources: &Sources) -> Result<String, ErrorReport> {
    let mut emitter = Emitter::new();
    generate_standard_names(sources, &mut emitter)?;
    generate_glyph_list(&sources.glyph_list, &mut emitter)?;
    Ok(emitter.finish())
}

fn generate_standard_names(sources: &Sources, emitter: &mut Emitter) -> Result<(), ErrorReport> {
    let mac_text = read_contents(&sources.mac_standard_names)?;
    let mac = parse_name_list(&mac_text).map_err(|e| {
        ErrorReport::from_parse_error(e, &sources.mac_standard_names, &mac_text)
    })?;
    let sid_text = read_contents(&sources.sid_standard_names)?;
    let sid = parse_name_list(&sid_text).map_err(|e| {
        ErrorReport::from_parse_error(e, &sources.sid_standard_names, &sid_text)
    })?;
    let names = compile_standard_names(&mac, &sid)
        .map_err(|e| ErrorReport::message(format!("failed to pack standard names: {e}")))?;

    let standard = read_encoding(&sources.standard_encoding, sid.len())?;
    let expert = read_encoding(&sources.expert_encoding, sid.len())?;

    emitter.byte_array(
        "Standard glyph names, each followed by a NUL byte.\n\n\
         The Macintosh names that are not standard strings come first,\n\
         followed by the standard strings in SID order.",
        "STANDARD_GLYPH_NAMES",
        &names.names,
    );
    emitter.u16_array(
        "Offsets into [`STANDARD_GLYPH_NAMES`] for the standard Macintosh glyph names.",
        "MAC_GLYPH_NAMES",
        &names.mac,
    );
    emitter.u16_array(
        "Offsets into [`STANDARD_GLYPH_NAMES`] for the standard strings, by SID.",
        "SID_GLYPH_NAMES",
        &names.sid,
    );
    emitter.u16_array(
        "The SID of the glyph assigned to each code by the Adobe standard encoding.",
        "STANDARD_ENCODING",
        &standard,
    );
    emitter.u16_array(
        "The SID of the glyph assigned to each code by the Adobe expert encoding.",
        "EXPERT_ENCODING",
        &expert,
    );
    Ok(())
}

/// Read an encoding, ensuring every entry is a valid SID.
fn read_encoding(path: &Path, num_sids: usize) -> Result<Vec<u16>, ErrorReport> {
    let text = read_contents(path)?;
    let entries = parse_index_list(&text, ENCODING_LEN)
        .map_err(|e| ErrorReport::from_parse_error(e, path, &text))?;
    entries
        .into_iter()
        .map(|entry| {
            if (entry.value as usize) < num_sids {
                Ok(entry.value)
            } else {
                Err(ErrorReport::at_span(
                    format!("invalid encoding '{}'", path.display()),
                    format!("SID {} is not a standard glyph name", entry.value),
                    entry.span,
                    path,
                    &text,
                ))
            }
        })
        .collect()
}

fn generate_glyph_list(path: &Path, emitter: &mut Emitter) -> Result<(), ErrorReport> {
    let text = read_contents(path)?;
    let entries =
        parse_glyph_list(&text).map_err(|e| ErrorReport::from_parse_error(e, path, &text))?;

    let mut builder = TrieBuilder::new();
    for entry in &entries {
        builder.insert(entry.name, entry.value).map_err(|e| {
            ErrorReport::at_span(
                format!("invalid glyph list '{}'", path.display()),
                e.to_string(),
                entry.span.clone(),
                path,
                &text,
            )
        })?;
    }
    let trie = builder.build();
    log::trace!("glyph list trie:\n{}", trie.debug_tree());
    let bytes = trie
        .encode()
        .map_err(|e| ErrorReport::message(format!("failed to compile glyph list: {e}")))?;
    log::info!(
        "compiled {} glyph names into {} bytes",
        trie.len(),
        bytes.len()
    );

    emitter.byte_array(
        "A compressed version of the Adobe Glyph List.\n\n\
         Each name is stored in a trie, packed into a format that can be\n\
         searched in place with [`crate::lookup`].",
        "ADOBE_GLYPH_LIST",
        &bytes,
    );
    Ok(())
}

/// A list of outputs to generate, read from a TOML file.
#[derive(Clone, Debug, Deserialize)]
pub struct CodegenPlan {
    pub generate: Vec<CodegenOp>,
}

/// One generated file.
#[derive(Clone, Debug, Deserialize)]
pub struct CodegenOp {
    #[serde(default)]
    pub sources: Sources,
    pub target: PathBuf,
}

impl CodegenPlan {
    pub fn parse(path: &Path) -> Result<Self, ErrorReport> {
        let contents = read_contents(path)?;
        toml::from_str(&contents).map_err(|e| {
            ErrorReport::message(format!("failed to parse plan '{}': {e}", path.display()))
        })
    }
}
