//! The generated glyph name tables.
//!
//! These are produced by `psnames-codegen` from the files in
//! `resources/psnames`, and should be regenerated rather than edited.

include!("../generated/generated_psnames.rs");
