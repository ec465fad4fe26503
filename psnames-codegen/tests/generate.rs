//! End-to-end tests of table generation.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use pretty_assertions::assert_eq;
use psnames_codegen::{generate_code, CodegenPlan, Sources};

static GENERATED: &str = include_str!("../../read-psnames/generated/generated_psnames.rs");

fn resource_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../resources/psnames")
}

/// Copy the workspace resources into a temporary directory, replacing the
/// contents of `file` with `contents`.
fn resources_with(file: &str, contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for entry in fs::read_dir(resource_dir()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
    }
    fs::write(dir.path().join(file), contents).unwrap();
    dir
}

#[test]
fn generated_code_is_up_to_date() {
    let generated = generate_code(&Sources::in_dir(resource_dir())).unwrap();
    assert!(
        generated == GENERATED,
        "generated tables are stale; rerun 'cargo run --bin=codegen resources/codegen_plan.toml'"
    );
}

#[test]
fn small_glyph_list() {
    let dir = resources_with(
        "glyphlist.txt",
        "# a small list\ncent;00A2\ncentigrade;2103\ncents;2026\n",
    );
    let generated = generate_code(&Sources::in_dir(dir.path())).unwrap();
    assert!(generated.starts_with("// THIS FILE IS AUTOGENERATED."));

    let bytes = write_psnames::compile_glyph_list([
        ("cent", 0x00A2),
        ("centigrade", 0x2103),
        ("cents", 0x2026),
    ])
    .unwrap();
    let expected = format!("pub static ADOBE_GLYPH_LIST: [u8; {}] = [", bytes.len());
    assert!(generated.contains(&expected), "{generated}");
}

#[test]
fn zero_value_is_reported() {
    let dir = resources_with("glyphlist.txt", "A;0041\nnothing;0000\n");
    let err = generate_code(&Sources::in_dir(dir.path())).unwrap_err();
    assert!(err.message_text().starts_with("invalid glyph list"));
    assert_eq!(
        err.label(),
        Some("glyph name 'nothing' maps to 0, which is reserved")
    );
}

#[test]
fn conflicting_value_is_reported() {
    let dir = resources_with("glyphlist.txt", "A;0041\nA;0042\n");
    let err = generate_code(&Sources::in_dir(dir.path())).unwrap_err();
    assert_eq!(
        err.label(),
        Some("glyph name 'A' mapped to both 0x0041 and 0x0042")
    );
}

#[test]
fn non_ascii_name_is_reported() {
    let dir = resources_with("glyphlist.txt", "caf\u{e9};00E9\n");
    let err = generate_code(&Sources::in_dir(dir.path())).unwrap_err();
    assert!(err.label().unwrap().contains("non-ASCII byte 0xC3"));
}

#[test]
fn malformed_line_is_reported() {
    let dir = resources_with("glyphlist.txt", "A;0041\nB\n");
    let err = generate_code(&Sources::in_dir(dir.path())).unwrap_err();
    assert!(err.message_text().starts_with("failed to parse"));
    assert_eq!(err.label(), Some("expected 'name;codepoint'"));
}

#[test]
fn short_encoding_is_reported() {
    let dir = resources_with("standard_encoding.txt", "0\n1\n2\n");
    let err = generate_code(&Sources::in_dir(dir.path())).unwrap_err();
    assert_eq!(err.label(), Some("expected 256 entries, found 3"));
}

#[test]
fn invalid_sid_is_reported() {
    let mut encoding = vec!["0"; 256];
    encoding[65] = "391";
    let dir = resources_with("expert_encoding.txt", &encoding.join("\n"));
    let err = generate_code(&Sources::in_dir(dir.path())).unwrap_err();
    assert_eq!(err.label(), Some("SID 391 is not a standard glyph name"));
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate_code(&Sources::in_dir(dir.path())).unwrap_err();
    assert!(err.message_text().starts_with("error reading"));
}

#[test]
fn plan_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.toml");
    fs::write(
        &path,
        "[[generate]]\ntarget = \"out.rs\"\n\n\
         [[generate]]\ntarget = \"other.rs\"\n\
         [generate.sources]\nglyph_list = \"other.txt\"\n",
    )
    .unwrap();
    let plan = CodegenPlan::parse(&path).unwrap();
    assert_eq!(plan.generate.len(), 2);
    assert_eq!(plan.generate[0].sources, Sources::default());
    assert_eq!(plan.generate[1].sources.glyph_list, Path::new("other.txt"));
    assert_eq!(
        plan.generate[1].sources.mac_standard_names,
        Sources::default().mac_standard_names
    );
}

#[test]
fn workspace_plan_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../resources/codegen_plan.toml");
    let plan = CodegenPlan::parse(&path).unwrap();
    assert_eq!(plan.generate.len(), 1);
    assert_eq!(plan.generate[0].sources, Sources::default());
}

#[test]
fn cli_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("generated.rs");
    let status = Command::new(env!("CARGO_BIN_EXE_codegen"))
        .arg(&target)
        .arg("--resources")
        .arg(resource_dir())
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), GENERATED);
}

#[test]
fn cli_requires_one_target() {
    let status = Command::new(env!("CARGO_BIN_EXE_codegen"))
        .current_dir(resource_dir())
        .status()
        .unwrap();
    assert!(!status.success());

    let status = Command::new(env!("CARGO_BIN_EXE_codegen"))
        .current_dir(resource_dir())
        .args(["one.rs", "two.rs"])
        .status()
        .unwrap();
    assert!(!status.success());
}
