//! binary codegen tool.
//!
//! Takes the path of the file to generate, or of a codegen plan, and writes
//! the glyph name tables.

use std::{ffi::OsStr, path::Path};

use miette::miette;
use psnames_codegen::{CodegenPlan, Sources, DEFAULT_RESOURCE_DIR};

fn main() -> miette::Result<()> {
    env_logger::init();
    let args = flags::Args::from_env_or_exit();

    if args.target.extension() == Some(OsStr::new("toml")) {
        return run_plan(&args.target);
    }

    let sources = match &args.resources {
        Some(dir) => Sources::in_dir(dir),
        None => {
            ensure_correct_working_directory()?;
            Sources::default()
        }
    };
    generate(&sources, &args.target)
}

fn run_plan(path: &Path) -> miette::Result<()> {
    ensure_correct_working_directory()?;
    let plan = CodegenPlan::parse(path)?;
    for op in &plan.generate {
        generate(&op.sources, &op.target)?;
    }
    Ok(())
}

fn generate(sources: &Sources, target: &Path) -> miette::Result<()> {
    let generated = psnames_codegen::generate_code(sources)?;
    println!("writing {} bytes to {}", generated.len(), target.display());
    std::fs::write(target, generated)
        .map_err(|e| miette!("error writing '{}': {}", target.display(), e))
}

fn ensure_correct_working_directory() -> miette::Result<()> {
    if !Path::new(DEFAULT_RESOURCE_DIR).is_dir() {
        return Err(miette!(
            "codegen tool must be run from the root of the workspace"
        ));
    }
    Ok(())
}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Generate the glyph name tables
        cmd args {
            /// The file to write, or a codegen plan ending in '.toml'
            required target: PathBuf
            /// Read inputs from this directory instead of resources/psnames
            optional -r, --resources resources: PathBuf
        }
    }
}
