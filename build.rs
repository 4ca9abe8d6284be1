use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};
use vergen_gitcl::{Emitter as GitEmitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;
    let cargo = CargoBuilder::default()
        .opt_level(true)
        .target_triple(true)
        .build()?;
    let rustc = RustcBuilder::default()
        .semver(true)
        .channel(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    // Outside a git checkout vergen emits placeholder values instead
    let gitcl = GitclBuilder::default().sha(true).dirty(true).build()?;
    GitEmitter::default().add_instructions(&gitcl)?.emit()?;

    copy_profiles()?;
    Ok(())
}

/// Copies `config/*.toml` profiles next to the binary
///
/// Release builds only ship the release profile.
fn copy_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let profile = env::var("PROFILE")?;

    // OUT_DIR is target/<profile>/build/<crate>-<hash>/out
    let target_dir = out_dir
        .ancestors()
        .nth(3)
        .ok_or("could not determine target directory")?;
    let dest = target_dir.join("config");
    fs::create_dir_all(&dest)?;

    let shipped: &[&str] = if profile == "release" {
        &["release"]
    } else {
        &["debug", "release"]
    };

    for name in shipped {
        let file = format!("{name}.toml");
        let src = Path::new("config").join(&file);
        println!("cargo:rerun-if-changed={}", src.display());
        if src.exists() {
            fs::copy(&src, dest.join(&file))?;
        }
    }

    Ok(())
}
