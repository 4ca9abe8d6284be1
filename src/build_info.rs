//! Build metadata captured at compile time by `build.rs`

/// When the binary was compiled
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple, e.g. x86_64-unknown-linux-gnu
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Commit the binary was built from; absent outside a git checkout
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Whether the working tree had uncommitted changes
pub const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value vergen substitutes when git metadata is unavailable
const PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// First 8 characters of the commit SHA, or `unknown`
pub fn git_sha_short() -> &'static str {
    match GIT_SHA {
        Some(sha) if sha.is_empty() || sha == PLACEHOLDER => "unknown",
        Some(sha) => sha.get(..8).unwrap_or(sha),
        None => "unknown",
    }
}

pub fn is_git_dirty() -> bool {
    GIT_DIRTY == Some("true")
}

/// Short version string, e.g. `0.1.0+1a2b3c4d`
pub fn version_string() -> String {
    let dirty = if is_git_dirty() { "-dirty" } else { "" };
    format!("{}+{}{}", PKG_VERSION, git_sha_short(), dirty)
}

/// Multi-line summary for logs and health reports
pub fn detailed_info() -> String {
    format!(
        "Version: {}\nBuilt: {}\nTarget: {} (opt {})\nRustc: {} ({})",
        version_string(),
        BUILD_TIMESTAMP,
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_is_present() {
        assert!(!BUILD_TIMESTAMP.is_empty());
        assert!(!CARGO_TARGET_TRIPLE.is_empty());
        assert!(!RUSTC_SEMVER.is_empty());
    }

    #[test]
    fn test_version_string_starts_with_package_version() {
        assert!(version_string().starts_with(PKG_VERSION));
        assert!(git_sha_short().len() <= 8 || git_sha_short() == "unknown");
    }

    #[test]
    fn test_detailed_info_lines() {
        let info = detailed_info();
        assert_eq!(info.lines().count(), 4);
        assert!(info.contains(CARGO_TARGET_TRIPLE));
    }
}
