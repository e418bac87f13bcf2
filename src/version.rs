//! Build metadata embedded by `build.rs`.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder vergen emits when git metadata is unavailable.
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Short commit SHA, if the build ran inside a git checkout.
pub fn git_sha() -> Option<&'static str> {
    option_env!("VERGEN_GIT_SHA")
        .filter(|sha| !sha.is_empty() && *sha != VERGEN_PLACEHOLDER)
        .map(|sha| &sha[..7.min(sha.len())])
}

/// Version string reported by the health RPC and `--version`.
///
/// `0.1.0+abc1234`, `0.1.0+abc1234.dirty`, or just `0.1.0` outside git.
pub fn version_string() -> String {
    match git_sha() {
        Some(sha) => {
            let dirty = option_env!("VERGEN_GIT_DIRTY") == Some("true");
            format!("{PKG_VERSION}+{sha}{}", if dirty { ".dirty" } else { "" })
        }
        None => PKG_VERSION.to_string(),
    }
}
