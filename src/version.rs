//! Build metadata shown by `rootroulette --version` and sent to Wiktionary.
//!
//! The git fields are emitted by `build.rs`; a build from a source tarball
//! has none of them and reports the bare package version.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of the abbreviated commit hash.
const SHORT_SHA_LEN: usize = 7;

const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");
const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");
const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

/// Abbreviated commit the binary was built from.
pub fn commit() -> Option<&'static str> {
    GIT_SHA.map(|sha| sha.get(..SHORT_SHA_LEN).unwrap_or(sha))
}

/// Whether the checkout had uncommitted changes at build time.
pub fn git_dirty() -> bool {
    GIT_DIRTY == Some("true")
}

/// The `--version` line, e.g. `0.1.0 (main@3f2a9c1)`.
///
/// Uncommitted builds read `0.1.0 (main@3f2a9c1, dirty)`; builds outside a
/// git checkout read just `0.1.0`.
pub fn version_string() -> String {
    format_version(PKG_VERSION, GIT_BRANCH, commit(), git_dirty())
}

fn format_version(version: &str, branch: Option<&str>, sha: Option<&str>, dirty: bool) -> String {
    let Some(sha) = sha else {
        return version.to_string();
    };
    let branch = branch.unwrap_or("detached");
    let dirty = if dirty { ", dirty" } else { "" };
    format!("{version} ({branch}@{sha}{dirty})")
}

/// User-Agent for Wiktionary requests.
///
/// Wikimedia asks API clients to identify themselves; the string names the
/// game and its version.
pub fn user_agent() -> String {
    format!("rootroulette/{PKG_VERSION} (etymology quiz)")
}
