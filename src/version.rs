//! Build metadata embedded by `build.rs`.

use std::fmt;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => "unknown",
    }
}

/// What was built, from which commit, and when.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub sha: &'static str,
    pub dirty: bool,
    pub built_at: &'static str,
}

impl BuildInfo {
    /// Metadata for the running binary. Git fields read "unknown" when
    /// the crate was built outside a git checkout.
    pub fn current() -> Self {
        Self {
            version: PKG_VERSION,
            branch: or_unknown(option_env!("VERGEN_GIT_BRANCH")),
            sha: or_unknown(option_env!("VERGEN_GIT_SHA")),
            dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
            built_at: or_unknown(option_env!("VERGEN_BUILD_TIMESTAMP")),
        }
    }

    fn short_sha(&self) -> &'static str {
        &self.sha[..7.min(self.sha.len())]
    }
}

/// `{version}+{branch}.{sha}`, with `.dirty` appended for modified trees.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}.{}", self.version, self.branch, self.short_sha())?;
        if self.dirty {
            f.write_str(".dirty")?;
        }
        Ok(())
    }
}

/// Full version string for logs and `--version` output.
pub fn version_string() -> String {
    BuildInfo::current().to_string()
}
