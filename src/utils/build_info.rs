/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// Short `vX.Y.Z (hash)` label for shell banners.
    pub fn short_label(&self) -> String {
        if self.git_status == "dirty" {
            format!("v{} ({}+dirty)", self.version, self.git_hash)
        } else {
            format!("v{} ({})", self.version, self.git_hash)
        }
    }

    /// Second banner line: when, where, and with what the binary was built.
    pub fn details_line(&self) -> String {
        format!(
            "built {} for {} [{}] with {}",
            self.timestamp, self.target, self.profile, self.rustc
        )
    }
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("POCKETBOOK_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("POCKETBOOK_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("POCKETBOOK_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("POCKETBOOK_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("POCKETBOOK_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("POCKETBOOK_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildMetadata {
        BuildMetadata {
            version: "1.2.3",
            git_hash: "abc1234",
            git_status: "clean",
            timestamp: "2024-06-15T10:00:00Z",
            target: "x86_64-unknown-linux-gnu",
            profile: "release",
            rustc: "rustc 1.80.0",
        }
    }

    #[test]
    fn short_label_includes_version() {
        let meta = current();
        assert!(meta.short_label().starts_with(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn short_label_flags_dirty_trees() {
        let dirty = BuildMetadata {
            git_status: "dirty",
            ..sample()
        };
        assert_eq!(sample().short_label(), "v1.2.3 (abc1234)");
        assert_eq!(dirty.short_label(), "v1.2.3 (abc1234+dirty)");
    }

    #[test]
    fn details_line_lists_build_environment() {
        assert_eq!(
            sample().details_line(),
            "built 2024-06-15T10:00:00Z for x86_64-unknown-linux-gnu [release] with rustc 1.80.0"
        );
    }

    #[test]
    fn embedded_metadata_is_populated() {
        let meta = current();
        assert!(!meta.rustc.is_empty());
        assert!(meta.details_line().contains(meta.profile));
    }
}
