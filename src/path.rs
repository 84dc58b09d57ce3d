//! Input path resolution.
//!
//! Paths may arrive written for a different environment than the one the
//! reader runs in, e.g. a Windows drive mounted inside a Linux subsystem.
//! Resolution is best effort and never fails.

use std::path::{Path, PathBuf};

/// UNC prefixes of Linux-subsystem shares seen from a Windows host.
const UNC_MOUNT_PREFIXES: [&str; 2] = [r"\\wsl$\", r"\\wsl.localhost\"];

/// Resolve `raw` to the path the container should be opened with.
pub fn resolve(raw: &Path) -> PathBuf {
    tracing::debug!("Original path: {}", raw.display());

    if is_mounted_path(raw) {
        tracing::debug!("Path is under a cross-environment mount, using it unchanged");
        return raw.to_path_buf();
    }

    let canonical = match std::fs::canonicalize(raw).or_else(|_| std::path::absolute(raw)) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("Path normalization error: {}", e);
            None
        },
    };

    let resolved = choose_candidate(raw, canonical, |p| p.exists());
    tracing::debug!("Normalized path: {}", resolved.display());
    resolved
}

/// Whether `path` sits under a recognized cross-environment mount point.
pub fn is_mounted_path(path: &Path) -> bool {
    let Some(s) = path.to_str() else {
        return false;
    };

    if UNC_MOUNT_PREFIXES
        .iter()
        .any(|prefix| s.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix)))
    {
        return true;
    }

    // /mnt/<drive letter> or /mnt/<drive letter>/...
    match s.strip_prefix("/mnt/") {
        Some(rest) => {
            let mut chars = rest.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && matches!(chars.next(), None | Some('/'))
        },
        None => false,
    }
}

/// Pick between the canonical form and the raw input.
///
/// An existing raw path wins over a canonical form that does not exist.
pub fn choose_candidate(
    raw: &Path,
    canonical: Option<PathBuf>,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    match canonical {
        Some(canonical) if exists(&canonical) || !exists(raw) => canonical,
        _ => raw.to_path_buf(),
    }
}
