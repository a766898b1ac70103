//! Directory pairing resolution.
//!
//! A directory whose name ends in `.enc` is the encrypted twin of a sibling
//! plaintext directory with the suffix stripped: `notes.enc` pairs with
//! `notes`. Matching is purely name-based; directory contents are never
//! inspected to decide membership.

use crate::constants::ENCRYPTED_DIR_SUFFIX;
use crate::errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One matched unit of work: a plaintext directory and its encrypted twin.
///
/// Invariant: `encrypted` is `plain` with `.enc` appended; `plain` is
/// derived by stripping exactly the last four characters of `encrypted`.
///
/// # Examples
///
/// ```
/// use direnc::DirectoryPair;
/// use std::path::{Path, PathBuf};
///
/// let pair = DirectoryPair::from_encrypted(PathBuf::from("proj/notes.enc"));
/// assert_eq!(pair.plain, Path::new("proj/notes"));
/// assert_eq!(pair.encrypted, Path::new("proj/notes.enc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPair {
    /// The plaintext content directory.
    pub plain: PathBuf,
    /// The sibling directory holding the encrypted counterpart of each file.
    pub encrypted: PathBuf,
}

impl DirectoryPair {
    /// Derives a pair from the path of an encrypted twin directory.
    ///
    /// The plaintext path is the encrypted path minus the trailing `.enc`.
    /// A directory named exactly `.enc` yields an empty-named plaintext
    /// path; the degenerate case is kept as-is rather than special-cased.
    pub fn from_encrypted(encrypted: PathBuf) -> Self {
        let s = encrypted.as_os_str().to_string_lossy();
        let plain = PathBuf::from(&s[..s.len() - ENCRYPTED_DIR_SUFFIX.len()]);
        DirectoryPair { plain, encrypted }
    }
}

/// Finds every directory pair under `root`, recursively.
///
/// Any directory anywhere below `root` whose name ends with `.enc` is
/// matched. The walk is sorted by file name so results are deterministic
/// for a given filesystem state; callers must not otherwise depend on the
/// ordering.
///
/// # Errors
///
/// Unreadable entries encountered during the walk are skipped; only the
/// reachable portion of the tree is considered.
pub fn find_directory_pairs(root: &Path) -> AppResult<Vec<DirectoryPair>> {
    let mut pairs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(ENCRYPTED_DIR_SUFFIX) {
            pairs.push(DirectoryPair::from_encrypted(entry.into_path()));
        }
    }
    debug!("Found {} directory pairs under {:?}", pairs.len(), root);
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_from_encrypted_strips_suffix() {
        let pair = DirectoryPair::from_encrypted(PathBuf::from("/data/notes.enc"));
        assert_eq!(pair.plain, PathBuf::from("/data/notes"));
        assert_eq!(pair.encrypted, PathBuf::from("/data/notes.enc"));
    }

    #[test]
    fn test_from_encrypted_nested_path() {
        let pair = DirectoryPair::from_encrypted(PathBuf::from("proj/sub.enc"));
        assert_eq!(pair.plain, PathBuf::from("proj/sub"));
    }

    #[test]
    fn test_find_pairs_matches_by_suffix_only() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("notes.enc")).unwrap();
        fs::create_dir(root.path().join("notes")).unwrap();
        fs::create_dir(root.path().join("other")).unwrap();
        // A file with the suffix is not a directory and must not match
        fs::write(root.path().join("file.enc"), "x").unwrap();

        let pairs = find_directory_pairs(root.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].encrypted, root.path().join("notes.enc"));
        assert_eq!(pairs[0].plain, root.path().join("notes"));
    }

    #[test]
    fn test_find_pairs_recurses() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("a/b/deep.enc")).unwrap();
        fs::create_dir_all(root.path().join("top.enc")).unwrap();

        let pairs = find_directory_pairs(root.path()).unwrap();
        let encrypted: Vec<_> = pairs.iter().map(|p| p.encrypted.clone()).collect();
        assert_eq!(pairs.len(), 2);
        assert!(encrypted.contains(&root.path().join("a/b/deep.enc")));
        assert!(encrypted.contains(&root.path().join("top.enc")));
    }

    #[test]
    fn test_find_pairs_deterministic_order() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("zz.enc")).unwrap();
        fs::create_dir(root.path().join("aa.enc")).unwrap();
        fs::create_dir(root.path().join("mm.enc")).unwrap();

        let first = find_directory_pairs(root.path()).unwrap();
        let second = find_directory_pairs(root.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].encrypted, root.path().join("aa.enc"));
        assert_eq!(first[2].encrypted, root.path().join("zz.enc"));
    }

    #[test]
    fn test_find_pairs_degenerate_dot_enc() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join(".enc")).unwrap();

        let pairs = find_directory_pairs(root.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        // Stripping the last four characters leaves the bare root prefix;
        // the degenerate pair is matched rather than special-cased.
        assert_eq!(pairs[0].encrypted, root.path().join(".enc"));
    }

    #[test]
    fn test_find_pairs_empty_root() {
        let root = tempdir().unwrap();
        let pairs = find_directory_pairs(root.path()).unwrap();
        assert!(pairs.is_empty());
    }
}
