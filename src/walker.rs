//! Tree walker producing one descriptor per candidate file.
//!
//! The walk enumerates the immediate subdirectories of the root and, as
//! soon as the first one is seen, collects every file under the whole root
//! subtree via a recursive glob. A root without any subdirectory therefore
//! yields no files. That scope is intentional compatibility behavior and
//! is pinned by tests; see DESIGN.md before changing it.

use crate::error::ScanError;
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One file as seen by the walker. Borrowed by the rule evaluator and
/// discarded after evaluation.
pub struct FileDescriptor {
    /// Leaf name only.
    pub name: String,
    /// Full path as printed in reports.
    pub path: String,
    /// Extension with its leading dot; empty when the name has none.
    pub extension: String,
    /// Byte length from filesystem metadata.
    pub len: u64,
}

/// Walks a directory tree and yields [`FileDescriptor`]s in traversal
/// order.
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    pub fn new(root: &Path) -> Result<Self, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::InvalidRoot(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Collect descriptors for the scan pass. Ordering is deterministic for
    /// a fixed filesystem: directories are visited in sorted entry order.
    pub fn collect(&self) -> Result<Vec<FileDescriptor>, ScanError> {
        if !self.has_subdirectory()? {
            return Ok(Vec::new());
        }

        let pattern = self.root.join("**").join("*").to_string_lossy().to_string();
        let mut files = Vec::new();
        for entry in glob(&pattern)? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            files.push(describe(&path)?);
        }
        Ok(files)
    }

    fn has_subdirectory(&self) -> Result<bool, ScanError> {
        for entry in fs::read_dir(&self.root).map_err(|e| ScanError::io(&self.root, e))? {
            let entry = entry.map_err(|e| ScanError::io(&self.root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| ScanError::io(entry.path(), e))?;
            if file_type.is_dir() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn describe(path: &Path) -> Result<FileDescriptor, ScanError> {
    let meta = fs::metadata(path).map_err(|e| ScanError::io(path, e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(FileDescriptor {
        extension: extension_of(&name),
        path: path.to_string_lossy().to_string(),
        name,
        len: meta.len(),
    })
}

/// Extension from the final period, leading dot included. A name whose only
/// period is the last character has no extension; a dotfile like
/// `.ds_store` is all extension.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(i) if i + 1 < name.len() => name[i..].to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_root_without_subdirectory_yields_no_files() {
        // Compatibility: the scan only proceeds once the root has at least
        // one subdirectory, even when files sit directly in the root.
        let dir = tempdir().unwrap();
        File::create(dir.path().join("stray.txt")).unwrap();
        let walker = Walker::new(dir.path()).unwrap();
        assert!(walker.collect().unwrap().is_empty());
    }

    #[test]
    fn test_one_subdirectory_unlocks_the_whole_tree() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deep")).unwrap();
        File::create(dir.path().join("top.txt")).unwrap();
        File::create(dir.path().join("sub/mid.txt")).unwrap();
        File::create(dir.path().join("sub/deep/leaf.txt")).unwrap();

        let walker = Walker::new(dir.path()).unwrap();
        let names: Vec<String> = walker
            .collect()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names.len(), 3);
        for expected in ["top.txt", "mid.txt", "leaf.txt"] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_descriptor_captures_metadata() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut f = File::create(dir.path().join("sub/data.tmp")).unwrap();
        f.write_all(b"abc").unwrap();

        let walker = Walker::new(dir.path()).unwrap();
        let files = walker.collect().unwrap();
        assert_eq!(files.len(), 1);
        let d = &files[0];
        assert_eq!(d.name, "data.tmp");
        assert_eq!(d.extension, ".tmp");
        assert_eq!(d.len, 3);
        assert!(d.path.ends_with("sub/data.tmp"));
    }

    #[test]
    fn test_missing_root_is_rejected() {
        assert!(Walker::new(Path::new("/nonexistent/synaudit-root")).is_err());
    }

    #[test]
    fn test_extension_of_edges() {
        assert_eq!(extension_of("report.tmp"), ".tmp");
        assert_eq!(extension_of(".ds_store"), ".ds_store");
        assert_eq!(extension_of("trailing."), "");
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of("a.b.swf"), ".swf");
    }
}
