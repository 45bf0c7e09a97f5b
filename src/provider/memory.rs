//! In-process provider
//!
//! Holds a small tree of directories and files behind a shared lock. Clones
//! share the same tree, so a test can keep one handle for setup and hand
//! another to resources under test.

use std::collections::HashMap;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

use super::PathProvider;
use crate::path_utils;

/// Scheme of locators produced by [`MemoryFs`].
pub const MEMORY_SCHEME: &str = "memory";

#[derive(Debug, Clone)]
struct MemoryFile {
    data: Vec<u8>,
    modified: SystemTime,
    read_only: bool,
}

#[derive(Debug)]
struct Tree {
    files: HashMap<PathBuf, MemoryFile>,
    dirs: HashMap<PathBuf, SystemTime>,
}

impl Default for Tree {
    fn default() -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(PathBuf::from("/"), SystemTime::now());
        Self {
            files: HashMap::new(),
            dirs,
        }
    }
}

/// Provider backed by process memory; paths are rooted at `/`.
///
/// Relative paths are anchored at the root. There is no native-file mapping:
/// [`PathProvider::to_native`] always fails with
/// [`io::ErrorKind::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    tree: Arc<RwLock<Tree>>,
}

fn key(path: &Path) -> PathBuf {
    path_utils::normalize(&Path::new("/").join(path))
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", path.display()),
    )
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_tree(&self) -> RwLockReadGuard<'_, Tree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tree(&self) -> RwLockWriteGuard<'_, Tree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a directory and all missing ancestors.
    pub fn create_dir_all(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let target = key(path.as_ref());
        let mut tree = self.write_tree();

        for ancestor in target.ancestors() {
            if tree.files.contains_key(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{}: a file is in the way", ancestor.display()),
                ));
            }
        }

        let now = SystemTime::now();
        for ancestor in target.ancestors() {
            tree.dirs.entry(ancestor.to_path_buf()).or_insert(now);
        }
        Ok(())
    }

    /// Create or replace a file; the parent directory must exist.
    pub fn write(&self, path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> io::Result<()> {
        let target = key(path.as_ref());
        let mut tree = self.write_tree();
        check_writable(&tree, &target)?;
        tree.files.insert(
            target,
            MemoryFile {
                data: data.as_ref().to_vec(),
                modified: SystemTime::now(),
                read_only: false,
            },
        );
        Ok(())
    }

    /// Full content of a file.
    pub fn read(&self, path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        let target = key(path.as_ref());
        let tree = self.read_tree();
        tree.files
            .get(&target)
            .map(|file| file.data.clone())
            .ok_or_else(|| not_found(&target))
    }

    /// Toggle the read-only flag of an existing file.
    pub fn set_read_only(&self, path: impl AsRef<Path>, read_only: bool) -> io::Result<()> {
        let target = key(path.as_ref());
        let mut tree = self.write_tree();
        let file = tree
            .files
            .get_mut(&target)
            .ok_or_else(|| not_found(&target))?;
        file.read_only = read_only;
        Ok(())
    }

    fn commit(&self, path: &Path, data: &[u8]) {
        let mut tree = self.write_tree();
        if let Some(file) = tree.files.get_mut(path) {
            file.data = data.to_vec();
            file.modified = SystemTime::now();
        }
    }
}

fn check_writable(tree: &Tree, target: &Path) -> io::Result<()> {
    if tree.dirs.contains_key(target) {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{}: is a directory", target.display()),
        ));
    }
    let parent = target.parent().unwrap_or_else(|| Path::new("/"));
    if !tree.dirs.contains_key(parent) {
        return Err(not_found(parent));
    }
    if tree.files.get(target).is_some_and(|file| file.read_only) {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{}: read-only file", target.display()),
        ));
    }
    Ok(())
}

/// Buffers writes and publishes them to the tree on flush and on drop.
struct MemoryWriter {
    fs: MemoryFs,
    path: PathBuf,
    buffer: Vec<u8>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.fs.commit(&self.path, &self.buffer);
        Ok(())
    }
}

impl Drop for MemoryWriter {
    fn drop(&mut self) {
        self.fs.commit(&self.path, &self.buffer);
    }
}

impl PathProvider for MemoryFs {
    fn scheme(&self) -> &'static str {
        MEMORY_SCHEME
    }

    fn exists(&self, path: &Path) -> bool {
        let target = key(path);
        let tree = self.read_tree();
        tree.files.contains_key(&target) || tree.dirs.contains_key(&target)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read_tree().dirs.contains_key(&key(path))
    }

    fn is_readable(&self, path: &Path) -> bool {
        self.exists(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        let target = key(path);
        let tree = self.read_tree();
        tree.dirs.contains_key(&target)
            || tree.files.get(&target).is_some_and(|file| !file.read_only)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        let target = key(path);
        let tree = self.read_tree();
        if let Some(file) = tree.files.get(&target) {
            return Ok(file.data.len() as u64);
        }
        if tree.dirs.contains_key(&target) {
            return Ok(0);
        }
        Err(not_found(&target))
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        let target = key(path);
        let tree = self.read_tree();
        tree.files
            .get(&target)
            .map(|file| file.modified)
            .or_else(|| tree.dirs.get(&target).copied())
            .ok_or_else(|| not_found(&target))
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let target = key(path);
        let tree = self.read_tree();
        if tree.dirs.contains_key(&target) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{}: is a directory", target.display()),
            ));
        }
        let file = tree.files.get(&target).ok_or_else(|| not_found(&target))?;
        Ok(Box::new(Cursor::new(file.data.clone())))
    }

    fn open_write(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        let target = key(path);
        {
            let mut tree = self.write_tree();
            check_writable(&tree, &target)?;
            let file = tree.files.entry(target.clone()).or_insert(MemoryFile {
                data: Vec::new(),
                modified: SystemTime::now(),
                read_only: false,
            });
            file.data.clear();
            file.modified = SystemTime::now();
        }

        Ok(Box::new(MemoryWriter {
            fs: self.clone(),
            path: target,
            buffer: Vec::new(),
        }))
    }

    fn to_native(&self, path: &Path) -> io::Result<PathBuf> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("{}: memory paths have no native file", key(path).display()),
        ))
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(key(path))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn read_all(fs: &MemoryFs, path: &str) -> String {
        let mut content = String::new();
        fs.open_read(Path::new(path))
            .expect("open read")
            .read_to_string(&mut content)
            .expect("read");
        content
    }

    #[test]
    fn test_root_always_exists() {
        let fs = MemoryFs::new();
        assert!(fs.exists(Path::new("/")));
        assert!(fs.is_dir(Path::new("/")));
    }

    #[test]
    fn test_write_and_read_back() {
        let fs = MemoryFs::new();
        fs.create_dir_all("/docs").expect("mkdir");
        fs.write("/docs/readme.md", "# hi").expect("write");

        assert!(fs.exists(Path::new("/docs/readme.md")));
        assert!(!fs.is_dir(Path::new("/docs/readme.md")));
        assert_eq!(fs.size(Path::new("/docs/readme.md")).expect("size"), 4);
        assert_eq!(read_all(&fs, "/docs/readme.md"), "# hi");
    }

    #[test]
    fn test_relative_paths_anchor_at_root() {
        let fs = MemoryFs::new();
        fs.write("top.txt", "x").expect("write");
        assert!(fs.exists(Path::new("/top.txt")));
        assert_eq!(
            fs.absolute(Path::new("a/../top.txt")).expect("absolute"),
            PathBuf::from("/top.txt")
        );
    }

    #[test]
    fn test_write_requires_parent_directory() {
        let fs = MemoryFs::new();
        let err = fs.write("/missing/file.txt", "x").expect_err("no parent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_create_dir_all_rejects_file_in_the_way() {
        let fs = MemoryFs::new();
        fs.write("/blocker", "x").expect("write");
        let err = fs.create_dir_all("/blocker/sub").expect_err("file in the way");
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_open_write_truncates_then_commits() {
        let fs = MemoryFs::new();
        fs.write("/f.txt", "original content").expect("write");

        let mut writer = fs.open_write(Path::new("/f.txt")).expect("open write");
        assert_eq!(fs.read("/f.txt").expect("read"), b"");

        writer.write_all(b"new").expect("write");
        writer.flush().expect("flush");
        assert_eq!(fs.read("/f.txt").expect("read"), b"new");

        writer.write_all(b" tail").expect("write");
        drop(writer);
        assert_eq!(fs.read("/f.txt").expect("read"), b"new tail");
    }

    #[test]
    fn test_open_write_on_directory_fails() {
        let fs = MemoryFs::new();
        fs.create_dir_all("/dir").expect("mkdir");
        let err = fs
            .open_write(Path::new("/dir"))
            .err()
            .expect("directory is not writable content");
        assert_eq!(err.kind(), io::ErrorKind::IsADirectory);
    }

    #[test]
    fn test_read_only_files() {
        let fs = MemoryFs::new();
        fs.write("/locked", "x").expect("write");
        fs.set_read_only("/locked", true).expect("set read only");

        assert!(!fs.is_writable(Path::new("/locked")));
        let err = fs
            .open_write(Path::new("/locked"))
            .err()
            .expect("read-only file");
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_to_native_is_unsupported() {
        let fs = MemoryFs::new();
        let err = fs
            .to_native(Path::new("/anything"))
            .expect_err("no native mapping");
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }

    #[test]
    fn test_to_uri_uses_memory_scheme() {
        let fs = MemoryFs::new();
        fs.create_dir_all("/a/b").expect("mkdir");
        assert_eq!(
            fs.to_uri(Path::new("/a/b")).expect("uri").to_string(),
            "memory:///a/b/"
        );
        assert_eq!(
            fs.to_uri(Path::new("/a/b/c.txt")).expect("uri").to_string(),
            "memory:///a/b/c.txt"
        );
    }

    #[test]
    fn test_clones_share_state() {
        let fs = MemoryFs::new();
        let other = fs.clone();
        other.write("/shared.txt", "both").expect("write");
        assert_eq!(fs.read("/shared.txt").expect("read"), b"both");
    }
}
