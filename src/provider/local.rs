//! Local filesystem provider

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::PathProvider;
use crate::path_utils;
use crate::resource::uri::FILE_SCHEME;

/// The default provider: paths on the local disk, via `std::fs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalFs;

impl PathProvider for LocalFs {
    fn scheme(&self) -> &'static str {
        FILE_SCHEME
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Asks the OS for permission without opening the path, so FIFOs and
    /// device files never block the probe.
    fn is_readable(&self, path: &Path) -> bool {
        permitted(path, Permission::Read)
    }

    fn is_writable(&self, path: &Path) -> bool {
        permitted(path, Permission::Write)
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(fs::File::open(path)?))
    }

    fn open_write(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(fs::File::create(path)?))
    }

    fn to_native(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(path.to_path_buf())
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return env::current_dir();
        }
        Ok(path_utils::normalize(&std::path::absolute(path)?))
    }
}

#[derive(Debug, Clone, Copy)]
enum Permission {
    Read,
    Write,
}

#[cfg(unix)]
fn permitted(path: &Path, permission: Permission) -> bool {
    use rustix::fs::{Access, access};

    let mode = match permission {
        Permission::Read => Access::READ_OK,
        Permission::Write => Access::WRITE_OK,
    };
    access(path, mode).is_ok()
}

#[cfg(not(unix))]
fn permitted(path: &Path, permission: Permission) -> bool {
    match (fs::metadata(path), permission) {
        (Ok(_), Permission::Read) => true,
        (Ok(meta), Permission::Write) => !meta.permissions().readonly(),
        (Err(_), _) => false,
    }
}
