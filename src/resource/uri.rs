//! Hierarchical resource locators.
//!
//! A [`ResourceUri`] names a location inside a path provider as
//! `scheme://` followed by the percent-encoded absolute path, e.g.
//! `file:///tmp/report%20v2.txt`. Only host-less locators are supported:
//! every provider in this crate addresses its own root.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, invalid_uri};

/// Scheme used by the local filesystem provider.
pub const FILE_SCHEME: &str = "file";

const SCHEME_SEPARATOR: &str = "://";

/// Locator for a resource: scheme plus absolute, decoded path.
///
/// The path is kept as raw bytes so that file names which are not valid
/// UTF-8 survive a render and parse cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceUri {
    scheme: String,
    path: Vec<u8>,
}

impl ResourceUri {
    /// Build a locator from an absolute path.
    ///
    /// Backslashes become forward slashes and a leading `/` is added when
    /// missing (Windows drive paths render as `/C:/...`).
    pub fn from_path(scheme: impl Into<String>, path: &Path) -> Self {
        let mut rendered = native_bytes(path);
        if rendered.first() != Some(&b'/') {
            rendered.insert(0, b'/');
        }

        Self {
            scheme: scheme.into(),
            path: rendered,
        }
    }

    /// Parse a locator of the form `scheme://[localhost]/path`.
    ///
    /// Queries and fragments are rejected: they have no meaning for a path.
    pub fn parse(input: &str) -> Result<Self> {
        let scheme_end = input
            .find(SCHEME_SEPARATOR)
            .ok_or_else(|| invalid_uri(input, "missing '://' after scheme"))?;
        let scheme = &input[..scheme_end];
        if !is_valid_scheme(scheme) {
            return Err(invalid_uri(input, "scheme is empty or malformed"));
        }

        let rest = &input[scheme_end + SCHEME_SEPARATOR.len()..];
        if rest.contains('?') {
            return Err(invalid_uri(input, "query component is not allowed"));
        }
        if rest.contains('#') {
            return Err(invalid_uri(input, "fragment component is not allowed"));
        }

        let path_start = rest
            .find('/')
            .ok_or_else(|| invalid_uri(input, "path must be absolute"))?;
        let authority = &rest[..path_start];
        if !authority.is_empty() && !authority.eq_ignore_ascii_case("localhost") {
            return Err(invalid_uri(input, "remote hosts are not supported"));
        }

        let path = percent_decode(&rest[path_start..])
            .ok_or_else(|| invalid_uri(input, "path contains an invalid escape sequence"))?;

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            path,
        })
    }

    /// Mark the locator as naming a directory.
    #[must_use]
    pub fn with_trailing_slash(mut self) -> Self {
        if self.path.last() != Some(&b'/') {
            self.path.push(b'/');
        }
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Decoded absolute path, always starting with `/`.
    ///
    /// Bytes that are not UTF-8 are shown as U+FFFD here; [`ResourceUri::to_path`]
    /// keeps them.
    pub fn path(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.path)
    }

    /// Path as a native path buffer.
    #[cfg(unix)]
    pub fn to_path(&self) -> PathBuf {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        PathBuf::from(OsString::from_vec(self.path.clone()))
    }

    /// Path as a native path buffer.
    #[cfg(not(unix))]
    pub fn to_path(&self) -> PathBuf {
        let path = self.path();
        let bytes = path.as_bytes();
        if bytes.len() >= 3 && bytes[0] == b'/' && bytes[2] == b':' {
            return PathBuf::from(&path[1..]);
        }
        PathBuf::from(path.as_ref())
    }

    pub fn is_file(&self) -> bool {
        self.scheme == FILE_SCHEME
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.scheme,
            SCHEME_SEPARATOR,
            percent_encode(&self.path)
        )
    }
}

impl FromStr for ResourceUri {
    type Err = crate::error::ResourceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn is_path_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~' | b'/' | b':')
}

#[cfg(unix)]
fn native_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;

    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn native_bytes(path: &Path) -> Vec<u8> {
    crate::path_utils::to_forward_slashes(path).into_bytes()
}

fn percent_encode(path: &[u8]) -> String {
    let mut encoded = String::with_capacity(path.len());
    for &byte in path {
        if is_path_safe(byte) {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}

fn percent_decode(input: &str) -> Option<Vec<u8>> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    Some(decoded)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ResourceError;

    #[test]
    fn test_display_encodes_reserved_characters() {
        let uri = ResourceUri::from_path(FILE_SCHEME, Path::new("/tmp/report v2#final.txt"));
        assert_eq!(uri.to_string(), "file:///tmp/report%20v2%23final.txt");
    }

    #[test]
    fn test_parse_decodes_path() {
        let uri = ResourceUri::parse("file:///tmp/report%20v2.txt").expect("valid uri");
        assert_eq!(uri.scheme(), "file");
        assert_eq!(uri.path(), "/tmp/report v2.txt");
        assert!(uri.is_file());
    }

    #[test]
    fn test_parse_accepts_localhost() {
        let uri = ResourceUri::parse("FILE://localhost/etc/hosts").expect("valid uri");
        assert_eq!(uri.scheme(), "file");
        assert_eq!(uri.path(), "/etc/hosts");
    }

    #[test]
    fn test_parse_roundtrips_display() {
        let original = ResourceUri::from_path("memory", Path::new("/a/ü b/c"));
        let parsed: ResourceUri = original.to_string().parse().expect("valid uri");
        assert_eq!(parsed, original);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_survives_round_trip() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/bad\xFFname"));
        let uri = ResourceUri::from_path(FILE_SCHEME, path);
        assert_eq!(uri.to_string(), "file:///tmp/bad%FFname");

        let parsed = ResourceUri::parse(&uri.to_string()).expect("valid uri");
        assert_eq!(parsed.to_path(), path);
    }

    macro_rules! test_parse_rejects {
        ($test_name:ident, $input:expr, $reason:expr) => {
            #[test]
            fn $test_name() {
                let err = ResourceUri::parse($input).expect_err("parse should fail");
                assert!(matches!(err, ResourceError::InvalidUri { .. }));
                assert!(
                    err.to_string().contains($reason),
                    "expected '{}' in '{}'",
                    $reason,
                    err
                );
            }
        };
    }

    test_parse_rejects!(test_parse_rejects_missing_scheme, "/tmp/x", "missing '://'");
    test_parse_rejects!(test_parse_rejects_bad_scheme, "1x:///tmp", "malformed");
    test_parse_rejects!(test_parse_rejects_query, "file:///tmp/x?a=1", "query");
    test_parse_rejects!(test_parse_rejects_fragment, "file:///tmp/x#top", "fragment");
    test_parse_rejects!(test_parse_rejects_host, "file://server/share/x", "remote hosts");
    test_parse_rejects!(test_parse_rejects_relative, "file://", "absolute");
    test_parse_rejects!(test_parse_rejects_bad_escape, "file:///tmp/%zz", "escape");
}
