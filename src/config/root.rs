//! Package root (GOPATH) resolution.
//!
//! Resolved once at startup; nothing below the command layer reads the
//! environment.

use crate::core::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Directory below the root that holds package sources.
const SOURCE_DIR: &str = "src";

/// The GOPATH entry a search runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRoot {
    root: PathBuf,
}

impl PackageRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the root for `search_path` from, in order: an explicit GOPATH
    /// value, the configured root, then `$HOME/go`.
    ///
    /// The value may be a path list; the first entry containing
    /// `search_path` wins.
    pub fn resolve(
        search_path: &Path,
        gopath: Option<&OsStr>,
        configured_root: Option<&str>,
    ) -> Result<Self> {
        Self::resolve_with_fallback(search_path, gopath, configured_root, default_gopath)
    }

    /// [`PackageRoot::resolve`] with `fallback` in place of `$HOME/go`.
    pub fn resolve_with_fallback(
        search_path: &Path,
        gopath: Option<&OsStr>,
        configured_root: Option<&str>,
        fallback: impl FnOnce() -> Option<OsString>,
    ) -> Result<Self> {
        let candidates = gopath
            .filter(|value| !value.is_empty())
            .map(OsStr::to_os_string)
            .or_else(|| configured_root.filter(|r| !r.is_empty()).map(OsString::from))
            .or_else(fallback)
            .ok_or(Error::NoPackageRoot)?;

        std::env::split_paths(&candidates)
            .filter(|entry| !entry.as_os_str().is_empty())
            .map(|entry| normalize(&entry))
            .find(|entry| search_path.starts_with(entry))
            .map(Self::new)
            .ok_or_else(|| Error::OutsidePackageRoot {
                path: search_path.to_path_buf(),
                root: candidates.to_string_lossy().into_owned(),
            })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Import-style path of a package directory: `dir` with `<root>/src/`
    /// removed. Directories outside `<root>/src` keep their full path.
    pub fn package_path(&self, dir: &Path) -> String {
        match dir.strip_prefix(self.root.join(SOURCE_DIR)) {
            Ok(relative) if !relative.as_os_str().is_empty() => {
                relative.to_string_lossy().into_owned()
            }
            _ => dir.to_string_lossy().into_owned(),
        }
    }
}

fn default_gopath() -> Option<OsString> {
    dirs::home_dir().map(|home| home.join("go").into_os_string())
}

/// Make `path` absolute against the current directory and clean it
/// lexically (`.` dropped, `..` applied).
pub fn resolve_search_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| Error::PathResolution {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_gopath_wins() {
        let root = PackageRoot::resolve(
            Path::new("/work/go/src/acme"),
            Some(OsStr::new("/work/go")),
            Some("/elsewhere"),
        )
        .unwrap();
        assert_eq!(root.path(), Path::new("/work/go"));
    }

    #[test]
    fn test_configured_root_used_without_gopath() {
        let root = PackageRoot::resolve(
            Path::new("/srv/go/src/acme"),
            Some(OsStr::new("")),
            Some("/srv/go"),
        )
        .unwrap();
        assert_eq!(root.path(), Path::new("/srv/go"));
    }

    #[test]
    fn test_fallback_used_when_nothing_configured() {
        let root = PackageRoot::resolve_with_fallback(
            Path::new("/home/gopher/go/src/acme"),
            None,
            Some(""),
            || Some(OsString::from("/home/gopher/go")),
        )
        .unwrap();
        assert_eq!(root.path(), Path::new("/home/gopher/go"));
    }

    #[test]
    fn test_no_root_at_all_is_fatal() {
        let err = PackageRoot::resolve_with_fallback(
            Path::new("/work/go/src/acme"),
            Some(OsStr::new("")),
            None,
            || None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NoPackageRoot));
    }

    #[test]
    fn test_gopath_list_picks_containing_entry() {
        let root = PackageRoot::resolve(
            Path::new("/b/go/src/x"),
            Some(OsStr::new("/a/go:/b/go")),
            None,
        )
        .unwrap();
        assert_eq!(root.path(), Path::new("/b/go"));
    }

    #[test]
    fn test_outside_root_is_rejected() {
        let err = PackageRoot::resolve(Path::new("/tmp/x"), Some(OsStr::new("/work/go")), None)
            .unwrap_err();
        assert!(matches!(err, Error::OutsidePackageRoot { .. }));
    }

    #[test]
    fn test_prefix_must_match_whole_components() {
        let err = PackageRoot::resolve(Path::new("/work/go2/src"), Some(OsStr::new("/work/go")), None)
            .unwrap_err();
        assert!(matches!(err, Error::OutsidePackageRoot { .. }));
    }

    #[test]
    fn test_package_path_strips_source_dir() {
        let root = PackageRoot::new("/work/go");
        assert_eq!(
            root.package_path(Path::new("/work/go/src/github.com/acme/demo")),
            "github.com/acme/demo"
        );
        assert_eq!(root.package_path(Path::new("/work/go/pkg/mod")), "/work/go/pkg/mod");
        assert_eq!(root.package_path(Path::new("/work/go/src")), "/work/go/src");
    }

    #[test]
    fn test_resolve_search_path_cleans_lexically() {
        assert_eq!(
            resolve_search_path(Path::new("/work/go/src/./a/../b")).unwrap(),
            PathBuf::from("/work/go/src/b")
        );
        let relative = resolve_search_path(Path::new("pkg")).unwrap();
        assert!(relative.is_absolute());
        assert!(relative.ends_with("pkg"));
    }
}
