// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Test declaration lookup
//!
//! A [`Locator`] knows one directory on disk (the root path) and the Go
//! import path of the package that lives there (the root package). Any
//! package below the root package maps to a directory below the root path,
//! and a test in that package is found by scanning the directory's `.go`
//! files for a top-level `func` with the test's name.

use std::path::{Path, PathBuf};

use gotest2action_events::top_level_test;
use tracing::{debug, warn};

use crate::error::LocateError;
use crate::scanner::{FuncDecl, function_declarations};

/// Where a test is declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File path relative to the root path, `./`-prefixed, `/`-separated
    pub file: String,
    /// 1-based line of the declaration
    pub line: usize,
}

/// Resolves `(package, test)` pairs to source locations
#[derive(Debug, Clone)]
pub struct Locator {
    root_path: PathBuf,
    root_package: String,
}

impl Locator {
    /// Create a locator for the package `root_package` found at `root_path`
    #[must_use]
    pub fn new(root_path: impl Into<PathBuf>, root_package: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            root_package: root_package.into(),
        }
    }

    /// The directory the root package lives in
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// The import path of the root package
    #[must_use]
    pub fn root_package(&self) -> &str {
        &self.root_package
    }

    /// The directory holding `package`
    ///
    /// # Errors
    ///
    /// Returns `LocateError::PackageMismatch` if `package` is not the root
    /// package or below it.
    pub fn package_dir(&self, package: &str) -> Result<PathBuf, LocateError> {
        let relative = relative_package(package, &self.root_package).ok_or_else(|| {
            LocateError::PackageMismatch {
                package: package.to_string(),
                root_package: self.root_package.clone(),
            }
        })?;

        Ok(relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root_path.clone(), |dir, segment| dir.join(segment)))
    }

    /// Find the declaration of `test` in `package`
    ///
    /// Subtests (`TestParent/child`) resolve to their top-level test. If
    /// several files declare a function with the name, the one in the
    /// file that sorts first is used.
    ///
    /// # Errors
    ///
    /// Returns a `LocateError` if the package is outside the root package,
    /// its directory is missing, any Go file in it cannot be read or
    /// scanned, or no declaration has the test's name.
    pub fn locate(&self, package: &str, test: &str) -> Result<SourceLocation, LocateError> {
        let dir = self.package_dir(package)?;

        let metadata = std::fs::metadata(&dir).map_err(|source| LocateError::DirectoryStat {
            path: dir.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(LocateError::NotADirectory { path: dir });
        }

        let test_name = top_level_test(test);
        debug!(package, test = test_name, dir = %dir.display(), "Scanning package directory");

        let mut candidates: Vec<(PathBuf, FuncDecl)> = Vec::new();
        for path in go_files(&dir)? {
            let source = std::fs::read_to_string(&path).map_err(|source| {
                LocateError::ReadFile {
                    path: path.clone(),
                    source,
                }
            })?;
            let decls = function_declarations(&source).map_err(|source| LocateError::Parse {
                path: path.clone(),
                source,
            })?;

            candidates.extend(
                decls
                    .into_iter()
                    .filter(|decl| decl.name == test_name)
                    .map(|decl| (path.clone(), decl)),
            );
        }

        let Some((path, decl)) = candidates.first() else {
            return Err(LocateError::NotFound {
                test: test_name.to_string(),
                dir,
            });
        };
        if candidates.len() > 1 {
            warn!(
                test = test_name,
                candidates = candidates.len(),
                chosen = %path.display(),
                "Multiple declarations match test name, using the first"
            );
        }

        Ok(SourceLocation {
            file: self.report_path(path),
            line: decl.line,
        })
    }

    /// Express `path` relative to the root path, the way CI annotations
    /// expect it
    fn report_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root_path).unwrap_or(path);
        let segments: Vec<_> = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect();
        format!("./{}", segments.join("/"))
    }
}

/// Find the declaration of `test` in `package`
///
/// Shorthand for `Locator::new(root_path, root_package).locate(package, test)`.
///
/// # Errors
///
/// See [`Locator::locate`].
pub fn locate(
    package: &str,
    test: &str,
    root_path: impl Into<PathBuf>,
    root_package: &str,
) -> Result<SourceLocation, LocateError> {
    Locator::new(root_path, root_package).locate(package, test)
}

/// The part of `package` below `root_package`, or `None` if `package` is
/// not the root package or one of its subpackages
fn relative_package<'a>(package: &'a str, root_package: &str) -> Option<&'a str> {
    let rest = package.strip_prefix(root_package)?;
    let on_boundary = root_package.is_empty()
        || root_package.ends_with('/')
        || rest.is_empty()
        || rest.starts_with('/');
    on_boundary.then(|| rest.trim_start_matches('/'))
}

/// Every `.go` file directly inside `dir`, sorted by file name
fn go_files(dir: &Path) -> Result<Vec<PathBuf>, LocateError> {
    let stat_error = |source| LocateError::DirectoryStat {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(stat_error)? {
        let entry = entry.map_err(stat_error)?;
        let is_dir = entry.file_type().map_err(stat_error)?.is_dir();
        let is_go = entry.file_name().to_string_lossy().ends_with(".go");
        if is_go && !is_dir {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
