// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Error types for gotest2action-locate

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating a test declaration
#[derive(Debug, Error)]
pub enum LocateError {
    /// The package is not below the root package
    #[error("{root_package} does not contain {package}")]
    PackageMismatch {
        /// The package that was looked up
        package: String,
        /// The package at the root path
        root_package: String,
    },

    /// The package directory could not be stat'ed
    #[error("failed statting directory {path}: {source}")]
    DirectoryStat {
        /// The package directory
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The package path exists but is not a directory
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that was expected to be a directory
        path: PathBuf,
    },

    /// A Go source file could not be read
    #[error("failed reading {path}: {source}")]
    ReadFile {
        /// The file being read
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// A Go source file could not be parsed
    #[error("failed parsing {path}: {source}")]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// What went wrong
        #[source]
        source: ScanError,
    },

    /// No declaration with the test's name exists in the package directory
    #[error("no declaration of {test} in {dir}")]
    NotFound {
        /// The top-level test name
        test: String,
        /// The package directory that was searched
        dir: PathBuf,
    },
}

/// Syntax errors found while scanning Go source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that does not start any Go token, or an unterminated
    /// string or rune literal
    #[error("line {line}: unexpected input {text:?}")]
    UnexpectedCharacter {
        /// 1-based line number
        line: usize,
        /// The offending text
        text: String,
    },

    /// A `/*` comment that is never closed
    #[error("line {line}: comment not terminated")]
    UnterminatedComment {
        /// 1-based line number where the comment starts
        line: usize,
    },

    /// The file does not start with a package clause
    #[error("line {line}: expected 'package'")]
    MissingPackageClause {
        /// 1-based line number of the first token, or 1 for an empty file
        line: usize,
    },

    /// A closing bracket without a matching opening bracket
    #[error("line {line}: unexpected {bracket:?}")]
    UnbalancedBracket {
        /// 1-based line number
        line: usize,
        /// The closing bracket
        bracket: char,
    },

    /// End of file reached with brackets still open
    #[error("line {line}: {bracket:?} is never closed")]
    UnclosedBracket {
        /// 1-based line number of the opening bracket
        line: usize,
        /// The opening bracket
        bracket: char,
    },
}
