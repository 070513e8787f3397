// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Configuration for the gotest2action command
//!
//! This module provides the command-line configuration: where the Go module
//! lives on disk, its import path, passthrough and message options, and
//! logging verbosity.

use std::path::PathBuf;

use clap::Parser;

use crate::report::{MessageSource, ReportOptions};

/// Turn `go test -json` output on stdin into GitHub Actions error annotations
///
/// Example:
///   go test -json ./... | gotest2action --root-pkg github.com/me/myrepo
#[derive(Parser, Debug, Clone)]
#[command(name = "gotest2action")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Import path of the package at the root path
    #[arg(long, env = "GOTEST2ACTION_ROOT_PKG")]
    pub root_pkg: String,

    /// Root path for test packages
    ///
    /// Annotation file paths are reported relative to this directory.
    #[arg(long, default_value = ".", env = "GOTEST2ACTION_ROOT_PATH")]
    pub root_path: PathBuf,

    /// Write test output to stdout
    ///
    /// Captured test output is mirrored as it is read, before any
    /// annotations are written.
    #[arg(long, default_value = "false")]
    pub passthrough: bool,

    /// Which captured output to use as the annotation message
    #[arg(long, value_enum, default_value_t = MessageSource::GroupOutput)]
    pub message: MessageSource,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with annotations.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_pkg: String::new(),
            root_path: PathBuf::from("."),
            passthrough: false,
            message: MessageSource::default(),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Check for settings that leave every failing test without a location
    ///
    /// None of these stop a run: failures are still reported, just without
    /// a file and line.
    #[must_use]
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.root_pkg.trim().is_empty() {
            warnings.push(ConfigWarning::EmptyRootPackage);
        }
        if !self.root_path.exists() {
            warnings.push(ConfigWarning::RootPathNotFound(self.root_path.clone()));
        } else if !self.root_path.is_dir() {
            warnings.push(ConfigWarning::RootPathNotDirectory(self.root_path.clone()));
        }
        warnings
    }

    /// The root path made absolute against the current directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RootPathUnresolvable` if the current directory
    /// cannot be determined.
    pub fn absolute_root_path(&self) -> Result<PathBuf, ConfigError> {
        std::path::absolute(&self.root_path)
            .map_err(|e| ConfigError::RootPathUnresolvable(self.root_path.clone(), e))
    }

    /// Build the reporting options for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the root path cannot be made absolute.
    pub fn report_options(&self) -> Result<ReportOptions, ConfigError> {
        Ok(ReportOptions {
            root_path: self.absolute_root_path()?,
            root_package: self.root_pkg.clone(),
            passthrough: self.passthrough,
            message: self.message,
        })
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Settings that make test lookups fail
#[derive(Debug, thiserror::Error)]
pub enum ConfigWarning {
    /// Root package is empty
    #[error("Root package is empty")]
    EmptyRootPackage,

    /// Root path not found
    #[error("Root path not found: {0}")]
    RootPathNotFound(PathBuf),

    /// Root path is not a directory
    #[error("Root path is not a directory: {0}")]
    RootPathNotDirectory(PathBuf),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Root path could not be made absolute
    #[error("Failed to resolve root path {0}: {1}")]
    RootPathUnresolvable(PathBuf, std::io::Error),
}
