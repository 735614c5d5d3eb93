//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the few system
//! operations the query commands need, enabling dependency injection and
//! testability.
//!
//! # Structure
//!
//! - `env` - Environment variables, terminal size and privilege
//! - `fs` - File system reads

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;

    // Directories
    fn home_dir(&self) -> Option<PathBuf>;

    // Terminal
    fn terminal_columns(&self) -> Option<usize>;

    // Privilege
    fn is_privileged(&self) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn terminal_columns(&self) -> Option<usize> {
        self.terminal_columns_impl()
    }

    fn is_privileged(&self) -> bool {
        self.is_privileged_impl()
    }
}
