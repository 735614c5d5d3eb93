//! Process environment, terminal size and privilege checks.

use std::env;
use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    pub(crate) fn env_var_impl(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    pub(crate) fn home_dir_impl(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    /// Width of the controlling terminal; `None` when output is not a tty.
    #[tracing::instrument(skip(self))]
    pub(crate) fn terminal_columns_impl(&self) -> Option<usize> {
        crossterm::terminal::size()
            .ok()
            .map(|(columns, _rows)| usize::from(columns))
            .filter(|&columns| columns > 0)
    }

    /// Privileged users read the system-wide metadata root.
    #[tracing::instrument(skip(self))]
    pub(crate) fn is_privileged_impl(&self) -> bool {
        #[cfg(unix)]
        return nix::unistd::geteuid().is_root();

        #[cfg(windows)]
        return is_elevated::is_elevated();
    }
}
