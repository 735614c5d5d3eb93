use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Get the default metadata root directory
#[tracing::instrument(skip(runtime))]
pub fn default_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    if runtime.is_privileged() {
        Ok(system_root(runtime))
    } else {
        let home_dir = runtime
            .home_dir()
            .context("Could not find home directory")?;
        Ok(home_dir.join(".pkgq"))
    }
}

#[cfg(target_os = "windows")]
#[tracing::instrument(skip(_runtime))]
fn system_root<R: Runtime>(_runtime: &R) -> PathBuf {
    PathBuf::from(r"C:\ProgramData\pkgq")
}

#[cfg(not(target_os = "windows"))]
#[tracing::instrument(skip(_runtime))]
fn system_root<R: Runtime>(_runtime: &R) -> PathBuf {
    PathBuf::from("/var/db/pkgq")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;

    #[test]
    fn test_default_root_for_user() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_privileged().returning(|| false);
        runtime.expect_home_dir().returning(|| Some(test_home()));

        let root = default_root(&runtime).unwrap();
        assert_eq!(root, test_home().join(".pkgq"));
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn test_default_root_when_privileged() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_privileged().returning(|| true);

        let root = default_root(&runtime).unwrap();
        assert_eq!(root, PathBuf::from("/var/db/pkgq"));
    }

    #[test]
    fn test_default_root_without_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_privileged().returning(|| false);
        runtime.expect_home_dir().returning(|| None);

        let err = default_root(&runtime).unwrap_err();
        assert!(err.to_string().contains("home directory"));
    }
}
