use anyhow::Result;
use log::debug;

use crate::{package::PackageMetadata, runtime::Runtime};

use super::context::QueryContext;

/// Show the registry record of an installed package
#[tracing::instrument(skip(ctx))]
pub fn show<R: Runtime>(ctx: &QueryContext<R>, name: &str) -> Result<()> {
    debug!("Showing info for {}", name);

    let meta = ctx
        .open_registry()?
        .and_then(|registry| registry.find(name));
    let Some(meta) = meta else {
        anyhow::bail!("Package {} not installed.", name);
    };

    for line in describe(&meta) {
        println!("{}", line);
    }
    Ok(())
}

fn describe(meta: &PackageMetadata) -> Vec<String> {
    let mut lines = vec![
        format!("pkgver: {}", meta.identity),
        format!("state: {}", meta.state),
        format!(
            "automatic-install: {}",
            if meta.automatic_install { "yes" } else { "no" }
        ),
        format!("short_desc: {}", meta.description),
    ];
    if !meta.provides.is_empty() {
        lines.push("provides:".to_string());
        lines.extend(meta.provides.iter().map(|p| format!("\t{}", p)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::InstallState;
    use crate::runtime::MockRuntime;
    use std::path::PathBuf;

    fn context(runtime: MockRuntime) -> QueryContext<MockRuntime> {
        QueryContext::new(runtime, Some(PathBuf::from("/srv/root")), vec![], Some(80)).unwrap()
    }

    #[test]
    fn test_describe() {
        let meta = PackageMetadata {
            automatic_install: true,
            provides: vec!["shell-0_1".into()],
            ..PackageMetadata::new("dash-0.5_1", "POSIX shell", InstallState::Installed)
        };

        assert_eq!(
            describe(&meta),
            vec![
                "pkgver: dash-0.5_1",
                "state: installed",
                "automatic-install: yes",
                "short_desc: POSIX shell",
                "provides:",
                "\tshell-0_1",
            ]
        );
    }

    #[test]
    fn test_describe_without_provides() {
        let meta = PackageMetadata::new("foo-1.0_1", "Foo tool", InstallState::Unpacked);
        let lines = describe(&meta);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "state: unpacked");
    }

    #[test]
    fn test_show_not_installed() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);

        let err = show(&context(runtime), "foo").unwrap_err();
        assert_eq!(err.to_string(), "Package foo not installed.");
    }

    #[test]
    fn test_show_found_by_name() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime.expect_read_to_string().returning(|_| {
            Ok(r#"{"packages": [
                {"pkgver": "foo-1.0_1", "short_desc": "Foo tool", "state": "installed"}
            ]}"#
            .to_string())
        });

        assert!(show(&context(runtime), "foo").is_ok());
    }
}
