//! Integration tests for npm-installer

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn npm_installer() -> Command {
        let mut cmd = cargo_bin_cmd!("npm-installer");
        // Keep a user config from leaking into tests
        cmd.env("NPM_INSTALLER_CONFIG", "/nonexistent/npm-installer.toml");
        cmd.env_remove("NPM_INSTALLER_NPM");
        cmd
    }

    #[test]
    fn help_displays() {
        npm_installer()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("shrinkwrap"));
    }

    #[test]
    fn version_displays() {
        npm_installer()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("npm-installer"));
    }

    #[test]
    fn missing_arguments_fail() {
        npm_installer().assert().failure();
        npm_installer().arg("npm-shrinkwrap.json").assert().failure();
    }

    #[test]
    fn missing_lockfile_fails() {
        let out = TempDir::new().unwrap();

        npm_installer()
            .arg(out.path().join("missing.json"))
            .arg(out.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Lockfile not found"));

        assert!(!out.path().join("npm-shrinkwrap.json").exists());
    }

    #[test]
    fn missing_output_dir_fails() {
        let src = TempDir::new().unwrap();
        let lockfile = src.path().join("npm-shrinkwrap.json");
        std::fs::write(&lockfile, "{}").unwrap();

        npm_installer()
            .arg(&lockfile)
            .arg(src.path().join("missing"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid output directory"));
    }

    #[test]
    fn missing_package_manager_fails_with_hint() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let lockfile = src.path().join("npm-shrinkwrap.json");
        std::fs::write(&lockfile, "{}").unwrap();

        npm_installer()
            .args(["--npm", "npm-installer-no-such-binary"])
            .arg(&lockfile)
            .arg(out.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Package manager not found"))
            .stderr(predicate::str::contains("Hint:"));
    }
}

#[cfg(unix)]
mod stub_npm_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Fake npm that records its subcommand, working directory and cache path
    const STUB: &str = r#"#!/bin/sh
test -d "$(dirname "$NPM_CONFIG_CACHE")" || exit 9
printf '%s\n%s\n%s\n' "$1" "$(pwd -P)" "$NPM_CONFIG_CACHE" > "$STUB_RECORD"
exit "${STUB_EXIT:-0}"
"#;

    struct Fixture {
        _root: TempDir,
        stub: PathBuf,
        lockfile: PathBuf,
        out: PathBuf,
        record: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let root = TempDir::new().unwrap();
            let stub = root.path().join("npm");
            std::fs::write(&stub, STUB).unwrap();
            std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

            let lockfile = root.path().join("deps.json");
            std::fs::write(&lockfile, "{\"name\": \"app\", \"dependencies\": {}}\n").unwrap();

            let out = root.path().join("out");
            std::fs::create_dir(&out).unwrap();

            Self {
                record: root.path().join("record.txt"),
                _root: root,
                stub,
                lockfile,
                out,
            }
        }

        fn command(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("npm-installer");
            cmd.env("NPM_INSTALLER_CONFIG", "/nonexistent/npm-installer.toml")
                .env("STUB_RECORD", &self.record)
                .arg("--npm")
                .arg(&self.stub)
                .arg(&self.lockfile)
                .arg(&self.out);
            cmd
        }

        /// (subcommand, cwd, cache path) written by the stub
        fn recorded(&self) -> (String, PathBuf, PathBuf) {
            let text = std::fs::read_to_string(&self.record).unwrap();
            let mut lines = text.lines();
            (
                lines.next().unwrap().to_string(),
                PathBuf::from(lines.next().unwrap()),
                PathBuf::from(lines.next().unwrap()),
            )
        }
    }

    fn sandbox_of(cache: &Path) -> PathBuf {
        cache.parent().unwrap().to_path_buf()
    }

    #[test]
    fn install_stages_lockfile_and_cleans_up() {
        let fx = Fixture::new();

        fx.command().assert().success();

        assert_eq!(
            std::fs::read(fx.out.join("npm-shrinkwrap.json")).unwrap(),
            std::fs::read(&fx.lockfile).unwrap()
        );

        let (subcommand, cwd, cache) = fx.recorded();
        assert_eq!(subcommand, "install");
        assert_eq!(cwd, fx.out.canonicalize().unwrap());
        assert!(cache.ends_with(".npm"));
        assert!(!sandbox_of(&cache).exists());
    }

    #[test]
    fn failing_install_exits_nonzero_and_cleans_up() {
        let fx = Fixture::new();

        fx.command()
            .env("STUB_EXIT", "4")
            .assert()
            .failure()
            .stderr(predicate::str::contains("exit code: 4"));

        let (_, _, cache) = fx.recorded();
        assert!(!sandbox_of(&cache).exists());
    }

    #[test]
    fn separate_runs_use_separate_caches() {
        let fx = Fixture::new();

        fx.command().assert().success();
        let (_, _, first) = fx.recorded();
        fx.command().assert().success();
        let (_, _, second) = fx.recorded();

        assert_ne!(first, second);
    }
}
