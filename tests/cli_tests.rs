use std::path::Path;
use std::process::{Command, Output};

#[cfg(test)]
mod cli_tests {
    use super::*;

    const SAMPLE: &str = "name = demo\n[server]\nhost = localhost\nport = 8080\n";

    fn command(dir: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_iniget"));
        cmd.current_dir(dir)
            .env_remove("INIGET_CONFIG")
            .env("RUST_LOG", "off")
            .args(args);
        cmd
    }

    fn iniget(dir: &Path, args: &[&str]) -> Output {
        command(dir, args).output().unwrap()
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8(output.stdout.clone()).unwrap()
    }

    #[test]
    fn test_get_prints_value() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.ini"), SAMPLE).unwrap();

        let output = iniget(dir.path(), &["get", "server", "host"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "localhost\n");
    }

    #[test]
    fn test_exit_codes_distinguish_misses() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.ini"), SAMPLE).unwrap();

        let output = iniget(dir.path(), &["get", "client", "host"]);
        assert_eq!(output.status.code(), Some(3));
        assert!(stdout(&output).is_empty());

        let output = iniget(dir.path(), &["get", "server", "user"]);
        assert_eq!(output.status.code(), Some(4));
    }

    #[test]
    fn test_default_value() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.ini"), SAMPLE).unwrap();

        let output = iniget(dir.path(), &["get", "server", "user", "--default", "root"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "root\n");
    }

    #[test]
    fn test_listing_commands() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.conf"), SAMPLE).unwrap();

        let output = iniget(dir.path(), &["--config", "settings.conf", "sections"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "default\nserver\n");

        let output = iniget(dir.path(), &["-c", "settings.conf", "keys", "server"]);
        assert_eq!(stdout(&output), "host\nport\n");
    }

    #[test]
    fn test_no_ini_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = iniget(dir.path(), &["get", "a", "b"]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_strict_flag() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.ini"), "[a]\nk=v\ntypo\n").unwrap();

        let output = iniget(dir.path(), &["get", "a", "k"]);
        assert!(output.status.success());

        let output = iniget(dir.path(), &["--strict", "get", "a", "k"]);
        assert_eq!(output.status.code(), Some(5));
    }

    #[test]
    fn test_config_from_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.ini"), "[server]\nhost = wrong\n").unwrap();
        std::fs::write(dir.path().join("settings.conf"), SAMPLE).unwrap();

        let output = command(dir.path(), &["get", "server", "host"])
            .env("INIGET_CONFIG", "settings.conf")
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(stdout(&output), "localhost\n");
    }

    #[test]
    fn test_keys_of_missing_section() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.ini"), SAMPLE).unwrap();

        let output = iniget(dir.path(), &["keys", "client"]);
        assert_eq!(output.status.code(), Some(3));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_default_does_not_hide_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.ini"), SAMPLE).unwrap();

        let output = iniget(dir.path(), &["get", "", "host", "--default", "x"]);
        assert_eq!(output.status.code(), Some(2));
        assert!(stdout(&output).is_empty());
    }
}
