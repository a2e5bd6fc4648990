//! End-to-End CLI Tests for notifme

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;

/// Get a command pointing to the notifme binary
fn notifme() -> Command {
    cargo_bin_cmd!("notifme")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        notifme()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("serve"));
    }

    #[test]
    fn shows_version() {
        notifme()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        notifme().assert().failure();
    }
}

mod render {
    use super::*;

    #[test]
    fn writes_page_to_out_path() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public").join("index.html");

        notifme()
            .current_dir(temp.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Page written to:"));

        let html = fs::read_to_string(&out).expect("rendered page");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="features""#));
        assert!(html.contains(r#"id="pricing""#));
        assert!(html.contains("$99/mo"));
    }

    #[test]
    fn stdout_mode_prints_document() {
        let temp = TempDir::new().expect("temp dir");

        notifme()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Choose Your Plan"));

        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn default_output_comes_from_config() {
        let temp = TempDir::new().expect("temp dir");
        fs::write(
            temp.path().join("notifme.toml"),
            "output = \"site/landing.html\"\n\n[assets]\ntitle = \"From Config\"\n",
        )
        .expect("write config");

        notifme()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success();

        let html = fs::read_to_string(temp.path().join("site").join("landing.html"))
            .expect("rendered page");
        assert!(html.contains("<title>From Config</title>"));
    }

    #[test]
    fn output_is_stable_across_runs() {
        let temp = TempDir::new().expect("temp dir");

        let first = notifme()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .output()
            .expect("first run");
        let second = notifme()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .output()
            .expect("second run");

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }

    #[test]
    fn out_flag_overrides_config_output() {
        let temp = TempDir::new().expect("temp dir");
        fs::write(temp.path().join("notifme.toml"), "output = \"from-config.html\"\n")
            .expect("write config");

        notifme()
            .current_dir(temp.path())
            .args(["render", "--out", "from-flag.html"])
            .assert()
            .success();

        assert!(temp.path().join("from-flag.html").is_file());
        assert!(!temp.path().join("from-config.html").exists());
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");

        notifme()
            .current_dir(temp.path())
            .args(["--config", "absent.toml", "render", "--stdout"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config"));
    }
}

mod serve {
    use super::*;

    /// Reserve a free loopback port, then release it for the binary to bind.
    fn free_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    }

    #[test]
    fn port_flag_overrides_config_and_serves_once() {
        let temp = TempDir::new().expect("temp dir");
        let port = free_port();
        let config_port = if port == 65535 { port - 1 } else { port + 1 };
        fs::write(
            temp.path().join("notifme.toml"),
            format!("port = {config_port}\n"),
        )
        .expect("write config");

        let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_notifme"))
            .current_dir(temp.path())
            .args(["serve", "--once", "--port", &port.to_string()])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn notifme serve");

        let stdout = child.stdout.take().expect("stdout");
        let mut banner = String::new();
        BufReader::new(stdout)
            .read_line(&mut banner)
            .expect("read banner");
        assert_eq!(banner.trim(), format!("Serving http://127.0.0.1:{port}"));

        let mut stream = TcpStream::connect(("127.0.0.1", port)).expect("connect");
        stream
            .set_read_timeout(Some(Duration::from_secs(10)))
            .expect("client timeout");
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .expect("send");
        let mut response = String::new();
        stream.read_to_string(&mut response).expect("read response");

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains(r#"id="pricing""#));

        let status = child.wait().expect("wait for exit");
        assert!(status.success());
    }
}
