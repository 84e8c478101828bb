//! Common test utilities for lightberry-setup integration tests

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// A sandboxed account home plus payload checkout for one test.
///
/// The installer binary runs with `HOME` pointed at the fixture home and a
/// stub `sudo` on `PATH` that logs its arguments instead of escalating.
#[allow(dead_code)]
pub struct TestHome {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Fixture account home directory
    pub home: PathBuf,
    /// Fixture LightBerry OS checkout (the payload)
    pub payload: PathBuf,
    /// Directory holding the stub sudo, prepended to PATH
    pub bindir: PathBuf,
    /// Log file the stub sudo appends its invocations to
    pub sudo_log: PathBuf,
}

#[allow(dead_code)]
impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let payload = temp.path().join("checkout");
        let bindir = temp.path().join("bin");
        let sudo_log = temp.path().join("sudo.log");

        fs::create_dir_all(&home).expect("Failed to create home");
        fs::create_dir_all(&bindir).expect("Failed to create bindir");
        write_payload(&payload);
        write_sudo_stub(&bindir);

        Self {
            temp,
            home,
            payload,
            bindir,
            sudo_log,
        }
    }

    /// The installer binary, wired to this fixture.
    pub fn setup_cmd(&self) -> assert_cmd::Command {
        let path = format!(
            "{}:{}",
            self.bindir.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = assert_cmd::Command::cargo_bin("lightberry-setup")
            .expect("Failed to find lightberry-setup binary");
        cmd.current_dir(&self.payload)
            .env("HOME", &self.home)
            .env("USER", "tester")
            .env("PATH", path)
            .env("SUDO_LOG", &self.sudo_log);
        cmd
    }

    /// Run the generated uninstall script against this fixture home.
    pub fn run_uninstall(&self) -> std::process::Output {
        let script = self.home.join("lightberry-os/uninstall.sh");
        Command::new("sh")
            .arg(&script)
            .env("HOME", &self.home)
            .output()
            .expect("Failed to run uninstall script")
    }

    /// Make the next stub sudo invocations exit with the given code.
    pub fn set_sudo_exit(&self, cmd: &mut assert_cmd::Command, code: i32) {
        cmd.env("SUDO_EXIT", code.to_string());
    }

    pub fn write_home_file(&self, rel: &str, content: &str) {
        let path = self.home.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_home_file(&self, rel: &str) -> String {
        fs::read_to_string(self.home.join(rel)).expect("Failed to read file")
    }

    pub fn home_file_exists(&self, rel: &str) -> bool {
        self.home.join(rel).exists()
    }

    pub fn sudo_invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.sudo_log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn remove_payload_entry(&self, rel: &str) {
        let path = self.payload.join(rel);
        if path.is_dir() {
            fs::remove_dir_all(path).expect("Failed to remove payload dir");
        } else {
            fs::remove_file(path).expect("Failed to remove payload file");
        }
    }
}

fn write_payload(payload: &std::path::Path) {
    fs::create_dir_all(payload).expect("Failed to create payload");
    fs::write(
        payload.join("lightberry_os.py"),
        "#!/usr/bin/env python3\nprint('lightberry')\n",
    )
    .expect("Failed to write entry point");
    fs::write(
        payload.join("light_phone_kiosk.py"),
        "#!/usr/bin/env python3\nprint('kiosk')\n",
    )
    .expect("Failed to write kiosk launcher");

    for dir in ["config", "modules", "utils"] {
        fs::create_dir_all(payload.join(dir)).expect("Failed to create payload dir");
        fs::write(payload.join(dir).join("part.py"), "pass\n")
            .expect("Failed to write payload file");
    }
    // Build artifacts must never deploy.
    fs::create_dir_all(payload.join("modules/__pycache__"))
        .expect("Failed to create pycache");
    fs::write(payload.join("modules/__pycache__/part.pyc"), "junk")
        .expect("Failed to write pyc");
}

fn write_sudo_stub(bindir: &std::path::Path) {
    let stub = bindir.join("sudo");
    fs::write(
        &stub,
        "#!/bin/sh\necho \"sudo $@\" >> \"$SUDO_LOG\"\nexit \"${SUDO_EXIT:-0}\"\n",
    )
    .expect("Failed to write sudo stub");
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod sudo stub");
}

/// True when the test process itself runs as root (e.g. a CI container);
/// success-path tests skip then, since the installer refuses to run as root.
#[allow(dead_code)]
pub fn running_as_root() -> bool {
    Command::new("id")
        .arg("-u")
        .output()
        .map(|out| String::from_utf8_lossy(&out.stdout).trim() == "0")
        .unwrap_or(false)
}
