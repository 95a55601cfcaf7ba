//! Common test utilities for deploy CLI tests.
//!
//! Provides `TestEnv`: an isolated working directory and home, plus fake
//! `az` and `func` programs that append their argv to a log file and exit
//! with a scripted status.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Mutex;

use tempfile::TempDir;

/// Serializes script creation with process spawning.
///
/// A fork while another thread still holds a freshly written script open for
/// writing makes exec of that script fail with ETXTBSY.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

/// Exit status each fake platform command returns
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeExits {
    pub config_set: i32,
    pub publish: i32,
    pub restart: i32,
}

impl FakeExits {
    pub fn all_ok() -> Self {
        Self::default()
    }
}

/// Result of running the deploy binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated environment with fake platform CLIs on disk.
pub struct TestEnv {
    pub project: TempDir,
    pub home: TempDir,
    tools: TempDir,
    log: PathBuf,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new(exits: FakeExits) -> Self {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let tools = tempfile::tempdir().unwrap();
        let log = tools.path().join("calls.log");

        let az = format!(
            "#!/bin/sh\n\
             echo \"az $*\" >> '{log}'\n\
             echo 'fake az output'\n\
             case \"$2\" in\n\
               config) exit {config} ;;\n\
               restart) exit {restart} ;;\n\
             esac\n\
             exit 0\n",
            log = log.display(),
            config = exits.config_set,
            restart = exits.restart,
        );
        let func = format!(
            "#!/bin/sh\n\
             echo \"func $*\" >> '{log}'\n\
             echo 'fake func output'\n\
             exit {publish}\n",
            log = log.display(),
            publish = exits.publish,
        );

        {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            write_script(&tools.path().join("az"), &az);
            write_script(&tools.path().join("func"), &func);
        }

        Self {
            project,
            home,
            tools,
            log,
            env: Vec::new(),
        }
    }

    pub fn az_path(&self) -> PathBuf {
        self.tools.path().join("az")
    }

    pub fn func_path(&self) -> PathBuf {
        self.tools.path().join("func")
    }

    pub fn with_env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.env.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project.path().join(relative);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_user_config(&self, content: &str) {
        let dir = self.home.path().join(".config").join("funcship");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }

    /// Platform invocations recorded so far, one per line.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_deploy"));
        cmd.current_dir(self.project.path())
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("FUNCSHIP_AZ", self.az_path())
            .env("FUNCSHIP_FUNC", self.func_path())
            .env("LANG", "C.UTF-8")
            .env("NO_COLOR", "1")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("FUNCSHIP_APP_NAME")
            .env_remove("FUNCSHIP_RESOURCE_GROUP")
            .env_remove("FUNCSHIP_COLOR")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let child = {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            cmd.spawn().unwrap()
        };
        let output = child.wait_with_output().unwrap();

        TestResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
