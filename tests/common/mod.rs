//! Shared integration-test harness for spawning the `service-config`
//! binary with explicit flags and a scrubbed environment.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Spawns the built `service-config` binary and waits for it to exit.
///
/// The child's environment is cleared first and only `envs` are passed
/// through, so ambient `CONFIG`/`CONFIG_PATH` values cannot leak into a
/// test.
pub struct ServiceConfigProcess;

impl ServiceConfigProcess {
    /// Runs the binary with the given arguments and environment.
    ///
    /// Panics if the process cannot be spawned.
    #[must_use]
    pub fn run(args: &[&str], envs: &[(&str, &str)]) -> Output {
        let bin = env!("CARGO_BIN_EXE_service-config");
        Command::new(bin)
            .args(args)
            .env_clear()
            .envs(envs.iter().copied())
            .output()
            .expect("failed to spawn service-config")
    }

    /// Stdout of `output` as UTF-8, lossily converted.
    #[must_use]
    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Stderr of `output` as UTF-8, lossily converted.
    #[must_use]
    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
