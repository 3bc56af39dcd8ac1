//! Remote-login command construction and execution
//!
//! A profile maps to exactly one argument vector:
//!
//! ```text
//! <program> [-p <port>] [-i <key_path>] <username>@<hostname>
//! ```
//!
//! The destination is always the last token; some clients treat anything
//! after it as a remote command.

mod quote;

use std::process::{Command, Stdio};

use crate::error::{LaunchError, LaunchResult};
use crate::models::ConnectionProfile;

pub use quote::{join_for_display, quote_arg};

/// Remote-login client used when no other program is configured
pub const DEFAULT_PROGRAM: &str = "ssh";

/// Exit code reported when the child ended without one (killed by a signal)
pub const NO_EXIT_CODE: i32 = -1;

/// A fully built client invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshCommand {
    /// The program to execute
    pub program: String,
    /// Command-line arguments, destination last
    pub args: Vec<String>,
}

impl SshCommand {
    /// Returns the program followed by its arguments
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Returns a copy-pasteable command line
    #[must_use]
    pub fn command_line(&self) -> String {
        join_for_display(&self.tokens())
    }
}

/// Builds client invocations for profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    program: String,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl CommandBuilder {
    /// Creates a builder for the given client executable
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the client executable
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds the invocation for `profile`
    #[must_use]
    pub fn build(&self, profile: &ConnectionProfile) -> SshCommand {
        let mut args = Vec::with_capacity(5);

        if profile.has_custom_port() {
            args.push("-p".to_string());
            args.push(profile.port.to_string());
        }

        if let Some(ref key_path) = profile.key_path {
            args.push("-i".to_string());
            args.push(key_path.clone());
        }

        args.push(profile.destination());

        tracing::debug!(
            name = %profile.name,
            program = %self.program,
            arg_count = args.len(),
            "Built remote-login command"
        );

        SshCommand {
            program: self.program.clone(),
            args,
        }
    }

    /// Builds the invocation as a flat token list, program first
    #[must_use]
    pub fn build_command(&self, profile: &ConnectionProfile) -> Vec<String> {
        self.build(profile).tokens()
    }

    /// Builds the invocation as a display string
    #[must_use]
    pub fn command_line(&self, profile: &ConnectionProfile) -> String {
        self.build(profile).command_line()
    }
}

/// Builds the default `ssh` invocation for `profile`
#[must_use]
pub fn build_command(profile: &ConnectionProfile) -> Vec<String> {
    CommandBuilder::default().build_command(profile)
}

/// Runs the remote-login client with the terminal handed over to it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Launcher {
    builder: CommandBuilder,
}

impl Launcher {
    /// Creates a launcher for the given client executable
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            builder: CommandBuilder::new(program),
        }
    }

    /// Creates a launcher from an existing builder
    #[must_use]
    pub const fn with_builder(builder: CommandBuilder) -> Self {
        Self { builder }
    }

    /// Returns the command builder
    #[must_use]
    pub const fn builder(&self) -> &CommandBuilder {
        &self.builder
    }

    /// Starts the client for `profile` and blocks until it exits.
    ///
    /// Standard input, output and error are inherited so the client owns
    /// the terminal. Returns the client's exit code, or [`NO_EXIT_CODE`]
    /// if it was terminated by a signal.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError`] if the process cannot be started.
    pub fn launch(&self, profile: &ConnectionProfile) -> LaunchResult<i32> {
        let command = self.builder.build(profile);
        run(&command)
    }
}

/// Spawns `command` with inherited stdio and waits for it
fn run(command: &SshCommand) -> LaunchResult<i32> {
    tracing::info!(command = %command.command_line(), "Launching remote-login client");

    let status = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LaunchError {
            program: command.program.clone(),
            source,
        })?;

    let code = status.code().unwrap_or(NO_EXIT_CODE);
    if status.success() {
        tracing::info!(code, "Remote-login client exited");
    } else {
        tracing::warn!(code, "Remote-login client exited with failure");
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_without_key() {
        let profile = ConnectionProfile::new("db1", "10.0.0.5", "ops");
        assert_eq!(build_command(&profile), vec!["ssh", "ops@10.0.0.5"]);
    }

    #[test]
    fn test_custom_port_and_key() {
        let profile = ConnectionProfile::new("web1", "example.com", "deploy")
            .with_port(2222)
            .with_key_path("/home/u/.ssh/id_ed25519");
        assert_eq!(
            build_command(&profile),
            vec![
                "ssh",
                "-p",
                "2222",
                "-i",
                "/home/u/.ssh/id_ed25519",
                "deploy@example.com"
            ]
        );
    }

    #[test]
    fn test_key_only() {
        let profile = ConnectionProfile::new("k", "h", "u").with_key_path("/k");
        assert_eq!(build_command(&profile), vec!["ssh", "-i", "/k", "u@h"]);
    }

    #[test]
    fn test_custom_program() {
        let builder = CommandBuilder::new("/usr/local/bin/ssh");
        let profile = ConnectionProfile::new("db1", "10.0.0.5", "ops").with_port(2200);
        let command = builder.build(&profile);
        assert_eq!(command.program, "/usr/local/bin/ssh");
        assert_eq!(command.args, vec!["-p", "2200", "ops@10.0.0.5"]);
    }

    #[test]
    fn test_command_line_quotes_paths_with_spaces() {
        let profile =
            ConnectionProfile::new("k", "h", "u").with_key_path("/home/u/my keys/id_rsa");
        assert_eq!(
            CommandBuilder::default().command_line(&profile),
            "ssh -i '/home/u/my keys/id_rsa' u@h"
        );
    }

    #[test]
    fn test_launch_missing_program_fails() {
        let launcher = Launcher::new("hostbook-test-no-such-program");
        let profile = ConnectionProfile::new("db1", "10.0.0.5", "ops");
        let err = launcher.launch(&profile).unwrap_err();
        assert_eq!(err.program, "hostbook-test-no-such-program");
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_propagates_exit_code() {
        let profile = ConnectionProfile::new("db1", "10.0.0.5", "ops");
        assert_eq!(Launcher::new("true").launch(&profile).unwrap(), 0);
        assert_eq!(Launcher::new("false").launch(&profile).unwrap(), 1);
    }
}
