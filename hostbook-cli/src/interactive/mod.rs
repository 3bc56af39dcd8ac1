//! Interactive menu.
//!
//! The session owns the loaded store and writes it back after every
//! change. Each action is a sequence of prompt steps; the first cancelled
//! step abandons the action before anything is mutated. Errors are shown
//! and the menu is displayed again.

pub mod prompt;

use std::io::{BufRead, Write};

use hostbook_core::config::ConfigManager;
use hostbook_core::error::ConfigError;
use hostbook_core::launcher::Launcher;
use hostbook_core::models::validation::{parse_port, require_non_empty, resolve_key_path};
use hostbook_core::models::{ConnectionProfile, KeyPathUpdate, ProfileDraft, ProfileUpdate};
use hostbook_core::store::ProfileStore;

use crate::error::CliError;
use crate::format::{format_detail_list, format_details};
use prompt::{Prompt, Prompter};

/// Key path suggested when adding a profile
pub const DEFAULT_KEY_PATH: &str = "~/.ssh/id_ed25519";

/// Unwraps a prompt step or abandons the current action
macro_rules! step {
    ($prompt:expr) => {
        match $prompt? {
            Prompt::Value(value) => value,
            Prompt::Cancelled => return Ok(Outcome::Cancelled),
        }
    };
}

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    List,
    Add,
    Edit,
    Delete,
    Connect,
    Exit,
}

impl MenuAction {
    const ALL: [Self; 6] = [
        Self::List,
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Connect,
        Self::Exit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::List => "List profiles",
            Self::Add => "Add profile",
            Self::Edit => "Edit profile",
            Self::Delete => "Delete profile",
            Self::Connect => "Connect",
            Self::Exit => "Exit",
        }
    }
}

/// How an action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    Cancelled,
}

/// A running menu session
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: ConfigManager,
    store: ProfileStore,
    launcher: Launcher,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an already loaded store
    pub const fn new(
        prompter: Prompter<R, W>,
        config: ConfigManager,
        store: ProfileStore,
        launcher: Launcher,
    ) -> Self {
        Self {
            prompter,
            config,
            store,
            launcher,
        }
    }

    /// Returns the in-memory store
    #[cfg(test)]
    pub const fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Shows the menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures end the session with an error.
    pub fn run(&mut self) -> Result<(), CliError> {
        let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();

        loop {
            self.prompter.say("")?;
            let action = match self.prompter.select("Hostbook", &labels)? {
                Prompt::Value(index) => MenuAction::ALL[index],
                Prompt::Cancelled => MenuAction::Exit,
            };

            if action == MenuAction::Exit {
                self.prompter.say("Goodbye!")?;
                return Ok(());
            }

            tracing::debug!(?action, "Menu action selected");
            match self.perform(action) {
                Ok(Outcome::Done) => {}
                Ok(Outcome::Cancelled) => self.prompter.say("Cancelled.")?,
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn perform(&mut self, action: MenuAction) -> Result<Outcome, CliError> {
        match action {
            MenuAction::List => self.list(),
            MenuAction::Add => self.add(),
            MenuAction::Edit => self.edit(),
            MenuAction::Delete => self.delete(),
            MenuAction::Connect => self.connect(),
            MenuAction::Exit => Ok(Outcome::Done),
        }
    }

    fn report(&mut self, error: &CliError) -> Result<(), CliError> {
        tracing::warn!(%error, "Menu action failed");
        self.prompter.say(format!("Error: {error}"))?;
        if matches!(error, CliError::Config(ConfigError::Persistence { .. })) {
            self.prompter.say(
                "The change is kept in memory and will be written on the next successful save.",
            )?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), CliError> {
        self.config.save_store(&self.store)?;
        Ok(())
    }

    fn list(&mut self) -> Result<Outcome, CliError> {
        let profiles: Vec<_> = self.store.list().collect();
        let rendered = format_detail_list(&profiles, self.launcher.builder());
        self.prompter.say(rendered)?;
        Ok(Outcome::Done)
    }

    fn pick_profile(&mut self, label: &str) -> Result<Prompt<ConnectionProfile>, CliError> {
        let names: Vec<String> = self.store.names().map(str::to_string).collect();
        Ok(match self.prompter.select(label, &names)? {
            Prompt::Value(index) => Prompt::Value(self.store.require(&names[index])?.clone()),
            Prompt::Cancelled => Prompt::Cancelled,
        })
    }

    fn add(&mut self) -> Result<Outcome, CliError> {
        self.prompter.say("=== Add profile ===")?;

        let name = step!(self.prompter.validated("Profile name", None, |s| {
            require_non_empty("name", s)
        }));
        let overwrite = self.store.contains(&name);
        if overwrite {
            let confirmed = step!(
                self.prompter
                    .confirm(&format!("Profile '{name}' already exists. Overwrite?"), false)
            );
            if !confirmed {
                return Ok(Outcome::Cancelled);
            }
        }

        let hostname = step!(self.prompter.validated("Hostname", None, |s| {
            require_non_empty("hostname", s)
        }));
        let username = step!(self.prompter.validated("Username", None, |s| {
            require_non_empty("username", s)
        }));

        let port = if step!(self.prompter.confirm("Use a custom port?", false)) {
            Some(step!(self.prompter.validated("Port", Some("22"), parse_port)).to_string())
        } else {
            None
        };

        let key_path = if step!(self.prompter.confirm("Use a private key?", true)) {
            Some(step!(self.prompter.validated(
                "Private key path",
                Some(DEFAULT_KEY_PATH),
                resolve_key_path
            )))
        } else {
            None
        };

        let profile = ProfileDraft {
            name,
            hostname,
            username,
            port,
            key_path,
        }
        .build()?;

        let command_line = self.launcher.builder().command_line(&profile);
        let name = profile.name.clone();
        if overwrite {
            self.store.replace(profile)?;
        } else {
            self.store.add(profile)?;
        }
        self.persist()?;

        self.prompter.say(format!("Profile '{name}' saved."))?;
        self.prompter.say(format!("Equivalent command: {command_line}"))?;
        Ok(Outcome::Done)
    }

    fn edit(&mut self) -> Result<Outcome, CliError> {
        if self.store.is_empty() {
            self.prompter.say("No profiles configured.")?;
            return Ok(Outcome::Done);
        }

        let current = step!(self.pick_profile("Profile to edit"));
        self.prompter
            .say(format!("Editing '{}' (press Enter to keep a value)", current.name))?;

        let hostname = step!(self.prompter.validated(
            "Hostname",
            Some(current.hostname.as_str()),
            |s| require_non_empty("hostname", s)
        ));
        let username = step!(self.prompter.validated(
            "Username",
            Some(current.username.as_str()),
            |s| require_non_empty("username", s)
        ));
        let current_port = current.port.to_string();
        let port = step!(self.prompter.validated(
            "Port",
            Some(current_port.as_str()),
            parse_port
        ));

        let key_path = match current.key_path {
            Some(ref existing) => {
                let choice = step!(self.prompter.select(
                    &format!("Private key ({existing})"),
                    &["Keep current key", "Use a different key", "Remove key"],
                ));
                match choice {
                    1 => KeyPathUpdate::Set(step!(self.prompter.validated(
                        "Private key path",
                        Some(existing.as_str()),
                        resolve_key_path
                    ))),
                    2 => KeyPathUpdate::Clear,
                    _ => KeyPathUpdate::Keep,
                }
            }
            None => {
                if step!(self.prompter.confirm("Use a private key?", false)) {
                    KeyPathUpdate::Set(step!(self.prompter.validated(
                        "Private key path",
                        Some(DEFAULT_KEY_PATH),
                        resolve_key_path
                    )))
                } else {
                    KeyPathUpdate::Keep
                }
            }
        };

        // Answers are trimmed; stored values may not be
        let update = ProfileUpdate {
            hostname: (hostname != current.hostname.trim()).then_some(hostname),
            username: (username != current.username.trim()).then_some(username),
            port: (port != current.port).then(|| port.to_string()),
            key_path,
        };

        if update.is_empty() {
            self.prompter.say("No changes.")?;
            return Ok(Outcome::Done);
        }

        let edited = self.store.edit(&current.name, &update)?;
        let command_line = self.launcher.builder().command_line(edited);
        self.persist()?;

        self.prompter.say(format!("Profile '{}' updated.", current.name))?;
        self.prompter.say(format!("Equivalent command: {command_line}"))?;
        Ok(Outcome::Done)
    }

    fn delete(&mut self) -> Result<Outcome, CliError> {
        if self.store.is_empty() {
            self.prompter.say("No profiles configured.")?;
            return Ok(Outcome::Done);
        }

        let profile = step!(self.pick_profile("Profile to delete"));
        let confirmed = step!(
            self.prompter
                .confirm(&format!("Delete profile '{}'?", profile.name), false)
        );
        if !confirmed {
            return Ok(Outcome::Cancelled);
        }

        self.store.delete(&profile.name)?;
        self.persist()?;
        self.prompter.say(format!("Profile '{}' deleted.", profile.name))?;
        Ok(Outcome::Done)
    }

    fn connect(&mut self) -> Result<Outcome, CliError> {
        if self.store.is_empty() {
            self.prompter.say("No profiles configured.")?;
            return Ok(Outcome::Done);
        }

        self.list()?;
        let profile = step!(self.pick_profile("Profile to connect to"));

        self.prompter.say(format!("Connecting to '{}'...", profile.name))?;
        self.prompter.say(format_details(&profile, self.launcher.builder()))?;

        let code = self.launcher.launch(&profile)?;
        if code != 0 {
            self.prompter
                .say(format!("Connection ended with exit code {code}"))?;
        }
        Ok(Outcome::Done)
    }
}
