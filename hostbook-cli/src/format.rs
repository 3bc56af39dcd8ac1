//! Plain-text and JSON rendering of profiles.

use std::fmt::Write as _;

use hostbook_core::launcher::CommandBuilder;
use hostbook_core::models::ConnectionProfile;
use serde::Serialize;

/// Format profiles as a table string
#[must_use]
pub fn format_table(profiles: &[&ConnectionProfile]) -> String {
    if profiles.is_empty() {
        return "No profiles configured.".to_string();
    }

    let mut output = String::new();

    // Calculate column widths
    let name_width = profiles
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let target_width = profiles
        .iter()
        .map(|p| p.destination().len())
        .max()
        .unwrap_or(6)
        .max(6);
    let port_width = 5;

    let _ = writeln!(
        output,
        "{:<name_width$}  {:<target_width$}  {:<port_width$}  KEY",
        "NAME", "TARGET", "PORT"
    );
    let _ = writeln!(
        output,
        "{:-<name_width$}  {:-<target_width$}  {:-<port_width$}  ---",
        "", "", ""
    );

    for profile in profiles {
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<target_width$}  {:<port_width$}  {}",
            profile.name,
            profile.destination(),
            profile.port,
            profile.key_path.as_deref().unwrap_or("-")
        );
    }

    output.trim_end().to_string()
}

/// Format one profile as a detail block including its command line
#[must_use]
pub fn format_details(profile: &ConnectionProfile, builder: &CommandBuilder) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Name:     {}", profile.name);
    let _ = writeln!(output, "Hostname: {}", profile.hostname);
    let _ = writeln!(output, "Username: {}", profile.username);
    if profile.has_custom_port() {
        let _ = writeln!(output, "Port:     {}", profile.port);
    }
    if let Some(ref key_path) = profile.key_path {
        let _ = writeln!(output, "Key:      {key_path}");
    }
    let _ = write!(output, "Command:  {}", builder.command_line(profile));
    output
}

/// Format all profiles as detail blocks separated by rules
#[must_use]
pub fn format_detail_list(profiles: &[&ConnectionProfile], builder: &CommandBuilder) -> String {
    if profiles.is_empty() {
        return "No profiles configured.".to_string();
    }
    profiles
        .iter()
        .map(|p| format_details(p, builder))
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", "-".repeat(30)))
}

/// Profile as printed by `list --format json`
#[derive(Debug, Clone, Serialize)]
pub struct ProfileOutput<'a> {
    name: &'a str,
    hostname: &'a str,
    username: &'a str,
    port: u16,
    key_path: Option<&'a str>,
    command: Vec<String>,
}

impl<'a> ProfileOutput<'a> {
    /// Creates the JSON view of a profile
    #[must_use]
    pub fn new(profile: &'a ConnectionProfile, builder: &CommandBuilder) -> Self {
        Self {
            name: &profile.name,
            hostname: &profile.hostname,
            username: &profile.username,
            port: profile.port,
            key_path: profile.key_path.as_deref(),
            command: builder.build_command(profile),
        }
    }
}
