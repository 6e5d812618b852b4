//! References command implementation.
//!
//! The `companion-compat references` command prints the reference versions
//! compiled into this build.

use crate::cli::args::ReferencesArgs;
use crate::compat::ReferenceVersions;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The references command implementation.
pub struct ReferencesCommand {
    args: ReferencesArgs,
}

impl ReferencesCommand {
    /// Create a new references command.
    pub fn new(args: ReferencesArgs) -> Self {
        Self { args }
    }
}

impl Command for ReferencesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let references = ReferenceVersions::default();

        if self.args.json {
            let json = serde_json::to_string_pretty(&references).map_err(anyhow::Error::from)?;
            ui.emit(&json);
        } else {
            ui.show_header("Reference versions");
            ui.show_field("Latest release", references.latest_release());
            ui.show_field("Minimum supported", references.minimum_supported());
        }

        Ok(CommandResult::success())
    }
}
