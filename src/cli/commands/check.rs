//! Check command implementation.
//!
//! The `companion-compat check` command detects the installed companion
//! version and reports how it relates to the supported range.

use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::compat::{CompatibilityChecker, MajorMinor, ReferenceVersions, Verdict};
use crate::config::{validate_var_name, CompatConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    companion: String,
    version_var: String,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: &CompatConfig, args: CheckArgs) -> Self {
        let version_var = args
            .var
            .clone()
            .unwrap_or_else(|| config.version_var().to_string());
        Self {
            companion: config.companion().to_string(),
            version_var,
            args,
        }
    }

    /// Get the environment variable the version is read from.
    pub fn version_var(&self) -> &str {
        &self.version_var
    }

    fn checker(&self) -> CompatibilityChecker {
        match &self.args.installed {
            Some(version) => {
                CompatibilityChecker::with_installed(version.as_str(), ReferenceVersions::default())
            }
            None => CompatibilityChecker::detect_var(&self.version_var),
        }
    }

    fn exit_code(&self, verdict: Verdict) -> i32 {
        let failed = if self.args.strict {
            verdict != Verdict::FullyCompatible
        } else {
            verdict == Verdict::BelowMinimum
        };
        i32::from(failed)
    }

    fn show_report(&self, ui: &mut dyn UserInterface, checker: &CompatibilityChecker) {
        let references = checker.references();
        let name = &self.companion;
        let installed = checker.installed_version();

        ui.show_header(&format!("{} compatibility", name));
        ui.show_field(
            "Installed",
            if checker.is_installed() {
                installed
            } else {
                "not installed"
            },
        );
        ui.show_field("Latest release", references.latest_release());
        ui.show_field("Minimum supported", references.minimum_supported());
        if self.args.installed.is_none() {
            ui.show_field("Read from", &self.version_var);
        }
        if ui.output_mode().shows_debug() {
            // The values the comparisons actually run on
            ui.show_field("Installed major.minor", MajorMinor::of(installed).as_str());
            ui.show_field(
                "Latest major.minor",
                MajorMinor::of(references.latest_release()).as_str(),
            );
            ui.show_field(
                "Minimum major.minor",
                MajorMinor::of(references.minimum_supported()).as_str(),
            );
            ui.show_field("Verdict", checker.verdict().label());
        }
        ui.message("");

        match checker.verdict() {
            Verdict::NotInstalled if self.args.installed.is_some() => {
                ui.warning(&format!("{} is not installed (empty version given)", name))
            }
            Verdict::NotInstalled => ui.warning(&format!(
                "{} is not installed ({} is not set)",
                name, self.version_var
            )),
            Verdict::BelowMinimum => ui.error(&format!(
                "{} {} is below the minimum supported version {}",
                name,
                installed,
                references.minimum_supported()
            )),
            Verdict::FullyCompatible => {
                ui.success(&format!("{} {} is fully compatible", name, installed))
            }
            Verdict::NewerThanLatest => ui.warning(&format!(
                "{} {} is newer than the latest known release {}; compatibility is untested",
                name,
                installed,
                references.latest_release()
            )),
            Verdict::OlderThanLatest => ui.warning(&format!(
                "{} {} is supported, but {} is the latest release",
                name,
                installed,
                references.latest_release()
            )),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        validate_var_name(&self.version_var)?;

        let checker = self.checker();
        let verdict = checker.verdict();
        debug!(
            "{} {:?} classified as {}",
            self.companion,
            checker.installed_version(),
            verdict.label()
        );

        if self.args.json {
            let report = checker.report(&self.companion, &self.version_var);
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.emit(&json);
        } else {
            self.show_report(ui, &checker);
        }

        match self.exit_code(verdict) {
            0 => Ok(CommandResult::success()),
            code => Ok(CommandResult::failure(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompatError;
    use crate::ui::{MockUI, OutputMode};

    const UNSET_VAR: &str = "COMPANION_COMPAT_CHECK_TEST_UNSET";

    fn run(config: &CompatConfig, args: CheckArgs) -> (CommandResult, MockUI) {
        let cmd = CheckCommand::new(config, args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    fn installed(version: &str) -> CheckArgs {
        CheckArgs {
            installed: Some(version.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn fully_compatible_reports_success() {
        let (result, ui) = run(&CompatConfig::default(), installed("3.4.2"));

        assert!(result.success);
        assert_eq!(ui.headers(), ["Gutenberg compatibility"]);
        assert_eq!(ui.field("Installed"), Some("3.4.2"));
        assert_eq!(ui.field("Latest release"), Some("3.4.0"));
        assert_eq!(ui.field("Minimum supported"), Some("2.8.0"));
        assert!(ui.successes()[0].contains("fully compatible"));
    }

    #[test]
    fn below_minimum_fails_with_error() {
        let (result, ui) = run(&CompatConfig::default(), installed("2.7.5"));

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains("below the minimum supported version 2.8.0"));
    }

    #[test]
    fn newer_than_latest_warns_but_passes() {
        let (result, ui) = run(&CompatConfig::default(), installed("3.5.0"));

        assert!(result.success);
        assert!(ui.warnings()[0].contains("newer than the latest known release 3.4.0"));
    }

    #[test]
    fn older_than_latest_warns_but_passes() {
        let (result, ui) = run(&CompatConfig::default(), installed("3.0.1"));

        assert!(result.success);
        assert!(ui.warnings()[0].contains("3.4.0 is the latest release"));
    }

    #[test]
    fn strict_requires_full_compatibility() {
        let args = CheckArgs {
            strict: true,
            ..installed("3.5.0")
        };
        let (result, _) = run(&CompatConfig::default(), args);
        assert_eq!(result.exit_code, 1);

        let args = CheckArgs {
            strict: true,
            ..installed("3.4.9")
        };
        let (result, _) = run(&CompatConfig::default(), args);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn not_installed_is_not_a_failure() {
        let args = CheckArgs {
            var: Some(UNSET_VAR.to_string()),
            ..Default::default()
        };
        let (result, ui) = run(&CompatConfig::default(), args);

        assert!(result.success);
        assert_eq!(ui.field("Installed"), Some("not installed"));
        assert_eq!(ui.field("Read from"), Some(UNSET_VAR));
        assert!(ui.warnings()[0].contains("is not installed"));
    }

    #[test]
    fn not_installed_fails_in_strict_mode() {
        let args = CheckArgs {
            var: Some(UNSET_VAR.to_string()),
            strict: true,
            ..Default::default()
        };
        let (result, _) = run(&CompatConfig::default(), args);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn var_flag_overrides_config() {
        let config = CompatConfig {
            version_var: Some("FROM_CONFIG".to_string()),
            ..Default::default()
        };
        let args = CheckArgs {
            var: Some("FROM_FLAG".to_string()),
            ..Default::default()
        };
        let cmd = CheckCommand::new(&config, args);
        assert_eq!(cmd.version_var(), "FROM_FLAG");

        let cmd = CheckCommand::new(&config, CheckArgs::default());
        assert_eq!(cmd.version_var(), "FROM_CONFIG");
    }

    #[test]
    fn companion_name_comes_from_config() {
        let config = CompatConfig {
            companion: Some("Blocks".to_string()),
            ..Default::default()
        };
        let (_, ui) = run(&config, installed("3.4.0"));
        assert_eq!(ui.headers(), ["Blocks compatibility"]);
        assert!(ui.successes()[0].starts_with("Blocks 3.4.0"));
    }

    #[test]
    fn invalid_var_flag_is_rejected() {
        let args = CheckArgs {
            var: Some(String::new()),
            ..Default::default()
        };
        let cmd = CheckCommand::new(&CompatConfig::default(), args);
        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, CompatError::ConfigValidationError { .. }));
    }

    #[test]
    fn empty_installed_flag_does_not_name_the_variable() {
        let (result, ui) = run(&CompatConfig::default(), installed(""));

        assert!(result.success);
        assert!(ui.field("Read from").is_none());
        assert!(ui.warnings()[0].contains("empty version given"));
        assert!(!ui.warnings()[0].contains("GUTENBERG_VERSION"));
    }

    #[test]
    fn detects_from_process_environment() {
        let var = "COMPANION_COMPAT_CHECK_TEST_SET";
        std::env::set_var(var, "3.4.5");
        let args = CheckArgs {
            var: Some(var.to_string()),
            ..Default::default()
        };
        let (result, ui) = run(&CompatConfig::default(), args);

        assert!(result.success);
        assert_eq!(ui.field("Installed"), Some("3.4.5"));
        assert_eq!(ui.field("Read from"), Some(var));
    }

    #[test]
    fn verbose_shows_compared_major_minor() {
        let cmd = CheckCommand::new(&CompatConfig::default(), installed("2.10.3"));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.field("Installed major.minor"), Some("2.10"));
        assert_eq!(ui.field("Latest major.minor"), Some("3.4"));
        assert_eq!(ui.field("Minimum major.minor"), Some("2.8"));
        assert_eq!(ui.field("Verdict"), Some("older-than-latest"));
    }

    #[test]
    fn normal_mode_hides_compared_major_minor() {
        let (_, ui) = run(&CompatConfig::default(), installed("2.10.3"));

        assert_eq!(ui.field("Installed"), Some("2.10.3"));
        assert!(ui.field("Installed major.minor").is_none());
        assert!(ui.field("Verdict").is_none());
    }

    #[test]
    fn json_output_is_a_report() {
        let args = CheckArgs {
            json: true,
            ..installed("2.9.0")
        };
        let (result, ui) = run(&CompatConfig::default(), args);

        assert!(result.success);
        assert!(ui.headers().is_empty());
        let value: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(value["installed_version"], "2.9.0");
        assert_eq!(value["is_below_minimum"], false);
        assert_eq!(value["is_latest_version"], false);
        assert_eq!(value["verdict"], "older-than-latest");
    }
}
