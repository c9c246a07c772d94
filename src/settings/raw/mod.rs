use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod filesystem;
mod picker;

use filesystem::FilesystemSection;
use picker::PickerSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    filesystem: FilesystemSection,
    picker: PickerSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.filesystem.apply_cli_overrides(cli);
        self.picker.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating
    /// and filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            filesystem_threads: detect_source(
                cli.threads.is_some(),
                self.filesystem.threads.is_some(),
                "QUICKOPEN__FILESYSTEM__THREADS",
                "--threads",
                "filesystem.threads",
            ),
            filesystem_max_depth: detect_source(
                cli.max_depth.is_some(),
                self.filesystem.max_depth.is_some(),
                "QUICKOPEN__FILESYSTEM__MAX_DEPTH",
                "--max-depth",
                "filesystem.max_depth",
            ),
            picker_limit: detect_source(
                cli.limit.is_some(),
                self.picker.limit.is_some(),
                "QUICKOPEN__PICKER__LIMIT",
                "--limit",
                "picker.limit",
            ),
            picker_history_size: detect_source(
                cli.history_size.is_some(),
                self.picker.history_size.is_some(),
                "QUICKOPEN__PICKER__HISTORY_SIZE",
                "--history-size",
                "picker.history_size",
            ),
        };

        let (root, filesystem) = self.filesystem.resolve()?;
        let picker = self.picker.resolve()?;

        let config = ResolvedConfig {
            root,
            filesystem,
            picker,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
