use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use quickopen::DEFAULT_SEARCH_LIMIT;
use quickopen::app_dirs;
use quickopen::history::DEFAULT_HISTORY_SIZE;

use crate::cli::CliArgs;

use super::super::PickerConfig;

/// Picker specific configuration options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
    pub(super) limit: Option<usize>,
    pub(super) history_size: Option<usize>,
    pub(super) history_file: Option<PathBuf>,
}

impl PickerSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(value) = cli.limit {
            self.limit = Some(value);
        }
        if let Some(value) = cli.history_size {
            self.history_size = Some(value);
        }
        if let Some(value) = cli.history_file.clone() {
            self.history_file = Some(value);
        }
    }

    pub(super) fn resolve(self) -> Result<PickerConfig> {
        let history_file = match self.history_file {
            Some(path) => path,
            None => app_dirs::get_data_dir()
                .context("failed to resolve a default history location")?
                .join("history.json"),
        };

        Ok(PickerConfig {
            limit: self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            history_size: self.history_size.unwrap_or(DEFAULT_HISTORY_SIZE),
            history_file,
        })
    }
}
