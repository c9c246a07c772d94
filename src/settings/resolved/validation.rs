use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if let Some(threads) = config.filesystem.threads
        && threads == 0
    {
        return Err(ConfigError::invalid(
            "filesystem.threads",
            threads.to_string(),
            sources.source_for_threads(),
            "must be greater than zero",
        ));
    }

    if let Some(max_depth) = config.filesystem.max_depth
        && max_depth == 0
    {
        return Err(ConfigError::invalid(
            "filesystem.max_depth",
            max_depth.to_string(),
            sources.source_for_max_depth(),
            "must be at least 1",
        ));
    }

    if config.picker.limit == 0 {
        return Err(ConfigError::invalid(
            "picker.limit",
            config.picker.limit.to_string(),
            sources.source_for_limit(),
            "must be greater than zero",
        ));
    }

    if config.picker.history_size == 0 {
        return Err(ConfigError::invalid(
            "picker.history_size",
            config.picker.history_size.to_string(),
            sources.source_for_history_size(),
            "must be greater than zero",
        ));
    }

    Ok(())
}
