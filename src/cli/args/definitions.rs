use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `quickopen` binary.
#[derive(Parser, Debug)]
#[command(
    name = "quickopen",
    version,
    long_version = long_version(),
    about = "Quick-open picker merging recently opened files with fuzzy file search",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "QUERY",
        help = "Search query; with no query only recently opened files are listed"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "QUICKOPEN_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        help = "Override the filesystem root to scan (default: current directory)"
    )]
    pub(crate) root: Option<PathBuf>,
    #[arg(
        short = 'l',
        long,
        value_name = "NUM",
        help = "Cap on fuzzy search results consumed per query (default: 200)"
    )]
    pub(crate) limit: Option<usize>,
    #[arg(
        long = "history-file",
        value_name = "FILE",
        help = "Navigation history location (default: platform data directory)"
    )]
    pub(crate) history_file: Option<PathBuf>,
    #[arg(
        long = "history-size",
        value_name = "NUM",
        help = "Number of opened files remembered (default: 200)"
    )]
    pub(crate) history_size: Option<usize>,
    #[arg(
        long = "record",
        value_name = "PATH",
        help = "Record PATH as the most recently opened file and exit"
    )]
    pub(crate) record: Option<String>,
    #[arg(
        short = 'H',
        long = "hidden",
        value_parser = BoolishValueParser::new(),
        help = "Include hidden files (default: enabled)"
    )]
    pub(crate) hidden: Option<bool>,
    #[arg(
        short = 's',
        long = "follow-symlinks",
        value_parser = BoolishValueParser::new(),
        help = "Follow symbolic links while scanning (default: disabled)"
    )]
    pub(crate) follow_symlinks: Option<bool>,
    #[arg(
        long = "respect-ignore-files",
        value_parser = BoolishValueParser::new(),
        help = "Respect .ignore files (default: enabled)"
    )]
    pub(crate) respect_ignore_files: Option<bool>,
    #[arg(
        long = "git-ignore",
        value_parser = BoolishValueParser::new(),
        help = "Respect .gitignore files (default: enabled)"
    )]
    pub(crate) git_ignore: Option<bool>,
    #[arg(
        long = "git-global",
        value_parser = BoolishValueParser::new(),
        help = "Respect global gitignore settings (default: enabled)"
    )]
    pub(crate) git_global: Option<bool>,
    #[arg(
        long = "git-exclude",
        value_parser = BoolishValueParser::new(),
        help = "Respect git exclude files (default: enabled)"
    )]
    pub(crate) git_exclude: Option<bool>,
    #[arg(
        short = 'j',
        long,
        value_name = "NUM",
        help = "Limit the number of scanning threads (default: automatic)"
    )]
    pub(crate) threads: Option<usize>,
    #[arg(
        short = 'd',
        long = "max-depth",
        value_name = "NUM",
        help = "Limit directory traversal depth (default: unlimited)"
    )]
    pub(crate) max_depth: Option<usize>,
    #[arg(
        long = "extensions",
        value_delimiter = ',',
        value_name = "EXT",
        help = "Restrict search to specific file extensions (default: all)"
    )]
    pub(crate) extensions: Option<Vec<String>>,
    #[arg(
        long = "global-ignores",
        value_delimiter = ',',
        value_name = "NAME",
        help = "Comma-separated directory names to always ignore (default: .git,node_modules,target,.venv)"
    )]
    pub(crate) global_ignores: Option<Vec<String>>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the ranked list"
    )]
    pub(crate) output: OutputFormat,
}
