use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    println!("  Root: {}", config.root.display());
    println!(
        "  Include hidden: {}",
        bool_to_word(config.filesystem.include_hidden)
    );
    println!(
        "  Follow symlinks: {}",
        bool_to_word(config.filesystem.follow_symlinks)
    );
    println!(
        "  Respect ignore files: {}",
        bool_to_word(config.filesystem.respect_ignore_files)
    );
    println!(
        "  Git ignore: {}",
        bool_to_word(config.filesystem.git_ignore)
    );
    println!(
        "  Git global: {}",
        bool_to_word(config.filesystem.git_global)
    );
    println!(
        "  Git exclude: {}",
        bool_to_word(config.filesystem.git_exclude)
    );
    match config.filesystem.max_depth {
        Some(depth) => println!("  Max depth: {depth}"),
        None => println!("  Max depth: unlimited"),
    }
    match &config.filesystem.allowed_extensions {
        Some(exts) if !exts.is_empty() => {
            println!("  Allowed extensions: {}", exts.join(", "));
        }
        _ => println!("  Allowed extensions: (all)"),
    }
    if let Some(threads) = config.filesystem.threads {
        println!("  Threads: {threads}");
    }
    if !config.filesystem.global_ignores.is_empty() {
        println!(
            "  Global ignores: {}",
            config.filesystem.global_ignores.join(", ")
        );
    }
    println!("  Result limit: {}", config.picker.limit);
    println!("  History size: {}", config.picker.history_size);
    println!("  History file: {}", config.picker.history_file.display());
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
