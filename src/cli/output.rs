use anyhow::Result;
use quickopen::RankedItem;
use serde_json::json;

/// Print a plain-text listing with group headers.
pub(crate) fn print_plain(items: &[RankedItem]) {
    if items.is_empty() {
        println!("No matches");
        return;
    }

    for item in items {
        if let Some(group) = item.group {
            println!("{}:", group.label());
        }
        println!("  {}", item.path);
    }
}

/// Format the ranked list as a JSON string.
pub(crate) fn format_items_json(items: &[RankedItem]) -> Result<String> {
    let payload: Vec<_> = items
        .iter()
        .map(|item| {
            json!({
                "path": item.path,
                "label": item.label,
                "group": item.group.map(|group| group.label()),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the ranked list.
pub(crate) fn print_json(items: &[RankedItem]) -> Result<()> {
    println!("{}", format_items_json(items)?);
    Ok(())
}
