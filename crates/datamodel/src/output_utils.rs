pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// Render `items` as an indented `  * item` list, one per line.
pub(crate) fn bulleted<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter()
        .map(|item| format!("  * {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
