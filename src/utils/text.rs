/// Splits period-delimited free text ("Rust. SQL. Git") into list items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(". ")
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
