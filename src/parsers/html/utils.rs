/// ASCII whitespace, as used to separate tokens in HTML attribute values
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// Splits an attribute value into its whitespace-separated tokens
pub fn split_tokens(value: &str) -> Vec<String> {
    value
        .split(WHITESPACES)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
