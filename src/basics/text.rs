/// Upper-case `input` when `to_upper` is set, lower-case it otherwise.
pub fn format_string(input: &str, to_upper: bool) -> String {
    if to_upper {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}

/// Upper-cases, same as `format_string(input, true)`.
pub fn format_string_default(input: &str) -> String {
    format_string(input, true)
}
