/// Validate an import specifier or package name given on the command line.
///
/// # Errors
///
/// Returns an error for empty values and values containing whitespace.
pub fn parse_specifier(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Specifier cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) && !s.contains('>') {
        return Err(format!("Invalid specifier '{s}': whitespace is not allowed"));
    }

    Ok(s.to_string())
}
