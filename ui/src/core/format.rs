//! Formatting helpers for presenting enum-like service values.

/// Upper-case the first character and lower-case the rest.
///
/// `"EMAIL"` becomes `"Email"` and `"IN-APP"` becomes `"In-app"`. Separators
/// are left alone, so only the very first character is ever capitalised.
pub fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_matches_table_labels() {
        assert_eq!(title_case("EMAIL"), "Email");
        assert_eq!(title_case("IN-APP"), "In-app");
        assert_eq!(title_case("DELIVERED"), "Delivered");
        assert_eq!(title_case("PENDING"), "Pending");
    }

    #[test]
    fn title_case_handles_short_input() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("x"), "X");
    }
}
