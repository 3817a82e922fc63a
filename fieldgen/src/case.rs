//! Key normalization: turning schema keys into constant-style names.

use alloc::string::String;
use alloc::vec::Vec;

/// Convert an identifier to `snake_case`.
///
/// Word boundaries are a lowercase letter followed by an uppercase one
/// (`firstName` → `first_name`) and the last capital of an acronym run that
/// starts a new word (`HTTPServer` → `http_server`). Existing underscores,
/// digits and other characters are kept as they are.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();

    let mut split = Vec::with_capacity(chars.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        split.push(ch);
        if ch.is_ascii_lowercase() && chars.get(i + 1).is_some_and(|c| c.is_ascii_uppercase()) {
            split.push('_');
        }
    }

    let mut result = String::with_capacity(split.len() + 4);
    for (i, &ch) in split.iter().enumerate() {
        result.push(ch);
        let acronym_end = ch.is_ascii_uppercase()
            && split.get(i + 1).is_some_and(|c| c.is_ascii_uppercase())
            && split.get(i + 2).is_some_and(|c| c.is_ascii_lowercase());
        if acronym_end {
            result.push('_');
        }
    }

    result.to_lowercase()
}

/// Convert an identifier to `SCREAMING_SNAKE_CASE`, the form used for every
/// generated descriptor name.
pub fn to_constant_case(name: &str) -> String {
    to_snake_case(name).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case() {
        assert_eq!(to_snake_case("camelCase"), "camel_case");
        assert_eq!(to_snake_case("innerRoutes"), "inner_routes");
    }

    #[test]
    fn pascal_case() {
        assert_eq!(to_snake_case("PascalCase"), "pascal_case");
    }

    #[test]
    fn snake_case_is_unchanged() {
        assert_eq!(to_snake_case("snake_case"), "snake_case");
    }

    #[test]
    fn acronyms() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("parseJSONBody"), "parse_json_body");
    }

    #[test]
    fn digits_do_not_split() {
        assert_eq!(to_snake_case("place1"), "place1");
        assert_eq!(to_constant_case("level2Name"), "LEVEL2NAME");
    }

    #[test]
    fn constant_case() {
        assert_eq!(to_constant_case("productId"), "PRODUCT_ID");
        assert_eq!(to_constant_case("name"), "NAME");
        assert_eq!(to_constant_case(""), "");
    }
}
