//! Path template validation
//!
//! Rejects path fragments containing characters that are illegal in Windows
//! file names. The rule is applied on every platform so a catalog behaves the
//! same wherever it is used.

use serde_json::Value;

/// Characters that may not appear in a path template
pub const RESERVED_PATH_CHARS: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Validates file path fragments from a catalog
pub struct PathValidator;

impl PathValidator {
    /// Whether `fragment` is free of reserved characters
    ///
    /// The empty string is structurally valid; an empty file name is rejected
    /// later, once the path has been substituted.
    pub fn is_valid(fragment: &str) -> bool {
        !fragment.contains(&RESERVED_PATH_CHARS[..])
    }

    /// Validate a dynamically typed value; anything but a string is invalid
    pub fn is_valid_value(value: &Value) -> bool {
        match value {
            Value::String(fragment) => Self::is_valid(fragment),
            _ => false,
        }
    }

    /// First reserved character found in `fragment`, if any
    pub fn first_reserved(fragment: &str) -> Option<char> {
        fragment.chars().find(|c| RESERVED_PATH_CHARS.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_file_names() {
        assert!(PathValidator::is_valid("file.txt"));
        assert!(PathValidator::is_valid("README"));
        assert!(PathValidator::is_valid("nested/path/name.js"));
        assert!(PathValidator::is_valid(""));
        assert!(PathValidator::is_valid("$TM_FILENAME_BASE.tsx"));
    }

    #[test]
    fn test_invalid_file_names() {
        assert!(!PathValidator::is_valid("file<name>.txt"));
        assert!(!PathValidator::is_valid("name|pipe.js"));
        assert!(!PathValidator::is_valid("bad:file.ts"));
        assert!(!PathValidator::is_valid("invalid?file.txt"));
        assert!(!PathValidator::is_valid("what*is*that.txt"));
        assert!(!PathValidator::is_valid("\"quoted\".ts"));
    }

    #[test]
    fn test_non_string_values_are_invalid() {
        assert!(!PathValidator::is_valid_value(&Value::Null));
        assert!(!PathValidator::is_valid_value(&json!(123)));
        assert!(!PathValidator::is_valid_value(&json!({})));
        assert!(!PathValidator::is_valid_value(&json!([])));
        assert!(!PathValidator::is_valid_value(&json!(true)));
    }

    #[test]
    fn test_string_values_follow_string_rule() {
        assert!(PathValidator::is_valid_value(&json!("index.ts")));
        assert!(!PathValidator::is_valid_value(&json!("in:dex.ts")));
    }

    #[test]
    fn test_first_reserved() {
        assert_eq!(PathValidator::first_reserved("a/b?c*"), Some('?'));
        assert_eq!(PathValidator::first_reserved("a/b/c"), None);
    }
}
