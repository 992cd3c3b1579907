//! # Shared Utility Functions
//!
//! Small helpers used by the console when displaying records and parsing form input.
//!
//! - [`short_reference`] - Tail of a storefront id, upper-cased, for order numbers
//! - [`split_list`] - Comma-separated form input to a list
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{short_reference, split_list};
//!
//! assert_eq!(short_reference("665f1c2e9a7b3d0012ab34cd", 6), "AB34CD");
//! assert_eq!(split_list(" S, M ,L"), vec!["S", "M", "L"]);
//! ```

/// Last `len` characters of an id, upper-cased.
///
/// Ids shorter than `len` are returned whole.
pub fn short_reference(id: &str, len: usize) -> String {
    let skip = id.chars().count().saturating_sub(len);
    id.chars().skip(skip).collect::<String>().to_uppercase()
}

/// Split comma-separated input into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
