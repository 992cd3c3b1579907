//! Validation utilities for form input
//!
//! Field checks run before any request is built. Each check returns the
//! parsed value or a [`FieldError`] naming the offending field, so errors can
//! be shown next to it.

use std::fmt;

use shared::Category;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All failed checks of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Record the error side of a check, passing the value through.
    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(FieldError::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Non-empty after trimming
pub fn require_text(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{} is required", label(field))));
    }
    Ok(trimmed.to_string())
}

/// A finite, non-negative amount
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{} is required", label(field))));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| FieldError::new(field, format!("{} must be a number", label(field))))?;
    if !amount.is_finite() {
        return Err(FieldError::new(field, format!("{} must be a number", label(field))));
    }
    if amount < 0.0 {
        return Err(FieldError::new(field, format!("{} cannot be negative", label(field))));
    }
    Ok(amount)
}

/// Like [`parse_amount`] but blank input means "not set"
pub fn parse_optional_amount(field: &'static str, value: &str) -> Result<Option<f64>, FieldError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(field, value).map(Some)
}

/// A whole, non-negative count
pub fn parse_count(field: &'static str, value: &str) -> Result<u32, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{} is required", label(field))));
    }
    if trimmed.starts_with('-') {
        return Err(FieldError::new(field, format!("{} cannot be negative", label(field))));
    }
    trimmed
        .parse()
        .map_err(|_| FieldError::new(field, format!("{} must be a whole number", label(field))))
}

/// One of the storefront categories
pub fn parse_category(field: &'static str, value: &str) -> Result<Category, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "Select a category"));
    }
    value.parse().map_err(|_| {
        FieldError::new(
            field,
            format!(
                "Category must be one of: {}",
                Category::all()
                    .iter()
                    .map(Category::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )
    })
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<String, FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::new("email", "Email is required"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(FieldError::new("email", "Invalid email format"));
    };

    if local.is_empty() {
        return Err(FieldError::new("email", "Email username cannot be empty"));
    }

    if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(FieldError::new("email", "Invalid email domain"));
    }

    Ok(email.to_string())
}

fn label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("admin@cultures.in").is_ok());
        assert!(validate_email("user@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("test@").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_amount_parsing() {
        assert_eq!(parse_amount("price", "499"), Ok(499.0));
        assert_eq!(parse_amount("price", " 12.5 "), Ok(12.5));
        assert_eq!(parse_amount("price", "0"), Ok(0.0));
        assert_eq!(
            parse_amount("price", "-5").unwrap_err().message,
            "Price cannot be negative"
        );
        assert_eq!(parse_amount("price", "").unwrap_err().message, "Price is required");
        assert!(parse_amount("price", "abc").is_err());
        assert!(parse_amount("price", "NaN").is_err());
    }

    #[test]
    fn test_optional_amount() {
        assert_eq!(parse_optional_amount("discountPrice", "  "), Ok(None));
        assert_eq!(parse_optional_amount("discountPrice", "99"), Ok(Some(99.0)));
        assert!(parse_optional_amount("discountPrice", "-1").is_err());
    }

    #[test]
    fn test_count_parsing() {
        assert_eq!(parse_count("stock", "12"), Ok(12));
        assert_eq!(parse_count("stock", "-3").unwrap_err().message, "Stock cannot be negative");
        assert!(parse_count("stock", "1.5").is_err());
        assert!(parse_count("stock", "").is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(parse_category("category", "kids"), Ok(Category::Kids));
        assert_eq!(parse_category("category", "").unwrap_err().message, "Select a category");
        assert!(parse_category("category", "pets").is_err());
    }

    #[test]
    fn test_errors_collect_per_field() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.check(require_text("name", "  ")), None);
        assert_eq!(errors.check(parse_count("stock", "4")), Some(4));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("name"), Some("Name is required"));
        assert_eq!(errors.for_field("stock"), None);
        assert_eq!(errors.to_string(), "name: Name is required");
    }
}
