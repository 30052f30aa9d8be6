use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("phone pattern compiles"));

pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Per-field error messages. A field that passed its rule has no entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Records `rule`'s failure for `field`, if any.
    pub fn check(&mut self, field: F, rule: Result<(), &'static str>) {
        if let Err(message) = rule {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }
}

/// Trims like JavaScript's `String.prototype.trim`, which also drops U+FEFF.
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length as the browser reports it for `<textarea>` values (UTF-16 units).
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if trim_blank(value).is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), &'static str> {
    required(value, "Email is required")?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err("Please enter a valid email address")
    }
}

pub fn phone(value: &str) -> Result<(), &'static str> {
    required(value, "Phone number is required")?;
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err("Please enter a valid phone number")
    }
}

pub fn description(value: &str) -> Result<(), &'static str> {
    required(value, "Business description is required")?;
    if text_length(value) < MIN_DESCRIPTION_CHARS {
        Err("Please provide at least 20 characters describing your business")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_missing() {
        assert_eq!(required("   \t", "Hall is required"), Err("Hall is required"));
        assert_eq!(required(" x ", "Hall is required"), Ok(()));
    }

    #[test]
    fn byte_order_mark_is_blank() {
        assert_eq!(required("\u{FEFF}", "First name is required"), Err("First name is required"));
        assert_eq!(required(" \u{FEFF}\n", "First name is required"), Err("First name is required"));
        assert_eq!(trim_blank("\u{FEFF}Ada\u{FEFF} "), "Ada");
    }

    #[test]
    fn email_shapes() {
        for ok in ["ada@example.com", "a.b@c.d", "first+tag@uni.edu.ng"] {
            assert_eq!(email(ok), Ok(()), "{ok}");
        }
        for bad in ["bad", "ada@example", "@example.com", "ada@.com", "a da@example.com", " ada@example.com"] {
            assert_eq!(email(bad), Err("Please enter a valid email address"), "{bad}");
        }
        assert_eq!(email("  "), Err("Email is required"));
    }

    #[test]
    fn phone_needs_ten_qualifying_characters() {
        for ok in ["+234 803 123 4567", "(080) 312-34567", "0803123456"] {
            assert_eq!(phone(ok), Ok(()), "{ok}");
        }
        for bad in ["080312345", "+23480x1234567", "phone number", "++2348031234567"] {
            assert_eq!(phone(bad), Err("Please enter a valid phone number"), "{bad}");
        }
        assert_eq!(phone(""), Err("Phone number is required"));
    }

    #[test]
    fn description_boundary_is_twenty_characters() {
        assert!(description(&"a".repeat(19)).is_err());
        assert_eq!(description(&"a".repeat(20)), Ok(()));
        // counted in UTF-16 units, not bytes
        assert!(description(&"é".repeat(19)).is_err());
        assert_eq!(description(&"é".repeat(20)), Ok(()));
        assert_eq!(description("   "), Err("Business description is required"));
    }

    #[test]
    fn astral_characters_count_twice() {
        assert_eq!(text_length("😀"), 2);
        assert_eq!(description(&"😀".repeat(10)), Ok(()));
        let nineteen = format!("{}a", "😀".repeat(9));
        assert_eq!(text_length(&nineteen), 19);
        assert!(description(&nineteen).is_err());
    }

    #[test]
    fn clearing_one_field_leaves_others() {
        let mut errors = FieldErrors::new();
        errors.insert(1u8, "one");
        errors.insert(2u8, "two");
        assert!(errors.clear(1));
        assert!(!errors.clear(1));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![2]);
        assert_eq!(errors.get(2), Some("two"));
    }
}
